use thiserror::Error;

/// Top-level error type for the amphora crate.
#[derive(Debug, Error)]
pub enum AmphoraError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Errors raised while validating a height-to-radius profile.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("profile needs at least 2 control points, got {count}")]
    TooFewPoints { count: usize },

    #[error("control point {index} is not finite")]
    NonFinite { index: usize },

    #[error("profile must start at height 0.0, starts at {height}")]
    DomainStart { height: f64 },

    #[error("profile must end at height 1.0, ends at {height}")]
    DomainEnd { height: f64 },

    #[error("control point {index} has a negative radius")]
    NegativeRadius { index: usize },

    #[error("control point {index} does not increase in height")]
    NotIncreasing { index: usize },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to the animation driver and its path.
#[derive(Debug, Error, PartialEq)]
pub enum AnimationError {
    #[error("path period must be positive and finite, got {0}")]
    InvalidPeriod(f64),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("path scale must be finite, got {0}")]
    InvalidScale(f64),

    #[error("normal overlay length must be non-negative and finite, got {0}")]
    InvalidNormalLength(f64),
}

/// Convenience type alias for results using [`AmphoraError`].
pub type Result<T> = std::result::Result<T, AmphoraError>;
