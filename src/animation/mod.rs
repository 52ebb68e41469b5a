mod driver;

pub use driver::Driver;

use crate::error::{AnimationError, Result};
use crate::geometry::SquarePath;
use crate::math::Vector3;
use crate::tessellation::RevolutionParams;

/// How the elapsed-time counter advances on each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeStep {
    /// Advance by a constant amount per tick and ignore the host's `dt`.
    ///
    /// Animation speed is tied to the tick rate: a host ticking at 30 Hz
    /// plays the loop at half the speed of one ticking at 60 Hz.
    Fixed(f64),
    /// Advance by the `dt` the host passes to each tick.
    ///
    /// Negative or non-finite `dt` advances by zero.
    Measured,
}

impl Default for TimeStep {
    fn default() -> Self {
        Self::Fixed(0.033)
    }
}

/// Configuration for the [`Driver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverConfig {
    /// Ring grid of the amphora mesh.
    pub mesh: RevolutionParams,
    /// How elapsed time advances per tick.
    pub time_step: TimeStep,
    /// Time units for one loop around the square path.
    pub path_period: f64,
    /// Scale applied to the unit square path.
    pub path_scale: f64,
    /// Length of the normal overlay segments.
    pub normal_length: f64,
}

impl DriverConfig {
    /// Checks the animation settings. Mesh parameters are checked when the
    /// mesh is built.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is not positive and finite, a fixed
    /// time step is not positive and finite, the path scale is not finite, or
    /// the normal length is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        SquarePath::new(self.path_period)?;
        if let TimeStep::Fixed(step) = self.time_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(AnimationError::InvalidTimeStep(step).into());
            }
        }
        if !self.path_scale.is_finite() {
            return Err(AnimationError::InvalidScale(self.path_scale).into());
        }
        if !self.normal_length.is_finite() || self.normal_length < 0.0 {
            return Err(AnimationError::InvalidNormalLength(self.normal_length).into());
        }
        Ok(())
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            mesh: RevolutionParams::default(),
            time_step: TimeStep::default(),
            path_period: 4.0,
            path_scale: 200.0,
            normal_length: 10.0,
        }
    }
}

/// Elapsed time and the translation derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    elapsed: f64,
    offset: Vector3,
}

impl AnimationState {
    /// Returns the elapsed time since initialisation.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Returns the current translation of the mesh.
    #[must_use]
    pub fn offset(&self) -> Vector3 {
        self.offset
    }
}
