use crate::error::{AnimationError, Result};
use crate::math::{ramp, Point3};

/// A closed square trajectory in the XZ plane.
///
/// Each axis follows a trapezoid wave built from four clamped ramps:
///
/// `f(v) = max(0, v) − max(0, v − 1) − max(0, v − 2) + max(0, v − 3) − 0.5`
///
/// The z wave lags the x wave by a quarter period, so exactly one axis moves
/// at a time and the point walks the four edges of the unit square centered
/// at the origin. Unscaled corners are reached at quarter periods:
///
/// | time     | position          |
/// |----------|-------------------|
/// | `0`      | `(-0.5, 0, -0.5)` |
/// | `P / 4`  | `( 0.5, 0, -0.5)` |
/// | `P / 2`  | `( 0.5, 0,  0.5)` |
/// | `3P / 4` | `(-0.5, 0,  0.5)` |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePath {
    period: f64,
}

impl SquarePath {
    /// Creates a square path that completes one loop every `period` time units.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not positive and finite.
    pub fn new(period: f64) -> Result<Self> {
        if !period.is_finite() || period <= 0.0 {
            return Err(AnimationError::InvalidPeriod(period).into());
        }
        Ok(Self { period })
    }

    /// Returns the loop period.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Returns the unscaled position at `elapsed` time units.
    #[must_use]
    pub fn position_at(&self, elapsed: f64) -> Point3 {
        let t = elapsed.rem_euclid(self.period) / self.period;

        // `%` keeps the sign of the dividend, so `b` sits in [-1, 0) during
        // the first quarter, where the z wave holds at its low plateau.
        let a = (4.0 * t) % 4.0;
        let b = (4.0 * t - 1.0) % 4.0;

        Point3::new(trapezoid(a), 0.0, trapezoid(b))
    }
}

fn trapezoid(v: f64) -> f64 {
    ramp(v) - ramp(v - 1.0) - ramp(v - 2.0) + ramp(v - 3.0) - 0.5
}
