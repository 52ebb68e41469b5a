use crate::error::{ProfileError, Result};
use crate::math::{lerp, smoothstep};

/// A single control pair of a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Normalized height in `[0, 1]`.
    pub height: f64,
    /// Radius as a fraction of the base radius at this height.
    pub radius: f64,
}

impl ProfilePoint {
    /// Creates a new control pair.
    #[must_use]
    pub fn new(height: f64, radius: f64) -> Self {
        Self { height, radius }
    }
}

/// Height-to-radius control curve for a surface of revolution.
///
/// Control points are strictly increasing in height and span the full
/// `[0, 1]` domain. Between two neighbouring control points the radius is
/// blended with a smoothstep, so the silhouette has no slope discontinuity
/// at the control heights.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<ProfilePoint>,
}

impl Profile {
    /// Creates a profile from control points.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, any value is not
    /// finite, a radius is negative, the first height is not `0.0`, the last
    /// height is not `1.0`, or heights are not strictly increasing.
    ///
    /// A radius of zero is allowed and collapses its ring onto the axis.
    #[allow(clippy::float_cmp)]
    pub fn new(points: Vec<ProfilePoint>) -> Result<Self> {
        if points.len() < 2 {
            return Err(ProfileError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.height.is_finite() || !p.radius.is_finite())
        {
            return Err(ProfileError::NonFinite { index }.into());
        }
        if let Some(index) = points.iter().position(|p| p.radius < 0.0) {
            return Err(ProfileError::NegativeRadius { index }.into());
        }

        let first = points[0].height;
        if first != 0.0 {
            return Err(ProfileError::DomainStart { height: first }.into());
        }
        let last = points[points.len() - 1].height;
        if last != 1.0 {
            return Err(ProfileError::DomainEnd { height: last }.into());
        }

        if let Some(index) = points
            .windows(2)
            .position(|w| w[1].height <= w[0].height)
        {
            return Err(ProfileError::NotIncreasing { index: index + 1 }.into());
        }

        Ok(Self { points })
    }

    /// The amphora silhouette: narrow foot, wide belly, pinched neck, flared lip.
    #[must_use]
    pub fn amphora() -> Self {
        Self {
            points: vec![
                ProfilePoint::new(0.0, 0.5),
                ProfilePoint::new(0.1, 0.4),
                ProfilePoint::new(0.5, 0.8),
                ProfilePoint::new(0.7, 0.3),
                ProfilePoint::new(1.0, 0.5),
            ],
        }
    }

    /// Returns the control points in height order.
    #[must_use]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Returns the interpolated radius fraction at normalized height `t`.
    ///
    /// Every segment whose closed height range contains `t` is evaluated and
    /// the last one wins, so a `t` sitting exactly on a shared control height
    /// takes the value of the upper segment. Both neighbours agree there, the
    /// tie only fixes which one is computed.
    ///
    /// A `t` outside `[0, 1]` matches no segment and yields `0.0`.
    #[must_use]
    pub fn radius_at(&self, t: f64) -> f64 {
        let mut radius = 0.0;
        for seg in self.points.windows(2) {
            let (lo, hi) = (seg[0], seg[1]);
            if lo.height <= t && t <= hi.height {
                let u = (t - lo.height) / (hi.height - lo.height);
                radius = lerp(lo.radius, hi.radius, smoothstep(u));
            }
        }
        radius
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::amphora()
    }
}
