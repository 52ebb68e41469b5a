/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Cubic ease `u²(3 − 2u)`, flat at both ends of `[0, 1]`.
#[must_use]
pub fn smoothstep(u: f64) -> f64 {
    u * u * (3.0 - 2.0 * u)
}

/// Blends `a` towards `b` by `s`.
///
/// Written as `a·(1 − s) + b·s` so that `s = 0` yields `a` and `s = 1` yields
/// `b` bit-for-bit.
#[must_use]
pub fn lerp(a: f64, b: f64, s: f64) -> f64 {
    a * (1.0 - s) + b * s
}

/// Clamped ramp `max(0, v)`.
#[must_use]
pub fn ramp(v: f64) -> f64 {
    v.max(0.0)
}
