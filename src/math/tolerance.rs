//! Thresholds used where the math falls back to a fixed answer instead of
//! dividing by something close to zero.

/// Below this a length, sine or scale factor is treated as zero.
///
/// Used by [`Quaternion::shortest_arc`](super::Quaternion::shortest_arc) for
/// antiparallel inputs, by [`AxisAngle`](crate::rotation::AxisAngle) for
/// near-identity quaternions and degenerate axes, and by the swing/twist split.
pub const DEGENERATE_EPSILON: f64 = 1e-4;

/// When the cosine between two quaternions exceeds this, slerp falls back to
/// normalized linear interpolation.
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

/// When the sine of the middle Euler angle exceeds this in magnitude the
/// decomposition is treated as gimbal locked and the third angle is pinned
/// to zero.
///
/// The band spans middle angles within about 4.5e-4 rad of ±π/2. Inside it the
/// pinned angles reproduce the rotation to about 1e-5 per quaternion
/// component.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 0.9999999;
