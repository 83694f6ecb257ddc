use super::euler::{Euler, EulerOrder};
use crate::math::tolerance::DEGENERATE_EPSILON;
use crate::math::{Quaternion, Vector3};

/// A rotation of `angle` radians about `axis`.
///
/// `axis` should be unit length but is normalized on conversion. An axis
/// shorter than [`DEGENERATE_EPSILON`] is read as the identity rotation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub angle: f64,
    pub axis: Vector3,
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::identity()
    }
}

impl AxisAngle {
    pub const fn new(angle: f64, axis: Vector3) -> Self {
        Self { angle, axis }
    }

    pub const fn identity() -> Self {
        Self::new(0.0, Vector3::X)
    }

    /// Extracts the angle in `[0, π]` and a unit axis from a unit
    /// quaternion. The sign of `w` is folded into the axis so that `q` and
    /// `-q` give the same result.
    ///
    /// Rotations too small to have a well-defined axis give
    /// [`AxisAngle::identity`].
    pub fn from_quaternion(q: Quaternion) -> Self {
        let mut s = (1.0 - q.w * q.w).max(0.0).sqrt();
        let angle = 2.0 * s.atan2(q.w.abs());

        if s < DEGENERATE_EPSILON {
            log::trace!("axis_angle: near-zero rotation (s = {s}), using identity");
            return Self::identity();
        }

        if q.w < 0.0 {
            s = -s;
        }

        Self::new(angle, q.vector_part().divide_scalar(s))
    }

    pub fn to_quaternion(&self) -> Quaternion {
        let length = self.axis.length();
        if length < DEGENERATE_EPSILON {
            log::trace!("axis_angle: degenerate axis {:?}, using identity", self.axis);
            return Quaternion::IDENTITY;
        }

        let axis = self.axis.divide_scalar(length);
        let (sin, cos) = (self.angle / 2.0).sin_cos();
        Quaternion::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    pub fn from_euler(euler: &Euler) -> Self {
        Self::from_quaternion(euler.to_quaternion())
    }

    pub fn to_euler(&self, order: EulerOrder) -> Euler {
        Euler::from_quaternion(self.to_quaternion(), order)
    }

    /// Composes `a` after `b` (`b` applied first) through quaternions.
    pub fn multiply(a: &Self, b: &Self) -> Self {
        Self::from_quaternion(a.to_quaternion() * b.to_quaternion())
    }
}

impl From<Quaternion> for AxisAngle {
    fn from(q: Quaternion) -> Self {
        Self::from_quaternion(q)
    }
}

impl From<AxisAngle> for Quaternion {
    fn from(axis_angle: AxisAngle) -> Self {
        axis_angle.to_quaternion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{about, init_logging, same_rotation, unit_quaternion_strategy};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn identity_quaternion_gives_zero_angle_about_x() {
        init_logging();
        let aa = AxisAngle::from_quaternion(Quaternion::IDENTITY);
        assert_eq!(aa, AxisAngle::new(0.0, Vector3::X));
    }

    #[test]
    fn tiny_rotation_snaps_to_identity() {
        let aa = AxisAngle::from_quaternion(about(Vector3::Z, 1e-6));
        assert_eq!(aa, AxisAngle::identity());
    }

    #[test]
    fn extraction_recovers_axis_and_angle() {
        let axis = Vector3::new(1.0, -2.0, 2.0).normalize();
        let aa = AxisAngle::from_quaternion(about(axis, 1.2));
        assert_abs_diff_eq!(aa.angle, 1.2, epsilon = EPSILON);
        assert_abs_diff_eq!(aa.axis, axis, epsilon = EPSILON);
    }

    #[test]
    fn negated_quaternion_gives_same_axis_angle() {
        let q = about(Vector3::new(0.0, 1.0, 1.0), 2.2);
        let aa = AxisAngle::from_quaternion(q);
        let negated = AxisAngle::from_quaternion(-q);
        assert_abs_diff_eq!(aa.angle, negated.angle, epsilon = EPSILON);
        assert_abs_diff_eq!(aa.axis, negated.axis, epsilon = EPSILON);
        assert!(negated.angle <= PI);
    }

    #[test]
    fn conversion_normalizes_axis() {
        let q = AxisAngle::new(FRAC_PI_2, Vector3::new(0.0, 0.0, 5.0)).to_quaternion();
        assert_abs_diff_eq!(q, about(Vector3::Z, FRAC_PI_2), epsilon = EPSILON);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn zero_axis_converts_to_identity() {
        init_logging();
        let q = AxisAngle::new(1.0, Vector3::ZERO).to_quaternion();
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn multiply_applies_right_operand_first() {
        let a = AxisAngle::new(FRAC_PI_2, Vector3::X);
        let b = AxisAngle::new(FRAC_PI_2, Vector3::Z);
        let combined = AxisAngle::multiply(&a, &b).to_quaternion();
        assert_abs_diff_eq!(Vector3::X.apply_quaternion(combined), Vector3::Z, epsilon = EPSILON);
    }

    #[test]
    fn multiply_of_coaxial_rotations_adds_angles() {
        let a = AxisAngle::new(0.3, Vector3::Y);
        let b = AxisAngle::new(0.5, Vector3::Y);
        let combined = AxisAngle::multiply(&a, &b);
        assert_abs_diff_eq!(combined.angle, 0.8, epsilon = EPSILON);
        assert_abs_diff_eq!(combined.axis, Vector3::Y, epsilon = EPSILON);
    }

    #[test]
    fn euler_conversions_agree() {
        let euler = Euler::new(0.2, 0.4, -0.3, EulerOrder::Zxy);
        let aa = AxisAngle::from_euler(&euler);
        assert!(same_rotation(aa.to_quaternion(), euler.to_quaternion(), EPSILON));

        let back = aa.to_euler(EulerOrder::Zxy);
        assert_abs_diff_eq!(back.x, euler.x, epsilon = EPSILON);
        assert_abs_diff_eq!(back.y, euler.y, epsilon = EPSILON);
        assert_abs_diff_eq!(back.z, euler.z, epsilon = EPSILON);
    }

    proptest! {
        #[test]
        fn quaternion_round_trips_through_axis_angle(q in unit_quaternion_strategy()) {
            let back = AxisAngle::from_quaternion(q).to_quaternion();
            // Rotations below the degenerate threshold snap to identity.
            let tolerance = if (1.0 - q.w * q.w).max(0.0).sqrt() < DEGENERATE_EPSILON { 1e-3 } else { 1e-6 };
            prop_assert!(same_rotation(back, q, tolerance));
        }
    }
}
