//! Rotation representations
//!
//! [`Euler`] and [`AxisAngle`] are the human-editable forms shown in property
//! panels; [`Quaternion`] is the working form. [`Rotation`] holds either
//! editable form and converts through quaternions.

mod axis_angle;
mod euler;

pub use axis_angle::AxisAngle;
pub use euler::{Axis, Euler, EulerOrder};

use crate::math::Quaternion;
use thiserror::Error;

/// Failure to parse one of the textual enums of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown Euler order `{0}`, expected one of xyz, xzy, yxz, yzx, zxy, zyx")]
    EulerOrder(String),
    #[error("unknown angle unit `{0}`, expected radians or degrees")]
    AngleUnit(String),
    #[error("unknown distance unit `{0}`, expected meters, centimeters, feet or inches")]
    DistanceUnit(String),
}

/// Which editable form a rotation is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationKind {
    Euler(EulerOrder),
    AxisAngle,
}

impl Default for RotationKind {
    fn default() -> Self {
        Self::Euler(EulerOrder::default())
    }
}

/// A rotation in one of its editable forms.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    #[cfg_attr(feature = "serde", serde(rename = "euler"))]
    Euler(Euler),
    #[cfg_attr(feature = "serde", serde(rename = "axis-angle"))]
    AxisAngle(AxisAngle),
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Euler(Euler::default())
    }
}

impl Rotation {
    pub fn kind(&self) -> RotationKind {
        match self {
            Self::Euler(euler) => RotationKind::Euler(euler.order),
            Self::AxisAngle(_) => RotationKind::AxisAngle,
        }
    }

    pub fn to_quaternion(&self) -> Quaternion {
        match self {
            Self::Euler(euler) => euler.to_quaternion(),
            Self::AxisAngle(axis_angle) => axis_angle.to_quaternion(),
        }
    }

    pub fn from_quaternion(q: Quaternion, kind: RotationKind) -> Self {
        match kind {
            RotationKind::Euler(order) => Self::Euler(Euler::from_quaternion(q, order)),
            RotationKind::AxisAngle => Self::AxisAngle(AxisAngle::from_quaternion(q)),
        }
    }

    /// Re-expresses the same rotation in another form. Converting to the
    /// current kind returns `self` untouched.
    pub fn to_kind(&self, kind: RotationKind) -> Self {
        if self.kind() == kind {
            return *self;
        }
        Self::from_quaternion(self.to_quaternion(), kind)
    }

    /// Rotational distance in radians, see [`Quaternion::angle`].
    pub fn angle(lhs: &Self, rhs: &Self) -> f64 {
        Quaternion::angle(lhs.to_quaternion(), rhs.to_quaternion())
    }

    /// Interpolates along the shorter arc and expresses the result as `kind`.
    pub fn slerp(lhs: &Self, rhs: &Self, t: f64, kind: RotationKind) -> Self {
        Self::from_quaternion(
            Quaternion::slerp(lhs.to_quaternion(), rhs.to_quaternion(), t),
            kind,
        )
    }
}

impl From<Euler> for Rotation {
    fn from(euler: Euler) -> Self {
        Self::Euler(euler)
    }
}

impl From<AxisAngle> for Rotation {
    fn from(axis_angle: AxisAngle) -> Self {
        Self::AxisAngle(axis_angle)
    }
}

impl From<Rotation> for Quaternion {
    fn from(rotation: Rotation) -> Self {
        rotation.to_quaternion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::test_support::{about, same_rotation};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn converting_between_kinds_keeps_rotation() {
        let euler = Rotation::from(Euler::new(0.1, 0.2, 0.3, EulerOrder::Xyz));
        let axis_angle = euler.to_kind(RotationKind::AxisAngle);

        assert_eq!(axis_angle.kind(), RotationKind::AxisAngle);
        assert!(same_rotation(axis_angle.to_quaternion(), euler.to_quaternion(), EPSILON));

        let back = axis_angle.to_kind(RotationKind::Euler(EulerOrder::Xyz));
        match back {
            Rotation::Euler(e) => {
                assert_abs_diff_eq!(e.x, 0.1, epsilon = EPSILON);
                assert_abs_diff_eq!(e.y, 0.2, epsilon = EPSILON);
                assert_abs_diff_eq!(e.z, 0.3, epsilon = EPSILON);
            }
            Rotation::AxisAngle(_) => panic!("expected Euler angles"),
        }
    }

    #[test]
    fn converting_to_same_kind_is_a_no_op() {
        let rotation = Rotation::from(AxisAngle::new(0.5, Vector3::new(0.0, 3.0, 0.0)));
        assert_eq!(rotation.to_kind(RotationKind::AxisAngle), rotation);
    }

    #[test]
    fn euler_order_change_is_a_real_conversion() {
        let rotation = Rotation::from(Euler::new(0.3, 0.4, 0.5, EulerOrder::Xyz));
        let reordered = rotation.to_kind(RotationKind::Euler(EulerOrder::Zyx));
        assert_eq!(reordered.kind(), RotationKind::Euler(EulerOrder::Zyx));
        assert!(same_rotation(reordered.to_quaternion(), rotation.to_quaternion(), EPSILON));
    }

    #[test]
    fn angle_between_rotations_works() {
        let a = Rotation::from(AxisAngle::new(0.2, Vector3::X));
        let b = Rotation::from(Euler::new(1.0, 0.0, 0.0, EulerOrder::Yzx));
        assert_abs_diff_eq!(Rotation::angle(&a, &b), 0.8, epsilon = 1e-7);
    }

    #[test]
    fn slerp_between_rotations_returns_requested_kind() {
        let a = Rotation::from(AxisAngle::new(0.0, Vector3::Z));
        let b = Rotation::from(AxisAngle::new(FRAC_PI_2, Vector3::Z));
        let mid = Rotation::slerp(&a, &b, 0.5, RotationKind::AxisAngle);
        assert!(same_rotation(mid.to_quaternion(), about(Vector3::Z, FRAC_PI_2 / 2.0), EPSILON));
        assert_eq!(mid.kind(), RotationKind::AxisAngle);
    }

    #[test]
    fn parse_errors_name_the_input() {
        let err = ParseError::EulerOrder("abc".to_owned());
        assert!(err.to_string().contains("`abc`"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rotation_serializes_with_type_tag() {
        let rotation = Rotation::from(AxisAngle::new(1.5, Vector3::Y));
        let json = serde_json::to_value(rotation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "axis-angle",
                "angle": 1.5,
                "axis": { "x": 0.0, "y": 1.0, "z": 0.0 }
            })
        );

        let parsed: Rotation =
            serde_json::from_str(r#"{ "type": "euler", "x": 0.0, "y": 1.0, "z": 0.0, "order": "xyz" }"#)
                .unwrap();
        assert_eq!(parsed, Rotation::Euler(Euler::new(0.0, 1.0, 0.0, EulerOrder::Xyz)));
    }
}
