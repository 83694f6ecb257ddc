//! Euler angles with an explicit rotation order.
//!
//! Orders are intrinsic: for [`EulerOrder::Xyz`] the body is rotated about
//! its x axis, then about its rotated y axis, then about its twice-rotated z
//! axis. As a quaternion that is `qx * qy * qz`, and as a matrix
//! `Rx · Ry · Rz`. The same reading holds for all six orders.

use super::axis_angle::AxisAngle;
use super::ParseError;
use crate::math::tolerance::GIMBAL_LOCK_THRESHOLD;
use crate::math::{clamp, Quaternion, Vector3};
use std::fmt;
use std::str::FromStr;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::X,
            Axis::Y => Vector3::Y,
            Axis::Z => Vector3::Z,
        }
    }

    /// Rotation of `angle` radians about this axis.
    pub fn rotation(self, angle: f64) -> Quaternion {
        let (sin, cos) = (angle / 2.0).sin_cos();
        match self {
            Axis::X => Quaternion::new(sin, 0.0, 0.0, cos),
            Axis::Y => Quaternion::new(0.0, sin, 0.0, cos),
            Axis::Z => Quaternion::new(0.0, 0.0, sin, cos),
        }
    }
}

/// The sequence in which the three axis rotations are applied.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    #[default]
    Yzx,
    Zxy,
    Zyx,
}

impl EulerOrder {
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Yzx,
        Self::Zxy,
        Self::Zyx,
    ];

    pub const fn sequence(self) -> [Axis; 3] {
        match self {
            Self::Xyz => [Axis::X, Axis::Y, Axis::Z],
            Self::Xzy => [Axis::X, Axis::Z, Axis::Y],
            Self::Yxz => [Axis::Y, Axis::X, Axis::Z],
            Self::Yzx => [Axis::Y, Axis::Z, Axis::X],
            Self::Zxy => [Axis::Z, Axis::X, Axis::Y],
            Self::Zyx => [Axis::Z, Axis::Y, Axis::X],
        }
    }

    /// Unit vectors of the axes in application order.
    pub fn axes(self) -> [Vector3; 3] {
        self.sequence().map(Axis::unit)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Xzy => "xzy",
            Self::Yxz => "yxz",
            Self::Yzx => "yzx",
            Self::Zxy => "zxy",
            Self::Zyx => "zyx",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EulerOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::EulerOrder(s.to_owned()))
    }
}

/// Three angles in radians, one per axis, applied in `order`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: EulerOrder,
}

impl Euler {
    pub const fn new(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    pub const fn identity(order: EulerOrder) -> Self {
        Self::new(0.0, 0.0, 0.0, order)
    }

    pub fn from_degrees(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians(), order)
    }

    pub fn angle_about(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Composes the three single-axis rotations in `order`.
    pub fn to_quaternion(&self) -> Quaternion {
        let [first, second, third] = self.order.sequence();
        first.rotation(self.angle_about(first))
            * second.rotation(self.angle_about(second))
            * third.rotation(self.angle_about(third))
    }

    /// Decomposes a unit quaternion into angles for `order`.
    ///
    /// The middle angle is recovered with `asin` and lies in `[-π/2, π/2]`;
    /// the outer two come from `atan2` and lie in `(-π, π]`. When the middle
    /// axis is turned by ±90° the outer axes coincide and only their
    /// combination is determined. In that case the third angle is set to 0
    /// and the first absorbs the whole rotation.
    pub fn from_quaternion(q: Quaternion, order: EulerOrder) -> Self {
        let m = RotationMatrix::from_quaternion(q);
        let locked = |sin: f64| {
            let locked = sin.abs() >= GIMBAL_LOCK_THRESHOLD;
            if locked {
                log::trace!("euler {order}: gimbal lock (sin = {sin}), pinning third angle to 0");
            }
            locked
        };

        let (x, y, z) = match order {
            EulerOrder::Xyz => {
                let y = clamp(-1.0, m.m13, 1.0).asin();
                if locked(m.m13) {
                    (m.m32.atan2(m.m22), y, 0.0)
                } else {
                    ((-m.m23).atan2(m.m33), y, (-m.m12).atan2(m.m11))
                }
            }
            EulerOrder::Xzy => {
                let z = clamp(-1.0, -m.m12, 1.0).asin();
                if locked(m.m12) {
                    ((-m.m23).atan2(m.m33), 0.0, z)
                } else {
                    (m.m32.atan2(m.m22), m.m13.atan2(m.m11), z)
                }
            }
            EulerOrder::Yxz => {
                let x = clamp(-1.0, -m.m23, 1.0).asin();
                if locked(m.m23) {
                    (x, (-m.m31).atan2(m.m11), 0.0)
                } else {
                    (x, m.m13.atan2(m.m33), m.m21.atan2(m.m22))
                }
            }
            EulerOrder::Yzx => {
                let z = clamp(-1.0, m.m21, 1.0).asin();
                if locked(m.m21) {
                    (0.0, m.m13.atan2(m.m33), z)
                } else {
                    ((-m.m23).atan2(m.m22), (-m.m31).atan2(m.m11), z)
                }
            }
            EulerOrder::Zxy => {
                let x = clamp(-1.0, m.m32, 1.0).asin();
                if locked(m.m32) {
                    (x, 0.0, m.m21.atan2(m.m11))
                } else {
                    (x, (-m.m31).atan2(m.m33), (-m.m12).atan2(m.m22))
                }
            }
            EulerOrder::Zyx => {
                let y = clamp(-1.0, -m.m31, 1.0).asin();
                if locked(m.m31) {
                    (0.0, y, (-m.m12).atan2(m.m22))
                } else {
                    (m.m32.atan2(m.m33), y, m.m21.atan2(m.m11))
                }
            }
        };

        Self::new(x, y, z, order)
    }

    pub fn to_axis_angle(&self) -> AxisAngle {
        AxisAngle::from_euler(self)
    }
}

impl From<Quaternion> for Euler {
    /// Decomposes with the default order.
    fn from(q: Quaternion) -> Self {
        Self::from_quaternion(q, EulerOrder::default())
    }
}

impl From<Euler> for Quaternion {
    fn from(euler: Euler) -> Self {
        euler.to_quaternion()
    }
}

/// Row-major rotation matrix elements of a unit quaternion, `mRC`.
struct RotationMatrix {
    m11: f64,
    m12: f64,
    m13: f64,
    m21: f64,
    m22: f64,
    m23: f64,
    m31: f64,
    m32: f64,
    m33: f64,
}

impl RotationMatrix {
    fn from_quaternion(q: Quaternion) -> Self {
        let Quaternion { x, y, z, w } = q;
        Self {
            m11: 1.0 - 2.0 * (y * y + z * z),
            m12: 2.0 * (x * y - z * w),
            m13: 2.0 * (x * z + y * w),
            m21: 2.0 * (x * y + z * w),
            m22: 1.0 - 2.0 * (x * x + z * z),
            m23: 2.0 * (y * z - x * w),
            m31: 2.0 * (x * z - y * w),
            m32: 2.0 * (y * z + x * w),
            m33: 1.0 - 2.0 * (x * x + y * y),
        }
    }
}
