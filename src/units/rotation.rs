use super::value::{Angle, AngleUnit};
use crate::math::{Quaternion, Vector3};
use crate::rotation::{AxisAngle, Euler, EulerOrder, Rotation, RotationKind};

/// Euler angles that each remember the unit they were entered in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerWithUnits {
    pub x: Angle,
    pub y: Angle,
    pub z: Angle,
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: EulerOrder,
}

impl EulerWithUnits {
    pub const fn new(x: Angle, y: Angle, z: Angle, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Zero angles in `unit` with the default order.
    pub const fn identity(unit: AngleUnit) -> Self {
        let zero = Angle { value: 0.0, unit };
        Self::new(zero, zero, zero, EulerOrder::Yzx)
    }

    pub const fn degrees(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self::new(Angle::degrees(x), Angle::degrees(y), Angle::degrees(z), order)
    }

    pub const fn radians(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self::new(Angle::radians(x), Angle::radians(y), Angle::radians(z), order)
    }

    /// Unit of the x angle, which stands for the whole triple when the
    /// rotation is re-expressed.
    pub fn angle_unit(&self) -> AngleUnit {
        self.x.unit
    }

    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        Self::new(self.x.to_unit(unit), self.y.to_unit(unit), self.z.to_unit(unit), self.order)
    }

    pub fn to_raw(&self) -> Euler {
        Euler::new(
            self.x.to_radians_value(),
            self.y.to_radians_value(),
            self.z.to_radians_value(),
            self.order,
        )
    }

    pub fn from_raw(raw: &Euler) -> Self {
        Self::radians(raw.x, raw.y, raw.z, raw.order)
    }
}

impl Default for EulerWithUnits {
    fn default() -> Self {
        Self::identity(AngleUnit::default())
    }
}

/// An axis-angle rotation whose angle remembers its unit.
///
/// The axis is a direction and carries no distance unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngleWithUnits {
    pub angle: Angle,
    pub axis: Vector3,
}

impl AxisAngleWithUnits {
    pub const fn new(angle: Angle, axis: Vector3) -> Self {
        Self { angle, axis }
    }

    pub const fn identity(unit: AngleUnit) -> Self {
        Self::new(Angle { value: 0.0, unit }, Vector3::X)
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle.unit
    }

    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        Self::new(self.angle.to_unit(unit), self.axis)
    }

    pub fn to_raw(&self) -> AxisAngle {
        AxisAngle::new(self.angle.to_radians_value(), self.axis)
    }

    pub fn from_raw(raw: &AxisAngle) -> Self {
        Self::new(Angle::radians(raw.angle), raw.axis)
    }
}

impl Default for AxisAngleWithUnits {
    fn default() -> Self {
        Self::identity(AngleUnit::default())
    }
}

/// A rotation as typed into a property panel, in either editable form.
///
/// Conversions go through quaternions. Results built from a bare quaternion
/// are in radians; [`RotationWithUnits::to_kind`] and
/// [`RotationWithUnits::slerp`] keep the angle unit of their (left) input.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationWithUnits {
    #[cfg_attr(feature = "serde", serde(rename = "euler"))]
    Euler(EulerWithUnits),
    #[cfg_attr(feature = "serde", serde(rename = "axis-angle"))]
    AxisAngle(AxisAngleWithUnits),
}

impl Default for RotationWithUnits {
    fn default() -> Self {
        Self::Euler(EulerWithUnits::default())
    }
}

impl RotationWithUnits {
    pub const fn euler(x: Angle, y: Angle, z: Angle, order: EulerOrder) -> Self {
        Self::Euler(EulerWithUnits::new(x, y, z, order))
    }

    pub const fn euler_degrees(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self::Euler(EulerWithUnits::degrees(x, y, z, order))
    }

    pub const fn euler_radians(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self::Euler(EulerWithUnits::radians(x, y, z, order))
    }

    pub const fn axis_angle(axis: Vector3, angle: Angle) -> Self {
        Self::AxisAngle(AxisAngleWithUnits::new(angle, axis))
    }

    pub fn kind(&self) -> RotationKind {
        match self {
            Self::Euler(euler) => RotationKind::Euler(euler.order),
            Self::AxisAngle(_) => RotationKind::AxisAngle,
        }
    }

    pub fn angle_unit(&self) -> AngleUnit {
        match self {
            Self::Euler(euler) => euler.angle_unit(),
            Self::AxisAngle(axis_angle) => axis_angle.angle_unit(),
        }
    }

    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        match self {
            Self::Euler(euler) => Self::Euler(euler.to_unit(unit)),
            Self::AxisAngle(axis_angle) => Self::AxisAngle(axis_angle.to_unit(unit)),
        }
    }

    /// The same rotation in radians, without units.
    pub fn to_rotation(&self) -> Rotation {
        match self {
            Self::Euler(euler) => Rotation::Euler(euler.to_raw()),
            Self::AxisAngle(axis_angle) => Rotation::AxisAngle(axis_angle.to_raw()),
        }
    }

    pub fn to_quaternion(&self) -> Quaternion {
        self.to_rotation().to_quaternion()
    }

    /// Rotation of kind `kind` in radians.
    pub fn from_quaternion(q: Quaternion, kind: RotationKind) -> Self {
        Self::from(Rotation::from_quaternion(q, kind))
    }

    /// Re-expresses the rotation as `kind`, keeping its angle unit. The
    /// current kind returns `self` untouched.
    pub fn to_kind(&self, kind: RotationKind) -> Self {
        if self.kind() == kind {
            return *self;
        }
        Self::from_quaternion(self.to_quaternion(), kind).to_unit(self.angle_unit())
    }

    /// Rotational distance between the two, in radians.
    pub fn angle(lhs: &Self, rhs: &Self) -> Angle {
        Angle::radians(Quaternion::angle(lhs.to_quaternion(), rhs.to_quaternion()))
    }

    /// Interpolates along the shorter arc. The result is expressed as `kind`
    /// in the angle unit of `lhs`.
    pub fn slerp(lhs: &Self, rhs: &Self, t: f64, kind: RotationKind) -> Self {
        let q = Quaternion::slerp(lhs.to_quaternion(), rhs.to_quaternion(), t);
        Self::from_quaternion(q, kind).to_unit(lhs.angle_unit())
    }
}

impl From<Rotation> for RotationWithUnits {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Euler(euler) => Self::Euler(EulerWithUnits::from_raw(&euler)),
            Rotation::AxisAngle(axis_angle) => Self::AxisAngle(AxisAngleWithUnits::from_raw(&axis_angle)),
        }
    }
}

impl From<RotationWithUnits> for Quaternion {
    fn from(rotation: RotationWithUnits) -> Self {
        rotation.to_quaternion()
    }
}
