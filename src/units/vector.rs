use super::value::{Distance, DistanceUnit};
use crate::math::{Vector2, Vector3};

/// A planar position whose components each carry their own distance unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistanceVector2 {
    pub x: Distance,
    pub y: Distance,
}

impl DistanceVector2 {
    pub const ZERO_METERS: Self = Self::new(Distance::ZERO_METERS, Distance::ZERO_METERS);

    pub const fn new(x: Distance, y: Distance) -> Self {
        Self { x, y }
    }

    pub fn zero(unit: DistanceUnit) -> Self {
        Self::from_raw(Vector2::ZERO, unit)
    }

    pub fn from_raw(raw: Vector2, unit: DistanceUnit) -> Self {
        Self::new(Distance::new(raw.x, unit), Distance::new(raw.y, unit))
    }

    pub fn units(&self) -> [DistanceUnit; 2] {
        [self.x.unit, self.y.unit]
    }

    pub fn to_raw(&self, unit: DistanceUnit) -> Vector2 {
        Vector2::new(self.x.to_unit(unit).value, self.y.to_unit(unit).value)
    }

    pub fn to_unit_granular(&self, [x, y]: [DistanceUnit; 2]) -> Self {
        Self::new(self.x.to_unit(x), self.y.to_unit(y))
    }
}

/// A position whose components each carry their own distance unit.
///
/// Binary operations convert the right-hand operand into the units of the
/// left-hand one (or of the clamped value for [`DistanceVector3::clamp`]) and
/// keep those units per component in the result.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistanceVector3 {
    pub x: Distance,
    pub y: Distance,
    pub z: Distance,
}

impl DistanceVector3 {
    pub const ZERO_METERS: Self = Self::new(Distance::ZERO_METERS, Distance::ZERO_METERS, Distance::ZERO_METERS);

    pub const fn new(x: Distance, y: Distance, z: Distance) -> Self {
        Self { x, y, z }
    }

    pub fn zero(unit: DistanceUnit) -> Self {
        Self::from_raw(Vector3::ZERO, unit)
    }

    /// Only `x` set; the other components are zero meters.
    pub const fn from_x(x: Distance) -> Self {
        Self::new(x, Distance::ZERO_METERS, Distance::ZERO_METERS)
    }

    pub const fn from_y(y: Distance) -> Self {
        Self::new(Distance::ZERO_METERS, y, Distance::ZERO_METERS)
    }

    pub const fn from_z(z: Distance) -> Self {
        Self::new(Distance::ZERO_METERS, Distance::ZERO_METERS, z)
    }

    pub const fn meters_x(x: f64) -> Self {
        Self::from_x(Distance::meters(x))
    }

    pub const fn meters_y(y: f64) -> Self {
        Self::from_y(Distance::meters(y))
    }

    pub const fn meters_z(z: f64) -> Self {
        Self::from_z(Distance::meters(z))
    }

    pub fn one(unit: DistanceUnit) -> Self {
        Self::from_raw(Vector3::ONE, unit)
    }

    pub fn meters(x: f64, y: f64, z: f64) -> Self {
        Self::from_raw(Vector3::new(x, y, z), DistanceUnit::Meters)
    }

    pub fn centimeters(x: f64, y: f64, z: f64) -> Self {
        Self::from_raw(Vector3::new(x, y, z), DistanceUnit::Centimeters)
    }

    pub fn from_raw(raw: Vector3, unit: DistanceUnit) -> Self {
        Self::from_raw_granular(raw, [unit; 3])
    }

    pub fn from_raw_granular(raw: Vector3, [x, y, z]: [DistanceUnit; 3]) -> Self {
        Self::new(
            Distance::new(raw.x, x),
            Distance::new(raw.y, y),
            Distance::new(raw.z, z),
        )
    }

    pub fn units(&self) -> [DistanceUnit; 3] {
        [self.x.unit, self.y.unit, self.z.unit]
    }

    /// Plain vector with every component expressed in `unit`.
    pub fn to_raw(&self, unit: DistanceUnit) -> Vector3 {
        self.to_raw_granular([unit; 3])
    }

    pub fn to_raw_granular(&self, [x, y, z]: [DistanceUnit; 3]) -> Vector3 {
        Vector3::new(
            self.x.to_unit(x).value,
            self.y.to_unit(y).value,
            self.z.to_unit(z).value,
        )
    }

    pub fn to_unit_granular(&self, [x, y, z]: [DistanceUnit; 3]) -> Self {
        Self::new(self.x.to_unit(x), self.y.to_unit(y), self.z.to_unit(z))
    }

    pub fn add(&self, rhs: &Self) -> Self {
        let units = self.units();
        Self::from_raw_granular(self.to_raw_granular(units) + rhs.to_raw_granular(units), units)
    }

    pub fn subtract(&self, rhs: &Self) -> Self {
        let units = self.units();
        Self::from_raw_granular(self.to_raw_granular(units) - rhs.to_raw_granular(units), units)
    }

    pub fn clamp(min: &Self, v: &Self, max: &Self) -> Self {
        let units = v.units();
        Self::from_raw_granular(
            Vector3::clamp_vec(
                min.to_raw_granular(units),
                v.to_raw_granular(units),
                max.to_raw_granular(units),
            ),
            units,
        )
    }

    /// Euclidean length, in the unit of the x component.
    pub fn length(&self) -> Distance {
        Distance::meters(self.to_raw(DistanceUnit::Meters).length()).to_unit(self.x.unit)
    }

    pub fn distance(lhs: &Self, rhs: &Self, unit: DistanceUnit) -> Distance {
        let meters = lhs
            .to_raw(DistanceUnit::Meters)
            .distance(rhs.to_raw(DistanceUnit::Meters));
        Distance::meters(meters).to_unit(unit)
    }
}
