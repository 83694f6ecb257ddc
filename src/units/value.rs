use crate::math::TAU;
use crate::rotation::ParseError;
use std::fmt;
use std::str::FromStr;

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Radians => "radians",
            Self::Degrees => "degrees",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AngleUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radians" | "rad" => Ok(Self::Radians),
            "degrees" | "deg" => Ok(Self::Degrees),
            _ => Err(ParseError::AngleUnit(s.to_owned())),
        }
    }
}

/// An angle tagged with the unit it was entered in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub const ZERO_RADIANS: Self = Self::radians(0.0);

    pub const fn radians(value: f64) -> Self {
        Self {
            value,
            unit: AngleUnit::Radians,
        }
    }

    pub const fn degrees(value: f64) -> Self {
        Self {
            value,
            unit: AngleUnit::Degrees,
        }
    }

    pub fn to_unit(self, unit: AngleUnit) -> Self {
        let value = match (self.unit, unit) {
            (AngleUnit::Degrees, AngleUnit::Radians) => self.value / 360.0 * TAU,
            (AngleUnit::Radians, AngleUnit::Degrees) => self.value / TAU * 360.0,
            (AngleUnit::Radians, AngleUnit::Radians) | (AngleUnit::Degrees, AngleUnit::Degrees) => {
                self.value
            }
        };
        Self { value, unit }
    }

    pub fn to_radians_value(self) -> f64 {
        self.to_unit(AngleUnit::Radians).value
    }

    pub fn to_degrees_value(self) -> f64 {
        self.to_unit(AngleUnit::Degrees).value
    }

    pub fn unit_name(self) -> &'static str {
        self.unit.name()
    }
}

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Centimeters,
    Feet,
    Inches,
}

impl DistanceUnit {
    /// Length of one of this unit in meters.
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Centimeters => 0.01,
            Self::Feet => 0.3048,
            Self::Inches => 0.0254,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Meters => "meters",
            Self::Centimeters => "centimeters",
            Self::Feet => "feet",
            Self::Inches => "inches",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meters" | "m" => Ok(Self::Meters),
            "centimeters" | "cm" => Ok(Self::Centimeters),
            "feet" | "ft" => Ok(Self::Feet),
            "inches" | "in" => Ok(Self::Inches),
            _ => Err(ParseError::DistanceUnit(s.to_owned())),
        }
    }
}

/// A length tagged with the unit it was entered in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub const ZERO_METERS: Self = Self::meters(0.0);

    pub const fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub const fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    pub const fn centimeters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Centimeters)
    }

    pub const fn feet(value: f64) -> Self {
        Self::new(value, DistanceUnit::Feet)
    }

    pub const fn inches(value: f64) -> Self {
        Self::new(value, DistanceUnit::Inches)
    }

    pub fn to_unit(self, unit: DistanceUnit) -> Self {
        if self.unit == unit {
            return self;
        }
        Self::new(self.value * self.unit.meters_per_unit() / unit.meters_per_unit(), unit)
    }

    pub fn unit_name(self) -> &'static str {
        self.unit.name()
    }
}
