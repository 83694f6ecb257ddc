use super::rotation::{EulerWithUnits, RotationWithUnits};
use super::value::{AngleUnit, DistanceUnit};
use super::vector::DistanceVector3;
use crate::frame::{EngineTransform, ReferenceFrame};
use crate::math::{Quaternion, Vector3};

/// A reference frame as edited in the UI: position and orientation keep the
/// units they were typed in. Absent fields are identity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameWithUnits {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<DistanceVector3>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub orientation: Option<RotationWithUnits>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub scale: Option<Vector3>,
}

impl FrameWithUnits {
    pub const IDENTITY: Self = Self {
        position: Some(DistanceVector3::ZERO_METERS),
        orientation: Some(RotationWithUnits::Euler(EulerWithUnits::identity(AngleUnit::Radians))),
        scale: Some(Vector3::ONE),
    };

    pub fn new(position: DistanceVector3, orientation: RotationWithUnits, scale: Vector3) -> Self {
        Self {
            position: Some(position),
            orientation: Some(orientation),
            scale: Some(scale),
        }
    }

    /// Plain frame with the position expressed in `unit`.
    pub fn to_raw(&self, unit: DistanceUnit) -> ReferenceFrame {
        ReferenceFrame::new(
            self.position.map_or(Vector3::ZERO, |p| p.to_raw(unit)),
            self.orientation
                .map_or(Quaternion::IDENTITY, |r| r.to_quaternion()),
            self.scale.unwrap_or(Vector3::ONE),
        )
    }

    pub fn to_engine(&self, unit: DistanceUnit) -> EngineTransform {
        self.to_raw(unit).to_engine()
    }
}
