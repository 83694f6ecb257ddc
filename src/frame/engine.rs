//! Hand-off to the rendering and physics engine.
//!
//! The engine works in `glam`'s double-precision types. Conversions here copy
//! components one to one, so projecting a frame out and back is lossless.

use super::reference_frame::ReferenceFrame;
use crate::math::{Quaternion, Vector2, Vector3};
use glam::{DMat4, DQuat, DVec2, DVec3};

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        DQuat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Quaternion::new(q.x, q.y, q.z, q.w)
    }
}

/// Position/rotation/scaling triple as the engine's scene nodes store it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineTransform {
    pub position: DVec3,
    pub rotation: DQuat,
    pub scaling: DVec3,
}

impl Default for EngineTransform {
    fn default() -> Self {
        ReferenceFrame::IDENTITY.to_engine()
    }
}

impl EngineTransform {
    pub fn to_frame(&self) -> ReferenceFrame {
        ReferenceFrame::new(self.position.into(), self.rotation.into(), self.scaling.into())
    }

    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scaling, self.rotation, self.position)
    }
}

impl ReferenceFrame {
    /// Absent fields are projected as their identity defaults.
    pub fn to_engine(&self) -> EngineTransform {
        EngineTransform {
            position: self.position().into(),
            rotation: self.orientation().into(),
            scaling: self.scale().into(),
        }
    }

    /// Column-major affine matrix applying scale, then rotation, then
    /// translation.
    pub fn to_matrix(&self) -> DMat4 {
        self.to_engine().to_matrix()
    }

    /// Decomposes an affine matrix without shear back into a frame.
    pub fn from_matrix(matrix: &DMat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self::new(translation.into(), rotation.into(), scale.into())
    }
}

impl From<ReferenceFrame> for EngineTransform {
    fn from(frame: ReferenceFrame) -> Self {
        frame.to_engine()
    }
}

impl From<EngineTransform> for ReferenceFrame {
    fn from(transform: EngineTransform) -> Self {
        transform.to_frame()
    }
}
