//! # sim-transform
//!
//! Spatial transform math for the robot simulator: vectors, quaternions,
//! Euler angles, axis-angle rotations and composable reference frames.
//!
//! ## Features
//! - Quaternion algebra with slerp, shortest-arc and swing/twist
//! - Euler angles in all six orders, converted in both directions
//! - Reference frames that compose parent to child and project into `glam`
//! - Unit-tagged positions and angles for property editors
//! - Cross-platform: Native + WASM support
//!
//! Every function is pure. Degenerate geometry (antiparallel vectors, gimbal
//! lock, near-zero angles) resolves to a fixed fallback instead of an error;
//! the fallbacks are logged at `trace` level.
//!
//! ## Example
//! ```rust
//! use sim_transform::{Euler, EulerOrder, ReferenceFrame, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let turn = Euler::new(0.0, 0.0, FRAC_PI_2, EulerOrder::Xyz).to_quaternion();
//! let parent = ReferenceFrame::from_position_orientation(Vector3::new(1.0, 0.0, 0.0), turn);
//! let child = ReferenceFrame::from_position(Vector3::new(1.0, 0.0, 0.0));
//!
//! let world = ReferenceFrame::compose(&parent, &child);
//! assert!((world.position() - Vector3::new(1.0, 1.0, 0.0)).length() < 1e-9);
//! ```

pub mod flat;
pub mod frame;
pub mod math;
pub mod rotation;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod test_support;

pub use frame::{EngineTransform, ReferenceFrame};
pub use math::{Quaternion, SwingTwist, Vector2, Vector3};
pub use rotation::{AxisAngle, Euler, EulerOrder, ParseError, Rotation, RotationKind};
pub use units::{
    Angle, AngleUnit, AxisAngleWithUnits, Distance, DistanceUnit, DistanceVector2, DistanceVector3,
    EulerWithUnits, FrameWithUnits, RotationWithUnits,
};
