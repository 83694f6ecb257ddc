//! Vector and quaternion algebra
//!
//! All types are small `Copy` values laid out as plain `f64` fields so they
//! can live on the stack in per-frame loops and be cast into flat buffers.

mod macros;
mod quaternion;
pub mod tolerance;
mod vector;

pub use quaternion::{Quaternion, SwingTwist};
pub use vector::{clamp, Vector2, Vector3};

/// A full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;
