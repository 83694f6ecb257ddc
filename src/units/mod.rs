//! Values tagged with the units they were entered in
//!
//! Property panels let users type positions in meters, centimeters, feet or
//! inches and angles in degrees or radians. These types keep the unit next
//! to the number and convert to the plain math types on demand.

mod frame;
mod rotation;
mod value;
mod vector;

pub use frame::FrameWithUnits;
pub use rotation::{AxisAngleWithUnits, EulerWithUnits, RotationWithUnits};
pub use value::{Angle, AngleUnit, Distance, DistanceUnit};
pub use vector::{DistanceVector2, DistanceVector3};
