//! Quaternion algebra.
//!
//! A [`Quaternion`] is a general four-component number; only instances of
//! unit length represent rotations. The raw algebra (`multiply`, `length`,
//! `dot`, `conjugate`, `inverse`, `normalize`) works on any quaternion.
//! Everything that interprets a quaternion as a rotation requires a
//! normalized input and says so.

use super::macros::impl_approx_eq;
use super::tolerance::{DEGENERATE_EPSILON, SLERP_LINEAR_THRESHOLD};
use super::vector::{clamp, Vector3};
use crate::rotation::AxisAngle;
use bytemuck::{Pod, Zeroable};
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Mul, Neg, Sub};

#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl_approx_eq!(Quaternion, x, y, z, w);

/// Result of [`Vector3::apply_quaternion_twist`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingTwist {
    /// The rotated vector.
    pub swing: Vector3,
    /// The part of the rotation about the vector's original axis.
    pub twist: Quaternion,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Lifts `v` into a pure quaternion (`w = 0`) for sandwich products.
    /// This is not a rotation.
    pub const fn from_vector3(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// The `(x, y, z)` part.
    #[inline]
    pub const fn vector_part(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Hamilton product `lhs * rhs`. Applied to a vector, `rhs` acts first.
    #[inline]
    pub fn multiply(lhs: Self, rhs: Self) -> Self {
        Self::new(
            lhs.w * rhs.x + lhs.x * rhs.w + lhs.y * rhs.z - lhs.z * rhs.y,
            lhs.w * rhs.y - lhs.x * rhs.z + lhs.y * rhs.w + lhs.z * rhs.x,
            lhs.w * rhs.z + lhs.x * rhs.y - lhs.y * rhs.x + lhs.z * rhs.w,
            lhs.w * rhs.w - lhs.x * rhs.x - lhs.y * rhs.y - lhs.z * rhs.z,
        )
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scales to unit length. A zero quaternion yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor, self.w * factor)
    }

    /// `-q`, the same rotation as `q`.
    #[inline]
    pub fn negate(self) -> Self {
        self.scale(-1.0)
    }

    /// Negates the vector part. Equals [`Self::inverse`] only for unit
    /// quaternions.
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate().scale(1.0 / self.length_squared())
    }

    /// Rotational distance `2 acos(w)` of `lhs * conjugate(rhs)`. Both inputs
    /// must be normalized. The cosine is clamped so round-off cannot produce
    /// NaN.
    pub fn angle(lhs: Self, rhs: Self) -> f64 {
        let relative = Self::multiply(lhs, rhs.conjugate());
        2.0 * clamp(-1.0, relative.w, 1.0).acos()
    }

    /// Angle of the relative rotation `lhs * rhs⁻¹`, negated when its axis
    /// points more than 90° away from `axis`. Meant for reading a single
    /// joint coordinate out of a general orientation.
    pub fn signed_angle(lhs: Self, rhs: Self, axis: Vector3) -> f64 {
        let relative = AxisAngle::from_quaternion(Self::multiply(lhs, rhs.inverse()));
        if relative.axis.angle(axis) > FRAC_PI_2 {
            -relative.angle
        } else {
            relative.angle
        }
    }

    /// Spherical linear interpolation along the shorter arc. Both inputs must
    /// be normalized.
    ///
    /// `rhs` is negated when the quaternions lie in opposite hemispheres, so
    /// `slerp(a, b, 1.0)` equals `b` only up to sign. Nearly parallel inputs
    /// are interpolated linearly and renormalized.
    pub fn slerp(lhs: Self, rhs: Self, t: f64) -> Self {
        let mut cos = lhs.dot(rhs);
        let mut end = rhs;
        if cos < 0.0 {
            cos = -cos;
            end = rhs.negate();
        }

        if cos > SLERP_LINEAR_THRESHOLD {
            log::trace!("slerp: near-parallel quaternions (cos = {cos}), interpolating linearly");
            return (lhs + (end - lhs).scale(t)).normalize();
        }

        let theta = cos.acos();
        let sin = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin;
        let b = (t * theta).sin() / sin;
        lhs.scale(a) + end.scale(b)
    }

    /// Minimal rotation taking unit vector `from` onto unit vector `to`.
    ///
    /// For antiparallel inputs any perpendicular axis works; the axis used is
    /// `X × from`, or `Y × from` if `from` lies along `X`, and the result is a
    /// half turn about it.
    pub fn shortest_arc(from: Vector3, to: Vector3) -> Self {
        let s = ((1.0 + from.dot(to)) * 2.0).max(0.0).sqrt();

        if s < DEGENERATE_EPSILON {
            let mut axis = Vector3::X.cross(from);
            if axis.length() < DEGENERATE_EPSILON {
                axis = Vector3::Y.cross(from);
            }
            log::trace!("shortest_arc: antiparallel vectors, half turn about {axis:?}");
            return AxisAngle::new(PI, axis.normalize()).to_quaternion();
        }

        let c = from.cross(to).divide_scalar(s);
        Self::new(c.x, c.y, c.z, s / 2.0).normalize()
    }

    /// Splits a unit quaternion into `(swing, twist)` with
    /// `swing * twist == self`, where `twist` rotates about `axis` and
    /// `swing` rotates `axis` to its final direction.
    ///
    /// When the rotation is a half turn about an axis perpendicular to
    /// `axis` the twist is undefined and the identity is returned for it.
    pub fn swing_twist(self, axis: Vector3) -> (Self, Self) {
        if axis.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
            log::trace!("swing_twist: degenerate twist axis, treating rotation as pure swing");
            return (self, Self::IDENTITY);
        }

        let projected = self.vector_part().project(axis);
        let twist = Self::new(projected.x, projected.y, projected.z, self.w);
        let length = twist.length();

        let twist = if length < DEGENERATE_EPSILON {
            log::trace!("swing_twist: half-turn swing, twist is identity");
            Self::IDENTITY
        } else {
            twist.scale(1.0 / length)
        };

        (Self::multiply(self, twist.conjugate()), twist)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::multiply(self, rhs)
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.apply_quaternion(self)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}
