//! Two- and three-component vectors.
//!
//! These are the hot-path types of the simulator. Nothing here guards
//! against non-finite input: NaN and infinity propagate per IEEE-754 and
//! callers are expected to validate at the boundary. The one exception is
//! [`Vector3::angle`], which clamps the cosine so parallel vectors do not
//! produce NaN through round-off.

use super::macros::impl_approx_eq;
use super::quaternion::{Quaternion, SwingTwist};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; if `min > max` the result is `max`.
#[inline]
pub fn clamp(min: f64, value: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl_approx_eq!(Vector2, x, y);

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn from_x(x: f64) -> Self {
        Self::new(x, 0.0)
    }

    pub const fn from_y(y: f64) -> Self {
        Self::new(0.0, y)
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }

    #[inline]
    pub fn subtract(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }

    #[inline]
    pub fn multiply_scalar(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    #[inline]
    pub fn divide_scalar(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scales to unit length. The zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.divide_scalar(self.length())
    }

    pub fn distance(self, rhs: Self) -> f64 {
        rhs.subtract(self).length()
    }

    /// Unsigned angle in `[0, π]`. NaN if either vector is zero.
    pub fn angle(self, rhs: Self) -> f64 {
        let cos = self.dot(rhs) / (self.length() * rhs.length());
        clamp(-1.0, cos, 1.0).acos()
    }

    /// Projection of `self` onto `onto`. NaN if `onto` is zero.
    pub fn project(self, onto: Self) -> Self {
        onto.multiply_scalar(self.dot(onto) / onto.length_squared())
    }

    pub fn clamp_vec(min: Self, v: Self, max: Self) -> Self {
        Self::new(clamp(min.x, v.x, max.x), clamp(min.y, v.y, max.y))
    }
}

#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl_approx_eq!(Vector3, x, y, z);

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// The x component, or 0 for an absent vector.
    pub fn x_of(vec: Option<&Self>) -> f64 {
        vec.map_or(0.0, |v| v.x)
    }

    pub fn y_of(vec: Option<&Self>) -> f64 {
        vec.map_or(0.0, |v| v.y)
    }

    pub fn z_of(vec: Option<&Self>) -> f64 {
        vec.map_or(0.0, |v| v.z)
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    #[inline]
    pub fn subtract(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }

    #[inline]
    pub fn multiply_scalar(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    #[inline]
    pub fn divide_scalar(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scales to unit length.
    ///
    /// The zero vector is not guarded against and yields NaN components;
    /// callers must not normalize a zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        self.divide_scalar(self.length())
    }

    pub fn distance(self, rhs: Self) -> f64 {
        rhs.subtract(self).length()
    }

    /// Unsigned angle in `[0, π]` between two vectors, computed as
    /// `acos(dot / (|a| |b|))` with the cosine clamped to `[-1, 1]`.
    ///
    /// NaN if either vector is zero.
    pub fn angle(self, rhs: Self) -> f64 {
        let cos = self.dot(rhs) / (self.length() * rhs.length());
        clamp(-1.0, cos, 1.0).acos()
    }

    /// Projection of `self` onto `onto`: `onto * (self·onto / |onto|²)`.
    /// NaN if `onto` is zero.
    pub fn project(self, onto: Self) -> Self {
        onto.multiply_scalar(self.dot(onto) / onto.length_squared())
    }

    pub fn clamp_vec(min: Self, v: Self, max: Self) -> Self {
        Self::new(
            clamp(min.x, v.x, max.x),
            clamp(min.y, v.y, max.y),
            clamp(min.z, v.z, max.z),
        )
    }

    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        self.add(rhs.subtract(self).multiply_scalar(t))
    }

    /// Rotates `self` by `q` without building a matrix.
    ///
    /// Expands the sandwich product `q v q⁻¹` as
    /// `v + w t + u × t` with `u` the vector part of `q` and `t = 2 (u × v)`.
    /// `q` must be normalized.
    #[inline]
    pub fn apply_quaternion(self, q: Quaternion) -> Self {
        let u = q.vector_part();
        let t = u.cross(self).multiply_scalar(2.0);
        self.add(t.multiply_scalar(q.w)).add(u.cross(t))
    }

    /// Splits the rotation `q` relative to this vector: `swing` is where the
    /// vector ends up and `twist` is the part of `q` that spins about the
    /// vector's original axis. `q` must be normalized.
    pub fn apply_quaternion_twist(self, q: Quaternion) -> SwingTwist {
        let (_, twist) = q.swing_twist(self);
        SwingTwist {
            swing: self.apply_quaternion(q),
            twist,
        }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.multiply_scalar(self)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.divide_scalar(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
