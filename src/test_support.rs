//! Helpers shared by the unit tests.

use crate::math::{Quaternion, Vector3};
use approx::abs_diff_eq;
use proptest::prelude::*;

/// Rotation of `angle` radians about `axis`, built directly from the
/// half-angle formula so tests do not depend on the code under test.
pub(crate) fn about(axis: Vector3, angle: f64) -> Quaternion {
    let axis = axis.normalize();
    let (sin, cos) = (angle / 2.0).sin_cos();
    Quaternion::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
}

/// Whether `a` and `b` represent the same rotation (`q` and `-q` do).
pub(crate) fn same_rotation(a: Quaternion, b: Quaternion, epsilon: f64) -> bool {
    abs_diff_eq!(a, b, epsilon = epsilon) || abs_diff_eq!(a, -b, epsilon = epsilon)
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

prop_compose! {
    pub(crate) fn unit_quaternion_strategy()(
        x in -1.0..1.0f64,
        y in -1.0..1.0f64,
        z in -1.0..1.0f64,
        w in -1.0..1.0f64,
    ) -> Quaternion {
        let q = Quaternion::new(x, y, z, w);
        if q.length() < 1e-3 { Quaternion::IDENTITY } else { q.normalize() }
    }
}

prop_compose! {
    pub(crate) fn unit_vector_strategy()(
        x in -1.0..1.0f64,
        y in -1.0..1.0f64,
        z in -1.0..1.0f64,
    ) -> Vector3 {
        let v = Vector3::new(x, y, z);
        if v.length() < 1e-3 { Vector3::X } else { v.normalize() }
    }
}

prop_compose! {
    pub(crate) fn vector_strategy(max: f64)(
        x in -max..max,
        y in -max..max,
        z in -max..max,
    ) -> Vector3 {
        Vector3::new(x, y, z)
    }
}
