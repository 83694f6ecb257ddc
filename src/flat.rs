//! Flat `f64` array layouts used at the JavaScript boundary.
//!
//! Vectors are `[x, y, z]`, quaternions `[x, y, z, w]` and frames
//! `[px, py, pz, qx, qy, qz, qw, sx, sy, sz]`.

use crate::frame::ReferenceFrame;
use crate::math::{Quaternion, Vector3};
use thiserror::Error;

pub const VECTOR3_LEN: usize = 3;
pub const QUATERNION_LEN: usize = 4;
pub const FRAME_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{name}` must have {expected} elements, got {actual}")]
pub struct LengthError {
    pub name: &'static str,
    pub expected: usize,
    pub actual: usize,
}

fn read<const N: usize>(values: &[f64], name: &'static str) -> Result<[f64; N], LengthError> {
    <[f64; N]>::try_from(values).map_err(|_| LengthError {
        name,
        expected: N,
        actual: values.len(),
    })
}

pub fn read_vector3(values: &[f64], name: &'static str) -> Result<Vector3, LengthError> {
    let [x, y, z] = read::<VECTOR3_LEN>(values, name)?;
    Ok(Vector3::new(x, y, z))
}

pub fn read_quaternion(values: &[f64], name: &'static str) -> Result<Quaternion, LengthError> {
    let [x, y, z, w] = read::<QUATERNION_LEN>(values, name)?;
    Ok(Quaternion::new(x, y, z, w))
}

pub fn read_frame(values: &[f64], name: &'static str) -> Result<ReferenceFrame, LengthError> {
    let [px, py, pz, qx, qy, qz, qw, sx, sy, sz] = read::<FRAME_LEN>(values, name)?;
    Ok(ReferenceFrame::new(
        Vector3::new(px, py, pz),
        Quaternion::new(qx, qy, qz, qw),
        Vector3::new(sx, sy, sz),
    ))
}

pub fn write_vector3(v: Vector3) -> [f64; VECTOR3_LEN] {
    [v.x, v.y, v.z]
}

pub fn write_quaternion(q: Quaternion) -> [f64; QUATERNION_LEN] {
    [q.x, q.y, q.z, q.w]
}

/// Absent fields are written as their identity defaults.
pub fn write_frame(frame: &ReferenceFrame) -> [f64; FRAME_LEN] {
    let (p, q, s) = (frame.position(), frame.orientation(), frame.scale());
    [p.x, p.y, p.z, q.x, q.y, q.z, q.w, s.x, s.y, s.z]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_frame_splits_fields_in_order() {
        let values = [1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.0, 4.0, 5.0, 6.0];
        let frame = read_frame(&values, "frame").unwrap();
        assert_eq!(frame.position(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.orientation(), Quaternion::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(frame.scale(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(write_frame(&frame), values);
    }

    #[test]
    fn absent_frame_fields_are_written_as_identity() {
        let frame = ReferenceFrame {
            position: Some(Vector3::X),
            orientation: None,
            scale: None,
        };
        assert_eq!(write_frame(&frame), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn reading_wrong_length_reports_name_and_sizes() {
        let err = read_frame(&[0.0; 7], "parent").unwrap_err();
        assert_eq!(
            err,
            LengthError {
                name: "parent",
                expected: FRAME_LEN,
                actual: 7
            }
        );
        assert_eq!(err.to_string(), "`parent` must have 10 elements, got 7");

        assert_eq!(read_quaternion(&[], "q").unwrap_err().expected, QUATERNION_LEN);
        assert_eq!(read_vector3(&[1.0, 2.0, 3.0, 4.0], "axis").unwrap_err().actual, 4);
    }

    #[test]
    fn vectors_and_quaternions_read_back_what_was_written() {
        let v = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(read_vector3(&write_vector3(v), "v"), Ok(v));
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        assert_eq!(read_quaternion(&write_quaternion(q), "q"), Ok(q));
    }
}
