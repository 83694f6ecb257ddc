//! WASM entry points for the browser simulator
//!
//! Arguments and results use the layouts in [`crate::flat`]. A wrong array
//! length is thrown as a JavaScript `Error`.

use crate::flat::{read_frame, read_quaternion, read_vector3, write_frame, write_quaternion};
use crate::frame::ReferenceFrame;
use crate::math::Quaternion;
use crate::rotation::{AxisAngle, Euler, EulerOrder};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A logger may already be installed by the host page.
    let _ = console_log::init_with_level(log::Level::Warn);
}

#[wasm_bindgen(js_name = composeFrames)]
pub fn compose_frames(parent: &[f64], child: &[f64]) -> Result<Box<[f64]>, JsError> {
    let parent = read_frame(parent, "parent")?;
    let child = read_frame(child, "child")?;
    Ok(Box::new(write_frame(&ReferenceFrame::compose(&parent, &child))))
}

#[wasm_bindgen(js_name = eulerToQuaternion)]
pub fn euler_to_quaternion(x: f64, y: f64, z: f64, order: &str) -> Result<Box<[f64]>, JsError> {
    let order: EulerOrder = order.parse()?;
    Ok(Box::new(write_quaternion(Euler::new(x, y, z, order).to_quaternion())))
}

#[wasm_bindgen(js_name = quaternionToEuler)]
pub fn quaternion_to_euler(q: &[f64], order: &str) -> Result<Box<[f64]>, JsError> {
    let order: EulerOrder = order.parse()?;
    let euler = Euler::from_quaternion(read_quaternion(q, "q")?, order);
    Ok(Box::new([euler.x, euler.y, euler.z]))
}

#[wasm_bindgen(js_name = quaternionToAxisAngle)]
pub fn quaternion_to_axis_angle(q: &[f64]) -> Result<Box<[f64]>, JsError> {
    let aa = AxisAngle::from_quaternion(read_quaternion(q, "q")?);
    Ok(Box::new([aa.angle, aa.axis.x, aa.axis.y, aa.axis.z]))
}

#[wasm_bindgen(js_name = axisAngleToQuaternion)]
pub fn axis_angle_to_quaternion(angle: f64, axis: &[f64]) -> Result<Box<[f64]>, JsError> {
    let axis = read_vector3(axis, "axis")?;
    Ok(Box::new(write_quaternion(AxisAngle::new(angle, axis).to_quaternion())))
}

#[wasm_bindgen]
pub fn slerp(a: &[f64], b: &[f64], t: f64) -> Result<Box<[f64]>, JsError> {
    let a = read_quaternion(a, "a")?;
    let b = read_quaternion(b, "b")?;
    Ok(Box::new(write_quaternion(Quaternion::slerp(a, b, t))))
}

#[wasm_bindgen(js_name = shortestArc)]
pub fn shortest_arc(from: &[f64], to: &[f64]) -> Result<Box<[f64]>, JsError> {
    let from = read_vector3(from, "from")?;
    let to = read_vector3(to, "to")?;
    Ok(Box::new(write_quaternion(Quaternion::shortest_arc(from, to))))
}
