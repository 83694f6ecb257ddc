//! Poses a three-joint arm by composing joint frames, then reads the joint
//! angles back out of the world orientations.
//!
//! Run with `RUST_LOG=trace` to see degenerate-geometry fallbacks.

use sim_transform::{AxisAngle, Quaternion, ReferenceFrame, Vector3};

struct Joint {
    name: &'static str,
    axis: Vector3,
    offset: Vector3,
}

const JOINTS: [Joint; 3] = [
    Joint {
        name: "shoulder",
        axis: Vector3::Y,
        offset: Vector3::new(0.0, 0.5, 0.0),
    },
    Joint {
        name: "elbow",
        axis: Vector3::Z,
        offset: Vector3::new(0.0, 1.0, 0.0),
    },
    Joint {
        name: "wrist",
        axis: Vector3::Z,
        offset: Vector3::new(0.0, 0.8, 0.0),
    },
];

fn pose(angles: [f64; 3]) -> Vec<ReferenceFrame> {
    let mut world = ReferenceFrame::IDENTITY;
    JOINTS
        .iter()
        .zip(angles)
        .map(|(joint, angle)| {
            let local = ReferenceFrame::from_position_orientation(
                joint.offset,
                AxisAngle::new(angle, joint.axis).to_quaternion(),
            );
            world = ReferenceFrame::compose(&world, &local);
            world
        })
        .collect()
}

fn main() {
    env_logger::init();

    let start = pose([0.0, 0.0, 0.0]);
    let goal = pose([0.6, -1.1, 0.4]);

    let mut parent = Quaternion::IDENTITY;
    for (joint, frame) in JOINTS.iter().zip(&goal) {
        let local = parent.inverse() * frame.orientation();
        let angle = Quaternion::signed_angle(local, Quaternion::IDENTITY, joint.axis);
        log::info!("{:>8}: {:+.3} rad at {:?}", joint.name, angle, frame.position());
        parent = frame.orientation();
    }

    for step in 0..=4 {
        let t = f64::from(step) / 4.0;
        let tip = start[2].lerp(&goal[2], t);
        log::info!("t = {t:.2}: tip at {:?}, facing {:?}", tip.position(), tip.up());
    }

    let tip_up = goal[2].up();
    let realign = Quaternion::shortest_arc(tip_up, Vector3::Y);
    log::info!(
        "realigning the tip needs {:.3} rad",
        AxisAngle::from_quaternion(realign).angle
    );
}
