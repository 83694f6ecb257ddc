use crate::math::{Quaternion, Vector3};

/// Position, orientation and scale of a local frame relative to its parent.
///
/// Every field may be absent and reads as its identity default, which is how
/// partial frames arrive from persisted scene records. Two frames compare
/// equal when their filled fields do, so `None` equals the default value.
///
/// `orientation` must be a unit quaternion.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceFrame {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Vector3>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub orientation: Option<Quaternion>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub scale: Option<Vector3>,
}

impl PartialEq for ReferenceFrame {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
            && self.orientation() == other.orientation()
            && self.scale() == other.scale()
    }
}

impl ReferenceFrame {
    pub const IDENTITY: Self = Self {
        position: Some(Vector3::ZERO),
        orientation: Some(Quaternion::IDENTITY),
        scale: Some(Vector3::ONE),
    };

    pub fn new(position: Vector3, orientation: Quaternion, scale: Vector3) -> Self {
        Self {
            position: Some(position),
            orientation: Some(orientation),
            scale: Some(scale),
        }
    }

    pub fn from_position(position: Vector3) -> Self {
        Self {
            position: Some(position),
            ..Self::IDENTITY
        }
    }

    pub fn from_position_orientation(position: Vector3, orientation: Quaternion) -> Self {
        Self::new(position, orientation, Vector3::ONE)
    }

    pub fn position(&self) -> Vector3 {
        self.position.unwrap_or(Vector3::ZERO)
    }

    pub fn orientation(&self) -> Quaternion {
        self.orientation.unwrap_or(Quaternion::IDENTITY)
    }

    pub fn scale(&self) -> Vector3 {
        self.scale.unwrap_or(Vector3::ONE)
    }

    /// Position of a frame that may itself be absent.
    pub fn position_of(frame: Option<&Self>) -> Vector3 {
        frame.map_or(Vector3::ZERO, Self::position)
    }

    pub fn orientation_of(frame: Option<&Self>) -> Quaternion {
        frame.map_or(Quaternion::IDENTITY, Self::orientation)
    }

    pub fn scale_of(frame: Option<&Self>) -> Vector3 {
        frame.map_or(Vector3::ONE, Self::scale)
    }

    /// Replaces absent fields with their identity defaults.
    pub fn fill(&self) -> Self {
        Self::new(self.position(), self.orientation(), self.scale())
    }

    /// Expresses `child`, given relative to `parent`, in `parent`'s parent
    /// space.
    ///
    /// The child's position is rotated by the parent's orientation and offset
    /// by the parent's position; orientations are multiplied and
    /// renormalized against drift. Scale is not composed: the result has no
    /// scale (identity), and hierarchies that need scale must apply it
    /// explicitly.
    pub fn compose(parent: &Self, child: &Self) -> Self {
        let parent_orientation = parent.orientation();
        Self {
            position: Some(parent.position() + child.position().apply_quaternion(parent_orientation)),
            orientation: Some((parent_orientation * child.orientation()).normalize()),
            scale: None,
        }
    }

    /// Inverse of the rigid part, so that composing a unit-scale frame with
    /// its inverse gives the identity. The result has no scale.
    pub fn inverse(&self) -> Self {
        let inverse_orientation = self.orientation().conjugate();
        Self {
            position: Some(-self.position().apply_quaternion(inverse_orientation)),
            orientation: Some(inverse_orientation),
            scale: None,
        }
    }

    pub fn forward(&self) -> Vector3 {
        self.orientation() * Vector3::NEG_Z
    }

    pub fn up(&self) -> Vector3 {
        self.orientation() * Vector3::Y
    }

    pub fn right(&self) -> Vector3 {
        self.orientation() * Vector3::X
    }

    /// Maps a point from local to parent space: scale, rotate, translate.
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.orientation() * point.multiply(self.scale()) + self.position()
    }

    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        self.orientation() * direction
    }

    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            self.position().lerp(other.position(), t),
            Quaternion::slerp(self.orientation(), other.orientation(), t),
            self.scale().lerp(other.scale(), t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{about, unit_quaternion_strategy, vector_strategy};
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn assert_frames_close(a: &ReferenceFrame, b: &ReferenceFrame) {
        assert_abs_diff_eq!(a.position(), b.position(), epsilon = EPSILON);
        assert_abs_diff_eq!(a.orientation(), b.orientation(), epsilon = EPSILON);
        assert_abs_diff_eq!(a.scale(), b.scale(), epsilon = EPSILON);
    }

    #[test]
    fn composing_translated_parent_with_translated_child_adds_positions() {
        let parent = ReferenceFrame::from_position(Vector3::new(1.0, 0.0, 0.0));
        let child = ReferenceFrame::from_position(Vector3::new(0.0, 1.0, 0.0));
        let world = ReferenceFrame::compose(&parent, &child);
        assert_eq!(world.position(), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(world.orientation(), Quaternion::IDENTITY);
    }

    #[test]
    fn child_position_is_rotated_by_parent_orientation() {
        let parent = ReferenceFrame::from_position_orientation(
            Vector3::new(0.0, 0.0, 2.0),
            about(Vector3::Z, FRAC_PI_2),
        );
        let child = ReferenceFrame::from_position_orientation(Vector3::X, about(Vector3::X, 0.3));
        let world = ReferenceFrame::compose(&parent, &child);

        assert_abs_diff_eq!(world.position(), Vector3::new(0.0, 1.0, 2.0), epsilon = EPSILON);
        assert_abs_diff_eq!(
            world.orientation(),
            about(Vector3::Z, FRAC_PI_2) * about(Vector3::X, 0.3),
            epsilon = EPSILON
        );
    }

    #[test]
    fn composition_renormalizes_orientation() {
        let drifted = Quaternion::new(0.0, 0.0, 0.0, 1.0 + 1e-6);
        let parent = ReferenceFrame::from_position_orientation(Vector3::ZERO, drifted);
        let world = ReferenceFrame::compose(&parent, &parent);
        assert_abs_diff_eq!(world.orientation().length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn composition_does_not_propagate_scale() {
        let parent = ReferenceFrame::new(Vector3::ZERO, Quaternion::IDENTITY, Vector3::splat(2.0));
        let child = ReferenceFrame::new(Vector3::X, Quaternion::IDENTITY, Vector3::splat(3.0));
        let world = ReferenceFrame::compose(&parent, &child);
        assert_eq!(world.scale, None);
        assert_eq!(world.scale(), Vector3::ONE);
        assert_eq!(world.position(), Vector3::X);
    }

    #[test]
    fn filling_replaces_only_absent_fields() {
        let partial = ReferenceFrame {
            position: Some(Vector3::new(1.0, 2.0, 3.0)),
            orientation: None,
            scale: None,
        };
        let filled = partial.fill();
        assert_eq!(filled.position, Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(filled.orientation, Some(Quaternion::IDENTITY));
        assert_eq!(filled.scale, Some(Vector3::ONE));
    }

    #[test]
    fn absent_frame_accessors_give_identity() {
        assert_eq!(ReferenceFrame::position_of(None), Vector3::ZERO);
        assert_eq!(ReferenceFrame::orientation_of(None), Quaternion::IDENTITY);
        assert_eq!(ReferenceFrame::scale_of(None), Vector3::ONE);

        let frame = ReferenceFrame::from_position(Vector3::Y);
        assert_eq!(ReferenceFrame::position_of(Some(&frame)), Vector3::Y);
    }

    #[test]
    fn absent_fields_equal_their_defaults() {
        assert_eq!(ReferenceFrame::default(), ReferenceFrame::IDENTITY);
        assert_ne!(ReferenceFrame::default(), ReferenceFrame::from_position(Vector3::X));
    }

    #[test]
    fn transforming_point_scales_rotates_then_translates() {
        let frame = ReferenceFrame::new(
            Vector3::new(10.0, 0.0, 0.0),
            about(Vector3::Z, FRAC_PI_2),
            Vector3::new(2.0, 1.0, 1.0),
        );
        assert_abs_diff_eq!(frame.transform_point(Vector3::X), Vector3::new(10.0, 2.0, 0.0), epsilon = EPSILON);
        assert_abs_diff_eq!(frame.transform_direction(Vector3::X), Vector3::Y, epsilon = EPSILON);
    }

    #[test]
    fn basis_vectors_follow_orientation() {
        let frame = ReferenceFrame::from_position_orientation(Vector3::ZERO, about(Vector3::Y, FRAC_PI_2));
        assert_abs_diff_eq!(frame.right(), Vector3::NEG_Z, epsilon = EPSILON);
        assert_abs_diff_eq!(frame.up(), Vector3::Y, epsilon = EPSILON);
        assert_abs_diff_eq!(frame.forward(), Vector3::NEG_X, epsilon = EPSILON);
    }

    #[test]
    fn lerp_interpolates_each_component() {
        let a = ReferenceFrame::IDENTITY;
        let b = ReferenceFrame::new(Vector3::new(2.0, 0.0, 0.0), about(Vector3::Z, 1.0), Vector3::splat(3.0));
        let mid = a.lerp(&b, 0.5);
        assert_abs_diff_eq!(mid.position(), Vector3::X, epsilon = EPSILON);
        assert_abs_diff_eq!(mid.orientation(), about(Vector3::Z, 0.5), epsilon = EPSILON);
        assert_abs_diff_eq!(mid.scale(), Vector3::splat(2.0), epsilon = EPSILON);
    }

    prop_compose! {
        fn frame_strategy()(
            position in vector_strategy(100.0),
            orientation in unit_quaternion_strategy(),
        ) -> ReferenceFrame {
            ReferenceFrame::from_position_orientation(position, orientation)
        }
    }

    proptest! {
        #[test]
        fn composing_with_identity_is_a_no_op(frame in frame_strategy()) {
            let left = ReferenceFrame::compose(&ReferenceFrame::IDENTITY, &frame);
            let right = ReferenceFrame::compose(&frame, &ReferenceFrame::IDENTITY);
            for composed in [left, right] {
                prop_assert!(abs_diff_eq!(composed.position(), frame.position(), epsilon = 1e-9));
                prop_assert!(abs_diff_eq!(composed.orientation(), frame.orientation(), epsilon = 1e-9));
                prop_assert_eq!(composed.scale(), frame.scale());
            }
        }
    }

    #[test]
    fn composing_drops_scale_on_both_sides() {
        let frame = ReferenceFrame::new(Vector3::new(1.0, 2.0, 3.0), about(Vector3::Y, 0.4), Vector3::splat(2.0));
        let left = ReferenceFrame::compose(&ReferenceFrame::IDENTITY, &frame);
        let right = ReferenceFrame::compose(&frame, &ReferenceFrame::IDENTITY);
        for composed in [left, right] {
            assert_eq!(composed.scale, None);
            assert_eq!(composed.scale(), Vector3::ONE);
            assert_abs_diff_eq!(composed.position(), frame.position(), epsilon = EPSILON);
            assert_abs_diff_eq!(composed.orientation(), frame.orientation(), epsilon = EPSILON);
            assert_ne!(composed, frame);
        }
    }

    proptest! {
        #[test]
        fn composing_with_inverse_gives_identity(frame in frame_strategy()) {
            let composed = ReferenceFrame::compose(&frame, &frame.inverse());
            prop_assert!(abs_diff_eq!(composed.position(), Vector3::ZERO, epsilon = 1e-9));
            prop_assert!(abs_diff_eq!(composed.orientation(), Quaternion::IDENTITY, epsilon = 1e-9));
        }
    }

    #[test]
    fn inverse_undoes_point_transform() {
        let frame = ReferenceFrame::from_position_orientation(Vector3::new(1.0, -2.0, 0.5), about(Vector3::new(1.0, 1.0, 0.0), 0.9));
        let point = Vector3::new(0.3, 0.2, -4.0);
        let back = frame.inverse().transform_point(frame.transform_point(point));
        assert_frames_close(&frame.inverse().inverse(), &frame);
        assert_abs_diff_eq!(back, point, epsilon = EPSILON);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_frame_serializes_without_absent_fields() {
        let frame = ReferenceFrame {
            position: Some(Vector3::new(1.0, 0.0, 0.0)),
            orientation: None,
            scale: None,
        };
        let json = serde_json::to_value(frame).unwrap();
        assert_eq!(json, serde_json::json!({ "position": { "x": 1.0, "y": 0.0, "z": 0.0 } }));

        let parsed: ReferenceFrame = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ReferenceFrame::IDENTITY);
        assert_eq!(parsed.position, None);
    }
}
