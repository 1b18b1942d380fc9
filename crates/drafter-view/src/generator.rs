//! View-frame generation from selection bounds.

use drafter_core::{BoundingBox, ViewDirection, ViewFrame};
use glam::DVec3;

use crate::rotation::{compose, Axis, AxisRotation};

/// Options for frame generation.
#[derive(Debug, Clone)]
pub struct FrameOptions {
    /// Margin added to the horizontal and vertical extents of the view so
    /// content is not clipped at its exact boundary. The depth extent is
    /// never padded.
    pub padding: f64,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { padding: 1.0 }
    }
}

/// Which world half-extent feeds a view axis.
#[derive(Debug, Clone, Copy)]
enum Extent {
    /// Along world X.
    Width,
    /// Along world Y.
    Depth,
    /// Along world Z.
    Height,
}

impl Extent {
    fn pick(self, half_extents: DVec3) -> f64 {
        match self {
            Extent::Width => half_extents.x,
            Extent::Depth => half_extents.y,
            Extent::Height => half_extents.z,
        }
    }
}

/// Where the frame origin sits relative to the selection bounds.
#[derive(Debug, Clone, Copy)]
enum OriginRule {
    /// Box center.
    Center,
    /// Box center pushed onto the min face of one world axis.
    MinFace(Axis),
    /// Box center pushed onto the max face of one world axis.
    MaxFace(Axis),
    /// Box center shifted by the signed unpadded depth extent along one
    /// world axis (section cut planes).
    DepthOffset(Axis, f64),
}

impl OriginRule {
    fn apply(self, bounds: &BoundingBox, depth: f64) -> DVec3 {
        let center = bounds.center();
        match self {
            OriginRule::Center => center,
            OriginRule::MinFace(axis) => {
                axis.with_component(center, axis.component(bounds.min))
            }
            OriginRule::MaxFace(axis) => {
                axis.with_component(center, axis.component(bounds.max))
            }
            OriginRule::DepthOffset(axis, sign) => center + axis.unit() * (sign * depth),
        }
    }
}

const PLAN_ROTATIONS: [AxisRotation; 1] = [AxisRotation::new(Axis::X, 180.0)];

const ELEVATION_ROTATIONS: [AxisRotation; 2] = [
    AxisRotation::new(Axis::X, 270.0),
    AxisRotation::new(Axis::Z, 180.0),
];

const LEFT_ROTATIONS: [AxisRotation; 3] = [
    AxisRotation::new(Axis::X, -90.0),
    AxisRotation::new(Axis::Y, 90.0),
    AxisRotation::new(Axis::Z, 180.0),
];

const RIGHT_ROTATIONS: [AxisRotation; 3] = [
    AxisRotation::new(Axis::X, -90.0),
    AxisRotation::new(Axis::Y, 270.0),
    AxisRotation::new(Axis::Z, 180.0),
];

const NO_ROTATION: [AxisRotation; 0] = [];

/// Per-direction recipe: where the origin sits, which rotations orient the
/// frame, and which world half-extent lands on each view axis.
struct FrameSpec {
    origin: OriginRule,
    rotations: &'static [AxisRotation],
    horizontal: Extent,
    vertical: Extent,
    depth: Extent,
}

impl FrameSpec {
    fn for_direction(direction: ViewDirection) -> FrameSpec {
        match direction {
            ViewDirection::Plan => FrameSpec {
                origin: OriginRule::Center,
                rotations: &PLAN_ROTATIONS,
                horizontal: Extent::Width,
                vertical: Extent::Depth,
                depth: Extent::Height,
            },
            ViewDirection::Elevation => FrameSpec {
                origin: OriginRule::MinFace(Axis::Y),
                rotations: &ELEVATION_ROTATIONS,
                horizontal: Extent::Width,
                vertical: Extent::Height,
                depth: Extent::Depth,
            },
            ViewDirection::Left => FrameSpec {
                origin: OriginRule::MinFace(Axis::X),
                rotations: &LEFT_ROTATIONS,
                horizontal: Extent::Depth,
                vertical: Extent::Height,
                depth: Extent::Width,
            },
            ViewDirection::Right => FrameSpec {
                origin: OriginRule::MaxFace(Axis::X),
                rotations: &RIGHT_ROTATIONS,
                horizontal: Extent::Depth,
                vertical: Extent::Height,
                depth: Extent::Width,
            },
            ViewDirection::PlanSection => FrameSpec {
                origin: OriginRule::DepthOffset(Axis::Z, -1.0),
                rotations: &PLAN_ROTATIONS,
                horizontal: Extent::Width,
                vertical: Extent::Depth,
                depth: Extent::Height,
            },
            ViewDirection::ElevationSection => FrameSpec {
                origin: OriginRule::DepthOffset(Axis::Y, 1.0),
                rotations: &ELEVATION_ROTATIONS,
                horizontal: Extent::Width,
                vertical: Extent::Height,
                depth: Extent::Depth,
            },
            ViewDirection::LeftSection => FrameSpec {
                origin: OriginRule::DepthOffset(Axis::X, 1.0),
                rotations: &LEFT_ROTATIONS,
                horizontal: Extent::Depth,
                vertical: Extent::Height,
                depth: Extent::Width,
            },
            ViewDirection::RightSection => FrameSpec {
                origin: OriginRule::DepthOffset(Axis::X, -1.0),
                rotations: &RIGHT_ROTATIONS,
                horizontal: Extent::Depth,
                vertical: Extent::Height,
                depth: Extent::Width,
            },
            ViewDirection::ReflectedCeilingPlan => FrameSpec {
                origin: OriginRule::MinFace(Axis::Z),
                rotations: &NO_ROTATION,
                horizontal: Extent::Width,
                vertical: Extent::Depth,
                depth: Extent::Height,
            },
        }
    }
}

/// Generate the oriented frame and frame-local box for one view of the
/// given selection bounds.
///
/// The returned box is expressed in the frame's local coordinates and is
/// symmetric about the frame origin. Its horizontal and vertical
/// half-extents carry `options.padding`; its depth half-extent does not.
/// Zero-extent bounds are legal and produce zero-thickness local boxes.
pub fn generate(
    bounds: &BoundingBox,
    direction: ViewDirection,
    options: &FrameOptions,
) -> (ViewFrame, BoundingBox) {
    let spec = FrameSpec::for_direction(direction);
    let half_extents = bounds.half_extents();

    let horizontal = spec.horizontal.pick(half_extents) + options.padding;
    let vertical = spec.vertical.pick(half_extents) + options.padding;
    let depth = spec.depth.pick(half_extents);

    let origin = spec.origin.apply(bounds, depth);
    let frame = ViewFrame::from_rotation(origin, compose(spec.rotations));
    let local = BoundingBox::new(
        DVec3::new(-horizontal, -vertical, -depth),
        DVec3::new(horizontal, vertical, depth),
    );

    (frame, local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-9;

    fn sample_bounds() -> BoundingBox {
        BoundingBox::new(DVec3::ZERO, DVec3::new(10.0, 20.0, 6.0))
    }

    fn assert_vec_eq(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < TOL,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_plan_frame() {
        let (frame, local) = generate(&sample_bounds(), ViewDirection::Plan, &FrameOptions::default());

        assert_vec_eq(frame.origin, DVec3::new(5.0, 10.0, 3.0));
        assert_vec_eq(frame.basis_x, DVec3::X);
        assert_vec_eq(frame.basis_y, DVec3::NEG_Y);
        assert_vec_eq(frame.basis_z, DVec3::NEG_Z);
        assert_vec_eq(local.min, DVec3::new(-6.0, -11.0, -3.0));
        assert_vec_eq(local.max, DVec3::new(6.0, 11.0, 3.0));
    }

    #[test]
    fn test_elevation_origin_on_front_face() {
        let (frame, local) =
            generate(&sample_bounds(), ViewDirection::Elevation, &FrameOptions::default());

        assert_vec_eq(frame.origin, DVec3::new(5.0, 0.0, 3.0));
        assert_vec_eq(local.max, DVec3::new(6.0, 4.0, 10.0));
    }

    #[test]
    fn test_left_and_right_origins() {
        let bounds = sample_bounds();
        let options = FrameOptions::default();

        let (left, _) = generate(&bounds, ViewDirection::Left, &options);
        let (right, _) = generate(&bounds, ViewDirection::Right, &options);

        assert_vec_eq(left.origin, DVec3::new(0.0, 10.0, 3.0));
        assert_vec_eq(right.origin, DVec3::new(10.0, 10.0, 3.0));
    }

    #[test]
    fn test_side_views_swap_extents() {
        let (_, local) = generate(&sample_bounds(), ViewDirection::Left, &FrameOptions::default());

        // Horizontal shows world depth, vertical world height, depth world width.
        assert_vec_eq(local.max, DVec3::new(11.0, 4.0, 5.0));
    }

    #[test]
    fn test_reflected_ceiling_plan_identity_basis() {
        let (frame, local) = generate(
            &sample_bounds(),
            ViewDirection::ReflectedCeilingPlan,
            &FrameOptions::default(),
        );

        assert_vec_eq(frame.origin, DVec3::new(5.0, 10.0, 0.0));
        assert_vec_eq(frame.basis_x, DVec3::X);
        assert_vec_eq(frame.basis_y, DVec3::Y);
        assert_vec_eq(frame.basis_z, DVec3::Z);
        assert_vec_eq(local.max, DVec3::new(6.0, 11.0, 3.0));
    }

    #[test]
    fn test_all_directions_orthonormal() {
        let bounds = sample_bounds();
        let options = FrameOptions::default();

        for direction in ViewDirection::ALL {
            let (frame, _) = generate(&bounds, direction, &options);
            assert!(frame.is_orthonormal(TOL), "{direction:?} basis is not orthonormal");
        }
    }

    #[test]
    fn test_local_box_symmetric_about_origin() {
        let bounds = sample_bounds();
        let options = FrameOptions::default();

        for direction in ViewDirection::ALL {
            let (_, local) = generate(&bounds, direction, &options);
            assert_vec_eq(local.min, -local.max);
        }
    }

    #[test]
    fn test_depth_axis_carries_no_padding() {
        let bounds = sample_bounds();
        let half = bounds.half_extents();
        let options = FrameOptions { padding: 2.5 };

        let expected_depth = [
            (ViewDirection::Plan, half.z),
            (ViewDirection::Elevation, half.y),
            (ViewDirection::Left, half.x),
            (ViewDirection::Right, half.x),
            (ViewDirection::ReflectedCeilingPlan, half.z),
        ];

        for (direction, depth) in expected_depth {
            let (_, local) = generate(&bounds, direction, &options);
            assert!(
                (local.max.z - depth).abs() < TOL,
                "{direction:?} depth half-extent is padded"
            );
        }
    }

    #[test]
    fn test_section_variants_shift_origin_only() {
        let bounds = sample_bounds();
        let half = bounds.half_extents();
        let options = FrameOptions::default();

        let expected_offsets = [
            (ViewDirection::PlanSection, DVec3::new(0.0, 0.0, -half.z)),
            (ViewDirection::ElevationSection, DVec3::new(0.0, half.y, 0.0)),
            (ViewDirection::LeftSection, DVec3::new(half.x, 0.0, 0.0)),
            (ViewDirection::RightSection, DVec3::new(-half.x, 0.0, 0.0)),
        ];

        for (section, offset) in expected_offsets {
            let (section_frame, section_local) = generate(&bounds, section, &options);
            let (base_frame, base_local) = generate(&bounds, section.base(), &options);

            assert_vec_eq(section_frame.basis_x, base_frame.basis_x);
            assert_vec_eq(section_frame.basis_y, base_frame.basis_y);
            assert_vec_eq(section_frame.basis_z, base_frame.basis_z);
            assert_vec_eq(section_local.min, base_local.min);
            assert_vec_eq(section_local.max, base_local.max);
            assert_vec_eq(section_frame.origin, bounds.center() + offset);
        }
    }

    #[test]
    fn test_zero_extent_bounds_tolerated() {
        let flat = BoundingBox::new(DVec3::new(2.0, 3.0, 5.0), DVec3::new(8.0, 3.0, 5.0));
        let (frame, local) = generate(&flat, ViewDirection::Plan, &FrameOptions::default());

        assert!(frame.is_orthonormal(TOL));
        assert_vec_eq(local.max, DVec3::new(4.0, 1.0, 0.0));
    }

    proptest! {
        #[test]
        fn generated_bases_stay_orthonormal(
            min in prop::array::uniform3(-100.0f64..100.0),
            extent in prop::array::uniform3(0.0f64..50.0),
            index in 0usize..9,
            padding in 0.0f64..10.0,
        ) {
            let min = DVec3::new(min[0], min[1], min[2]);
            let extent = DVec3::new(extent[0], extent[1], extent[2]);
            let bounds = BoundingBox::new(min, min + extent);
            let direction = ViewDirection::ALL[index];

            let (frame, local) = generate(&bounds, direction, &FrameOptions { padding });

            prop_assert!(frame.is_orthonormal(TOL));
            prop_assert!((local.min + local.max).length() < TOL);
        }
    }
}
