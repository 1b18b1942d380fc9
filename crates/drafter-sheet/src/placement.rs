//! Sheet anchor arithmetic.

use drafter_core::{SheetError, SheetLocation, SheetOutline};
use glam::DVec2;

/// Anchor point on the sheet for the given location.
///
/// Rows select `max.y`, the vertical midpoint, or `min.y`; columns select
/// `min.x`, the horizontal midpoint, or `max.x`. `Custom` has no computed
/// anchor and fails; callers position such views themselves.
pub fn anchor_point(outline: &SheetOutline, location: SheetLocation) -> Result<DVec2, SheetError> {
    let min = outline.min;
    let max = outline.max;
    let center = outline.center();

    let anchor = match location {
        SheetLocation::TopLeft => DVec2::new(min.x, max.y),
        SheetLocation::TopCenter => DVec2::new(center.x, max.y),
        SheetLocation::TopRight => DVec2::new(max.x, max.y),
        SheetLocation::MiddleLeft => DVec2::new(min.x, center.y),
        SheetLocation::MiddleCenter => center,
        SheetLocation::MiddleRight => DVec2::new(max.x, center.y),
        SheetLocation::BottomLeft => DVec2::new(min.x, min.y),
        SheetLocation::BottomCenter => DVec2::new(center.x, min.y),
        SheetLocation::BottomRight => DVec2::new(max.x, min.y),
        SheetLocation::Custom => return Err(SheetError::CustomLocation),
    };

    Ok(anchor)
}
