//! Selection bounding volumes.

use crate::errors::BoundsError;
use crate::types::BoundingBox;

/// Capability of a model element to report its world-space bounds.
///
/// Non-geometric elements (annotations, groups, unplaced types) return
/// `None` and are skipped when unioning a selection.
pub trait Bounded {
    fn bounding_box(&self) -> Option<BoundingBox>;
}

impl Bounded for BoundingBox {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(*self)
    }
}

impl Bounded for Option<BoundingBox> {
    fn bounding_box(&self) -> Option<BoundingBox> {
        *self
    }
}

/// Smallest axis-aligned box containing every geometric element of the
/// selection.
///
/// Elements without geometry are skipped. Returns `Ok(None)` when nothing
/// in the selection had a box; the caller decides whether that is fatal.
/// A single-element selection returns that element's own box directly.
pub fn union_bounds<T: Bounded>(elements: &[T]) -> Result<Option<BoundingBox>, BoundsError> {
    if elements.is_empty() {
        return Err(BoundsError::EmptySelection);
    }
    if let [element] = elements {
        return Ok(element.bounding_box());
    }

    Ok(elements
        .iter()
        .filter_map(Bounded::bounding_box)
        .reduce(|a, b| a.union(&b)))
}
