//! View-frame generation for drafting.
//!
//! Given the axis-aligned bounds of a selection and a requested view
//! direction, this crate produces an oriented camera frame and a box
//! expressed in that frame's local coordinates, sized to show the whole
//! selection with a padding margin:
//!
//! ```
//! use drafter_core::{BoundingBox, ViewDirection};
//! use drafter_view::{generate, FrameOptions};
//! use glam::DVec3;
//!
//! let bounds = BoundingBox::new(DVec3::ZERO, DVec3::new(10.0, 20.0, 6.0));
//! let (frame, local) = generate(&bounds, ViewDirection::Plan, &FrameOptions::default());
//!
//! assert_eq!(frame.origin, DVec3::new(5.0, 10.0, 3.0));
//! assert_eq!(local.max, DVec3::new(6.0, 11.0, 3.0));
//! ```

mod generator;
mod rotation;

pub use generator::{generate, FrameOptions};
pub use rotation::{compose, Axis, AxisRotation};
