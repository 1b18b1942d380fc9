//! Sheet composition for the drafter engine.
//!
//! This crate turns generated view frames into a finished drawing sheet:
//! - Anchor arithmetic mapping [`drafter_core::SheetLocation`] values onto
//!   a sheet outline
//! - The [`ViewHost`] port a host integration implements to create views,
//!   sheets, and viewports in its own document model
//! - [`SheetTemplate`], which runs the whole selection-to-sheet flow
//!   against a host

mod host;
mod placement;
mod template;

pub use host::ViewHost;
pub use placement::anchor_point;
pub use template::{SheetTemplate, TemplateEntry};
