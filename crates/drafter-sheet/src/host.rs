//! Host document ports.
//!
//! The engine never talks to a host API directly. A host integration
//! (the plugin shell that owns the document, its transactions, and its
//! element storage) implements [`ViewHost`] and injects it; everything in
//! this workspace stays host-free and testable against a mock.

use drafter_core::{BoundingBox, SheetError, SheetOutline, ViewFrame};
use glam::DVec2;

/// Document-mutation capability a host integration supplies.
pub trait ViewHost {
    /// Handle to a created view.
    type ViewId: Copy;
    /// Handle to a created sheet.
    type SheetId: Copy;

    /// Create a section view oriented by `frame` and clipped to the
    /// frame-local `bounds`.
    fn create_view(
        &mut self,
        frame: &ViewFrame,
        bounds: &BoundingBox,
    ) -> Result<Self::ViewId, SheetError>;

    /// Create an empty drawing sheet with the given sheet number.
    fn create_sheet(&mut self, number: &str) -> Result<Self::SheetId, SheetError>;

    /// Usable extent of a sheet, in sheet coordinates.
    fn sheet_outline(&self, sheet: Self::SheetId) -> SheetOutline;

    /// Place a created view on a sheet at the given anchor point.
    fn place_view(
        &mut self,
        sheet: Self::SheetId,
        view: Self::ViewId,
        anchor: DVec2,
    ) -> Result<(), SheetError>;
}
