//! Sheet templates: which views to generate and where each lands.

use drafter_core::{union_bounds, Bounded, SheetError, SheetLocation, ViewDirection};
use drafter_view::{generate, FrameOptions};
use tracing::{debug, info};

use crate::host::ViewHost;
use crate::placement::anchor_point;

/// One view of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub direction: ViewDirection,
    pub location: SheetLocation,
}

/// A sheet layout: the views to generate around a selection and the anchor
/// each one is placed at.
#[derive(Debug, Clone)]
pub struct SheetTemplate {
    pub sheet_number: String,
    pub entries: Vec<TemplateEntry>,
    pub options: FrameOptions,
}

impl SheetTemplate {
    pub fn new(sheet_number: impl Into<String>) -> Self {
        Self {
            sheet_number: sheet_number.into(),
            entries: Vec::new(),
            options: FrameOptions::default(),
        }
    }

    /// Add a view to the template.
    pub fn with_view(mut self, direction: ViewDirection, location: SheetLocation) -> Self {
        self.entries.push(TemplateEntry { direction, location });
        self
    }

    /// Override the frame generation options.
    pub fn with_options(mut self, options: FrameOptions) -> Self {
        self.options = options;
        self
    }

    /// The foundation drawing layout: plan beside front elevation.
    pub fn foundation(sheet_number: impl Into<String>) -> Self {
        Self::new(sheet_number)
            .with_view(ViewDirection::Plan, SheetLocation::MiddleLeft)
            .with_view(ViewDirection::Elevation, SheetLocation::MiddleCenter)
    }

    /// Run the template against a host: union the selection bounds, create
    /// the sheet, then generate and place every view.
    ///
    /// Fails without touching the host when the selection is empty or has
    /// no geometry; host failures abort the remaining entries.
    pub fn run<H, T>(&self, host: &mut H, elements: &[T]) -> Result<H::SheetId, SheetError>
    where
        H: ViewHost,
        T: Bounded,
    {
        let bounds = union_bounds(elements)?.ok_or(SheetError::NoGeometry)?;
        debug!(
            elements = elements.len(),
            min = ?bounds.min,
            max = ?bounds.max,
            "selection bounds resolved"
        );

        let sheet = host.create_sheet(&self.sheet_number)?;
        let outline = host.sheet_outline(sheet);

        for entry in &self.entries {
            let (frame, local) = generate(&bounds, entry.direction, &self.options);
            let view = host.create_view(&frame, &local)?;
            let anchor = anchor_point(&outline, entry.location)?;
            host.place_view(sheet, view, anchor)?;
            debug!(direction = ?entry.direction, location = ?entry.location, "view placed");
        }

        info!(
            sheet = %self.sheet_number,
            views = self.entries.len(),
            "sheet assembled"
        );
        Ok(sheet)
    }
}
