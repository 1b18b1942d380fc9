//! Assemble a foundation sheet from an in-memory selection.
//!
//! Run with `RUST_LOG=debug cargo run --example foundation_sheet` to see
//! the placement trace.

use drafter_core::{BoundingBox, DraftError, SheetError, SheetOutline, ViewFrame};
use drafter_sheet::{SheetTemplate, ViewHost};
use glam::{DVec2, DVec3};
use tracing_subscriber::EnvFilter;

/// Minimal in-memory host: stores everything it is asked to create.
#[derive(Default)]
struct MemoryHost {
    views: Vec<(ViewFrame, BoundingBox)>,
    sheets: Vec<String>,
    placements: Vec<(usize, usize, DVec2)>,
}

impl ViewHost for MemoryHost {
    type ViewId = usize;
    type SheetId = usize;

    fn create_view(
        &mut self,
        frame: &ViewFrame,
        bounds: &BoundingBox,
    ) -> Result<usize, SheetError> {
        self.views.push((*frame, *bounds));
        Ok(self.views.len() - 1)
    }

    fn create_sheet(&mut self, number: &str) -> Result<usize, SheetError> {
        self.sheets.push(number.to_string());
        Ok(self.sheets.len() - 1)
    }

    fn sheet_outline(&self, _sheet: usize) -> SheetOutline {
        // A1 landscape, millimeters.
        SheetOutline::new(DVec2::ZERO, DVec2::new(841.0, 594.0))
    }

    fn place_view(&mut self, sheet: usize, view: usize, anchor: DVec2) -> Result<(), SheetError> {
        self.placements.push((sheet, view, anchor));
        Ok(())
    }
}

fn main() -> Result<(), DraftError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // A footing with a pier on top.
    let selection = vec![
        BoundingBox::new(DVec3::new(-1.5, -1.5, -0.6), DVec3::new(1.5, 1.5, 0.0)),
        BoundingBox::new(DVec3::new(-0.4, -0.4, 0.0), DVec3::new(0.4, 0.4, 2.4)),
    ];

    let mut host = MemoryHost::default();
    let sheet = SheetTemplate::foundation("A101").run(&mut host, &selection)?;

    println!("sheet {} ({})", host.sheets[sheet], sheet);
    for (frame, local) in &host.views {
        println!(
            "  view at origin {:?}, extents {:?}",
            frame.origin,
            local.size()
        );
    }
    for (sheet, view, anchor) in &host.placements {
        println!("  viewport sheet={sheet} view={view} anchor={anchor:?}");
    }

    Ok(())
}
