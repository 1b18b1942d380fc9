//! Error types for the drafter engine.

use thiserror::Error;

/// Top-level error type for the drafter engine.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

/// Errors while building selection bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("selection is empty")]
    EmptySelection,
}

/// Errors while generating view frames.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid view direction code: {code}")]
    InvalidDirection { code: i32 },
}

/// Errors while composing a drawing sheet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("bounds error: {0}")]
    Bounds(#[from] BoundsError),

    #[error("no element in the selection has geometry")]
    NoGeometry,

    #[error("custom sheet locations have no computed anchor")]
    CustomLocation,

    #[error("host operation failed: {reason}")]
    Host { reason: String },
}
