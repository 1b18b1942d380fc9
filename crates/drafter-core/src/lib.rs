//! Core types and utilities for the drafter engine.
//!
//! This crate provides the foundational pieces used across all other
//! drafter crates:
//! - Geometry value types (bounding boxes, view frames, directions)
//! - The selection bounds builder
//! - Sheet anchor types
//! - Error types

pub mod bounds;
pub mod errors;
pub mod types;

pub use bounds::*;
pub use errors::*;
pub use types::*;
