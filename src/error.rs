//! Error type shared by the geometry core and the honeycomb.

use bevy::prelude::Vec2;
use thiserror::Error;

/// Failures reported by the geometry core and the honeycomb.
///
/// Every variant is a precondition violation. Callers get the error back and
/// may retry with corrected input; nothing is mutated when one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoneycombError {
    /// Non-positive size or an undefined (origin) center.
    #[error("hexagon geometry is invalid (size {size}, center {center})")]
    InvalidGeometry {
        /// Size that was requested.
        size: f32,
        /// Center that was requested.
        center: Vec2,
    },
    /// The honeycomb has no positive cell size yet.
    #[error("honeycomb is not initialized")]
    NotInitialized,
    /// A strict cell accessor was given an index past the last cell.
    #[error("cell index {index} is out of range (0..{count})", count = crate::math::CELL_COUNT)]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
    },
    /// A color was chosen while no cell was selected.
    #[error("no cell is selected")]
    NothingSelected,
    /// A label that names no palette color.
    #[error("unknown cell color {0:?}")]
    UnknownColor(String),
}
