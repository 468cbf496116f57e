#![warn(missing_docs)]
//! Honeycomb viewer.
//!
//! Draws a cluster of seven hexagonal cells in a window and lets the user
//! recolor a cell from a right-click menu. The geometry lives in [`math`];
//! the Bevy/egui side lives in [`honeycomb`].

pub mod error;
pub mod honeycomb;
pub mod math;

use bevy::prelude::*;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum AppState {
    /// Honeycomb on screen, menu active.
    #[default]
    Running,
    /// World inspector and cell labels shown (Tab to toggle).
    Inspecting,
}
