//! Seven-cell honeycomb: layout, palette, drawing, and the recolor menu.
//!
//! The honeycomb lives in a [`Honeycomb`] resource and is painted every egui
//! pass onto a full-window painter. Right-clicking a cell opens a context
//! menu listing the palette by name.

mod entities;
mod palette;
mod surface;
mod systems;

pub use entities::{Cell, CellSelection, Honeycomb, cell_coordinates};
pub use palette::CellColor;
pub use surface::{EguiSurface, HexSurface};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::AppState;
use crate::math::CELL_COUNT;

/// Configuration for the honeycomb and the window it is drawn in.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct HoneycombConfig {
    /// Height of every cell, top vertex to bottom vertex, in logical pixels.
    pub cell_size: f32,
    /// Side of the square window; the honeycomb starts at its center.
    pub window_size: u32,
    /// Width of the black cell outline.
    pub outline_width: f32,
    /// Starting color of each cell, in cell order.
    pub initial_colors: [CellColor; CELL_COUNT],
    /// Font size of the debug cell labels.
    pub label_font_size: f32,
    /// Background clear color.
    pub clear_color: Color,
}

impl Default for HoneycombConfig {
    fn default() -> Self {
        Self {
            cell_size: 256.0,
            window_size: 768,
            outline_width: 2.0,
            initial_colors: [
                CellColor::White,
                CellColor::Red,
                CellColor::Orange,
                CellColor::Yellow,
                CellColor::Lime,
                CellColor::Green,
                CellColor::Cyan,
            ],
            label_font_size: 14.0,
            clear_color: Color::srgb(0.94, 0.94, 0.94),
        }
    }
}

impl HoneycombConfig {
    /// Builds the honeycomb centered in the configured window.
    pub fn build(&self) -> Honeycomb {
        let mut comb = Honeycomb::new();
        comb.set_position(Vec2::splat(self.window_size as f32 / 2.0));
        comb.set_cell_size(self.cell_size);
        for (index, color) in self.initial_colors.into_iter().enumerate() {
            if let Err(err) = comb.set_cell_color(index, color) {
                warn!("initial color skipped: {err}");
            }
        }
        comb
    }
}

/// Honeycomb plugin: owns the honeycomb resource and its egui systems.
pub struct HoneycombPlugin(pub HoneycombConfig);

impl Plugin for HoneycombPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HoneycombConfig>()
            .register_type::<Honeycomb>()
            .register_type::<CellSelection>()
            .register_type::<CellColor>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .insert_resource(self.0.build())
            .init_resource::<CellSelection>()
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(Update, systems::center_on_resize)
            .add_systems(EguiPrimaryContextPass, systems::paint_honeycomb)
            .add_systems(
                EguiPrimaryContextPass,
                systems::draw_cell_labels
                    .after(systems::paint_honeycomb)
                    .run_if(in_state(AppState::Inspecting)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_the_reference_scene() {
        let comb = HoneycombConfig::default().build();
        assert!(comb.is_initialized());
        assert_eq!(comb.position(), Vec2::new(384.0, 384.0));
        assert_eq!(comb.cell_size(), 256.0);
        let colors: Vec<CellColor> = comb.cells().iter().map(Cell::color).collect();
        assert_eq!(colors, HoneycombConfig::default().initial_colors);
        assert_eq!(comb.hit_test(Vec2::new(384.0, 384.0)), Some(0));
    }

    #[test]
    fn non_positive_cell_size_builds_uninitialized_comb() {
        let cfg = HoneycombConfig {
            cell_size: 0.0,
            ..default()
        };
        assert!(!cfg.build().is_initialized());
    }
}
