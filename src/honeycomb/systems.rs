use bevy::prelude::*;
use bevy::window::WindowResized;
use bevy_egui::{EguiContexts, egui};

use super::HoneycombConfig;
use super::entities::{CellSelection, Honeycomb, cell_coordinates};
use super::palette::CellColor;
use super::surface::EguiSurface;

// ── Startup ─────────────────────────────────────────────────────────

/// Spawns the 2D camera egui renders through.
pub fn spawn_camera(mut commands: Commands, comb: Res<Honeycomb>) {
    commands.spawn((Name::new("HoneycombCamera"), Camera2d));
    info!(
        "honeycomb at {} with cell size {}",
        comb.position(),
        comb.cell_size()
    );
}

// ── Update ──────────────────────────────────────────────────────────

/// Keeps the honeycomb centered when the window changes size.
pub fn center_on_resize(mut resized: MessageReader<WindowResized>, mut comb: ResMut<Honeycomb>) {
    let Some(last) = resized.read().last() else {
        return;
    };
    let center = Vec2::new(last.width, last.height) / 2.0;
    if center != comb.position() {
        debug!("recentering honeycomb at {center}");
        comb.set_position(center);
    }
}

// ── Egui pass ───────────────────────────────────────────────────────

/// Paints the honeycomb and runs the right-click recolor menu.
pub fn paint_honeycomb(
    mut contexts: EguiContexts,
    mut comb: ResMut<Honeycomb>,
    mut selection: ResMut<CellSelection>,
    cfg: Res<HoneycombConfig>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());

            if let Err(err) = comb.draw(&mut EguiSurface::new(&painter), cfg.outline_width) {
                warn_once!("honeycomb not drawn: {err}");
            }

            if response.secondary_clicked() {
                selection.index = response
                    .interact_pointer_pos()
                    .and_then(|pos| comb.hit_test(Vec2::new(pos.x, pos.y)));
            }

            let selected = selection.index;
            let mut chosen: Option<(usize, &'static str)> = None;
            let _ = response.context_menu(|ui| {
                // Right-clicks between cells open nothing.
                let Some(index) = selected else {
                    ui.close();
                    return;
                };
                ui.label(format!("Cell {index}"));
                ui.separator();
                for color in CellColor::ALL {
                    if ui.button(color.name()).clicked() {
                        chosen = Some((index, color.name()));
                        ui.close();
                    }
                }
            });

            if let Some((index, label)) = chosen {
                match selection.apply(&mut comb, label) {
                    Ok(color) => info!("cell {index} recolored {color}"),
                    Err(err) => warn!("recolor of cell {index} failed: {err}"),
                }
            }
        });
}

/// Writes each cell's index and hex coordinate at its center.
pub fn draw_cell_labels(
    mut contexts: EguiContexts,
    comb: Res<Honeycomb>,
    cfg: Res<HoneycombConfig>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let painter = ctx.layer_painter(egui::LayerId::debug());

    for ((index, cell), hex) in comb.cells().iter().enumerate().zip(cell_coordinates()) {
        if !cell.is_drawable() {
            continue;
        }
        let pos = cell.position();
        painter.text(
            egui::pos2(pos.x, pos.y),
            egui::Align2::CENTER_CENTER,
            format!("{index} ({},{})", hex.x, hex.y),
            egui::FontId::proportional(cfg.label_font_size),
            egui::Color32::BLACK,
        );
    }
}
