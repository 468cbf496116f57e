use bevy::prelude::Vec2;
use bevy_egui::egui;

use super::palette::CellColor;
use crate::math::HEX_VERTS;

/// Something a hexagon can be filled onto.
///
/// Receives the six vertices in clockwise order, the fill color, and the
/// width of the black outline.
pub trait HexSurface {
    /// Fills and outlines one closed hexagon.
    fn fill_polygon(&mut self, points: &[Vec2; HEX_VERTS], fill: CellColor, outline_width: f32);
}

/// [`HexSurface`] backed by an egui painter.
///
/// Points are logical window pixels, which is what egui paints in.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiSurface<'a> {
    /// Wraps a painter for the duration of one frame.
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl HexSurface for EguiSurface<'_> {
    fn fill_polygon(&mut self, points: &[Vec2; HEX_VERTS], fill: CellColor, outline_width: f32) {
        if points.iter().any(|p| !p.is_finite()) {
            return;
        }
        let [r, g, b] = fill.rgb();
        let stroke = if outline_width > 0.0 {
            egui::Stroke::new(outline_width, egui::Color32::BLACK)
        } else {
            egui::Stroke::NONE
        };
        let points = points.iter().map(|p| egui::pos2(p.x, p.y)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            egui::Color32::from_rgb(r, g, b),
            stroke,
        ));
    }
}

/// Surface that records what it was asked to draw.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub polygons: Vec<([Vec2; HEX_VERTS], CellColor, f32)>,
}

#[cfg(test)]
impl HexSurface for RecordingSurface {
    fn fill_polygon(&mut self, points: &[Vec2; HEX_VERTS], fill: CellColor, outline_width: f32) {
        self.polygons.push((*points, fill, outline_width));
    }
}
