use bevy::prelude::*;
use hexx::Hex;

use super::palette::CellColor;
use super::surface::HexSurface;
use crate::error::HoneycombError;
use crate::math::{self, CELL_COUNT, HEX_VERTS};

/// One hexagonal cell of a [`Honeycomb`].
///
/// A fresh cell has size 0 at the origin, which leaves it undrawable until
/// the owning honeycomb lays it out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct Cell {
    size: f32,
    position: Vec2,
    color: CellColor,
}

impl Cell {
    /// Height of the hexagon from top vertex to bottom vertex.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Center of the hexagon in window pixels.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current fill color.
    pub fn color(&self) -> CellColor {
        self.color
    }

    /// Both a positive size and a defined position are set.
    pub fn is_drawable(&self) -> bool {
        self.size > 0.0 && math::is_defined(self.position)
    }

    /// The six outline vertices, clockwise from the top.
    pub fn vertices(&self) -> Result<[Vec2; HEX_VERTS], HoneycombError> {
        math::derive_vertices(self.position, self.size)
    }

    /// Inscribed-circle hit test; an undrawable cell contains nothing.
    pub fn contains(&self, point: Vec2) -> bool {
        self.is_drawable() && math::point_in_hex(point, self.position, self.size)
    }

    /// Fills this cell onto `surface`.
    pub fn draw<S: HexSurface + ?Sized>(
        &self,
        surface: &mut S,
        outline_width: f32,
    ) -> Result<(), HoneycombError> {
        let points = self.vertices()?;
        surface.fill_polygon(&points, self.color, outline_width);
        Ok(())
    }

    pub(crate) fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// Undefined points are ignored and the old position kept.
    pub(crate) fn set_position(&mut self, position: Vec2) {
        if math::is_defined(position) {
            self.position = position;
        } else {
            debug!("ignoring undefined cell position");
        }
    }

    pub(crate) fn set_color(&mut self, color: CellColor) {
        self.color = color;
    }
}

/// Seven cells laid out as one center cell and a ring of six.
///
/// Index 0 is the center; 1..=6 walk the ring clockwise starting at the
/// right. Changing the cell size or the position lays all cells out again
/// immediately. Only colors can be changed from outside, through
/// [`Honeycomb::set_cell_color`].
#[derive(Resource, Clone, Debug, Default, PartialEq, Reflect)]
pub struct Honeycomb {
    cell_size: f32,
    position: Vec2,
    cells: [Cell; CELL_COUNT],
}

impl Honeycomb {
    /// An uninitialized honeycomb: cell size 0, every cell at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positive cell size has been set.
    pub fn is_initialized(&self) -> bool {
        self.cell_size > 0.0
    }

    /// Size shared by every cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Center of the center cell.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Sets the shared cell size and lays the cells out again.
    pub fn set_cell_size(&mut self, size: f32) {
        self.cell_size = size;
        self.recompute();
    }

    /// Moves the honeycomb and lays the cells out again.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.recompute();
    }

    /// Strict access: indices past the last cell are an error.
    pub fn cell(&self, index: usize) -> Result<&Cell, HoneycombError> {
        self.cells
            .get(index)
            .ok_or(HoneycombError::IndexOutOfRange { index })
    }

    /// Permissive access: indices past the last cell return the last cell.
    pub fn cell_clamped(&self, index: usize) -> &Cell {
        &self.cells[index.min(CELL_COUNT - 1)]
    }

    /// Recolors one cell.
    pub fn set_cell_color(&mut self, index: usize, color: CellColor) -> Result<(), HoneycombError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(HoneycombError::IndexOutOfRange { index })?;
        cell.set_color(color);
        Ok(())
    }

    /// Index of the first cell whose hit region contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        if !self.is_initialized() {
            return None;
        }
        self.cells.iter().position(|cell| cell.contains(point))
    }

    /// Draws every cell in storage order.
    ///
    /// Every cell is checked before the first one is drawn, so a failure
    /// leaves the surface untouched.
    pub fn draw<S: HexSurface + ?Sized>(
        &self,
        surface: &mut S,
        outline_width: f32,
    ) -> Result<(), HoneycombError> {
        if !self.is_initialized() {
            return Err(HoneycombError::NotInitialized);
        }
        if let Some(cell) = self.cells.iter().find(|cell| !cell.is_drawable()) {
            return Err(HoneycombError::InvalidGeometry {
                size: cell.size(),
                center: cell.position(),
            });
        }
        for cell in &self.cells {
            cell.draw(surface, outline_width)?;
        }
        Ok(())
    }

    fn recompute(&mut self) {
        if !self.is_initialized() {
            return;
        }
        let positions = math::ring_positions(self.position, self.cell_size);
        for (cell, position) in self.cells.iter_mut().zip(positions) {
            cell.set_size(self.cell_size);
            cell.set_position(position);
        }
    }
}

/// Axial hex coordinates of the cells, in the same order as
/// [`Honeycomb::cells`].
pub fn cell_coordinates() -> [Hex; CELL_COUNT] {
    [
        Hex::ZERO,
        Hex::new(1, 0),
        Hex::new(0, 1),
        Hex::new(-1, 1),
        Hex::new(-1, 0),
        Hex::new(0, -1),
        Hex::new(1, -1),
    ]
}

/// The cell the last right-click landed on, if any.
///
/// The context menu recolors through this index instead of holding on to
/// the cell itself.
#[derive(Resource, Default, Debug, Reflect)]
pub struct CellSelection {
    /// Index into [`Honeycomb::cells`].
    pub index: Option<usize>,
}

impl CellSelection {
    /// Applies a menu label to the selected cell and clears the selection.
    ///
    /// Labels that name no palette color paint the cell white.
    pub fn apply(&mut self, comb: &mut Honeycomb, label: &str) -> Result<CellColor, HoneycombError> {
        let index = self.index.ok_or(HoneycombError::NothingSelected)?;
        let color = CellColor::from_label(label);
        comb.set_cell_color(index, color)?;
        self.index = None;
        Ok(color)
    }
}
