use egui::{Pos2, Rect};

use crate::geometry::{CellPos, Region};
use crate::tools::Modifiers;

/// Translates between screen space and grid cells for one laid-out canvas.
///
/// Built fresh each frame from the allocated canvas rect; the editing core
/// only ever sees the discrete coordinates this hands out.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMapper {
    origin: Pos2,
    cell_size: f32,
    cols: usize,
    rows: usize,
}

impl CanvasMapper {
    pub fn new(origin: Pos2, cell_size: f32, cols: usize, rows: usize) -> Self {
        Self { origin, cell_size, cols, rows }
    }

    /// The cell under a continuous pointer position, or `None` outside the
    /// grid (the event is then dropped, per the core's contract).
    pub fn cell_at(&self, pos: Pos2) -> Option<CellPos> {
        let x = ((pos.x - self.origin.x) / self.cell_size).floor();
        let y = ((pos.y - self.origin.y) / self.cell_size).floor();
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(CellPos::new(x, y))
    }

    /// Screen rectangle of a single cell.
    pub fn cell_rect(&self, pos: CellPos) -> Rect {
        let min = Pos2::new(
            self.origin.x + pos.x as f32 * self.cell_size,
            self.origin.y + pos.y as f32 * self.cell_size,
        );
        Rect::from_min_size(min, egui::vec2(self.cell_size, self.cell_size))
    }

    /// Screen rectangle covering an inclusive cell region.
    pub fn region_rect(&self, region: Region) -> Rect {
        let n = region.normalized();
        self.cell_rect(n.start).union(self.cell_rect(n.end))
    }
}

impl From<egui::Modifiers> for Modifiers {
    fn from(mods: egui::Modifiers) -> Self {
        Self { shift: mods.shift }
    }
}
