use crate::color::{ColorHistory, ColorValue};
use crate::config::EditorConfig;
use crate::geometry::{CellPos, Region};
use crate::grid::Grid;

/// The document the tools mutate: the grid plus the auxiliary state that
/// travels with it (active color, selection, recently used colors).
///
/// Paint operations route through this type so that every successful color
/// application feeds the color history tracker.
#[derive(Debug)]
pub struct EditorModel {
    pub grid: Grid,
    pub active_color: ColorValue,
    pub selection: Option<Region>,
    pub color_history: ColorHistory,
}

impl EditorModel {
    pub fn new(config: &EditorConfig) -> Self {
        let mut color_history = ColorHistory::new(config.max_color_history);
        color_history.seed(&config.color);
        Self {
            grid: Grid::new(config.cols, config.rows),
            active_color: config.color.clone(),
            selection: None,
            color_history,
        }
    }

    /// Paint the active color onto a single used cell. Returns true when the
    /// grid changed.
    pub fn paint(&mut self, pos: CellPos) -> bool {
        let color = self.active_color.clone();
        let changed = self.grid.paint_cell(pos, &color);
        if changed {
            self.color_history.record_use(&color, &self.grid);
        }
        changed
    }

    /// Paint the active color along the discrete line from `anchor` to
    /// `to`, skipping unused cells. Returns true when any cell changed.
    pub fn paint_line(&mut self, anchor: CellPos, to: CellPos) -> bool {
        let color = self.active_color.clone();
        let mut changed = false;
        for pos in crate::geometry::line_cells(anchor, to) {
            changed |= self.grid.paint_cell(pos, &color);
        }
        if changed {
            self.color_history.record_use(&color, &self.grid);
        }
        changed
    }

    /// Fill every used cell in `region` (clamped to bounds) with the active
    /// color. Returns true when any cell changed.
    pub fn fill(&mut self, region: Region) -> bool {
        let color = self.active_color.clone();
        let changed = self.grid.fill_region(region, &color);
        if changed {
            self.color_history.record_use(&color, &self.grid);
        }
        changed
    }

    /// Toggle a cell between used and excluded.
    pub fn toggle_used(&mut self, pos: CellPos) -> bool {
        self.grid.toggle_used(pos)
    }
}
