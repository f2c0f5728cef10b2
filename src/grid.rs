use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::geometry::{CellPos, Region};

/// A single pattern cell.
///
/// `color` only carries meaning while `used` is true; excluding a cell
/// always clears it, and re-including the cell does not bring the old color
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub color: Option<ColorValue>,
    pub used: bool,
}

impl Cell {
    /// The blank cell every new grid position starts from.
    pub fn blank() -> Self {
        Self { color: None, used: true }
    }
}

/// The rectangular cell array the editor operates on.
///
/// Every row has identical length. `Clone` is a full value copy — cells own
/// their data, so no two grids (live or snapshot) ever share cell storage.
/// Serializes transparently as the nested array-of-rows-of-cells the
/// persisted state format expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a `cols × rows` grid of blank cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            rows: vec![vec![Cell::blank(); cols]; rows],
        }
    }

    /// Build a grid of the new dimensions, copying this grid's cell at the
    /// same (x, y) for every position inside the overlap of old and new
    /// bounds. Newly introduced positions are blank.
    pub fn resized(&self, cols: usize, rows: usize) -> Self {
        let mut out = Vec::with_capacity(rows);
        for y in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for x in 0..cols {
                match self.rows.get(y).and_then(|r| r.get(x)) {
                    Some(cell) => row.push(cell.clone()),
                    None => row.push(Cell::blank()),
                }
            }
            out.push(row);
        }
        Self { rows: out }
    }

    /// True when the grid is non-empty and every row has the same length.
    /// Deserialized grids must pass this before use; the constructors uphold
    /// it by construction.
    pub fn is_well_formed(&self) -> bool {
        let Some(first) = self.rows.first() else {
            return false;
        };
        !first.is_empty() && self.rows.iter().all(|r| r.len() == first.len())
    }

    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn in_bounds(&self, pos: CellPos) -> bool {
        pos.y < self.rows() && pos.x < self.cols()
    }

    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.rows.get(pos.y)?.get(pos.x)
    }

    /// Iterate all cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|r| r.iter())
    }

    /// Apply `color` to the cell under `pos` if it is used.
    ///
    /// Returns true when the cell actually changed; painting an unused or
    /// out-of-bounds cell is a no-op.
    pub fn paint_cell(&mut self, pos: CellPos, color: &ColorValue) -> bool {
        let Some(cell) = self.rows.get_mut(pos.y).and_then(|r| r.get_mut(pos.x)) else {
            return false;
        };
        if !cell.used || cell.color.as_ref() == Some(color) {
            return false;
        }
        cell.color = Some(color.clone());
        true
    }

    /// Flip the used flag of the cell under `pos`, clearing its color when it
    /// becomes unused. Returns true unless `pos` is out of bounds.
    pub fn toggle_used(&mut self, pos: CellPos) -> bool {
        let Some(cell) = self.rows.get_mut(pos.y).and_then(|r| r.get_mut(pos.x)) else {
            return false;
        };
        cell.used = !cell.used;
        if !cell.used {
            cell.color = None;
        }
        true
    }

    /// Apply `color` to every used cell inside `region`, clamped to grid
    /// bounds. Returns true when at least one cell changed.
    pub fn fill_region(&mut self, region: Region, color: &ColorValue) -> bool {
        if self.rows() == 0 {
            return false;
        }
        let n = region.normalized();
        let max_y = n.end.y.min(self.rows() - 1);
        let max_x = n.end.x.min(self.cols() - 1);
        let mut changed = false;
        for y in n.start.y..=max_y {
            for x in n.start.x..=max_x {
                changed |= self.paint_cell(CellPos::new(x, y), color);
            }
        }
        changed
    }

    /// Rotate the cells inside `region` 90° clockwise in place.
    ///
    /// The `h × w` block becomes a `w × h` block anchored at the region's
    /// top-left corner, so a non-square region swaps its bounding box
    /// orientation. If the rotated footprint would leave the grid the
    /// operation fails silently and the grid is untouched. On success the
    /// new bounding box is returned for the caller's selection tracking.
    pub fn rotate_region(&mut self, region: Region) -> Option<Region> {
        let n = region.normalized();
        if !self.in_bounds(n.start) || !self.in_bounds(n.end) {
            return None;
        }
        let (w, h) = (n.width(), n.height());
        if n.start.x + h - 1 >= self.cols() || n.start.y + w - 1 >= self.rows() {
            return None;
        }

        let area: Vec<Vec<Cell>> = (0..h)
            .map(|y| self.rows[n.start.y + y][n.start.x..n.start.x + w].to_vec())
            .collect();
        // (x, y) of the source block lands at (h - 1 - y, x) in the target.
        for y in 0..w {
            for x in 0..h {
                self.rows[n.start.y + y][n.start.x + x] = area[h - 1 - x][y].clone();
            }
        }
        Some(Region::new(
            n.start,
            CellPos::new(n.start.x + h - 1, n.start.y + w - 1),
        ))
    }
}
