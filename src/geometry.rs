use serde::{Deserialize, Serialize};

/// A discrete cell coordinate on the pattern grid.
///
/// `x` is the column index, `y` the row index, both zero-based from the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub x: usize,
    pub y: usize,
}

impl CellPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle of cell coordinates with inclusive corners.
///
/// The corners are stored as given — `start` is wherever the drag began, not
/// necessarily the top-left — so min/max must be derived via [`Region::normalized`]
/// before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub start: CellPos,
    pub end: CellPos,
}

impl Region {
    pub fn new(start: CellPos, end: CellPos) -> Self {
        Self { start, end }
    }

    /// The same region with `start` at the top-left and `end` at the
    /// bottom-right.
    pub fn normalized(&self) -> Region {
        Region {
            start: CellPos::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            end: CellPos::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        }
    }

    /// Width in cells (inclusive corners).
    pub fn width(&self) -> usize {
        let n = self.normalized();
        n.end.x - n.start.x + 1
    }

    /// Height in cells (inclusive corners).
    pub fn height(&self) -> usize {
        let n = self.normalized();
        n.end.y - n.start.y + 1
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        let n = self.normalized();
        pos.x >= n.start.x && pos.x <= n.end.x && pos.y >= n.start.y && pos.y <= n.end.y
    }
}

/// Rasterize the discrete line from `from` to `to`, inclusive.
///
/// Integer Bresenham: each step advances the dominant axis and lets the
/// accumulated error decide when the minor axis follows, so the path is
/// connected with exactly `max(|dx|, |dy|) + 1` cells and no gaps. The
/// result depends only on the endpoints, which makes repeated line-gesture
/// recomputation from the same anchor idempotent.
pub fn line_cells(from: CellPos, to: CellPos) -> Vec<CellPos> {
    let (mut x, mut y) = (from.x as isize, from.y as isize);
    let (tx, ty) = (to.x as isize, to.y as isize);
    let dx = (tx - x).abs();
    let dy = -(ty - y).abs();
    let sx = if x < tx { 1 } else { -1 };
    let sy = if y < ty { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        cells.push(CellPos::new(x as usize, y as usize));
        if x == tx && y == ty {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
