use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// An RGB color in `"#rrggbb"` form.
///
/// The core treats the value as opaque — it is compared, stored and
/// persisted as-is. Conversion to egui's color type only happens at the
/// rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into an egui color for rendering; falls back to black when the
    /// stored string is not well-formed `#rrggbb`.
    pub fn to_color32(&self) -> egui::Color32 {
        let hex = self.0.strip_prefix('#').unwrap_or(&self.0);
        if hex.len() == 6 {
            if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                return egui::Color32::from_rgb(
                    (rgb >> 16) as u8,
                    (rgb >> 8) as u8,
                    rgb as u8,
                );
            }
        }
        egui::Color32::BLACK
    }

    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]))
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        let c = self.to_color32();
        [c.r(), c.g(), c.b()]
    }
}

/// Bounded list of recently used colors, oldest first.
///
/// A color only enters the list once an operation actually painted it onto a
/// used cell; repainting an already-tracked color leaves the order alone.
#[derive(Debug, Clone)]
pub struct ColorHistory {
    colors: Vec<ColorValue>,
    cap: usize,
}

impl ColorHistory {
    pub fn new(cap: usize) -> Self {
        Self { colors: Vec::new(), cap }
    }

    pub fn from_colors(colors: Vec<ColorValue>, cap: usize) -> Self {
        let mut history = Self { colors, cap };
        history.truncate();
        history
    }

    pub fn colors(&self) -> &[ColorValue] {
        &self.colors
    }

    /// Record that `color` was just applied to `grid`.
    ///
    /// No-op unless some used cell now holds the color, and no-op (without
    /// reordering) when the color is already tracked. Otherwise appends and
    /// drops the oldest entries past the cap.
    pub fn record_use(&mut self, color: &ColorValue, grid: &Grid) {
        let painted = grid
            .cells()
            .any(|cell| cell.used && cell.color.as_ref() == Some(color));
        if !painted || self.colors.contains(color) {
            return;
        }
        self.colors.push(color.clone());
        self.truncate();
    }

    /// Seed the list with a color without requiring it on the grid. Used for
    /// the startup default only.
    pub fn seed(&mut self, color: &ColorValue) {
        if !self.colors.contains(color) {
            self.colors.push(color.clone());
            self.truncate();
        }
    }

    fn truncate(&mut self) {
        if self.colors.len() > self.cap {
            let excess = self.colors.len() - self.cap;
            self.colors.drain(..excess);
        }
    }
}
