use std::collections::HashSet;

use crate::geometry::CellPos;
use crate::model::EditorModel;
use crate::tools::{Modifiers, Tool};

/// Toggle cells between used and excluded by clicking or dragging.
///
/// The visited set guards against double-toggling when the pointer re-enters
/// a cell within one gesture; it resets on release, so a fresh press may
/// toggle the same cell again.
#[derive(Debug)]
pub struct ExcludeTool {
    visited: HashSet<CellPos>,
    dragging: bool,
}

impl ExcludeTool {
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            dragging: false,
        }
    }
}

impl Default for ExcludeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ExcludeTool {
    fn name(&self) -> &'static str {
        "Exclude"
    }

    fn deactivate(&mut self, _model: &mut EditorModel) {
        self.visited.clear();
        self.dragging = false;
    }

    fn on_pointer_down(&mut self, pos: CellPos, _mods: Modifiers, model: &mut EditorModel) -> bool {
        self.visited.clear();
        self.dragging = true;
        self.visited.insert(pos);
        model.toggle_used(pos)
    }

    fn on_pointer_move(&mut self, pos: CellPos, _mods: Modifiers, model: &mut EditorModel) -> bool {
        if !self.dragging || !self.visited.insert(pos) {
            return false;
        }
        model.toggle_used(pos)
    }

    fn on_pointer_up(&mut self, _model: &mut EditorModel) -> bool {
        self.visited.clear();
        self.dragging = false;
        false
    }
}
