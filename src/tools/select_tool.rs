use crate::geometry::{CellPos, Region};
use crate::model::EditorModel;
use crate::tools::{Modifiers, Tool};

/// Rectangular selection: the drag previews like the rectangle tool, and
/// release commits the box as the model's selection without touching cells.
#[derive(Debug)]
pub struct SelectTool {
    drag: Option<Region>,
}

impl SelectTool {
    pub fn new() -> Self {
        Self { drag: None }
    }
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for SelectTool {
    fn name(&self) -> &'static str {
        "Select"
    }

    fn deactivate(&mut self, _model: &mut EditorModel) {
        self.drag = None;
    }

    fn on_pointer_down(&mut self, pos: CellPos, _mods: Modifiers, _model: &mut EditorModel) -> bool {
        self.drag = Some(Region::new(pos, pos));
        false
    }

    fn on_pointer_move(&mut self, pos: CellPos, _mods: Modifiers, _model: &mut EditorModel) -> bool {
        if let Some(drag) = &mut self.drag {
            drag.end = pos;
        }
        false
    }

    fn on_pointer_up(&mut self, model: &mut EditorModel) -> bool {
        if let Some(region) = self.drag.take() {
            model.selection = Some(region);
        }
        false
    }

    fn preview(&self) -> Option<Region> {
        self.drag
    }
}
