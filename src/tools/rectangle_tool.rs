use crate::geometry::{CellPos, Region};
use crate::model::EditorModel;
use crate::tools::{Modifiers, Tool};

/// Rectangle fill: drag out a box, release to color every used cell inside.
///
/// Nothing is painted until release; the drag box is only a preview.
#[derive(Debug)]
pub struct RectangleTool {
    drag: Option<Region>,
}

impl RectangleTool {
    pub fn new() -> Self {
        Self { drag: None }
    }
}

impl Default for RectangleTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "Rectangle"
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
        match self.drag.take() {
            Some(region) => model.fill(region),
            None => false,
        }
    }

    fn preview(&self) -> Option<Region> {
        self.drag
    }
}
