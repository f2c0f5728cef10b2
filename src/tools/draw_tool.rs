use crate::geometry::CellPos;
use crate::model::EditorModel;
use crate::tools::{Modifiers, Tool};

/// Freehand drawing, with shift held turning the gesture into a straight
/// line from the press anchor.
///
/// Line moves recompute the whole anchor→cursor line each time; painting is
/// idempotent, so re-deriving the same line never double-applies, and lines
/// painted at earlier cursor positions stay put (the classic fan effect).
#[derive(Debug)]
pub struct DrawTool {
    // Anchor of the in-progress line gesture, if shift was held on press.
    line_anchor: Option<CellPos>,
}

impl DrawTool {
    pub fn new() -> Self {
        Self { line_anchor: None }
    }
}

impl Default for DrawTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for DrawTool {
    fn name(&self) -> &'static str {
        "Draw"
    }

    fn deactivate(&mut self, _model: &mut EditorModel) {
        self.line_anchor = None;
    }

    fn on_pointer_down(&mut self, pos: CellPos, mods: Modifiers, model: &mut EditorModel) -> bool {
        if mods.shift {
            self.line_anchor = Some(pos);
        }
        model.paint(pos)
    }

    fn on_pointer_move(&mut self, pos: CellPos, mods: Modifiers, model: &mut EditorModel) -> bool {
        match self.line_anchor {
            Some(anchor) if mods.shift => model.paint_line(anchor, pos),
            _ => model.paint(pos),
        }
    }

    fn on_pointer_up(&mut self, _model: &mut EditorModel) -> bool {
        self.line_anchor = None;
        false
    }
}
