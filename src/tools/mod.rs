use crate::geometry::{CellPos, Region};
use crate::model::EditorModel;

mod draw_tool;
pub use draw_tool::DrawTool;

mod rectangle_tool;
pub use rectangle_tool::RectangleTool;

mod select_tool;
pub use select_tool::SelectTool;

mod exclude_tool;
pub use exclude_tool::ExcludeTool;

/// The editing modes the side panel can activate. Exactly one is active at
/// a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    Draw,
    Rectangle,
    Select,
    Exclude,
}

/// Keyboard modifiers relevant to a pointer gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift turns a Draw gesture into a straight-line gesture.
    pub shift: bool,
}

/// Tool trait defines the interface for all editing tools.
///
/// Pointer positions arrive pre-validated against grid bounds. Each handler
/// returns whether the grid changed, which the editor forwards to the
/// history manager's gesture batch; transient drag state lives inside the
/// tool and is dropped on `deactivate`.
pub trait Tool {
    /// Return the name of the tool.
    fn name(&self) -> &'static str;

    /// Called when the editor switches away from this tool; clears any
    /// in-progress gesture state.
    fn deactivate(&mut self, model: &mut EditorModel);

    /// Handle pointer press on a grid cell.
    fn on_pointer_down(&mut self, pos: CellPos, mods: Modifiers, model: &mut EditorModel) -> bool;

    /// Handle pointer drag while the pointer is held down.
    fn on_pointer_move(&mut self, pos: CellPos, mods: Modifiers, model: &mut EditorModel) -> bool;

    /// Handle pointer release, finalizing the gesture.
    fn on_pointer_up(&mut self, model: &mut EditorModel) -> bool;

    /// The live drag box to highlight, if this tool previews one.
    fn preview(&self) -> Option<Region> {
        None
    }
}

/// Enum wrapper over the tool implementations so the editor stores tools by
/// value instead of `Box<dyn Tool>`.
#[derive(Debug)]
pub enum ToolType {
    Draw(DrawTool),
    Rectangle(RectangleTool),
    Select(SelectTool),
    Exclude(ExcludeTool),
}

impl ToolType {
    /// Fresh tool state for the given mode.
    pub fn for_mode(mode: ToolMode) -> Self {
        match mode {
            ToolMode::Draw => Self::Draw(DrawTool::new()),
            ToolMode::Rectangle => Self::Rectangle(RectangleTool::new()),
            ToolMode::Select => Self::Select(SelectTool::new()),
            ToolMode::Exclude => Self::Exclude(ExcludeTool::new()),
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self {
            Self::Draw(_) => ToolMode::Draw,
            Self::Rectangle(_) => ToolMode::Rectangle,
            Self::Select(_) => ToolMode::Select,
            Self::Exclude(_) => ToolMode::Exclude,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Draw(tool) => tool.name(),
            Self::Rectangle(tool) => tool.name(),
            Self::Select(tool) => tool.name(),
            Self::Exclude(tool) => tool.name(),
        }
    }

    fn deactivate(&mut self, model: &mut EditorModel) {
        match self {
            Self::Draw(tool) => tool.deactivate(model),
            Self::Rectangle(tool) => tool.deactivate(model),
            Self::Select(tool) => tool.deactivate(model),
            Self::Exclude(tool) => tool.deactivate(model),
        }
    }

    fn on_pointer_down(&mut self, pos: CellPos, mods: Modifiers, model: &mut EditorModel) -> bool {
        match self {
            Self::Draw(tool) => tool.on_pointer_down(pos, mods, model),
            Self::Rectangle(tool) => tool.on_pointer_down(pos, mods, model),
            Self::Select(tool) => tool.on_pointer_down(pos, mods, model),
            Self::Exclude(tool) => tool.on_pointer_down(pos, mods, model),
        }
    }

    fn on_pointer_move(&mut self, pos: CellPos, mods: Modifiers, model: &mut EditorModel) -> bool {
        match self {
            Self::Draw(tool) => tool.on_pointer_move(pos, mods, model),
            Self::Rectangle(tool) => tool.on_pointer_move(pos, mods, model),
            Self::Select(tool) => tool.on_pointer_move(pos, mods, model),
            Self::Exclude(tool) => tool.on_pointer_move(pos, mods, model),
        }
    }

    fn on_pointer_up(&mut self, model: &mut EditorModel) -> bool {
        match self {
            Self::Draw(tool) => tool.on_pointer_up(model),
            Self::Rectangle(tool) => tool.on_pointer_up(model),
            Self::Select(tool) => tool.on_pointer_up(model),
            Self::Exclude(tool) => tool.on_pointer_up(model),
        }
    }

    fn preview(&self) -> Option<Region> {
        match self {
            Self::Draw(tool) => tool.preview(),
            Self::Rectangle(tool) => tool.preview(),
            Self::Select(tool) => tool.preview(),
            Self::Exclude(tool) => tool.preview(),
        }
    }
}
