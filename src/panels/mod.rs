mod canvas_panel;
mod side_panel;

pub use canvas_panel::CanvasPanel;
pub use side_panel::show_side_panel;
