use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Ui};

use crate::editor::Editor;
use crate::geometry::CellPos;
use crate::input::CanvasMapper;
use crate::tools::ToolMode;

const CELL_SIZE: f32 = 24.0;
const NUMBER_MARGIN: f32 = 6.0;
const NUMBER_GUTTER: f32 = 24.0;
const GRID_LINE: Color32 = Color32::from_gray(0x88);
const UNUSED_MARK: Color32 = Color32::from_rgb(0xcc, 0x00, 0x00);
const HIGHLIGHT: Color32 = Color32::from_rgb(0x19, 0x76, 0xd2);
const NUMBER_COLOR: Color32 = Color32::from_gray(0x22);

/// The drawing surface: renders the grid and feeds pointer gestures into
/// the editor.
pub struct CanvasPanel {
    cell_size: f32,
}

impl CanvasPanel {
    pub fn new() -> Self {
        Self { cell_size: CELL_SIZE }
    }

    pub fn show(&self, ui: &mut Ui, editor: &mut Editor) {
        let cols = editor.grid().cols();
        let rows = editor.grid().rows();
        let grid_w = cols as f32 * self.cell_size;
        let grid_h = rows as f32 * self.cell_size;
        let desired = egui::vec2(grid_w + NUMBER_GUTTER, grid_h + NUMBER_GUTTER);

        let (response, painter) = ui.allocate_painter(desired, Sense::drag());
        let mapper = CanvasMapper::new(response.rect.min, self.cell_size, cols, rows);

        self.handle_pointer(ui, &response, &mapper, editor);
        self.paint_cells(&painter, editor, &mapper);
        self.paint_highlights(&painter, editor, &mapper);
        self.paint_numbers(&painter, &mapper, cols, rows, grid_w, grid_h, response.rect.min);
    }

    /// Feed the frame's pointer state into the editor. Positions outside the
    /// grid map to `None` and are dropped; releases are reported globally by
    /// egui, so a drag that leaves the canvas still ends cleanly.
    fn handle_pointer(
        &self,
        ui: &Ui,
        response: &egui::Response,
        mapper: &CanvasMapper,
        editor: &mut Editor,
    ) {
        let mods = ui.input(|i| i.modifiers).into();
        if response.drag_started() {
            if let Some(cell) = response.interact_pointer_pos().and_then(|p| mapper.cell_at(p)) {
                editor.pointer_down(cell, mods);
            }
        } else if response.dragged() {
            if let Some(cell) = response.interact_pointer_pos().and_then(|p| mapper.cell_at(p)) {
                editor.pointer_move(cell, mods);
            }
        }
        if response.drag_stopped() {
            editor.pointer_up();
        }
    }

    fn paint_cells(&self, painter: &egui::Painter, editor: &Editor, mapper: &CanvasMapper) {
        let grid = editor.grid();
        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                let pos = CellPos::new(x, y);
                let Some(cell) = grid.cell(pos) else { continue };
                let rect = mapper.cell_rect(pos);
                if cell.used {
                    let fill = cell
                        .color
                        .as_ref()
                        .map_or(Color32::WHITE, |c| c.to_color32());
                    painter.rect_filled(rect, 0.0, fill);
                    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, GRID_LINE));
                } else {
                    painter.rect_filled(rect, 0.0, Color32::from_white_alpha(25));
                    self.paint_unused_mark(painter, rect);
                }
            }
        }
    }

    // Unused cells get the red × the pattern reader skips over.
    fn paint_unused_mark(&self, painter: &egui::Painter, rect: Rect) {
        let inset = rect.shrink(4.0);
        let stroke = Stroke::new(2.0, UNUSED_MARK);
        painter.line_segment([inset.left_top(), inset.right_bottom()], stroke);
        painter.line_segment([inset.right_top(), inset.left_bottom()], stroke);
    }

    fn paint_highlights(&self, painter: &egui::Painter, editor: &Editor, mapper: &CanvasMapper) {
        let stroke = Stroke::new(2.0, HIGHLIGHT);
        if let Some(drag) = editor.preview() {
            painter.rect_stroke(mapper.region_rect(drag).shrink(1.0), 0.0, stroke);
        }
        if editor.mode() == ToolMode::Select {
            if let Some(selection) = editor.selection() {
                painter.rect_stroke(mapper.region_rect(selection).shrink(1.0), 0.0, stroke);
            }
        }
    }

    /// Knitting-chart numbering: columns count from the right, rows from the
    /// bottom.
    fn paint_numbers(
        &self,
        painter: &egui::Painter,
        mapper: &CanvasMapper,
        cols: usize,
        rows: usize,
        grid_w: f32,
        grid_h: f32,
        origin: egui::Pos2,
    ) {
        let font = FontId::proportional(12.0);
        for x in 0..cols {
            let center = mapper.cell_rect(CellPos::new(x, 0)).center().x;
            painter.text(
                egui::pos2(center, origin.y + grid_h + NUMBER_MARGIN),
                Align2::CENTER_TOP,
                (cols - x).to_string(),
                font.clone(),
                NUMBER_COLOR,
            );
        }
        for y in 0..rows {
            let center = mapper.cell_rect(CellPos::new(0, y)).center().y;
            painter.text(
                egui::pos2(origin.x + grid_w + NUMBER_MARGIN, center),
                Align2::LEFT_CENTER,
                (rows - y).to_string(),
                font.clone(),
                NUMBER_COLOR,
            );
        }
    }
}

impl Default for CanvasPanel {
    fn default() -> Self {
        Self::new()
    }
}
