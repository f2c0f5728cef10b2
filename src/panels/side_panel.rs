use egui::{Button, Color32, Stroke, Ui, Vec2};

use crate::color::ColorValue;
use crate::editor::Editor;
use crate::tools::ToolMode;

const MAX_DIMENSION: usize = 100;
const SWATCH_SIZE: Vec2 = Vec2::splat(24.0);

/// The controls sidebar: canvas size, color, tools, undo/redo.
pub fn show_side_panel(ui: &mut Ui, editor: &mut Editor) {
    ui.heading("Canvas Size");
    size_controls(ui, editor);
    ui.separator();

    ui.heading("Color");
    color_controls(ui, editor);
    ui.separator();

    ui.heading("Tools");
    tool_controls(ui, editor);
    ui.add_space(8.0);
    ui.small("Shift+drag in Draw mode for straight lines.");
}

fn size_controls(ui: &mut Ui, editor: &mut Editor) {
    let mut cols = editor.grid().cols();
    let mut rows = editor.grid().rows();
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("Columns (X):");
        changed |= ui
            .add(egui::DragValue::new(&mut cols).range(1..=MAX_DIMENSION))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Rows (Y):");
        changed |= ui
            .add(egui::DragValue::new(&mut rows).range(1..=MAX_DIMENSION))
            .changed();
    });
    if changed {
        editor.resize(cols.clamp(1, MAX_DIMENSION), rows.clamp(1, MAX_DIMENSION));
    }
}

fn color_controls(ui: &mut Ui, editor: &mut Editor) {
    let mut rgb = editor.active_color().to_rgb();
    if ui.color_edit_button_srgb(&mut rgb).changed() {
        editor.set_active_color(ColorValue::from_rgb(rgb));
    }

    // Recently used swatches; clicking one reactivates it.
    let swatches: Vec<ColorValue> = editor.color_history().to_vec();
    ui.horizontal_wrapped(|ui| {
        for color in swatches {
            let selected = &color == editor.active_color();
            let stroke = if selected {
                Stroke::new(2.0, Color32::from_gray(0x33))
            } else {
                Stroke::new(1.0, Color32::from_gray(0xaa))
            };
            let button = Button::new("")
                .fill(color.to_color32())
                .stroke(stroke)
                .min_size(SWATCH_SIZE);
            if ui.add(button).on_hover_text(color.as_str()).clicked() {
                editor.set_active_color(color.clone());
            }
        }
    });
}

fn tool_controls(ui: &mut Ui, editor: &mut Editor) {
    for (mode, label) in [
        (ToolMode::Draw, "Draw"),
        (ToolMode::Rectangle, "Draw Rectangle"),
        (ToolMode::Select, "Select Area"),
        (ToolMode::Exclude, "Mark Unused"),
    ] {
        if ui.selectable_label(editor.mode() == mode, label).clicked() {
            // Clicking the active tool toggles back to plain drawing.
            let next = if editor.mode() == mode { ToolMode::Draw } else { mode };
            editor.set_mode(next);
        }
    }
    ui.add_space(4.0);

    let can_rotate = editor.mode() == ToolMode::Select && editor.selection().is_some();
    if ui
        .add_enabled(can_rotate, Button::new("Rotate Selection 90°"))
        .clicked()
    {
        editor.rotate_selection();
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(editor.can_undo(), Button::new("Undo"))
            .on_hover_text("Undo (Cmd/Ctrl+Z)")
            .clicked()
        {
            editor.undo();
        }
        if ui
            .add_enabled(editor.can_redo(), Button::new("Redo"))
            .on_hover_text("Redo (Cmd/Ctrl+Y)")
            .clicked()
        {
            editor.redo();
        }
    });
}
