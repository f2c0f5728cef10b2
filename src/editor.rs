use log::debug;

use crate::color::{ColorHistory, ColorValue};
use crate::config::EditorConfig;
use crate::geometry::{CellPos, Region};
use crate::grid::Grid;
use crate::history::GestureHistory;
use crate::model::EditorModel;
use crate::persistence::{LoadedState, PersistedState};
use crate::tools::{Modifiers, Tool, ToolMode, ToolType};

/// The editing core's single entry point.
///
/// Owns the model, the undo history and the active tool, and turns the
/// pointer event stream into batched, undoable gestures. The UI layer only
/// ever calls methods here; it never mutates the grid directly.
///
/// Gesture recording follows `Idle → Batching → Idle`: `pointer_down` opens
/// the batch, every mutating tool callback marks it dirty, and `pointer_up`
/// closes it with at most one history snapshot.
#[derive(Debug)]
pub struct Editor {
    model: EditorModel,
    history: GestureHistory,
    tool: ToolType,
    pointer_active: bool,
    config: EditorConfig,
}

impl Editor {
    /// A fresh editor with the configured default grid.
    pub fn new(config: EditorConfig) -> Self {
        let model = EditorModel::new(&config);
        let history = GestureHistory::new(&model.grid, config.max_history);
        Self {
            model,
            history,
            tool: ToolType::for_mode(ToolMode::Draw),
            pointer_active: false,
            config,
        }
    }

    /// Rehydrate an editor from persisted state, falling back to defaults
    /// for whatever failed to load.
    pub fn from_loaded(config: EditorConfig, loaded: LoadedState) -> Self {
        let mut editor = Self::new(config);
        if let Some(state) = loaded.state {
            editor.model.grid = state.grid;
            editor.model.active_color = state.color;
            editor.model.selection = state.selection;
            if !state.color_history.is_empty() {
                editor.model.color_history =
                    ColorHistory::from_colors(state.color_history, editor.config.max_color_history);
            }
        } else if !loaded.color_history.is_empty() {
            editor.model.color_history =
                ColorHistory::from_colors(loaded.color_history, editor.config.max_color_history);
        }
        editor.history = GestureHistory::from_persisted(
            loaded.history,
            loaded.redo,
            &editor.model.grid,
            editor.config.max_history,
        );
        editor
    }

    // ------------------------------------------------------------------
    // Pointer gestures

    /// Pointer pressed on a cell. Out-of-bounds positions are dropped.
    pub fn pointer_down(&mut self, pos: CellPos, mods: Modifiers) {
        if !self.model.grid.in_bounds(pos) {
            return;
        }
        self.history.begin_gesture();
        self.pointer_active = true;
        if self.tool.on_pointer_down(pos, mods, &mut self.model) {
            self.history.note_change();
        }
    }

    /// Pointer moved while held. Ignored outside a gesture or the grid.
    pub fn pointer_move(&mut self, pos: CellPos, mods: Modifiers) {
        if !self.pointer_active || !self.model.grid.in_bounds(pos) {
            return;
        }
        if self.tool.on_pointer_move(pos, mods, &mut self.model) {
            self.history.note_change();
        }
    }

    /// Pointer released anywhere; finalizes the gesture and commits at most
    /// one history snapshot.
    pub fn pointer_up(&mut self) {
        if !self.pointer_active {
            return;
        }
        self.pointer_active = false;
        if self.tool.on_pointer_up(&mut self.model) {
            self.history.note_change();
        }
        self.history.end_gesture(&self.model.grid);
    }

    /// Abandon the in-flight gesture without committing.
    pub fn cancel_gesture(&mut self) {
        self.pointer_active = false;
        self.tool.deactivate(&mut self.model);
        self.history.cancel_gesture();
    }

    // ------------------------------------------------------------------
    // Mode and parameters

    /// Switch tools. Cancels any in-flight gesture; leaving Select mode
    /// drops the selection.
    pub fn set_mode(&mut self, mode: ToolMode) {
        if mode == self.tool.mode() {
            return;
        }
        self.cancel_gesture();
        if self.tool.mode() == ToolMode::Select {
            self.model.selection = None;
        }
        debug!("tool switched to {:?}", mode);
        self.tool = ToolType::for_mode(mode);
    }

    pub fn set_active_color(&mut self, color: ColorValue) {
        self.model.active_color = color;
    }

    /// Replace the grid with one of the new dimensions, copying the overlap.
    ///
    /// Not an undoable gesture: the history restarts from the resized grid
    /// as its new baseline.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        if cols == 0 || rows == 0 {
            return;
        }
        if cols == self.model.grid.cols() && rows == self.model.grid.rows() {
            return;
        }
        self.cancel_gesture();
        self.model.grid = self.model.grid.resized(cols, rows);
        self.history.reset_baseline(&self.model.grid);
        debug!("grid resized to {cols}x{rows}");
    }

    /// Rotate the selected region 90° clockwise as one undoable gesture.
    ///
    /// No-op without a selection or when the rotated footprint would leave
    /// the grid.
    pub fn rotate_selection(&mut self) {
        let Some(selection) = self.model.selection else {
            return;
        };
        if let Some(rotated) = self.model.grid.rotate_region(selection) {
            self.model.selection = Some(rotated);
            self.history.push_gesture(&self.model.grid);
        }
    }

    // ------------------------------------------------------------------
    // Undo/redo

    pub fn undo(&mut self) {
        if let Some(grid) = self.history.undo() {
            self.model.grid = grid;
            debug!("undo, history depth {}", self.history.len());
        }
    }

    pub fn redo(&mut self) {
        if let Some(grid) = self.history.redo() {
            self.model.grid = grid;
            debug!("redo, history depth {}", self.history.len());
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ------------------------------------------------------------------
    // Accessors

    pub fn grid(&self) -> &Grid {
        &self.model.grid
    }

    pub fn selection(&self) -> Option<Region> {
        self.model.selection
    }

    /// The active tool's live drag box, for the canvas highlight.
    pub fn preview(&self) -> Option<Region> {
        self.tool.preview()
    }

    pub fn mode(&self) -> ToolMode {
        self.tool.mode()
    }

    pub fn active_color(&self) -> &ColorValue {
        &self.model.active_color
    }

    pub fn color_history(&self) -> &[ColorValue] {
        self.model.color_history.colors()
    }

    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Assemble the persisted state payload for the adapter.
    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            cols: self.model.grid.cols(),
            rows: self.model.grid.rows(),
            color: self.model.active_color.clone(),
            grid: self.model.grid.clone(),
            color_history: self.model.color_history.colors().to_vec(),
            selection: self.model.selection,
        }
    }
}
