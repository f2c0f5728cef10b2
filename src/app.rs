use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::panels::{show_side_panel, CanvasPanel};
use crate::persistence::{MemoryStore, PatternStore, StateStore};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The eframe application: the editor core plus the two panels and the
/// persistence wiring.
pub struct PatternApp {
    editor: Editor,
    store: PatternStore,
    canvas: CanvasPanel,
}

impl PatternApp {
    /// Called once before the first frame; rehydrates all persisted state.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = EditorConfig::default();
        let store = PatternStore::new(config.storage_keys());

        let editor = match cc.storage {
            Some(storage) => {
                let snapshot = snapshot_storage(storage, &store);
                Editor::from_loaded(config, store.load_all(&snapshot))
            }
            None => Editor::new(config),
        };

        Self {
            editor,
            store,
            canvas: CanvasPanel::new(),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.editor.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
            self.editor.redo();
        }
    }
}

impl eframe::App for PatternApp {
    /// Called by eframe on its autosave tick and at shutdown; best-effort.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let mut adapter = EframeStore(storage);
        self.store
            .save_state(&mut adapter, &self.editor.persisted_state());
        self.store
            .save_history(&mut adapter, self.editor.history().entries());
        self.store
            .save_redo(&mut adapter, self.editor.history().redo_entries());
        self.store
            .save_color_history(&mut adapter, self.editor.color_history());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| show_side_panel(ui, &mut self.editor));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .show(ui, |ui| self.canvas.show(ui, &mut self.editor));
        });
    }
}

/// Copy the relevant keys out of eframe's read-only startup storage so the
/// loader can work against the [`StateStore`] trait.
fn snapshot_storage(storage: &dyn eframe::Storage, store: &PatternStore) -> MemoryStore {
    let mut snapshot = MemoryStore::default();
    let keys = store.keys();
    for key in [keys.state(), keys.history(), keys.redo(), keys.color_history()] {
        if let Some(value) = storage.get_string(key) {
            snapshot.set(key, value);
        }
    }
    snapshot
}

/// Adapter from eframe's key-value storage to the core's [`StateStore`].
struct EframeStore<'a>(&'a mut dyn eframe::Storage);

impl StateStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}
