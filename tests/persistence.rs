use pattern_paint::color::ColorValue;
use pattern_paint::config::{EditorConfig, StorageKeys};
use pattern_paint::editor::Editor;
use pattern_paint::geometry::{CellPos, Region};
use pattern_paint::persistence::{MemoryStore, PatternStore, StateStore};
use pattern_paint::tools::{Modifiers, ToolMode};

fn create_test_store() -> (PatternStore, MemoryStore) {
    let config = EditorConfig::default();
    (PatternStore::new(config.storage_keys()), MemoryStore::default())
}

fn create_test_editor() -> Editor {
    let mut editor = Editor::new(EditorConfig {
        cols: 3,
        rows: 2,
        ..EditorConfig::default()
    });
    editor.set_active_color(ColorValue::new("#ff0000"));
    editor.pointer_down(CellPos::new(1, 0), Modifiers::default());
    editor.pointer_up();
    editor
}

// Persist everything the way the app's save() does
fn save_editor(store: &PatternStore, target: &mut MemoryStore, editor: &Editor) {
    store.save_state(target, &editor.persisted_state());
    store.save_history(target, editor.history().entries());
    store.save_redo(target, editor.history().redo_entries());
    store.save_color_history(target, editor.color_history());
}

#[test]
fn test_storage_keys_derive_from_namespace() {
    let keys = StorageKeys::new("knitting-pattern");
    assert_eq!(keys.state(), "knitting-pattern-state-v1");
    assert_eq!(keys.history(), "knitting-pattern-history-v1");
    assert_eq!(keys.redo(), "knitting-pattern-redo-v1");
    assert_eq!(keys.color_history(), "knitting-pattern-color-history-v1");
}

#[test]
fn test_state_serializes_with_exact_field_names() {
    let editor = create_test_editor();
    let json = serde_json::to_value(editor.persisted_state()).unwrap();

    let obj = json.as_object().unwrap();
    for field in ["cols", "rows", "color", "grid", "colorHistory", "selection"] {
        assert!(obj.contains_key(field), "missing field {field}");
    }
    assert_eq!(obj.len(), 6);
    assert_eq!(json["cols"], 3);
    assert_eq!(json["rows"], 2);
    assert_eq!(json["color"], "#ff0000");

    // The grid is a bare array of rows of {color, used} cells
    let rows = json["grid"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let cell = rows[0].as_array().unwrap()[1].as_object().unwrap();
    assert_eq!(cell.len(), 2);
    assert_eq!(cell["color"], "#ff0000");
    assert_eq!(cell["used"], true);
}

#[test]
fn test_state_round_trip_through_store() {
    let (store, mut target) = create_test_store();
    let mut editor = create_test_editor();
    editor.set_mode(ToolMode::Select);
    editor.pointer_down(CellPos::new(0, 0), Modifiers::default());
    editor.pointer_move(CellPos::new(1, 1), Modifiers::default());
    editor.pointer_up();
    save_editor(&store, &mut target, &editor);

    let restored = Editor::from_loaded(
        EditorConfig::default(),
        store.load_all(&target),
    );
    assert_eq!(restored.grid(), editor.grid());
    assert_eq!(restored.active_color(), editor.active_color());
    assert_eq!(
        restored.selection(),
        Some(Region::new(CellPos::new(0, 0), CellPos::new(1, 1)))
    );
    assert_eq!(restored.color_history(), editor.color_history());
}

#[test]
fn test_history_round_trip_preserves_undo_and_redo() {
    let (store, mut target) = create_test_store();
    let mut editor = create_test_editor();
    editor.set_active_color(ColorValue::new("#00ff00"));
    editor.pointer_down(CellPos::new(2, 1), Modifiers::default());
    editor.pointer_up();
    editor.undo();
    assert!(editor.can_redo());
    save_editor(&store, &mut target, &editor);

    let mut restored = Editor::from_loaded(EditorConfig::default(), store.load_all(&target));
    assert_eq!(restored.grid(), editor.grid());
    assert!(restored.can_undo());
    assert!(restored.can_redo());

    restored.redo();
    assert_eq!(
        restored.grid().cell(CellPos::new(2, 1)).unwrap().color,
        Some(ColorValue::new("#00ff00"))
    );

    restored.undo();
    restored.undo();
    assert!(!restored.can_undo());
    assert!(restored.grid().cells().all(|c| c.color.is_none()));
}

#[test]
fn test_unparsable_state_falls_back_to_defaults() {
    let (store, mut target) = create_test_store();
    target.set(store.keys().state(), "not json at all {{{".to_owned());

    let loaded = store.load_all(&target);
    assert!(loaded.state.is_none());

    let editor = Editor::from_loaded(EditorConfig::default(), loaded);
    assert_eq!(editor.grid().cols(), 20);
    assert_eq!(editor.grid().rows(), 20);
    assert_eq!(editor.active_color(), &ColorValue::new("#000000"));
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_ragged_grid_is_rejected() {
    let (store, mut target) = create_test_store();
    let blank = r#"{"color":null,"used":true}"#;
    target.set(
        store.keys().state(),
        format!(
            r##"{{"cols":2,"rows":2,"color":"#000000","grid":[[{blank},{blank}],[{blank}]],"colorHistory":[],"selection":null}}"##
        ),
    );
    assert!(store.load_state(&target).is_none());
}

#[test]
fn test_dimension_mismatch_is_rejected() {
    let (store, mut target) = create_test_store();
    let blank = r#"{"color":null,"used":true}"#;
    target.set(
        store.keys().state(),
        format!(
            r##"{{"cols":3,"rows":1,"color":"#000000","grid":[[{blank},{blank}]],"colorHistory":[],"selection":null}}"##
        ),
    );
    assert!(store.load_state(&target).is_none());
}

#[test]
fn test_corrupt_history_degrades_to_baseline() {
    let (store, mut target) = create_test_store();
    let editor = create_test_editor();
    save_editor(&store, &mut target, &editor);
    target.set(store.keys().history(), "[[[]]]".to_owned());

    let restored = Editor::from_loaded(EditorConfig::default(), store.load_all(&target));
    // The live grid survives; only the stacks are lost
    assert_eq!(restored.grid(), editor.grid());
    assert_eq!(restored.history().len(), 1);
    assert!(!restored.can_undo());
}

#[test]
fn test_missing_storage_yields_defaults() {
    let (store, target) = create_test_store();
    let loaded = store.load_all(&target);
    assert!(loaded.state.is_none());
    assert!(loaded.history.is_empty());
    assert!(loaded.redo.is_empty());
    assert!(loaded.color_history.is_empty());
}
