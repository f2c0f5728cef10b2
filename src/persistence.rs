use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorValue;
use crate::config::StorageKeys;
use crate::geometry::Region;
use crate::grid::Grid;

/// String key-value storage the editor persists into.
///
/// The desktop app adapts `eframe::Storage`; headless runs and tests use
/// [`MemoryStore`].
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory [`StateStore`] backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

/// Errors raised while decoding persisted payloads.
///
/// These never escape the adapter — every load falls back to defaults — but
/// they are typed so the fallback can log what actually went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to decode persisted state: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("persisted grid is not rectangular or does not match its dimensions")]
    InvalidShape,
}

/// The main persisted payload. Field names and nesting round-trip exactly;
/// renames here are part of the storage format, not style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub cols: usize,
    pub rows: usize,
    pub color: ColorValue,
    pub grid: Grid,
    #[serde(rename = "colorHistory")]
    pub color_history: Vec<ColorValue>,
    pub selection: Option<Region>,
}

/// Everything the adapter could recover at startup.
#[derive(Debug, Default)]
pub struct LoadedState {
    pub state: Option<PersistedState>,
    pub history: Vec<Grid>,
    pub redo: Vec<Grid>,
    pub color_history: Vec<ColorValue>,
}

impl LoadedState {
    fn empty() -> Self {
        Self::default()
    }
}

/// Codec between the editor's state and a [`StateStore`].
///
/// All loads are best-effort: unparsable or structurally invalid payloads
/// degrade to "nothing was persisted" with a warning, never an error the
/// caller must handle.
#[derive(Debug, Clone)]
pub struct PatternStore {
    keys: StorageKeys,
}

impl PatternStore {
    pub fn new(keys: StorageKeys) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Load every persisted payload, validating shapes as it goes.
    pub fn load_all<S: StateStore + ?Sized>(&self, store: &S) -> LoadedState {
        let mut loaded = LoadedState::empty();
        loaded.state = self.load_state(store);
        // History snapshots must match the live grid's dimensions; a stack
        // persisted before a resize is stale and gets dropped whole.
        if let Some(state) = &loaded.state {
            loaded.history = self.load_history(store, state.cols, state.rows);
            loaded.redo = self.load_redo(store, state.cols, state.rows);
        }
        loaded.color_history = self.load_color_history(store);
        loaded
    }

    pub fn load_state<S: StateStore + ?Sized>(&self, store: &S) -> Option<PersistedState> {
        let json = store.get(self.keys.state())?;
        match decode_state(&json) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!("dropping persisted state, using defaults: {err}");
                None
            }
        }
    }

    pub fn save_state<S: StateStore + ?Sized>(&self, store: &mut S, state: &PersistedState) {
        self.save_json(store, self.keys.state(), state);
    }

    pub fn load_history<S: StateStore + ?Sized>(&self, store: &S, cols: usize, rows: usize) -> Vec<Grid> {
        self.load_snapshots(store, self.keys.history(), cols, rows)
    }

    pub fn load_redo<S: StateStore + ?Sized>(&self, store: &S, cols: usize, rows: usize) -> Vec<Grid> {
        self.load_snapshots(store, self.keys.redo(), cols, rows)
    }

    pub fn save_history<'a, S, I>(&self, store: &mut S, entries: I)
    where
        S: StateStore + ?Sized,
        I: IntoIterator<Item = &'a Grid>,
    {
        let entries: Vec<&Grid> = entries.into_iter().collect();
        self.save_json(store, self.keys.history(), &entries);
    }

    pub fn save_redo<'a, S, I>(&self, store: &mut S, entries: I)
    where
        S: StateStore + ?Sized,
        I: IntoIterator<Item = &'a Grid>,
    {
        let entries: Vec<&Grid> = entries.into_iter().collect();
        self.save_json(store, self.keys.redo(), &entries);
    }

    pub fn load_color_history<S: StateStore + ?Sized>(&self, store: &S) -> Vec<ColorValue> {
        let Some(json) = store.get(self.keys.color_history()) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(colors) => colors,
            Err(err) => {
                warn!("dropping persisted color history: {err}");
                Vec::new()
            }
        }
    }

    pub fn save_color_history<S: StateStore + ?Sized>(&self, store: &mut S, colors: &[ColorValue]) {
        self.save_json(store, self.keys.color_history(), &colors);
    }

    fn load_snapshots<S: StateStore + ?Sized>(
        &self,
        store: &S,
        key: &str,
        cols: usize,
        rows: usize,
    ) -> Vec<Grid> {
        let Some(json) = store.get(key) else {
            return Vec::new();
        };
        match decode_snapshots(&json, cols, rows) {
            Ok(grids) => grids,
            Err(err) => {
                warn!("dropping persisted snapshots under {key}: {err}");
                Vec::new()
            }
        }
    }

    fn save_json<S: StateStore + ?Sized, T: Serialize>(&self, store: &mut S, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => store.set(key, json),
            Err(err) => warn!("failed to encode {key}, skipping write: {err}"),
        }
    }
}

fn decode_state(json: &str) -> Result<PersistedState, StoreError> {
    let state: PersistedState = serde_json::from_str(json)?;
    if !state.grid.is_well_formed()
        || state.grid.rows() != state.rows
        || state.grid.cols() != state.cols
    {
        return Err(StoreError::InvalidShape);
    }
    Ok(state)
}

fn decode_snapshots(json: &str, cols: usize, rows: usize) -> Result<Vec<Grid>, StoreError> {
    let grids: Vec<Grid> = serde_json::from_str(json)?;
    if grids
        .iter()
        .any(|g| !g.is_well_formed() || g.cols() != cols || g.rows() != rows)
    {
        return Err(StoreError::InvalidShape);
    }
    Ok(grids)
}
