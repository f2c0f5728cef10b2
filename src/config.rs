use crate::color::ColorValue;

/// Editor configuration, passed explicitly into the core's constructors.
///
/// Nothing in the crate reads these values from globals; a host that wants a
/// different canvas default, history depth or storage namespace constructs
/// its own config.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Default grid width when no persisted state exists.
    pub cols: usize,
    /// Default grid height when no persisted state exists.
    pub rows: usize,
    /// Default active color.
    pub color: ColorValue,
    /// Undo depth bound; the oldest snapshot is dropped past this.
    pub max_history: usize,
    /// Bound on the recently-used color list.
    pub max_color_history: usize,
    /// Namespace prefix for all storage keys.
    pub storage_namespace: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cols: 20,
            rows: 20,
            color: ColorValue::new("#000000"),
            max_history: 50,
            max_color_history: 10,
            storage_namespace: "knitting-pattern".to_owned(),
        }
    }
}

impl EditorConfig {
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::new(&self.storage_namespace)
    }
}

/// The four storage keys, derived from the configured namespace.
///
/// The `-v1` suffix versions the persisted shape; a future format change
/// bumps it rather than migrating in place.
#[derive(Debug, Clone)]
pub struct StorageKeys {
    state: String,
    history: String,
    redo: String,
    color_history: String,
}

impl StorageKeys {
    pub fn new(namespace: &str) -> Self {
        Self {
            state: format!("{namespace}-state-v1"),
            history: format!("{namespace}-history-v1"),
            redo: format!("{namespace}-redo-v1"),
            color_history: format!("{namespace}-color-history-v1"),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn redo(&self) -> &str {
        &self.redo
    }

    pub fn color_history(&self) -> &str {
        &self.color_history
    }
}
