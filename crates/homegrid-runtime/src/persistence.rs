#![forbid(unsafe_code)]

//! Loading and saving the committed layout through a [`LayoutStore`].
//!
//! - **Missing entry** loads the default catalog (not an error).
//! - **Unreadable, unparseable, or invalid entry** also loads the default
//!   catalog, with a warning.
//! - Saves write a [`LayoutSnapshot`] as pretty JSON.

use homegrid_layout::catalog::default_state;
use homegrid_layout::{Grid, LayoutSnapshot, LayoutState};

use crate::storage::{LayoutStore, StorageError};

/// Load the layout stored under `key`, falling back to the default catalog.
pub fn load_layout<S: LayoutStore + ?Sized>(store: &S, key: &str, grid: &Grid) -> LayoutState {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored layout; using defaults");
            return default_state();
        }
        Err(error) => {
            tracing::warn!(key, %error, "failed to read stored layout; using defaults");
            return default_state();
        }
    };

    let snapshot: LayoutSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::warn!(key, %error, "stored layout is corrupt; using defaults");
            return default_state();
        }
    };

    match snapshot.into_state(grid) {
        Ok(state) => {
            tracing::debug!(key, icons = state.icons.len(), surface = %state.surface, "loaded layout");
            state
        }
        Err(error) => {
            tracing::warn!(key, %error, "stored layout rejected; using defaults");
            default_state()
        }
    }
}

/// Persist `state` under `key`.
pub fn save_layout<S: LayoutStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &LayoutState,
) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(&LayoutSnapshot::from_state(state))?;
    store.save(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use homegrid_layout::Surface;
    use tracing_test::traced_test;

    const KEY: &str = "homegrid_layout_v1";

    struct BrokenStore;

    impl LayoutStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable {
                message: "disk on fire".into(),
            })
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable {
                message: "disk on fire".into(),
            })
        }
    }

    #[test]
    fn missing_entry_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_layout(&store, KEY, &Grid::DEFAULT), default_state());
    }

    #[test]
    #[traced_test]
    fn corrupt_entry_loads_defaults_with_warning() {
        let store = MemoryStore::new().with_entry(KEY, "{not json");
        assert_eq!(load_layout(&store, KEY, &Grid::DEFAULT), default_state());
        assert!(logs_contain("stored layout is corrupt"));
    }

    #[test]
    #[traced_test]
    fn overlapping_entry_loads_defaults_with_warning() {
        let mut state = default_state();
        state.icons[2].position = 2;
        let json = serde_json::to_string(&LayoutSnapshot::from_state(&state)).unwrap();
        let store = MemoryStore::new().with_entry(KEY, json);
        assert_eq!(load_layout(&store, KEY, &Grid::DEFAULT), default_state());
        assert!(logs_contain("stored layout rejected"));
    }

    #[test]
    #[traced_test]
    fn unreadable_store_loads_defaults() {
        assert_eq!(load_layout(&BrokenStore, KEY, &Grid::DEFAULT), default_state());
        assert!(logs_contain("failed to read stored layout"));
    }

    #[test]
    fn saved_layout_reloads() {
        let mut state = default_state();
        state.surface = Surface::Second;
        state.icons[1].position = 12;

        let mut store = MemoryStore::new();
        save_layout(&mut store, KEY, &state).unwrap();
        assert_eq!(load_layout(&store, KEY, &Grid::DEFAULT), state);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let mut state = default_state();
        state.icons[2].position = 20;
        save_layout(&mut store, KEY, &state).unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(load_layout(&reopened, KEY, &Grid::DEFAULT), state);
    }

    #[test]
    fn legacy_document_loads() {
        let legacy = r#"{
            "page": 2,
            "icons": [
                {"id":"timer","label":"Timer","icon":"T","route":"/app/timer","page":1,"position":0},
                {"id":"settings","label":"Settings","icon":"S","route":"/app/settings","page":2,"position":0}
            ]
        }"#;
        let store = MemoryStore::new().with_entry(KEY, legacy);
        let state = load_layout(&store, KEY, &Grid::DEFAULT);
        assert_eq!(state.surface, Surface::Second);
        assert_eq!(state.icons.len(), 2);
    }

    #[test]
    fn save_failure_is_reported() {
        assert!(save_layout(&mut BrokenStore, KEY, &default_state()).is_err());
    }
}
