/// Persistence of the rating state over a pluggable key-value backend.
///
/// The whole `State` is stored as one JSON document under `STORAGE_KEY`.
/// Loading never fails: a missing, unreadable or corrupt document degrades
/// to a fresh default state.
use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::constants::STORAGE_KEY;
use crate::error::StoreError;
use crate::state::State;

/// Minimal string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local backend. Contents vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads, persists and resets the rating state for one catalog.
pub struct RatingStore<S: KeyValueStore> {
    backend: S,
    catalog: Catalog,
}

impl<S: KeyValueStore> RatingStore<S> {
    pub fn new(backend: S, catalog: Catalog) -> Self {
        RatingStore { backend, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted state, or a fresh default one if there is none or
    /// it can't be used. Loaded state is reconciled against the catalog.
    pub fn load(&self) -> State {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = STORAGE_KEY, "No stored state, starting fresh");
                return State::new(&self.catalog);
            }
            Err(e) => {
                warn!(key = STORAGE_KEY, error = %e, "Failed to read stored state, starting fresh");
                return State::new(&self.catalog);
            }
        };

        let mut state: State = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!(key = STORAGE_KEY, error = %e, "Stored state is corrupt, starting fresh");
                return State::new(&self.catalog);
            }
        };

        let repaired = state.reconcile(&self.catalog);
        if repaired > 0 {
            warn!(repaired, "Stored buckets did not match the catalog and were repaired");
        }

        debug!(votes = state.votes().len(), "Loaded stored state");
        state
    }

    /// Serialize `state` and overwrite whatever was stored before.
    pub fn persist(&mut self, state: &State) -> Result<(), StoreError> {
        let raw = serde_json::to_string(state)?;
        self.backend.set(STORAGE_KEY, &raw)?;
        debug!(bytes = raw.len(), votes = state.votes().len(), "Persisted state");
        Ok(())
    }

    /// Drop every rating and vote, persist the fresh state and return it.
    pub fn reset(&mut self) -> Result<State, StoreError> {
        let state = State::new(&self.catalog);
        self.persist(&state)?;
        info!("Rating state reset");
        Ok(state)
    }
}
