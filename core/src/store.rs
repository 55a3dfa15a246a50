//! View-state persistence contract and the in-memory store.

use pulse_protocol::PersistedView;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Durable key/value store for view snapshots.
///
/// Restoration is a convenience, never a requirement: implementations
/// swallow their own read and write failures (logging them) instead of
/// surfacing errors, and a failed read counts as "nothing saved". The
/// session keeps working without the store ever succeeding.
pub trait ViewStateStore {
    /// The snapshot last saved under `key`, if a readable one exists.
    fn load(&self, key: &str) -> Option<PersistedView>;

    /// Saves `view` under `key`, replacing any previous snapshot.
    fn save(&self, key: &str, view: &PersistedView);
}

/// Process-local store used by tests and headless embeddings. Clones
/// share one underlying map.
#[derive(Clone, Default)]
pub struct MemoryViewStore {
    entries: Arc<Mutex<HashMap<String, PersistedView>>>,
}

impl MemoryViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, PersistedView>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ViewStateStore for MemoryViewStore {
    fn load(&self, key: &str) -> Option<PersistedView> {
        self.entries().get(key).cloned()
    }

    fn save(&self, key: &str, view: &PersistedView) {
        self.entries().insert(key.to_string(), view.clone());
    }
}
