//! Persistence interface consumed by the progression engine.
//!
//! The storage medium lives outside this crate; the engine only needs a
//! load/save key-value pair. [`MemoryStore`] is the reference
//! implementation used by tests and demos; it keeps JSON strings so every
//! save/load exercises the same serde round-trip a durable medium would.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::learning_engine::error::Result;
use crate::learning_engine::models::UserProgress;

/// Default storage key for learner progress.
pub const PROGRESS_KEY: &str = "sempoa-user-progress";

/// Key-value persistence for learner progress. Implementations must
/// round-trip every [`UserProgress`] field exactly, including all nested
/// levels with their counters and flags.
pub trait ProgressStore {
    /// Read saved progress; `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<UserProgress>>;

    /// Persist `progress` under `key`, replacing any previous entry.
    fn save(&self, key: &str, progress: &UserProgress) -> Result<()>;
}

/// In-memory JSON-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<UserProgress>> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        match entries.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, progress: &UserProgress) -> Result<()> {
        let json = serde_json::to_string(progress)?;
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning_engine::progression::initialize_progress;

    #[test]
    fn missing_key_loads_as_none() {
        let store = MemoryStore::new();
        assert!(store.load(PROGRESS_KEY).unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let store = MemoryStore::new();
        let mut progress = initialize_progress();
        progress.total_score = 17;
        progress.all_levels[0].questions_completed = 23;
        progress.all_levels[0].correct_answers = 17;
        progress.all_levels[3].is_unlocked = true;
        progress.current_level_id = Some(progress.all_levels[3].id.clone());

        store.save(PROGRESS_KEY, &progress).unwrap();
        let loaded = store.load(PROGRESS_KEY).unwrap().unwrap();
        assert_eq!(loaded, progress);
    }

    #[test]
    fn keys_are_independent() {
        let store = MemoryStore::new();
        let progress = initialize_progress();
        store.save("learner-a", &progress).unwrap();
        assert!(store.load("learner-b").unwrap().is_none());
    }
}
