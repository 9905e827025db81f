//! In-memory progress storage for testing.
//!
//! Thread-safe stand-in for the file backend. The document is lost when the
//! store is dropped.

use std::sync::RwLock;

use crate::error::Result;
use crate::ledger::ProgressState;
use crate::storage::ProgressStore;

/// In-memory progress store for testing.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    state: RwLock<Option<ProgressState>>,
}

impl MemoryProgressStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(None),
        }
    }

    /// Create a store pre-populated with a document.
    pub fn with_state(state: ProgressState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
        }
    }

    /// Check if the store holds a document.
    pub fn is_empty(&self) -> bool {
        self.state.read().unwrap().is_none()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> Result<Option<ProgressState>> {
        Ok(self.state.read().unwrap().clone())
    }

    fn save(&self, state: &ProgressState) -> Result<()> {
        *self.state.write().unwrap() = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.state.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::tests::test_progress_store_lifecycle;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryProgressStore::new();
        test_progress_store_lifecycle(&store);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryProgressStore::new();
        assert!(store.is_empty());
    }

    #[test]
    fn test_with_state() {
        let mut state = ProgressState::default();
        state.total_xp = 33;

        let store = MemoryProgressStore::with_state(state);

        assert!(!store.is_empty());
        assert_eq!(store.load().unwrap().unwrap().total_xp, 33);
    }

    #[test]
    fn test_default_trait() {
        let store = MemoryProgressStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_clones_document() {
        let store = MemoryProgressStore::new();

        let mut state = ProgressState::default();
        store.save(&state).unwrap();

        // Mutating the caller's copy doesn't touch the stored one.
        state.total_xp = 999;

        assert_eq!(store.load().unwrap().unwrap().total_xp, 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryProgressStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store_clone = Arc::clone(&store);
            let handle = thread::spawn(move || {
                let mut state = ProgressState::default();
                state.total_xp = i;
                store_clone.save(&state).unwrap();
                store_clone.load().unwrap();
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // Last writer wins; some document is present.
        assert!(!store.is_empty());
    }
}
