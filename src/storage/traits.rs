//! Progress storage trait.
//!
//! The ledger persists a single progress document per learner. The store is
//! injected so tests can substitute an in-memory stand-in for the file
//! backend.

use std::sync::Arc;

use crate::error::Result;
use crate::ledger::ProgressState;

/// Trait for progress storage backends.
///
/// A store holds at most one document, replaced wholesale on every save.
pub trait ProgressStore: Send + Sync {
    /// Load the persisted document.
    ///
    /// Returns `Ok(None)` if no document has ever been saved. A present but
    /// unreadable document is an error; the ledger recovers by substituting
    /// defaults.
    fn load(&self) -> Result<Option<ProgressState>>;

    /// Persist the document, replacing any previous one atomically.
    fn save(&self, state: &ProgressState) -> Result<()>;

    /// Remove the persisted document.
    ///
    /// Returns `Ok(())` even if no document exists.
    fn clear(&self) -> Result<()>;

    /// Check whether a document has been persisted.
    fn exists(&self) -> Result<bool> {
        Ok(self.load()?.is_some())
    }
}

/// Blanket implementation for Arc-wrapped stores.
///
/// This allows using `Arc<T>` where `T: ProgressStore` is expected, which is
/// useful for sharing stores between tests and commands.
impl<T: ProgressStore + ?Sized> ProgressStore for Arc<T> {
    fn load(&self) -> Result<Option<ProgressState>> {
        (**self).load()
    }

    fn save(&self, state: &ProgressState) -> Result<()> {
        (**self).save(state)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
