//! Shared application state for the roster API.
//!
//! The roster store is synchronous and unsynchronized, so [`AppState`]
//! wraps it in a single [`RwLock`]. Handlers that mutate the roster hold
//! the write guard for the whole operation (for example remove, which
//! deletes, renumbers lanes, and checks the winner). Reads take the
//! read guard and clone what they return before releasing it.

use std::sync::Arc;

use duckrace_core::RosterStore;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The roster and race settings.
    pub store: Arc<RwLock<RosterStore>>,
}

impl AppState {
    /// Create state around a freshly seeded store.
    pub fn new() -> Self {
        Self::with_store(RosterStore::new())
    }

    /// Create state around an existing store.
    pub fn with_store(store: RosterStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
