//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The whole state
//! is replaced on every mutation and every cloud snapshot rather than patched
//! field by field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{HistoryItem, Lists, LocationId, SharedDocument};

/// Application state: the shared document plus session-local navigation
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Which site's list is open (None = selector screen). Local-only,
    /// excluded from the cloud mirror.
    pub current_location: Option<LocationId>,
    /// Per-site item lists (shared)
    pub lists: Lists,
    /// Purchase-history ledger (shared)
    pub master_history: Vec<HistoryItem>,
}

impl AppState {
    /// The cloud-mirrored subset of this state
    pub fn document(&self) -> SharedDocument {
        SharedDocument {
            lists: self.lists.clone(),
            master_history: self.master_history.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Take an untracked snapshot of the whole state, for computing mutations
pub fn store_snapshot(store: &AppStore) -> AppState {
    AppState {
        current_location: store.current_location().get_untracked(),
        lists: store.lists().get_untracked(),
        master_history: store.master_history().get_untracked(),
    }
}

/// Replace the whole state (local mutation path)
pub fn store_replace(store: &AppStore, next: AppState) {
    store.current_location().set(next.current_location);
    store.lists().set(next.lists);
    store.master_history().set(next.master_history);
}

/// Replace the shared branches with an incoming cloud snapshot, keeping the
/// session-local current location untouched
pub fn store_apply_document(store: &AppStore, doc: SharedDocument) {
    store.lists().set(doc.lists);
    store.master_history().set(doc.master_history);
}
