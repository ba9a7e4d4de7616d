//! Application Context
//!
//! Shared signals and mutation dispatchers provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{HistoryItem, LocationId, NewItem, ShoppingItem};
use crate::ops::ItemPatch;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// True while a cloud write or the initial snapshot is outstanding - read
    pub syncing: ReadSignal<bool>,
    set_syncing: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(syncing: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            syncing: syncing.0,
            set_syncing: syncing.1,
        }
    }

    pub fn set_syncing(&self, active: bool) {
        self.set_syncing.set(active);
    }
}

/// Mutation dispatchers owned by the top-level component. Components invoke
/// these instead of touching the store or the cloud mirror directly; each one
/// applies a pure state transition and fires the cloud write.
#[derive(Clone, Copy)]
pub struct ListActions {
    pub set_location: Callback<Option<LocationId>>,
    pub add: Callback<NewItem>,
    pub add_many: Callback<Vec<NewItem>>,
    pub update: Callback<(String, ItemPatch)>,
    pub toggle: Callback<String>,
    pub delete: Callback<String>,
    pub reorder: Callback<Vec<ShoppingItem>>,
    pub clear_list: Callback<()>,
    pub reorder_history: Callback<Vec<HistoryItem>>,
    pub delete_history: Callback<String>,
    pub clear_history: Callback<()>,
    pub factory_reset: Callback<()>,
}

/// Get the mutation dispatchers from context
pub fn use_actions() -> ListActions {
    expect_context::<ListActions>()
}
