//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Rizz, SortOrder};
use crate::rizz_list;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RizzState {
    /// Locally cached rizz, in display order
    pub rizz: Vec<Rizz>,
    /// Selected sort order (applied only when it changes)
    pub order: SortOrder,
}

/// Type alias for the store
pub type RizzStore = Store<RizzState>;

/// Get the rizz store from context
pub fn use_rizz_store() -> RizzStore {
    expect_context::<RizzStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list with a fresh fetch
pub fn store_set_rizz(store: &RizzStore, fetched: Vec<Rizz>) {
    store.rizz().set(fetched);
}

/// Append a newly submitted rizz
pub fn store_append_rizz(store: &RizzStore, created: Rizz) {
    rizz_list::append_rizz(&mut store.rizz().write(), created);
}

/// Replace a rizz by ID after a vote.
/// Unknown IDs leave the contents as is but still notify subscribers.
pub fn store_replace_rizz(store: &RizzStore, updated: Rizz) -> bool {
    rizz_list::replace_rizz(&mut store.rizz().write(), updated)
}

/// Select a sort order and re-sort the current list
pub fn store_set_order(store: &RizzStore, order: SortOrder) {
    store.order().set(order);
    rizz_list::sort_rizz(&mut store.rizz().write(), order);
}
