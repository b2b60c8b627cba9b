//! Sort Selector Component
//!
//! Dropdown choosing the list order.

use leptos::prelude::*;

use crate::models::SortOrder;
use crate::store::{store_set_order, use_rizz_store, RizzStateStoreFields};

/// Sort order options (value, label)
pub const SORT_ORDERS: &[(SortOrder, &str)] = &[
    (SortOrder::Vote, "by vote"),
    (SortOrder::Alphabetical, "by name"),
];

/// Sort dropdown. Re-sorts the list once per change; later additions are not re-sorted.
#[component]
pub fn SortSelector() -> impl IntoView {
    let store = use_rizz_store();

    let on_change = move |ev: web_sys::Event| {
        if let Some(order) = SortOrder::from_str(&event_target_value(&ev)) {
            store_set_order(&store, order);
        }
    };

    view! {
        <label for="order" class="sort-label">"Sort:"</label>
        <select
            name="order"
            id="order"
            class="sort-select"
            prop:value=move || store.order().get().as_str()
            on:change=on_change
        >
            {SORT_ORDERS.iter().map(|(order, label)| view! {
                <option value={order.as_str()}>{*label}</option>
            }).collect_view()}
        </select>
    }
}
