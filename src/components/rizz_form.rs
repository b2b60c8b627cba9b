//! Rizz Form Component
//!
//! Text field plus submit button for new rizz.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_append_rizz, use_rizz_store};

/// Form for submitting a new rizz.
///
/// The input clears as soon as the form is submitted; the created rizz is
/// appended when the backend answers. Failures only reach the console.
#[component]
pub fn RizzForm() -> impl IntoView {
    let store = use_rizz_store();

    let (cook, set_cook) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = cook.get_untracked();
        set_cook.set(String::new());

        spawn_local(async move {
            match commands::rizz::submit(&name).await {
                Ok(created) => store_append_rizz(&store, created),
                Err(e) => web_sys::console::error_1(&format!("[RIZZ] Submit failed: {}", e).into()),
            }
        });
    };

    view! {
        <form class="rizz-form" on:submit=submit>
            <input
                type="text"
                name="rizz"
                class="rizz-input"
                prop:value=move || cook.get()
                on:input=move |ev| set_cook.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"add"</button>
        </form>
    }
}
