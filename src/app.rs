//! Rizzclopedia Frontend App
//!
//! The single page: submission form, sort selector and the rizz list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{RizzForm, RizzRow, SortSelector};
use crate::store::{store_set_rizz, RizzState, RizzStateStoreFields};

/// The event may have fired before the listener existed, so reload once more.
fn after_listener_registered(registered: Result<(), String>, set_reload_trigger: WriteSignal<u32>) {
    match registered {
        Ok(()) => set_reload_trigger.update(|v| *v += 1),
        Err(e) => {
            web_sys::console::error_1(&format!("[RIZZ] Failed to listen for db init: {}", e).into());
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(RizzState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    provide_context(store);

    // Refetch once the backend finishes opening the database
    spawn_local(async move {
        let registered = commands::on_db_initialized(move || {
            set_reload_trigger.update(|v| *v += 1);
        })
        .await;
        after_listener_registered(registered, set_reload_trigger);
    });

    // Load on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match commands::rizz::get_all().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[RIZZ] Loaded {} rizz, trigger={}", loaded.len(), trigger).into());
                    store_set_rizz(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[RIZZ] Load failed: {}", e).into());
                }
            }
        });
    });

    view! {
        <main class="page">
            <div class="title-block">
                <h1 class="title">"The " <span class="accent">"Rizzclopedia"</span></h1>
            </div>

            <div class="content">
                <RizzForm />

                <div class="sort-row">
                    <SortSelector />
                </div>

                <ul class="rizz-list">
                    // Votes are part of the key so a replaced rizz re-renders
                    <For
                        each=move || store.rizz().get()
                        key=|rizz| (rizz.id, rizz.votes)
                        children=move |rizz| view! {
                            <li><RizzRow data=rizz /></li>
                        }
                    />
                </ul>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_triggers_one_reload() {
        let owner = Owner::new();
        owner.set();
        let (reload_trigger, set_reload_trigger) = signal(0u32);

        after_listener_registered(Ok(()), set_reload_trigger);
        assert_eq!(reload_trigger.get_untracked(), 1);
    }
}
