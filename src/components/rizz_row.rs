//! Rizz Row Component
//!
//! One rizz with its vote controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::Rizz;
use crate::store::{store_replace_rizz, use_rizz_store};

/// Which vote button was pressed
#[derive(Debug, Clone, Copy)]
enum VoteDirection {
    Up,
    Down,
}

/// A single rizz row
#[component]
pub fn RizzRow(data: Rizz) -> impl IntoView {
    let store = use_rizz_store();

    let id = data.id;
    let votes = data.votes;
    let text = data.rizz;

    let vote = move |direction: VoteDirection| {
        spawn_local(async move {
            let result = match direction {
                VoteDirection::Up => commands::rizz::upvote(id).await,
                VoteDirection::Down => commands::rizz::downvote(id).await,
            };
            match result {
                Ok(updated) => {
                    if !store_replace_rizz(&store, updated) {
                        web_sys::console::log_1(&format!("[RIZZ] Voted rizz {} not in list", id).into());
                    }
                }
                Err(e) => web_sys::console::error_1(
                    &format!("[RIZZ] {:?} vote on {} failed: {}", direction, id, e).into(),
                ),
            }
        });
    };

    view! {
        <div class="rizz-row">
            <div class="vote-controls">
                <button class="vote-btn up" on:click=move |_| vote(VoteDirection::Up)>"▲"</button>
                <span class={if votes < 0 { "vote-count negative" } else { "vote-count" }}>{votes}</span>
                <button class="vote-btn down" on:click=move |_| vote(VoteDirection::Down)>"▼"</button>
            </div>
            <span class="rizz-text">{text}</span>
        </div>
    }
}
