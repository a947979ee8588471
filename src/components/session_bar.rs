//! Session Bar Component
//!
//! Shows who is signed in and whether edits are mirrored remotely.

use leptos::prelude::*;

use crate::context::use_editor;

#[component]
pub fn SessionBar() -> impl IntoView {
    let ctx = use_editor();
    let user = ctx.current_user();
    let sync_label = if ctx.sync_enabled() { "Cloud sync on" } else { "Local only" };

    view! {
        <div class="session-bar">
            {user.map(|name| view! { <span class="session-user">{format!("Signed in: {}", name)}</span> })}
            <span class="sync-status">{sync_label}</span>
        </div>
    }
}
