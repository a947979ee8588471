//! Item Form Component
//!
//! Name / price inputs with an Add or Update button depending on edit state.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::context::use_editor;
use crate::store::{
    store_add_item, store_cancel_edit, store_commit_update, store_set_name, store_set_price,
    EditorStateStoreFields,
};

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    let is_editing = move || store.editor().read().state().is_editing();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let change = if store.editor().read_untracked().state().is_editing() {
            store_commit_update(&store)
        } else {
            store_add_item(&store)
        };
        if let Some(change) = change {
            ctx.sync(change);
        }
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <CategorySelect />
            <input
                type="text"
                placeholder="Enter item name"
                prop:value=move || store.editor().read().form().name.clone()
                on:input=move |ev| store_set_name(&store, event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Enter the price"
                prop:value=move || store.editor().read().form().price.clone()
                on:input=move |ev| store_set_price(&store, event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">
                {move || if is_editing() { "Update" } else { "Add" }}
            </button>
            <Show when=is_editing>
                <button type="button" class="btn cancel-btn" on:click=move |_| store_cancel_edit(&store)>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
