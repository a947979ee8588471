//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_editor;
use crate::store::{store_set_search, EditorStateStoreFields};

/// Name filter, applied on every keystroke
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_editor().store;

    view! {
        <input
            type="text"
            class="search-input"
            placeholder="Search items"
            prop:value=move || store.editor().read().search().to_string()
            on:input=move |ev| store_set_search(&store, event_target_value(&ev))
        />
    }
}
