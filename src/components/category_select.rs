//! Category Select Component
//!
//! Dropdown over the fixed category list with an empty placeholder option.

use leptos::prelude::*;

use crate::context::use_editor;
use crate::store::{store_set_category, EditorStateStoreFields};

#[component]
pub fn CategorySelect() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    let selected = move || store.editor().read().form().category.clone();

    view! {
        <label for="categorySelect">"Choose a category:"</label>
        <select
            id="categorySelect"
            class="category-select"
            aria-label="Category selection"
            on:change=move |ev| store_set_category(&store, event_target_value(&ev))
        >
            <option value="" prop:selected=move || selected().is_empty()>"Select Category"</option>
            {move || store.categories().get().into_iter().map(|category| {
                let value = category.clone();
                let is_selected = move || selected() == value;
                view! {
                    <option value=category.clone() prop:selected=is_selected>{category.clone()}</option>
                }
            }).collect_view()}
        </select>
    }
}
