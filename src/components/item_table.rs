//! Item Table Component
//!
//! Filtered item rows with edit/delete actions.

use leptos::prelude::*;

use inventory_domain::Item;
use crate::context::use_editor;
use crate::store::{store_begin_edit, store_delete_item, store_filtered_items};

/// A single item row
#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    let edit_id = item.id.clone();
    let delete_id = item.id.clone();

    view! {
        <tr class="item-row">
            <td>{item.name}</td>
            <td>{format!("${}", item.price)}</td>
            <td>{item.category}</td>
            <td class="item-actions">
                <button
                    class="btn edit-btn"
                    aria-label="Edit item"
                    on:click=move |_| store_begin_edit(&store, &edit_id)
                >
                    "✎"
                </button>
                <button
                    class="btn delete-btn"
                    aria-label="Delete item"
                    on:click=move |_| {
                        if let Some(change) = store_delete_item(&store, &delete_id) {
                            ctx.sync(change);
                        }
                    }
                >
                    "×"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn ItemTable() -> impl IntoView {
    let store = use_editor().store;

    let rows = Memo::new(move |_| store_filtered_items(&store));

    view! {
        <table class="item-table">
            <thead>
                <tr>
                    <th>"Product Name"</th>
                    <th>"Price"</th>
                    <th>"Category"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                // Keyed on the whole record so edited rows re-render
                <For
                    each=move || rows.get()
                    key=|item| item.clone()
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </tbody>
        </table>
        <p class="item-count">{move || format!("{} items", rows.get().len())}</p>
    }
}
