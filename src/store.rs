//! Editor State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use inventory_domain::{CategorySet, Change, DomainResult, InventoryEditor, Item, ItemId};

/// Editor screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// Items, form buffer, search text and edit state
    pub editor: InventoryEditor,
    /// Options for the category select
    pub categories: Vec<String>,
}

impl EditorState {
    pub fn new(categories: &CategorySet) -> Self {
        Self {
            editor: InventoryEditor::new(),
            categories: categories.iter().map(str::to_string).collect(),
        }
    }
}

/// Type alias for the store
pub type EditorStore = Store<EditorState>;

/// Invalid operations are silent no-ops; keep a trace in the console only
fn settle<T>(op: &str, result: DomainResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{} ignored: {}", op, e);
            None
        }
    }
}

// ========================
// Form Input
// ========================

pub fn store_set_name(store: &EditorStore, name: String) {
    store.editor().write().set_name(name);
}

pub fn store_set_price(store: &EditorStore, price: String) {
    store.editor().write().set_price(price);
}

pub fn store_set_category(store: &EditorStore, category: String) {
    store.editor().write().set_category(category);
}

pub fn store_set_search(store: &EditorStore, query: String) {
    store.editor().write().set_search(query);
}

// ========================
// Operations
// ========================

pub fn store_add_item(store: &EditorStore) -> Option<Change> {
    settle("add", store.editor().write().add_item())
}

pub fn store_begin_edit(store: &EditorStore, id: &ItemId) {
    settle("edit", store.editor().write().begin_edit(id));
}

pub fn store_commit_update(store: &EditorStore) -> Option<Change> {
    settle("update", store.editor().write().commit_update())
}

pub fn store_cancel_edit(store: &EditorStore) {
    settle("cancel", store.editor().write().cancel_edit());
}

pub fn store_delete_item(store: &EditorStore, id: &ItemId) -> Option<Change> {
    settle("delete", store.editor().write().delete_item(id))
}

// ========================
// Views
// ========================

/// Filtered rows in display order
pub fn store_filtered_items(store: &EditorStore) -> Vec<Item> {
    store.editor().read().filtered().into_iter().cloned().collect()
}

pub fn store_export_csv(store: &EditorStore) -> Option<String> {
    match store.editor().read_untracked().export_csv() {
        Ok(csv) => Some(csv),
        Err(e) => {
            log::warn!("csv export failed: {}", e);
            None
        }
    }
}
