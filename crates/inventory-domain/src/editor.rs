//! Inventory List Editor
//!
//! Owns the item collection, the form buffer, the search text and the edit state.
//! Every operation is synchronous; an `Err` means nothing changed.

use crate::csv_export::export_csv;
use crate::entity::{DomainError, DomainResult, Entity};
use crate::filter::filter_by_name;
use crate::item::{IdGenerator, Item, ItemFields, ItemId};

/// Current form input values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub price: String,
    pub category: String,
}

impl ItemForm {
    fn load(&mut self, item: &Item) {
        self.name = item.name.clone();
        self.price = item.price.clone();
        self.category = item.category.clone();
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Name and price must both have non-whitespace content
    fn check(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyField("name"));
        }
        if self.price.trim().is_empty() {
            return Err(DomainError::EmptyField("price"));
        }
        Ok(())
    }

    fn to_fields(&self) -> ItemFields {
        ItemFields::new(self.name.clone(), self.price.clone(), self.category.clone())
    }
}

/// Two-state edit machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(ItemId),
}

impl EditState {
    pub fn editing_id(&self) -> Option<&ItemId> {
        match self {
            EditState::Idle => None,
            EditState::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }
}

/// A completed mutation, for mirroring to a remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Created(Item),
    Updated(Item),
    Deleted(ItemId),
}

#[derive(Debug, Clone, Default)]
pub struct InventoryEditor {
    items: Vec<Item>,
    form: ItemForm,
    state: EditState,
    search: String,
    ids: IdGenerator,
}

impl InventoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor using a custom id source
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self { ids, ..Self::default() }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    // ========================
    // Form input
    // ========================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.form.price = price.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.form.category = category.into();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    // ========================
    // Operations
    // ========================

    /// Append an item built from the form, then clear the form
    pub fn add_item(&mut self) -> DomainResult<Change> {
        if let EditState::Editing(id) = &self.state {
            return Err(DomainError::AlreadyEditing(id.to_string()));
        }
        self.form.check()?;

        let item = Item::new(self.ids.next_id(), self.form.to_fields());
        log::debug!("add item {} ({})", item.id, item.name);
        self.items.push(item.clone());
        self.form.clear();
        Ok(Change::Created(item))
    }

    /// Load an existing item into the form and mark it as being edited.
    ///
    /// Replaces any edit already in progress without saving it.
    pub fn begin_edit(&mut self, id: &ItemId) -> DomainResult<()> {
        let item = self
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        if let Some(previous) = self.state.editing_id() {
            log::debug!("edit of {} replaced by {}", previous, id);
        }
        self.form.load(&item);
        self.state = EditState::Editing(item.id);
        Ok(())
    }

    /// Write the form back into the item being edited and return to idle
    pub fn commit_update(&mut self) -> DomainResult<Change> {
        let id = self.state.editing_id().cloned().ok_or(DomainError::NotEditing)?;
        self.form.check()?;

        let fields = self.form.to_fields();
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        item.apply(fields);
        let updated = item.clone();

        log::debug!("update item {}", updated.id);
        self.form.clear();
        self.state = EditState::Idle;
        Ok(Change::Updated(updated))
    }

    /// Abandon the current edit
    pub fn cancel_edit(&mut self) -> DomainResult<()> {
        if !self.state.is_editing() {
            return Err(DomainError::NotEditing);
        }
        self.form.clear();
        self.state = EditState::Idle;
        Ok(())
    }

    /// Remove an item. Deleting the item under edit also cancels the edit.
    pub fn delete_item(&mut self, id: &ItemId) -> DomainResult<Change> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        let removed = self.items.remove(index);

        if self.state.editing_id() == Some(&removed.id) {
            self.form.clear();
            self.state = EditState::Idle;
        }
        log::debug!("delete item {}", removed.id);
        Ok(Change::Deleted(removed.id))
    }

    // ========================
    // Views
    // ========================

    /// Items matching the current search text
    pub fn filtered(&self) -> Vec<&Item> {
        filter_by_name(&self.items, &self.search)
    }

    /// CSV document of the filtered view
    pub fn export_csv(&self) -> Result<String, csv::Error> {
        export_csv(self.filtered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frozen_clock() -> i64 {
        1_000
    }

    fn editor() -> InventoryEditor {
        InventoryEditor::with_ids(IdGenerator::with_clock(frozen_clock))
    }

    fn add(editor: &mut InventoryEditor, name: &str, price: &str, category: &str) -> ItemId {
        editor.set_name(name);
        editor.set_price(price);
        editor.set_category(category);
        match editor.add_item().unwrap() {
            Change::Created(item) => item.id,
            other => panic!("unexpected change {:?}", other),
        }
    }

    #[test]
    fn test_add_appends_and_clears_form() {
        let mut ed = editor();
        let id = add(&mut ed, "Pen", "2", "Books");

        assert_eq!(ed.items().len(), 1);
        assert_eq!(ed.items()[0].id, id);
        assert_eq!(ed.items()[0].category, "Books");
        assert_eq!(ed.form(), &ItemForm::default());
    }

    #[test]
    fn test_add_keeps_raw_text() {
        let mut ed = editor();
        add(&mut ed, " Pen ", "2 ", "");
        assert_eq!(ed.items()[0].name, " Pen ");
        assert_eq!(ed.items()[0].price, "2 ");
    }

    #[test]
    fn test_add_with_empty_fields_is_noop() {
        let mut ed = editor();
        ed.set_name("   ");
        ed.set_price("2");
        assert_eq!(ed.add_item(), Err(DomainError::EmptyField("name")));

        ed.set_name("Pen");
        ed.set_price("");
        assert_eq!(ed.add_item(), Err(DomainError::EmptyField("price")));

        assert!(ed.items().is_empty());
        // The form is left as typed
        assert_eq!(ed.form().name, "Pen");
    }

    #[test]
    fn test_add_ids_are_distinct() {
        let mut ed = editor();
        let a = add(&mut ed, "A", "1", "");
        let b = add(&mut ed, "B", "1", "");
        let c = add(&mut ed, "C", "1", "");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_while_editing_is_noop() {
        let mut ed = editor();
        let id = add(&mut ed, "Pen", "2", "Books");
        ed.begin_edit(&id).unwrap();
        assert!(matches!(ed.add_item(), Err(DomainError::AlreadyEditing(_))));
        assert_eq!(ed.items().len(), 1);
    }

    #[test]
    fn test_begin_edit_loads_form() {
        let mut ed = editor();
        let id = add(&mut ed, "Pen", "2", "Books");
        ed.begin_edit(&id).unwrap();

        assert_eq!(ed.state(), &EditState::Editing(id));
        assert_eq!(ed.form().name, "Pen");
        assert_eq!(ed.form().price, "2");
        assert_eq!(ed.form().category, "Books");
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut ed = editor();
        add(&mut ed, "Pen", "2", "Books");
        assert!(ed.begin_edit(&ItemId::from("nope")).is_err());
        assert_eq!(ed.state(), &EditState::Idle);
        assert_eq!(ed.form(), &ItemForm::default());
    }

    #[test]
    fn test_begin_edit_overwrites_previous_edit() {
        let mut ed = editor();
        let pen = add(&mut ed, "Pen", "2", "Books");
        let shirt = add(&mut ed, "Shirt", "15", "Clothing");

        ed.begin_edit(&pen).unwrap();
        ed.set_name("Pencil");
        ed.begin_edit(&shirt).unwrap();

        assert_eq!(ed.state(), &EditState::Editing(shirt));
        assert_eq!(ed.form().name, "Shirt");
        assert_eq!(ed.find(&pen).unwrap().name, "Pen");
    }

    #[test]
    fn test_commit_update_replaces_fields_and_keeps_order() {
        let mut ed = editor();
        let pen = add(&mut ed, "Pen", "2", "Books");
        let shirt = add(&mut ed, "Shirt", "15", "Clothing");
        let tv = add(&mut ed, "TV", "300", "Electronics");
        let before = ed.items().to_vec();

        ed.begin_edit(&shirt).unwrap();
        ed.set_name("Jacket");
        ed.set_price("40");
        ed.set_category("Clothing");
        let change = ed.commit_update().unwrap();

        let ids: Vec<&ItemId> = ed.items().iter().map(|i| &i.id).collect();
        assert_eq!(ids, vec![&pen, &shirt, &tv]);
        assert_eq!(ed.items()[0], before[0]);
        assert_eq!(ed.items()[2], before[2]);
        assert_eq!(ed.items()[1].name, "Jacket");
        assert_eq!(ed.items()[1].price, "40");
        assert_eq!(change, Change::Updated(ed.items()[1].clone()));
        assert_eq!(ed.state(), &EditState::Idle);
        assert_eq!(ed.form(), &ItemForm::default());
    }

    #[test]
    fn test_commit_update_requires_fields() {
        let mut ed = editor();
        let id = add(&mut ed, "Pen", "2", "Books");
        ed.begin_edit(&id).unwrap();
        ed.set_price(" ");

        assert_eq!(ed.commit_update(), Err(DomainError::EmptyField("price")));
        assert_eq!(ed.state(), &EditState::Editing(id.clone()));
        assert_eq!(ed.find(&id).unwrap().price, "2");
    }

    #[test]
    fn test_commit_update_when_idle_is_noop() {
        let mut ed = editor();
        add(&mut ed, "Pen", "2", "Books");
        ed.set_name("Other");
        ed.set_price("1");
        assert_eq!(ed.commit_update(), Err(DomainError::NotEditing));
        assert_eq!(ed.items()[0].name, "Pen");
    }

    #[test]
    fn test_cancel_edit() {
        let mut ed = editor();
        let id = add(&mut ed, "Pen", "2", "Books");
        assert_eq!(ed.cancel_edit(), Err(DomainError::NotEditing));

        ed.begin_edit(&id).unwrap();
        ed.cancel_edit().unwrap();
        assert_eq!(ed.state(), &EditState::Idle);
        assert_eq!(ed.form(), &ItemForm::default());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut ed = editor();
        let pen = add(&mut ed, "Pen", "2", "Books");
        let shirt = add(&mut ed, "Shirt", "15", "Clothing");
        let tv = add(&mut ed, "TV", "300", "Electronics");
        let before = ed.items().to_vec();

        assert_eq!(ed.delete_item(&shirt), Ok(Change::Deleted(shirt.clone())));
        assert_eq!(ed.items(), &[before[0].clone(), before[2].clone()]);
        assert!(ed.find(&pen).is_some());
        assert!(ed.find(&tv).is_some());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut ed = editor();
        add(&mut ed, "Pen", "2", "Books");
        let before = ed.items().to_vec();
        assert!(ed.delete_item(&ItemId::from("missing")).is_err());
        assert_eq!(ed.items(), before.as_slice());
    }

    #[test]
    fn test_delete_item_under_edit_cancels_edit() {
        let mut ed = editor();
        let pen = add(&mut ed, "Pen", "2", "Books");
        let shirt = add(&mut ed, "Shirt", "15", "Clothing");

        ed.begin_edit(&pen).unwrap();
        ed.delete_item(&shirt).unwrap();
        assert_eq!(ed.state(), &EditState::Editing(pen.clone()));

        ed.delete_item(&pen).unwrap();
        assert_eq!(ed.state(), &EditState::Idle);
        assert_eq!(ed.form(), &ItemForm::default());
    }

    #[test]
    fn test_search_does_not_mutate_items() {
        let mut ed = editor();
        add(&mut ed, "Book", "1", "Books");
        add(&mut ed, "Boot", "1", "Clothing");
        add(&mut ed, "Pen", "1", "Books");

        ed.set_search("boo");
        let names: Vec<&str> = ed.filtered().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Book", "Boot"]);
        assert_eq!(ed.items().len(), 3);
    }

    #[test]
    fn test_add_search_export_flow() {
        let mut ed = editor();
        add(&mut ed, "Pen", "2", "Books");
        add(&mut ed, "Shirt", "15", "Clothing");
        ed.set_search("sh");

        let names: Vec<&str> = ed.filtered().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Shirt"]);
        assert_eq!(ed.export_csv().unwrap(), "Product Name,Price,Category\nShirt,15,Clothing\n");
    }
}
