//! Inventory Domain
//!
//! Contains the item entity and the list editor state machine.
//! This crate has NO browser dependencies, so everything here is testable natively.

mod entity;
mod item;
mod category;
mod editor;
mod filter;
mod csv_export;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Item, ItemId, ItemFields, IdGenerator};
pub use category::{CategorySet, DEFAULT_CATEGORIES};
pub use editor::{InventoryEditor, ItemForm, EditState, Change};
pub use filter::{matches_name, filter_by_name};
pub use csv_export::{export_csv, CSV_HEADER, DEFAULT_EXPORT_FILENAME};
