//! Item Entity
//!
//! An inventory record: name, price (kept as entered text) and category.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Item identifier: decimal millisecond timestamp taken at creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The user-editable part of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    /// Stored as text; no numeric validation
    pub price: String,
    /// Empty when no category was selected
    pub category: String,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, price: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            category: category.into(),
        }
    }
}

/// Inventory item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    pub category: String,
}

impl Item {
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            category: fields.category,
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.category = fields.category;
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields::new(self.name.clone(), self.price.clone(), self.category.clone())
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn system_clock() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Timestamp-based id source.
///
/// Ids never repeat: when the clock has not advanced past the last issued
/// value, the next id is `last + 1`.
#[derive(Clone)]
pub struct IdGenerator {
    clock: fn() -> i64,
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(system_clock)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: None }
    }

    pub fn next_id(&mut self) -> ItemId {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        ItemId(id.to_string())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").field("last", &self.last).finish()
    }
}
