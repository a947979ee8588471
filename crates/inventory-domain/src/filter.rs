//! Search Filter
//!
//! Case-insensitive substring match on item name only.

use crate::item::Item;

pub fn matches_name(item: &Item, query: &str) -> bool {
    item.name.to_lowercase().contains(&query.to_lowercase())
}

/// Items whose name contains `query`, in collection order
pub fn filter_by_name<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    items.iter().filter(|item| matches_name(item, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemFields, ItemId};

    fn make_item(id: &str, name: &str, category: &str) -> Item {
        Item::new(ItemId::from(id), ItemFields::new(name, "1", category))
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = vec![
            make_item("1", "Book", "Books"),
            make_item("2", "Boot", "Clothing"),
            make_item("3", "Pen", "Books"),
        ];
        let names: Vec<&str> = filter_by_name(&items, "boo").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Book", "Boot"]);

        let names: Vec<&str> = filter_by_name(&items, "BOO").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Book", "Boot"]);
    }

    #[test]
    fn test_filter_ignores_category() {
        let items = vec![make_item("1", "Pen", "Books")];
        assert!(filter_by_name(&items, "books").is_empty());
        assert!(!matches_name(&items[0], "book"));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let items = vec![make_item("1", "Pen", ""), make_item("2", "Shirt", "")];
        assert_eq!(filter_by_name(&items, "").len(), 2);
        assert!(matches_name(&items[1], ""));
    }
}
