//! Category Set
//!
//! Fixed list of categories offered by the item form.

/// Built-in categories
pub const DEFAULT_CATEGORIES: &[&str] = &["Electronics", "Clothing", "Books"];

/// Immutable, ordered set of category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Build from configured names, dropping blanks and duplicates.
    /// Falls back to the defaults when nothing usable remains.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || unique.iter().any(|n| n == name) {
                continue;
            }
            unique.push(name.to_string());
        }
        if unique.is_empty() {
            log::debug!("no usable categories configured, using defaults");
            return Self::default();
        }
        Self { names: unique }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
