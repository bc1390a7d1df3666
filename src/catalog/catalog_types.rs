//! Suggestion and category records supplied by the caller.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a suggestion or category
///
/// Catalog files may use JSON numbers or strings for ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// A candidate item offered in the dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: ItemId,
    pub title: String,
    pub category_id: ItemId,
}

impl Suggestion {
    pub fn new(id: impl Into<ItemId>, title: &str, category_id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            category_id: category_id.into(),
        }
    }
}

/// Grouping label shown next to a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: ItemId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<ItemId>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
        }
    }
}

/// The full suggestion list plus the category lookup
///
/// Categories are keyed by the string form of their id, so a `categoryId`
/// of `3` and one of `"3"` resolve to the same entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Catalog {
    pub fn new(suggestions: Vec<Suggestion>, categories: Vec<Category>) -> Self {
        let categories = categories
            .into_iter()
            .map(|category| (category.id.to_string(), category))
            .collect();
        Self {
            categories,
            suggestions,
        }
    }

    /// Look up the category a suggestion points at
    ///
    /// A dangling `category_id` yields `None`; the view renders it as absent.
    pub fn category_for(&self, suggestion: &Suggestion) -> Option<&Category> {
        self.categories.get(&suggestion.category_id.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_types_tests.rs"]
mod catalog_types_tests;
