//! Storage-level Query Predicates
//!
//! `PlantFilter` is what the query builder hands to a `PlantStore`. Text
//! criteria are case-insensitive substring matches, never patterns: user text
//! is compared literally, so characters like `(`, `*` or `.` carry no meaning.

use crate::catalog::types::Plant;

/// Conjunction of optional criteria. An empty filter matches every plant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFilter {
    /// Matches when the name or any category contains the text.
    pub text: Option<String>,
    /// Matches when at least one category contains the text.
    pub category: Option<String>,
    /// Matches the stock flag exactly.
    pub in_stock: Option<bool>,
}

impl PlantFilter {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.category.is_none() && self.in_stock.is_none()
    }

    pub fn matches(&self, plant: &Plant) -> bool {
        if let Some(in_stock) = self.in_stock {
            if plant.in_stock != in_stock {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !plant
                .categories
                .iter()
                .any(|label| contains_ignore_case(label, category))
            {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let in_name = contains_ignore_case(&plant.name, text);
            let in_categories = plant
                .categories
                .iter()
                .any(|label| contains_ignore_case(label, text));
            if !in_name && !in_categories {
                return false;
            }
        }

        true
    }
}

/// Offset pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub take: u64,
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
