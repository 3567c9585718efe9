//! Consumer-side view of the generated navigation index.
//!
//! These types mirror what `category-nav.json` contains, as read back by the
//! presentation layer. Category order is irrelevant once written, since
//! consumers look categories up by key.

use crate::ordering::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed `category-nav.json`: category key → category data.
pub type NavData = BTreeMap<String, CategoryData>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub pages: Vec<PageData>,
    #[serde(default)]
    pub subcategories: Vec<SubcategoryData>,
}

impl CategoryData {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.subcategories.is_empty()
    }
}

/// A linked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub doc_id: String,
    pub title: String,
    #[serde(default)]
    pub position: Option<Position>,
}

/// A subcategory heading with its own page list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryData {
    pub key: String,
    pub title: String,
    pub doc_id: String,
    pub has_index: bool,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub pages: Vec<PageData>,
}
