//! Category sidecar descriptors.
//!
//! Each category or subcategory directory may carry a `_category_.json`
//! describing how it appears in navigation:
//!
//! ```json
//! { "label": "Tutorial - Basics", "position": 2 }
//! ```
//!
//! Both fields are optional. Reading never fails: a missing file, invalid
//! JSON, or an absent field falls back to the directory name in title case
//! and an absent position.

use crate::frontmatter;
use crate::naming;
use crate::ordering::Position;
use serde_json::Value;
use std::path::Path;

/// Display metadata for a category directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMeta {
    pub label: String,
    pub position: Option<Position>,
}

impl CategoryMeta {
    /// Defaults derived from the directory name alone.
    pub fn from_dir_name(dir_name: &str) -> Self {
        Self {
            label: naming::title_case(dir_name),
            position: None,
        }
    }
}

/// Read the descriptor `file_name` inside `dir`, applying defaults per field.
pub fn read(dir: &Path, file_name: &str) -> CategoryMeta {
    let defaults = CategoryMeta::from_dir_name(&naming::file_name(dir));
    let path = dir.join(file_name);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read category descriptor");
            }
            return defaults;
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => apply(&value, defaults),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Invalid category descriptor, using defaults");
            defaults
        }
    }
}

/// Overlay the fields present in a parsed descriptor onto `defaults`.
fn apply(value: &Value, defaults: CategoryMeta) -> CategoryMeta {
    let Value::Object(map) = value else {
        return defaults;
    };

    let label = match map.get("label") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => frontmatter::number_text(n),
        _ => defaults.label,
    };
    let position = map
        .get("position")
        .and_then(Position::from_json)
        .or(defaults.position);

    CategoryMeta { label, position }
}
