//! Shared test utilities for the docnav test suite.
//!
//! Provides fixture setup and lookup helpers that work with scan-phase data
//! structures (`NavIndex`, `Category`, `Subcategory`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let nav = scan_nav(tmp.path(), &NavConfig::default()).unwrap();
//!
//! let basics = find_category(&nav, "tutorial-basics");
//! let advanced = find_subcategory(basics, "advanced");
//! assert_eq!(page_ids(&advanced.pages), vec!["tutorial-basics/advanced/deploy"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::{Category, Document, NavIndex, Subcategory};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// The returned directory is the content root itself. Tests get an isolated
/// copy they can mutate without affecting other tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Index lookups — panics with a clear message on miss
// =========================================================================

/// Find a category by key. Panics if not found.
pub fn find_category<'a>(nav: &'a NavIndex, key: &str) -> &'a Category {
    nav.get(key).unwrap_or_else(|| {
        let keys = nav.keys();
        panic!("category '{key}' not found. Available: {keys:?}")
    })
}

/// Find a subcategory by key within a category. Panics if not found.
pub fn find_subcategory<'a>(category: &'a Category, key: &str) -> &'a Subcategory {
    category
        .subcategories
        .iter()
        .find(|s| s.key == key)
        .unwrap_or_else(|| {
            let keys: Vec<&str> = category.subcategories.iter().map(|s| s.key.as_str()).collect();
            panic!(
                "subcategory '{key}' not found in '{}'. Available: {keys:?}",
                category.key
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Document ids in list order.
pub fn page_ids(pages: &[Document]) -> Vec<&str> {
    pages.iter().map(|p| p.doc_id.as_str()).collect()
}

/// Document titles in list order.
pub fn page_titles(pages: &[Document]) -> Vec<&str> {
    pages.iter().map(|p| p.title.as_str()).collect()
}
