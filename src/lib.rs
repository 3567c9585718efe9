//! # Docnav
//!
//! Build-time navigation index generator for a markdown documentation site.
//! Your docs directory is the data source: first-level directories become
//! categories, second-level directories become subcategories, and every
//! markdown document gets a resolved title.
//!
//! # Architecture: Scan, Emit, Render
//!
//! ```text
//! 1. Scan    docs/          →  NavIndex + TitleIndex   (filesystem → structured data)
//! 2. Emit    indexes        →  src/data/*.json         (deterministic pretty JSON)
//! 3. Render  category-nav   →  HTML fragment           (per-category link list)
//! ```
//!
//! The two artifacts are:
//!
//! - `category-nav.json`: category key → `{ pages, subcategories }`, two levels
//!   deep, every list ordered by position then title.
//! - `doc-titles.json`: document id → title for every document at any depth.
//!
//! Both are built from one directory walker and one document id function, so
//! the same file always gets the same id in both. Re-running on an unchanged
//! tree produces byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Builds the navigation index and the title map from the walked tree |
//! | [`walk`] | Depth-bounded, sorted directory walk that skips reserved directories |
//! | [`naming`] | Document ids, landing-document detection, filename title casing |
//! | [`frontmatter`] | Best-effort YAML header extraction |
//! | [`title`] | Ordered title-source chain with first-heading extraction |
//! | [`descriptor`] | `_category_.json` label and position |
//! | [`ordering`] | Typed positions and the position-then-title comparator |
//! | [`emit`] | JSON serialization and artifact writing |
//! | [`types`] | Consumer-side view of `category-nav.json` |
//! | [`render`] | Category navigation HTML fragment using Maud |
//! | [`config`] | `docnav.toml` loading, validation, stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Absent Positions Sort Last
//!
//! A position is an `Option<Position>` rather than a sentinel number. Entries
//! without a position sort after every positioned entry and serialize as
//! `null`.
//!
//! ## Never Fail on Content
//!
//! Malformed frontmatter and malformed descriptors fall back to defaults with
//! a warning. Only structural problems abort a run: a missing docs directory,
//! an unreadable file, or two files that map to the same document id.

pub mod config;
pub mod descriptor;
pub mod emit;
pub mod frontmatter;
pub mod naming;
pub mod ordering;
pub mod output;
pub mod render;
pub mod scan;
pub mod title;
pub mod types;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
