//! CLI output formatting for all commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (category, subcategory, document) is its resolved title
//! and positional index in navigation order, with ids and source paths shown
//! as secondary context via indented lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 Tutorial - Basics (4 pages)
//!     Key: tutorial-basics
//!     001 Create a Page
//!         Doc: tutorial-basics/create-a-page
//!         Source: tutorial-basics/create-a-page.md (heading)
//!     Subcategories
//!     001 Advanced Topics (1 page) → tutorial-basics/advanced/index
//!         001 Deploy
//!             Doc: tutorial-basics/advanced/deploy
//!             Source: tutorial-basics/advanced/deploy.md (filename)
//!
//! Titles
//!     12 documents
//! ```
//!
//! ## Generate
//!
//! ```text
//! Generated src/data/category-nav.json
//! Categories found: tutorial-basics, tutorial-extras
//! Generated src/data/doc-titles.json with 12 entries.
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::scan::{Document, NavIndex, Scan, TitleIndex};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format an entity header: positional index + title, with optional page count.
///
/// ```text
/// 001 Tutorial - Basics (4 pages)
/// 001 Create a Page
/// ```
fn entity_header(index: usize, title: &str, pages: Option<usize>) -> String {
    match pages {
        Some(n) => format!("{} {} ({})", format_index(index), title, plural(n, "page", "pages")),
        None => format!("{} {}", format_index(index), title),
    }
}

fn document_lines(lines: &mut Vec<String>, depth: usize, index: usize, doc: &Document) {
    let base = indent(depth);
    lines.push(format!("{}{}", base, entity_header(index, &doc.title, None)));
    lines.push(format!("{}    Doc: {}", base, doc.doc_id));
    lines.push(format!(
        "{}    Source: {} ({})",
        base,
        doc.source.display(),
        doc.title_source
    ));
}

// ============================================================================
// Check output
// ============================================================================

/// Format the navigation report for `check`.
pub fn format_nav_output(nav: &NavIndex) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    if nav.categories.is_empty() {
        lines.push("    (none)".to_string());
    }

    for (i, category) in nav.categories.iter().enumerate() {
        lines.push(entity_header(i + 1, &category.label, Some(category.pages.len())));
        lines.push(format!("    Key: {}", category.key));

        for (j, page) in category.pages.iter().enumerate() {
            document_lines(&mut lines, 1, j + 1, page);
        }

        if !category.subcategories.is_empty() {
            lines.push("    Subcategories".to_string());
        }
        for (j, sub) in category.subcategories.iter().enumerate() {
            let header = entity_header(j + 1, &sub.title, Some(sub.pages.len()));
            let target = if sub.has_index {
                format!(" \u{2192} {}", sub.doc_id)
            } else {
                String::new()
            };
            lines.push(format!("    {}{}", header, target));
            for (k, page) in sub.pages.iter().enumerate() {
                document_lines(&mut lines, 2, k + 1, page);
            }
        }
    }

    lines
}

/// Format the full `check` report: navigation tree plus title map summary.
pub fn format_check_output(scan: &Scan) -> Vec<String> {
    let mut lines = format_nav_output(&scan.nav);
    lines.push(String::new());
    lines.push("Titles".to_string());
    lines.push(format!(
        "    {}",
        plural(scan.titles.len(), "document", "documents")
    ));
    lines
}

/// Print the `check` report to stdout.
pub fn print_check_output(scan: &Scan) {
    for line in format_check_output(scan) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the message after writing the navigation index.
pub fn format_nav_written(path: &Path, nav: &NavIndex) -> Vec<String> {
    vec![
        format!("Generated {}", path.display()),
        format!("Categories found: {}", nav.keys().join(", ")),
    ]
}

/// Format the message after writing the title map.
pub fn format_titles_written(path: &Path, titles: &TitleIndex) -> Vec<String> {
    vec![format!(
        "Generated {} with {} entries.",
        path.display(),
        titles.len()
    )]
}

pub fn print_nav_written(path: &Path, nav: &NavIndex) {
    for line in format_nav_written(path, nav) {
        println!("{}", line);
    }
}

pub fn print_titles_written(path: &Path, titles: &TitleIndex) {
    for line in format_titles_written(path, titles) {
        println!("{}", line);
    }
}
