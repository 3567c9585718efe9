//! Centralized filename handling for documents and directories.
//!
//! Every entry in the content tree is addressed by its path relative to the
//! content root. This module owns the conversions that both output builders
//! share, so the hierarchical index and the flat title map can never disagree
//! on how a file is named:
//!
//! - [`doc_id`]: relative path → canonical identifier (`tutorial/intro`)
//! - [`title_case`]: file or directory stem → display title
//!   (`create-a-blog_post` → "Create A Blog Post")
//! - [`is_landing`]: whether a stem designates its directory's landing page

use std::path::{Component, Path};

/// Stem that always marks a directory's landing document.
pub const INDEX_STEM: &str = "index";

/// Whether `path` has one of the given markdown extensions (case-insensitive).
///
/// Extensions are given without the leading dot.
pub fn is_markdown(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

/// File stem (base name without extension), lossily converted.
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Last path component as a display string.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Join the normal components of a relative path with `/`.
///
/// Used for directory keys such as `tutorial-basics/advanced`.
pub fn key_path(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical document identifier for a path relative to the content root.
///
/// The final extension is dropped and separators are normalized to `/`:
/// - `intro.md` → `intro`
/// - `tutorial-basics/create-a-document.mdx` → `tutorial-basics/create-a-document`
pub fn doc_id(rel: &Path) -> String {
    match rel.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            format!("{}/{}", key_path(parent), stem(rel))
        }
        _ => stem(rel),
    }
}

/// Whether a document stem designates the landing page of `dir_name`.
///
/// A landing document is named `index` or carries its directory's name.
pub fn is_landing(stem: &str, dir_name: &str) -> bool {
    stem == INDEX_STEM || stem == dir_name
}

/// Convert a stem to a display title.
///
/// Dashes and underscores become spaces, and the first character of every
/// word is upper-cased. Word characters are ASCII letters, digits and `_`; the
/// rest of each word is left untouched.
///
/// - `"create-a-blog_post"` → "Create A Blog Post"
/// - `"tutorial-basics"` → "Tutorial Basics"
/// - `"API-v2"` → "API V2"
pub fn title_case(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut in_word = false;
    for c in stem.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }
    out
}
