//! Content tree traversal.
//!
//! A single walker feeds both output builders. It descends the content root
//! in file-name order, skips reserved directories entirely, and groups
//! markdown files under the directory that contains them:
//!
//! ```text
//! docs/                       depth 0  (root)
//! ├── intro.md                depth 1  root-level document
//! ├── tutorial-basics/        depth 1  category
//! │   ├── _category_.json              (not markdown, never collected)
//! │   ├── create-a-page.md    depth 2
//! │   ├── img/                         (reserved, skipped with its contents)
//! │   └── advanced/           depth 2  subcategory
//! │       └── deploy.md       depth 3
//! ```
//!
//! The hierarchical index only needs two directory levels, so it walks with a
//! bounded depth; the flat title map walks everything.
//!
//! Symlinks are followed, so a linked directory is a category like any other.
//! A link that points back at one of its ancestors is a walk error.

use crate::naming;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory in the walked tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DirNode {
    /// Directory name (empty for the root).
    pub name: String,
    /// Path relative to the content root (empty for the root).
    pub rel_path: PathBuf,
    /// Absolute (or caller-relative) path on disk.
    pub path: PathBuf,
    /// Markdown files directly inside this directory, in file-name order.
    pub files: Vec<DocFile>,
    /// Non-reserved subdirectories, in file-name order.
    pub dirs: Vec<DirNode>,
}

/// A markdown file discovered by the walker.
#[derive(Debug, Clone, PartialEq)]
pub struct DocFile {
    pub path: PathBuf,
    pub rel_path: PathBuf,
}

impl DocFile {
    pub fn stem(&self) -> String {
        naming::stem(&self.path)
    }

    /// Canonical identifier, shared by every output.
    pub fn doc_id(&self) -> String {
        naming::doc_id(&self.rel_path)
    }
}

impl DirNode {
    fn new(path: PathBuf, rel_path: PathBuf) -> Self {
        Self {
            name: naming::file_name(&rel_path),
            rel_path,
            path,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Key path of this directory relative to the root (`cat/sub`).
    pub fn key(&self) -> String {
        naming::key_path(&self.rel_path)
    }

    /// Every markdown file in this subtree, depth-first in file-name order.
    pub fn all_files(&self) -> Vec<&DocFile> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a DocFile>) {
        out.extend(self.files.iter());
        for dir in &self.dirs {
            dir.collect_files(out);
        }
    }
}

/// Walker settings.
#[derive(Debug, Clone)]
pub struct Walker<'a> {
    /// Directory names never descended into.
    pub reserved_dirs: &'a [String],
    /// Markdown extensions, without the leading dot.
    pub extensions: &'a [String],
    /// Directory levels below the root to discover; `None` for unbounded.
    pub max_levels: Option<usize>,
}

impl Walker<'_> {
    /// Walk `root` into a [`DirNode`] tree.
    ///
    /// With `max_levels = Some(n)`, directories are discovered down to depth
    /// `n` and their files are collected; anything deeper is not visited.
    pub fn walk(&self, root: &Path) -> Result<DirNode, walkdir::Error> {
        let mut walk = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        if let Some(levels) = self.max_levels {
            walk = walk.max_depth(levels + 1);
        }

        // Pre-order traversal: the stack holds the current directory chain,
        // so the parent of an entry at depth d sits at index d - 1.
        let mut stack = vec![DirNode::new(root.to_path_buf(), PathBuf::new())];

        let entries = walk
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && self.is_reserved(e.file_name())));

        for entry in entries {
            let entry = entry?;
            let depth = entry.depth();
            while stack.len() > depth {
                fold_top(&mut stack);
            }

            let rel_path = match entry.path().strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };

            if entry.file_type().is_dir() {
                let is_leaf_level = self.max_levels.is_some_and(|levels| depth > levels);
                if !is_leaf_level {
                    stack.push(DirNode::new(entry.path().to_path_buf(), rel_path));
                }
            } else if entry.file_type().is_file() && naming::is_markdown(entry.path(), self.extensions)
            {
                if let Some(parent) = stack.last_mut() {
                    parent.files.push(DocFile {
                        path: entry.path().to_path_buf(),
                        rel_path,
                    });
                }
            }
        }

        while stack.len() > 1 {
            fold_top(&mut stack);
        }
        Ok(stack.pop().unwrap_or_else(|| DirNode::new(root.to_path_buf(), PathBuf::new())))
    }

    fn is_reserved(&self, name: &std::ffi::OsStr) -> bool {
        let name = name.to_string_lossy();
        self.reserved_dirs.iter().any(|r| *r == name)
    }
}

/// Pop the innermost directory and attach it to its parent.
fn fold_top(stack: &mut Vec<DirNode>) {
    if let Some(done) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.dirs.push(done);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn build_tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("intro.md"), "# Intro").unwrap();
        fs::create_dir_all(root.join("guides/advanced/deeper")).unwrap();
        fs::create_dir_all(root.join("guides/img")).unwrap();
        fs::create_dir_all(root.join("img")).unwrap();
        fs::write(root.join("guides/b.md"), "").unwrap();
        fs::write(root.join("guides/a.mdx"), "").unwrap();
        fs::write(root.join("guides/_category_.json"), "{}").unwrap();
        fs::write(root.join("guides/img/shot.md"), "").unwrap();
        fs::write(root.join("guides/advanced/deploy.md"), "").unwrap();
        fs::write(root.join("guides/advanced/deeper/nested.md"), "").unwrap();
        fs::write(root.join("img/logo.md"), "").unwrap();
        tmp
    }

    fn walk(root: &Path, max_levels: Option<usize>) -> DirNode {
        let reserved = strings(&["img", "node_modules"]);
        let extensions = strings(&["md", "mdx"]);
        Walker {
            reserved_dirs: &reserved,
            extensions: &extensions,
            max_levels,
        }
        .walk(root)
        .unwrap()
    }

    fn ids(files: &[&DocFile]) -> Vec<String> {
        files.iter().map(|f| f.doc_id()).collect()
    }

    #[test]
    fn unbounded_walk_finds_every_document() {
        let tmp = build_tree();
        let tree = walk(tmp.path(), None);
        assert_eq!(
            ids(&tree.all_files()),
            vec![
                "intro",
                "guides/a",
                "guides/b",
                "guides/advanced/deploy",
                "guides/advanced/deeper/nested",
            ]
        );
    }

    #[test]
    fn reserved_directories_are_skipped() {
        let tmp = build_tree();
        let tree = walk(tmp.path(), None);
        let names: Vec<&str> = tree.dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["guides"]);
        let guide_dirs: Vec<&str> = tree.dirs[0].dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(guide_dirs, vec!["advanced"]);
    }

    #[test]
    fn bounded_walk_stops_at_two_levels() {
        let tmp = build_tree();
        let tree = walk(tmp.path(), Some(2));
        assert_eq!(
            ids(&tree.all_files()),
            vec!["intro", "guides/a", "guides/b", "guides/advanced/deploy"]
        );
        let advanced = &tree.dirs[0].dirs[0];
        assert_eq!(advanced.key(), "guides/advanced");
        assert!(advanced.dirs.is_empty());
    }

    #[test]
    fn files_keep_file_name_order() {
        let tmp = build_tree();
        let tree = walk(tmp.path(), Some(2));
        let stems: Vec<String> = tree.dirs[0].files.iter().map(|f| f.stem()).collect();
        assert_eq!(stems, vec!["a", "b"]);
    }

    #[test]
    fn missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let reserved = strings(&[]);
        let extensions = strings(&["md"]);
        let walker = Walker {
            reserved_dirs: &reserved,
            extensions: &extensions,
            max_levels: None,
        };
        assert!(walker.walk(&tmp.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_walked() {
        let tmp = build_tree();
        let shared = TempDir::new().unwrap();
        fs::write(shared.path().join("faq.md"), "# FAQ").unwrap();
        std::os::unix::fs::symlink(shared.path(), tmp.path().join("shared")).unwrap();

        let tree = walk(tmp.path(), Some(2));
        let names: Vec<&str> = tree.dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["guides", "shared"]);
        assert_eq!(ids(&tree.dirs[1].files.iter().collect::<Vec<_>>()), vec!["shared/faq"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_error() {
        let tmp = build_tree();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("guides/loop")).unwrap();
        let reserved = strings(&[]);
        let extensions = strings(&["md"]);
        let walker = Walker {
            reserved_dirs: &reserved,
            extensions: &extensions,
            max_levels: None,
        };
        assert!(walker.walk(tmp.path()).is_err());
    }
}
