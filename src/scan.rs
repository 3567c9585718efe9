//! Navigation index building.
//!
//! Turns the walked content tree into the two artifacts the site consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                              # Content root
//! ├── intro.md                       # Root document (title map only)
//! ├── tutorial-basics/               # Category
//! │   ├── _category_.json            # { "label": "Tutorial - Basics", "position": 2 }
//! │   ├── tutorial-basics.md         # Landing document (excluded from pages)
//! │   ├── create-a-page.md           # Page
//! │   ├── img/                       # Reserved, never scanned
//! │   └── advanced/                  # Subcategory
//! │       ├── _category_.json
//! │       ├── index.md               # Landing document → hasIndex, docId
//! │       ├── deploy.md              # Subcategory page
//! │       └── deeper/                # Not part of the navigation index
//! │           └── notes.md           # (still in the title map)
//! └── tutorial-extras/
//!     └── manage-versions.md
//! ```
//!
//! ## Output
//!
//! - [`NavIndex`]: category key → `{ pages, subcategories }`, two directory
//!   levels deep, every list in navigation order.
//! - [`TitleIndex`]: every document id at any depth → resolved title.
//!
//! Both come from one walker and one identifier function, so a document that
//! appears in both always has the same id.
//!
//! ## Validation
//!
//! - The content root must exist and be a directory
//! - Document ids must be unique (`guide.md` next to `guide.mdx` is an error)

use crate::config::NavConfig;
use crate::descriptor;
use crate::frontmatter;
use crate::naming;
use crate::ordering::{self, NavOrdered, Position};
use crate::title::{self, TitleChain, TitleSource};
use crate::walk::{DirNode, DocFile, Walker};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory levels below the content root covered by the navigation index.
pub const NAV_LEVELS: usize = 2;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("docs directory not found at {0}")]
    MissingRoot(PathBuf),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Duplicate document id {id}: {first} and {second}")]
    DuplicateDocId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// A resolved document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(rename = "docId")]
    pub doc_id: String,
    pub title: String,
    pub position: Option<Position>,
    /// Where the title came from.
    #[serde(skip)]
    pub title_source: TitleSource,
    /// Source path relative to the content root.
    #[serde(skip)]
    pub source: PathBuf,
}

/// A second-level directory inside a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub key: String,
    pub title: String,
    pub doc_id: String,
    pub has_index: bool,
    pub position: Option<Position>,
    pub pages: Vec<Document>,
}

/// A first-level directory under the content root.
///
/// Only `pages` and `subcategories` are serialized; the label and position
/// decide where the category appears in the index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    #[serde(skip)]
    pub key: String,
    #[serde(skip)]
    pub label: String,
    #[serde(skip)]
    pub position: Option<Position>,
    pub pages: Vec<Document>,
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.subcategories.is_empty()
    }
}

impl NavOrdered for Document {
    fn position(&self) -> Option<Position> {
        self.position
    }
    fn sort_title(&self) -> &str {
        &self.title
    }
}

impl NavOrdered for Subcategory {
    fn position(&self) -> Option<Position> {
        self.position
    }
    fn sort_title(&self) -> &str {
        &self.title
    }
}

impl NavOrdered for Category {
    fn position(&self) -> Option<Position> {
        self.position
    }
    fn sort_title(&self) -> &str {
        &self.label
    }
}

/// Hierarchical navigation index, categories in navigation order.
///
/// Serializes as a JSON object keyed by category key, preserving that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavIndex {
    pub categories: Vec<Category>,
}

impl NavIndex {
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }
}

impl Serialize for NavIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.key, category)?;
        }
        map.end()
    }
}

/// Flat document id → title map, keys in lexicographic order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TitleIndex(pub BTreeMap<String, String>);

impl TitleIndex {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, doc_id: &str) -> Option<&str> {
        self.0.get(doc_id).map(String::as_str)
    }
}

/// Both artifacts from a single walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub nav: NavIndex,
    pub titles: TitleIndex,
}

/// Walk the content root down to `max_levels` directory levels.
pub fn walk(root: &Path, config: &NavConfig, max_levels: Option<usize>) -> Result<DirNode, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    let walker = Walker {
        reserved_dirs: &config.reserved_dirs,
        extensions: &config.extensions,
        max_levels,
    };
    let tree = walker.walk(root)?;
    tracing::debug!(
        root = %root.display(),
        documents = tree.all_files().len(),
        "Walked content tree"
    );
    Ok(tree)
}

/// Build the hierarchical navigation index for `root`.
pub fn scan_nav(root: &Path, config: &NavConfig) -> Result<NavIndex, ScanError> {
    let tree = walk(root, config, Some(NAV_LEVELS))?;
    build_nav_index(&tree, config)
}

/// Build the flat document title map for `root`.
pub fn scan_titles(root: &Path, config: &NavConfig) -> Result<TitleIndex, ScanError> {
    let tree = walk(root, config, None)?;
    build_title_index(&tree, config)
}

/// Build both artifacts from one unbounded walk.
pub fn scan(root: &Path, config: &NavConfig) -> Result<Scan, ScanError> {
    let tree = walk(root, config, None)?;
    Ok(Scan {
        nav: build_nav_index(&tree, config)?,
        titles: build_title_index(&tree, config)?,
    })
}

/// Build the navigation index from a walked tree.
///
/// Only the first two directory levels are read; deeper directories in the
/// tree are ignored.
pub fn build_nav_index(tree: &DirNode, config: &NavConfig) -> Result<NavIndex, ScanError> {
    let chain = &config.titles.category_nav;
    let mut categories = Vec::with_capacity(tree.dirs.len());

    for dir in &tree.dirs {
        let meta = descriptor::read(&dir.path, &config.descriptor_file);
        let pages = build_pages(dir, chain)?;

        let mut subcategories = Vec::with_capacity(dir.dirs.len());
        for sub in &dir.dirs {
            subcategories.push(build_subcategory(sub, config)?);
        }
        ordering::sort_entries(&mut subcategories);

        tracing::debug!(
            category = %dir.name,
            pages = pages.len(),
            subcategories = subcategories.len(),
            "Built category"
        );
        categories.push(Category {
            key: dir.name.clone(),
            label: meta.label,
            position: meta.position,
            pages,
            subcategories,
        });
    }

    ordering::sort_entries(&mut categories);
    Ok(NavIndex { categories })
}

/// Build the flat title map from a walked tree, covering every depth.
pub fn build_title_index(tree: &DirNode, config: &NavConfig) -> Result<TitleIndex, ScanError> {
    let chain = &config.titles.doc_titles;
    let mut titles: BTreeMap<String, (String, &Path)> = BTreeMap::new();

    for file in tree.all_files() {
        let doc = read_document(file, chain)?;
        match titles.entry(doc.doc_id) {
            Entry::Occupied(existing) => {
                return Err(ScanError::DuplicateDocId {
                    id: existing.key().clone(),
                    first: existing.get().1.to_path_buf(),
                    second: file.rel_path.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert((doc.title, file.rel_path.as_path()));
            }
        }
    }

    Ok(TitleIndex(
        titles.into_iter().map(|(id, (title, _))| (id, title)).collect(),
    ))
}

fn build_subcategory(dir: &DirNode, config: &NavConfig) -> Result<Subcategory, ScanError> {
    let meta = descriptor::read(&dir.path, &config.descriptor_file);
    let landing = find_landing(dir);
    let doc_id = landing.map(DocFile::doc_id).unwrap_or_else(|| dir.key());

    Ok(Subcategory {
        key: dir.name.clone(),
        title: meta.label,
        doc_id,
        has_index: landing.is_some(),
        position: meta.position,
        pages: build_pages(dir, &config.titles.category_nav)?,
    })
}

/// Non-landing documents directly inside `dir`, in navigation order.
fn build_pages(dir: &DirNode, chain: &TitleChain) -> Result<Vec<Document>, ScanError> {
    let mut pages: Vec<Document> = Vec::with_capacity(dir.files.len());
    for file in &dir.files {
        if naming::is_landing(&file.stem(), &dir.name) {
            continue;
        }
        let doc = read_document(file, chain)?;
        if let Some(existing) = pages.iter().find(|p| p.doc_id == doc.doc_id) {
            return Err(ScanError::DuplicateDocId {
                id: doc.doc_id,
                first: existing.source.clone(),
                second: file.rel_path.clone(),
            });
        }
        pages.push(doc);
    }
    ordering::sort_entries(&mut pages);
    Ok(pages)
}

/// The landing document of `dir`: `index` first, then the directory's name.
fn find_landing(dir: &DirNode) -> Option<&DocFile> {
    dir.files
        .iter()
        .find(|f| f.stem() == naming::INDEX_STEM)
        .or_else(|| dir.files.iter().find(|f| f.stem() == dir.name))
}

/// Read and resolve a single document.
pub fn read_document(file: &DocFile, chain: &TitleChain) -> Result<Document, ScanError> {
    let content = fs::read_to_string(&file.path).map_err(|source| ScanError::Read {
        path: file.path.clone(),
        source,
    })?;
    Ok(resolve_document(file, &content, chain))
}

fn resolve_document(file: &DocFile, content: &str, chain: &TitleChain) -> Document {
    let parsed = frontmatter::parse(content);
    let resolved = title::resolve(chain, &parsed.header, parsed.body, &file.stem());
    Document {
        doc_id: file.doc_id(),
        title: resolved.title,
        position: parsed.header.sidebar_position(),
        title_source: resolved.source,
        source: file.rel_path.clone(),
    }
}
