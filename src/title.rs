//! Document title resolution.
//!
//! A title can come from several places. Sources are tried in the order of a
//! [`TitleChain`] and the first one that yields text wins:
//!
//! - **title**: frontmatter `title`
//! - **sidebar_label**: frontmatter `sidebar_label`
//! - **heading**: first `# heading` in the body, `*` emphasis stripped
//! - **filename**: the file stem via [`naming::title_case`]
//!
//! The filename source never fails, and it is tried last even when a chain
//! does not list it, so resolution always produces a title.
//!
//! The two outputs use different default chains: the navigation index skips
//! `sidebar_label` so link text matches the page's own title, while the flat
//! title map prefers the label over the heading.

use crate::frontmatter::Header;
use crate::naming;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One place a title may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    Title,
    SidebarLabel,
    Heading,
    Filename,
}

impl fmt::Display for TitleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TitleSource::Title => "title",
            TitleSource::SidebarLabel => "sidebar_label",
            TitleSource::Heading => "heading",
            TitleSource::Filename => "filename",
        };
        f.write_str(name)
    }
}

/// Ordered list of title sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleChain(pub Vec<TitleSource>);

impl TitleChain {
    /// Chain used for the hierarchical navigation index.
    pub fn category_nav() -> Self {
        Self(vec![TitleSource::Title, TitleSource::Heading])
    }

    /// Chain used for the flat document title map.
    pub fn doc_titles() -> Self {
        Self(vec![
            TitleSource::Title,
            TitleSource::SidebarLabel,
            TitleSource::Heading,
        ])
    }

    pub fn sources(&self) -> &[TitleSource] {
        &self.0
    }
}

/// A title and the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub title: String,
    pub source: TitleSource,
}

/// Resolve a document title from its parsed header, body and file stem.
pub fn resolve(chain: &TitleChain, header: &Header, body: &str, stem: &str) -> Resolved {
    for &source in chain.sources() {
        let found = match source {
            TitleSource::Title => header.title(),
            TitleSource::SidebarLabel => header.sidebar_label(),
            TitleSource::Heading => first_heading(body),
            TitleSource::Filename => Some(naming::title_case(stem)),
        };
        if let Some(title) = found {
            return Resolved { title, source };
        }
    }
    Resolved {
        title: naming::title_case(stem),
        source: TitleSource::Filename,
    }
}

/// Text of the first top-level ATX heading anywhere in the body.
///
/// Code fences are not tracked, so a `# comment` line inside a shell block
/// counts like any other heading line.
///
/// Returns `None` when there is no `# ` line, or the first one is empty once
/// emphasis markers and whitespace are removed.
pub fn first_heading(body: &str) -> Option<String> {
    for line in body.lines() {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        if !rest.starts_with([' ', '\t']) {
            continue;
        }
        let text = strip_emphasis(rest);
        let text = text.trim();
        return (!text.is_empty()).then(|| text.to_string());
    }
    None
}

/// Remove `*` emphasis markers (`**bold**`, `*italic*`).
fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}
