//! Category navigation fragment rendering.
//!
//! Renders the link list for one category from the generated index, the way
//! the site's category page shows it:
//!
//! ```html
//! <div>
//!   <ul class="navList">
//!     <li class="navItem"><a href="/docs/tutorial-basics/create-a-page">Create a Page</a></li>
//!   </ul>
//!   <div>
//!     <h3><a href="/docs/tutorial-basics/advanced/index">Advanced Topics</a></h3>
//!     <ul class="navList">...</ul>
//!   </div>
//! </div>
//! ```
//!
//! Subcategories without a landing document get a plain
//! `span.subcategoryLabel` heading instead of a link. An unknown category, or
//! one with no pages and no subcategories, renders the empty-state message.
//!
//! Uses [maud](https://maud.lambda.xyz/), so all interpolated titles and ids
//! are escaped.

use crate::types::{CategoryData, NavData, PageData};
use maud::{Markup, html};

/// Shown when a category is unknown or has nothing to link to.
pub const EMPTY_MESSAGE: &str = "No documents found in this category.";

/// Render the navigation fragment for `category` out of `nav`.
pub fn render_category_nav(nav: &NavData, category: &str, base_url: &str) -> Markup {
    match nav.get(category) {
        Some(data) => render_category(data, base_url),
        None => render_empty(),
    }
}

fn render_empty() -> Markup {
    html! {
        p.empty { (EMPTY_MESSAGE) }
    }
}

fn render_category(data: &CategoryData, base_url: &str) -> Markup {
    html! {
        div {
            (render_page_list(&data.pages, base_url))
            @for sub in &data.subcategories {
                div {
                    h3 {
                        @if sub.has_index {
                            a href={ (base_url) (sub.doc_id) } { (sub.title) }
                        } @else {
                            span.subcategoryLabel { (sub.title) }
                        }
                    }
                    (render_page_list(&sub.pages, base_url))
                }
            }
            @if data.is_empty() {
                (render_empty())
            }
        }
    }
}

fn render_page_list(pages: &[PageData], base_url: &str) -> Markup {
    html! {
        @if !pages.is_empty() {
            ul.navList {
                @for page in pages {
                    li.navItem {
                        a href={ (base_url) (page.doc_id) } { (page.title) }
                    }
                }
            }
        }
    }
}
