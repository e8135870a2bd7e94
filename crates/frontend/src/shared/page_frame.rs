//! Root wrapper for every routed page.
//!
//! Sets `id` to `"{entity}--{category}"` (e.g. `"a001_raw_material--list"`)
//! and `data-page-category` on the root element.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_REPORT: &str = "report";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
