//! PageFrame: root wrapper for every page rendered in the content area.
//!
//! Sets `id` (`"{section}--{category}"`) and `data-page-category` on the
//! root element, plus the page title header.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{section}--{category}`, e.g. `"nomina--dashboard"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    title: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);
    debug_assert!(is_known_category(category), "unknown page category: {}", category);

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DOCUMENTS => "page page--documents",
        _ => "page",
    };
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}
