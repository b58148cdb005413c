//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{section}--{category}` (e.g. `"indicadores--dashboard"`)
//!   - `data-page-category` with one of the constants below

/// Chart page with a filter bar.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Table of records with row actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Document links published for a section.
pub const PAGE_CAT_DOCUMENTS: &str = "documents";

/// Account and administration pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DOCUMENTS,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{section}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("nomina--dashboard"));
        assert!(!is_valid_page_id("nomina"));
        assert!(!is_valid_page_id("--dashboard"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_DOCUMENTS));
        assert!(!is_known_category("legacy"));
    }
}
