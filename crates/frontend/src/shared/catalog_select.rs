//! `<select>` bound to one of the id/label catalogs (roles, subregions, pages).

use leptos::prelude::*;

/// `(id, label)` pairs for a select
pub fn catalog_options<T>(items: Vec<T>, id: fn(&T) -> i32, label: fn(&T) -> &'static str) -> Vec<(i32, &'static str)> {
    items.iter().map(|item| (id(item), label(item))).collect()
}

/// Parses a select value; the placeholder option carries an empty string
pub fn parse_id(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

#[component]
pub fn CatalogSelect(
    id: &'static str,
    options: Vec<(i32, &'static str)>,
    value: RwSignal<String>,
    placeholder: &'static str,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="form-select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
            disabled=move || disabled.get()
        >
            <option value="">{placeholder}</option>
            {options.into_iter().map(|(option_id, label)| {
                let option_value = option_id.to_string();
                view! {
                    <option
                        value=option_value.clone()
                        selected=move || value.get() == option_value
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::Role;

    #[test]
    fn test_catalog_options() {
        let options = catalog_options(Role::all(), Role::id, Role::display_name);
        assert_eq!(options.first(), Some(&(1, "Administración")));
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3"), Some(3));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("x"), None);
    }
}
