//! Sorting helpers for the admin tables.

use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive text comparison
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Sortable table header cell with a ▲/▼ indicator
#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    sort_field: &'static str,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), sort_field)>
                    {move || get_sort_indicator(&current_sort_field.get(), sort_field, sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => cmp_text(self.0, other.0),
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("beta", 2), Row("Alfa", 3), Row("gama", 1)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0], Row("Alfa", 3));

        sort_list(&mut rows, "n", false);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("nombre", "nombre", true), " ▲");
        assert_eq!(get_sort_indicator("nombre", "nombre", false), " ▼");
        assert_eq!(get_sort_indicator("id", "nombre", true), " ⇅");
        assert_eq!(get_sort_class("id", "id"), "sort-icon active");
    }
}
