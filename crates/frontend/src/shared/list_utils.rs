//! Shared helpers for the list pages (search, sort, header toggles).

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types whose rows can be matched against a search query.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types whose rows can be compared by a named field.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Keeps the rows matching `filter` (case handled by the impl).
/// A blank filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sorts in place by the named field.
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

/// Header suffix showing the sort state of a column.
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

/// Builds a click handler that toggles sorting on `field`: first click
/// sorts ascending, a second click on the same column flips direction.
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        total: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "total" => self.total.partial_cmp(&other.total).unwrap_or(Ordering::Equal),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Andina", total: 30.0 },
            Row { name: "Bogotá", total: 10.0 },
            Row { name: "Caribe", total: 20.0 },
        ]
    }

    #[test]
    fn filter_list_is_case_insensitive_and_blank_keeps_all() {
        assert_eq!(filter_list(rows(), "bogo").len(), 1);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn sort_list_respects_direction() {
        let mut items = rows();
        sort_list(&mut items, "total", false);
        assert_eq!(items[0].name, "Andina");
        sort_list(&mut items, "total", true);
        assert_eq!(items[0].name, "Bogotá");
    }

    #[test]
    fn sort_indicator_reflects_state() {
        assert_eq!(get_sort_indicator("total", "total", true), " ▲");
        assert_eq!(get_sort_indicator("total", "total", false), " ▼");
        assert_eq!(get_sort_indicator("total", "name", true), " ⇅");
    }
}
