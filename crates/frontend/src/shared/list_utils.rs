/// Generic list helpers: search, sorting and header indicators
use std::cmp::Ordering;

/// Types that can be matched against a free-text filter
pub trait Searchable {
    /// Whether the record matches the (already trimmed, non-empty) query
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    /// Compares two records by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive lexical ordering
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Total numeric ordering (NaN sorts last)
pub fn compare_number(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Case-insensitive substring match
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sorts a list by the given field
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

/// Filters a list by a search query; a blank query keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current: Option<(&str, bool)>, field: &str) -> &'static str {
    match current {
        Some((current_field, ascending)) if current_field == field => {
            if ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// CSS class for the sort indicator
pub fn get_sort_class(current: Option<(&str, bool)>, field: &str) -> &'static str {
    match current {
        Some((current_field, _)) if current_field == field => "sort-icon active",
        _ => "sort-icon",
    }
}
