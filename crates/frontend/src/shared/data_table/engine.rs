//! Table engine: sorting, filtering, pagination, selection, column visibility
//! and cosmetic row reordering over a local copy of the server list.
//!
//! The engine never talks to the network. Its row list is a disposable mirror
//! of whatever the page fetched last; [`TableState::reconcile`] replaces it
//! wholesale whenever a new list arrives.

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};
use contracts::domain::common::Identified;
use std::collections::HashSet;

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

#[derive(Clone, Debug)]
pub struct TableState<T> {
    /// Local mirror in display order (server order unless reordered by drag)
    rows: Vec<T>,
    sort: Option<SortState>,
    filter: String,
    page_index: usize,
    page_size: usize,
    selected: HashSet<String>,
    hidden_columns: HashSet<String>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            filter: String::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            selected: HashSet::new(),
            hidden_columns: HashSet::new(),
        }
    }
}

impl<T> TableState<T>
where
    T: Identified + Sortable + Searchable + Clone,
{
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    // ------------------------------------------------------------------
    // Reconciliation
    // ------------------------------------------------------------------

    /// Replaces the local rows with a freshly fetched server list.
    ///
    /// The server order always wins: any drag reorder is dropped. Selection
    /// keeps only ids that still exist and the page index is clamped.
    /// Sort, filter, page size and hidden columns survive.
    pub fn reconcile(&mut self, server_rows: Vec<T>) {
        let ids: HashSet<&str> = server_rows.iter().map(|r| r.id()).collect();
        self.selected.retain(|id| ids.contains(id.as_str()));
        self.rows = server_rows;
        self.clamp_page();
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.id().to_string()).collect()
    }

    // ------------------------------------------------------------------
    // Sorting & filtering
    // ------------------------------------------------------------------

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Current sort as `(field, ascending)` for header indicators
    pub fn sort_key(&self) -> Option<(&str, bool)> {
        self.sort.as_ref().map(|s| (s.field.as_str(), s.ascending))
    }

    /// Cycles a column through ascending → descending → unsorted
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(s) if s.field == field && s.ascending => Some(SortState {
                field: s.field,
                ascending: false,
            }),
            Some(s) if s.field == field => None,
            _ => Some(SortState {
                field: field.to_string(),
                ascending: true,
            }),
        };
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_index = 0;
    }

    fn filtered_sorted(&self) -> Vec<T> {
        let mut data = filter_list(self.rows.clone(), &self.filter);
        if let Some(sort) = &self.sort {
            sort_list(&mut data, &sort.field, sort.ascending);
        }
        data
    }

    pub fn filtered_count(&self) -> usize {
        let filter = self.filter.trim();
        if filter.is_empty() {
            return self.rows.len();
        }
        self.rows
            .iter()
            .filter(|r| r.matches_filter(filter))
            .count()
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(filtered rows / page size)`; zero when there are no rows
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size)
    }

    /// Only sizes from [`PAGE_SIZE_OPTIONS`] are accepted
    pub fn set_page_size(&mut self, size: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return;
        }
        self.page_size = size;
        self.page_index = 0;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page_index = page;
        self.clamp_page();
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    pub fn previous_page(&mut self) {
        if self.can_previous() {
            self.page_index -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_next() {
            self.page_index += 1;
        }
    }

    pub fn last_page(&mut self) {
        self.page_index = self.page_count().saturating_sub(1);
    }

    fn clamp_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
        }
    }

    /// Rows of the current page after filter and sort
    pub fn page_rows(&self) -> Vec<T> {
        let data = self.filtered_sorted();
        data.into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle_row(&mut self, id: &str, checked: bool) {
        if checked {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// Selects or clears every row on the current page
    pub fn toggle_page(&mut self, checked: bool) {
        for row in self.page_rows() {
            self.toggle_row(row.id(), checked);
        }
    }

    pub fn is_page_selected(&self) -> bool {
        let page = self.page_rows();
        !page.is_empty() && page.iter().all(|r| self.selected.contains(r.id()))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    // ------------------------------------------------------------------
    // Column visibility
    // ------------------------------------------------------------------

    pub fn is_column_visible(&self, key: &str) -> bool {
        !self.hidden_columns.contains(key)
    }

    pub fn toggle_column(&mut self, key: &str) {
        if !self.hidden_columns.remove(key) {
            self.hidden_columns.insert(key.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Cosmetic reorder
    // ------------------------------------------------------------------

    /// Moves the row `active_id` to the position currently held by `over_id`.
    ///
    /// Only the local mirror changes; nothing is sent to the server and the
    /// next [`TableState::reconcile`] restores the server order.
    pub fn move_row(&mut self, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id {
            return false;
        }
        let ids = self.row_ids();
        let old_index = ids.iter().position(|id| id == active_id);
        let new_index = ids.iter().position(|id| id == over_id);
        match (old_index, new_index) {
            (Some(from), Some(to)) => {
                array_move(&mut self.rows, from, to);
                true
            }
            _ => false,
        }
    }
}

/// Removes the element at `from` and inserts it at `to`
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{compare_number, compare_text, contains_ignore_case};
    use std::cmp::Ordering;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: String,
        name: String,
        qty: f64,
    }

    impl Identified for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => compare_number(self.qty, other.qty),
                _ => compare_text(&self.name, &other.name),
            }
        }
    }

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(&self.name, filter)
        }
    }

    fn items(n: usize) -> Vec<Item> {
        (1..=n)
            .map(|i| Item {
                id: i.to_string(),
                name: format!("item {i:02}"),
                qty: (n - i) as f64,
            })
            .collect()
    }

    fn ids(rows: &[Item]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_page_rows_capped_by_page_size() {
        for (n, size) in [(0, 10), (3, 10), (10, 10), (25, 10), (25, 20), (51, 50)] {
            let mut state = TableState::new(items(n));
            state.set_page_size(size);
            assert_eq!(state.page_rows().len(), n.min(size), "n={n} size={size}");
            assert_eq!(state.page_count(), n.div_ceil(size), "n={n} size={size}");
        }
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let mut state = TableState::new(items(25));
        state.last_page();
        assert_eq!(state.page_index(), 2);
        assert_eq!(ids(&state.page_rows()), vec!["21", "22", "23", "24", "25"]);
        assert!(!state.can_next());
        assert!(state.can_previous());
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut state = TableState::new(items(15));
        assert!(!state.can_previous());
        state.previous_page();
        assert_eq!(state.page_index(), 0);

        state.next_page();
        state.next_page();
        assert_eq!(state.page_index(), 1);

        state.go_to_page(99);
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn test_empty_table_has_no_pages() {
        let state: TableState<Item> = TableState::new(Vec::new());
        assert_eq!(state.page_count(), 0);
        assert!(!state.can_next());
        assert!(!state.can_previous());
        assert!(state.page_rows().is_empty());
    }

    #[test]
    fn test_page_size_only_accepts_options() {
        let mut state = TableState::new(items(30));
        state.next_page();
        state.set_page_size(25);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(state.page_index(), 1);

        state.set_page_size(20);
        assert_eq!(state.page_size(), 20);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_toggle_sort_cycles() {
        let mut state = TableState::new(items(3));
        state.toggle_sort("qty");
        assert_eq!(ids(&state.page_rows()), vec!["3", "2", "1"]);

        state.toggle_sort("qty");
        assert_eq!(state.sort_key(), Some(("qty", false)));
        assert_eq!(ids(&state.page_rows()), vec!["1", "2", "3"]);

        state.toggle_sort("qty");
        assert_eq!(state.sort(), None);
        assert_eq!(ids(&state.page_rows()), vec!["1", "2", "3"]);

        state.toggle_sort("qty");
        state.toggle_sort("name");
        assert_eq!(state.sort_key(), Some(("name", true)));
    }

    #[test]
    fn test_filter_resets_page_and_counts() {
        let mut state = TableState::new(items(25));
        state.next_page();
        state.set_filter("item 1");
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.filtered_count(), 10);
        assert_eq!(state.page_count(), 1);

        state.set_filter("ITEM 2");
        assert_eq!(state.filtered_count(), 6);
    }

    #[test]
    fn test_move_row_by_id() {
        let mut state = TableState::new(items(4));
        assert!(state.move_row("1", "3"));
        assert_eq!(ids(state.rows()), vec!["2", "3", "1", "4"]);

        assert!(state.move_row("4", "2"));
        assert_eq!(ids(state.rows()), vec!["4", "2", "3", "1"]);

        assert!(!state.move_row("4", "4"));
        assert!(!state.move_row("missing", "2"));
        assert_eq!(ids(state.rows()), vec!["4", "2", "3", "1"]);
    }

    #[test]
    fn test_reorder_reverts_on_reconcile() {
        let server = items(3);
        let mut state = TableState::new(server.clone());
        state.move_row("3", "1");
        assert_eq!(ids(state.rows()), vec!["3", "1", "2"]);

        state.reconcile(server);
        assert_eq!(ids(state.rows()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_reconcile_prunes_selection_and_clamps_page() {
        let mut state = TableState::new(items(25));
        state.toggle_row("2", true);
        state.toggle_row("24", true);
        state.last_page();
        state.toggle_sort("name");
        state.toggle_column("qty");

        state.reconcile(items(12));
        assert_eq!(state.selected_count(), 1);
        assert!(state.is_selected("2"));
        assert_eq!(state.page_index(), 1);
        assert_eq!(state.sort_key(), Some(("name", true)));
        assert!(!state.is_column_visible("qty"));
    }

    #[test]
    fn test_toggle_page_selection() {
        let mut state = TableState::new(items(15));
        state.toggle_page(true);
        assert_eq!(state.selected_count(), 10);
        assert!(state.is_page_selected());

        state.next_page();
        assert!(!state.is_page_selected());
        state.toggle_page(true);
        assert_eq!(state.selected_count(), 15);

        state.toggle_page(false);
        assert_eq!(state.selected_count(), 10);
    }

    #[test]
    fn test_toggle_column() {
        let mut state = TableState::new(items(1));
        assert!(state.is_column_visible("code"));
        state.toggle_column("code");
        assert!(!state.is_column_visible("code"));
        state.toggle_column("code");
        assert!(state.is_column_visible("code"));
    }

    #[test]
    fn test_array_move_ignores_out_of_range() {
        let mut v = vec![1, 2, 3];
        array_move(&mut v, 0, 5);
        assert_eq!(v, vec![1, 2, 3]);
        array_move(&mut v, 2, 0);
        assert_eq!(v, vec![3, 1, 2]);
    }
}
