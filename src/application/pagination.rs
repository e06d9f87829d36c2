//! Client-side search and page math over the canonical list.

use std::num::NonZeroUsize;

use crate::domain::entities::CollectionItem;

/// Page sizes offered by the list toolbar.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 7, 10, 15, 25];
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(6);
/// Number of numbered page buttons shown at once.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Search term, page size and requested page of a list.
///
/// Changing the term or the page size sends the list back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search_term: String::new(),
            page_size,
            current_page: 1,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.reset_page();
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.reset_page();
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Move to page `page`; ignored when outside `[1, total_pages]`.
    pub fn goto_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages {
            return false;
        }
        self.current_page = page;
        true
    }
}

/// One rendered page of the filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub items: Vec<&'a T>,
    pub total_items: usize,
    pub total_pages: usize,
    /// Requested page after clamping into `[1, total_pages]`.
    pub page: usize,
}

impl<T> PageView<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn window(&self, window_size: usize) -> Vec<usize> {
        page_window(self.page, self.total_pages, window_size)
    }
}

pub fn normalize_search(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive substring match against id, name and creation date.
/// `normalized` must already be lowercased and trimmed; empty matches all.
pub fn matches_search<T: CollectionItem>(record: &T, normalized: &str) -> bool {
    if normalized.is_empty() {
        return true;
    }
    record.id().to_string().to_lowercase().contains(normalized)
        || record.name().to_lowercase().contains(normalized)
        || record
            .created_at()
            .unwrap_or_default()
            .to_lowercase()
            .contains(normalized)
}

/// Filter `list` by `search_term` and cut out page `current_page`.
///
/// Pure: the same inputs always give the same view.
pub fn compute_view<'a, T: CollectionItem>(
    list: &'a [T],
    search_term: &str,
    page_size: NonZeroUsize,
    current_page: usize,
) -> PageView<'a, T> {
    let normalized = normalize_search(search_term);
    let filtered: Vec<&'a T> = list
        .iter()
        .filter(|record| matches_search(*record, &normalized))
        .collect();

    let size = page_size.get();
    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(size).max(1);
    let page = current_page.clamp(1, total_pages);

    let start = (page - 1) * size;
    let items = filtered.into_iter().skip(start).take(size).collect();

    PageView {
        items,
        total_items,
        total_pages,
        page,
    }
}

/// Up to `window_size` consecutive page numbers around `current_page`,
/// shifted inward near either end instead of running past `total_pages`.
pub fn page_window(current_page: usize, total_pages: usize, window_size: usize) -> Vec<usize> {
    if window_size == 0 || total_pages == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);
    let mut start = current.saturating_sub(window_size / 2).max(1);
    let mut end = start.saturating_add(window_size - 1);
    if end > total_pages {
        end = total_pages;
        start = end.saturating_sub(window_size - 1).max(1);
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryRecord, RecordId};

    fn category(id: i64, name: &str, created_at: Option<&str>) -> CategoryRecord {
        CategoryRecord {
            id: RecordId::Number(id),
            name: name.into(),
            created_at: created_at.map(str::to_string),
        }
    }

    fn eight_categories() -> Vec<CategoryRecord> {
        [
            "Tech", "Sports", "Health", "Travel", "Food", "Music", "Science", "Art",
        ]
        .iter()
        .zip(1..)
        .map(|(name, id)| category(id, name, Some("2024-05-01")))
        .collect()
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero")
    }

    #[test]
    fn eight_records_split_five_and_three() {
        let list = eight_categories();
        let first = compute_view(&list, "", size(5), 1);
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_items, 8);

        let second = compute_view(&list, "", size(5), 2);
        assert_eq!(second.items.len(), 3);
        assert_eq!(second.items[0].name, "Music");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let list = vec![category(1, "Technology", None), category(2, "Sports", None)];
        let view = compute_view(&list, "  tech ", size(7), 1);
        assert_eq!(view.total_items, 1);
        assert_eq!(view.items[0].name, "Technology");
    }

    #[test]
    fn search_covers_id_and_date_with_missing_fields() {
        let list = vec![
            category(41, "", None),
            category(2, "Sports", Some("2023-12-31")),
        ];
        assert_eq!(compute_view(&list, "41", size(7), 1).total_items, 1);
        assert_eq!(compute_view(&list, "2023-12", size(7), 1).total_items, 1);
        assert_eq!(compute_view(&list, "nothing", size(7), 1).total_items, 0);
    }

    #[test]
    fn filtered_items_keep_list_order() {
        let list = vec![
            category(1, "Rust async", None),
            category(2, "Go", None),
            category(3, "Rust macros", None),
        ];
        let view = compute_view(&list, "rust", size(7), 1);
        let ids: Vec<_> = view.items.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::Number(1), RecordId::Number(3)]);
    }

    #[test]
    fn empty_list_has_one_page() {
        let list: Vec<CategoryRecord> = Vec::new();
        let view = compute_view(&list, "", size(5), 3);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.items.is_empty());
        assert!(!view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn requested_page_is_clamped() {
        let list = eight_categories();
        assert_eq!(compute_view(&list, "", size(5), 9).page, 2);
        assert_eq!(compute_view(&list, "", size(5), 0).page, 1);
    }

    #[test]
    fn compute_view_is_deterministic() {
        let list = eight_categories();
        let a = compute_view(&list, "a", size(3), 2);
        let b = compute_view(&list, "a", size(3), 2);
        assert_eq!(a, b);
    }

    #[test]
    fn page_window_shifts_near_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert!(page_window(1, 4, 0).is_empty());
    }

    #[test]
    fn huge_window_covers_every_page() {
        assert_eq!(page_window(3, 4, usize::MAX), vec![1, 2, 3, 4]);
        assert_eq!(page_window(usize::MAX, 2, usize::MAX - 1), vec![1, 2]);
    }

    #[test]
    fn view_state_resets_page_on_filter_changes() {
        let mut state = ViewState::new(size(5));
        assert!(state.goto_page(2, 2));
        state.set_search_term("tech");
        assert_eq!(state.current_page(), 1);

        assert!(state.goto_page(2, 2));
        state.set_page_size(size(10));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn goto_page_ignores_out_of_range() {
        let mut state = ViewState::default();
        assert!(!state.goto_page(0, 3));
        assert!(!state.goto_page(4, 3));
        assert_eq!(state.current_page(), 1);
        assert!(state.goto_page(3, 3));
        assert_eq!(state.current_page(), 3);
    }
}
