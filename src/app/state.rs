//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for filtering, ordering, selection management,
//! and UI view model generation. It serves as the single source of truth for
//! all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates the canonical data (the loaded catalog) from derived
//! state (the visible, filtered and ordered list). The catalog is never
//! reordered after load; `apply_view_filter` recomputes the visible list from
//! the catalog, the current query, and the current sort direction whenever
//! any of them changes. View models are computed on demand from state
//! snapshots.
//!
//! # State Components
//!
//! - **Catalog**: Loaded book records, `None` until the fetch resolves
//! - **Visible Books**: Derived subset after query filter and sort
//! - **Loading**: True from plugin load until the fetch settles successfully
//! - **Search Query**: Always stored lowercase
//! - **Sort**: Explicit direction, unset until a sort control is activated
//! - **Fetch Phase**: Where the single catalog fetch stands

use crate::app::modes::{InputMode, SearchFocus, SortDirection};
use crate::domain::Book;
use crate::fetch::FetchPhase;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, LoadingInfo, SearchBarInfo, UIViewModel,
};

/// Central application state container.
///
/// Holds all transient UI state including the loaded catalog, the derived
/// visible list, query and sort settings, and mode information. Mutated by
/// the event handler in response to user input and host events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded book catalog, `None` until the fetch resolves.
    ///
    /// Canonical data in arrival order. Never reordered or filtered in place;
    /// all display concerns are derived into `visible_books`.
    pub books: Option<Vec<Book>>,

    /// Books matching the current query, in the current sort order.
    ///
    /// Recomputed by `apply_view_filter()` after any change to the catalog,
    /// the query, or the sort direction. Used for rendering and selection
    /// bounds checking. Empty while the catalog is absent.
    pub visible_books: Vec<Book>,

    /// True from plugin load until the fetch settles successfully.
    ///
    /// A failed fetch never clears this flag; the loading indicator stays up
    /// as the terminal state of the failure policy.
    pub loading: bool,

    /// Current search query.
    ///
    /// Always stored lowercase so matching never re-lowercases the query at
    /// read time. Mutated only through `push_search_char` and
    /// `pop_search_char`.
    pub search_query: String,

    /// Requested ordering of the visible list.
    ///
    /// `None` until a sort control is first activated, which shows the
    /// catalog in arrival order. Each control sets its own direction
    /// explicitly.
    pub sort: Option<SortDirection>,

    /// Where the single catalog fetch currently stands.
    pub fetch: FetchPhase,

    /// Zero-based index of the selected book within `visible_books`.
    ///
    /// Clamped to valid bounds by `apply_view_filter()`. Wraps around during
    /// navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with the given theme.
    ///
    /// The catalog starts absent and `loading` starts true: the loading
    /// indicator is visible from the very first render until the fetch
    /// settles.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            books: None,
            visible_books: vec![],
            loading: true,
            search_query: String::new(),
            sort: None,
            fetch: FetchPhase::Idle,
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// Moves selection down by one position, wrapping to the top at the end.
    ///
    /// No-op if the visible list is empty.
    pub fn move_selection_down(&mut self) {
        if self.visible_books.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible_books.len();
    }

    /// Moves selection up by one position, wrapping to the bottom at the top.
    ///
    /// No-op if the visible list is empty.
    pub fn move_selection_up(&mut self) {
        if self.visible_books.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible_books.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Appends a character to the search query, lowercased.
    ///
    /// Maintains the invariant that the stored query is always lowercase;
    /// matching lowercases only the candidate fields.
    pub fn push_search_char(&mut self, c: char) {
        for lowered in c.to_lowercase() {
            self.search_query.push(lowered);
        }
    }

    /// Removes the last character from the search query.
    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }

    /// Recomputes the visible book list from the canonical catalog.
    ///
    /// A book is visible iff the current (lowercase) query is a substring of
    /// its lowercased title OR its lowercased author; the empty query matches
    /// everything. Visible books are then stably ordered by publication year
    /// according to the current sort direction, or left in arrival order when
    /// no direction has been chosen yet. Ties keep their filtered order.
    ///
    /// While the catalog is absent the visible list is empty; rendering an
    /// absent catalog is never an error.
    ///
    /// Updates `visible_books` and clamps `selected_index` to valid bounds.
    pub fn apply_view_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_view_filter",
            query_len = self.search_query.len(),
            sort = ?self.sort
        )
        .entered();

        let Some(books) = &self.books else {
            self.visible_books.clear();
            self.selected_index = 0;
            return;
        };

        let mut visible: Vec<Book> = books
            .iter()
            .filter(|book| {
                self.search_query.is_empty()
                    || book.title.to_lowercase().contains(&self.search_query)
                    || book.author.to_lowercase().contains(&self.search_query)
            })
            .cloned()
            .collect();

        match self.sort {
            Some(SortDirection::Ascending) => visible.sort_by_key(|book| book.publication_year),
            Some(SortDirection::Descending) => {
                visible.sort_by_key(|book| std::cmp::Reverse(book.publication_year));
            }
            None => {}
        }

        self.visible_books = visible;

        if self.visible_books.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible_books.len() - 1);
        }

        tracing::debug!(
            visible_count = self.visible_books.len(),
            "view filter applied"
        );
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// While `loading` is true the view model carries only the loading
    /// indicator; it replaces all other output. Otherwise the visible list is
    /// windowed around the selection, match highlights are computed, and the
    /// header, footer, and optional search bar are filled in.
    ///
    /// # Windowing
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center the window around the selected index
    /// 3. Shift the window near the end of the list to stay full
    /// 4. Compute the relative selection index within the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        if self.loading {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                loading: Some(LoadingInfo {
                    message: "Loading the library...".to_string(),
                }),
                empty_state: None,
                search_bar: None,
            };
        }

        if self.visible_books.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                loading: None,
                empty_state: Some(self.compute_empty_state()),
                search_bar: self.compute_search_bar(),
            };
        }

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible_books.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.visible_books.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<DisplayItem> = self.visible_books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                self.compute_display_item(book, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            loading: None,
            empty_state: None,
            search_bar: self.compute_search_bar(),
        }
    }

    /// Computes a display item for a single book within the visible window.
    ///
    /// Handles title truncation, responsive detail-line truncation, match
    /// highlight ranges, and selection state marking.
    fn compute_display_item(&self, book: &Book, absolute_idx: usize, cols: usize) -> DisplayItem {
        const TITLE_DISPLAY_LIMIT: usize = 35;
        const TITLE_COLUMN_WIDTH: usize = 37;
        const SAFETY_MARGIN: usize = 2;

        let is_selected = absolute_idx == self.selected_index;
        let max_detail_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + SAFETY_MARGIN);

        let title = if book.title.chars().count() > TITLE_DISPLAY_LIMIT {
            let truncated: String = book.title.chars().take(TITLE_DISPLAY_LIMIT - 3).collect();
            format!("{truncated}...")
        } else {
            book.title.clone()
        };

        let highlight_ranges =
            if matches!(self.input_mode, InputMode::Search(_)) && !self.search_query.is_empty() {
                Self::match_range(&book.title, &self.search_query)
                    .into_iter()
                    .collect()
            } else {
                vec![]
            };

        DisplayItem {
            title,
            detail: Self::format_detail(&book.published_line(), max_detail_width),
            is_selected,
            highlight_ranges,
        }
    }

    /// Truncates a detail line to the available column width.
    ///
    /// Keeps the start of the line and appends "..." when it does not fit.
    fn format_detail(detail: &str, max_width: usize) -> String {
        if detail.chars().count() > max_width {
            let keep_chars = max_width.saturating_sub(3);
            let kept: String = detail.chars().take(keep_chars).collect();
            format!("{kept}...")
        } else {
            detail.to_string()
        }
    }

    /// Finds the first case-insensitive occurrence of `query` in `text`.
    ///
    /// Returns the char-index range `(start, end)` of the match, or `None` if
    /// the query does not occur. Comparison lowercases character by
    /// character, which keeps the range aligned with the original text for
    /// highlight rendering.
    fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
        if query.is_empty() {
            return None;
        }

        let text_chars: Vec<char> = text.chars().collect();
        let query_chars: Vec<char> = query.chars().collect();
        if query_chars.len() > text_chars.len() {
            return None;
        }

        for start in 0..=(text_chars.len() - query_chars.len()) {
            let window = &text_chars[start..start + query_chars.len()];
            if window
                .iter()
                .zip(&query_chars)
                .all(|(t, q)| t.to_lowercase().eq(q.to_lowercase()))
            {
                return Some((start, start + query_chars.len()));
            }
        }

        None
    }

    /// Computes header information: title, visible count, and sort marker.
    fn compute_header(&self) -> HeaderInfo {
        let count = self.visible_books.len();
        let title = match self.sort {
            None => format!(" Library ({count}) "),
            Some(SortDirection::Ascending) => format!(" Library ({count}) · oldest first "),
            Some(SortDirection::Descending) => format!(" Library ({count}) · newest first "),
        };
        HeaderInfo { title }
    }

    /// Computes footer keybinding text based on the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Ctrl+n/p: navigate  Type to filter"
                    .to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  Ctrl+n/p: navigate".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  o: oldest first  n: newest first  q: quit".to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes the empty state shown when no books are visible.
    fn compute_empty_state(&self) -> EmptyState {
        if self.search_query.is_empty() {
            EmptyState {
                message: "The library is empty".to_string(),
                subtitle: "The catalog endpoint returned no books".to_string(),
            }
        } else {
            EmptyState {
                message: "No books match your search".to_string(),
                subtitle: "Press ESC to clear the query".to_string(),
            }
        }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates rows available for the book list after subtracting chrome.
    ///
    /// Accounts for the blank top line, header, borders, column header row,
    /// and footer, plus the search box (3 rows) when search is active.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state(books: Vec<Book>) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.books = Some(books);
        state.loading = false;
        state.fetch = FetchPhase::Loaded;
        state.apply_view_filter();
        state
    }

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("Da Vinci Code", "Dan Brown", 2003),
            Book::new("1984", "George Orwell", 1949),
            Book::new("Brave New World", "Aldous Huxley", 1932),
        ]
    }

    fn visible_titles(state: &AppState) -> Vec<&str> {
        state
            .visible_books
            .iter()
            .map(|b| b.title.as_str())
            .collect()
    }

    #[test]
    fn empty_query_shows_all_books() {
        let state = loaded_state(sample_books());
        assert_eq!(state.visible_books.len(), 3);
    }

    #[test]
    fn query_matches_title_or_author() {
        let mut state = loaded_state(sample_books());

        state.search_query = "da vinci".to_string();
        state.apply_view_filter();
        assert_eq!(visible_titles(&state), vec!["Da Vinci Code"]);

        state.search_query = "orwell".to_string();
        state.apply_view_filter();
        assert_eq!(visible_titles(&state), vec!["1984"]);
    }

    #[test]
    fn query_is_matched_case_insensitively() {
        let mut expected = None;
        for query in ["da vinci", "Da Vinci", "DA VINCI"] {
            let mut state = loaded_state(sample_books());
            for c in query.chars() {
                state.push_search_char(c);
            }
            state.apply_view_filter();
            let titles: Vec<String> =
                state.visible_books.iter().map(|b| b.title.clone()).collect();
            match &expected {
                None => expected = Some(titles),
                Some(first) => assert_eq!(&titles, first),
            }
        }
        assert_eq!(expected.unwrap(), vec!["Da Vinci Code"]);
    }

    #[test]
    fn query_is_stored_lowercase() {
        let mut state = loaded_state(sample_books());
        for c in "DaN BrOwN".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.search_query, "dan brown");
    }

    #[test]
    fn ascending_sort_orders_by_year() {
        let mut state = loaded_state(sample_books());
        state.sort = Some(SortDirection::Ascending);
        state.apply_view_filter();
        assert_eq!(
            visible_titles(&state),
            vec!["Brave New World", "1984", "Da Vinci Code"]
        );
    }

    #[test]
    fn descending_sort_orders_by_year() {
        let mut state = loaded_state(sample_books());
        state.sort = Some(SortDirection::Descending);
        state.apply_view_filter();
        assert_eq!(
            visible_titles(&state),
            vec!["Da Vinci Code", "1984", "Brave New World"]
        );
    }

    #[test]
    fn sort_is_stable_for_equal_years() {
        let mut state = loaded_state(vec![
            Book::new("First", "a", 2000),
            Book::new("Second", "b", 2000),
            Book::new("Oldest", "c", 1990),
        ]);
        state.sort = Some(SortDirection::Ascending);
        state.apply_view_filter();
        assert_eq!(visible_titles(&state), vec!["Oldest", "First", "Second"]);

        state.sort = Some(SortDirection::Descending);
        state.apply_view_filter();
        assert_eq!(visible_titles(&state), vec!["First", "Second", "Oldest"]);
    }

    #[test]
    fn no_sort_preserves_arrival_order() {
        let state = loaded_state(sample_books());
        assert_eq!(
            visible_titles(&state),
            vec!["Da Vinci Code", "1984", "Brave New World"]
        );
    }

    #[test]
    fn sorting_never_reorders_the_canonical_catalog() {
        let mut state = loaded_state(sample_books());
        state.sort = Some(SortDirection::Ascending);
        state.apply_view_filter();
        let canonical: Vec<&str> = state
            .books
            .as_ref()
            .unwrap()
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(canonical, vec!["Da Vinci Code", "1984", "Brave New World"]);
    }

    #[test]
    fn absent_catalog_yields_empty_view_without_error() {
        let mut state = AppState::new(Theme::default());
        state.search_query = "anything".to_string();
        state.apply_view_filter();
        assert!(state.visible_books.is_empty());

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert!(vm.loading.is_some());
    }

    #[test]
    fn loading_viewmodel_carries_only_the_indicator() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.loading.is_some());
        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_none());
        assert!(vm.search_bar.is_none());
    }

    #[test]
    fn loaded_viewmodel_lists_books() {
        let state = loaded_state(sample_books());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.loading.is_none());
        assert_eq!(vm.display_items.len(), 3);
        assert_eq!(vm.display_items[0].title, "Da Vinci Code");
        assert_eq!(
            vm.display_items[0].detail,
            "Published by Dan Brown in 2003"
        );
    }

    #[test]
    fn unmatched_query_yields_empty_state() {
        let mut state = loaded_state(sample_books());
        state.search_query = "zzzz".to_string();
        state.apply_view_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert_eq!(
            vm.empty_state.unwrap().message,
            "No books match your search"
        );
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = loaded_state(sample_books());
        assert_eq!(state.selected_index, 0);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_clamped_when_the_view_shrinks() {
        let mut state = loaded_state(sample_books());
        state.selected_index = 2;
        state.search_query = "da vinci".to_string();
        state.apply_view_filter();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn match_range_is_case_insensitive_and_char_indexed() {
        assert_eq!(AppState::match_range("Da Vinci Code", "da vinci"), Some((0, 8)));
        assert_eq!(AppState::match_range("Da Vinci Code", "CODE"), Some((9, 13)));
        assert_eq!(AppState::match_range("Da Vinci Code", "orwell"), None);
        assert_eq!(AppState::match_range("Da Vinci Code", ""), None);
    }

    #[test]
    fn header_reflects_count_and_sort_marker() {
        let mut state = loaded_state(sample_books());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Library (3) ");

        state.sort = Some(SortDirection::Descending);
        state.apply_view_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Library (3) · newest first ");
    }

    #[test]
    fn long_titles_are_truncated_with_ellipsis() {
        let long_title = "A".repeat(50);
        let state = loaded_state(vec![Book::new(long_title, "x", 2000)]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].title.chars().count(), 35);
        assert!(vm.display_items[0].title.ends_with("..."));
    }
}
