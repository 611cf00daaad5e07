//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are created via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI. When
/// `loading` is present it takes precedence over everything else: the loading
/// indicator replaces all other output until the fetch settles.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Books to display in the list, windowed around the selection.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    /// Header information (title, count, sort marker).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Loading indicator, present while the catalog fetch has not settled.
    pub loading: Option<LoadingInfo>,

    /// Empty state message (catalog loaded but nothing visible).
    pub empty_state: Option<EmptyState>,

    /// Search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single book row.
///
/// Represents one row in the list view, with the match highlight ranges
/// pre-computed.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Book title, truncated to the title column.
    pub title: String,

    /// Publication line ("Published by {author} in {year}").
    pub detail: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Char-index ranges of the title to highlight for the current query.
    ///
    /// Each tuple is `(start, end)` with an exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  /: search  q: quit").
    pub keybindings: String,
}

/// Loading indicator display information.
///
/// Rendered exclusively: while present, no other UI element is drawn.
#[derive(Debug, Clone)]
pub struct LoadingInfo {
    /// Message shown while the catalog is being fetched.
    pub message: String,
}

/// Empty state message display information.
///
/// Shown when the catalog is loaded but no books are visible, either because
/// the catalog is empty or because the query matches nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No books match your search").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
