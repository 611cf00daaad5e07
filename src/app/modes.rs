//! Input mode and sort direction state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes and list ordering. These types determine which keybindings are
//! active, how input is processed, and which order the catalog is shown in.
//!
//! # State Machines
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation and command mode
//! - **Search**: Active search with typing or result navigation focus
//!
//! Sort direction is a separate, orthogonal piece of state set by the two
//! sort controls. Each control writes its own direction explicitly; there is
//! no shared toggle between them.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to
    /// Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts Ctrl+n/p for movement and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), o (oldest first),
    /// n (newest first), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results. Footer displays search-specific
    /// keybindings.
    Search(SearchFocus),
}

/// Requested ordering of the visible book list by publication year.
///
/// Each sort control sets its direction unconditionally: the oldest-first
/// control always produces `Ascending`, the newest-first control always
/// produces `Descending`, regardless of what was active before. Activating
/// the same control twice is a no-op the second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lowest publication year first.
    Ascending,

    /// Highest publication year first.
    Descending,
}
