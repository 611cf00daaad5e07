//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and host events (timer expiry, request results), translating them into
//! state changes and action sequences. It serves as the primary control flow
//! coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`
//! - **Ordering**: `SortOldestFirst`, `SortNewestFirst`
//! - **Fetch Lifecycle**: `PluginReady`, `FetchTimerElapsed`,
//!   `FetchCompleted`

use crate::app::modes::{InputMode, SearchFocus, SortDirection};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ZibraryError;
use crate::fetch::{self, FetchPhase};

/// Events triggered by user input or the plugin host.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one position (wraps to top).
    KeyDown,
    /// Moves selection up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the filtered results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Orders the visible list oldest-publication-year first.
    ///
    /// Sets the direction explicitly; independent of the other control and
    /// idempotent when activated repeatedly.
    SortOldestFirst,
    /// Orders the visible list newest-publication-year first.
    SortNewestFirst,

    /// The host granted permissions; the fetch delay timer may be armed.
    ///
    /// Accepted only while the fetch is idle, so a repeated permission grant
    /// can never arm a second timer.
    PluginReady,

    /// The fetch delay timer fired.
    ///
    /// Accepted only while the fetch is in its scheduled phase; duplicate or
    /// stray timer events are dropped.
    FetchTimerElapsed,

    /// The catalog request settled with a status and body.
    ///
    /// Accepted only while a request is in flight; results arriving in any
    /// other phase are logged and dropped.
    FetchCompleted {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A tuple of (`should_render`, actions). `should_render` is true when the
/// event changed something visible; the action list may be empty.
///
/// # Errors
///
/// Returns errors from state mutation methods. Fetch failures are not errors
/// at this boundary: the failure policy is to log and leave the loading
/// indicator in place.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.apply_view_filter();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_view_filter();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_view_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.push_search_char(*c);

            tracing::trace!(query = %state.search_query, char = %c, "search query updated");

            state.apply_view_filter();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.pop_search_char();

            state.apply_view_filter();

            Ok((true, vec![]))
        }
        Event::Escape => {
            state.input_mode = InputMode::Normal;

            state.search_query = String::new();

            state.apply_view_filter();

            Ok((true, vec![]))
        }
        Event::SortOldestFirst => {
            tracing::debug!("sorting oldest first");
            state.sort = Some(SortDirection::Ascending);
            state.apply_view_filter();
            Ok((true, vec![]))
        }
        Event::SortNewestFirst => {
            tracing::debug!("sorting newest first");
            state.sort = Some(SortDirection::Descending);
            state.apply_view_filter();
            Ok((true, vec![]))
        }
        Event::PluginReady => {
            if state.fetch != FetchPhase::Idle {
                tracing::debug!(phase = ?state.fetch, "ignoring ready event, fetch already underway");
                return Ok((false, vec![]));
            }

            tracing::debug!(
                delay_secs = fetch::FETCH_DELAY_SECS,
                "scheduling catalog fetch"
            );
            state.fetch = FetchPhase::Scheduled;
            Ok((
                false,
                vec![Action::ScheduleFetch {
                    delay_secs: fetch::FETCH_DELAY_SECS,
                }],
            ))
        }
        Event::FetchTimerElapsed => {
            if state.fetch != FetchPhase::Scheduled {
                tracing::debug!(phase = ?state.fetch, "ignoring timer, no fetch scheduled");
                return Ok((false, vec![]));
            }

            tracing::debug!(url = fetch::BOOKS_ENDPOINT, "issuing catalog request");
            state.fetch = FetchPhase::InFlight;
            Ok((
                false,
                vec![Action::StartFetch {
                    url: fetch::BOOKS_ENDPOINT.to_string(),
                }],
            ))
        }
        Event::FetchCompleted { status, body } => {
            if !state.fetch.is_in_flight() {
                tracing::debug!(phase = ?state.fetch, status = status, "dropping stray request result");
                return Ok((false, vec![]));
            }

            if !(200..300).contains(status) {
                let error = ZibraryError::Http(*status);
                tracing::error!(error = %error, "catalog request failed");
                state.fetch = FetchPhase::Failed;
                return Ok((false, vec![]));
            }

            match fetch::parse_catalog(body) {
                Ok(books) => {
                    tracing::debug!(book_count = books.len(), "catalog loaded");
                    state.books = Some(books);
                    state.loading = false;
                    state.fetch = FetchPhase::Loaded;
                    state.apply_view_filter();
                    Ok((true, vec![]))
                }
                Err(e) => {
                    tracing::error!(error = %e, "catalog body could not be parsed");
                    state.fetch = FetchPhase::Failed;
                    Ok((false, vec![]))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn catalog_body() -> Vec<u8> {
        br#"{"books":[
            {"title":"Da Vinci Code","author":"Dan Brown","publicationYear":2003},
            {"title":"1984","author":"George Orwell","publicationYear":1949}
        ]}"#
        .to_vec()
    }

    fn dispatch(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        dispatch(&mut state, Event::PluginReady);
        dispatch(&mut state, Event::FetchTimerElapsed);
        dispatch(
            &mut state,
            Event::FetchCompleted {
                status: 200,
                body: catalog_body(),
            },
        );
        state
    }

    fn visible_years(state: &AppState) -> Vec<i32> {
        state
            .visible_books
            .iter()
            .map(|b| b.publication_year)
            .collect()
    }

    #[test]
    fn loading_lifecycle_runs_ready_timer_request_loaded() {
        let mut state = AppState::new(Theme::default());
        assert!(state.loading);
        assert!(state.compute_viewmodel(24, 80).loading.is_some());

        let (_, actions) = dispatch(&mut state, Event::PluginReady);
        assert_eq!(
            actions,
            vec![Action::ScheduleFetch { delay_secs: 2.0 }]
        );
        assert_eq!(state.fetch, FetchPhase::Scheduled);

        let (_, actions) = dispatch(&mut state, Event::FetchTimerElapsed);
        assert_eq!(
            actions,
            vec![Action::StartFetch {
                url: "http://localhost:3000/books.json".to_string(),
            }]
        );
        assert!(state.loading, "loading stays up while the request is in flight");

        let (should_render, _) = dispatch(
            &mut state,
            Event::FetchCompleted {
                status: 200,
                body: catalog_body(),
            },
        );
        assert!(should_render);
        assert!(!state.loading);
        assert_eq!(state.visible_books.len(), 2);
        assert!(state.compute_viewmodel(24, 80).loading.is_none());
    }

    #[test]
    fn only_one_fetch_is_scheduled_per_load() {
        let mut state = AppState::new(Theme::default());
        dispatch(&mut state, Event::PluginReady);
        let (_, actions) = dispatch(&mut state, Event::PluginReady);
        assert!(actions.is_empty());
    }

    #[test]
    fn duplicate_timer_does_not_issue_a_second_request() {
        let mut state = AppState::new(Theme::default());
        dispatch(&mut state, Event::PluginReady);
        dispatch(&mut state, Event::FetchTimerElapsed);
        let (_, actions) = dispatch(&mut state, Event::FetchTimerElapsed);
        assert!(actions.is_empty());
        assert_eq!(state.fetch, FetchPhase::InFlight);
    }

    #[test]
    fn stray_request_result_is_dropped() {
        let mut state = loaded_state();
        let before = state.visible_books.clone();

        let (should_render, _) = dispatch(
            &mut state,
            Event::FetchCompleted {
                status: 200,
                body: br#"{"books":[]}"#.to_vec(),
            },
        );
        assert!(!should_render);
        assert_eq!(state.visible_books, before);
    }

    #[test]
    fn failed_status_keeps_the_loading_indicator() {
        let mut state = AppState::new(Theme::default());
        dispatch(&mut state, Event::PluginReady);
        dispatch(&mut state, Event::FetchTimerElapsed);
        dispatch(
            &mut state,
            Event::FetchCompleted {
                status: 500,
                body: vec![],
            },
        );
        assert!(state.loading);
        assert_eq!(state.fetch, FetchPhase::Failed);
        assert!(state.books.is_none());
    }

    #[test]
    fn unparseable_body_keeps_the_loading_indicator() {
        let mut state = AppState::new(Theme::default());
        dispatch(&mut state, Event::PluginReady);
        dispatch(&mut state, Event::FetchTimerElapsed);
        dispatch(
            &mut state,
            Event::FetchCompleted {
                status: 200,
                body: b"not json".to_vec(),
            },
        );
        assert!(state.loading);
        assert_eq!(state.fetch, FetchPhase::Failed);
    }

    #[test]
    fn sort_controls_are_independent_of_prior_activations() {
        let mut state = loaded_state();

        dispatch(&mut state, Event::SortOldestFirst);
        assert_eq!(visible_years(&state), vec![1949, 2003]);

        dispatch(&mut state, Event::SortNewestFirst);
        assert_eq!(visible_years(&state), vec![2003, 1949]);

        // Activating ascending after descending still sorts ascending.
        dispatch(&mut state, Event::SortOldestFirst);
        assert_eq!(visible_years(&state), vec![1949, 2003]);
    }

    #[test]
    fn repeated_sort_activation_is_idempotent() {
        let mut state = loaded_state();

        dispatch(&mut state, Event::SortNewestFirst);
        let once = visible_years(&state);
        dispatch(&mut state, Event::SortNewestFirst);
        assert_eq!(visible_years(&state), once);
    }

    #[test]
    fn typing_filters_on_every_keystroke() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::SearchMode);

        for c in "da".chars() {
            dispatch(&mut state, Event::Char(c));
        }
        assert_eq!(state.visible_books.len(), 1);
        assert_eq!(state.visible_books[0].title, "Da Vinci Code");

        dispatch(&mut state, Event::Backspace);
        dispatch(&mut state, Event::Backspace);
        assert_eq!(state.visible_books.len(), 2);
    }

    #[test]
    fn uppercase_input_is_stored_lowercase() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::SearchMode);
        for c in "DA VINCI".chars() {
            dispatch(&mut state, Event::Char(c));
        }
        assert_eq!(state.search_query, "da vinci");
        assert_eq!(state.visible_books.len(), 1);
    }

    #[test]
    fn escape_clears_the_query_and_restores_the_full_list() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::SearchMode);
        for c in "1984".chars() {
            dispatch(&mut state, Event::Char(c));
        }
        assert_eq!(state.visible_books.len(), 1);

        dispatch(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.visible_books.len(), 2);
    }

    #[test]
    fn characters_outside_search_mode_are_ignored() {
        let mut state = loaded_state();
        let (should_render, _) = dispatch(&mut state, Event::Char('x'));
        assert!(!should_render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn enter_moves_focus_from_typing_to_results() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::Char('d'));
        dispatch(&mut state, Event::FocusResults);
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
    }

    #[test]
    fn enter_with_empty_query_leaves_search_mode() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn close_focus_emits_the_close_action() {
        let mut state = loaded_state();
        let (_, actions) = dispatch(&mut state, Event::CloseFocus);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn navigation_before_load_is_safe() {
        let mut state = AppState::new(Theme::default());
        dispatch(&mut state, Event::KeyDown);
        dispatch(&mut state, Event::KeyUp);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn search_and_sort_compose() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::SortOldestFirst);
        dispatch(&mut state, Event::SearchMode);
        for c in "o".chars() {
            dispatch(&mut state, Event::Char(c));
        }
        // "o" matches "Da Vinci Code" (title) and "George Orwell" (author);
        // ascending order puts 1949 first.
        assert_eq!(visible_years(&state), vec![1949, 2003]);
    }
}
