//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zibrary
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle, and executes the side
//! effects (timer, web request, pane control) that the library layer emits
//! as actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `Timer`, `WebRequestResult`, and
//!    `PermissionRequestResult` events
//! 3. **Permission Grant**: Schedule the one-shot catalog fetch
//! 4. **Update**: Handle events, delegate to the library layer
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Down)` → `Event::KeyDown`
//! - `Key('/')` → `Event::SearchMode` (or `FocusSearchBar` while searching)
//! - `Timer` → `Event::FetchTimerElapsed`
//! - `WebRequestResult` → `Event::FetchCompleted { status, body }`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `/`: Enter search mode
//! - `o`: Sort oldest first
//! - `n`: Sort newest first
//! - `q`: Close plugin
//!
//! In search mode:
//! - printable keys: Type characters
//! - `Enter`: Browse the filtered results
//! - `Esc`: Exit search
//! - `/`: Return to search input

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zibrary::{handle_event, Action, Config, Event, InputMode};

// Register plugin with Zellij
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific event translation
/// and side effect execution.
struct State {
    /// Core application state from the library layer.
    app: zibrary::AppState,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zibrary::initialize(&default_config),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// tracing, creates application state, requests permissions, and
    /// subscribes to events. The catalog fetch is not scheduled here; it
    /// waits for the permission grant.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Issue the catalog HTTP request
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zibrary::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = zibrary::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::FetchTimerElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                Event::FetchCompleted { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match permissions {
                    PermissionStatus::Granted => {
                        tracing::debug!("permissions granted");
                        Event::PluginReady
                    }
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - catalog cannot be fetched");
                        return false;
                    }
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zibrary::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => match self.app.input_mode {
                InputMode::Search(_) => Event::Char('j'),
                InputMode::Normal => Event::KeyDown,
            },
            BareKey::Up | BareKey::Char('k') => match self.app.input_mode {
                InputMode::Search(_) => Event::Char('k'),
                InputMode::Normal => Event::KeyUp,
            },
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('o') if self.app.input_mode == InputMode::Normal => {
                Event::SortOldestFirst
            }
            BareKey::Char('n') if self.app.input_mode == InputMode::Normal => {
                Event::SortNewestFirst
            }
            BareKey::Enter => Event::FocusResults,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close the plugin pane
    /// - `ScheduleFetch`: Arm the one-shot fetch delay timer
    /// - `StartFetch`: Issue the catalog GET via the host
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleFetch { delay_secs } => {
                tracing::debug!(delay_secs = delay_secs, "arming fetch timer");
                set_timeout(*delay_secs);
            }
            Action::StartFetch { ref url } => {
                tracing::debug!(url = %url, "issuing catalog request");
                web_request(
                    url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    BTreeMap::new(),
                );
            }
        }
    }
}
