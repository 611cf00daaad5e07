//! Zibrary: a Zellij plugin for browsing a remote book catalog.
//!
//! Zibrary is a terminal multiplexer plugin that provides:
//! - A one-shot, delayed catalog fetch over HTTP with a loading indicator
//! - Case-insensitive substring search over book titles and authors
//! - Explicit oldest-first / newest-first ordering by publication year
//! - Theme support with built-in Catppuccin variants and custom TOML files
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Fetch Layer   │   │ Domain Layer  │
//! │ (ui/)         │   │ (fetch/)      │   │ (domain/)     │
//! │ - Rendering   │   │ - Wire format │   │ - Book model  │
//! │ - Theming     │   │ - Lifecycle   │   │ - Error types │
//! │ - Components  │   │ - Endpoint    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - File-based tracing (observability/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Fetch Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState` (loading from the first render), request the
//!    `WebAccess` permission, subscribe to events.
//! 2. **Permission Grant**: the handler schedules the fetch and the shim
//!    arms a one-shot 2-second timer.
//! 3. **Timer Expiry**: the handler moves the fetch in flight and the shim
//!    issues the catalog GET via `web_request`.
//! 4. **Request Result**: a 2xx response with a parseable body stores the
//!    catalog and clears the loading indicator. Anything else is logged and
//!    the indicator stays — the deliberate terminal state of the failure
//!    policy.
//!
//! The fetch happens at most once per plugin load; stray timer firings and
//! request results are dropped by the fetch phase machine.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zibrary.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! The catalog endpoint is fixed (`http://localhost:3000/books.json`) and is
//! deliberately not configurable.
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Book, errors)
//! - [`fetch`]: Catalog wire format and fetch lifecycle
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based tracing (internal)

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, SortDirection};
pub use domain::{Book, Result, ZibraryError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization. All keys are optional;
/// the catalog endpoint is a constant and cannot be configured.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zibrary.wasm" {
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for the plugin log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Unknown keys are ignored; missing keys fall
    /// back to defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zibrary::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the configured theme (from file, name, or
/// default). The state starts loading: the catalog is absent until the
/// delayed fetch resolves.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zibrary plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_known_keys() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "catppuccin-frappe".to_string());
        map.insert("theme_file".to_string(), "/tmp/theme.toml".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn config_defaults_to_none() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn initialize_falls_back_to_the_default_theme() {
        let config = Config {
            theme_name: Some("does-not-exist".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert!(state.loading);
    }

    #[test]
    fn initialize_honors_a_known_theme_name() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }
}
