//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/fetch layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input / Host Events → Events → Event Handler → State Mutations
//!                                           │
//!                                           └──► Actions → Side Effects
//!                                                           (timer, fetch)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and sort direction state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use zibrary::app::{handle_event, AppState, Event};
//! use zibrary::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PluginReady).unwrap();
//! assert_eq!(actions.len(), 1);
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, SortDirection};
pub use state::AppState;
