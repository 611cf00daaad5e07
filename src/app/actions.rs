//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or host
//! events. Actions bridge pure state transformations and effectful operations
//! like arming the fetch timer or issuing the catalog request.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence via the action processor in main.rs.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful host operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing
    /// 'q').
    CloseFocus,

    /// Arms the one-shot fetch delay timer on the host.
    ///
    /// Emitted exactly once per plugin load, after permissions are granted.
    ScheduleFetch {
        /// Delay before the timer fires, in seconds.
        delay_secs: f64,
    },

    /// Issues the catalog HTTP GET via the host.
    ///
    /// Emitted when the fetch timer fires while the fetch is still in its
    /// scheduled phase. The result arrives later as a request-result event.
    StartFetch {
        /// Catalog endpoint URL.
        url: String,
    },
}
