//! Fetch lifecycle state machine.
//!
//! The catalog is fetched at most once per plugin load. [`FetchPhase`] tracks
//! where that single fetch stands so the event handler can reject events that
//! arrive out of order: a second timer firing, or a request result delivered
//! when nothing is in flight.

/// Where the single catalog fetch currently stands.
///
/// Transitions are driven by the event handler:
///
/// ```text
/// Idle ──permission granted──► Scheduled ──timer──► InFlight ──result──► Loaded
///                                                       │
///                                                       └──bad status / bad body──► Failed
/// ```
///
/// `Failed` is terminal: the loading indicator stays up and no retry is
/// attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Plugin loaded, fetch timer not yet armed.
    #[default]
    Idle,

    /// The delay timer is armed; the request has not been issued.
    Scheduled,

    /// The request has been handed to the host and a result is expected.
    InFlight,

    /// The catalog was received and parsed.
    Loaded,

    /// The request settled with a bad status or an unparseable body.
    Failed,
}

impl FetchPhase {
    /// True while a request result is expected from the host.
    #[must_use]
    pub fn is_in_flight(self) -> bool {
        self == Self::InFlight
    }

    /// True once the fetch has settled, successfully or not.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Loaded | Self::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_idle() {
        assert_eq!(FetchPhase::default(), FetchPhase::Idle);
    }

    #[test]
    fn settled_covers_both_outcomes() {
        assert!(FetchPhase::Loaded.is_settled());
        assert!(FetchPhase::Failed.is_settled());
        assert!(!FetchPhase::Scheduled.is_settled());
        assert!(!FetchPhase::InFlight.is_settled());
    }
}
