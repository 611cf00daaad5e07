//! Catalog fetch layer: wire format, endpoint constants, and fetch lifecycle.
//!
//! This module owns everything about getting book data into the plugin. The
//! actual network call is performed by the Zellij host via `web_request`; the
//! plugin side is reduced to a small state machine plus a parser for the
//! response body.
//!
//! # Fetch Sequence
//!
//! ```text
//! plugin load ──► permission granted ──► set_timeout(2s) ──► Timer
//!                                                              │
//!                                  web_request(BOOKS_ENDPOINT) ◄┘
//!                                             │
//!                              WebRequestResult(status, body)
//!                                             │
//!                          2xx + parseable ───┼─── otherwise
//!                                             │         │
//!                                      catalog stored   logged, loading
//!                                      loading cleared  indicator stays
//! ```
//!
//! Exactly one request is issued per plugin load. The [`FetchPhase`] machine
//! guards the sequence: duplicate timer firings and stray request results are
//! dropped instead of triggering a second fetch or clobbering loaded state.
//!
//! # Modules
//!
//! - [`catalog`]: Wire document shape, endpoint constants, body parsing
//! - [`phase`]: Fetch lifecycle state machine

pub mod catalog;
pub mod phase;

pub use catalog::{parse_catalog, BOOKS_ENDPOINT, FETCH_DELAY_SECS};
pub use phase::FetchPhase;
