//! Error types for the Zibrary plugin.
//!
//! This module defines the centralized error type [`ZibraryError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for Zibrary plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from catalog fetching to theme loading. Most variants wrap
/// underlying errors from external crates using `#[from]` for automatic
/// conversion.
///
/// The fetch-related variants are diagnostic only: the plugin's failure policy
/// is to log them and leave the loading indicator in place, never to surface
/// them in the UI.
#[derive(Debug, Error)]
pub enum ZibraryError {
    /// The catalog endpoint answered with a non-success status.
    #[error("Catalog request failed with HTTP status {0}")]
    Http(u16),

    /// The catalog body could not be parsed as the expected JSON document.
    ///
    /// Wraps `serde_json` errors via `#[from]`, covering both non-JSON bodies
    /// and JSON that does not match the catalog shape.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be parsed or a built-in theme name is
    /// unknown. The string describes what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (theme files, log
    /// files). Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Zibrary operations.
///
/// This is a type alias for `std::result::Result<T, ZibraryError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZibraryError>;
