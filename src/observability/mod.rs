//! File-based structured logging for the plugin.
//!
//! Zellij plugins cannot log to a terminal of their own, so all `tracing`
//! output is written to a rotating file under the plugin data directory.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingWriter → log file
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: Logs written to
//!   `~/.local/share/zellij/zibrary/zibrary.log`
//! - **Automatic Rotation**: The file rotates at 5MB with 2-backup retention
//! - **Level Filtering**: Controlled by the `trace_level` config option
//!
//! # Usage
//!
//! Initialize logging early in the plugin lifecycle:
//!
//! ```no_run
//! use zibrary::observability::init_tracing;
//! use zibrary::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and level resolution
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
