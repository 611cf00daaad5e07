//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: a level filter from the
//! plugin configuration feeding a plain-text fmt layer that writes to the
//! rotating log file.

use super::file_writer::RotatingWriter;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with rotating file output.
///
/// # Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (logging is optional)
/// - Idempotent: only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingWriter::new(crate::infrastructure::paths::log_file_path());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(writer));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
