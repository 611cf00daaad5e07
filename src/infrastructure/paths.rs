//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`,
//! pointing at the cwd of the last focused terminal (or the folder Zellij was
//! started from). This module resolves the plugin's data locations within
//! that mount.

use std::path::PathBuf;

/// Returns the data directory for Zibrary files.
///
/// The directory is located at `/host/.local/share/zellij/zibrary` in the
/// Zellij sandbox, which typically resolves to
/// `~/.local/share/zellij/zibrary` when Zellij is started from the user's
/// home directory. Log files live within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zibrary")
}

/// Returns the path of the plugin log file inside the data directory.
#[must_use]
pub fn log_file_path() -> PathBuf {
    get_data_dir().join("zibrary.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_in_the_data_dir() {
        assert!(log_file_path().starts_with(get_data_dir()));
        assert_eq!(
            log_file_path().file_name().unwrap().to_str().unwrap(),
            "zibrary.log"
        );
    }
}
