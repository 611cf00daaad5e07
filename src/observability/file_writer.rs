//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides an `io::Write` implementation that automatically
//! rotates its file when it exceeds a size threshold, keeping a fixed number
//! of numbered backups. This bounds disk usage for the plugin log file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// File writer with size-based rotation.
///
/// The file is opened lazily on first write. Before each write the current
/// size is checked; when it exceeds the limit the file is renamed to
/// `<name>.1` (shifting existing backups to `.2`, `.3`, ... and dropping the
/// oldest) and a fresh file is started.
///
/// Thread safety is provided by the caller: the tracing fmt layer wraps this
/// writer in a `Mutex`, which serializes writes.
#[derive(Debug)]
pub struct RotatingWriter {
    /// Path of the primary log file.
    path: PathBuf,
    /// Open handle, `None` until the first write or after a rotation.
    file: Option<File>,
    /// Bytes written to the current file.
    written: u64,
    /// Size threshold that triggers rotation.
    max_bytes: u64,
    /// Number of rotated backups to keep.
    max_backups: usize,
}

impl RotatingWriter {
    /// Creates a writer with the default size limit and backup count.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            file: None,
            written: 0,
            max_bytes,
            max_backups,
        }
    }

    /// Path of the `n`-th backup file (`<name>.1` is the newest).
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Opens the log file in append mode and records its current size.
    fn open(&mut self) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
        self.file = Some(file);
        Ok(())
    }

    /// Shifts backups up by one slot and moves the current file to `.1`.
    ///
    /// The oldest backup falls off the end; rename failures for individual
    /// backups are ignored so a missing slot never blocks rotation.
    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;

        let _ = fs::remove_file(self.backup_path(self.max_backups));
        for n in (1..self.max_backups).rev() {
            let _ = fs::rename(self.backup_path(n), self.backup_path(n + 1));
        }
        fs::rename(&self.path, self.backup_path(1))?;

        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.file.is_some() && self.written >= self.max_bytes {
            self.rotate()?;
        }

        if self.file.is_none() {
            self.open()?;
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))?;

        let n = file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugin.log");
        let mut writer = RotatingWriter::new(path.clone());

        writer.write_all(b"first line\n").unwrap();
        writer.write_all(b"second line\n").unwrap();
        writer.flush().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn rotates_when_the_size_limit_is_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugin.log");
        let mut writer = RotatingWriter::with_limits(path.clone(), 8, 2);

        writer.write_all(b"0123456789").unwrap();
        writer.write_all(b"next file").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next file");
        let backup = fs::read_to_string(dir.path().join("plugin.log.1")).unwrap();
        assert_eq!(backup, "0123456789");
    }

    #[test]
    fn drops_backups_beyond_the_retention_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugin.log");
        let mut writer = RotatingWriter::with_limits(path.clone(), 1, 2);

        for chunk in [b"aa" as &[u8], b"bb", b"cc", b"dd"] {
            writer.write_all(chunk).unwrap();
        }
        writer.flush().unwrap();

        assert!(dir.path().join("plugin.log.1").exists());
        assert!(dir.path().join("plugin.log.2").exists());
        assert!(!dir.path().join("plugin.log.3").exists());
    }
}
