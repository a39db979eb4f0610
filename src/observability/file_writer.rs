//! Rotating file writer with size-based rotation and backup retention.
//!
//! The writer plugs into `tracing-subscriber`'s fmt layer through
//! [`MakeWriter`], so every formatted event lands in the log file without
//! unbounded disk growth.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

struct Inner {
    file: Option<File>,
    rotations: u64,
}

/// Thread-safe rotating log file.
///
/// Before each write the current file size is checked. Once it exceeds the
/// limit the file is renamed to `<name>.<timestamp>-<seq>` and a fresh file
/// is started; backups beyond the retention count are removed, oldest first.
///
/// The file is opened lazily on the first write.
///
/// # Example
///
/// ```rust
/// use spotfinder::observability::RotatingFile;
/// use std::io::Write;
///
/// let dir = tempfile::tempdir()?;
/// let log = RotatingFile::new(dir.path().join("spotfinder.log"));
/// (&log).write_all(b"hello\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFile {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    inner: Mutex<Inner>,
}

impl RotatingFile {
    /// Creates a writer for `file_path` with the default limits.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            inner: Mutex::new(Inner {
                file: None,
                rotations: 0,
            }),
        }
    }

    /// Path of the live log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))
    }

    fn check_and_rotate(&self, inner: &mut Inner) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                inner.file = None;
                inner.rotations += 1;
                self.rotate_files(inner.rotations)?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self, sequence: u64) -> io::Result<()> {
        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        let backup_path = self.backup_path(&format!("{timestamp}-{sequence:06}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, backup_path)?;
        }

        self.cleanup_old_backups()
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".");
        name.push(suffix);
        self.file_path.with_file_name(name)
    }

    /// Backups whose suffix sorts last are the newest.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| format!("{s}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock()?;
        self.check_and_rotate(&mut inner)?;

        if inner.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            inner.file = Some(file);
        }

        let file = inner
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        drop(inner);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self.lock()?;
        match inner.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = &'a RotatingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
