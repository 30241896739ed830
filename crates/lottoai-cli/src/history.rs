//! Saved combinations.
//!
//! The core never touches storage; this is the adapter that keeps a list of
//! saved results, newest first. [`JsonFileHistory`] stores them as one JSON
//! array and guards read-modify-write cycles with an advisory lock on a
//! sidecar `.lock` file.

use fs2::FileExt;
use lottoai_core::{CombinationResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// One saved combination, as the badges were displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub numbers: Vec<String>,
    pub extras: Vec<String>,
    /// Unix time in milliseconds.
    pub ts: i64,
}

impl HistoryEntry {
    pub fn from_result(result: &CombinationResult, ts: i64) -> Self {
        Self {
            title: result.title.clone(),
            numbers: result.badges(),
            extras: result.extra_badges(),
            ts,
        }
    }

    /// `numbers • extra • extra` summary line.
    pub fn summary(&self) -> String {
        let mut line = self.numbers.join(" ");
        for extra in &self.extras {
            line.push_str(" • ");
            line.push_str(extra);
        }
        line
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history entry {index} not found ({len} saved)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("history lock timed out after {waited:?} at {}", path.display())]
    LockTimeout { path: PathBuf, waited: Duration },

    #[error("history file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("history could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HistoryError {
    /// Machine-readable code associated with this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::IndexOutOfRange { .. } => ErrorCode::HistoryIndexOutOfRange,
            Self::LockTimeout { .. } => ErrorCode::LockContention,
            Self::Io(_) | Self::Serialize(_) => ErrorCode::HistoryWriteFailed,
        }
    }
}

/// Storage for saved combinations.
pub trait HistoryStore {
    /// Insert at the front.
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError>;

    /// Newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Remove the entry at `index` (as shown by [`HistoryStore::list`]).
    fn remove(&mut self, index: usize) -> Result<HistoryEntry, HistoryError>;

    fn clear(&mut self) -> Result<(), HistoryError>;
}

fn remove_at(entries: &mut Vec<HistoryEntry>, index: usize) -> Result<HistoryEntry, HistoryError> {
    if index >= entries.len() {
        return Err(HistoryError::IndexOutOfRange {
            index,
            len: entries.len(),
        });
    }
    Ok(entries.remove(index))
}

/// Volatile store, for tests and one-shot sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.insert(0, entry);
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }

    fn remove(&mut self, index: usize) -> Result<HistoryEntry, HistoryError> {
        remove_at(&mut self.entries, index)
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        Ok(())
    }
}

/// History persisted as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
    lock_timeout: Duration,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    #[cfg(test)]
    fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    /// Read entries. A missing file, invalid JSON or a non-array document all
    /// read as empty; entries that do not match the schema are skipped.
    fn read_entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let Ok(serde_json::Value::Array(items)) = serde_json::from_str::<serde_json::Value>(&content)
        else {
            tracing::warn!(path = %self.path.display(), "history is not a JSON array, ignoring");
            return Ok(Vec::new());
        };

        let total = items.len();
        let entries: Vec<HistoryEntry> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        if entries.len() < total {
            tracing::warn!(
                skipped = total - entries.len(),
                "skipped malformed history entries"
            );
        }
        Ok(entries)
    }

    fn write_entries(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);

        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Run a read-modify-write cycle under the exclusive lock.
    fn update<T>(
        &self,
        f: impl FnOnce(&mut Vec<HistoryEntry>) -> Result<T, HistoryError>,
    ) -> Result<T, HistoryError> {
        let _guard = FileGuard::acquire(&self.lock_path(), self.lock_timeout)?;
        let mut entries = self.read_entries()?;
        let out = f(&mut entries)?;
        self.write_entries(&entries)?;
        Ok(out)
    }

    /// Current history as a pretty JSON array, for export.
    pub fn export_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string_pretty(&self.list()?)?)
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.update(|entries| {
            entries.insert(0, entry);
            Ok(())
        })
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.read_entries()
    }

    fn remove(&mut self, index: usize) -> Result<HistoryEntry, HistoryError> {
        self.update(|entries| remove_at(entries, index))
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.update(|entries| {
            entries.clear();
            Ok(())
        })
    }
}

/// Exclusive advisory lock, released on drop.
#[derive(Debug)]
struct FileGuard {
    file: File,
}

impl FileGuard {
    fn acquire(path: &Path, timeout: Duration) -> Result<Self, HistoryError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let start = Instant::now();
        loop {
            let file = OpenOptions::new()
                .create(true)
                .read(true)
                .write(true)
                .truncate(false)
                .open(path)?;

            if file.try_lock_exclusive().is_ok() {
                return Ok(Self { file });
            }

            if start.elapsed() >= timeout {
                return Err(HistoryError::LockTimeout {
                    path: path.to_path_buf(),
                    waited: start.elapsed(),
                });
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for FileGuard {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
