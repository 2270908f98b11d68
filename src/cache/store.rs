// Cache store for the last successful fetch result.
// One JSON entry with a millisecond timestamp and a 24-hour TTL. Reads treat
// stale or corrupt state as absent and delete it eagerly; writes are
// best-effort and never block a caller already holding fresh data.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::script::Script;

/// Cached entries are valid for 24 hours.
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// The on-disk shape of the cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Epoch milliseconds at which the entry was written.
    pub timestamp: i64,
    pub scripts: Vec<Script>,
}

/// Durable store for the last successful fetch result.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// Store backed by the platform cache directory. `None` when no home
    /// directory can be determined.
    pub fn open_default() -> Option<Self> {
        super::paths::scripts_cache_path().map(Self::at_path)
    }

    /// Store backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached scripts if a fresh entry exists. A missing file is
    /// absent; corrupt or expired entries are deleted and reported absent.
    pub fn read(&self) -> Option<Vec<Script>> {
        let contents = fs::read_to_string(&self.path).ok()?;

        let entry: CacheEntry = match serde_json::from_str(&contents) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding corrupt cache entry");
                self.clear();
                return None;
            }
        };

        let age_ms = Utc::now().timestamp_millis() - entry.timestamp;
        if age_ms > CACHE_TTL_MS {
            self.clear();
            return None;
        }

        Some(entry.scripts)
    }

    /// Write a new entry stamped with the current time, replacing any prior
    /// entry. Failures degrade to "no cache" and are only logged.
    pub fn write(&self, scripts: &[Script]) {
        let entry = CacheEntry {
            timestamp: Utc::now().timestamp_millis(),
            scripts: scripts.to_vec(),
        };
        if let Err(err) = self.write_entry(&entry) {
            warn!(path = %self.path.display(), error = %err, "failed to write cache entry");
        }
    }

    fn write_entry(&self, entry: &CacheEntry) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(entry)?;

        // Write atomically via temp file so a crash never leaves a torn
        // entry behind.
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Remove the entry, ignoring failures.
    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}
