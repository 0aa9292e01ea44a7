//! Persisted transfer count.
//!
//! The last known on-chain count is kept under [`COUNT_CACHE_KEY`] as a
//! decimal string so views have something to show before the first chain
//! read completes. It is never authoritative.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CacheResult;

/// Storage key for the cached count.
pub const COUNT_CACHE_KEY: &str = "transactionCount";

/// Default directory for the file-backed cache (relative to current dir).
pub const DEFAULT_CACHE_DIR: &str = ".prime";

/// Key-value slot for the cached transfer count.
pub trait CountCache {
    /// Last stored count. Missing or unreadable values read as `None`.
    fn load(&self) -> Option<u64>;

    fn store(&self, count: u64) -> CacheResult<()>;
}

/// Parse a stored value, tolerating surrounding whitespace.
pub fn parse_cached_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// In-memory cache, used when nothing should outlive the process.
#[derive(Debug, Default)]
pub struct MemoryCountCache {
    count: Cell<Option<u64>>,
}

impl MemoryCountCache {
    pub fn new(initial: Option<u64>) -> Self {
        Self { count: Cell::new(initial) }
    }
}

impl CountCache for MemoryCountCache {
    fn load(&self) -> Option<u64> {
        self.count.get()
    }

    fn store(&self, count: u64) -> CacheResult<()> {
        self.count.set(Some(count));
        Ok(())
    }
}

/// Cache stored as one file named after [`COUNT_CACHE_KEY`].
#[derive(Debug, Clone)]
pub struct FileCountCache {
    dir: PathBuf,
}

impl FileCountCache {
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_CACHE_DIR)
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(COUNT_CACHE_KEY)
    }
}

impl Default for FileCountCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CountCache for FileCountCache {
    fn load(&self) -> Option<u64> {
        let content = fs::read_to_string(self.path()).ok()?;
        parse_cached_count(&content)
    }

    fn store(&self, count: u64) -> CacheResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(), count.to_string())?;
        Ok(())
    }
}
