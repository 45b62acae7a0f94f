//! Archive store abstraction.
//!
//! The loader does not know how the archive is laid out on disk. It asks an
//! [`ArchiveStore`] for the bytes of one record and tells it when it no
//! longer needs the store's copy.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of raw record bytes, keyed by index and record id.
pub trait ArchiveStore: Send + Sync {
    /// Fetch a copy of a record's bytes.
    ///
    /// Returns `Ok(None)` when the index has no such record.
    fn fetch_record(&self, index_id: u8, record_id: u32) -> io::Result<Option<Vec<u8>>>;

    /// Signal that the caller has copied the record out and the store may
    /// drop any buffers it holds for it.
    fn release_record(&self, _index_id: u8, _record_id: u32) {}
}

/// Store backed by a directory tree of `<index>/<record>.dat` files.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding a record.
    #[must_use]
    pub fn record_path(&self, index_id: u8, record_id: u32) -> PathBuf {
        self.root
            .join(index_id.to_string())
            .join(format!("{record_id}.dat"))
    }
}

impl ArchiveStore for DirectoryStore {
    fn fetch_record(&self, index_id: u8, record_id: u32) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(self.record_path(index_id, record_id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store that counts fetches and releases.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<(u8, u32), Vec<u8>>>,
    fetches: AtomicUsize,
    releases: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a record.
    pub fn insert(&self, index_id: u8, record_id: u32, bytes: Vec<u8>) {
        self.records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert((index_id, record_id), bytes);
    }

    /// Number of `fetch_record` calls so far, including misses.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of `release_record` calls so far.
    #[must_use]
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl ArchiveStore for MemoryStore {
    fn fetch_record(&self, index_id: u8, record_id: u32) -> io::Result<Option<Vec<u8>>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let records = self
            .records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(records.get(&(index_id, record_id)).cloned())
    }

    fn release_record(&self, _index_id: u8, _record_id: u32) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}
