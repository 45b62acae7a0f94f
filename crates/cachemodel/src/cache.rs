//! Memoization of decoded definitions.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use cachemodel_decode::ModelDefinition;

/// Storage for decoded definitions keyed by model id.
///
/// Implementations hand out owned copies so callers can never mutate the
/// stored instance.
pub trait Cache: Send + Sync {
    /// Copy of the stored definition, if any.
    fn get(&self, model_id: u32) -> Option<ModelDefinition>;

    /// Store `definition` unless an entry for `model_id` already exists.
    ///
    /// Returns a copy of whichever definition is stored afterwards, so
    /// racing inserts all observe the first one.
    fn insert(&self, model_id: u32, definition: ModelDefinition) -> ModelDefinition;

    /// Number of stored definitions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded in-memory cache.
///
/// Entries are never evicted: memory grows with the number of distinct ids
/// that decoded successfully.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<u32, ModelDefinition>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache for MemoryCache {
    fn get(&self, model_id: u32) -> Option<ModelDefinition> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&model_id)
            .cloned()
    }

    fn insert(&self, model_id: u32, definition: ModelDefinition) -> ModelDefinition {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(model_id)
            .or_insert(definition)
            .clone()
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Cache that stores nothing. Every lookup goes to the archive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl Cache for NoCache {
    fn get(&self, _model_id: u32) -> Option<ModelDefinition> {
        None
    }

    fn insert(&self, _model_id: u32, definition: ModelDefinition) -> ModelDefinition {
        definition
    }

    fn len(&self) -> usize {
        0
    }
}
