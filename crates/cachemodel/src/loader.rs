//! Fetch, decode and memoize model definitions.

use cachemodel_decode::{ModelDefinition, ModelFormat, decode_model};

use crate::cache::{Cache, MemoryCache};
use crate::config::LoaderConfig;
use crate::error::{Error, Result};
use crate::hooks::{self, NoPostProcess, PostProcess};
use crate::store::ArchiveStore;

/// Record ids are the low 16 bits of a model id.
const RECORD_ID_MASK: u32 = 0xFFFF;

/// Loads model definitions from an [`ArchiveStore`], memoizing successful
/// decodes in a [`Cache`].
///
/// Every definition returned is an owned copy. Concurrent calls for the same
/// id may decode redundantly, but only the first result is stored and every
/// caller receives a copy of it.
#[derive(Debug)]
pub struct ModelLoader<S, C = MemoryCache, H = NoPostProcess> {
    store: S,
    cache: C,
    hooks: H,
    config: LoaderConfig,
}

impl<S: ArchiveStore> ModelLoader<S> {
    /// Create a loader with an unbounded memory cache, no post-processing
    /// and the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_parts(
            store,
            MemoryCache::new(),
            NoPostProcess,
            LoaderConfig::default(),
        )
    }
}

impl<S, C, H> ModelLoader<S, C, H>
where
    S: ArchiveStore,
    C: Cache,
    H: PostProcess,
{
    pub fn with_parts(store: S, cache: C, hooks: H, config: LoaderConfig) -> Self {
        Self {
            store,
            cache,
            hooks,
            config,
        }
    }

    /// Get the definition for `model_id`.
    ///
    /// Returns `Ok(None)` when the archive has no such record. A record that
    /// fails to decode is reported as [`Error::Malformed`] and is not cached,
    /// so a later call fetches it again.
    pub fn get_model(&self, model_id: u32) -> Result<Option<ModelDefinition>> {
        if let Some(definition) = self.cache.get(model_id) {
            tracing::trace!(model_id, "model cache hit");
            return Ok(Some(definition));
        }

        let index_id = self.config.index_id;
        let record_id = model_id & RECORD_ID_MASK;
        let fetched = self.store.fetch_record(index_id, record_id)?;
        let Some(data) = fetched else {
            tracing::debug!(model_id, index_id, record_id, "model record not found");
            return Ok(None);
        };
        self.store.release_record(index_id, record_id);

        tracing::debug!(
            model_id,
            bytes = data.len(),
            format = %ModelFormat::detect(&data),
            "decoding model record"
        );
        let definition = self.decode_bytes(model_id, &data)?;

        Ok(Some(self.cache.insert(model_id, definition)))
    }

    /// Decode `data` and run the post-processing hooks, bypassing the store
    /// and the cache.
    pub fn decode_bytes(&self, model_id: u32, data: &[u8]) -> Result<ModelDefinition> {
        let mut definition = decode_model(model_id, data).map_err(|source| {
            tracing::warn!(model_id, error = %source, "malformed model record");
            Error::Malformed { model_id, source }
        })?;

        hooks::run_all(&self.hooks, &mut definition);
        Ok(definition)
    }

    /// Number of memoized definitions.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}
