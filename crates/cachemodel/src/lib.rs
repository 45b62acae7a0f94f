//! Load model definitions from a game asset archive.
//!
//! This crate wires the pure decoder in [`cachemodel_decode`] to an archive
//! store and a memoization cache.
//!
//! # Sync decoding
//!
//! Loading is synchronous and blocking: [`ModelLoader::get_model`] fetches
//! the record, decodes it on the calling thread and stores the result. The
//! loader is `Send + Sync` when its store, cache and hooks are, so it can be
//! shared across worker threads behind an `Arc`.
//!
//! # Key types
//!
//! - [`ModelLoader`]: Fetch, decode, post-process and memoize definitions
//! - [`ArchiveStore`]: Source of raw record bytes ([`DirectoryStore`], [`MemoryStore`])
//! - [`Cache`]: Memoization policy ([`MemoryCache`], [`NoCache`])
//! - [`PostProcess`]: Hooks that fill in derived data after decoding
//!
//! # Example
//!
//! ```no_run
//! use cachemodel::{DirectoryStore, ModelLoader};
//!
//! let loader = ModelLoader::new(DirectoryStore::new("cache"));
//! if let Some(model) = loader.get_model(1234)? {
//!     println!("{} vertices, {} faces", model.vertex_count, model.face_count);
//! }
//! # Ok::<(), cachemodel::Error>(())
//! ```

mod cache;
mod config;
mod error;
mod hooks;
mod loader;
mod store;

pub use cache::{Cache, MemoryCache, NoCache};
pub use config::{DEFAULT_MODEL_INDEX, LoaderConfig};
pub use error::{Error, Result};
pub use hooks::{NoPostProcess, PostProcess};
pub use loader::ModelLoader;
pub use store::{ArchiveStore, DirectoryStore, MemoryStore};

pub use cachemodel_decode::{DecodeError, ModelDefinition, RenderPriority};
