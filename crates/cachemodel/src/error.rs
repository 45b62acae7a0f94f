//! Loader error types.

use cachemodel_decode::DecodeError;
use thiserror::Error;

/// Errors returned by [`ModelLoader`](crate::ModelLoader).
///
/// A model that is absent from the archive is not an error; lookups return
/// `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum Error {
    /// The record exists but could not be decoded.
    #[error("model {model_id} is malformed: {source}")]
    Malformed {
        model_id: u32,
        #[source]
        source: DecodeError,
    },

    /// The archive store could not be read.
    #[error("archive store error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, Error>;
