//! Decode error types.

use thiserror::Error;

/// Errors produced while decoding a model record.
///
/// Any of these is fatal for the record being decoded: the decoder never
/// returns a partially populated definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A read ran past the end of the record.
    #[error("buffer underflow at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    BufferUnderflow {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The face index chain produced an index outside the vertex table.
    #[error("face {face} references vertex {index}, but the model has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        face: usize,
        index: i32,
        vertex_count: usize,
    },

    /// A face points at a texture triangle that does not exist.
    #[error(
        "face {face} references texture triangle {coordinate}, but the model has {texture_count}"
    )]
    TextureCoordinateOutOfRange {
        face: usize,
        coordinate: u8,
        texture_count: usize,
    },
}

/// Result alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
