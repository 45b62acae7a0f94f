//! Decode packed model records from a game asset archive.
//!
//! This crate turns the raw bytes of one model record into a
//! [`ModelDefinition`]. All functions are pure and synchronous: the caller
//! fetches the bytes, decides where to decode them and what to cache.
//!
//! # Format overview
//!
//! A record ends with a two-byte marker that selects one of four layouts
//! ([`ModelFormat`]). The header sits a fixed distance from the end of the
//! record; everything else is read from the start in an order that depends
//! only on the header ([`layout::sections`]). Geometry is delta-encoded with
//! one- or two-byte "smart" integers.
//!
//! # Key functions
//!
//! - [`decode_model`]: Decode a whole record
//! - [`ByteStream`]: Cursor with the primitive reads used by the format
//! - [`unpack_indices`]: Decode the face index delta chain
//! - [`unpack_vertices`]: Delta-decode X/Y/Z vertex positions
//! - [`reconcile_face_flags`]: Rebuild texture fields from legacy face flags
//! - [`prune_texture_coordinates`]: Drop texture mappings that restate a face

mod decode;
mod definition;
mod error;

pub mod format;
pub mod header;
pub mod indices;
pub mod layout;
pub mod stream;
pub mod texcoords;
pub mod vertices;

pub use decode::decode_model;
pub use definition::{DerivedData, ModelDefinition, NEUTRAL_FACE_COLOR, RenderPriority};
pub use error::{DecodeError, DecodeResult};
pub use format::ModelFormat;
pub use header::Header;
pub use indices::{IndexChain, unpack_indices};
pub use stream::ByteStream;
pub use texcoords::{prune_texture_coordinates, reconcile_face_flags};
pub use vertices::unpack_vertices;

pub use glam;
