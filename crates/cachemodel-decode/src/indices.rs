//! Face index unpacking.
//!
//! Faces are stored as a stream of compression type bytes plus smart-encoded
//! deltas. Three registers carry the previous face's indices so that strips
//! and fans only pay for the one vertex that changes.

use crate::error::{DecodeError, DecodeResult};
use crate::stream::ByteStream;

/// Register state of the face index delta chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexChain {
    pub i1: i32,
    pub i2: i32,
    pub i3: i32,
}

impl IndexChain {
    /// Apply one compression type, pulling deltas from `next_delta`.
    ///
    /// Returns the face's indices after the step. Unknown compression types
    /// consume nothing and repeat the previous face.
    pub fn step<F>(&mut self, compression: u8, mut next_delta: F) -> DecodeResult<[i32; 3]>
    where
        F: FnMut() -> DecodeResult<i32>,
    {
        match compression {
            1 => {
                self.i1 = self.i3.wrapping_add(next_delta()?);
                self.i2 = self.i1.wrapping_add(next_delta()?);
                self.i3 = self.i2.wrapping_add(next_delta()?);
            }
            2 => {
                self.i2 = self.i3;
                self.i3 = self.i3.wrapping_add(next_delta()?);
            }
            3 => {
                self.i1 = self.i3;
                self.i3 = self.i3.wrapping_add(next_delta()?);
            }
            4 => {
                std::mem::swap(&mut self.i1, &mut self.i2);
                self.i3 = self.i3.wrapping_add(next_delta()?);
            }
            _ => {}
        }
        Ok([self.i1, self.i2, self.i3])
    }
}

/// Unpacked face vertex indices, one array per corner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceIndices {
    pub a: Vec<u16>,
    pub b: Vec<u16>,
    pub c: Vec<u16>,
}

/// Unpack face indices for every entry in `compression_types`.
///
/// Every index is checked against `vertex_count`.
pub fn unpack_indices(
    stream: &mut ByteStream<'_>,
    compression_types: &[u8],
    vertex_count: usize,
) -> DecodeResult<FaceIndices> {
    let face_count = compression_types.len();
    let mut faces = FaceIndices {
        a: Vec::with_capacity(face_count),
        b: Vec::with_capacity(face_count),
        c: Vec::with_capacity(face_count),
    };

    let mut chain = IndexChain::default();
    for (face, &compression) in compression_types.iter().enumerate() {
        let [a, b, c] = chain.step(compression, || stream.read_smart_signed())?;
        faces.a.push(checked_index(face, a, vertex_count)?);
        faces.b.push(checked_index(face, b, vertex_count)?);
        faces.c.push(checked_index(face, c, vertex_count)?);
    }

    Ok(faces)
}

fn checked_index(face: usize, index: i32, vertex_count: usize) -> DecodeResult<u16> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < vertex_count)
        .and_then(|i| u16::try_from(i).ok())
        .ok_or(DecodeError::VertexIndexOutOfRange {
            face,
            index,
            vertex_count,
        })
}
