//! Vertex unpacking.

use crate::error::DecodeResult;
use crate::stream::ByteStream;

/// Vertex flag bit: an X delta follows.
pub const HAS_DELTA_X: u8 = 1;
/// Vertex flag bit: a Y delta follows.
pub const HAS_DELTA_Y: u8 = 2;
/// Vertex flag bit: a Z delta follows.
pub const HAS_DELTA_Z: u8 = 4;

/// Absolute vertex positions, one array per axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexPositions {
    pub x: Vec<i32>,
    pub y: Vec<i32>,
    pub z: Vec<i32>,
}

/// Unpack delta-encoded vertex positions.
///
/// The axes are stored one after the other. Within an axis, a vertex whose
/// flag has the axis bit set adds a smart delta to the running position;
/// other vertices repeat the previous position.
pub fn unpack_vertices(stream: &mut ByteStream<'_>, flags: &[u8]) -> DecodeResult<VertexPositions> {
    Ok(VertexPositions {
        x: unpack_axis(stream, flags, HAS_DELTA_X)?,
        y: unpack_axis(stream, flags, HAS_DELTA_Y)?,
        z: unpack_axis(stream, flags, HAS_DELTA_Z)?,
    })
}

fn unpack_axis(stream: &mut ByteStream<'_>, flags: &[u8], mask: u8) -> DecodeResult<Vec<i32>> {
    let mut position = 0_i32;
    flags
        .iter()
        .map(|&flag| {
            if flag & mask != 0 {
                position = position.wrapping_add(stream.read_smart_signed()?);
            }
            Ok(position)
        })
        .collect()
}
