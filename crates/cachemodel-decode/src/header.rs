//! Record header, read from the tail of the buffer.

use crate::error::{DecodeError, DecodeResult};
use crate::format::ModelFormat;
use crate::stream::ByteStream;

/// Priority byte value meaning "read one priority per face".
pub const PER_FACE_PRIORITY: u8 = 255;

/// Counts and section flags for one record.
///
/// Flags that the variant does not carry are always `false`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub format: ModelFormat,
    pub vertex_count: usize,
    pub face_count: usize,
    pub texture_triangle_count: usize,
    /// Old-style: per-face texture flag bytes follow.
    pub is_textured: bool,
    /// New-style: per-face render type bytes follow.
    pub has_face_render_types: bool,
    /// Shared render priority, or [`PER_FACE_PRIORITY`].
    pub priority: u8,
    pub has_face_alphas: bool,
    pub has_face_skins: bool,
    /// New-style: per-face texture ids follow.
    pub has_face_textures: bool,
    pub has_vertex_skins: bool,
    pub has_animation_groups: bool,
}

impl Header {
    /// Read the header for `format`, leaving the stream after the last
    /// header field.
    pub fn read(stream: &mut ByteStream<'_>, format: ModelFormat) -> DecodeResult<Self> {
        let offset = format.header_offset();
        let start = stream
            .len()
            .checked_sub(offset)
            .ok_or(DecodeError::BufferUnderflow {
                offset: 0,
                needed: offset,
                remaining: stream.len(),
            })?;
        stream.seek(start)?;

        let old_style = format.old_style_textures();
        let vertex_count = usize::from(stream.read_u16()?);
        let face_count = usize::from(stream.read_u16()?);
        let texture_triangle_count = usize::from(stream.read_u8()?);
        let is_textured = old_style && read_flag(stream)?;
        let has_face_render_types = !old_style && read_flag(stream)?;
        let priority = stream.read_u8()?;
        let has_face_alphas = read_flag(stream)?;
        let has_face_skins = read_flag(stream)?;
        let has_face_textures = !old_style && read_flag(stream)?;
        let has_vertex_skins = read_flag(stream)?;
        let has_animation_groups = format.allows_animation_groups() && read_flag(stream)?;

        Ok(Self {
            format,
            vertex_count,
            face_count,
            texture_triangle_count,
            is_textured,
            has_face_render_types,
            priority,
            has_face_alphas,
            has_face_skins,
            has_face_textures,
            has_vertex_skins,
            has_animation_groups,
        })
    }

    #[must_use]
    pub fn old_style_textures(&self) -> bool {
        self.format.old_style_textures()
    }

    #[must_use]
    pub fn has_face_priorities(&self) -> bool {
        self.priority == PER_FACE_PRIORITY
    }
}

/// Section flags are enabled only by the exact value 1.
fn read_flag(stream: &mut ByteStream<'_>) -> DecodeResult<bool> {
    Ok(stream.read_u8()? == 1)
}
