//! Order of the sections that follow the header pass.
//!
//! After the header has been read from the tail, the record is re-read from
//! offset zero. Which sections are present, and the order they come in,
//! depend only on the header.

use crate::header::Header;

/// One contiguous field block in the forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// One byte per texture triangle. Old-style records store nothing and
    /// default every triangle to render type 0.
    TextureRenderTypes,
    /// One delta bitmask per vertex.
    VertexFlags,
    FaceRenderTypes,
    /// One index compression type per face.
    FaceCompression,
    FacePriorities,
    FaceSkins,
    /// Old-style texture flags, one per face.
    FaceTextureFlags,
    VertexSkins,
    /// Per-vertex animation groups; read and discarded.
    AnimationGroups,
    FaceAlphas,
    /// Smart deltas for the face index chain.
    FaceIndices,
    FaceTextures,
    TextureCoordinates,
    FaceColors,
    /// Smart deltas for the X, Y and Z axes.
    VertexPositions,
    /// Raw 16-bit vertex indices per texture triangle.
    TextureTriangles,
}

/// Sections of the forward pass, in stream order.
#[must_use]
pub fn sections(header: &Header) -> Vec<Section> {
    let old_style = header.old_style_textures();
    let candidates = [
        (header.texture_triangle_count > 0, Section::TextureRenderTypes),
        (true, Section::VertexFlags),
        (header.has_face_render_types, Section::FaceRenderTypes),
        (true, Section::FaceCompression),
        (header.has_face_priorities(), Section::FacePriorities),
        (header.has_face_skins, Section::FaceSkins),
        (header.is_textured, Section::FaceTextureFlags),
        (header.has_vertex_skins, Section::VertexSkins),
        (header.has_animation_groups && !old_style, Section::AnimationGroups),
        (header.has_face_alphas, Section::FaceAlphas),
        (true, Section::FaceIndices),
        (header.has_face_textures, Section::FaceTextures),
        (
            header.has_face_textures && header.texture_triangle_count > 0,
            Section::TextureCoordinates,
        ),
        (true, Section::FaceColors),
        (!old_style, Section::VertexPositions),
        (true, Section::TextureTriangles),
        (old_style, Section::VertexPositions),
        // Old-style records keep animation groups after the geometry.
        (header.has_animation_groups && old_style, Section::AnimationGroups),
    ];

    candidates
        .into_iter()
        .filter_map(|(present, section)| present.then_some(section))
        .collect()
}
