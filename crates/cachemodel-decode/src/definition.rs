//! The decoded model definition.

use glam::{IVec3, Vec2, Vec3};

/// Face color assigned to faces whose color field carried a texture id.
pub const NEUTRAL_FACE_COLOR: u16 = 127;

/// Render priority of a model's faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPriority {
    /// Every face shares one priority.
    Uniform(u8),
    /// One priority per face.
    PerFace(Vec<u8>),
}

impl Default for RenderPriority {
    fn default() -> Self {
        Self::Uniform(0)
    }
}

impl RenderPriority {
    /// Priority of a single face.
    #[must_use]
    pub fn of_face(&self, face: usize) -> Option<u8> {
        match self {
            Self::Uniform(priority) => Some(*priority),
            Self::PerFace(priorities) => priorities.get(face).copied(),
        }
    }
}

/// Data filled in by post-processing hooks after decoding.
///
/// The decoder leaves every field empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedData {
    pub vertex_normals: Option<Vec<Vec3>>,
    pub face_uvs: Option<Vec<[Vec2; 3]>>,
    pub vertex_groups: Option<Vec<Vec<u16>>>,
    pub face_groups: Option<Vec<Vec<u16>>>,
}

/// A fully decoded model record.
///
/// Per-vertex arrays have `vertex_count` entries and per-face arrays have
/// `face_count` entries. Optional arrays are `None` when the record does not
/// carry them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDefinition {
    pub id: u32,
    pub vertex_count: usize,
    pub face_count: usize,
    pub texture_triangle_count: usize,

    pub vertex_x: Vec<i32>,
    pub vertex_y: Vec<i32>,
    pub vertex_z: Vec<i32>,
    pub vertex_skins: Option<Vec<u8>>,

    pub face_a: Vec<u16>,
    pub face_b: Vec<u16>,
    pub face_c: Vec<u16>,
    pub face_colors: Vec<u16>,
    pub face_alphas: Option<Vec<u8>>,
    pub priority: RenderPriority,
    pub face_render_types: Option<Vec<u8>>,
    pub face_skins: Option<Vec<u8>>,
    /// Texture id per face; `None` entries are untextured faces.
    pub face_textures: Option<Vec<Option<u16>>>,
    /// Texture triangle used to map each face; `None` entries use the
    /// face's own vertices.
    pub texture_coordinates: Option<Vec<Option<u8>>>,

    pub texture_a: Vec<i16>,
    pub texture_b: Vec<i16>,
    pub texture_c: Vec<i16>,
    pub texture_render_types: Option<Vec<u8>>,

    pub derived: DerivedData,
}

impl ModelDefinition {
    /// Position of vertex `index`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<IVec3> {
        Some(IVec3::new(
            *self.vertex_x.get(index)?,
            *self.vertex_y.get(index)?,
            *self.vertex_z.get(index)?,
        ))
    }

    /// Vertex indices of face `index`.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<[u16; 3]> {
        Some([
            *self.face_a.get(index)?,
            *self.face_b.get(index)?,
            *self.face_c.get(index)?,
        ])
    }

    /// Vertex indices of texture triangle `index`, as stored.
    #[must_use]
    pub fn texture_triangle(&self, index: usize) -> Option<[i16; 3]> {
        Some([
            *self.texture_a.get(index)?,
            *self.texture_b.get(index)?,
            *self.texture_c.get(index)?,
        ])
    }

    /// Whether any face carries a texture.
    #[must_use]
    pub fn is_textured(&self) -> bool {
        self.face_textures
            .as_ref()
            .is_some_and(|textures| textures.iter().any(Option::is_some))
    }

    /// Texture id of face `index`, if it is textured.
    #[must_use]
    pub fn face_texture(&self, index: usize) -> Option<u16> {
        self.face_textures.as_ref()?.get(index).copied().flatten()
    }

    /// Explicit texture triangle of face `index`, if one survived decoding.
    #[must_use]
    pub fn texture_coordinate(&self, index: usize) -> Option<u8> {
        self.texture_coordinates
            .as_ref()?
            .get(index)
            .copied()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ModelDefinition {
        ModelDefinition {
            vertex_count: 3,
            face_count: 1,
            vertex_x: vec![0, 10, 10],
            vertex_y: vec![0, 0, -5],
            vertex_z: vec![1, 1, 1],
            face_a: vec![0],
            face_b: vec![1],
            face_c: vec![2],
            face_colors: vec![NEUTRAL_FACE_COLOR],
            face_textures: Some(vec![None]),
            ..ModelDefinition::default()
        }
    }

    #[test]
    fn test_accessors() {
        let model = triangle();
        assert_eq!(model.vertex(2), Some(IVec3::new(10, -5, 1)));
        assert_eq!(model.vertex(3), None);
        assert_eq!(model.face(0), Some([0, 1, 2]));
        assert_eq!(model.face(1), None);
        assert_eq!(model.texture_triangle(0), None);
        assert_eq!(model.face_texture(0), None);
        assert_eq!(model.texture_coordinate(0), None);
        assert!(!model.is_textured());
    }

    #[test]
    fn test_priority_lookup() {
        assert_eq!(RenderPriority::Uniform(4).of_face(99), Some(4));
        let per_face = RenderPriority::PerFace(vec![1, 2]);
        assert_eq!(per_face.of_face(1), Some(2));
        assert_eq!(per_face.of_face(2), None);
    }
}
