//! Whole-record decoding.

use crate::definition::{DerivedData, ModelDefinition, RenderPriority};
use crate::error::{DecodeError, DecodeResult};
use crate::format::ModelFormat;
use crate::header::Header;
use crate::indices::{FaceIndices, unpack_indices};
use crate::layout::{Section, sections};
use crate::stream::ByteStream;
use crate::texcoords::{
    TextureTriangles, prune_texture_coordinates, read_face_textures, read_texture_coordinates,
    read_texture_triangles, reconcile_face_flags,
};
use crate::vertices::{VertexPositions, unpack_vertices};

/// Decode one model record.
///
/// The record's format is picked from its trailer, the header is read from
/// the tail, and the remaining sections are read from the start of the
/// buffer. The returned definition has empty [`DerivedData`].
pub fn decode_model(id: u32, data: &[u8]) -> DecodeResult<ModelDefinition> {
    let format = ModelFormat::detect(data);
    let mut stream = ByteStream::new(data);
    let header = Header::read(&mut stream, format)?;

    stream.rewind();
    let mut fields = RawFields::default();
    for section in sections(&header) {
        fields.read(section, &header, &mut stream)?;
    }

    fields.finish(id, &header)
}

/// Section contents as read, before reconciliation.
#[derive(Default)]
struct RawFields<'a> {
    texture_render_types: Option<Vec<u8>>,
    vertex_flags: &'a [u8],
    face_render_types: Option<Vec<u8>>,
    compression_types: &'a [u8],
    face_priorities: Option<Vec<u8>>,
    face_skins: Option<Vec<u8>>,
    face_texture_flags: Option<&'a [u8]>,
    vertex_skins: Option<Vec<u8>>,
    face_alphas: Option<Vec<u8>>,
    faces: FaceIndices,
    face_textures: Option<Vec<Option<u16>>>,
    texture_coordinates: Option<Vec<Option<u8>>>,
    face_colors: Vec<u16>,
    vertices: VertexPositions,
    texture_triangles: TextureTriangles,
}

impl<'a> RawFields<'a> {
    fn read(
        &mut self,
        section: Section,
        header: &Header,
        stream: &mut ByteStream<'a>,
    ) -> DecodeResult<()> {
        let vertex_count = header.vertex_count;
        let face_count = header.face_count;
        let texture_count = header.texture_triangle_count;

        match section {
            Section::TextureRenderTypes => {
                self.texture_render_types = Some(if header.old_style_textures() {
                    vec![0; texture_count]
                } else {
                    stream.read_bytes(texture_count)?.to_vec()
                });
            }
            Section::VertexFlags => self.vertex_flags = stream.read_bytes(vertex_count)?,
            Section::FaceRenderTypes => {
                self.face_render_types = Some(stream.read_bytes(face_count)?.to_vec());
            }
            Section::FaceCompression => self.compression_types = stream.read_bytes(face_count)?,
            Section::FacePriorities => {
                self.face_priorities = Some(stream.read_bytes(face_count)?.to_vec());
            }
            Section::FaceSkins => self.face_skins = Some(stream.read_bytes(face_count)?.to_vec()),
            Section::FaceTextureFlags => {
                self.face_texture_flags = Some(stream.read_bytes(face_count)?);
            }
            Section::VertexSkins => {
                self.vertex_skins = Some(stream.read_bytes(vertex_count)?.to_vec());
            }
            Section::AnimationGroups => skip_animation_groups(stream, vertex_count)?,
            Section::FaceAlphas => self.face_alphas = Some(stream.read_bytes(face_count)?.to_vec()),
            Section::FaceIndices => {
                self.faces = unpack_indices(stream, self.compression_types, vertex_count)?;
            }
            Section::FaceTextures => {
                self.face_textures = Some(read_face_textures(stream, face_count)?);
            }
            Section::TextureCoordinates => {
                let textures = self.face_textures.as_deref().unwrap_or_default();
                self.texture_coordinates = Some(read_texture_coordinates(stream, textures)?);
            }
            Section::FaceColors => {
                self.face_colors = (0..face_count)
                    .map(|_| stream.read_u16())
                    .collect::<DecodeResult<_>>()?;
            }
            Section::VertexPositions => {
                self.vertices = unpack_vertices(stream, self.vertex_flags)?;
            }
            Section::TextureTriangles => {
                let render_types = if header.old_style_textures() {
                    None
                } else {
                    self.texture_render_types.as_deref()
                };
                self.texture_triangles =
                    read_texture_triangles(stream, texture_count, render_types)?;
            }
        }
        Ok(())
    }

    fn finish(self, id: u32, header: &Header) -> DecodeResult<ModelDefinition> {
        let mut face_colors = self.face_colors;
        let mut face_render_types = self.face_render_types;
        let mut face_textures = self.face_textures;
        let mut texture_coordinates = self.texture_coordinates;

        if let Some(flags) = self.face_texture_flags {
            let reconciled = reconcile_face_flags(flags, &mut face_colors);
            if reconciled.render_types.is_some() {
                face_render_types = reconciled.render_types;
            }
            if reconciled.textures.is_some() {
                face_textures = reconciled.textures;
            }
            texture_coordinates = Some(reconciled.coordinates);
        }

        let faces = self.faces;
        let triangles = self.texture_triangles;
        texture_coordinates = match texture_coordinates {
            Some(coordinates) if header.is_textured => prune_texture_coordinates(
                coordinates,
                [faces.a.as_slice(), faces.b.as_slice(), faces.c.as_slice()],
                &triangles,
            )?,
            Some(coordinates) => {
                check_texture_coordinates(&coordinates, header.texture_triangle_count)?;
                Some(coordinates)
            }
            None => None,
        };

        let priority = if header.has_face_priorities() {
            RenderPriority::PerFace(self.face_priorities.unwrap_or_default())
        } else {
            RenderPriority::Uniform(header.priority)
        };

        Ok(ModelDefinition {
            id,
            vertex_count: header.vertex_count,
            face_count: header.face_count,
            texture_triangle_count: header.texture_triangle_count,
            vertex_x: self.vertices.x,
            vertex_y: self.vertices.y,
            vertex_z: self.vertices.z,
            vertex_skins: self.vertex_skins,
            face_a: faces.a,
            face_b: faces.b,
            face_c: faces.c,
            face_colors,
            face_alphas: self.face_alphas,
            priority,
            face_render_types,
            face_skins: self.face_skins,
            face_textures,
            texture_coordinates,
            texture_a: triangles.a,
            texture_b: triangles.b,
            texture_c: triangles.c,
            texture_render_types: self.texture_render_types,
            derived: DerivedData::default(),
        })
    }
}

/// Skip per-vertex animation groups: a count byte, then that many
/// (group, scale) byte pairs.
fn skip_animation_groups(stream: &mut ByteStream<'_>, vertex_count: usize) -> DecodeResult<()> {
    for _ in 0..vertex_count {
        let length = usize::from(stream.read_u8()?);
        stream.skip(length * 2)?;
    }
    Ok(())
}

fn check_texture_coordinates(coordinates: &[Option<u8>], texture_count: usize) -> DecodeResult<()> {
    let out_of_range = coordinates
        .iter()
        .enumerate()
        .find_map(|(face, &c)| {
            c.filter(|&c| usize::from(c) >= texture_count)
                .map(|c| (face, c))
        });
    match out_of_range {
        Some((face, coordinate)) => Err(DecodeError::TextureCoordinateOutOfRange {
            face,
            coordinate,
            texture_count,
        }),
        None => Ok(()),
    }
}
