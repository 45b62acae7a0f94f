//! Texture mapping: texture triangles, legacy face flags and coordinate
//! pruning.

use crate::definition::NEUTRAL_FACE_COLOR;
use crate::error::{DecodeError, DecodeResult};
use crate::stream::ByteStream;

/// Legacy face flag bit: the face uses render type 1.
const FLAG_RENDER_TYPE: u8 = 1;
/// Legacy face flag bit: the face color holds a texture id.
const FLAG_TEXTURED: u8 = 2;

/// Color value meaning "no texture" when a color is read as a texture id.
const NO_TEXTURE: u16 = 0xFFFF;

/// Vertex indices of the texture triangles, one array per corner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextureTriangles {
    pub a: Vec<i16>,
    pub b: Vec<i16>,
    pub c: Vec<i16>,
}

/// Read raw texture triangle indices.
///
/// With `render_types` set, only triangles of render type 0 carry indices;
/// the rest keep zeros.
pub fn read_texture_triangles(
    stream: &mut ByteStream<'_>,
    count: usize,
    render_types: Option<&[u8]>,
) -> DecodeResult<TextureTriangles> {
    let mut triangles = TextureTriangles {
        a: vec![0; count],
        b: vec![0; count],
        c: vec![0; count],
    };
    for i in 0..count {
        let stored = render_types.is_none_or(|types| types.get(i).copied().unwrap_or(0) == 0);
        if stored {
            triangles.a[i] = stream.read_i16()?;
            triangles.b[i] = stream.read_i16()?;
            triangles.c[i] = stream.read_i16()?;
        }
    }
    Ok(triangles)
}

/// Read new-style face texture ids: stored plus one, zero meaning none.
pub fn read_face_textures(
    stream: &mut ByteStream<'_>,
    face_count: usize,
) -> DecodeResult<Vec<Option<u16>>> {
    (0..face_count)
        .map(|_| Ok(stream.read_u16()?.checked_sub(1)))
        .collect()
}

/// Read new-style texture coordinates for the textured faces.
///
/// Untextured faces consume nothing and stay `None`.
pub fn read_texture_coordinates(
    stream: &mut ByteStream<'_>,
    face_textures: &[Option<u16>],
) -> DecodeResult<Vec<Option<u8>>> {
    face_textures
        .iter()
        .map(|texture| match texture {
            Some(_) => Ok(stream.read_u8()?.checked_sub(1)),
            None => Ok(None),
        })
        .collect()
}

/// Face texture data rebuilt from legacy per-face flag bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciledFaces {
    /// Render types, kept only when some face sets one.
    pub render_types: Option<Vec<u8>>,
    /// Texture ids, kept only when some face names a real texture.
    pub textures: Option<Vec<Option<u16>>>,
    pub coordinates: Vec<Option<u8>>,
}

/// Apply legacy face flags to the face colors.
///
/// A textured face's color is its texture id; the color is replaced with
/// [`NEUTRAL_FACE_COLOR`] and the upper six flag bits select the texture
/// triangle.
pub fn reconcile_face_flags(flags: &[u8], colors: &mut [u16]) -> ReconciledFaces {
    let mut render_types = Vec::with_capacity(flags.len());
    let mut textures = Vec::with_capacity(flags.len());
    let mut coordinates = Vec::with_capacity(flags.len());
    let mut uses_render_types = false;
    let mut uses_textures = false;

    for (&flag, color) in flags.iter().zip(colors.iter_mut()) {
        if flag & FLAG_RENDER_TYPE != 0 {
            render_types.push(1);
            uses_render_types = true;
        } else {
            render_types.push(0);
        }

        if flag & FLAG_TEXTURED != 0 {
            let texture = Some(*color).filter(|&id| id != NO_TEXTURE);
            uses_textures |= texture.is_some();
            textures.push(texture);
            coordinates.push(Some(flag >> 2));
            *color = NEUTRAL_FACE_COLOR;
        } else {
            textures.push(None);
            coordinates.push(None);
        }
    }

    ReconciledFaces {
        render_types: uses_render_types.then_some(render_types),
        textures: uses_textures.then_some(textures),
        coordinates,
    }
}

/// Drop texture coordinates that only restate a face's own vertices.
///
/// A coordinate is cleared when its texture triangle has the same three
/// vertex indices as the face, in order. Returns `None` when no face keeps
/// a coordinate.
pub fn prune_texture_coordinates(
    mut coordinates: Vec<Option<u8>>,
    faces: [&[u16]; 3],
    triangles: &TextureTriangles,
) -> DecodeResult<Option<Vec<Option<u8>>>> {
    let texture_count = triangles.a.len();
    let mut uses_coordinates = false;

    for (face, slot) in coordinates.iter_mut().enumerate() {
        let Some(coordinate) = *slot else {
            continue;
        };
        let t = usize::from(coordinate);
        if t >= texture_count {
            return Err(DecodeError::TextureCoordinateOutOfRange {
                face,
                coordinate,
                texture_count,
            });
        }

        let redundant = faces[0][face] == unsigned(triangles.a[t])
            && faces[1][face] == unsigned(triangles.b[t])
            && faces[2][face] == unsigned(triangles.c[t]);
        if redundant {
            *slot = None;
        } else {
            uses_coordinates = true;
        }
    }

    Ok(uses_coordinates.then_some(coordinates))
}

/// Texture triangle indices compare as unsigned 16-bit values.
fn unsigned(index: i16) -> u16 {
    u16::from_be_bytes(index.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangles(list: &[[i16; 3]]) -> TextureTriangles {
        TextureTriangles {
            a: list.iter().map(|t| t[0]).collect(),
            b: list.iter().map(|t| t[1]).collect(),
            c: list.iter().map(|t| t[2]).collect(),
        }
    }

    #[test]
    fn test_textured_flag_moves_color_to_texture() {
        let flags = [(5 << 2) | FLAG_TEXTURED];
        let mut colors = [0x1234];
        let faces = reconcile_face_flags(&flags, &mut colors);

        assert_eq!(faces.coordinates, vec![Some(5)]);
        assert_eq!(faces.textures, Some(vec![Some(0x1234)]));
        assert_eq!(faces.render_types, None);
        assert_eq!(colors, [NEUTRAL_FACE_COLOR]);
    }

    #[test]
    fn test_render_type_flag() {
        let flags = [0, FLAG_RENDER_TYPE];
        let mut colors = [10, 20];
        let faces = reconcile_face_flags(&flags, &mut colors);

        assert_eq!(faces.render_types, Some(vec![0, 1]));
        assert_eq!(faces.textures, None);
        assert_eq!(faces.coordinates, vec![None, None]);
        assert_eq!(colors, [10, 20]);
    }

    #[test]
    fn test_missing_texture_id_does_not_enable_textures() {
        let flags = [FLAG_TEXTURED];
        let mut colors = [NO_TEXTURE];
        let faces = reconcile_face_flags(&flags, &mut colors);

        assert_eq!(faces.textures, None);
        assert_eq!(faces.coordinates, vec![Some(0)]);
        assert_eq!(colors, [NEUTRAL_FACE_COLOR]);
    }

    #[test]
    fn test_prune_all_redundant() {
        let a: [u16; 2] = [0, 3];
        let b: [u16; 2] = [1, 4];
        let c: [u16; 2] = [2, 5];
        let tris = triangles(&[[0, 1, 2], [3, 4, 5]]);
        let pruned =
            prune_texture_coordinates(vec![Some(0), Some(1)], [&a, &b, &c], &tris).unwrap();
        assert_eq!(pruned, None);
    }

    #[test]
    fn test_prune_keeps_mismatch() {
        let a: [u16; 2] = [0, 3];
        let b: [u16; 2] = [1, 4];
        let c: [u16; 2] = [2, 5];
        let tris = triangles(&[[0, 1, 2], [3, 5, 4]]);
        let pruned =
            prune_texture_coordinates(vec![Some(0), Some(1)], [&a, &b, &c], &tris).unwrap();
        assert_eq!(pruned, Some(vec![None, Some(1)]));
    }

    #[test]
    fn test_prune_compares_unsigned() {
        let a: [u16; 1] = [0xFFFF];
        let b: [u16; 1] = [0];
        let c: [u16; 1] = [1];
        let tris = triangles(&[[-1, 0, 1]]);
        let pruned = prune_texture_coordinates(vec![Some(0)], [&a, &b, &c], &tris).unwrap();
        assert_eq!(pruned, None);
    }

    #[test]
    fn test_prune_rejects_out_of_range() {
        let face: [u16; 1] = [0];
        let tris = triangles(&[[0, 0, 0]]);
        assert_eq!(
            prune_texture_coordinates(vec![Some(1)], [&face, &face, &face], &tris),
            Err(DecodeError::TextureCoordinateOutOfRange {
                face: 0,
                coordinate: 1,
                texture_count: 1,
            })
        );
    }

    #[test]
    fn test_render_typed_triangles_are_skipped() {
        let data = [0, 1, 0, 2, 0, 3];
        let mut stream = ByteStream::new(&data);
        let tris = read_texture_triangles(&mut stream, 2, Some(&[1, 0])).unwrap();
        assert_eq!(tris, triangles(&[[0, 0, 0], [1, 2, 3]]));
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_new_style_texture_fields() {
        let data = [0, 0, 0, 8, 3, 0];
        let mut stream = ByteStream::new(&data);
        let textures = read_face_textures(&mut stream, 2).unwrap();
        assert_eq!(textures, vec![None, Some(7)]);
        let coordinates = read_texture_coordinates(&mut stream, &textures).unwrap();
        assert_eq!(coordinates, vec![None, Some(2)]);
        assert_eq!(stream.remaining(), 1);
    }
}
