//! Builds synthetic model records for tests.

#![allow(dead_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Type3,
    Type2,
    Type1,
    Legacy,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Type3, Variant::Type2, Variant::Type1, Variant::Legacy];

    fn old_style(self) -> bool {
        matches!(self, Variant::Type2 | Variant::Legacy)
    }

    fn animation_groups(self) -> bool {
        matches!(self, Variant::Type3 | Variant::Type2)
    }

    fn header_offset(self) -> usize {
        match self {
            Variant::Type3 => 26,
            Variant::Type2 | Variant::Type1 => 23,
            Variant::Legacy => 18,
        }
    }

    fn trailer(self) -> Option<i16> {
        match self {
            Variant::Type3 => Some(-3),
            Variant::Type2 => Some(-2),
            Variant::Type1 => Some(-1),
            Variant::Legacy => None,
        }
    }
}

/// High-level description of a record. Fields that do not apply to the
/// chosen variant are ignored by [`Fixture::encode`].
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub vertices: Vec<[i32; 3]>,
    pub faces: Vec<[u16; 3]>,
    pub colors: Vec<u16>,
    /// `None` writes priority 255 followed by `face_priorities`.
    pub priority: Option<u8>,
    pub face_priorities: Vec<u8>,
    pub face_render_types: Option<Vec<u8>>,
    pub face_skins: Option<Vec<u8>>,
    pub vertex_skins: Option<Vec<u8>>,
    pub face_alphas: Option<Vec<u8>>,
    /// Per-vertex (group, scale) pairs.
    pub animation_groups: Option<Vec<Vec<(u8, u8)>>>,
    pub texture_triangles: Vec<[i16; 3]>,
    /// New-style only; one per texture triangle.
    pub texture_render_types: Vec<u8>,
    /// Old-style only.
    pub face_texture_flags: Option<Vec<u8>>,
    /// New-style only; raw stored values (texture id plus one).
    pub face_textures: Option<Vec<u16>>,
    /// New-style only; raw bytes for faces whose stored texture is non-zero.
    pub texture_coordinates: Vec<u8>,
}

impl Fixture {
    /// A unit quad made of two triangles.
    pub fn quad() -> Self {
        Self {
            vertices: vec![[0, 0, 0], [128, 0, 0], [128, 0, 128], [0, -300, 128]],
            faces: vec![[0, 1, 2], [0, 2, 3]],
            colors: vec![0x1111, 0x2222],
            priority: Some(3),
            ..Self::default()
        }
    }

    pub fn encode(&self, variant: Variant) -> Vec<u8> {
        let old_style = variant.old_style();
        let mut w = Writer::default();

        if !self.texture_triangles.is_empty() && !old_style {
            w.bytes(&self.texture_render_types);
        }

        let mut flags = Vec::new();
        let mut deltas: [Vec<i32>; 3] = Default::default();
        let mut previous = [0; 3];
        for vertex in &self.vertices {
            let mut flag = 0;
            for axis in 0..3 {
                let delta = vertex[axis] - previous[axis];
                if delta != 0 {
                    flag |= 1 << axis;
                    deltas[axis].push(delta);
                }
            }
            previous = *vertex;
            flags.push(flag);
        }
        w.bytes(&flags);

        if let (Some(types), false) = (&self.face_render_types, old_style) {
            w.bytes(types);
        }
        w.bytes(&vec![1; self.faces.len()]);
        if self.priority.is_none() {
            w.bytes(&self.face_priorities);
        }
        if let Some(skins) = &self.face_skins {
            w.bytes(skins);
        }
        if let (Some(texture_flags), true) = (&self.face_texture_flags, old_style) {
            w.bytes(texture_flags);
        }
        if let Some(skins) = &self.vertex_skins {
            w.bytes(skins);
        }
        if variant.animation_groups() && !old_style {
            self.write_animation_groups(&mut w);
        }
        if let Some(alphas) = &self.face_alphas {
            w.bytes(alphas);
        }

        let mut i3 = 0_i32;
        for face in &self.faces {
            let [a, b, c] = face.map(i32::from);
            w.smart(a - i3);
            w.smart(b - a);
            w.smart(c - b);
            i3 = c;
        }

        if let (Some(textures), false) = (&self.face_textures, old_style) {
            for &texture in textures {
                w.u16(texture);
            }
            if !self.texture_triangles.is_empty() {
                w.bytes(&self.texture_coordinates);
            }
        }

        for &color in &self.colors {
            w.u16(color);
        }

        if old_style {
            self.write_texture_triangles(&mut w, true);
            write_deltas(&mut w, &deltas);
        } else {
            write_deltas(&mut w, &deltas);
            self.write_texture_triangles(&mut w, false);
        }

        if variant.animation_groups() && old_style {
            self.write_animation_groups(&mut w);
        }

        let mut data = w.0;
        data.extend(self.header(variant));
        data
    }

    fn header(&self, variant: Variant) -> Vec<u8> {
        let old_style = variant.old_style();
        let mut w = Writer::default();
        w.u16(u16::try_from(self.vertices.len()).unwrap());
        w.u16(u16::try_from(self.faces.len()).unwrap());
        w.u8(u8::try_from(self.texture_triangles.len()).unwrap());
        if old_style {
            w.flag(self.face_texture_flags.is_some());
        } else {
            w.flag(self.face_render_types.is_some());
        }
        w.u8(self.priority.unwrap_or(255));
        w.flag(self.face_alphas.is_some());
        w.flag(self.face_skins.is_some());
        if !old_style {
            w.flag(self.face_textures.is_some());
        }
        w.flag(self.vertex_skins.is_some());
        if variant.animation_groups() {
            w.flag(self.animation_groups.is_some());
        }

        let mut header = w.0;
        match variant.trailer() {
            Some(trailer) => {
                header.resize(variant.header_offset() - 2, 0);
                header.extend_from_slice(&trailer.to_be_bytes());
            }
            None => header.resize(variant.header_offset(), 0),
        }
        header
    }

    fn write_animation_groups(&self, w: &mut Writer) {
        if let Some(groups) = &self.animation_groups {
            for vertex in groups {
                w.u8(u8::try_from(vertex.len()).unwrap());
                for &(group, scale) in vertex {
                    w.u8(group);
                    w.u8(scale);
                }
            }
        }
    }

    fn write_texture_triangles(&self, w: &mut Writer, always: bool) {
        for (i, triangle) in self.texture_triangles.iter().enumerate() {
            let render_type = self.texture_render_types.get(i).copied().unwrap_or(0);
            if always || render_type == 0 {
                for &index in triangle {
                    w.0.extend_from_slice(&index.to_be_bytes());
                }
            }
        }
    }
}

fn write_deltas(w: &mut Writer, deltas: &[Vec<i32>; 3]) {
    for axis in deltas {
        for &delta in axis {
            w.smart(delta);
        }
    }
}

#[derive(Default)]
struct Writer(Vec<u8>);

impl Writer {
    fn u8(&mut self, value: u8) {
        self.0.push(value);
    }

    fn flag(&mut self, enabled: bool) {
        self.u8(u8::from(enabled));
    }

    fn u16(&mut self, value: u16) {
        self.0.extend_from_slice(&value.to_be_bytes());
    }

    fn bytes(&mut self, values: &[u8]) {
        self.0.extend_from_slice(values);
    }

    fn smart(&mut self, value: i32) {
        if (-64..64).contains(&value) {
            self.u8(u8::try_from(value + 64).unwrap());
        } else {
            assert!((-16384..16384).contains(&value), "smart out of range: {value}");
            self.u16(u16::try_from(value + 0xC000).unwrap());
        }
    }
}
