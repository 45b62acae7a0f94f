//! Format variant detection.

use std::fmt;

/// The four on-disk layouts of a model record.
///
/// The variant is chosen by the signed 16-bit trailer stored in the last two
/// bytes of the record. Anything that is not a known marker is a legacy
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    /// Trailer `-3`: new-style textures with animation groups.
    Type3,
    /// Trailer `-2`: old-style textures with animation groups.
    Type2,
    /// Trailer `-1`: new-style textures.
    Type1,
    /// No recognised trailer: old-style textures.
    Legacy,
}

impl ModelFormat {
    /// Pick the variant for a whole record.
    ///
    /// Records too short to carry a trailer are treated as legacy; the header
    /// read that follows reports the underflow.
    #[must_use]
    pub fn detect(data: &[u8]) -> Self {
        match data {
            [.., hi, lo] => Self::from_trailer(i16::from_be_bytes([*hi, *lo])),
            _ => Self::Legacy,
        }
    }

    #[must_use]
    pub fn from_trailer(trailer: i16) -> Self {
        match trailer {
            -3 => Self::Type3,
            -2 => Self::Type2,
            -1 => Self::Type1,
            _ => Self::Legacy,
        }
    }

    /// Distance of the header from the end of the record.
    #[must_use]
    pub fn header_offset(self) -> usize {
        match self {
            Self::Type3 => 26,
            Self::Type2 | Self::Type1 => 23,
            Self::Legacy => 18,
        }
    }

    /// Whether texture data uses the old per-face flag layout.
    #[must_use]
    pub fn old_style_textures(self) -> bool {
        matches!(self, Self::Type2 | Self::Legacy)
    }

    /// Whether the header carries an animation group flag.
    #[must_use]
    pub fn allows_animation_groups(self) -> bool {
        matches!(self, Self::Type3 | Self::Type2)
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Type3 => "type3",
            Self::Type2 => "type2",
            Self::Type1 => "type1",
            Self::Legacy => "legacy",
        };
        f.write_str(name)
    }
}
