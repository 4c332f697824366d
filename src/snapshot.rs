//! The published state of a color being edited.

use core::fmt::{self, Display};

use crate::color::{Hsl, Rgb};

/// Which representation was edited last and is therefore the source the other
/// two are derived from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Authority {
    /// The hexadecimal string.
    #[default]
    Hex,
    /// The RGB channel triple.
    Rgb,
    /// The HSL triple.
    Hsl,
}

impl Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        })
    }
}

/// A consistent view of one color in all three representations.
///
/// The hex field holds whatever the user last typed while hex is the
/// authority, which may be an incomplete entry such as `#3B`. In that case
/// `rgb` and `hsl` still describe the last complete color.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorSnapshot {
    pub(crate) hex: String,
    pub(crate) rgb: Rgb,
    pub(crate) hsl: Hsl,
    pub(crate) authority: Authority,
}

impl ColorSnapshot {
    /// Builds a hex-authoritative snapshot from a complete color.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            authority: Authority::Hex,
        }
    }

    /// The hexadecimal field, verbatim as last entered or derived.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The RGB triple.
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The HSL triple.
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The representation the others were derived from.
    #[must_use]
    pub const fn authority(&self) -> Authority {
        self.authority
    }
}

impl Display for ColorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  {}  [{}]",
            self.hex, self.rgb, self.hsl, self.authority
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_all_three_forms() {
        let snapshot = ColorSnapshot::from_rgb(Rgb::new(59, 130, 246));
        assert_eq!(
            snapshot.to_string(),
            "#3B82F6  rgb(59, 130, 246)  hsl(217, 91%, 60%)  [hex]"
        );
    }
}
