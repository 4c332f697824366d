//! Settings for a color editing session.

use crate::color::{InvalidColorFormat, Rgb, hex_to_rgb};

/// Initial color of a new session.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// [`DEFAULT_COLOR`] as RGB.
pub const DEFAULT_RGB: Rgb = Rgb::new(0x3B, 0x82, 0xF6);

/// Configuration for a [`ColorSync`](crate::ColorSync).
///
/// With the `serde` feature this deserializes from a table such as:
///
/// ```toml
/// initial = "#FF5722"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncConfig {
    /// Hex string of the color the session starts with.
    pub initial: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            initial: DEFAULT_COLOR.to_owned(),
        }
    }
}

impl SyncConfig {
    /// Creates a configuration starting from the given hex color.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
        }
    }

    /// Parses the initial color.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if `initial` is not a complete hex color.
    pub fn initial_rgb(&self) -> Result<Rgb, InvalidColorFormat> {
        hex_to_rgb(&self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_blue() {
        assert_eq!(SyncConfig::default().initial_rgb(), Ok(DEFAULT_RGB));
        assert_eq!(DEFAULT_RGB, Rgb::new(59, 130, 246));
    }

    #[test]
    fn incomplete_initial_color_is_reported() {
        assert_eq!(
            SyncConfig::new("#3B").initial_rgb(),
            Err(InvalidColorFormat::InvalidLength)
        );
    }
}
