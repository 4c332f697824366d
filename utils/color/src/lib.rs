//! # Color conversions
//!
//! Exact conversions between the three ways a color is edited in tinta: a
//! hexadecimal string, an 8-bit RGB triple, and an integer HSL triple.
//!
//! [`Rgb`] is the canonical representation. Hex strings parse into it and
//! format out of it losslessly. HSL is derived from it with whole degrees and
//! whole percentages, so a trip through HSL and back can move a channel by a
//! few units for strongly saturated colors.
//!
//! ```
//! use tinta_color::{Hsl, Rgb, hex_to_rgb, rgb_to_hsl};
//!
//! let rgb = hex_to_rgb("#3B82F6").unwrap();
//! assert_eq!(rgb, Rgb::new(59, 130, 246));
//! assert_eq!(rgb_to_hsl(rgb), Hsl::new(217, 91, 60));
//! ```
//!
//! All conversions except hex parsing are total over their input types.

mod hsl;
pub use hsl::{Hsl, HslChannel, hsl_to_rgb, rgb_to_hsl};
mod parse;
mod rgb;
pub use rgb::{Rgb, RgbChannel, hex_to_rgb, rgb_to_hex};

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Error returned when a string is not a six-digit hexadecimal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidColorFormat {
    /// The string does not hold exactly 6 hexadecimal digits after the
    /// optional `#`.
    #[error("expected exactly 6 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal byte was found at the given index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}
