use core::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Hsl, InvalidColorFormat, hsl::rgb_to_hsl, parse::parse_hex_color};

/// An 8-bit sRGB color.
///
/// This is the canonical representation: hex strings and HSL triples are
/// derived from it and parsed back into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Rgb {
    /// Black color.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White color.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new color from red, green, and blue components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from integers of any range, clamping each one to 0-255.
    #[must_use]
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
    }

    /// Parses a hexadecimal color string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] unless the string is exactly six
    /// hexadecimal digits with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidColorFormat> {
        hex_to_rgb(hex)
    }

    /// Formats this color as an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Converts this color into HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Returns a copy with one channel replaced, clamping `value` to 0-255.
    #[must_use]
    pub fn with_channel(mut self, channel: RgbChannel, value: i32) -> Self {
        let value = clamp_channel(value);
        match channel {
            RgbChannel::Red => self.red = value,
            RgbChannel::Green => self.green = value,
            RgbChannel::Blue => self.blue = value,
        }
        self
    }

    /// Returns the components as an array in R, G, B order.
    #[must_use]
    pub const fn into_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// One channel of an [`Rgb`] color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RgbChannel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

/// Parses a hexadecimal color string into RGB.
///
/// Accepts an optional leading `#` followed by exactly six hexadecimal digits
/// in either case. Nothing else is trimmed or tolerated.
///
/// # Errors
///
/// Returns [`InvalidColorFormat`] for any other input, such as `"red"`,
/// `"#FFF"` or `"#12345"`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, InvalidColorFormat> {
    let (red, green, blue) = parse_hex_color(hex)?;
    Ok(Rgb::new(red, green, blue))
}

/// Formats a color as `#RRGGBB` with uppercase digits.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(value: Rgb) -> Self {
        (value.red, value.green, value.blue)
    }
}
