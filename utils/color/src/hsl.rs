use core::fmt::{self, Display};

use crate::Rgb;

/// Represents a color as hue, saturation, and lightness.
///
/// Hue is measured in whole degrees in the range 0 to 359; a hue of 360 is
/// the same angle as 0 and is stored as 0. Saturation and lightness are whole
/// percentages in the range 0 to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue angle in degrees (0 to 359)
    pub hue: u16,
    /// Saturation percentage (0 to 100)
    pub saturation: u8,
    /// Lightness percentage (0 to 100)
    pub lightness: u8,
}

impl Hsl {
    /// Largest accepted hue before wrapping back to 0.
    pub const HUE_TURN: u16 = 360;
    /// Largest saturation or lightness percentage.
    pub const PERCENT_MAX: u8 = 100;

    /// Creates a new HSL color, folding 360 degrees back to 0 and clamping
    /// saturation and lightness to 100.
    #[must_use]
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue.min(Self::HUE_TURN) % Self::HUE_TURN,
            saturation: saturation.min(Self::PERCENT_MAX),
            lightness: lightness.min(Self::PERCENT_MAX),
        }
    }

    /// Creates an HSL color from integers of any range.
    ///
    /// Hue is clamped to 0..=360 and then 360 folds to 0; saturation and
    /// lightness are clamped to 0..=100.
    #[must_use]
    pub fn clamped(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self {
            hue: clamp_hue(hue),
            saturation: clamp_percent(saturation),
            lightness: clamp_percent(lightness),
        }
    }

    /// Returns a copy with one component replaced, clamped the same way as
    /// [`Hsl::clamped`].
    #[must_use]
    pub fn with_channel(mut self, channel: HslChannel, value: i32) -> Self {
        match channel {
            HslChannel::Hue => self.hue = clamp_hue(value),
            HslChannel::Saturation => self.saturation = clamp_percent(value),
            HslChannel::Lightness => self.lightness = clamp_percent(value),
        }
        self
    }

    /// Converts this color into RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

/// One component of an [`Hsl`] color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HslChannel {
    /// Hue in degrees.
    Hue,
    /// Saturation percentage.
    Saturation,
    /// Lightness percentage.
    Lightness,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_hue(value: i32) -> u16 {
    (value.clamp(0, i32::from(Hsl::HUE_TURN)) as u16) % Hsl::HUE_TURN
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, i32::from(Hsl::PERCENT_MAX)) as u8
}

// JavaScript `Math.round`: halves go up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_half_up(value: f64) -> u16 {
    (value + 0.5).floor() as u16
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0 + 0.5).floor() as u8
}

/// Converts an RGB color into HSL.
///
/// Channels are normalized to 0.0-1.0 and the hue is taken from whichever
/// channel holds the maximum, checking red, then green, then blue. Gray
/// colors report hue 0 and saturation 0. Every component is rounded half-up
/// at the end.
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::cast_possible_truncation,
    clippy::suboptimal_flops
)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.red) / 255.0;
    let g = f64::from(rgb.green) / 255.0;
    let b = f64::from(rgb.blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s)
    };

    Hsl {
        hue: round_half_up(h * 360.0) % Hsl::HUE_TURN,
        saturation: round_half_up(s * 100.0) as u8,
        lightness: round_half_up(l * 100.0) as u8,
    }
}

/// Converts an HSL color into RGB.
///
/// Saturation 0 yields the gray at the given lightness. Otherwise each
/// channel is sampled from the hue ramp at offsets of +1/3, 0 and -1/3 of a
/// turn for red, green and blue, then scaled to 0-255 and rounded half-up.
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::suboptimal_flops
)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.hue) / 360.0;
    let s = f64::from(hsl.saturation) / 100.0;
    let l = f64::from(hsl.lightness) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

#[allow(clippy::suboptimal_flops)]
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        rgb_to_hsl(value)
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        hsl_to_rgb(value)
    }
}

impl From<(u16, u8, u8)> for Hsl {
    fn from(value: (u16, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
