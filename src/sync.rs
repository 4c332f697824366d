//! Keeps the hex, RGB and HSL forms of one color in step while the user
//! edits any of them.
//!
//! Every edit names its source. The edited representation becomes the
//! [`Authority`] and only the other two are derived from it, in one pass, so
//! an HSL edit never feeds back into HSL through RGB.

use core::fmt::{self, Debug};

use nami::{Binding, Signal};
use tracing::{debug, trace};

use crate::{
    color::{
        HslChannel, InvalidColorFormat, Rgb, RgbChannel, hex_to_rgb, hsl_to_rgb, rgb_to_hex,
        rgb_to_hsl,
    },
    config::{DEFAULT_RGB, SyncConfig},
    snapshot::{Authority, ColorSnapshot},
};

/// Owns the color being edited and publishes a fresh [`ColorSnapshot`] after
/// every edit.
///
/// Edits take `&mut self` and publish only once the snapshot is complete, so
/// neither [`snapshot`](Self::snapshot) nor a [`watch`](Self::watch) observer
/// can see a half-updated color.
///
/// ```
/// use tinta::{ColorSync, RgbChannel};
///
/// let mut sync = ColorSync::new();
/// sync.edit_rgb(RgbChannel::Red, 255);
/// sync.edit_rgb(RgbChannel::Green, 0);
/// let snapshot = sync.edit_rgb(RgbChannel::Blue, 0);
/// assert_eq!(snapshot.hex(), "#FF0000");
/// ```
pub struct ColorSync {
    snapshot: ColorSnapshot,
    published: Binding<ColorSnapshot>,
}

impl Debug for ColorSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSync")
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl Default for ColorSync {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSync {
    /// Starts a session at the default color, `#3B82F6`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rgb(DEFAULT_RGB)
    }

    /// Starts a session at the given color, with hex as the authority.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let snapshot = ColorSnapshot::from_rgb(rgb);
        Self {
            published: Binding::container(snapshot.clone()),
            snapshot,
        }
    }

    /// Starts a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if the configured initial color is not a
    /// complete hex color.
    pub fn with_config(config: &SyncConfig) -> Result<Self, InvalidColorFormat> {
        config.initial_rgb().map(Self::from_rgb)
    }

    /// Returns the current state.
    #[must_use]
    pub const fn snapshot(&self) -> &ColorSnapshot {
        &self.snapshot
    }

    /// Calls `observer` with a copy of every snapshot published from now on.
    ///
    /// Dropping the returned guard stops the notifications.
    pub fn watch(
        &self,
        observer: impl Fn(ColorSnapshot) + 'static,
    ) -> <Binding<ColorSnapshot> as Signal>::Guard {
        self.published
            .watch(move |context| observer(context.into_value()))
    }

    /// Applies a hex entry.
    ///
    /// The entry is stored exactly as typed. When it is a complete color, RGB
    /// and HSL are recomputed from it; otherwise they keep their last values so
    /// a half-typed entry like `#3B` does not disturb them.
    pub fn edit_hex(&mut self, input: impl Into<String>) -> &ColorSnapshot {
        // an incomplete entry is not a failure here
        let _ = self.apply_hex(input.into());
        &self.snapshot
    }

    /// Applies a hex entry like [`edit_hex`](Self::edit_hex), but reports an
    /// incomplete entry.
    ///
    /// The state changes exactly as with `edit_hex` in both cases.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if the entry is not a complete hex
    /// color. The entry is still stored and published.
    pub fn try_edit_hex(
        &mut self,
        input: impl Into<String>,
    ) -> Result<&ColorSnapshot, InvalidColorFormat> {
        self.apply_hex(input.into())?;
        Ok(&self.snapshot)
    }

    /// Sets one RGB channel, clamped to 0-255, and derives hex and HSL from
    /// the resulting triple.
    pub fn edit_rgb(&mut self, channel: RgbChannel, value: i32) -> &ColorSnapshot {
        let rgb = self.snapshot.rgb.with_channel(channel, value);

        self.snapshot.authority = Authority::Rgb;
        self.snapshot.rgb = rgb;
        self.snapshot.hex = rgb_to_hex(rgb);
        self.snapshot.hsl = rgb_to_hsl(rgb);

        debug!(?channel, value, hex = %self.snapshot.hex, "rgb edited");
        self.publish();
        &self.snapshot
    }

    /// Sets one HSL component and derives RGB, then hex, from the resulting
    /// triple.
    ///
    /// Hue is clamped to 0-360 with 360 stored as 0; saturation and lightness
    /// are clamped to 0-100. The HSL triple is kept as entered.
    pub fn edit_hsl(&mut self, channel: HslChannel, value: i32) -> &ColorSnapshot {
        let hsl = self.snapshot.hsl.with_channel(channel, value);
        let rgb = hsl_to_rgb(hsl);

        self.snapshot.authority = Authority::Hsl;
        self.snapshot.hsl = hsl;
        self.snapshot.rgb = rgb;
        self.snapshot.hex = rgb_to_hex(rgb);

        debug!(?channel, value, hex = %self.snapshot.hex, "hsl edited");
        self.publish();
        &self.snapshot
    }

    fn apply_hex(&mut self, input: String) -> Result<(), InvalidColorFormat> {
        let parsed = hex_to_rgb(&input);

        self.snapshot.authority = Authority::Hex;
        match parsed {
            Ok(rgb) => {
                self.snapshot.rgb = rgb;
                self.snapshot.hsl = rgb_to_hsl(rgb);
                debug!(hex = %input, "hex edited");
            }
            Err(error) => trace!(hex = %input, %error, "keeping last complete color"),
        }
        self.snapshot.hex = input;

        self.publish();
        parsed.map(drop)
    }

    fn publish(&self) {
        self.published.set(self.snapshot.clone());
    }
}
