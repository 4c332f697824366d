#![doc = include_str!("../README.md")]

pub use tinta_color as color;

pub mod config;
pub mod snapshot;
pub mod sync;

#[doc(inline)]
pub use color::{
    Hsl, HslChannel, InvalidColorFormat, Rgb, RgbChannel, hex_to_rgb, hsl_to_rgb, rgb_to_hex,
    rgb_to_hsl,
};
pub use config::SyncConfig;
pub use snapshot::{Authority, ColorSnapshot};
pub use sync::ColorSync;
