//! # Color Conversions
//!
//! Pure conversions between hex strings, RGB and HSL, lookups against the CSS
//! named color table, and simple perceptual modifiers built on top of them.
//!
//! Data flows one way: a raw value is (optionally) validated, converted, then
//! modified. No function here holds state or mutates its input.
//!
//! ```
//! use colorup_color::{hex_to_rgb, lighten, rgb_to_hex};
//!
//! let red = hex_to_rgb("#f00");
//! let pink = lighten(&red, 20.0);
//! assert_eq!(rgb_to_hex(pink.r, pink.g, pink.b), "#ff6666");
//! ```

extern crate alloc;

mod convert;
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, try_hex_to_rgb};
mod format;
pub use format::format_color;
mod modify;
pub use modify::{
    adjust_brightness, adjust_saturation, darken, grayscale, invert_color, is_dark, is_light,
    lighten, luminance,
};
mod named;
pub use named::{hex_to_name, name_to_hex};
mod parse;
