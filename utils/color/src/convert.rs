//! Conversions between hex, RGB and HSL.
//!
//! The unchecked entry points ([`hex_to_rgb`], [`hex_to_hsl`]) trust their
//! input. Validate with `colorup-valid` first, or use [`try_hex_to_rgb`].

use alloc::{format, string::String};

use colorup_core::{ColorError, Hsl, Rgb, util::normalize_angle};

use crate::parse::parse_hex_color;

/// Decodes a hex color, returning an error for malformed input.
///
/// Accepts 3, 4, 6 or 8 digits with or without a leading `#`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexLength`] or [`ColorError::InvalidHexDigit`]
/// when `hex` is not a well-formed hex color.
pub fn try_hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    parse_hex_color(hex)
}

/// Decodes a hex color such as `#fff` or `ffffff`.
///
/// Malformed input is not reported: it decodes as black. Callers are expected
/// to have validated `hex` already.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex_color(hex).unwrap_or_else(|err| {
        tracing::debug!(hex, %err, "malformed hex color decoded as black");
        Rgb::BLACK
    })
}

/// Formats channels as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts HSL (hue in degrees, saturation and lightness in percent) to RGB.
///
/// Hue is wrapped into `[0, 360)` and percentages are clamped before the
/// sector lookup. Channels are rounded to the nearest integer.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = normalize_angle(h);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        _ if h < 60.0 => (c, x, 0.0),
        _ if h < 120.0 => (x, c, 0.0),
        _ if h < 180.0 => (0.0, c, x),
        _ if h < 240.0 => (0.0, x, c),
        _ if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

/// Converts RGB channels to HSL with integral components.
///
/// Achromatic input (all channels equal) yields hue and saturation 0.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let max_channel = r.max(g).max(b);
    let min_channel = r.min(g).min(b);

    let red = f64::from(r) / 255.0;
    let green = f64::from(g) / 255.0;
    let blue = f64::from(b) / 255.0;
    let max = f64::from(max_channel) / 255.0;
    let min = f64::from(min_channel) / 255.0;
    let l = (max + min) / 2.0;

    if max_channel == min_channel {
        return Hsl::new(0.0, 0.0, (l * 100.0).round());
    }

    let d = max - min;
    let s = d / (1.0 - 2.0f64.mul_add(l, -1.0).abs());
    let h = if max_channel == r {
        ((green - blue) / d + if g < b { 6.0 } else { 0.0 }) * 60.0
    } else if max_channel == g {
        ((blue - red) / d + 2.0) * 60.0
    } else {
        ((red - green) / d + 4.0) * 60.0
    };

    Hsl::new(
        normalize_angle(h.round()),
        (s * 100.0).round(),
        (l * 100.0).round(),
    )
}

/// Decodes a hex color straight to HSL. Shares the contract of [`hex_to_rgb`].
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let Rgb { r, g, b, .. } = hex_to_rgb(hex);
    rgb_to_hsl(r, g, b)
}
