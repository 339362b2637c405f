//! Derived colors built on the HSL conversions.
//!
//! Every modifier takes a color by reference and returns a new one. The
//! result always carries an explicit alpha: the input's, or 1.0 when the
//! input had none.

use colorup_core::{
    Rgb,
    constants::{LIGHTNESS_THRESHOLD, LUMINANCE_WEIGHTS},
};

use crate::{hsl_to_rgb, rgb_to_hsl};

/// Weighted brightness estimate in channel units (0-255).
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn luminance(color: &Rgb) -> f64 {
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    // plain left-to-right sum; a fused multiply-add moves colors across the threshold
    wr * f64::from(color.r) + wg * f64::from(color.g) + wb * f64::from(color.b)
}

/// Whether the color's luminance is above the fixed light threshold.
#[must_use]
pub fn is_light(color: &Rgb) -> bool {
    luminance(color) > LIGHTNESS_THRESHOLD
}

/// The complement of [`is_light`].
#[must_use]
pub fn is_dark(color: &Rgb) -> bool {
    !is_light(color)
}

/// Adds `amount` percentage points to the HSL lightness, clamped to 0-100.
#[must_use]
pub fn adjust_brightness(color: &Rgb, amount: f64) -> Rgb {
    let hsl = rgb_to_hsl(color.r, color.g, color.b);
    let lightness = (hsl.l + amount).clamp(0.0, 100.0);
    hsl_to_rgb(hsl.h, hsl.s, lightness).with_alpha(color.opacity())
}

/// Adds `amount` percentage points to the HSL saturation, clamped to 0-100.
#[must_use]
pub fn adjust_saturation(color: &Rgb, amount: f64) -> Rgb {
    let hsl = rgb_to_hsl(color.r, color.g, color.b);
    let saturation = (hsl.s + amount).clamp(0.0, 100.0);
    hsl_to_rgb(hsl.h, saturation, hsl.l).with_alpha(color.opacity())
}

/// Raises lightness by `|amount|`.
#[must_use]
pub fn lighten(color: &Rgb, amount: f64) -> Rgb {
    adjust_brightness(color, amount.abs())
}

/// Lowers lightness by `|amount|`.
#[must_use]
pub fn darken(color: &Rgb, amount: f64) -> Rgb {
    adjust_brightness(color, -amount.abs())
}

/// Replaces every channel with `255 - channel`.
#[must_use]
pub fn invert_color(color: &Rgb) -> Rgb {
    Rgb::rgba(
        255 - color.r,
        255 - color.g,
        255 - color.b,
        color.opacity(),
    )
}

/// Replicates the rounded luminance across all three channels.
#[must_use]
pub fn grayscale(color: &Rgb) -> Rgb {
    let gray = luminance(color).round().clamp(0.0, 255.0) as u8;
    Rgb::rgba(gray, gray, gray, color.opacity())
}
