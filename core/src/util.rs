//! Small numeric helpers used by the conversion and formatting code.

use alloc::{format, string::String};

use crate::ColorObject;

/// Largest precision [`round_to`] honors.
pub const MAX_PRECISION: u32 = 15;

/// Rounds `value` to `precision` decimal places.
///
/// Precision is capped at [`MAX_PRECISION`]; beyond it the value is already
/// exact and the scale factor would overflow.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(precision.min(MAX_PRECISION)).unwrap_or(0));
    (value * factor).round() / factor
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Converts a percentage (0-100) to a fraction (0-1), clamped.
#[must_use]
pub const fn percent_to_decimal(value: f64) -> f64 {
    (value / 100.0).clamp(0.0, 1.0)
}

/// Converts a fraction (0-1) to a percentage (0-100), clamped.
#[must_use]
pub const fn decimal_to_percent(value: f64) -> f64 {
    (value * 100.0).clamp(0.0, 100.0)
}

/// Clamps, rounds and formats a channel value as two lowercase hex digits.
#[must_use]
pub fn to_hex_byte(value: f64) -> String {
    let byte = value.round().clamp(0.0, 255.0) as u8;
    format!("{byte:02x}")
}

/// Whether the color is fully transparent.
#[must_use]
pub fn is_transparent(color: &ColorObject) -> bool {
    color.alpha == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorFormat, Hsl, Hsv, Rgb};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON
    }

    #[test]
    fn rounds_to_precision() {
        assert!(approx_eq(round_to(0.123_456, 3), 0.123));
        assert!(approx_eq(round_to(2.5, 0), 3.0));
        assert!(approx_eq(round_to(0.666_66, 2), 0.67));
    }

    #[test]
    fn huge_precision_is_capped() {
        let rounded = round_to(0.5, 400);
        assert!(rounded.is_finite());
        assert!(approx_eq(rounded, 0.5));
        assert!(approx_eq(round_to(0.123_456, u32::MAX), 0.123_456));
    }

    #[test]
    fn angles_wrap_into_range() {
        assert!(approx_eq(normalize_angle(360.0), 0.0));
        assert!(approx_eq(normalize_angle(-30.0), 330.0));
        assert!(approx_eq(normalize_angle(725.0), 5.0));
        assert!(approx_eq(normalize_angle(-1e-15), 0.0));
    }

    #[test]
    fn percentages_clamp() {
        assert!(approx_eq(percent_to_decimal(50.0), 0.5));
        assert!(approx_eq(percent_to_decimal(150.0), 1.0));
        assert!(approx_eq(decimal_to_percent(-0.2), 0.0));
        assert!(approx_eq(decimal_to_percent(0.25), 25.0));
    }

    #[test]
    fn hex_bytes_are_padded_and_clamped() {
        assert_eq!(to_hex_byte(10.0), "0a");
        assert_eq!(to_hex_byte(254.6), "ff");
        assert_eq!(to_hex_byte(300.0), "ff");
        assert_eq!(to_hex_byte(-4.0), "00");
    }

    #[test]
    fn zero_alpha_is_transparent() {
        let mut color = ColorObject {
            hex: "#000000".into(),
            rgb: Rgb::BLACK,
            hsl: Hsl::new(0.0, 0.0, 0.0),
            hsv: Hsv::new(0.0, 0.0, 0.0),
            alpha: 0.0,
            format: ColorFormat::Hex,
        };
        assert!(is_transparent(&color));
        color.alpha = 0.5;
        assert!(!is_transparent(&color));
    }
}
