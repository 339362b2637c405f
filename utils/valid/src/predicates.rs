//! Single-purpose color predicates.
//!
//! Text predicates run compiled patterns; numeric predicates run the range
//! tables from [`colorup_core::constants`]. Both go through [`Validator`], so
//! the record checks can report which field failed and why.

use alloc::{format, string::String, vec::Vec};
use core::ops::RangeInclusive;
use std::sync::LazyLock;

use colorup_core::{
    Hsl, Hsv, Rgb,
    constants::{
        ALPHA_RANGE, CSS_COLOR_PATTERNS, HEX_COLOR_PATTERN, HUE_RANGE, NAMED_COLORS,
        PERCENT_RANGE, RGB_RANGE,
    },
};
use regex::Regex;

use crate::Validator;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("hex color pattern compiles"));

static CSS_COLORS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    CSS_COLOR_PATTERNS.map(|pattern| Regex::new(pattern).expect("css color pattern compiles"))
});

/// `#` followed by 3, 4, 6 or 8 hex digits.
#[must_use]
pub fn is_hex_color(text: &str) -> bool {
    HEX_COLOR.validate(text).is_ok()
}

/// A CSS color keyword, compared case-insensitively.
#[must_use]
pub fn is_named_color(text: &str) -> bool {
    NAMED_COLORS
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(text))
}

/// Integral `rgb()`/`rgba()`/`hsl()`/`hsla()` notation.
///
/// Only the shape is checked; `rgb(999, 0, 0)` matches.
#[must_use]
pub fn is_css_color(text: &str) -> bool {
    CSS_COLORS.iter().any(|pattern| pattern.validate(text).is_ok())
}

/// Alpha within `0.0..=1.0`.
#[must_use]
pub fn is_valid_alpha(value: f64) -> bool {
    ALPHA_RANGE.validate(value).is_ok()
}

/// Channel within `0.0..=255.0`.
#[must_use]
pub fn is_valid_rgb_component(value: f64) -> bool {
    RGB_RANGE.validate(value).is_ok()
}

/// Percentage within `0.0..=100.0`.
#[must_use]
pub fn is_valid_percentage(value: f64) -> bool {
    PERCENT_RANGE.validate(value).is_ok()
}

/// Hue within `0.0..=360.0`, both ends included.
#[must_use]
pub fn is_valid_hue(value: f64) -> bool {
    HUE_RANGE.validate(value).is_ok()
}

/// Whether every field of an RGB record is in range.
///
/// Channels are in range by construction, so only the alpha can fail.
#[must_use]
pub fn is_rgb_color(color: &Rgb) -> bool {
    rgb_errors(color).is_empty()
}

/// Whether every field of an HSL record is in range.
#[must_use]
pub fn is_hsl_color(color: &Hsl) -> bool {
    hsl_errors(color).is_empty()
}

/// Whether every field of an HSV record is in range.
#[must_use]
pub fn is_hsv_color(color: &Hsv) -> bool {
    hsv_errors(color).is_empty()
}

pub(crate) fn rgb_errors(color: &Rgb) -> Vec<String> {
    let mut errors = Vec::new();
    check_alpha(&mut errors, color.a);
    errors
}

pub(crate) fn hsl_errors(color: &Hsl) -> Vec<String> {
    let mut errors = Vec::new();
    check(&mut errors, "h", &HUE_RANGE, color.h);
    check(&mut errors, "s", &PERCENT_RANGE, color.s);
    check(&mut errors, "l", &PERCENT_RANGE, color.l);
    check_alpha(&mut errors, color.a);
    errors
}

pub(crate) fn hsv_errors(color: &Hsv) -> Vec<String> {
    let mut errors = Vec::new();
    check(&mut errors, "h", &HUE_RANGE, color.h);
    check(&mut errors, "s", &PERCENT_RANGE, color.s);
    check(&mut errors, "v", &PERCENT_RANGE, color.v);
    check_alpha(&mut errors, color.a);
    errors
}

fn check_alpha(errors: &mut Vec<String>, alpha: Option<f64>) {
    if let Some(alpha) = alpha {
        check(errors, "a", &ALPHA_RANGE, alpha);
    }
}

fn check(errors: &mut Vec<String>, field: &str, range: &RangeInclusive<f64>, value: f64) {
    if let Err(err) = range.validate(value) {
        errors.push(format!("{field}: {err}"));
    }
}
