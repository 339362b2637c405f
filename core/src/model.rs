use alloc::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::ColorFormat;

/// An 8-bit sRGB color with an optional alpha channel.
///
/// Channels are integral and in range by construction. Alpha, when present,
/// is expected to lie in `0.0..=1.0`; validators check it, constructors do not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Optional opacity (0.0 = transparent, 1.0 = opaque)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Rgb {
    /// Opaque black without an explicit alpha.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white without an explicit alpha.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color without an explicit alpha channel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Creates a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Returns a copy of this color with the provided alpha.
    #[must_use]
    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    /// Alpha, treating a missing channel as fully opaque.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.a.unwrap_or(1.0)
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

/// A color in the HSL cylinder.
///
/// Hue is in degrees, saturation and lightness are percentages. Fields are
/// floats so that raw out-of-range input can be represented and rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees (0-360)
    pub h: f64,
    /// Saturation percentage (0-100)
    pub s: f64,
    /// Lightness percentage (0-100)
    pub l: f64,
    /// Optional opacity (0.0 to 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Hsl {
    /// Creates an HSL color without an explicit alpha channel.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: None }
    }
}

/// A color in the HSV cylinder.
///
/// Only modelled and validated; no conversion path targets it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue angle in degrees (0-360)
    pub h: f64,
    /// Saturation percentage (0-100)
    pub s: f64,
    /// Value percentage (0-100)
    pub v: f64,
    /// Optional opacity (0.0 to 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Hsv {
    /// Creates an HSV color without an explicit alpha channel.
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v, a: None }
    }
}

/// A raw color input, discriminated once at the boundary.
///
/// Deserializing from untyped data picks the first shape that fits: a string
/// becomes [`ColorInput::Text`], an object with numeric `r`, `g`, `b` becomes
/// [`ColorInput::Rgb`], `h`, `s`, `l` becomes [`ColorInput::Hsl`] and `h`,
/// `s`, `v` becomes [`ColorInput::Hsv`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// Hex, named or functional CSS text.
    Text(String),
    /// An RGB record.
    Rgb(Rgb),
    /// An HSL record.
    Hsl(Hsl),
    /// An HSV record.
    Hsv(Hsv),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Rgb> for ColorInput {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for ColorInput {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Hsv> for ColorInput {
    fn from(value: Hsv) -> Self {
        Self::Hsv(value)
    }
}

/// A fully resolved color carrying every representation at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorObject {
    /// Canonical hex form.
    pub hex: String,
    /// RGB form.
    pub rgb: Rgb,
    /// HSL form.
    pub hsl: Hsl,
    /// HSV form.
    pub hsv: Hsv,
    /// Opacity (0.0 to 1.0)
    pub alpha: f64,
    /// The format the color was originally supplied in.
    pub format: ColorFormat,
}

/// Outcome of validating a [`ColorInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// `true` exactly when `errors` is empty.
    pub is_valid: bool,
    /// The detected format, if any predicate matched.
    pub format: Option<ColorFormat>,
    /// Human-readable problems, in the order they were found.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a report, deriving validity from the error list.
    #[must_use]
    pub fn new(format: Option<ColorFormat>, errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            format,
            errors,
        }
    }
}
