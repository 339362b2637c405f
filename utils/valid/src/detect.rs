//! Format detection and validation reports.
//!
//! Input is discriminated once into a [`ColorInput`]; detection then only has
//! to range-check the typed records and pattern-match the text. A detected
//! format is final, and is not re-checked against its own predicate.

use alloc::{string::String, vec::Vec};

use colorup_core::{ColorFormat, ColorInput, ColorObject, Config, ValidationResult};

use crate::predicates::{
    hsl_errors, hsv_errors, is_css_color, is_hex_color, is_hsl_color, is_hsv_color,
    is_named_color, is_rgb_color, is_valid_alpha, rgb_errors,
};

/// Reported when no format matches.
pub const UNRECOGNIZED_FORMAT: &str = "Unrecognized color format";
/// Reported when alpha is present but disabled in the [`Config`].
pub const ALPHA_UNSUPPORTED: &str = "Alpha channel is not supported";

/// Returns the first format that accepts `input`.
///
/// Priority is hex, RGB, HSL, HSV, named, then CSS. Text can only be hex,
/// named or CSS, and the records can only be their own format, so the order
/// matters only among the text formats.
#[must_use]
pub fn detect_format(input: &ColorInput) -> Option<ColorFormat> {
    let format = match input {
        ColorInput::Text(text) => detect_text(text),
        ColorInput::Rgb(color) => is_rgb_color(color).then_some(ColorFormat::Rgb),
        ColorInput::Hsl(color) => is_hsl_color(color).then_some(ColorFormat::Hsl),
        ColorInput::Hsv(color) => is_hsv_color(color).then_some(ColorFormat::Hsv),
    };
    tracing::trace!(?input, ?format, "detected color format");
    format
}

fn detect_text(text: &str) -> Option<ColorFormat> {
    if is_hex_color(text) {
        Some(ColorFormat::Hex)
    } else if is_named_color(text) {
        Some(ColorFormat::Named)
    } else if is_css_color(text) {
        Some(ColorFormat::Css)
    } else {
        None
    }
}

/// Detects the format of untyped data.
///
/// Data that fits none of the [`ColorInput`] shapes has no format.
#[must_use]
pub fn detect_value_format(value: serde_json::Value) -> Option<ColorFormat> {
    serde_json::from_value::<ColorInput>(value)
        .ok()
        .as_ref()
        .and_then(detect_format)
}

/// Validates `input` with the default [`Config`].
#[must_use]
pub fn validate_color_input(input: &ColorInput) -> ValidationResult {
    validate_color_input_with(input, &Config::default())
}

/// Alias of [`validate_color_input`].
#[must_use]
pub fn is_valid_color_input(input: &ColorInput) -> ValidationResult {
    validate_color_input(input)
}

/// Validates `input`, honoring `config.alpha_support`.
///
/// An unrecognized input reports [`UNRECOGNIZED_FORMAT`] followed by one
/// message per out-of-range field. A recognized input that carries alpha
/// while alpha support is off reports [`ALPHA_UNSUPPORTED`] and keeps its
/// detected format.
#[must_use]
pub fn validate_color_input_with(input: &ColorInput, config: &Config) -> ValidationResult {
    let format = detect_format(input);
    let mut errors = Vec::new();

    match format {
        None => {
            errors.push(String::from(UNRECOGNIZED_FORMAT));
            errors.extend(field_errors(input));
        }
        Some(_) if !config.alpha_support && carries_alpha(input) => {
            errors.push(String::from(ALPHA_UNSUPPORTED));
        }
        Some(_) => {}
    }

    let report = ValidationResult::new(format, errors);
    if !report.is_valid {
        tracing::debug!(?input, errors = ?report.errors, "invalid color input");
    }
    report
}

/// Validates untyped data, deserializing it into a [`ColorInput`] first.
///
/// Data that fits none of the shapes is reported as unrecognized.
#[must_use]
pub fn validate_value(value: serde_json::Value) -> ValidationResult {
    match serde_json::from_value::<ColorInput>(value) {
        Ok(input) => validate_color_input(&input),
        Err(err) => {
            tracing::debug!(%err, "color input has no recognized shape");
            ValidationResult::new(None, alloc::vec![String::from(UNRECOGNIZED_FORMAT)])
        }
    }
}

/// Whether `color` is a fully resolved record.
///
/// The hex must be well formed, every nested record in range and the alpha
/// within `0.0..=1.0`.
#[must_use]
pub fn is_normalized_color(color: &ColorObject) -> bool {
    is_hex_color(&color.hex)
        && is_rgb_color(&color.rgb)
        && is_hsl_color(&color.hsl)
        && is_hsv_color(&color.hsv)
        && is_valid_alpha(color.alpha)
}

fn field_errors(input: &ColorInput) -> Vec<String> {
    match input {
        ColorInput::Text(_) => Vec::new(),
        ColorInput::Rgb(color) => rgb_errors(color),
        ColorInput::Hsl(color) => hsl_errors(color),
        ColorInput::Hsv(color) => hsv_errors(color),
    }
}

fn carries_alpha(input: &ColorInput) -> bool {
    match input {
        ColorInput::Text(text) => {
            (is_hex_color(text) && matches!(text.len(), 5 | 9))
                || text.get(..5).is_some_and(|head| {
                    head.eq_ignore_ascii_case("rgba(") || head.eq_ignore_ascii_case("hsla(")
                })
        }
        ColorInput::Rgb(color) => color.a.is_some(),
        ColorInput::Hsl(color) => color.a.is_some(),
        ColorInput::Hsv(color) => color.a.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use colorup_core::{Hsl, Hsv, Rgb};
    use serde_json::json;

    use super::*;

    #[test]
    fn detects_each_format() {
        assert_eq!(detect_format(&"#fff".into()), Some(ColorFormat::Hex));
        assert_eq!(detect_format(&Rgb::new(1, 2, 3).into()), Some(ColorFormat::Rgb));
        assert_eq!(
            detect_format(&Hsl::new(120.0, 50.0, 50.0).into()),
            Some(ColorFormat::Hsl)
        );
        assert_eq!(
            detect_format(&Hsv::new(120.0, 50.0, 50.0).into()),
            Some(ColorFormat::Hsv)
        );
        assert_eq!(detect_format(&"Navy".into()), Some(ColorFormat::Named));
        assert_eq!(detect_format(&"rgb(1, 2, 3)".into()), Some(ColorFormat::Css));
        assert_eq!(detect_format(&"notacolor".into()), None);
    }

    #[test]
    fn detects_untyped_values() {
        assert_eq!(detect_value_format(json!("#fff")), Some(ColorFormat::Hex));
        assert_eq!(
            detect_value_format(json!({"r": 1, "g": 2, "b": 3})),
            Some(ColorFormat::Rgb)
        );
        assert_eq!(
            detect_value_format(json!({"h": 10, "s": 20, "v": 30})),
            Some(ColorFormat::Hsv)
        );
        assert_eq!(detect_value_format(json!("notacolor")), None);
        assert_eq!(detect_value_format(json!({"r": 300, "g": 0, "b": 0})), None);
        assert_eq!(detect_value_format(json!(null)), None);
    }

    #[test]
    fn out_of_range_records_have_no_format() {
        assert_eq!(detect_format(&Rgb::rgba(1, 2, 3, 2.0).into()), None);
        assert_eq!(detect_format(&Hsl::new(0.0, 101.0, 50.0).into()), None);
    }

    #[test]
    fn valid_input_reports_no_errors() {
        let report = validate_color_input(&"#00ff00".into());
        assert!(report.is_valid);
        assert_eq!(report.format, Some(ColorFormat::Hex));
        assert!(report.errors.is_empty());
        assert!(is_valid_color_input(&"hsla(1, 2%, 3%, 0.5)".into()).is_valid);
    }

    #[test]
    fn unrecognized_input_lists_field_problems() {
        let report = validate_color_input(&Hsv::new(-5.0, 50.0, 50.0).into());
        assert!(!report.is_valid);
        assert_eq!(report.format, None);
        assert_eq!(
            report.errors,
            [UNRECOGNIZED_FORMAT, "h: Value is out of range: 0 - 360."]
        );

        let text = validate_color_input(&"notacolor".into());
        assert_eq!(text.errors, [UNRECOGNIZED_FORMAT]);
    }

    #[test]
    fn alpha_can_be_disabled() {
        let config = Config {
            alpha_support: false,
            ..Config::default()
        };
        for input in [
            ColorInput::from("#ff000080"),
            ColorInput::from("#f008"),
            ColorInput::from("rgba(1, 2, 3, 0.5)"),
            ColorInput::from(Rgb::rgba(1, 2, 3, 0.5)),
        ] {
            let report = validate_color_input_with(&input, &config);
            assert!(!report.is_valid, "{input:?}");
            assert!(report.format.is_some());
            assert_eq!(report.errors, [ALPHA_UNSUPPORTED]);
        }
        assert!(validate_color_input_with(&"#ff0000".into(), &config).is_valid);
        assert!(validate_color_input_with(&"rgb(1, 2, 3)".into(), &config).is_valid);
    }

    #[test]
    fn untyped_validation() {
        let report = validate_value(json!({"r": 255, "g": 0, "b": 0, "a": 0.5}));
        assert!(report.is_valid);
        assert_eq!(report.format, Some(ColorFormat::Rgb));

        let report = validate_value(json!(42));
        assert!(!report.is_valid);
        assert_eq!(report.format, None);
        assert_eq!(report.errors, [UNRECOGNIZED_FORMAT]);
    }

    #[test]
    fn values_just_past_a_limit_are_rejected() {
        let alpha = validate_value(json!({"r": 0, "g": 0, "b": 0, "a": 1.000_000_01}));
        assert!(!alpha.is_valid);
        assert_eq!(alpha.format, None);

        let hue = validate_value(json!({"h": 360.000_01, "s": 50, "l": 50}));
        assert!(!hue.is_valid);
        assert_eq!(
            hue.errors,
            [UNRECOGNIZED_FORMAT, "h: Value is out of range: 0 - 360."]
        );
    }

    #[test]
    fn normalized_records() {
        let mut color = ColorObject {
            hex: "#ff0000".into(),
            rgb: Rgb::new(255, 0, 0),
            hsl: Hsl::new(0.0, 100.0, 50.0),
            hsv: Hsv::new(0.0, 100.0, 100.0),
            alpha: 1.0,
            format: ColorFormat::Hex,
        };
        assert!(is_normalized_color(&color));

        color.alpha = 1.5;
        assert!(!is_normalized_color(&color));

        color.alpha = 1.0;
        color.hex = "red".into();
        assert!(!is_normalized_color(&color));
    }
}
