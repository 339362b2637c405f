//! # Color Validation
//!
//! Predicates over raw color input, format detection, and validation reports.
//!
//! Validators never fail: they answer `bool`, `Option<ColorFormat>` or a
//! [`ValidationResult`](colorup_core::ValidationResult) listing what was wrong.
//! Range and pattern checks are built on the [`Validator`] trait, so their
//! messages end up verbatim in the reports.
//!
//! ```
//! use colorup_core::{ColorFormat, Rgb};
//! use colorup_valid::{detect_format, validate_color_input};
//!
//! assert_eq!(detect_format(&"#fff".into()), Some(ColorFormat::Hex));
//! assert_eq!(detect_format(&Rgb::new(1, 2, 3).into()), Some(ColorFormat::Rgb));
//!
//! let report = validate_color_input(&"notacolor".into());
//! assert!(!report.is_valid);
//! assert_eq!(report.errors, ["Unrecognized color format"]);
//! ```

extern crate alloc;

mod detect;
pub use detect::{
    ALPHA_UNSUPPORTED, UNRECOGNIZED_FORMAT, detect_format, detect_value_format,
    is_normalized_color, is_valid_color_input, validate_color_input, validate_color_input_with,
    validate_value,
};
mod predicates;
pub use predicates::{
    is_css_color, is_hex_color, is_hsl_color, is_hsv_color, is_named_color, is_rgb_color,
    is_valid_alpha, is_valid_hue, is_valid_percentage, is_valid_rgb_component,
};
mod valid;
pub use valid::{And, AndError, NotMatch, Or, OrError, OutOfRange, Validator};
