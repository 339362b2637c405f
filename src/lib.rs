#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

pub use colorup_color as color;
pub use colorup_valid as valid;

#[doc(inline)]
pub use colorup_core::{
    ColorError, ColorFormat, ColorInput, ColorObject, Config, Hsl, Hsv, Rgb, ValidationResult,
    constants, util,
};

pub mod prelude {
    //! Commonly used types and functions, importable in one line.
    //!
    //! ```rust
    //! use colorup::prelude::*;
    //!
    //! let report = validate_color_input(&"rebeccapurple".into());
    //! assert_eq!(report.format, Some(ColorFormat::Named));
    //!
    //! let hex = name_to_hex("rebeccapurple").unwrap();
    //! assert!(is_dark(&hex_to_rgb(hex)));
    //! ```
    pub use colorup_color::*;
    pub use colorup_core::{
        BlendMode, ColorError, ColorFormat, ColorInput, ColorObject, Config, ExportFormat,
        HarmonyType, Hsl, Hsv, Rgb, TextSize, ValidationResult, WcagLevel,
    };
    pub use colorup_valid::{
        Validator, detect_format, detect_value_format, is_css_color, is_hex_color,
        is_hsl_color, is_hsv_color, is_named_color, is_normalized_color, is_rgb_color,
        is_valid_alpha, is_valid_color_input, is_valid_hue, is_valid_percentage,
        is_valid_rgb_component, validate_color_input, validate_color_input_with, validate_value,
    };
}

/// Re-export of the `tracing` facade used by every colorup crate.
pub use tracing as log;
