use serde::{Deserialize, Serialize};

use crate::ColorFormat;

/// Library-wide output and validation settings.
///
/// Every field has a default, so a partial JSON document deserializes into a
/// complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Format used when rendering colors to text.
    pub default_format: ColorFormat,
    /// Decimal places kept for fractional output such as alpha.
    pub precision: u32,
    /// Whether alpha channels are accepted and rendered.
    pub alpha_support: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: ColorFormat::Hex,
            precision: 3,
            alpha_support: true,
        }
    }
}
