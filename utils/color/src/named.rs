use alloc::string::ToString;

use colorup_core::{ColorError, constants::NAMED_COLORS};

/// Looks up the `#RRGGBB` value of a CSS color name, ignoring case.
///
/// # Errors
///
/// Returns [`ColorError::UnknownName`] when `name` is not a named color.
pub fn name_to_hex(name: &str) -> Result<&'static str, ColorError> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
        .ok_or_else(|| {
            tracing::debug!(name, "unknown color name");
            ColorError::UnknownName(name.to_string())
        })
}

/// Finds the first color name whose value equals `hex`, ignoring case.
///
/// Only the full `#RRGGBB` form matches.
///
/// # Errors
///
/// Returns [`ColorError::UnknownHex`] when no named color has this value.
pub fn hex_to_name(hex: &str) -> Result<&'static str, ColorError> {
    NAMED_COLORS
        .iter()
        .find(|(_, value)| value.eq_ignore_ascii_case(hex))
        .map(|(name, _)| *name)
        .ok_or_else(|| {
            tracing::debug!(hex, "no named color for hex");
            ColorError::UnknownHex(hex.to_string())
        })
}
