use alloc::string::String;
use thiserror::Error;

/// Errors produced by the fallible color operations.
///
/// Validators never return this type; they report problems through
/// [`ValidationResult`](crate::ValidationResult) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The name is not in the named color table.
    #[error("Color name \"{0}\" is not recognized.")]
    UnknownName(String),
    /// No named color maps to this hex code.
    #[error("Hex code \"{0}\" is not recognized.")]
    UnknownHex(String),
    /// The hex string does not have 3, 4, 6 or 8 digits after the optional `#`.
    #[error("expected 3, 4, 6 or 8 hexadecimal digits, got {0}")]
    InvalidHexLength(usize),
    /// A non-hexadecimal character was encountered at the provided index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidHexDigit(usize),
}
