//! Error types for the qualpal core.

use thiserror::Error;

/// Errors produced by color and palette operations.
///
/// Every variant is a local, recoverable failure. Construction errors abort
/// the construction; no partially built `Color` or `Palette` is ever returned.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A string was not of the form `#` followed by exactly six hex digits.
    #[error("invalid hex color format: {0:?}")]
    InvalidFormat(String),

    /// A numeric channel fell outside its valid domain.
    #[error("{channel} value {value} is out of range")]
    OutOfRange { channel: &'static str, value: f64 },

    /// A palette element was neither a color nor a hex string.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A palette position past the end was requested.
    #[error("index {index} out of bounds for palette of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A derived color space was requested but no color-math provider is installed.
    #[error("no color-math provider is available")]
    ProviderUnavailable,

    /// A provider was installed after the process-wide provider had already been resolved.
    #[error("the color-math provider has already been resolved for this process")]
    ProviderAlreadyResolved,
}
