//! Error types for the built-in color-math provider.

use qualpal_core::ColorError;
use thiserror::Error;

/// Errors produced while configuring or installing the built-in provider.
#[derive(Debug, Error)]
pub enum MathError {
    /// The `white_point` setting named an unsupported reference white.
    #[error("unknown white point: {0}")]
    UnknownWhitePoint(String),

    /// The settings value was not a JSON object.
    #[error("invalid settings: expected a JSON object, got {0}")]
    InvalidSettings(String),

    /// Installing into the process-wide provider slot failed.
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_white_point_includes_name() {
        let err = MathError::UnknownWhitePoint("F2".into());
        let msg = format!("{err}");
        assert!(msg.contains("F2"), "missing name in: {msg}");
    }

    #[test]
    fn invalid_settings_includes_kind() {
        let err = MathError::InvalidSettings("array".into());
        let msg = format!("{err}");
        assert!(msg.contains("array"), "missing kind in: {msg}");
    }

    #[test]
    fn color_error_is_passed_through() {
        let err = MathError::from(ColorError::ProviderAlreadyResolved);
        assert_eq!(err.to_string(), ColorError::ProviderAlreadyResolved.to_string());
    }

    #[test]
    fn math_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MathError>();
    }
}
