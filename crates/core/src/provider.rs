//! The color-math provider seam.
//!
//! Conversions between RGB and the derived color spaces (HSL, XYZ, Lab, LCh)
//! are delegated to a [`ColorMath`] implementation. One provider may be
//! installed per process with [`install_provider`]. The slot is resolved
//! lazily on first use: if nothing was installed by then, the provider is
//! absent for the rest of the process and every derived-space request fails
//! with [`ColorError::ProviderUnavailable`].
//!
//! The trait is **object-safe**, so providers are stored and passed as
//! `&dyn ColorMath`.

use crate::error::ColorError;
use log::{debug, warn};
use std::sync::OnceLock;

/// Pure numeric conversions between sRGB and derived color spaces.
///
/// RGB channels are in [0, 1]. Implementations may assume their inputs have
/// already been validated by the caller and must not panic on them.
pub trait ColorMath: Send + Sync {
    /// Converts HSL (hue in degrees [0, 360), saturation and lightness in
    /// [0, 1]) to RGB.
    fn hsl_to_rgb(&self, h: f64, s: f64, l: f64) -> [f64; 3];

    /// Converts RGB to HSL (hue in [0, 360), saturation and lightness in [0, 1]).
    fn rgb_to_hsl(&self, r: f64, g: f64, b: f64) -> [f64; 3];

    /// Converts RGB to CIE XYZ tristimulus values (Y of white is 1).
    fn rgb_to_xyz(&self, r: f64, g: f64, b: f64) -> [f64; 3];

    /// Converts RGB to CIE L*a*b* (L in [0, 100]).
    fn rgb_to_lab(&self, r: f64, g: f64, b: f64) -> [f64; 3];

    /// Converts RGB to CIE LCh(ab) (L in [0, 100], C >= 0, h in [0, 360)).
    fn rgb_to_lch(&self, r: f64, g: f64, b: f64) -> [f64; 3];
}

static PROVIDER: OnceLock<Option<Box<dyn ColorMath>>> = OnceLock::new();

/// Installs the process-wide color-math provider.
///
/// Must be called before anything queries the provider. Returns
/// `ColorError::ProviderAlreadyResolved` if a provider was already installed
/// or the slot was already resolved as absent.
pub fn install_provider(provider: Box<dyn ColorMath>) -> Result<(), ColorError> {
    let mut pending = Some(provider);
    PROVIDER.get_or_init(|| {
        debug!("installing color-math provider");
        pending.take()
    });
    match pending {
        None => Ok(()),
        Some(_) => {
            warn!("color-math provider install rejected: provider already resolved");
            Err(ColorError::ProviderAlreadyResolved)
        }
    }
}

/// Returns the process-wide provider, resolving the slot if needed.
pub fn provider() -> Option<&'static dyn ColorMath> {
    PROVIDER
        .get_or_init(|| {
            debug!("no color-math provider installed; derived color spaces are unavailable");
            None
        })
        .as_deref()
}

/// Says whether a color-math provider is available for this process.
///
/// The answer never changes once resolved, so callers may cache it.
pub fn provider_available() -> bool {
    provider().is_some()
}

/// Returns the provider or `ColorError::ProviderUnavailable`.
pub(crate) fn require() -> Result<&'static dyn ColorMath, ColorError> {
    provider().ok_or(ColorError::ProviderUnavailable)
}
