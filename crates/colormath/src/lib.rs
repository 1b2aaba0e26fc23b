#![deny(unsafe_code)]
//! Built-in color-math provider for qualpal.
//!
//! [`BuiltinMath`] implements [`qualpal_core::ColorMath`] with the standard
//! sRGB formulas: HSL (hexcone model), CIE XYZ (sRGB primaries), CIE L*a*b*
//! and LCh against a configurable reference white. Call [`install`] (or
//! [`BuiltinMath::install`]) once at startup, before any color queries a
//! derived space.

pub mod convert;
pub mod error;

use convert::{adapt_d65_to_d50, lab_to_lch, rgb_to_xyz, xyz_to_lab, Xyz, D50, D65};
use log::debug;
use qualpal_core::{install_provider, ColorMath};
use serde_json::{json, Value};

pub use error::MathError;

/// All recognized white point names.
const WHITE_POINT_NAMES: &[&str] = &["D65", "D50"];

/// Reference white used for Lab and LCh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitePoint {
    /// Daylight 6504 K, the native sRGB white.
    #[default]
    D65,
    /// Horizon light 5003 K, with Bradford chromatic adaptation from D65.
    D50,
}

impl WhitePoint {
    /// Looks up a white point by name (case insensitive).
    ///
    /// Returns `MathError::UnknownWhitePoint` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, MathError> {
        match name.to_ascii_uppercase().as_str() {
            "D65" => Ok(WhitePoint::D65),
            "D50" => Ok(WhitePoint::D50),
            _ => Err(MathError::UnknownWhitePoint(name.to_string())),
        }
    }

    /// Canonical name, as accepted by [`WhitePoint::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            WhitePoint::D65 => "D65",
            WhitePoint::D50 => "D50",
        }
    }

    /// Returns a slice of all recognized white point names.
    pub fn list_names() -> &'static [&'static str] {
        WHITE_POINT_NAMES
    }
}

/// The built-in color-math provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinMath {
    white_point: WhitePoint,
}

impl BuiltinMath {
    /// Creates a provider computing Lab and LCh against `white_point`.
    pub fn new(white_point: WhitePoint) -> Self {
        Self { white_point }
    }

    /// Creates a provider from a JSON settings object.
    ///
    /// Recognized keys: `"white_point"` (`"D65"` or `"D50"`, default
    /// `"D65"`). Missing or wrongly typed keys fall back to defaults; `null`
    /// means all defaults. Any other non-object value returns
    /// `MathError::InvalidSettings`.
    pub fn from_json(params: &Value) -> Result<Self, MathError> {
        match params {
            Value::Object(_) | Value::Null => {}
            Value::Array(_) => return Err(MathError::InvalidSettings("array".into())),
            Value::String(_) => return Err(MathError::InvalidSettings("string".into())),
            Value::Number(_) => return Err(MathError::InvalidSettings("number".into())),
            Value::Bool(_) => return Err(MathError::InvalidSettings("boolean".into())),
        }
        let white_point = match params.get("white_point").and_then(Value::as_str) {
            Some(name) => WhitePoint::from_name(name)?,
            None => WhitePoint::default(),
        };
        Ok(Self::new(white_point))
    }

    /// Reference white used for Lab and LCh.
    pub fn white_point(&self) -> WhitePoint {
        self.white_point
    }

    /// Current settings as a JSON object, accepted by [`BuiltinMath::from_json`].
    pub fn params(&self) -> Value {
        json!({ "white_point": self.white_point.name() })
    }

    /// Installs this provider as the process-wide color-math provider.
    ///
    /// Fails with `ColorError::ProviderAlreadyResolved` (wrapped) if a
    /// provider was already installed or already resolved as absent.
    pub fn install(self) -> Result<(), MathError> {
        debug!(
            "installing built-in color math (white point {})",
            self.white_point.name()
        );
        install_provider(Box::new(self))?;
        Ok(())
    }

    fn lab(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        let xyz = rgb_to_xyz(r, g, b);
        match self.white_point {
            WhitePoint::D65 => xyz_to_lab(xyz, D65),
            WhitePoint::D50 => xyz_to_lab(adapt_d65_to_d50(xyz), D50),
        }
    }
}

impl ColorMath for BuiltinMath {
    fn hsl_to_rgb(&self, h: f64, s: f64, l: f64) -> [f64; 3] {
        convert::hsl_to_rgb(h, s, l)
    }

    fn rgb_to_hsl(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        convert::rgb_to_hsl(r, g, b)
    }

    fn rgb_to_xyz(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        let Xyz { x, y, z } = rgb_to_xyz(r, g, b);
        [x, y, z]
    }

    fn rgb_to_lab(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        self.lab(r, g, b)
    }

    fn rgb_to_lch(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        lab_to_lch(self.lab(r, g, b))
    }
}

/// Installs the default built-in provider (D65 white).
pub fn install() -> Result<(), MathError> {
    BuiltinMath::default().install()
}
