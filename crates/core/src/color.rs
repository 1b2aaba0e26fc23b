//! Immutable color value with a canonical `#rrggbb` representation.
//!
//! A [`Color`] stores its sRGB channels in [0, 1] together with the
//! lowercase hex string they were derived from. The hex string is the
//! color's identity: equality and hashing use it and nothing else. Views in
//! other color spaces (HSL, XYZ, Lab, LCh) are computed on demand through a
//! [`ColorMath`] provider.

use crate::error::ColorError;
use crate::provider::{self, ColorMath};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable sRGB color.
///
/// Serializes as its canonical hex string `"#rrggbb"`.
#[derive(Clone)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    hex: String,
}

impl Color {
    /// Parses a hex color string like `"#ff00aa"` (case insensitive).
    ///
    /// Same as [`Color::from_hex`].
    pub fn new(hex: &str) -> Result<Color, ColorError> {
        Self::from_hex(hex)
    }

    /// Parses a hex color string of the form `#rrggbb` (case insensitive).
    ///
    /// Returns `ColorError::InvalidFormat` for anything else, including a
    /// missing `#`, short forms like `#fff`, or non-hex digits.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::InvalidFormat(hex.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
        };
        Ok(Self::from_rgb255(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgb255(r: u8, g: u8, b: u8) -> Color {
        Color {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            hex: format!("#{r:02x}{g:02x}{b:02x}"),
        }
    }

    /// Creates a color from sRGB channels in [0, 1].
    ///
    /// Each channel is scaled by 255 and rounded half away from zero, so the
    /// stored channel is the nearest multiple of 1/255. Returns
    /// `ColorError::OutOfRange` if any channel is outside [0, 1] or NaN.
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Result<Color, ColorError> {
        let r = quantize("r", r)?;
        let g = quantize("g", g)?;
        let b = quantize("b", b)?;
        Self::from_hex(&format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Creates a color from HSL using the process-wide provider.
    ///
    /// See [`Color::from_hsl_with`] for the accepted domain. Returns
    /// `ColorError::ProviderUnavailable` if no provider is installed.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Result<Color, ColorError> {
        Self::from_hsl_with(provider::require()?, h, s, l)
    }

    /// Creates a color from HSL using the given provider.
    ///
    /// Any finite hue in degrees is accepted and wrapped into [0, 360), so
    /// `360.0` is red and `-30.0` equals `330.0`. Saturation and lightness
    /// must be in [0, 1].
    pub fn from_hsl_with(math: &dyn ColorMath, h: f64, s: f64, l: f64) -> Result<Color, ColorError> {
        if !h.is_finite() {
            return Err(ColorError::OutOfRange {
                channel: "h",
                value: h,
            });
        }
        check_unit("s", s)?;
        check_unit("l", l)?;
        // rem_euclid rounds a tiny negative hue up to exactly 360.0.
        let h = match h.rem_euclid(360.0) {
            h if h >= 360.0 => 0.0,
            h => h,
        };
        let [r, g, b] = math.hsl_to_rgb(h, s, l);
        // Provider output may overshoot [0, 1] by rounding error.
        Self::from_rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// The canonical lowercase hex string `#rrggbb`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The sRGB channels in [0, 1].
    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// The sRGB channels as 8-bit integers.
    pub fn rgb255(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// HSL view: hue in [0, 360), saturation and lightness in [0, 1].
    pub fn hsl(&self) -> Result<(f64, f64, f64), ColorError> {
        Ok(self.hsl_with(provider::require()?))
    }

    /// CIE XYZ view.
    pub fn xyz(&self) -> Result<(f64, f64, f64), ColorError> {
        Ok(self.xyz_with(provider::require()?))
    }

    /// CIE L*a*b* view: L in [0, 100], a and b roughly in [-128, 127].
    pub fn lab(&self) -> Result<(f64, f64, f64), ColorError> {
        Ok(self.lab_with(provider::require()?))
    }

    /// CIE LCh view: L in [0, 100], chroma >= 0, hue in [0, 360).
    pub fn lch(&self) -> Result<(f64, f64, f64), ColorError> {
        Ok(self.lch_with(provider::require()?))
    }

    /// HSL view computed by `math`.
    pub fn hsl_with(&self, math: &dyn ColorMath) -> (f64, f64, f64) {
        tuple(math.rgb_to_hsl(self.r, self.g, self.b))
    }

    /// XYZ view computed by `math`.
    pub fn xyz_with(&self, math: &dyn ColorMath) -> (f64, f64, f64) {
        tuple(math.rgb_to_xyz(self.r, self.g, self.b))
    }

    /// Lab view computed by `math`.
    pub fn lab_with(&self, math: &dyn ColorMath) -> (f64, f64, f64) {
        tuple(math.rgb_to_lab(self.r, self.g, self.b))
    }

    /// LCh view computed by `math`.
    pub fn lch_with(&self, math: &dyn ColorMath) -> (f64, f64, f64) {
        tuple(math.rgb_to_lch(self.r, self.g, self.b))
    }
}

fn tuple([x, y, z]: [f64; 3]) -> (f64, f64, f64) {
    (x, y, z)
}

fn check_unit(channel: &'static str, value: f64) -> Result<(), ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange { channel, value })
    }
}

/// Scales a unit channel to 8 bits, rounding half away from zero.
fn quantize(channel: &'static str, value: f64) -> Result<u8, ColorError> {
    check_unit(channel, value)?;
    Ok((value * 255.0).round() as u8)
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hex.hash(state);
    }
}

/// Compares against a hex string. An invalid string is never equal.
impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        Color::from_hex(other).is_ok_and(|c| c.hex == self.hex)
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Color {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Color> for str {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

impl PartialEq<Color> for &str {
    fn eq(&self, other: &Color) -> bool {
        other == *self
    }
}

impl PartialEq<Color> for String {
    fn eq(&self, other: &Color) -> bool {
        other == self.as_str()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color('{}')", self.hex)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
