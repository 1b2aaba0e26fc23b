//! Ordered, immutable collection of [`Color`] values.
//!
//! A palette keeps its colors exactly in construction order, duplicates
//! included. It never changes after construction; slicing produces a new
//! palette rather than a view.

use crate::color::Color;
use crate::error::ColorError;
use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::{Bound, RangeBounds};

/// An input element for [`Palette::new`] and [`Palette::contains`]: either an
/// already valid color or a hex string still to be parsed.
#[derive(Debug, Clone)]
pub enum PaletteEntry {
    Color(Color),
    Hex(String),
}

impl PaletteEntry {
    /// Resolves the entry to a color, parsing hex strings.
    pub fn into_color(self) -> Result<Color, ColorError> {
        match self {
            PaletteEntry::Color(c) => Ok(c),
            PaletteEntry::Hex(s) => Color::from_hex(&s),
        }
    }
}

impl From<Color> for PaletteEntry {
    fn from(c: Color) -> Self {
        PaletteEntry::Color(c)
    }
}

impl From<&Color> for PaletteEntry {
    fn from(c: &Color) -> Self {
        PaletteEntry::Color(c.clone())
    }
}

impl From<&str> for PaletteEntry {
    fn from(s: &str) -> Self {
        PaletteEntry::Hex(s.to_string())
    }
}

impl From<String> for PaletteEntry {
    fn from(s: String) -> Self {
        PaletteEntry::Hex(s)
    }
}

impl From<&String> for PaletteEntry {
    fn from(s: &String) -> Self {
        PaletteEntry::Hex(s.clone())
    }
}

/// An ordered, immutable sequence of colors.
///
/// Two palettes are equal when they hold equal colors in the same order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from colors and/or hex strings, keeping their order.
    ///
    /// Hex strings go through [`Color::from_hex`]; the first invalid one
    /// aborts construction with `ColorError::InvalidFormat`. An empty input
    /// gives an empty palette.
    pub fn new<I>(entries: I) -> Result<Self, ColorError>
    where
        I: IntoIterator,
        I::Item: Into<PaletteEntry>,
    {
        let colors = entries
            .into_iter()
            .map(|e| Into::<PaletteEntry>::into(e).into_color())
            .collect::<Result<Vec<_>, _>>()?;
        trace!("built palette of {} colors", colors.len());
        Ok(Self { colors })
    }

    /// Creates a palette from dynamically typed JSON elements.
    ///
    /// String elements are parsed as hex colors. Any other JSON kind
    /// (number, null, object, ...) returns `ColorError::TypeMismatch`.
    pub fn from_values(values: &[Value]) -> Result<Self, ColorError> {
        let colors = values
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::String(s) => Color::from_hex(s),
                other => Err(ColorError::TypeMismatch(format!(
                    "element {i}: expected a color or hex string, got {}",
                    json_kind(other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        trace!("built palette of {} colors from JSON", colors.len());
        Ok(Self { colors })
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`.
    ///
    /// Returns `ColorError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Color, ColorError> {
        self.colors.get(index).ok_or(ColorError::IndexOutOfBounds {
            index,
            len: self.colors.len(),
        })
    }

    /// Returns a new palette holding the colors in `range`, in order.
    ///
    /// Bounds past the end are clamped to the palette length, and a range
    /// whose start is not before its end selects nothing. An empty selection
    /// is a valid empty palette, never an error.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Palette {
        let len = self.colors.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        let colors = if start < end {
            self.colors[start..end].to_vec()
        } else {
            Vec::new()
        };
        Palette { colors }
    }

    /// Iterates over the colors in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Says whether the palette holds a color equal to `item`.
    ///
    /// A hex string that fails to parse is simply not found.
    pub fn contains(&self, item: impl Into<PaletteEntry>) -> bool {
        let entry: PaletteEntry = item.into();
        entry
            .into_color()
            .is_ok_and(|color| self.colors.contains(&color))
    }

    /// Returns the canonical hex strings, in palette order.
    pub fn hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.hex().to_string()).collect()
    }

    /// Returns the RGB triples in [0, 1], in palette order.
    pub fn rgb(&self) -> Vec<(f64, f64, f64)> {
        self.colors.iter().map(Color::rgb).collect()
    }
}

/// Names a JSON value's kind for error messages.
fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<&Value> for Palette {
    type Error = ColorError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Palette::from_values(items),
            other => Err(ColorError::TypeMismatch(format!(
                "expected an array of colors, got {}",
                json_kind(other)
            ))),
        }
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Palette {
            colors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Palette([")?;
        for (i, c) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", c.hex())?;
        }
        f.write_str("])")
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.colors)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Palette::try_from(&value).map_err(serde::de::Error::custom)
    }
}
