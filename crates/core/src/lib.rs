#![deny(unsafe_code)]
//! Core types for qualpal, the qualitative color palette toolkit.
//!
//! Provides the immutable [`Color`] value (canonical `#rrggbb` identity with
//! RGB, HSL, XYZ, Lab and LCh views), the immutable ordered [`Palette`]
//! collection, the [`ColorError`] type, and the [`ColorMath`] provider seam
//! through which derived color spaces are computed.

pub mod color;
pub mod error;
pub mod palette;
pub mod provider;

pub use color::Color;
pub use error::ColorError;
pub use palette::{Palette, PaletteEntry};
pub use provider::{install_provider, provider, provider_available, ColorMath};
