//! Pure conversion functions between sRGB and the derived color spaces.
//!
//! RGB components are sRGB in [0, 1]. XYZ is relative to the sRGB (D65)
//! primaries with Y of white equal to 1. Lab and LCh take the reference
//! white as a parameter; for a non-D65 white, XYZ is first adapted with the
//! Bradford transform. Uses `f64` throughout.

/// A reference white as XYZ tristimulus values (Y = 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE D65 reference white (the sRGB native white).
pub const D65: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// CIE D50 reference white (ICC profile connection space).
pub const D50: Xyz = Xyz {
    x: 0.96422,
    y: 1.0,
    z: 0.82521,
};

/// CIE constant epsilon = (6/29)^3.
const EPS: f64 = 216.0 / 24389.0;
/// CIE constant kappa = (29/3)^3.
const KAPPA: f64 = 24389.0 / 27.0;

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts sRGB to CIE XYZ (D65).
pub fn rgb_to_xyz(r: f64, g: f64, b: f64) -> Xyz {
    let r = srgb_component_to_linear(r);
    let g = srgb_component_to_linear(g);
    let b = srgb_component_to_linear(b);
    Xyz {
        x: 0.4124564 * r + 0.3575761 * g + 0.1804375 * b,
        y: 0.2126729 * r + 0.7151522 * g + 0.0721750 * b,
        z: 0.0193339 * r + 0.1191920 * g + 0.9503041 * b,
    }
}

/// Adapts a D65 XYZ color to D50 with the Bradford transform.
pub fn adapt_d65_to_d50(c: Xyz) -> Xyz {
    Xyz {
        x: 1.0478112 * c.x + 0.0228866 * c.y - 0.0501270 * c.z,
        y: 0.0295424 * c.x + 0.9904844 * c.y - 0.0170491 * c.z,
        z: -0.0092345 * c.x + 0.0150436 * c.y + 0.7521316 * c.z,
    }
}

/// Wraps an angle in degrees into [0, 360).
///
/// `rem_euclid` can round a tiny negative angle up to exactly 360.0.
fn wrap_degrees(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPS {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Converts XYZ to CIE L*a*b* relative to `white`.
pub fn xyz_to_lab(c: Xyz, white: Xyz) -> [f64; 3] {
    let fx = lab_f(c.x / white.x);
    let fy = lab_f(c.y / white.y);
    let fz = lab_f(c.z / white.z);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Converts Lab to LCh (cylindrical form), hue in degrees [0, 360).
///
/// NaN guard: if chroma is less than 1e-10, hue is set to 0.0 to avoid
/// indeterminate `atan2(0, 0)` results.
pub fn lab_to_lch([l, a, b]: [f64; 3]) -> [f64; 3] {
    let c = a.hypot(b);
    let h = if c < 1e-10 {
        0.0
    } else {
        wrap_degrees(b.atan2(a).to_degrees())
    };
    [l, c, h]
}

/// Converts sRGB to HSL: hue in degrees [0, 360), saturation and lightness
/// in [0, 1]. Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d < 1e-12 {
        return [0.0, 0.0, l];
    }
    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        (g - b) / d
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    [wrap_degrees(h * 60.0), s.min(1.0), l]
}

/// Converts HSL to sRGB. The hue is wrapped into [0, 360) first.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = wrap_degrees(h) / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}
