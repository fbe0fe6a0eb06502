//! Color-space conversions used by gradient interpolation.
//!
//! Every interpolation space converts to and from CIE XYZ relative to the D65
//! white point, which is the hub all other conversions go through. Formulas
//! and matrices follow the CSS Color 4 sample code.
//!
//! Channel order matches the CSS function syntax of each space:
//! - rectangular RGB-like spaces: `(r, g, b)` in `0..=1`
//! - `hsl`: `(h, s, l)` with `s` and `l` in `0..=1`
//! - `hwb`: `(h, w, b)` with `w` and `b` in `0..=1`
//! - `lab` / `oklab`: `(l, a, b)`
//! - `lch` / `oklch`: `(l, c, h)`
//!
//! Hues are in degrees. An achromatic HSL/HWB color has a powerless hue, which
//! is stored as `NaN` and resolved during interpolation.

use kiln_common::limits::{GAMUT_MAPPING_EPSILON, GAMUT_MAPPING_JND};
use std::f64::consts::PI;

pub type Channels = (f64, f64, f64);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    A98Rgb,
    DisplayP3,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
    ProphotoRgb,
    Rec2020,
    Srgb,
    SrgbLinear,
    XyzD50,
    XyzD65,
}

impl ColorSpace {
    /// Look up an interpolation space by its CSS name. `xyz` means `xyz-d65`.
    pub fn from_name(name: &str) -> Option<ColorSpace> {
        let space = match name.to_ascii_lowercase().as_str() {
            "a98-rgb" => ColorSpace::A98Rgb,
            "display-p3" => ColorSpace::DisplayP3,
            "hsl" => ColorSpace::Hsl,
            "hwb" => ColorSpace::Hwb,
            "lab" => ColorSpace::Lab,
            "lch" => ColorSpace::Lch,
            "oklab" => ColorSpace::Oklab,
            "oklch" => ColorSpace::Oklch,
            "prophoto-rgb" => ColorSpace::ProphotoRgb,
            "rec2020" => ColorSpace::Rec2020,
            "srgb" => ColorSpace::Srgb,
            "srgb-linear" => ColorSpace::SrgbLinear,
            "xyz" | "xyz-d65" => ColorSpace::XyzD65,
            "xyz-d50" => ColorSpace::XyzD50,
            _ => return None,
        };
        Some(space)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorSpace::A98Rgb => "a98-rgb",
            ColorSpace::DisplayP3 => "display-p3",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Hwb => "hwb",
            ColorSpace::Lab => "lab",
            ColorSpace::Lch => "lch",
            ColorSpace::Oklab => "oklab",
            ColorSpace::Oklch => "oklch",
            ColorSpace::ProphotoRgb => "prophoto-rgb",
            ColorSpace::Rec2020 => "rec2020",
            ColorSpace::Srgb => "srgb",
            ColorSpace::SrgbLinear => "srgb-linear",
            ColorSpace::XyzD50 => "xyz-d50",
            ColorSpace::XyzD65 => "xyz-d65",
        }
    }

    /// Hue-based spaces, which support a hue interpolation method.
    pub const fn is_polar(self) -> bool {
        self.hue_channel_index().is_some()
    }

    /// Index of the hue channel, which is never premultiplied and is
    /// interpolated around the color wheel.
    pub const fn hue_channel_index(self) -> Option<usize> {
        match self {
            ColorSpace::Hsl | ColorSpace::Hwb => Some(0),
            ColorSpace::Lch | ColorSpace::Oklch => Some(2),
            _ => None,
        }
    }

    /// Convert D65 XYZ into this space.
    pub fn from_xyz(self, (x, y, z): Channels) -> Channels {
        match self {
            ColorSpace::A98Rgb => {
                let (r, g, b) = multiply_matrix(&XYZ_TO_LIN_A98, x, y, z);
                (gam_a98(r), gam_a98(g), gam_a98(b))
            }
            ColorSpace::DisplayP3 => {
                let (r, g, b) = multiply_matrix(&XYZ_TO_LIN_P3, x, y, z);
                gam_srgb(r, g, b)
            }
            ColorSpace::Hsl => srgb_to_hsl(gam_srgb_tuple(xyz_to_lin_srgb(x, y, z))),
            ColorSpace::Hwb => srgb_to_hwb(gam_srgb_tuple(xyz_to_lin_srgb(x, y, z))),
            ColorSpace::Lab => xyz_d50_to_lab(xyz_d65_to_d50(x, y, z)),
            ColorSpace::Lch => rectangular_to_polar(xyz_d50_to_lab(xyz_d65_to_d50(x, y, z))),
            ColorSpace::Oklab => xyz_to_oklab(x, y, z),
            ColorSpace::Oklch => rectangular_to_polar(xyz_to_oklab(x, y, z)),
            ColorSpace::ProphotoRgb => {
                let (x, y, z) = xyz_d65_to_d50(x, y, z);
                let (r, g, b) = multiply_matrix(&XYZ_D50_TO_LIN_PROPHOTO, x, y, z);
                (gam_prophoto(r), gam_prophoto(g), gam_prophoto(b))
            }
            ColorSpace::Rec2020 => {
                let (r, g, b) = multiply_matrix(&XYZ_TO_LIN_REC2020, x, y, z);
                (gam_rec2020(r), gam_rec2020(g), gam_rec2020(b))
            }
            ColorSpace::Srgb => gam_srgb_tuple(xyz_to_lin_srgb(x, y, z)),
            ColorSpace::SrgbLinear => xyz_to_lin_srgb(x, y, z),
            ColorSpace::XyzD50 => xyz_d65_to_d50(x, y, z),
            ColorSpace::XyzD65 => (x, y, z),
        }
    }

    /// Convert from this space into D65 XYZ.
    pub fn to_xyz(self, (v0, v1, v2): Channels) -> Channels {
        match self {
            ColorSpace::A98Rgb => {
                multiply_matrix(&LIN_A98_TO_XYZ, lin_a98(v0), lin_a98(v1), lin_a98(v2))
            }
            ColorSpace::DisplayP3 => {
                let (r, g, b) = lin_srgb(v0, v1, v2);
                multiply_matrix(&LIN_P3_TO_XYZ, r, g, b)
            }
            ColorSpace::Hsl => {
                let (r, g, b) = hsl_to_srgb(v0, v1, v2);
                let (r, g, b) = lin_srgb(r, g, b);
                lin_srgb_to_xyz(r, g, b)
            }
            ColorSpace::Hwb => {
                let (r, g, b) = hwb_to_srgb(v0, v1, v2);
                let (r, g, b) = lin_srgb(r, g, b);
                lin_srgb_to_xyz(r, g, b)
            }
            ColorSpace::Lab => {
                let (x, y, z) = lab_to_xyz_d50(v0, v1, v2);
                xyz_d50_to_d65(x, y, z)
            }
            ColorSpace::Lch => {
                let (l, a, b) = polar_to_rectangular(v0, v1, v2);
                let (x, y, z) = lab_to_xyz_d50(l, a, b);
                xyz_d50_to_d65(x, y, z)
            }
            ColorSpace::Oklab => oklab_to_xyz(v0, v1, v2),
            ColorSpace::Oklch => {
                let (l, a, b) = polar_to_rectangular(v0, v1, v2);
                oklab_to_xyz(l, a, b)
            }
            ColorSpace::ProphotoRgb => {
                let (x, y, z) = multiply_matrix(
                    &LIN_PROPHOTO_TO_XYZ_D50,
                    lin_prophoto(v0),
                    lin_prophoto(v1),
                    lin_prophoto(v2),
                );
                xyz_d50_to_d65(x, y, z)
            }
            ColorSpace::Rec2020 => multiply_matrix(
                &LIN_REC2020_TO_XYZ,
                lin_rec2020(v0),
                lin_rec2020(v1),
                lin_rec2020(v2),
            ),
            ColorSpace::Srgb => {
                let (r, g, b) = lin_srgb(v0, v1, v2);
                lin_srgb_to_xyz(r, g, b)
            }
            ColorSpace::SrgbLinear => lin_srgb_to_xyz(v0, v1, v2),
            ColorSpace::XyzD50 => xyz_d50_to_d65(v0, v1, v2),
            ColorSpace::XyzD65 => (v0, v1, v2),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HueMethod {
    #[default]
    Shorter,
    Longer,
    Increasing,
    Decreasing,
}

impl HueMethod {
    pub fn from_name(name: &str) -> Option<HueMethod> {
        let method = match name.to_ascii_lowercase().as_str() {
            "shorter" => HueMethod::Shorter,
            "longer" => HueMethod::Longer,
            "increasing" => HueMethod::Increasing,
            "decreasing" => HueMethod::Decreasing,
            _ => return None,
        };
        Some(method)
    }

    pub const fn name(self) -> &'static str {
        match self {
            HueMethod::Shorter => "shorter",
            HueMethod::Longer => "longer",
            HueMethod::Increasing => "increasing",
            HueMethod::Decreasing => "decreasing",
        }
    }
}

// =============================================================================
// Premultiplication and interpolation
// =============================================================================

/// Scale every non-hue channel by `alpha`.
pub fn premultiply(space: ColorSpace, channels: Channels, alpha: f64) -> Channels {
    if alpha >= 1.0 {
        return channels;
    }
    scale_non_hue(space, channels, |v| v * alpha)
}

/// Undo [`premultiply`]. Fully transparent colors are left alone since their
/// channels cannot be recovered.
pub fn unpremultiply(space: ColorSpace, channels: Channels, alpha: f64) -> Channels {
    if alpha <= 0.0 || alpha >= 1.0 {
        return channels;
    }
    scale_non_hue(space, channels, |v| v / alpha)
}

fn scale_non_hue(space: ColorSpace, (v0, v1, v2): Channels, f: impl Fn(f64) -> f64) -> Channels {
    match space.hue_channel_index() {
        Some(0) => (v0, f(v1), f(v2)),
        Some(_) => (f(v0), f(v1), v2),
        None => (f(v0), f(v1), f(v2)),
    }
}

/// Interpolate between two hues (in degrees) using the given method.
///
/// Both hues are normalized to `[0, 1)` turns, then one endpoint is shifted by
/// a whole turn so that a straight interpolation travels the requested arc.
/// A missing (`NaN`) hue takes the value of the other endpoint and stays
/// there, whatever the method.
pub fn interpolate_hues(a: f64, b: f64, t: f64, method: HueMethod) -> f64 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => return 0.0,
        (true, false) => return b,
        (false, true) => return a,
        (false, false) => {}
    }

    let mut a = a / 360.0;
    let mut b = b / 360.0;
    a -= a.floor();
    b -= b.floor();

    match method {
        HueMethod::Shorter => {
            let delta = b - a;
            if delta > 0.5 {
                a += 1.0;
            }
            if delta < -0.5 {
                b += 1.0;
            }
        }
        HueMethod::Longer => {
            let delta = b - a;
            if delta > 0.0 && delta < 0.5 {
                a += 1.0;
            }
            if delta > -0.5 && delta <= 0.0 {
                b += 1.0;
            }
        }
        HueMethod::Increasing => {
            if b < a {
                b += 1.0;
            }
        }
        HueMethod::Decreasing => {
            if a < b {
                a += 1.0;
            }
        }
    }

    (a + (b - a) * t) * 360.0
}

/// Linearly interpolate two (premultiplied) colors in `space`, treating the
/// hue channel of polar spaces as circular.
pub fn interpolate_colors(
    space: ColorSpace,
    method: HueMethod,
    a: Channels,
    b: Channels,
    t: f64,
) -> Channels {
    let lerp = |from: f64, to: f64| from + (to - from) * t;
    let v1 = lerp(a.1, b.1);
    match space.hue_channel_index() {
        Some(0) => (interpolate_hues(a.0, b.0, t, method), v1, lerp(a.2, b.2)),
        Some(_) => (lerp(a.0, b.0), v1, interpolate_hues(a.2, b.2, t, method)),
        None => (lerp(a.0, b.0), v1, lerp(a.2, b.2)),
    }
}

// =============================================================================
// sRGB
// =============================================================================

/// Gamma-encoded sRGB to linear light. Negative values are reflected.
pub fn lin_srgb(r: f64, g: f64, b: f64) -> Channels {
    fn component(c: f64) -> f64 {
        let abs = c.abs();
        if abs < 0.04045 {
            return c / 12.92;
        }
        c.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
    (component(r), component(g), component(b))
}

/// Linear-light sRGB to gamma-encoded sRGB. Negative values are reflected.
pub fn gam_srgb(r: f64, g: f64, b: f64) -> Channels {
    fn component(c: f64) -> f64 {
        let abs = c.abs();
        if abs > 0.0031308 {
            return c.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055);
        }
        12.92 * c
    }
    (component(r), component(g), component(b))
}

fn gam_srgb_tuple((r, g, b): Channels) -> Channels {
    gam_srgb(r, g, b)
}

const LIN_SRGB_TO_XYZ: [f64; 9] = [
    0.41239079926595934,
    0.357584339383878,
    0.1804807884018343,
    0.21263900587151027,
    0.715168678767756,
    0.07219231536073371,
    0.01933081871559182,
    0.11919477979462598,
    0.9505321522496607,
];

const XYZ_TO_LIN_SRGB: [f64; 9] = [
    3.2409699419045226,
    -1.537383177570094,
    -0.4986107602930034,
    -0.9692436362808796,
    1.8759675015077202,
    0.04155505740717559,
    0.05563007969699366,
    -0.20397695888897652,
    1.0569715142428786,
];

pub fn lin_srgb_to_xyz(r: f64, g: f64, b: f64) -> Channels {
    multiply_matrix(&LIN_SRGB_TO_XYZ, r, g, b)
}

pub fn xyz_to_lin_srgb(x: f64, y: f64, z: f64) -> Channels {
    multiply_matrix(&XYZ_TO_LIN_SRGB, x, y, z)
}

/// Gamma-encoded sRGB straight from D65 XYZ.
pub fn xyz_to_srgb(x: f64, y: f64, z: f64) -> Channels {
    gam_srgb_tuple(xyz_to_lin_srgb(x, y, z))
}

/// D65 XYZ straight from gamma-encoded sRGB.
pub fn srgb_to_xyz(r: f64, g: f64, b: f64) -> Channels {
    let (r, g, b) = lin_srgb(r, g, b);
    lin_srgb_to_xyz(r, g, b)
}

#[inline]
fn multiply_matrix(m: &[f64; 9], x: f64, y: f64, z: f64) -> Channels {
    (
        m[0] * x + m[1] * y + m[2] * z,
        m[3] * x + m[4] * y + m[5] * z,
        m[6] * x + m[7] * y + m[8] * z,
    )
}

// =============================================================================
// HSL / HWB
// =============================================================================

pub fn hsl_to_srgb(h: f64, s: f64, l: f64) -> Channels {
    let h = if h.is_nan() { 0.0 } else { h.rem_euclid(360.0) };
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let a = s * l.min(1.0 - l);
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    (f(0.0), f(8.0), f(4.0))
}

pub fn srgb_to_hsl((r, g, b): Channels) -> Channels {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (min + max) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return (f64::NAN, 0.0, l);
    }

    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (max - l) / l.min(1.0 - l)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h * 60.0, s, l)
}

pub fn hwb_to_srgb(h: f64, w: f64, b: f64) -> Channels {
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return (gray, gray, gray);
    }
    let (r, g, bl) = hsl_to_srgb(h, 1.0, 0.5);
    let scale = 1.0 - w - b;
    (r * scale + w, g * scale + w, bl * scale + w)
}

pub fn srgb_to_hwb(rgb: Channels) -> Channels {
    let (h, _, _) = srgb_to_hsl(rgb);
    let (r, g, b) = rgb;
    (h, r.min(g).min(b), 1.0 - r.max(g).max(b))
}

// =============================================================================
// CIE Lab / LCH and OkLab / OkLCH
// =============================================================================

const D50: [f64; 3] = [0.3457 / 0.3585, 1.0, (1.0 - 0.3457 - 0.3585) / 0.3585];
const LAB_E: f64 = 216.0 / 24389.0;
const LAB_K: f64 = 24389.0 / 27.0;

const XYZ_D65_TO_D50: [f64; 9] = [
    1.0479298208405488,
    0.022946793341019088,
    -0.05019222954313557,
    0.029627815688159344,
    0.990434484573249,
    -0.01707382502938514,
    -0.009243058152591178,
    0.015055144896577895,
    0.7518742899580008,
];

const XYZ_D50_TO_D65: [f64; 9] = [
    0.9554734527042182,
    -0.023098536874261423,
    0.0632593086610217,
    -0.028369706963208136,
    1.0099954580058226,
    0.021041398966943008,
    0.012314001688319899,
    -0.020507696433477912,
    1.3303659366080753,
];

pub fn xyz_d65_to_d50(x: f64, y: f64, z: f64) -> Channels {
    multiply_matrix(&XYZ_D65_TO_D50, x, y, z)
}

pub fn xyz_d50_to_d65(x: f64, y: f64, z: f64) -> Channels {
    multiply_matrix(&XYZ_D50_TO_D65, x, y, z)
}

fn xyz_d50_to_lab((x, y, z): Channels) -> Channels {
    let f = |v: f64| {
        if v > LAB_E {
            v.cbrt()
        } else {
            (LAB_K * v + 16.0) / 116.0
        }
    };
    let f0 = f(x / D50[0]);
    let f1 = f(y / D50[1]);
    let f2 = f(z / D50[2]);
    (116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
}

fn lab_to_xyz_d50(l: f64, a: f64, b: f64) -> Channels {
    let f1 = (l + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let x = if f0.powi(3) > LAB_E {
        f0.powi(3)
    } else {
        (116.0 * f0 - 16.0) / LAB_K
    };
    let y = if l > LAB_K * LAB_E {
        f1.powi(3)
    } else {
        l / LAB_K
    };
    let z = if f2.powi(3) > LAB_E {
        f2.powi(3)
    } else {
        (116.0 * f2 - 16.0) / LAB_K
    };
    (x * D50[0], y * D50[1], z * D50[2])
}

const XYZ_TO_LMS: [f64; 9] = [
    0.8190224432164319,
    0.3619062562801221,
    -0.12887378261216414,
    0.0329836671980271,
    0.9292868468965546,
    0.03614466816999844,
    0.048177199566046255,
    0.26423952494422764,
    0.6335478258136937,
];

const LMS_TO_OKLAB: [f64; 9] = [
    0.2104542553,
    0.7936177850,
    -0.0040720468,
    1.9779984951,
    -2.4285922050,
    0.4505937099,
    0.0259040371,
    0.7827717662,
    -0.8086757660,
];

const OKLAB_TO_LMS: [f64; 9] = [
    0.99999999845051981432,
    0.39633779217376785678,
    0.21580375806075880339,
    1.0000000088817607767,
    -0.1055613423236563494,
    -0.063854174771705903402,
    1.0000000546724109177,
    -0.089484182094965759684,
    -1.2914855378640917399,
];

const LMS_TO_XYZ: [f64; 9] = [
    1.2268798733741557,
    -0.5578149965554813,
    0.28139105017721583,
    -0.04057576262431372,
    1.1122868293970594,
    -0.07171106666151701,
    -0.07637294974672142,
    -0.4214933239627914,
    1.5869240244272418,
];

pub fn xyz_to_oklab(x: f64, y: f64, z: f64) -> Channels {
    let (l, m, s) = multiply_matrix(&XYZ_TO_LMS, x, y, z);
    multiply_matrix(&LMS_TO_OKLAB, l.cbrt(), m.cbrt(), s.cbrt())
}

pub fn oklab_to_xyz(l: f64, a: f64, b: f64) -> Channels {
    let (l, m, s) = multiply_matrix(&OKLAB_TO_LMS, l, a, b);
    multiply_matrix(&LMS_TO_XYZ, l.powi(3), m.powi(3), s.powi(3))
}

fn rectangular_to_polar((l, a, b): Channels) -> Channels {
    let mut h = b.atan2(a) * 180.0 / PI;
    if h < 0.0 {
        h += 360.0;
    }
    let c = (a * a + b * b).sqrt();
    (l, c, h % 360.0)
}

fn polar_to_rectangular(l: f64, c: f64, h: f64) -> Channels {
    let h = if h.is_nan() { 0.0 } else { h };
    let radians = h * PI / 180.0;
    (l, c * radians.cos(), c * radians.sin())
}

pub fn lch_to_lab(l: f64, c: f64, h: f64) -> Channels {
    polar_to_rectangular(l, c, h)
}

// =============================================================================
// Wide-gamut RGB spaces
// =============================================================================

const LIN_P3_TO_XYZ: [f64; 9] = [
    0.4865709486482162,
    0.26566769316909306,
    0.1982172852343625,
    0.2289745640697488,
    0.6917385218365064,
    0.079286914093745,
    0.0,
    0.04511338185890264,
    1.043944368900976,
];

const XYZ_TO_LIN_P3: [f64; 9] = [
    2.493496911941425,
    -0.9313836179191239,
    -0.40271078445071684,
    -0.8294889695615747,
    1.7626640603183463,
    0.023624685841943577,
    0.03584583024378447,
    -0.07617238926804182,
    0.9568845240076872,
];

const LIN_A98_TO_XYZ: [f64; 9] = [
    0.5766690429101305,
    0.1855582379065463,
    0.1882286462349947,
    0.29734497525053605,
    0.6273635662554661,
    0.07529145849399788,
    0.02703136138641234,
    0.07068885253582723,
    0.9913375368376388,
];

const XYZ_TO_LIN_A98: [f64; 9] = [
    2.0415879038107465,
    -0.5650069742788596,
    -0.34473135077832956,
    -0.9692436362808795,
    1.8759675015077202,
    0.04155505740717557,
    0.013444280632031142,
    -0.11836239223101838,
    1.0151749943912054,
];

const LIN_PROPHOTO_TO_XYZ_D50: [f64; 9] = [
    0.7977604896723027,
    0.13518583717574031,
    0.0313493495815248,
    0.2880711282292934,
    0.7118432178101014,
    0.00008565396060525902,
    0.0,
    0.0,
    0.8251046025104601,
];

const XYZ_D50_TO_LIN_PROPHOTO: [f64; 9] = [
    1.3457989731028281,
    -0.25558010007997534,
    -0.05110628506753401,
    -0.5446224939028347,
    1.5082327413132781,
    0.02053603239147973,
    0.0,
    0.0,
    1.2119675456389454,
];

const LIN_REC2020_TO_XYZ: [f64; 9] = [
    0.6369580483012914,
    0.14461690358620832,
    0.1688809751641721,
    0.2627002120112671,
    0.6779980715188708,
    0.05930171646986196,
    0.0,
    0.028072693049087428,
    1.060985057710791,
];

const XYZ_TO_LIN_REC2020: [f64; 9] = [
    1.7166511879712674,
    -0.35567078377639233,
    -0.25336628137365974,
    -0.6666843518324892,
    1.6164812366349395,
    0.01576854581391113,
    0.017639857445310783,
    -0.042770613257808524,
    0.9421031212354738,
];

fn lin_a98(c: f64) -> f64 {
    c.signum() * c.abs().powf(563.0 / 256.0)
}

fn gam_a98(c: f64) -> f64 {
    c.signum() * c.abs().powf(256.0 / 563.0)
}

fn lin_prophoto(c: f64) -> f64 {
    const ET2: f64 = 16.0 / 512.0;
    if c.abs() <= ET2 {
        return c / 16.0;
    }
    c.signum() * c.abs().powf(1.8)
}

fn gam_prophoto(c: f64) -> f64 {
    const ET: f64 = 1.0 / 512.0;
    if c.abs() >= ET {
        return c.signum() * c.abs().powf(1.0 / 1.8);
    }
    16.0 * c
}

const REC2020_ALPHA: f64 = 1.09929682680944;
const REC2020_BETA: f64 = 0.018053968510807;

fn lin_rec2020(c: f64) -> f64 {
    if c.abs() < REC2020_BETA * 4.5 {
        return c / 4.5;
    }
    c.signum() * ((c.abs() + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf(1.0 / 0.45)
}

fn gam_rec2020(c: f64) -> f64 {
    if c.abs() > REC2020_BETA {
        return c.signum() * (REC2020_ALPHA * c.abs().powf(0.45) - (REC2020_ALPHA - 1.0));
    }
    4.5 * c
}

// =============================================================================
// Gamut mapping
// =============================================================================

/// Whether gamma-encoded sRGB channels are all within `0..=1`.
pub fn srgb_in_gamut((r, g, b): Channels) -> bool {
    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&b)
}

fn clip_srgb((r, g, b): Channels) -> Channels {
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

fn delta_eok(a: Channels, b: Channels) -> f64 {
    let dl = a.0 - b.0;
    let da = a.1 - b.1;
    let db = a.2 - b.2;
    (dl * dl + da * da + db * db).sqrt()
}

/// Map a D65 XYZ color into the sRGB gamut by reducing OkLCh chroma
/// (CSS Color 4 binary search). Returns gamma-encoded sRGB.
pub fn gamut_map_xyz_to_srgb(xyz: Channels) -> Channels {
    let srgb = ColorSpace::Srgb.from_xyz(xyz);
    if srgb_in_gamut(srgb) {
        return srgb;
    }

    let (l, c, h) = ColorSpace::Oklch.from_xyz(xyz);
    if l >= 1.0 - GAMUT_MAPPING_EPSILON {
        return (1.0, 1.0, 1.0);
    }
    if l <= GAMUT_MAPPING_EPSILON {
        return (0.0, 0.0, 0.0);
    }

    let mut min = 0.0;
    let mut max = c;
    let mut current = (l, c, h);
    while max - min > GAMUT_MAPPING_EPSILON {
        let chroma = (min + max) / 2.0;
        current.1 = chroma;

        let converted = ColorSpace::Srgb.from_xyz(ColorSpace::Oklch.to_xyz(current));
        if srgb_in_gamut(converted) {
            min = chroma;
            continue;
        }

        let clipped = clip_srgb(converted);
        let clipped_oklab = ColorSpace::Oklab.from_xyz(ColorSpace::Srgb.to_xyz(clipped));
        let current_oklab = polar_to_rectangular(current.0, current.1, current.2);
        if delta_eok(clipped_oklab, current_oklab) < GAMUT_MAPPING_JND {
            return clipped;
        }
        max = chroma;
    }

    clip_srgb(ColorSpace::Srgb.from_xyz(ColorSpace::Oklch.to_xyz(current)))
}

#[cfg(test)]
#[path = "../tests/color_spaces_tests.rs"]
mod tests;
