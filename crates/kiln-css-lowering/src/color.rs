//! Parsing, lowering and minification of individual CSS colors.

use crate::color_spaces::{
    ColorSpace, gamut_map_xyz_to_srgb, hsl_to_srgb, hwb_to_srgb, lch_to_lab, srgb_to_xyz,
    xyz_to_srgb,
};
use crate::options::LowerOptions;
use kiln_common::Loc;
use kiln_common::limits::COLOR_COMPONENT_DECIMALS;
use kiln_compat::CssFeature;
use kiln_css_lexer::{Token, TokenKind};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::f64::consts::PI;

/// A color reduced to numbers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParsedColor {
    /// Packed `0xRRGGBBAA`. For colors with a color space this is the sRGB
    /// value clipped to the gamut; only its alpha is exact.
    pub hex: u32,
    /// True for `lab()`, `lch()`, `oklab()`, `oklch()` and `color()`, whose
    /// exact value is stored in `x`, `y` and `z`.
    pub has_color_space: bool,
    /// D65 XYZ, valid when `has_color_space` is set.
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ParsedColor {
    fn from_hex(hex: u32) -> Self {
        ParsedColor {
            hex,
            has_color_space: false,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    fn from_srgb((r, g, b): (f64, f64, f64), alpha: f64) -> Self {
        ParsedColor::from_hex(pack_hex(
            to_byte(r),
            to_byte(g),
            to_byte(b),
            to_byte(alpha),
        ))
    }

    fn from_xyz((x, y, z): (f64, f64, f64), alpha: f64) -> Self {
        let (r, g, b) = xyz_to_srgb(x, y, z);
        ParsedColor {
            hex: pack_hex(to_byte(r), to_byte(g), to_byte(b), to_byte(alpha)),
            has_color_space: true,
            x,
            y,
            z,
        }
    }
}

pub const fn hex_r(hex: u32) -> u32 {
    hex >> 24
}

pub const fn hex_g(hex: u32) -> u32 {
    (hex >> 16) & 0xFF
}

pub const fn hex_b(hex: u32) -> u32 {
    (hex >> 8) & 0xFF
}

pub const fn hex_a(hex: u32) -> u32 {
    hex & 0xFF
}

pub const fn pack_hex(r: u32, g: u32, b: u32, a: u32) -> u32 {
    (r << 24) | (g << 16) | (b << 8) | a
}

fn to_byte(v: f64) -> u32 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u32
}

/// Format with at most `decimals` fractional digits and no trailing zeros.
pub fn format_float(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    match text {
        "-0" => "0".to_string(),
        _ => text.to_string(),
    }
}

/// Convert a D65 XYZ color to a packed hex color, or `None` if any channel
/// falls outside what a hex color can represent.
pub fn try_to_convert_to_hex_without_clipping(x: f64, y: f64, z: f64, alpha: u32) -> Option<u32> {
    let (r, g, b) = xyz_to_srgb(x, y, z);
    let channel = |v: f64| {
        let byte = (v * 255.0).round();
        (0.0..=255.0).contains(&byte).then_some(byte as u32)
    };
    Some(pack_hex(channel(r)?, channel(g)?, channel(b)?, alpha))
}

// =============================================================================
// Recognition
// =============================================================================

/// Whether a token can start a color. This is looser than [`parse_color`]:
/// `currentcolor` and `color-mix()` are colors whose value is not known here.
pub fn looks_like_color(token: &Token) -> bool {
    match token.kind {
        TokenKind::Ident => {
            let name = token.text.to_ascii_lowercase();
            name == "transparent" || name == "currentcolor" || NAMED_COLORS.contains_key(&*name)
        }
        TokenKind::Hash => true,
        TokenKind::Function => matches!(
            token.text.to_ascii_lowercase().as_str(),
            "rgb"
                | "rgba"
                | "hsl"
                | "hsla"
                | "hwb"
                | "lab"
                | "lch"
                | "oklab"
                | "oklch"
                | "color"
                | "color-mix"
                | "light-dark"
        ),
        _ => false,
    }
}

/// Convert an angle token (`deg`, `grad`, `rad`, `turn` or a bare `0`) to
/// degrees.
pub fn degrees_for_angle(token: &Token) -> Option<f64> {
    match token.kind {
        TokenKind::Number => {
            let value = token.numeric_value()?;
            (value == 0.0).then_some(0.0)
        }
        TokenKind::Dimension => {
            let value = token.numeric_value()?;
            match token.dimension_unit().to_ascii_lowercase().as_str() {
                "deg" => Some(value),
                "grad" => Some(value * (360.0 / 400.0)),
                "rad" => Some(value * (180.0 / PI)),
                "turn" => Some(value * 360.0),
                _ => None,
            }
        }
        _ => None,
    }
}

// =============================================================================
// Parsing
// =============================================================================

pub fn parse_color(token: &Token) -> Option<ParsedColor> {
    match token.kind {
        TokenKind::Ident => {
            let name = token.text.to_ascii_lowercase();
            if name == "transparent" {
                return Some(ParsedColor::from_hex(0));
            }
            let rgb = *NAMED_COLORS.get(&*name)?;
            Some(ParsedColor::from_hex((rgb << 8) | 0xFF))
        }
        TokenKind::Hash => parse_hex(&token.text).map(ParsedColor::from_hex),
        TokenKind::Function => parse_color_function(token),
        _ => None,
    }
}

/// Parse the digits of a 3, 4, 6 or 8 digit hex color.
pub fn parse_hex(text: &str) -> Option<u32> {
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digits = u32::from_str_radix(text, 16).ok()?;
    let expand = |nibble: u32| nibble | (nibble << 4);
    match text.len() {
        3 => Some(pack_hex(
            expand((digits >> 8) & 0xF),
            expand((digits >> 4) & 0xF),
            expand(digits & 0xF),
            0xFF,
        )),
        4 => Some(pack_hex(
            expand((digits >> 12) & 0xF),
            expand((digits >> 8) & 0xF),
            expand((digits >> 4) & 0xF),
            expand(digits & 0xF),
        )),
        6 => Some((digits << 8) | 0xFF),
        8 => Some(digits),
        _ => None,
    }
}

/// The three channel tokens and optional alpha token of a color function.
struct ColorArgs<'a> {
    channels: [&'a Token; 3],
    alpha: Option<&'a Token>,
}

/// Split the arguments of `rgb()`-style functions. Both the legacy comma
/// syntax and the space-separated syntax with `/ alpha` are accepted.
fn split_color_args(args: &[Token]) -> Option<ColorArgs<'_>> {
    if args.iter().any(|t| t.kind == TokenKind::Comma) {
        let mut values = Vec::with_capacity(4);
        for (i, token) in args.iter().enumerate() {
            let expect_comma = i % 2 == 1;
            if (token.kind == TokenKind::Comma) != expect_comma {
                return None;
            }
            if !expect_comma {
                values.push(token);
            }
        }
        if args.len() % 2 == 0 {
            return None;
        }
        return match *values.as_slice() {
            [a, b, c] => Some(ColorArgs {
                channels: [a, b, c],
                alpha: None,
            }),
            [a, b, c, alpha] => Some(ColorArgs {
                channels: [a, b, c],
                alpha: Some(alpha),
            }),
            _ => None,
        };
    }

    match args {
        [a, b, c] => Some(ColorArgs {
            channels: [a, b, c],
            alpha: None,
        }),
        [a, b, c, slash, alpha] if slash.kind == TokenKind::DelimSlash => Some(ColorArgs {
            channels: [a, b, c],
            alpha: Some(alpha),
        }),
        _ => None,
    }
}

fn is_none(token: &Token) -> bool {
    token.is_ident("none")
}

/// A number or a percentage scaled so that `100%` equals `percent_reference`.
fn number_or_percentage(token: &Token, percent_reference: f64) -> Option<f64> {
    if is_none(token) {
        return Some(0.0);
    }
    match token.kind {
        TokenKind::Number => token.numeric_value(),
        TokenKind::Percentage => Some(token.numeric_value()? / 100.0 * percent_reference),
        _ => None,
    }
}

fn hue(token: &Token) -> Option<f64> {
    if is_none(token) {
        return Some(0.0);
    }
    match token.kind {
        TokenKind::Number => token.numeric_value(),
        _ => degrees_for_angle(token),
    }
}

fn alpha(token: Option<&Token>) -> Option<f64> {
    match token {
        Some(token) => Some(number_or_percentage(token, 1.0)?.clamp(0.0, 1.0)),
        None => Some(1.0),
    }
}

fn parse_color_function(token: &Token) -> Option<ParsedColor> {
    let name = token.text.to_ascii_lowercase();
    let args = token.children();

    if name == "color" {
        return parse_predefined_color(args);
    }

    let ColorArgs {
        channels: [c0, c1, c2],
        alpha: alpha_token,
    } = split_color_args(args)?;
    let alpha = alpha(alpha_token)?;

    match name.as_str() {
        "rgb" | "rgba" => {
            let r = number_or_percentage(c0, 255.0)? / 255.0;
            let g = number_or_percentage(c1, 255.0)? / 255.0;
            let b = number_or_percentage(c2, 255.0)? / 255.0;
            Some(ParsedColor::from_srgb((r, g, b), alpha))
        }
        "hsl" | "hsla" => {
            let h = hue(c0)?;
            let s = number_or_percentage(c1, 100.0)? / 100.0;
            let l = number_or_percentage(c2, 100.0)? / 100.0;
            let rgb = hsl_to_srgb(h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
            Some(ParsedColor::from_srgb(rgb, alpha))
        }
        "hwb" => {
            let h = hue(c0)?;
            let w = number_or_percentage(c1, 100.0)? / 100.0;
            let b = number_or_percentage(c2, 100.0)? / 100.0;
            let rgb = hwb_to_srgb(h, w.clamp(0.0, 1.0), b.clamp(0.0, 1.0));
            Some(ParsedColor::from_srgb(rgb, alpha))
        }
        "lab" => {
            let l = number_or_percentage(c0, 100.0)?.clamp(0.0, 100.0);
            let a = number_or_percentage(c1, 125.0)?;
            let b = number_or_percentage(c2, 125.0)?;
            Some(ParsedColor::from_xyz(ColorSpace::Lab.to_xyz((l, a, b)), alpha))
        }
        "lch" => {
            let l = number_or_percentage(c0, 100.0)?.clamp(0.0, 100.0);
            let c = number_or_percentage(c1, 150.0)?.max(0.0);
            let h = hue(c2)?;
            let lab = lch_to_lab(l, c, h);
            Some(ParsedColor::from_xyz(ColorSpace::Lab.to_xyz(lab), alpha))
        }
        "oklab" => {
            let l = number_or_percentage(c0, 1.0)?.clamp(0.0, 1.0);
            let a = number_or_percentage(c1, 0.4)?;
            let b = number_or_percentage(c2, 0.4)?;
            Some(ParsedColor::from_xyz(ColorSpace::Oklab.to_xyz((l, a, b)), alpha))
        }
        "oklch" => {
            let l = number_or_percentage(c0, 1.0)?.clamp(0.0, 1.0);
            let c = number_or_percentage(c1, 0.4)?.max(0.0);
            let h = hue(c2)?;
            Some(ParsedColor::from_xyz(ColorSpace::Oklch.to_xyz((l, c, h)), alpha))
        }
        _ => None,
    }
}

/// `color(<space> c1 c2 c3 [/ alpha])` for the predefined RGB and XYZ spaces.
fn parse_predefined_color(args: &[Token]) -> Option<ParsedColor> {
    let (space, rest) = args.split_first()?;
    if space.kind != TokenKind::Ident {
        return None;
    }
    let space = match ColorSpace::from_name(&space.text)? {
        ColorSpace::Hsl
        | ColorSpace::Hwb
        | ColorSpace::Lab
        | ColorSpace::Lch
        | ColorSpace::Oklab
        | ColorSpace::Oklch => return None,
        space => space,
    };
    if rest.iter().any(|t| t.kind == TokenKind::Comma) {
        return None;
    }

    let ColorArgs {
        channels: [c0, c1, c2],
        alpha: alpha_token,
    } = split_color_args(rest)?;
    let v0 = number_or_percentage(c0, 1.0)?;
    let v1 = number_or_percentage(c1, 1.0)?;
    let v2 = number_or_percentage(c2, 1.0)?;
    let alpha = alpha(alpha_token)?;
    Some(ParsedColor::from_xyz(space.to_xyz((v0, v1, v2)), alpha))
}

// =============================================================================
// Lowering and minification
// =============================================================================

fn is_color_space_function(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "lab" | "lch" | "oklab" | "oklch" | "color"
    )
}

fn is_srgb_function(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "rgb" | "rgba" | "hsl" | "hsla" | "hwb"
    )
}

/// Rewrite a single color for the configured targets.
///
/// - `#rgba` / `#rrggbbaa` become `rgba()` when hex alpha is unsupported.
/// - Color-space functions become sRGB when unsupported. Colors outside the
///   sRGB gamut are gamut mapped and `would_clip_color` is set.
/// - With syntax minification, colors are printed in their shortest form.
///
/// Tokens that are not parseable colors are returned unchanged.
pub fn lower_and_minify_color(
    token: Token,
    options: &LowerOptions,
    would_clip_color: &mut bool,
) -> Token {
    match token.kind {
        TokenKind::Hash => {
            let Some(hex) = parse_hex(&token.text) else {
                return token;
            };
            let has_alpha_digits = matches!(token.text.len(), 4 | 8);
            if has_alpha_digits && options.unsupports(CssFeature::HEX_RGBA) {
                return color_token(token.loc, hex, options).with_whitespace(token.whitespace);
            }
            if options.minify_syntax {
                return color_token(token.loc, hex, options).with_whitespace(token.whitespace);
            }
            token
        }

        TokenKind::Ident if options.minify_syntax => {
            let name = token.text.to_ascii_lowercase();
            match NAMED_COLORS.get(&*name) {
                Some(&rgb) => color_token(token.loc, (rgb << 8) | 0xFF, options)
                    .with_whitespace(token.whitespace),
                None => token,
            }
        }

        TokenKind::Function
            if is_color_space_function(&token.text)
                && options.unsupports(CssFeature::COLOR_FUNCTIONS) =>
        {
            let Some(color) = parse_color(&token) else {
                return token;
            };
            let xyz = (color.x, color.y, color.z);
            let alpha = hex_a(color.hex);
            let hex = match try_to_convert_to_hex_without_clipping(xyz.0, xyz.1, xyz.2, alpha) {
                Some(hex) => hex,
                None => {
                    tracing::trace!(function = %token.text, "color outside the sRGB gamut");
                    *would_clip_color = true;
                    let (r, g, b) = gamut_map_xyz_to_srgb(xyz);
                    pack_hex(to_byte(r), to_byte(g), to_byte(b), alpha)
                }
            };
            color_token(token.loc, hex, options).with_whitespace(token.whitespace)
        }

        // hwb() is always inside the sRGB gamut
        TokenKind::Function
            if token.text.eq_ignore_ascii_case("hwb") && options.unsupports(CssFeature::HWB) =>
        {
            match parse_color(&token) {
                Some(color) => {
                    color_token(token.loc, color.hex, options).with_whitespace(token.whitespace)
                }
                None => token,
            }
        }

        TokenKind::Function if options.minify_syntax && is_srgb_function(&token.text) => {
            match parse_color(&token) {
                Some(color) if hex_a(color.hex) == 0xFF => {
                    color_token(token.loc, color.hex, options).with_whitespace(token.whitespace)
                }
                _ => token,
            }
        }

        _ => token,
    }
}

/// Emit a packed color in whichever form the targets allow, shortest first
/// when minifying.
fn color_token(loc: Loc, hex: u32, options: &LowerOptions) -> Token {
    let alpha = hex_a(hex);
    if alpha != 0xFF && options.unsupports(CssFeature::HEX_RGBA) {
        return rgba_token(loc, hex, options);
    }

    let text = if alpha == 0xFF {
        format!("{:06x}", hex >> 8)
    } else {
        format!("{hex:08x}")
    };
    if !options.minify_syntax {
        return Token::new(loc, TokenKind::Hash, text);
    }

    let short = shorten_hex(&text).unwrap_or(text);
    if alpha == 0xFF {
        if let Some(name) = SHORTEST_COLOR_NAMES.get(&(hex >> 8)) {
            if name.len() < short.len() + 1 {
                return Token::new(loc, TokenKind::Ident, *name);
            }
        }
    }
    Token::new(loc, TokenKind::Hash, short)
}

/// `aabbcc` → `abc` (and `aabbccdd` → `abcd`) when every pair repeats.
fn shorten_hex(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    if bytes.len() % 2 != 0 || !bytes.chunks(2).all(|pair| pair[0] == pair[1]) {
        return None;
    }
    Some(bytes.chunks(2).map(|pair| pair[0] as char).collect())
}

fn rgba_token(loc: Loc, hex: u32, options: &LowerOptions) -> Token {
    let number = |value: String| Token::new(loc, TokenKind::Number, value);
    let alpha = format_float(f64::from(hex_a(hex)) / 255.0, COLOR_COMPONENT_DECIMALS);
    let children = vec![
        number(hex_r(hex).to_string()),
        options.comma_token(loc),
        number(hex_g(hex).to_string()),
        options.comma_token(loc),
        number(hex_b(hex).to_string()),
        options.comma_token(loc),
        number(alpha),
    ];
    Token::function(loc, "rgba", children)
}

/// D65 XYZ of a parsed color, computing it from the hex value when the color
/// has no color space of its own.
pub fn parsed_color_to_xyz(color: &ParsedColor) -> (f64, f64, f64) {
    if color.has_color_space {
        return (color.x, color.y, color.z);
    }
    srgb_to_xyz(
        f64::from(hex_r(color.hex)) / 255.0,
        f64::from(hex_g(color.hex)) / 255.0,
        f64::from(hex_b(color.hex)) / 255.0,
    )
}

// =============================================================================
// Named colors
// =============================================================================

static NAMED_COLORS: Lazy<FxHashMap<&'static str, u32>> =
    Lazy::new(|| NAMED_COLOR_TABLE.iter().copied().collect());

/// The shortest name for each named RGB value.
static SHORTEST_COLOR_NAMES: Lazy<FxHashMap<u32, &'static str>> = Lazy::new(|| {
    let mut names: FxHashMap<u32, &'static str> = FxHashMap::default();
    for &(name, rgb) in NAMED_COLOR_TABLE {
        names
            .entry(rgb)
            .and_modify(|existing| {
                if name.len() < existing.len() {
                    *existing = name;
                }
            })
            .or_insert(name);
    }
    names
});

const NAMED_COLOR_TABLE: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

#[cfg(test)]
#[path = "../tests/color_tests.rs"]
mod tests;
