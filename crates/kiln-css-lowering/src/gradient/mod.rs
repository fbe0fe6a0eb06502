//! CSS gradient lowering.
//!
//! A gradient function is parsed into a [`ParsedGradient`], optionally
//! re-sampled into explicit sRGB color stops when the targets cannot render it
//! natively (see [`expand`]), and then re-emitted with its positions
//! simplified (see [`minify`]).
//!
//! ```css
//! /* input, with gradient interpolation unsupported */
//! background: linear-gradient(in oklab, red, blue);
//! /* output */
//! background: linear-gradient(#ff0000, #f12833, #e2384b 12.5%, #c6496d 25%, #8c53a2,
//!     #5147d2 75%, #3036e8 87.5%, #1d26f4, #0000ff);
//! ```

pub mod expand;
pub mod minify;
pub mod positions;

pub use expand::{make_color_token, make_position_token, try_to_expand_gradient};
pub use minify::{remove_implied_positions, switch_to_double_positions, switch_to_single_positions};
pub use positions::{
    ParsedColorStop, PositionTerms, ValueWithUnit, interpolate_positions, try_to_parse_color_stops,
    try_to_parse_value,
};

use crate::color::{looks_like_color, lower_and_minify_color};
use crate::color_spaces::{ColorSpace, HueMethod};
use crate::options::LowerOptions;
use kiln_compat::CssFeature;
use kiln_css_lexer::{Token, TokenKind, Whitespace, normalize_whitespace, tokens_equal};
use std::slice;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    /// Match a gradient function name, returning the kind and whether it is
    /// the `repeating-` variant.
    pub fn from_function_name(name: &str) -> Option<(GradientKind, bool)> {
        let name = name.to_ascii_lowercase();
        let (name, repeating) = match name.strip_prefix("repeating-") {
            Some(rest) => (rest, true),
            None => (name.as_str(), false),
        };
        let kind = match name {
            "linear-gradient" => GradientKind::Linear,
            "radial-gradient" => GradientKind::Radial,
            "conic-gradient" => GradientKind::Conic,
            _ => return None,
        };
        Some((kind, repeating))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedGradient {
    /// Everything before the first color stop: angle, shape, position and
    /// the `in <space>` clause.
    pub leading_tokens: Vec<Token>,
    pub color_stops: Vec<ColorStop>,
    pub kind: GradientKind,
    pub repeating: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub color: Token,
    /// Zero, one or two positions.
    pub positions: Vec<Token>,
    /// Transition hint between this stop and the next one.
    pub midpoint: Option<Token>,
}

fn is_position(token: &Token) -> bool {
    token.kind.is_numeric() || token.is_function("calc")
}

/// Split a gradient function into leading tokens and color stops.
///
/// Returns `None` for anything that isn't a gradient, for gradients that
/// reference `var()` (which may expand to commas), and for stop syntax that
/// doesn't follow `<color> [<position>{1,2}] [, <hint>]`.
pub fn parse_gradient(token: &Token) -> Option<ParsedGradient> {
    if token.kind != TokenKind::Function {
        return None;
    }
    let (kind, repeating) = GradientKind::from_function_name(&token.text)?;

    let mut tokens = token.children();
    if tokens.iter().any(|t| t.is_function("var")) {
        tracing::trace!(function = %token.text, "gradient uses var(), leaving it untouched");
        return None;
    }

    let mut leading_tokens = Vec::new();
    if let Some(first) = tokens.first() {
        if !looks_like_color(first) {
            let end = tokens
                .iter()
                .position(|t| t.kind == TokenKind::Comma)
                .unwrap_or(tokens.len());
            leading_tokens = tokens[..end].to_vec();
            tokens = tokens.get(end + 1..).unwrap_or(&[]);
        }
    }

    let mut color_stops = Vec::new();
    while let Some((color, rest)) = tokens.split_first() {
        if !looks_like_color(color) {
            tracing::trace!(text = %color.text, "gradient stop does not start with a color");
            return None;
        }
        tokens = rest;

        let mut positions = Vec::new();
        while positions.len() < 2 {
            match tokens.split_first() {
                Some((position, rest)) if is_position(position) => {
                    positions.push(position.clone());
                    tokens = rest;
                }
                _ => break,
            }
        }

        let mut midpoint = None;
        if let Some((comma, rest)) = tokens.split_first() {
            if comma.kind != TokenKind::Comma {
                return None;
            }
            tokens = rest;
            if tokens.is_empty() {
                return None;
            }

            if let Some((hint, rest)) = tokens.split_first() {
                if hint.kind.is_numeric() {
                    midpoint = Some(hint.clone());
                    // A hint needs a color stop on both sides
                    match rest.split_first() {
                        Some((comma, rest)) if comma.kind == TokenKind::Comma && !rest.is_empty() => {
                            tokens = rest
                        }
                        _ => return None,
                    }
                }
            }
        }

        color_stops.push(ColorStop {
            color: color.clone(),
            positions,
            midpoint,
        });
    }

    Some(ParsedGradient {
        leading_tokens,
        color_stops,
        kind,
        repeating,
    })
}

/// Rebuild the gradient function token from its parsed parts.
pub fn generate_gradient(mut token: Token, gradient: ParsedGradient, options: &LowerOptions) -> Token {
    let comma = options.comma_token(token.loc);
    let mut children = gradient.leading_tokens;

    for mut stop in gradient.color_stops {
        if !children.is_empty() {
            children.push(comma.clone());
        }
        if stop.positions.is_empty() && stop.midpoint.is_none() {
            stop.color.whitespace.remove(Whitespace::AFTER);
        }
        children.push(stop.color);
        children.extend(stop.positions);
        if let Some(midpoint) = stop.midpoint {
            children.push(comma.clone());
            children.push(midpoint);
        }
    }

    normalize_whitespace(&mut children, options.minify_whitespace);
    token.children = Some(children);
    token
}

/// The parsed `in <space> [<method> hue]` clause of a gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorInterpolation {
    /// The leading tokens with the clause removed.
    pub remaining: Vec<Token>,
    pub color_space: ColorSpace,
    pub hue_method: HueMethod,
}

/// Find and strip the color interpolation clause from a gradient's leading
/// tokens. A clause naming an unknown space or hue method counts as absent.
pub fn remove_color_interpolation(tokens: &[Token]) -> Option<ColorInterpolation> {
    for i in 0..tokens.len().saturating_sub(1) {
        if !tokens[i].is_ident("in") {
            continue;
        }
        let space = &tokens[i + 1];
        if space.kind != TokenKind::Ident {
            continue;
        }

        let color_space = ColorSpace::from_name(&space.text)?;
        let mut hue_method = HueMethod::Shorter;
        let mut end = i + 2;

        if color_space.is_polar() && i + 3 < tokens.len() {
            let method = &tokens[i + 2];
            if tokens[i + 3].is_ident("hue") && method.kind == TokenKind::Ident {
                hue_method = HueMethod::from_name(&method.text)?;
                end = i + 4;
            }
        }

        let mut remaining: Vec<Token> = tokens[..i].iter().chain(&tokens[end..]).cloned().collect();
        if let Some(first) = remaining.first_mut() {
            first.whitespace.remove(Whitespace::BEFORE);
        }
        if let Some(last) = remaining.last_mut() {
            last.whitespace.remove(Whitespace::AFTER);
        }
        return Some(ColorInterpolation {
            remaining,
            color_space,
            hue_method,
        });
    }
    None
}

/// Lower a gradient function for the configured targets and minify it.
///
/// The gradient is only expanded into explicit stops when it actually uses a
/// feature the targets lack: an interpolation clause, a stop color with a
/// color space, or a transition hint. Unparseable gradients are returned
/// unchanged.
pub fn lower_and_minify_gradient(
    token: Token,
    options: &LowerOptions,
    would_clip_color: &mut bool,
) -> Token {
    let Some(mut gradient) = parse_gradient(&token) else {
        return token;
    };

    let lower_midpoints = options.unsupports(CssFeature::GRADIENT_MIDPOINTS);
    let lower_interpolation = options.unsupports(CssFeature::GRADIENT_INTERPOLATION);

    // Targets that can't interpolate in a color space are assumed to also
    // interpolate colors with a color space incorrectly
    let lower_color_spaces = options.unsupports(CssFeature::COLOR_FUNCTIONS) || lower_interpolation;

    let mut did_expand = false;
    if lower_midpoints || lower_color_spaces {
        if let Some(color_stops) = try_to_parse_color_stops(&gradient) {
            let has_color_space = color_stops.iter().any(|stop| stop.has_color_space);
            let has_midpoint = color_stops.iter().any(|stop| stop.midpoint.is_some());
            let interpolation = remove_color_interpolation(&gradient.leading_tokens);

            // A lone stop paints a solid color in any color space
            let wants_expansion = (interpolation.is_some() && lower_interpolation)
                || (has_color_space && lower_color_spaces)
                || (has_midpoint && lower_midpoints);
            if wants_expansion && color_stops.len() >= 2 {
                let (remaining, color_space, hue_method) = match interpolation {
                    Some(clause) => (clause.remaining, clause.color_space, clause.hue_method),
                    None if has_color_space => (
                        gradient.leading_tokens.clone(),
                        ColorSpace::Oklab,
                        HueMethod::Shorter,
                    ),
                    None => (
                        gradient.leading_tokens.clone(),
                        ColorSpace::Srgb,
                        HueMethod::Shorter,
                    ),
                };
                did_expand = try_to_expand_gradient(
                    token.loc,
                    &mut gradient,
                    color_stops,
                    remaining,
                    color_space,
                    hue_method,
                );
            }
        } else {
            tracing::trace!(function = %token.text, "gradient stops could not be resolved");
        }
    }

    gradient.color_stops = gradient
        .color_stops
        .into_iter()
        .map(|mut stop| {
            stop.color = lower_and_minify_color(stop.color, options, would_clip_color);
            stop
        })
        .collect();

    if options.unsupports(CssFeature::GRADIENT_DOUBLE_POSITION) {
        if gradient.color_stops.iter().any(|stop| stop.positions.len() > 1) {
            gradient.color_stops = switch_to_single_positions(gradient.color_stops);
        }
    } else if options.minify_syntax {
        let has_duplicate = gradient.color_stops.windows(2).any(|pair| {
            pair[0].positions.len() == 1
                && pair[0].midpoint.is_none()
                && pair[1].positions.len() == 1
                && tokens_equal(slice::from_ref(&pair[0].color), slice::from_ref(&pair[1].color))
        });
        if has_duplicate {
            gradient.color_stops = switch_to_double_positions(gradient.color_stops);
        }
    }

    if options.minify_syntax || did_expand {
        gradient.color_stops = remove_implied_positions(gradient.kind, gradient.color_stops);
    }

    generate_gradient(token, gradient, options)
}

#[cfg(test)]
#[path = "../../tests/gradient_tests.rs"]
mod tests;
