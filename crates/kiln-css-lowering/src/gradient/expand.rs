//! Expansion of a gradient into explicit sRGB color stops.
//!
//! Targets without `in <color-space>` support interpolate every gradient in
//! gamma-encoded sRGB. To keep the rendered result close to the requested
//! one, each interval between two stops is bisected: the true color at the
//! middle of the interval is computed in the interpolation space, and if it
//! differs noticeably from what sRGB interpolation would produce there, a new
//! stop is inserted and both halves are checked again.

use super::positions::{ParsedColorStop, ValueWithUnit, interpolate_positions};
use super::{ColorStop, ParsedGradient};
use crate::color::{format_float, try_to_convert_to_hex_without_clipping};
use crate::color_spaces::{
    ColorSpace, HueMethod, gam_srgb, interpolate_colors, premultiply, unpremultiply,
    xyz_to_lin_srgb,
};
use kiln_common::Loc;
use kiln_common::limits::{
    COLOR_COMPONENT_DECIMALS, GRADIENT_COLOR_EPSILON, MAX_GRADIENT_EXPANSION_DEPTH,
    POSITION_DECIMALS,
};
use kiln_css_lexer::{Token, TokenKind, Whitespace};
use smallvec::smallvec;
use tracing::debug;

/// One end of the interval being bisected.
#[derive(Copy, Clone, Debug)]
struct Sample {
    /// Gamma-encoded sRGB, not premultiplied.
    rgb: (f64, f64, f64),
    alpha: f64,
    /// Progress through the interval, from 0 to 1.
    t: f64,
}

impl Sample {
    fn at_stop(stop: &ParsedColorStop, t: f64) -> Self {
        Sample {
            rgb: (stop.r, stop.g, stop.b),
            alpha: stop.alpha,
            t,
        }
    }
}

struct Expander {
    loc: Loc,
    space: ColorSpace,
    hue_method: HueMethod,
    color_stops: Vec<ColorStop>,
}

impl Expander {
    fn push_stop(&mut self, x: f64, y: f64, z: f64, alpha: f64, position: Token) {
        self.color_stops.push(ColorStop {
            color: make_color_token(self.loc, x, y, z, alpha),
            positions: vec![position.with_whitespace(Whitespace::BEFORE)],
            midpoint: None,
        });
    }

    /// Insert stops between `from` and `to` wherever the interpolated color
    /// drifts from the sRGB interpolation of `prev` and `next`.
    fn generate_color_stops(
        &mut self,
        depth: u32,
        from: &ParsedColorStop,
        to: &ParsedColorStop,
        prev: Sample,
        next: Sample,
    ) {
        if depth >= MAX_GRADIENT_EXPANSION_DEPTH {
            return;
        }

        let t = (prev.t + next.t) / 2.0;
        let color_t = match &from.midpoint {
            // Units were checked when the stops were parsed
            Some(midpoint) => {
                let from_pos = from.position_terms[0].value;
                let to_pos = to.position_terms[0].value;
                let stop_pos = from_pos + (to_pos - from_pos) * t;
                let h = (midpoint.value - from_pos) / (to_pos - from_pos);
                let p = (stop_pos - from_pos) / (to_pos - from_pos);
                if h <= 0.0 {
                    1.0
                } else if h >= 1.0 {
                    0.0
                } else {
                    p.powf(-1.0 / h.log2())
                }
            }
            None => t,
        };

        let v = interpolate_colors(self.space, self.hue_method, from.v, to.v, color_t);
        let alpha = from.alpha + (to.alpha - from.alpha) * color_t;
        let v = unpremultiply(self.space, v, alpha);
        let (x, y, z) = self.space.to_xyz(v);

        // Compare against the sRGB midpoint, both premultiplied
        let (lr, lg, lb) = xyz_to_lin_srgb(x, y, z);
        let (r, g, b) = gam_srgb(lr, lg, lb);
        let dr = r * alpha - (prev.rgb.0 * prev.alpha + next.rgb.0 * next.alpha) / 2.0;
        let dg = g * alpha - (prev.rgb.1 * prev.alpha + next.rgb.1 * next.alpha) / 2.0;
        let db = b * alpha - (prev.rgb.2 * prev.alpha + next.rgb.2 * next.alpha) / 2.0;
        if dr * dr + dg * dg + db * db < GRADIENT_COLOR_EPSILON * GRADIENT_COLOR_EPSILON {
            return;
        }

        let sample = Sample {
            rgb: (r, g, b),
            alpha,
            t,
        };

        self.generate_color_stops(depth + 1, from, to, prev, sample);

        let position_terms = interpolate_positions(&from.position_terms, &to.position_terms, t);
        let position = make_position_token(self.loc, &position_terms);
        self.push_stop(x, y, z, alpha, position);

        self.generate_color_stops(depth + 1, from, to, sample, next);
    }
}

/// Replace the stops of `gradient` with stops that reproduce its appearance
/// under plain sRGB interpolation, and its leading tokens with `remaining`
/// (the leading tokens minus the interpolation clause).
///
/// `color_stops` must come from [`super::try_to_parse_color_stops`] on the
/// same gradient.
pub fn try_to_expand_gradient(
    loc: Loc,
    gradient: &mut ParsedGradient,
    mut color_stops: Vec<ParsedColorStop>,
    remaining: Vec<Token>,
    space: ColorSpace,
    hue_method: HueMethod,
) -> bool {
    for stop in &mut color_stops {
        let v = space.from_xyz((stop.x, stop.y, stop.z));
        stop.v = premultiply(space, v, stop.alpha);
    }

    // A longer hue arc wraps around, so the endpoints need explicit 0% and
    // 100% stops for the arc to cover the whole gradient
    if hue_method == HueMethod::Longer && space.is_polar() {
        let mut leading_clone = None;
        if let Some(first) = color_stops.first_mut() {
            if let [term] = first.position_terms.as_mut_slice() {
                if term.value < 0.0 {
                    term.value = 0.0;
                } else if term.value > 0.0 {
                    let unit = term.unit.clone();
                    let mut clone = first.clone();
                    clone.midpoint = None;
                    clone.position_terms = smallvec![ValueWithUnit::new(0.0, unit)];
                    leading_clone = Some(clone);
                }
            }
        }
        if let Some(clone) = leading_clone {
            color_stops.insert(0, clone);
        }
        let trailing_clone = color_stops.last().and_then(|last| match last.position_terms.as_slice() {
            [term] if term.unit != "%" || term.value < 100.0 => {
                let mut clone = last.clone();
                clone.position_terms = smallvec![ValueWithUnit::percent(100.0)];
                Some(clone)
            }
            _ => None,
        });
        color_stops.extend(trailing_clone);
    }

    let mut expander = Expander {
        loc,
        space,
        hue_method,
        color_stops: Vec::with_capacity(color_stops.len() * 4),
    };

    for (i, stop) in color_stops.iter().enumerate() {
        let position = make_position_token(loc, &stop.position_terms);
        expander.push_stop(stop.x, stop.y, stop.z, stop.alpha, position);

        if let Some(next) = color_stops.get(i + 1).filter(|next| !is_empty_interval(stop, next)) {
            expander.generate_color_stops(
                0,
                stop,
                next,
                Sample::at_stop(stop, 0.0),
                Sample::at_stop(next, 1.0),
            );
        }
    }

    debug!(
        kind = ?gradient.kind,
        space = space.name(),
        hue_method = hue_method.name(),
        original_stops = color_stops.len(),
        expanded_stops = expander.color_stops.len(),
        "expanded gradient into sRGB color stops"
    );

    gradient.leading_tokens = remaining;
    gradient.color_stops = expander.color_stops;
    true
}

/// Whether the interval from `from` to `to` has no length to fill: a hard
/// stop, or a stop placed before the one it follows.
fn is_empty_interval(from: &ParsedColorStop, to: &ParsedColorStop) -> bool {
    match (from.position_terms.as_slice(), to.position_terms.as_slice()) {
        ([from], [to]) => from.unit == to.unit && to.value <= from.value,
        _ => false,
    }
}

/// A color token for a D65 XYZ color: a hex color when it fits in sRGB,
/// otherwise `color(xyz ...)`.
pub fn make_color_token(loc: Loc, x: f64, y: f64, z: f64, alpha: f64) -> Token {
    let alpha_byte = (alpha * 255.0).round() as u32;
    if let Some(hex) = try_to_convert_to_hex_without_clipping(x, y, z, alpha_byte) {
        let text = if alpha_byte == 255 {
            format!("{:06x}", hex >> 8)
        } else {
            format!("{hex:08x}")
        };
        return Token::new(loc, TokenKind::Hash, text);
    }

    let number = |value: f64, whitespace: Whitespace| {
        Token::new(
            loc,
            TokenKind::Number,
            format_float(value, COLOR_COMPONENT_DECIMALS),
        )
        .with_whitespace(whitespace)
    };
    let mut children = vec![
        Token::new(loc, TokenKind::Ident, "xyz").with_whitespace(Whitespace::AFTER),
        number(x, Whitespace::BEFORE | Whitespace::AFTER),
        number(y, Whitespace::BEFORE | Whitespace::AFTER),
        number(z, Whitespace::BEFORE),
    ];
    if alpha < 1.0 {
        children.push(
            Token::new(loc, TokenKind::DelimSlash, "/")
                .with_whitespace(Whitespace::BEFORE | Whitespace::AFTER),
        );
        children.push(number(alpha, Whitespace::BEFORE));
    }
    Token::function(loc, "color", children)
}

fn make_dimension_or_percent_token(loc: Loc, term: &ValueWithUnit) -> Token {
    let number = format_float(term.value, POSITION_DECIMALS);
    if term.unit == "%" {
        return Token::new(loc, TokenKind::Percentage, format!("{number}%"));
    }
    let mut token = Token::new(loc, TokenKind::Dimension, format!("{number}{}", term.unit));
    token.unit_offset = number.len() as u16;
    token
}

/// A position token: a single percentage or dimension, or `calc(a + b)` for
/// positions with terms in more than one unit.
pub fn make_position_token(loc: Loc, position_terms: &[ValueWithUnit]) -> Token {
    if let [term] = position_terms {
        return make_dimension_or_percent_token(loc, term);
    }

    let mut children = Vec::with_capacity(position_terms.len() * 2);
    for (i, term) in position_terms.iter().enumerate() {
        if i > 0 {
            children.push(
                Token::new(loc, TokenKind::DelimPlus, "+")
                    .with_whitespace(Whitespace::BEFORE | Whitespace::AFTER),
            );
        }
        children.push(make_dimension_or_percent_token(loc, term));
    }
    Token::function(loc, "calc", children)
}

#[cfg(test)]
#[path = "../../tests/expand_tests.rs"]
mod tests;
