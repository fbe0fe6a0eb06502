//! Numeric resolution of color stop positions.

use super::{GradientKind, ParsedGradient};
use crate::color::{
    degrees_for_angle, hex_a, hex_b, hex_g, hex_r, parse_color, parsed_color_to_xyz,
};
use crate::color_spaces::{Channels, xyz_to_srgb};
use kiln_css_lexer::{Token, TokenKind};
use smallvec::{SmallVec, smallvec};

#[derive(Clone, Debug, PartialEq)]
pub struct ValueWithUnit {
    pub value: f64,
    /// `%` or a length unit.
    pub unit: String,
}

impl ValueWithUnit {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        ValueWithUnit {
            value,
            unit: unit.into(),
        }
    }

    pub fn percent(value: f64) -> Self {
        ValueWithUnit::new(value, "%")
    }
}

/// A position as a sum of terms in different units, like `calc(50% + 10px)`.
pub type PositionTerms = SmallVec<[ValueWithUnit; 2]>;

/// A color stop with its color and position in numeric form.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedColorStop {
    /// Empty until resolved; then one term, or two for mixed units.
    pub position_terms: PositionTerms,
    /// Transition hint to the next stop.
    pub midpoint: Option<ValueWithUnit>,

    // Non-premultiplied color in D65 XYZ
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,

    // Non-premultiplied color in sRGB
    pub r: f64,
    pub g: f64,
    pub b: f64,

    /// Premultiplied color in the interpolation space.
    pub v: Channels,

    /// True if the original color has a color space.
    pub has_color_space: bool,
}

/// Parse every stop color and resolve every stop position.
///
/// Double positions become two stops. The first and last stops default to
/// `0%` and `100%`, positions are clamped so they never go backward, and
/// missing positions are spread evenly between their resolved neighbors.
/// Returns `None` if a color or position can't be parsed, or if a
/// transition hint doesn't share its unit with both neighbors.
pub fn try_to_parse_color_stops(gradient: &ParsedGradient) -> Option<Vec<ParsedColorStop>> {
    let mut color_stops = Vec::with_capacity(gradient.color_stops.len());

    for stop in &gradient.color_stops {
        let Some(color) = parse_color(&stop.color) else {
            tracing::trace!(text = %stop.color.text, "unparseable gradient stop color");
            return None;
        };
        let (x, y, z) = parsed_color_to_xyz(&color);
        let (r, g, b) = if color.has_color_space {
            xyz_to_srgb(x, y, z)
        } else {
            (
                f64::from(hex_r(color.hex)) / 255.0,
                f64::from(hex_g(color.hex)) / 255.0,
                f64::from(hex_b(color.hex)) / 255.0,
            )
        };
        let mut parsed = ParsedColorStop {
            position_terms: SmallVec::new(),
            midpoint: None,
            x,
            y,
            z,
            alpha: f64::from(hex_a(color.hex)) / 255.0,
            r,
            g,
            b,
            v: (0.0, 0.0, 0.0),
            has_color_space: color.has_color_space,
        };

        for (i, position) in stop.positions.iter().enumerate() {
            parsed.position_terms = smallvec![try_to_parse_value(position, gradient.kind)?];
            if i + 1 < stop.positions.len() {
                color_stops.push(parsed.clone());
            }
        }

        if let Some(midpoint) = &stop.midpoint {
            parsed.midpoint = Some(try_to_parse_value(midpoint, gradient.kind)?);
        }

        color_stops.push(parsed);
    }

    if color_stops.is_empty() {
        return Some(color_stops);
    }

    fill_endpoints(&mut color_stops);
    clamp_positions(&mut color_stops);
    fill_missing_positions(&mut color_stops);

    // Transition hints need the same unit as both neighbors
    for (i, stop) in color_stops.iter().enumerate() {
        let Some(midpoint) = &stop.midpoint else {
            continue;
        };
        let next = color_stops.get(i + 1)?;
        let same_unit = |terms: &PositionTerms| terms.len() == 1 && terms[0].unit == midpoint.unit;
        if !same_unit(&stop.position_terms) || !same_unit(&next.position_terms) {
            tracing::trace!(unit = %midpoint.unit, "transition hint unit differs from its stops");
            return None;
        }
    }

    Some(color_stops)
}

fn fill_endpoints(color_stops: &mut [ParsedColorStop]) {
    if let Some(first) = color_stops.first_mut() {
        if first.position_terms.is_empty() {
            first.position_terms = smallvec![ValueWithUnit::percent(0.0)];
        }
    }
    if let Some(last) = color_stops.last_mut() {
        if last.position_terms.is_empty() {
            last.position_terms = smallvec![ValueWithUnit::percent(100.0)];
        }
    }
}

/// The closest resolved position (or hint) before stop `i`.
fn previous_position(color_stops: &[ParsedColorStop], i: usize) -> Option<ValueWithUnit> {
    color_stops[..i].iter().rev().find_map(|prev| {
        if let Some(midpoint) = &prev.midpoint {
            return Some(midpoint.clone());
        }
        match prev.position_terms.as_slice() {
            [term] => Some(term.clone()),
            _ => None,
        }
    })
}

/// Make every position at least as large as the position before it, when
/// both use the same unit.
fn clamp_positions(color_stops: &mut [ParsedColorStop]) {
    for i in 0..color_stops.len() {
        let mut prev = previous_position(color_stops, i);
        let stop = &mut color_stops[i];

        if let [term] = stop.position_terms.as_mut_slice() {
            if let Some(prev) = &prev {
                if prev.unit == term.unit {
                    term.value = term.value.max(prev.value);
                }
            }
            prev = Some(term.clone());
        }

        if let (Some(midpoint), Some(prev)) = (stop.midpoint.as_mut(), &prev) {
            if prev.unit == midpoint.unit {
                midpoint.value = midpoint.value.max(prev.value);
            }
        }
    }
}

struct StopInfo {
    from_pos: ValueWithUnit,
    to_pos: ValueWithUnit,
    from_count: u32,
    to_count: u32,
}

/// Spread stops without a position evenly between the closest resolved
/// positions on either side.
fn fill_missing_positions(color_stops: &mut [ParsedColorStop]) {
    let mut infos: Vec<Option<StopInfo>> = Vec::with_capacity(color_stops.len());

    for i in 0..color_stops.len() {
        if color_stops[i].position_terms.len() == 1 {
            infos.push(None);
            continue;
        }

        let mut info = StopInfo {
            from_pos: ValueWithUnit::percent(0.0),
            to_pos: ValueWithUnit::percent(100.0),
            from_count: 0,
            to_count: 0,
        };

        for from in color_stops[..i].iter().rev() {
            info.from_count += 1;
            if let Some(midpoint) = &from.midpoint {
                info.from_pos = midpoint.clone();
                break;
            }
            if let [term] = from.position_terms.as_slice() {
                info.from_pos = term.clone();
                break;
            }
        }

        for to in i..color_stops.len() {
            info.to_count += 1;
            if let Some(midpoint) = &color_stops[to].midpoint {
                info.to_pos = midpoint.clone();
                break;
            }
            if let Some([term]) = color_stops.get(to + 1).map(|next| next.position_terms.as_slice()) {
                info.to_pos = term.clone();
                break;
            }
        }

        infos.push(Some(info));
    }

    for (stop, info) in color_stops.iter_mut().zip(infos) {
        let Some(info) = info else {
            continue;
        };
        let t = f64::from(info.from_count) / f64::from(info.from_count + info.to_count);
        stop.position_terms = if info.from_pos.unit == info.to_pos.unit {
            smallvec![ValueWithUnit::new(
                info.from_pos.value + (info.to_pos.value - info.from_pos.value) * t,
                info.from_pos.unit,
            )]
        } else {
            smallvec![
                ValueWithUnit::new(info.from_pos.value * (1.0 - t), info.from_pos.unit),
                ValueWithUnit::new(info.to_pos.value * t, info.to_pos.unit),
            ]
        };
    }
}

/// Parse a position or transition hint.
///
/// Conic gradients take `<angle-percentage>` and angles are converted to
/// percentages of a full turn. Other gradients take `<length-percentage>`,
/// where a bare `0` means `0%`.
pub fn try_to_parse_value(token: &Token, kind: GradientKind) -> Option<ValueWithUnit> {
    if kind == GradientKind::Conic {
        return match token.kind {
            TokenKind::Dimension => {
                let degrees = degrees_for_angle(token)?;
                Some(ValueWithUnit::percent(degrees * (100.0 / 360.0)))
            }
            TokenKind::Percentage => Some(ValueWithUnit::percent(token.numeric_value()?)),
            _ => None,
        };
    }

    match token.kind {
        TokenKind::Number => {
            let zero = token.numeric_value()?;
            (zero == 0.0).then(|| ValueWithUnit::percent(0.0))
        }
        TokenKind::Dimension => Some(ValueWithUnit::new(
            token.numeric_value()?,
            token.dimension_unit(),
        )),
        TokenKind::Percentage => Some(ValueWithUnit::percent(token.numeric_value()?)),
        _ => None,
    }
}

/// `a * (1 - t) + b * t`, merging terms with the same unit.
///
/// One zero term is dropped from a multi-term result; a lone zero is kept
/// since a position needs at least one term.
pub fn interpolate_positions(a: &[ValueWithUnit], b: &[ValueWithUnit], t: f64) -> PositionTerms {
    let mut result = PositionTerms::new();
    let mut add = |term: &ValueWithUnit, weight: f64| {
        match result.iter_mut().find(|existing| existing.unit == term.unit) {
            Some(existing) => existing.value += term.value * weight,
            None => result.push(ValueWithUnit::new(term.value * weight, term.unit.clone())),
        }
    };

    for term in a {
        add(term, 1.0 - t);
    }
    for term in b {
        add(term, t);
    }

    if result.len() > 1 {
        if let Some(zero) = result.iter().position(|term| term.value == 0.0) {
            result.remove(zero);
        }
    }
    result
}

#[cfg(test)]
#[path = "../../tests/positions_tests.rs"]
mod tests;
