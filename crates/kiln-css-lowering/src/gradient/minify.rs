//! Rewrites of color stop positions that don't change how a gradient renders.

use super::positions::{ValueWithUnit, try_to_parse_value};
use super::{ColorStop, GradientKind};
use kiln_common::limits::IMPLIED_POSITION_TOLERANCE;
use kiln_css_lexer::{Token, TokenKind, Whitespace, tokens_equal};
use std::slice;

/// Drop positions that the renderer would compute anyway.
///
/// Within a run of stops that share a unit and have no transition hints,
/// inner positions that lie (within a small tolerance) on the straight line
/// between the run's endpoints are implied and removed. A leading `0%` (or
/// zero length) and a trailing `100%` are implied as well.
pub fn remove_implied_positions(kind: GradientKind, mut color_stops: Vec<ColorStop>) -> Vec<ColorStop> {
    if color_stops.is_empty() {
        return color_stops;
    }

    let positions: Vec<Option<ValueWithUnit>> = color_stops
        .iter()
        .map(|stop| match stop.positions.as_slice() {
            [position] => try_to_parse_value(position, kind),
            _ => None,
        })
        .collect();

    let mut start = 0;
    while start < color_stops.len() {
        let Some(start_pos) = &positions[start] else {
            start += 1;
            continue;
        };

        let mut end = start + 1;
        'run: while color_stops[end - 1].midpoint.is_none() && end < color_stops.len() {
            let Some(end_pos) = positions[end].as_ref().filter(|pos| pos.unit == start_pos.unit) else {
                break;
            };

            // Interpolating from the run's endpoints is more accurate than
            // extrapolating from its first two positions
            for i in start + 1..end {
                let t = (i - start) as f64 / (end - start) as f64;
                let implied = start_pos.value + (end_pos.value - start_pos.value) * t;
                match &positions[i] {
                    Some(actual) if (actual.value - implied).abs() <= IMPLIED_POSITION_TOLERANCE => {}
                    _ => break 'run,
                }
            }
            end += 1;
        }

        if end - start > 1 {
            for stop in &mut color_stops[start + 1..end - 1] {
                stop.positions.clear();
            }
            start = end - 1;
        } else {
            start += 1;
        }
    }

    let is_zero = |token: &Token| match token.kind {
        TokenKind::Percentage => token.percentage_value() == "0",
        TokenKind::Dimension => token.dimension_value() == "0",
        _ => false,
    };
    if let Some(first) = color_stops.first_mut() {
        if matches!(first.positions.as_slice(), [position] if is_zero(position)) {
            first.positions.clear();
        }
    }

    if let Some(last) = color_stops.last_mut() {
        if matches!(
            last.positions.as_slice(),
            [position] if position.kind == TokenKind::Percentage && position.percentage_value() == "100"
        ) {
            last.positions.clear();
        }
    }

    color_stops
}

/// Split every stop with two positions into two stops with one position each.
/// Only the second copy keeps the transition hint.
pub fn switch_to_single_positions(color_stops: Vec<ColorStop>) -> Vec<ColorStop> {
    let mut single = Vec::with_capacity(color_stops.len() * 2);
    for mut stop in color_stops {
        for position in &mut stop.positions {
            position.whitespace = Whitespace::BEFORE;
        }
        while stop.positions.len() > 1 {
            let first = stop.positions.remove(0);
            single.push(ColorStop {
                color: stop.color.clone(),
                positions: vec![first],
                midpoint: None,
            });
        }
        single.push(stop);
    }
    single
}

/// Merge adjacent single-position stops with identical colors into one stop
/// with two positions, e.g. `red 10%, red 30%` into `red 10% 30%`.
pub fn switch_to_double_positions(color_stops: Vec<ColorStop>) -> Vec<ColorStop> {
    let mut double = Vec::with_capacity(color_stops.len());
    let mut stops = color_stops.into_iter().peekable();

    while let Some(mut stop) = stops.next() {
        if stop.positions.len() == 1 && stop.midpoint.is_none() {
            let merged = stops.next_if(|next| {
                next.positions.len() == 1
                    && tokens_equal(slice::from_ref(&stop.color), slice::from_ref(&next.color))
            });
            if let Some(next) = merged {
                stop.positions.extend(next.positions);
                stop.midpoint = next.midpoint;
            }
        }
        double.push(stop);
    }
    double
}

#[cfg(test)]
#[path = "../../tests/minify_tests.rs"]
mod tests;
