use super::*;
use crate::gradient::parse_gradient;
use kiln_css_lexer::tokenize;

fn parse_stops(source: &str) -> Option<Vec<ParsedColorStop>> {
    let tokens = tokenize(source);
    let gradient = parse_gradient(&tokens[0]).expect("gradient should parse");
    try_to_parse_color_stops(&gradient)
}

fn positions(stops: &[ParsedColorStop]) -> Vec<Vec<(f64, &str)>> {
    stops
        .iter()
        .map(|stop| {
            stop.position_terms
                .iter()
                .map(|term| (term.value, term.unit.as_str()))
                .collect()
        })
        .collect()
}

fn value(source: &str, kind: GradientKind) -> Option<ValueWithUnit> {
    let tokens = tokenize(source);
    try_to_parse_value(&tokens[0], kind)
}

#[test]
fn test_missing_positions_are_spread_evenly() {
    let stops = parse_stops("linear-gradient(red, green, blue 50%, yellow)").unwrap();
    assert_eq!(
        positions(&stops),
        vec![
            vec![(0.0, "%")],
            vec![(25.0, "%")],
            vec![(50.0, "%")],
            vec![(100.0, "%")],
        ]
    );
}

#[test]
fn test_missing_position_between_different_units_uses_two_terms() {
    let stops = parse_stops("linear-gradient(red 10px, green, blue 50%)").unwrap();
    assert_eq!(positions(&stops)[1], vec![(5.0, "px"), (25.0, "%")]);
}

#[test]
fn test_double_position_becomes_two_stops() {
    let stops = parse_stops("linear-gradient(red 10% 20%, blue)").unwrap();
    assert_eq!(stops.len(), 3);
    assert_eq!(
        positions(&stops),
        vec![vec![(10.0, "%")], vec![(20.0, "%")], vec![(100.0, "%")]]
    );
    assert_eq!((stops[0].r, stops[1].r), (1.0, 1.0));
}

#[test]
fn test_positions_never_go_backward() {
    let stops = parse_stops("linear-gradient(red 50%, blue 20%, green 10px)").unwrap();
    assert_eq!(
        positions(&stops),
        vec![vec![(50.0, "%")], vec![(50.0, "%")], vec![(10.0, "px")]]
    );

    let stops = parse_stops("linear-gradient(red 40%, 10%, blue)").unwrap();
    assert_eq!(stops[0].midpoint, Some(ValueWithUnit::percent(40.0)));
}

#[test]
fn test_transition_hint_units_must_match() {
    assert!(parse_stops("linear-gradient(red 10px, 50%, blue 100%)").is_none());
    assert!(parse_stops("linear-gradient(red 10px, 20px, blue 100px)").is_some());
    // The first stop defaults to 0%, which is compatible with a % hint
    assert!(parse_stops("linear-gradient(red, 30%, blue)").is_some());
}

#[test]
fn test_unparseable_colors_fail() {
    assert!(parse_stops("linear-gradient(currentcolor, blue)").is_none());
    assert!(parse_stops("linear-gradient(color-mix(in srgb, red, blue), blue)").is_none());
}

#[test]
fn test_stop_colors() {
    let stops = parse_stops("linear-gradient(#ff000080, color(srgb 0 0 1))").unwrap();
    assert!(!stops[0].has_color_space);
    assert!((stops[0].alpha - 128.0 / 255.0).abs() < 1e-12);
    assert_eq!((stops[0].r, stops[0].g, stops[0].b), (1.0, 0.0, 0.0));
    assert!(stops[1].has_color_space);
    assert!((stops[1].b - 1.0).abs() < 1e-9);
    assert!(stops[1].r.abs() < 1e-9);
}

#[test]
fn test_parse_value() {
    assert_eq!(
        value("0", GradientKind::Linear),
        Some(ValueWithUnit::percent(0.0))
    );
    assert_eq!(value("5", GradientKind::Linear), None);
    assert_eq!(
        value("12px", GradientKind::Radial),
        Some(ValueWithUnit::new(12.0, "px"))
    );
    assert_eq!(
        value("30%", GradientKind::Linear),
        Some(ValueWithUnit::percent(30.0))
    );
    assert_eq!(
        value("90deg", GradientKind::Conic),
        Some(ValueWithUnit::percent(25.0))
    );
    assert_eq!(
        value("0.5turn", GradientKind::Conic),
        Some(ValueWithUnit::percent(50.0))
    );
    assert_eq!(value("10px", GradientKind::Conic), None);
    assert_eq!(value("0", GradientKind::Conic), None);
}

#[test]
fn test_interpolate_positions() {
    let a = [ValueWithUnit::percent(10.0)];
    let b = [ValueWithUnit::percent(30.0)];
    assert_eq!(
        interpolate_positions(&a, &b, 0.5).as_slice(),
        &[ValueWithUnit::percent(20.0)]
    );

    let a = [ValueWithUnit::new(10.0, "px")];
    let b = [ValueWithUnit::percent(50.0)];
    assert_eq!(
        interpolate_positions(&a, &b, 0.5).as_slice(),
        &[ValueWithUnit::new(5.0, "px"), ValueWithUnit::percent(25.0)]
    );
}

#[test]
fn test_interpolate_positions_drops_one_zero_term() {
    let a = [ValueWithUnit::new(0.0, "px")];
    let b = [ValueWithUnit::percent(40.0)];
    assert_eq!(
        interpolate_positions(&a, &b, 0.5).as_slice(),
        &[ValueWithUnit::percent(20.0)]
    );

    let a = [ValueWithUnit::percent(0.0)];
    assert_eq!(
        interpolate_positions(&a, &a, 0.5).as_slice(),
        &[ValueWithUnit::percent(0.0)]
    );
}
