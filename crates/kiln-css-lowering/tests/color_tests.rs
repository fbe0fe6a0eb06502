use super::*;
use kiln_css_lexer::tokenize;
use kiln_css_printer::print_tokens;

fn parse(source: &str) -> Option<ParsedColor> {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 1, "expected a single token in {source:?}");
    parse_color(&tokens[0])
}

fn lower(source: &str, options: LowerOptions) -> (String, bool) {
    let mut tokens = tokenize(source);
    let token = tokens.remove(0);
    let mut would_clip = false;
    let lowered = lower_and_minify_color(token, &options, &mut would_clip);
    (print_tokens(&[lowered]), would_clip)
}

fn minify() -> LowerOptions {
    LowerOptions {
        minify_syntax: true,
        ..LowerOptions::default()
    }
}

#[test]
fn test_parse_named_and_hex_colors() {
    assert_eq!(parse("red").map(|c| c.hex), Some(0xff0000ff));
    assert_eq!(parse("RebeccaPurple").map(|c| c.hex), Some(0x663399ff));
    assert_eq!(parse("transparent").map(|c| c.hex), Some(0x00000000));
    assert_eq!(parse("#abc").map(|c| c.hex), Some(0xaabbccff));
    assert_eq!(parse("#abcd").map(|c| c.hex), Some(0xaabbccdd));
    assert_eq!(parse("#123456").map(|c| c.hex), Some(0x123456ff));
    assert_eq!(parse("#12345678").map(|c| c.hex), Some(0x12345678));
    assert_eq!(parse("#12345"), None);
    assert_eq!(parse("#xyz"), None);
    assert_eq!(parse("currentcolor"), None);
}

#[test]
fn test_parse_rgb_functions() {
    assert_eq!(parse("rgb(255, 0, 0)").map(|c| c.hex), Some(0xff0000ff));
    assert_eq!(parse("rgba(0, 0, 255, 0.5)").map(|c| c.hex), Some(0x0000ff80));
    assert_eq!(parse("rgb(255 0 0 / 50%)").map(|c| c.hex), Some(0xff000080));
    assert_eq!(parse("rgb(100% none 0%)").map(|c| c.hex), Some(0xff0000ff));
    assert_eq!(parse("rgb(1, 2)"), None);
    assert_eq!(parse("rgb(1, 2, 3,)"), None);
    assert_eq!(parse("rgb(1 2 3 4)"), None);
}

#[test]
fn test_parse_hsl_and_hwb() {
    assert_eq!(parse("hsl(120, 100%, 25%)").map(|c| c.hex), Some(0x008000ff));
    assert_eq!(parse("hsl(0.5turn 100% 50%)").map(|c| c.hex), Some(0x00ffffff));
    assert_eq!(parse("hwb(0 0% 0%)").map(|c| c.hex), Some(0xff0000ff));
    assert_eq!(parse("hwb(0 60% 60%)").map(|c| c.hex), Some(0x808080ff));
}

#[test]
fn test_parse_color_space_functions() {
    let color = parse("color(srgb 1 0 0)").expect("color() should parse");
    assert!(color.has_color_space);
    assert_eq!(color.hex, 0xff0000ff);
    assert!((color.x - 0.41239).abs() < 1e-4);

    let color = parse("color(display-p3 0 1 0 / 0.5)").expect("color() should parse");
    assert!(color.has_color_space);
    assert_eq!(hex_a(color.hex), 0x80);

    let color = parse("oklch(62.8% 0.2577 29.23)").expect("oklch() should parse");
    assert!(color.has_color_space);
    assert!(hex_r(color.hex) >= 250);
    assert!(hex_g(color.hex) <= 5);

    assert!(parse("lab(50% 20 -30)").is_some());
    assert!(parse("lch(50 40 120deg)").is_some());
    assert!(parse("oklab(0.5 0.1 -0.1)").is_some());
    assert!(parse("color(xyz 0.2 0.3 0.4)").is_some());
    assert_eq!(parse("color(hsl 1 2 3)"), None);
    assert_eq!(parse("color(unknown 1 2 3)"), None);
}

#[test]
fn test_looks_like_color() {
    for source in ["red", "#abc", "currentcolor", "color-mix(in srgb, red, blue)", "oklch(0.5 0.1 30)"] {
        assert!(looks_like_color(&tokenize(source)[0]), "{source}");
    }
    for source in ["to", "circle", "10%", "45deg", "calc(1px)"] {
        assert!(!looks_like_color(&tokenize(source)[0]), "{source}");
    }
}

#[test]
fn test_degrees_for_angle() {
    let degrees = |source: &str| degrees_for_angle(&tokenize(source)[0]);
    assert_eq!(degrees("90deg"), Some(90.0));
    assert_eq!(degrees("100grad"), Some(90.0));
    assert_eq!(degrees("0.25turn"), Some(90.0));
    assert!((degrees("3.14159265rad").unwrap_or_default() - 180.0).abs() < 1e-6);
    assert_eq!(degrees("0"), Some(0.0));
    assert_eq!(degrees("5"), None);
    assert_eq!(degrees("10px"), None);
}

#[test]
fn test_format_float() {
    assert_eq!(format_float(0.5, 3), "0.5");
    assert_eq!(format_float(1.0, 3), "1");
    assert_eq!(format_float(12.345678, 2), "12.35");
    assert_eq!(format_float(-0.0001, 2), "0");
    assert_eq!(format_float(100.0, 2), "100");
}

#[test]
fn test_hex_without_clipping() {
    let (x, y, z) = srgb_to_xyz(1.0, 0.0, 0.0);
    assert_eq!(
        try_to_convert_to_hex_without_clipping(x, y, z, 0xFF),
        Some(0xff0000ff)
    );
    let (x, y, z) = ColorSpace::DisplayP3.to_xyz((0.0, 1.0, 0.0));
    assert_eq!(try_to_convert_to_hex_without_clipping(x, y, z, 0xFF), None);
}

#[test]
fn test_lower_hex_alpha() {
    let options = LowerOptions::new(CssFeature::HEX_RGBA);
    assert_eq!(
        lower("#ff000080", options),
        ("rgba(255, 0, 0, 0.502)".to_string(), false)
    );
    assert_eq!(lower("#f00f", options), ("#ff0000".to_string(), false));
    assert_eq!(lower("#ff0000", options), ("#ff0000".to_string(), false));
}

#[test]
fn test_lower_color_functions() {
    let options = LowerOptions::new(CssFeature::COLOR_FUNCTIONS);
    assert_eq!(
        lower("color(srgb 0 0.2 1)", options),
        ("#0033ff".to_string(), false)
    );

    let (printed, would_clip) = lower("color(display-p3 0 1 0)", options);
    assert!(printed.starts_with('#'));
    assert!(would_clip);

    // Supported color functions are left alone
    assert_eq!(
        lower("oklab(0.5 0.1 0.1)", LowerOptions::default()),
        ("oklab(0.5 0.1 0.1)".to_string(), false)
    );
}

#[test]
fn test_lower_hwb() {
    let options = LowerOptions::new(CssFeature::HWB);
    assert_eq!(lower("hwb(0 0% 0%)", options), ("#ff0000".to_string(), false));

    let minified = LowerOptions {
        minify_syntax: true,
        ..options
    };
    assert_eq!(lower("hwb(0 60% 60%)", minified).0, "gray");

    assert_eq!(
        lower("hwb(0 0% 0%)", LowerOptions::default()).0,
        "hwb(0 0% 0%)"
    );
}

#[test]
fn test_minify_colors() {
    assert_eq!(lower("#ff0000", minify()).0, "red");
    assert_eq!(lower("#aabbcc", minify()).0, "#abc");
    assert_eq!(lower("#aabbccdd", minify()).0, "#abcd");
    assert_eq!(lower("#0000ff", minify()).0, "#00f");
    assert_eq!(lower("white", minify()).0, "#fff");
    assert_eq!(lower("rgb(0, 0, 128)", minify()).0, "navy");
    assert_eq!(lower("rgba(0, 0, 128, 0.5)", minify()).0, "rgba(0, 0, 128, 0.5)");
    assert_eq!(lower("currentcolor", minify()).0, "currentcolor");
}

#[test]
fn test_shortest_form_ties() {
    // A name must be strictly shorter than the hex form
    assert_eq!(lower("#00ffff", minify()).0, "#0ff");
    assert_eq!(lower("#808080", minify()).0, "gray");
}

#[test]
fn test_parsed_color_to_xyz() {
    let red = parse("red").expect("red parses");
    let (x, y, z) = parsed_color_to_xyz(&red);
    assert!((x - 0.41239).abs() < 1e-4);
    assert!((y - 0.21264).abs() < 1e-4);
    assert!((z - 0.01933).abs() < 1e-4);
}
