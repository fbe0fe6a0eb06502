use super::*;

const ALL_SPACES: [ColorSpace; 14] = [
    ColorSpace::A98Rgb,
    ColorSpace::DisplayP3,
    ColorSpace::Hsl,
    ColorSpace::Hwb,
    ColorSpace::Lab,
    ColorSpace::Lch,
    ColorSpace::Oklab,
    ColorSpace::Oklch,
    ColorSpace::ProphotoRgb,
    ColorSpace::Rec2020,
    ColorSpace::Srgb,
    ColorSpace::SrgbLinear,
    ColorSpace::XyzD50,
    ColorSpace::XyzD65,
];

fn assert_close(actual: Channels, expected: Channels, tolerance: f64) {
    let diffs = [
        (actual.0 - expected.0).abs(),
        (actual.1 - expected.1).abs(),
        (actual.2 - expected.2).abs(),
    ];
    assert!(
        diffs.iter().all(|&d| d <= tolerance),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_color_space_names() {
    for space in ALL_SPACES {
        assert_eq!(ColorSpace::from_name(space.name()), Some(space));
    }
    assert_eq!(ColorSpace::from_name("XYZ"), Some(ColorSpace::XyzD65));
    assert_eq!(ColorSpace::from_name("OkLch"), Some(ColorSpace::Oklch));
    assert_eq!(ColorSpace::from_name("cmyk"), None);
}

#[test]
fn test_polar_spaces() {
    let polar: Vec<_> = ALL_SPACES.iter().filter(|s| s.is_polar()).collect();
    assert_eq!(
        polar,
        vec![
            &ColorSpace::Hsl,
            &ColorSpace::Hwb,
            &ColorSpace::Lch,
            &ColorSpace::Oklch
        ]
    );
    assert_eq!(ColorSpace::Hsl.hue_channel_index(), Some(0));
    assert_eq!(ColorSpace::Oklch.hue_channel_index(), Some(2));
    assert_eq!(ColorSpace::Lab.hue_channel_index(), None);
}

#[test]
fn test_hue_method_names() {
    assert_eq!(HueMethod::from_name("LONGER"), Some(HueMethod::Longer));
    assert_eq!(HueMethod::from_name("sideways"), None);
    assert_eq!(HueMethod::default(), HueMethod::Shorter);
}

#[test]
fn test_srgb_red_to_xyz() {
    let xyz = srgb_to_xyz(1.0, 0.0, 0.0);
    assert_close(xyz, (0.41239, 0.21264, 0.01933), 1e-5);
}

#[test]
fn test_red_in_oklab_and_lab() {
    let xyz = srgb_to_xyz(1.0, 0.0, 0.0);
    assert_close(
        ColorSpace::Oklab.from_xyz(xyz),
        (0.62796, 0.22486, 0.12585),
        1e-4,
    );
    assert_close(ColorSpace::Lab.from_xyz(xyz), (54.29, 80.80, 69.89), 0.05);
}

#[test]
fn test_round_trip_through_every_space() {
    let samples = [
        srgb_to_xyz(1.0, 0.0, 0.0),
        srgb_to_xyz(0.2, 0.6, 0.4),
        srgb_to_xyz(0.9, 0.9, 0.1),
        srgb_to_xyz(0.05, 0.1, 0.8),
    ];
    for space in ALL_SPACES {
        for xyz in samples {
            let back = space.to_xyz(space.from_xyz(xyz));
            assert_close(back, xyz, 1e-6);
        }
    }
}

#[test]
fn test_achromatic_hsl_has_missing_hue() {
    let (h, s, l) = srgb_to_hsl((0.5, 0.5, 0.5));
    assert!(h.is_nan());
    assert_eq!(s, 0.0);
    assert_eq!(l, 0.5);
    assert_close(hsl_to_srgb(h, s, l), (0.5, 0.5, 0.5), 1e-12);
}

#[test]
fn test_hsl_primary_colors() {
    assert_close(hsl_to_srgb(0.0, 1.0, 0.5), (1.0, 0.0, 0.0), 1e-12);
    assert_close(hsl_to_srgb(120.0, 1.0, 0.5), (0.0, 1.0, 0.0), 1e-12);
    assert_close(hsl_to_srgb(240.0, 1.0, 0.25), (0.0, 0.0, 0.5), 1e-12);
    assert_close(srgb_to_hsl((0.0, 0.0, 1.0)), (240.0, 1.0, 0.5), 1e-12);
}

#[test]
fn test_hwb_gray_when_whiteness_and_blackness_saturate() {
    assert_close(hwb_to_srgb(90.0, 0.6, 0.6), (0.5, 0.5, 0.5), 1e-12);
    assert_close(hwb_to_srgb(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 1e-12);
}

#[test]
fn test_premultiply_skips_hue() {
    assert_eq!(
        premultiply(ColorSpace::Hsl, (200.0, 0.5, 0.4), 0.5),
        (200.0, 0.25, 0.2)
    );
    assert_eq!(
        premultiply(ColorSpace::Oklch, (0.6, 0.2, 200.0), 0.5),
        (0.3, 0.1, 200.0)
    );
    assert_eq!(
        premultiply(ColorSpace::Srgb, (1.0, 0.5, 0.25), 0.5),
        (0.5, 0.25, 0.125)
    );
    assert_eq!(
        premultiply(ColorSpace::Srgb, (1.0, 0.5, 0.25), 1.0),
        (1.0, 0.5, 0.25)
    );
}

#[test]
fn test_unpremultiply_inverts_premultiply() {
    let channels = (0.7, 0.1, 320.0);
    let premultiplied = premultiply(ColorSpace::Lch, channels, 0.25);
    assert_close(
        unpremultiply(ColorSpace::Lch, premultiplied, 0.25),
        channels,
        1e-12,
    );
    // Fully transparent colors cannot be recovered
    assert_eq!(
        unpremultiply(ColorSpace::Srgb, (0.0, 0.0, 0.0), 0.0),
        (0.0, 0.0, 0.0)
    );
}

#[test]
fn test_interpolate_hues_shorter() {
    assert!((interpolate_hues(350.0, 10.0, 0.5, HueMethod::Shorter) - 360.0).abs() < 1e-9);
    assert!((interpolate_hues(10.0, 350.0, 0.5, HueMethod::Shorter) - 360.0).abs() < 1e-9);
    assert!((interpolate_hues(0.0, 90.0, 0.5, HueMethod::Shorter) - 45.0).abs() < 1e-9);
}

#[test]
fn test_interpolate_hues_longer() {
    assert!((interpolate_hues(0.0, 90.0, 0.5, HueMethod::Longer) - 225.0).abs() < 1e-9);
    assert!((interpolate_hues(90.0, 90.0, 0.5, HueMethod::Longer) - 270.0).abs() < 1e-9);
}

#[test]
fn test_interpolate_hues_increasing_and_decreasing() {
    assert!((interpolate_hues(300.0, 60.0, 0.5, HueMethod::Increasing) - 360.0).abs() < 1e-9);
    assert!((interpolate_hues(60.0, 300.0, 0.5, HueMethod::Increasing) - 180.0).abs() < 1e-9);
    assert!((interpolate_hues(60.0, 300.0, 0.5, HueMethod::Decreasing) - 360.0).abs() < 1e-9);
}

#[test]
fn test_interpolate_hues_missing_hue_takes_other_endpoint() {
    assert!((interpolate_hues(f64::NAN, 120.0, 0.3, HueMethod::Shorter) - 120.0).abs() < 1e-9);
    assert_eq!(interpolate_hues(45.0, f64::NAN, 0.3, HueMethod::Longer), 45.0);
    assert_eq!(interpolate_hues(f64::NAN, f64::NAN, 0.3, HueMethod::Shorter), 0.0);
}

#[test]
fn test_longer_hue_only_sweeps_between_real_hues() {
    // Achromatic endpoints never turn a gradient into a rainbow
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(interpolate_hues(f64::NAN, 0.0, t, HueMethod::Longer), 0.0);
        assert_eq!(interpolate_hues(210.0, f64::NAN, t, HueMethod::Longer), 210.0);
    }
    // Two equal hues are a full turn apart the long way round
    assert!((interpolate_hues(45.0, 45.0, 0.5, HueMethod::Longer) - 225.0).abs() < 1e-9);
}

#[test]
fn test_interpolate_colors_uses_hue_channel() {
    let mid = interpolate_colors(
        ColorSpace::Oklch,
        HueMethod::Shorter,
        (0.5, 0.1, 350.0),
        (0.7, 0.3, 10.0),
        0.5,
    );
    assert_close(mid, (0.6, 0.2, 360.0), 1e-9);

    let mid = interpolate_colors(
        ColorSpace::Srgb,
        HueMethod::Longer,
        (1.0, 0.0, 0.0),
        (0.0, 0.0, 1.0),
        0.25,
    );
    assert_close(mid, (0.75, 0.0, 0.25), 1e-12);
}

#[test]
fn test_gamut_mapping_keeps_in_gamut_colors() {
    let xyz = srgb_to_xyz(0.25, 0.5, 0.75);
    assert_close(gamut_map_xyz_to_srgb(xyz), (0.25, 0.5, 0.75), 1e-9);
}

#[test]
fn test_gamut_mapping_out_of_gamut_color() {
    // display-p3 pure green is outside sRGB
    let xyz = ColorSpace::DisplayP3.to_xyz((0.0, 1.0, 0.0));
    assert!(!srgb_in_gamut(ColorSpace::Srgb.from_xyz(xyz)));
    let mapped = gamut_map_xyz_to_srgb(xyz);
    assert!(srgb_in_gamut(mapped));
    assert!(mapped.1 > 0.9);
}

#[test]
fn test_gamut_mapping_extreme_lightness() {
    let white_ish = ColorSpace::Oklch.to_xyz((1.2, 0.3, 40.0));
    assert_eq!(gamut_map_xyz_to_srgb(white_ish), (1.0, 1.0, 1.0));
    let black_ish = ColorSpace::Oklch.to_xyz((-0.1, 0.3, 40.0));
    assert_eq!(gamut_map_xyz_to_srgb(black_ish), (0.0, 0.0, 0.0));
}
