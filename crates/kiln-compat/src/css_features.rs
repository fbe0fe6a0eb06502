//! CSS features whose absence triggers lowering.

use bitflags::bitflags;

bitflags! {
    /// A set of CSS features. Used as "unsupported by at least one target".
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CssFeature: u16 {
        /// `lab()`, `lch()`, `oklab()`, `oklch()` and `color()`.
        const COLOR_FUNCTIONS = 1 << 0;
        /// `red 10% 30%` shorthand for two stops of the same color.
        const GRADIENT_DOUBLE_POSITION = 1 << 1;
        /// `in <colorspace> [<hue-method> hue]` inside gradients.
        const GRADIENT_INTERPOLATION = 1 << 2;
        /// Transition hints between two color stops.
        const GRADIENT_MIDPOINTS = 1 << 3;
        /// `#rgba` and `#rrggbbaa` hex colors.
        const HEX_RGBA = 1 << 4;
        /// `hwb()` colors.
        const HWB = 1 << 5;
    }
}

const FEATURE_NAMES: &[(&str, CssFeature)] = &[
    ("color-functions", CssFeature::COLOR_FUNCTIONS),
    ("gradient-double-position", CssFeature::GRADIENT_DOUBLE_POSITION),
    ("gradient-interpolation", CssFeature::GRADIENT_INTERPOLATION),
    ("gradient-midpoints", CssFeature::GRADIENT_MIDPOINTS),
    ("hex-rgba", CssFeature::HEX_RGBA),
    ("hwb", CssFeature::HWB),
];

impl CssFeature {
    /// Look up a feature by its kebab-case name (e.g. `gradient-midpoints`).
    pub fn from_kebab_name(name: &str) -> Option<CssFeature> {
        FEATURE_NAMES
            .iter()
            .find(|(feature_name, _)| feature_name.eq_ignore_ascii_case(name))
            .map(|&(_, feature)| feature)
    }

    /// The kebab-case name of a single feature.
    pub fn name(self) -> Option<&'static str> {
        FEATURE_NAMES
            .iter()
            .find(|&&(_, feature)| feature == self)
            .map(|&(name, _)| name)
    }

    /// Replace the bits selected by `mask` with the corresponding bits of
    /// `overrides`.
    pub fn apply_overrides(self, overrides: CssFeature, mask: CssFeature) -> CssFeature {
        (self & !mask) | (overrides & mask)
    }
}

#[cfg(test)]
#[path = "../tests/css_features_tests.rs"]
mod tests;
