//! kiln: CSS gradient lowering for older browser targets.
//!
//! Gradients written with modern syntax (`in oklch` interpolation, transition
//! hints, wide-gamut stop colors, double-position stops) are rewritten into
//! plain sRGB gradients that approximate them closely:
//!
//! ```
//! use kiln::{CssFeature, LowerOptions, lower_stylesheet};
//!
//! let options = LowerOptions::new(CssFeature::GRADIENT_INTERPOLATION);
//! let lowered = lower_stylesheet("a.css", "a { background: linear-gradient(in srgb, red, blue) }", &options);
//! assert_eq!(lowered.css, "a { background: linear-gradient(#ff0000, #0000ff) }");
//! ```
//!
//! The work is split across the workspace crates:
//! - `kiln-compat` - Feature mask for a set of browser targets
//! - `kiln-css-lexer` / `kiln-css-printer` - Value tokens in and out
//! - `kiln-css-lowering` - Gradient parsing, expansion and minification
//!
//! This crate adds the stylesheet driver, the CLI and tracing setup.

pub use kiln_common::{Diagnostic, DiagnosticCategory};
pub use kiln_compat::{CssFeature, Engine, Semver, TargetError, parse_targets, unsupported_css_features};
pub use kiln_css_lowering::{LowerOptions, LoweredValue, lower_declaration_value};

pub mod stylesheet;
pub use stylesheet::{LoweredStylesheet, lower_stylesheet, scan_declarations};

#[cfg(feature = "cli")]
pub mod cli;

pub mod tracing_config;
