//! Browser compatibility data for the kiln CSS compiler.
//!
//! - `CssFeature` - Bitmask of CSS features a target may lack
//! - `Engine` / `Semver` - Browser engines and their versions
//! - `unsupported_css_features` - Feature mask for a set of targets

pub mod css_features;
pub use css_features::CssFeature;

pub mod engines;
pub use engines::{Engine, Semver, TargetError, parse_targets, unsupported_css_features};
