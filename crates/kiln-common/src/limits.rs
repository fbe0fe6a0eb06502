//! Centralized limits and thresholds for the CSS lowering passes.
//!
//! This module provides shared constants for recursion depths and numeric
//! tolerances used when gradients are rewritten for older browsers.
//! Centralizing these values:
//! - Prevents duplicate definitions with inconsistent values
//! - Makes it easy to tune output size against color fidelity
//! - Documents what each limit trades off
//!
//! # Categories
//!
//! - **Recursion Depths**: Bounds on adaptive subdivision
//! - **Numeric Tolerances**: Thresholds for deciding two values are "the same"
//! - **Output Formatting**: Decimal precision of generated tokens

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum bisection depth when expanding one interval of a gradient.
///
/// Each original pair of adjacent color stops is subdivided recursively until
/// the sRGB renderer's straight-line interpolation is close enough to the real
/// interpolation. Samples are taken at depths `0..MAX_GRADIENT_EXPANSION_DEPTH`, so
/// a single interval gains at most `2^4 - 1 = 15` generated stops.
///
/// # CSS example
///
/// ```css
/// /* Hue wraps the long way around: needs many intermediate stops */
/// background: linear-gradient(in oklch longer hue, red, blue);
/// ```
pub const MAX_GRADIENT_EXPANSION_DEPTH: u32 = 4;

/// Maximum nesting depth of function tokens visited by the lowering pass.
///
/// Gradients may appear inside other functions (`image-set(...)`, `var()`
/// fallbacks, ...). The lowering pass stops descending past this depth.
pub const MAX_VALUE_NESTING_DEPTH: u32 = 32;

// =============================================================================
// Numeric Tolerances
// =============================================================================

/// Distance below which a sampled gradient color is considered identical to
/// what a naive premultiplied-sRGB renderer would produce.
///
/// Compared against the squared Euclidean distance in premultiplied sRGB, so
/// the effective threshold is `(4/255)^2`. This is a perceptual heuristic, not
/// a proven error bound.
pub const GRADIENT_COLOR_EPSILON: f64 = 4.0 / 255.0;

/// Tolerance used when checking whether a stop position is exactly implied by
/// uniform interpolation between its neighbors.
///
/// # CSS example
///
/// ```css
/// /* 50% is implied by 0% and 100%, so it can be dropped */
/// background: linear-gradient(red 0%, green 50%, blue 100%);
/// ```
pub const IMPLIED_POSITION_TOLERANCE: f64 = 0.01;

/// Just-noticeable difference (deltaEOK) used by CSS Color 4 gamut mapping.
pub const GAMUT_MAPPING_JND: f64 = 0.02;

/// Chroma search resolution used by CSS Color 4 gamut mapping.
pub const GAMUT_MAPPING_EPSILON: f64 = 0.0001;

// =============================================================================
// Output Formatting
// =============================================================================

/// Decimal places used when printing generated stop positions.
pub const POSITION_DECIMALS: usize = 2;

/// Decimal places used when printing generated `color(xyz ...)` components.
pub const COLOR_COMPONENT_DECIMALS: usize = 3;
