//! Gradient and color lowering for the kiln CSS compiler.
//!
//! - `color_spaces` - Conversions between the CSS Color 4 color spaces
//! - `color` - Parsing, lowering and minification of single colors
//! - `gradient` - Parsing, expansion and re-emission of gradient functions
//! - `lowering_pass` - Lowers every gradient in a declaration value

pub mod options;
pub use options::LowerOptions;

pub mod color_spaces;
pub use color_spaces::{ColorSpace, HueMethod};

pub mod color;
pub use color::{ParsedColor, lower_and_minify_color, parse_color};

pub mod gradient;
pub use gradient::{GradientKind, ParsedGradient, lower_and_minify_gradient, parse_gradient};

pub mod lowering_pass;
pub use lowering_pass::{LoweredValue, contains_gradient, lower_declaration_value};
