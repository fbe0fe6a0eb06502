//! Declaration-level lowering.
//!
//! Walks the token tree of one declaration value and lowers every gradient
//! function in it, including gradients nested in the arguments of other
//! functions:
//!
//! ```css
//! background: image-set(linear-gradient(in oklch, red, blue) 1x), url(a.png);
//! ```
//!
//! Each gradient is lowered independently. A gradient that can't be parsed is
//! left exactly as written, so the pass never makes a value invalid.

use crate::gradient::{GradientKind, lower_and_minify_gradient};
use crate::options::LowerOptions;
use kiln_common::limits::MAX_VALUE_NESTING_DEPTH;
use kiln_css_lexer::{Token, TokenKind, normalize_whitespace, tokens_equal};
use std::slice;
use tracing::{debug, trace};

/// The result of lowering one declaration value.
#[derive(Clone, Debug, PartialEq)]
pub struct LoweredValue {
    pub tokens: Vec<Token>,
    /// True if any gradient was rewritten.
    pub changed: bool,
    /// True if a stop color had to be clipped to the sRGB gamut.
    pub would_clip_color: bool,
}

/// Lower every gradient in a declaration value.
pub fn lower_declaration_value(tokens: Vec<Token>, options: &LowerOptions) -> LoweredValue {
    LoweringPass::new(options).run(tokens)
}

/// Whether a value mentions a gradient function anywhere, so callers can skip
/// tokenizing values that can't need lowering.
pub fn contains_gradient(value: &str) -> bool {
    value.to_ascii_lowercase().contains("gradient(")
}

pub struct LoweringPass<'a> {
    options: &'a LowerOptions,
    /// Current nesting depth, to bound recursion on pathological input
    visit_depth: u32,
    gradients_seen: u32,
    gradients_changed: u32,
    would_clip_color: bool,
}

impl<'a> LoweringPass<'a> {
    pub fn new(options: &'a LowerOptions) -> Self {
        LoweringPass {
            options,
            visit_depth: 0,
            gradients_seen: 0,
            gradients_changed: 0,
            would_clip_color: false,
        }
    }

    pub fn run(mut self, tokens: Vec<Token>) -> LoweredValue {
        let mut tokens = self.visit_tokens(tokens);
        normalize_whitespace(&mut tokens, self.options.minify_whitespace);

        if self.gradients_seen > 0 {
            debug!(
                gradients = self.gradients_seen,
                changed = self.gradients_changed,
                would_clip_color = self.would_clip_color,
                "lowered declaration value"
            );
        }

        LoweredValue {
            tokens,
            changed: self.gradients_changed > 0,
            would_clip_color: self.would_clip_color,
        }
    }

    fn visit_tokens(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter().map(|token| self.visit(token)).collect()
    }

    fn visit(&mut self, mut token: Token) -> Token {
        if token.children.is_none() {
            return token;
        }
        if self.visit_depth >= MAX_VALUE_NESTING_DEPTH {
            trace!(depth = self.visit_depth, "value nesting too deep, not descending");
            return token;
        }

        if token.kind == TokenKind::Function
            && GradientKind::from_function_name(&token.text).is_some()
        {
            return self.visit_gradient(token);
        }

        self.visit_depth += 1;
        if let Some(children) = token.children.take() {
            token.children = Some(self.visit_tokens(children));
        }
        self.visit_depth -= 1;
        token
    }

    fn visit_gradient(&mut self, token: Token) -> Token {
        self.gradients_seen += 1;
        let before = token.clone();
        let lowered = lower_and_minify_gradient(token, self.options, &mut self.would_clip_color);
        if !tokens_equal(slice::from_ref(&before), slice::from_ref(&lowered)) {
            self.gradients_changed += 1;
        }
        lowered
    }
}

#[cfg(test)]
#[path = "../tests/lowering_pass_tests.rs"]
mod tests;
