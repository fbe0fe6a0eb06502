use kiln_common::Loc;
use kiln_compat::CssFeature;
use kiln_css_lexer::{Token, Whitespace};

/// Options threaded through every lowering pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LowerOptions {
    /// Features missing from at least one configured target.
    pub unsupported_css_features: CssFeature,
    /// Rewrite values into shorter equivalents.
    pub minify_syntax: bool,
    /// Drop optional whitespace.
    pub minify_whitespace: bool,
}

impl LowerOptions {
    pub fn new(unsupported_css_features: CssFeature) -> Self {
        LowerOptions {
            unsupported_css_features,
            ..LowerOptions::default()
        }
    }

    pub fn minified(mut self) -> Self {
        self.minify_syntax = true;
        self.minify_whitespace = true;
        self
    }

    pub fn unsupports(&self, feature: CssFeature) -> bool {
        self.unsupported_css_features.contains(feature)
    }

    /// A comma separator, followed by a space unless whitespace is minified.
    pub fn comma_token(&self, loc: Loc) -> Token {
        let comma = Token::comma(loc);
        if self.minify_whitespace {
            comma
        } else {
            comma.with_whitespace(Whitespace::AFTER)
        }
    }
}
