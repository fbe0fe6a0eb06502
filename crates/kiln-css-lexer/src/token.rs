//! Token model for CSS declaration values.

use bitflags::bitflags;
use kiln_common::Loc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    /// `name(` with the arguments stored as children.
    Function,
    Number,
    /// Text includes the trailing `%`.
    Percentage,
    /// Text is `<number><unit>`; see [`Token::unit_offset`].
    Dimension,
    /// Text excludes the leading `#`.
    Hash,
    /// Text excludes the quotes and is unescaped.
    String,
    /// Unquoted `url(...)`; text is the raw contents.
    Url,
    Comma,
    DelimPlus,
    DelimMinus,
    DelimAsterisk,
    DelimSlash,
    /// Any other single-character delimiter.
    Delim,
    /// `(` with the contents stored as children.
    OpenParen,
    /// `[` with the contents stored as children.
    OpenBracket,
}

impl TokenKind {
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Percentage | TokenKind::Dimension
        )
    }
}

bitflags! {
    /// Whether whitespace separates this token from its neighbors.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Whitespace: u8 {
        const BEFORE = 1 << 0;
        const AFTER = 1 << 1;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub loc: Loc,
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of the unit inside `text` for dimensions.
    pub unit_offset: u16,
    pub whitespace: Whitespace,
    /// Present for functions and blocks.
    pub children: Option<Vec<Token>>,
}

impl Token {
    pub fn new(loc: Loc, kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            loc,
            kind,
            text: text.into(),
            unit_offset: 0,
            whitespace: Whitespace::empty(),
            children: None,
        }
    }

    pub fn function(loc: Loc, name: impl Into<String>, children: Vec<Token>) -> Self {
        Token {
            children: Some(children),
            ..Token::new(loc, TokenKind::Function, name)
        }
    }

    pub fn comma(loc: Loc) -> Self {
        Token::new(loc, TokenKind::Comma, ",")
    }

    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.kind == TokenKind::Function && self.text.eq_ignore_ascii_case(name)
    }

    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.text.eq_ignore_ascii_case(name)
    }

    pub fn children(&self) -> &[Token] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// The numeric part of a dimension (`"10"` for `10px`).
    pub fn dimension_value(&self) -> &str {
        &self.text[..self.unit_offset as usize]
    }

    /// The unit of a dimension (`"px"` for `10px`).
    pub fn dimension_unit(&self) -> &str {
        &self.text[self.unit_offset as usize..]
    }

    /// The numeric part of a percentage (`"10"` for `10%`).
    pub fn percentage_value(&self) -> &str {
        self.text.strip_suffix('%').unwrap_or(&self.text)
    }

    /// Parse the numeric part of a number, percentage or dimension.
    pub fn numeric_value(&self) -> Option<f64> {
        let text = match self.kind {
            TokenKind::Number => self.text.as_str(),
            TokenKind::Percentage => self.percentage_value(),
            TokenKind::Dimension => self.dimension_value(),
            _ => return None,
        };
        text.parse().ok()
    }
}

/// Compare token lists structurally, ignoring locations and whitespace.
pub fn tokens_equal(a: &[Token], b: &[Token]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(a, b)| {
            a.kind == b.kind
                && a.text == b.text
                && match (&a.children, &b.children) {
                    (Some(a), Some(b)) => tokens_equal(a, b),
                    (None, None) => true,
                    _ => false,
                }
        })
}
