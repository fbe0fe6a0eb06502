//! CSS token printer for the kiln CSS compiler.
//!
//! Turns a token tree produced by `kiln-css-lexer` (and possibly rewritten by
//! the lowering passes) back into CSS text. Whitespace is emitted only where a
//! token carries a [`Whitespace`] flag, so callers control the output layout
//! with `normalize_whitespace` before printing.

use kiln_css_lexer::{Token, TokenKind, Whitespace};

/// Print a list of sibling tokens.
pub fn print_tokens(tokens: &[Token]) -> String {
    let mut printer = Printer::new();
    printer.emit_tokens(tokens);
    printer.finish()
}

#[derive(Default)]
pub struct Printer {
    output: String,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_char(&mut self, ch: char) {
        self.output.push(ch);
    }

    pub fn emit_tokens(&mut self, tokens: &[Token]) {
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                let previous = &tokens[i - 1];
                if previous.whitespace.contains(Whitespace::AFTER)
                    || token.whitespace.contains(Whitespace::BEFORE)
                {
                    self.write_char(' ');
                }
            }
            self.emit_token(token);
        }
    }

    pub fn emit_token(&mut self, token: &Token) {
        match token.kind {
            TokenKind::Function => {
                self.write_identifier(&token.text);
                self.write_char('(');
                self.emit_tokens(token.children());
                self.write_char(')');
            }
            TokenKind::OpenParen => {
                self.write_char('(');
                self.emit_tokens(token.children());
                self.write_char(')');
            }
            TokenKind::OpenBracket => {
                self.write_char('[');
                self.emit_tokens(token.children());
                self.write_char(']');
            }
            TokenKind::Ident => self.write_identifier(&token.text),
            TokenKind::Dimension => {
                self.write(token.dimension_value());
                let unit = token.dimension_unit();
                // A unit such as `e3` would read back as an exponent
                if unit.starts_with(['e', 'E'])
                    && unit[1..].starts_with(|c: char| c.is_ascii_digit() || c == '-')
                {
                    self.write_char('\\');
                    self.write(&format!("{:x} ", u32::from(unit.as_bytes()[0])));
                    self.write_identifier(&unit[1..]);
                } else {
                    self.write_identifier(unit);
                }
            }
            TokenKind::Hash => {
                self.write_char('#');
                self.write_name(&token.text, false);
            }
            TokenKind::String => self.write_string(&token.text),
            TokenKind::Url => {
                self.write("url(");
                self.write(&token.text);
                self.write_char(')');
            }
            TokenKind::Number
            | TokenKind::Percentage
            | TokenKind::Comma
            | TokenKind::DelimPlus
            | TokenKind::DelimMinus
            | TokenKind::DelimAsterisk
            | TokenKind::DelimSlash
            | TokenKind::Delim => self.write(&token.text),
        }
    }

    fn write_identifier(&mut self, text: &str) {
        self.write_name(text, true);
    }

    /// Identifiers may not start with a digit; hash names may.
    fn write_name(&mut self, text: &str, is_identifier: bool) {
        for (i, ch) in text.char_indices() {
            let plain = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii();
            let digit_at_start = is_identifier
                && ch.is_ascii_digit()
                && (i == 0 || (i == 1 && text.starts_with('-')));
            if plain && !digit_at_start {
                self.write_char(ch);
            } else if ch.is_ascii_graphic() && !digit_at_start {
                self.write_char('\\');
                self.write_char(ch);
            } else {
                self.write(&format!("\\{:x} ", u32::from(ch)));
            }
        }
    }

    fn write_string(&mut self, text: &str) {
        let quote = if text.contains('"') && !text.contains('\'') {
            '\''
        } else {
            '"'
        };
        self.write_char(quote);
        for ch in text.chars() {
            match ch {
                '\\' => self.write("\\\\"),
                '\n' => self.write("\\a "),
                _ if ch == quote => {
                    self.write_char('\\');
                    self.write_char(ch);
                }
                _ => self.write_char(ch),
            }
        }
        self.write_char(quote);
    }
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod tests;
