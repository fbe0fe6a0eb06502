//! Tokenizer for a single CSS declaration value.
//!
//! The lexer produces a token tree rather than a flat stream: the arguments of
//! a function (and the contents of `(...)` / `[...]` blocks) are stored as the
//! children of the opening token. Whitespace is not kept as tokens; instead it
//! is recorded as [`Whitespace`] flags on the tokens on either side of it.

use crate::token::{Token, TokenKind, Whitespace};
use kiln_common::Loc;

/// Tokenize a declaration value such as `linear-gradient(red, blue) fixed`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

/// A partially built block: the opening token and the siblings it interrupted.
struct OpenBlock {
    token: Token,
    parent: Vec<Token>,
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer { source, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn loc(&self, start: usize) -> Loc {
        Loc::new(start as u32)
    }

    pub fn run(mut self) -> Vec<Token> {
        let mut stack: Vec<OpenBlock> = Vec::new();
        let mut current: Vec<Token> = Vec::new();
        let mut pending_whitespace = false;

        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                while self.peek().is_some_and(is_whitespace) {
                    self.bump();
                }
                pending_whitespace = true;
                continue;
            }

            if c == '/' && self.peek_at(1) == Some('*') {
                self.skip_comment();
                continue;
            }

            if c == ')' || c == ']' {
                let closes = stack.last().is_some_and(|open| match open.token.kind {
                    TokenKind::Function | TokenKind::OpenParen => c == ')',
                    TokenKind::OpenBracket => c == ']',
                    _ => false,
                });
                if closes {
                    self.bump();
                    if pending_whitespace {
                        if let Some(last) = current.last_mut() {
                            last.whitespace.insert(Whitespace::AFTER);
                        }
                    }
                    pending_whitespace = false;
                    if let Some(open) = stack.pop() {
                        let children = std::mem::replace(&mut current, open.parent);
                        let mut token = open.token;
                        token.children = Some(children);
                        current.push(token);
                    }
                    continue;
                }
            }

            let mut token = self.next_token();
            if pending_whitespace {
                token.whitespace.insert(Whitespace::BEFORE);
                if let Some(last) = current.last_mut() {
                    last.whitespace.insert(Whitespace::AFTER);
                }
                pending_whitespace = false;
            }

            if matches!(
                token.kind,
                TokenKind::Function | TokenKind::OpenParen | TokenKind::OpenBracket
            ) {
                let parent = std::mem::take(&mut current);
                stack.push(OpenBlock { token, parent });
            } else {
                current.push(token);
            }
        }

        // Unterminated blocks are closed at the end of the value
        while let Some(open) = stack.pop() {
            let children = std::mem::replace(&mut current, open.parent);
            let mut token = open.token;
            token.children = Some(children);
            current.push(token);
        }

        current
    }

    fn skip_comment(&mut self) {
        self.pos += 2;
        match self.source[self.pos..].find("*/") {
            Some(end) => self.pos += end + 2,
            None => self.pos = self.source.len(),
        }
    }

    fn next_token(&mut self) -> Token {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return Token::new(self.loc(start), TokenKind::Delim, "");
        };

        match c {
            '"' | '\'' => self.string_token(c),
            '#' if self.peek_at(1).is_some_and(is_name_char) => {
                self.bump();
                let name = self.consume_name();
                Token::new(self.loc(start), TokenKind::Hash, name)
            }
            ',' => {
                self.bump();
                Token::comma(self.loc(start))
            }
            '(' => {
                self.bump();
                Token::new(self.loc(start), TokenKind::OpenParen, "(")
            }
            '[' => {
                self.bump();
                Token::new(self.loc(start), TokenKind::OpenBracket, "[")
            }
            _ if self.starts_number() => self.numeric_token(),
            _ if self.starts_ident() => self.ident_like_token(),
            _ => {
                self.bump();
                let kind = match c {
                    '+' => TokenKind::DelimPlus,
                    '-' => TokenKind::DelimMinus,
                    '*' => TokenKind::DelimAsterisk,
                    '/' => TokenKind::DelimSlash,
                    _ => TokenKind::Delim,
                };
                Token::new(self.loc(start), kind, c.to_string())
            }
        }
    }

    fn starts_number(&self) -> bool {
        let digit_at = |n: usize| self.peek_at(n).is_some_and(|c| c.is_ascii_digit());
        match self.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => digit_at(1),
            Some('+' | '-') => digit_at(1) || (self.peek_at(1) == Some('.') && digit_at(2)),
            _ => false,
        }
    }

    fn starts_ident(&self) -> bool {
        match self.peek() {
            Some('-') => match self.peek_at(1) {
                Some('-') => true,
                Some(c) => is_name_start(c) || c == '\\',
                None => false,
            },
            Some('\\') => self.peek_at(1).is_some_and(|c| c != '\n'),
            Some(c) => is_name_start(c),
            None => false,
        }
    }

    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_name_char(c) {
                name.push(c);
                self.bump();
            } else if c == '\\' && self.peek_at(1).is_some_and(|next| next != '\n') {
                self.bump();
                name.push(self.consume_escape());
            } else {
                break;
            }
        }
        name
    }

    /// Consume the part of an escape sequence after the backslash.
    fn consume_escape(&mut self) -> char {
        let mut hex = String::new();
        while hex.len() < 6 && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            if let Some(c) = self.bump() {
                hex.push(c);
            }
        }
        if hex.is_empty() {
            return self.bump().unwrap_or('\u{FFFD}');
        }
        if self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .filter(|&c| c != '\0')
            .unwrap_or('\u{FFFD}')
    }

    fn numeric_token(&mut self) -> Token {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        self.consume_digits();
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            self.consume_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = |n: usize| self.peek_at(n).is_some_and(|c| c.is_ascii_digit());
            let has_exponent =
                digit_at(1) || (matches!(self.peek_at(1), Some('+' | '-')) && digit_at(2));
            if has_exponent {
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                self.consume_digits();
            }
        }

        let number = &self.source[start..self.pos];
        if self.peek() == Some('%') {
            self.bump();
            return Token::new(self.loc(start), TokenKind::Percentage, format!("{number}%"));
        }
        if self.starts_ident() {
            let unit_offset = number.len() as u16;
            let number = number.to_string();
            let unit = self.consume_name();
            let mut token =
                Token::new(self.loc(start), TokenKind::Dimension, format!("{number}{unit}"));
            token.unit_offset = unit_offset;
            return token;
        }
        Token::new(self.loc(start), TokenKind::Number, number)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn ident_like_token(&mut self) -> Token {
        let start = self.pos;
        let name = self.consume_name();
        if self.peek() != Some('(') {
            return Token::new(self.loc(start), TokenKind::Ident, name);
        }
        self.bump();

        if name.eq_ignore_ascii_case("url") {
            let rest = self.source[self.pos..].trim_start_matches(is_whitespace);
            if !rest.starts_with('"') && !rest.starts_with('\'') {
                return self.url_token(start);
            }
        }
        Token::new(self.loc(start), TokenKind::Function, name)
    }

    fn url_token(&mut self, start: usize) -> Token {
        let end = self.source[self.pos..]
            .find(')')
            .map_or(self.source.len(), |offset| self.pos + offset);
        let text = self.source[self.pos..end].trim().to_string();
        self.pos = (end + 1).min(self.source.len());
        Token::new(self.loc(start), TokenKind::Url, text)
    }

    fn string_token(&mut self, quote: char) -> Token {
        let start = self.pos;
        self.bump();
        let mut text = String::new();
        let mut terminated = false;
        while let Some(c) = self.peek() {
            match c {
                _ if c == quote => {
                    self.bump();
                    terminated = true;
                    break;
                }
                '\n' => break,
                '\\' => {
                    self.bump();
                    match self.peek() {
                        Some('\n') => {
                            self.bump();
                        }
                        Some(_) => text.push(self.consume_escape()),
                        None => {}
                    }
                }
                _ => {
                    text.push(c);
                    self.bump();
                }
            }
        }
        if !terminated {
            tracing::trace!(start, "unterminated string in CSS value");
        }
        Token::new(self.loc(start), TokenKind::String, text)
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

/// Normalize whitespace flags the way the printer expects them:
/// - no whitespace at the start or end of any token list
/// - no whitespace before a comma
/// - exactly one space after a comma (none when minifying whitespace)
pub fn normalize_whitespace(tokens: &mut [Token], minify_whitespace: bool) {
    if let Some(first) = tokens.first_mut() {
        first.whitespace.remove(Whitespace::BEFORE);
    }
    if let Some(last) = tokens.last_mut() {
        last.whitespace.remove(Whitespace::AFTER);
    }

    let len = tokens.len();
    for i in 0..len {
        if tokens[i].kind == TokenKind::Comma {
            tokens[i].whitespace.remove(Whitespace::BEFORE);
            if i > 0 {
                tokens[i - 1].whitespace.remove(Whitespace::AFTER);
            }
            if minify_whitespace {
                tokens[i].whitespace.remove(Whitespace::AFTER);
                if i + 1 < len {
                    tokens[i + 1].whitespace.remove(Whitespace::BEFORE);
                }
            } else if i + 1 < len {
                tokens[i].whitespace.insert(Whitespace::AFTER);
            }
        }
        if let Some(children) = tokens[i].children.as_mut() {
            normalize_whitespace(children, minify_whitespace);
        }
    }
}

#[cfg(test)]
#[path = "../tests/lexer_tests.rs"]
mod tests;
