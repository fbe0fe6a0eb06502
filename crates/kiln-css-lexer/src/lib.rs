//! CSS value tokenizer for the kiln CSS compiler.
//!
//! This crate provides the lexical analysis phase for declaration values:
//! - `Token` / `TokenKind` - Token tree with whitespace flags
//! - `tokenize` - Turns value text into a token tree
//! - `normalize_whitespace` - Canonical whitespace around commas and blocks
pub mod token;
pub use token::{Token, TokenKind, Whitespace, tokens_equal};

pub mod lexer;
pub use lexer::{Lexer, normalize_whitespace, tokenize};
