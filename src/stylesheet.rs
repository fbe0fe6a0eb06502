//! Stylesheet-level driver.
//!
//! The lowering crate works on one declaration value at a time. This module
//! finds the declarations of a whole stylesheet, hands every value that
//! mentions a gradient to [`lower_declaration_value`], and splices the result
//! back into the source. Everything outside those values (selectors, at-rule
//! preludes, comments, formatting) is copied through untouched.

use kiln_common::diagnostics::{Diagnostic, format_message, messages};
use kiln_css_lexer::tokenize;
use kiln_css_lowering::{LowerOptions, contains_gradient, lower_declaration_value};
use kiln_css_printer::print_tokens;
use std::ops::Range;
use tracing::{debug, trace};

/// A declaration found by [`scan_declarations`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
    /// Byte range of `value` in the stylesheet, without surrounding whitespace.
    pub value_range: Range<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoweredStylesheet {
    pub css: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of declaration values that were rewritten.
    pub declarations_changed: usize,
}

/// Lower every gradient in a stylesheet.
///
/// `file` is only used to label diagnostics.
pub fn lower_stylesheet(file: &str, source: &str, options: &LowerOptions) -> LoweredStylesheet {
    let mut css = String::with_capacity(source.len());
    let mut diagnostics = Vec::new();
    let mut declarations_changed = 0;
    let mut copied_up_to = 0;

    for declaration in scan_declarations(source) {
        if !contains_gradient(declaration.value) {
            continue;
        }

        let lowered = lower_declaration_value(tokenize(declaration.value), options);
        if lowered.would_clip_color {
            let Range { start, end } = declaration.value_range;
            diagnostics.push(Diagnostic::warning(
                file,
                start as u32,
                (end - start) as u32,
                format_message(messages::COLOR_CLIPPED_TO_SRGB, &[declaration.property]),
            ));
        }

        // Whitespace-only changes still count when minifying
        let printed = print_tokens(&lowered.tokens);
        if printed == declaration.value || (!lowered.changed && !options.minify_whitespace) {
            continue;
        }

        trace!(property = declaration.property, "rewriting declaration value");
        css.push_str(&source[copied_up_to..declaration.value_range.start]);
        css.push_str(&printed);
        copied_up_to = declaration.value_range.end;
        declarations_changed += 1;
    }
    css.push_str(&source[copied_up_to..]);

    debug!(
        file,
        declarations_changed,
        warnings = diagnostics.len(),
        "lowered stylesheet"
    );

    LoweredStylesheet {
        css,
        diagnostics,
        declarations_changed,
    }
}

/// Find the `property: value` declarations of a stylesheet.
///
/// The scanner only knows enough CSS to split rules apart: a segment ending
/// in `{` is a selector or at-rule prelude, and a segment inside a block that
/// ends in `;` or `}` and has a top-level colon is a declaration. Comments,
/// strings and escapes are skipped so their contents can't end a segment.
/// Custom properties are not returned since their values are arbitrary
/// token streams.
pub fn scan_declarations(source: &str) -> Vec<Declaration<'_>> {
    let bytes = source.as_bytes();
    let mut declarations = Vec::new();
    let mut segment_start = 0;
    let mut colon = None;
    let mut paren_depth = 0u32;
    let mut block_depth = 0u32;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let comment_end = source[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |end| i + 2 + end + 2);
                // Leading comments aren't part of the property name
                if source[segment_start..i].trim().is_empty() {
                    segment_start = comment_end;
                }
                i = comment_end;
                continue;
            }
            quote @ (b'"' | b'\'') => {
                i = skip_string(bytes, i, quote);
                continue;
            }
            b'\\' => {
                i += 2;
                continue;
            }
            b'(' | b'[' => paren_depth += 1,
            b')' | b']' => paren_depth = paren_depth.saturating_sub(1),
            b':' if paren_depth == 0 && colon.is_none() => colon = Some(i),
            b';' if paren_depth == 0 => {
                if block_depth > 0 {
                    push_declaration(source, segment_start, colon, i, &mut declarations);
                }
                segment_start = i + 1;
                colon = None;
            }
            b'{' => {
                block_depth += 1;
                paren_depth = 0;
                segment_start = i + 1;
                colon = None;
            }
            b'}' => {
                if block_depth > 0 {
                    push_declaration(source, segment_start, colon, i, &mut declarations);
                }
                block_depth = block_depth.saturating_sub(1);
                paren_depth = 0;
                segment_start = i + 1;
                colon = None;
            }
            _ => {}
        }
        i += 1;
    }

    // An unterminated block still ends at the end of the file
    if block_depth > 0 {
        push_declaration(source, segment_start, colon, bytes.len(), &mut declarations);
    }

    declarations
}

fn push_declaration<'a>(
    source: &'a str,
    start: usize,
    colon: Option<usize>,
    end: usize,
    declarations: &mut Vec<Declaration<'a>>,
) {
    let Some(colon) = colon else {
        return;
    };
    let property = source[start..colon].trim();
    if property.is_empty() || property.starts_with("--") || property.starts_with('@') {
        return;
    }

    let raw = &source[colon + 1..end];
    let value = raw.trim();
    if value.is_empty() {
        return;
    }
    let value_start = colon + 1 + (raw.len() - raw.trim_start().len());
    declarations.push(Declaration {
        property,
        value,
        value_range: value_start..value_start + value.len(),
    });
}

/// Return the index just past the string starting at `start`.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
#[path = "tests/stylesheet_tests.rs"]
mod tests;
