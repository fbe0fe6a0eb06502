use colored::Colorize;
use std::collections::HashMap;
use std::path::Path;

use kiln_common::diagnostics::{Diagnostic, DiagnosticCategory};

pub struct Reporter {
    color: bool,
    sources: HashMap<String, String>,
    line_starts: HashMap<String, Vec<u32>>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: HashMap::new(),
            line_starts: HashMap::new(),
        }
    }

    /// Register source text for a file that isn't on disk (e.g. stdin).
    pub fn add_source(&mut self, file: impl Into<String>, source: impl Into<String>) {
        let file = file.into();
        self.line_starts.remove(&file);
        self.sources.insert(file, source.into());
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let mut output = match self.format_location(&diagnostic.file, diagnostic.start) {
            Some(location) => location,
            None if !diagnostic.file.is_empty() => diagnostic.file.clone(),
            None => "<stdin>".to_string(),
        };

        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) =
            self.format_snippet(&diagnostic.file, diagnostic.start, diagnostic.length)
        {
            output.push_str(&snippet);
        }
        output
    }

    /// Format the offending line with the span underlined:
    ///
    /// ```text
    ///     3     background: color(display-p3 0 1 0);
    ///                       ~~~~~~~~~~~~~~~~~~~~~~~~~
    /// ```
    ///
    /// Only the part of the span on its first line is underlined.
    fn format_snippet(&mut self, file: &str, start: u32, length: u32) -> Option<String> {
        if file.is_empty() || length == 0 {
            return None;
        }

        let (line_num, column) = self.position_for(file, start)?;
        let source = self.sources.get(file)?;
        let line_text = source.lines().nth((line_num - 1) as usize)?;

        let mut underline = String::new();
        let span = (column - 1) as usize..(column - 1 + length) as usize;
        for (i, ch) in line_text.chars().enumerate() {
            if i >= span.end {
                break;
            }
            let width = if ch == '\t' { 4 } else { 1 };
            let fill = if span.contains(&i) { "~" } else { " " };
            underline.push_str(&fill.repeat(width));
        }
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline = if self.color {
            underline.red().to_string()
        } else {
            underline
        };
        Some(format!("\n  {line_num:>3}   {line_text}\n        {underline}"))
    }

    fn format_location(&mut self, file: &str, offset: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }
        let (line, column) = self.position_for(file, offset)?;
        Some(format!("{file}:{line}:{column}"))
    }

    /// One-based line and column (in characters) of a byte offset.
    fn position_for(&mut self, file: &str, offset: u32) -> Option<(u32, u32)> {
        self.ensure_source(file)?;
        let source = self.sources.get(file)?;
        let line_starts = self
            .line_starts
            .entry(file.to_string())
            .or_insert_with(|| compute_line_starts(source));

        let line = line_starts.partition_point(|&start| start <= offset).max(1) - 1;
        let line_start = line_starts[line] as usize;
        let end = (offset as usize).min(source.len());
        let column = source.get(line_start..end)?.chars().count();
        Some((line as u32 + 1, column as u32 + 1))
    }

    fn ensure_source(&mut self, file: &str) -> Option<()> {
        if !self.sources.contains_key(file) {
            let contents = std::fs::read_to_string(Path::new(file)).ok()?;
            self.sources.insert(file.to_string(), contents);
        }
        Some(())
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Warning => "warning",
        };

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
        }
    }
}

fn compute_line_starts(source: &str) -> Vec<u32> {
    let mut starts = vec![0];
    starts.extend(
        source
            .bytes()
            .enumerate()
            .filter(|&(_, byte)| byte == b'\n')
            .map(|(i, _)| i as u32 + 1),
    );
    starts
}
