use kiln_common::Diagnostic;

use super::reporter::Reporter;

const SOURCE: &str = "a {\n  background: color(display-p3 0 1 0);\n}\n";

fn warning_at_value() -> Diagnostic {
    let start = SOURCE.find("color(").unwrap() as u32;
    Diagnostic::warning("style.css", start, 23, "colors were clipped")
}

#[test]
fn formats_location_and_category() {
    let mut reporter = Reporter::new(false);
    reporter.add_source("style.css", SOURCE);
    let output = reporter.format_diagnostic(&warning_at_value());

    let first_line = output.lines().next().unwrap();
    assert_eq!(first_line, "style.css:2:15 - warning: colors were clipped");
}

#[test]
fn formats_snippet_with_underline() {
    let mut reporter = Reporter::new(false);
    reporter.add_source("style.css", SOURCE);
    let output = reporter.format_diagnostic(&warning_at_value());

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "    2     background: color(display-p3 0 1 0);");
    assert_eq!(lines[2], format!("        {}{}", " ".repeat(14), "~".repeat(23)));
}

#[test]
fn unnamed_and_unknown_files() {
    let mut reporter = Reporter::new(false);
    let unnamed = Diagnostic::warning("", 0, 0, "no input");
    assert_eq!(reporter.format_diagnostic(&unnamed), "<stdin> - warning: no input");

    let missing = Diagnostic::warning("/definitely/not/here.css", 3, 1, "gone");
    assert_eq!(
        reporter.format_diagnostic(&missing),
        "/definitely/not/here.css - warning: gone"
    );
}

#[test]
fn colored_output_keeps_the_text() {
    colored::control::set_override(true);
    let mut reporter = Reporter::new(true);
    reporter.add_source("style.css", SOURCE);
    let output = reporter.format_diagnostic(&warning_at_value());
    assert!(output.contains("warning"));
    assert!(output.contains("\u{1b}["));
    assert!(output.contains("colors were clipped"));
}

#[test]
fn render_joins_diagnostics() {
    let mut reporter = Reporter::new(false);
    reporter.add_source("style.css", SOURCE);
    let diagnostics = [
        Diagnostic::warning("style.css", 0, 0, "first"),
        Diagnostic::warning("style.css", 4, 0, "second"),
    ];
    assert_eq!(
        reporter.render(&diagnostics),
        "style.css:1:1 - warning: first\nstyle.css:2:1 - warning: second"
    );
}
