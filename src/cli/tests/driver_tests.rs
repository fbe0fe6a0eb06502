use clap::Parser;
use kiln_compat::CssFeature;

use super::args::CliArgs;
use super::driver::{Input, read_input, render_output, run};

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["kiln"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("args should parse")
}

fn input(source: &str) -> Input {
    Input {
        name: "style.css".to_string(),
        source: source.to_string(),
    }
}

#[test]
fn run_uses_config_from_working_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("kiln.json"),
        r#"{ "target": ["safari15"], "minify": true }"#,
    )
    .expect("write config");

    let result = run(
        &args(&[]),
        dir.path(),
        &input("a { background: linear-gradient(in srgb, #ff0000, #0000ff) }"),
    )
    .expect("run should succeed");

    assert!(result.options.unsupports(CssFeature::GRADIENT_INTERPOLATION));
    assert_eq!(
        result.lowered.css,
        "a { background: linear-gradient(red,#00f) }"
    );
}

#[test]
fn run_reports_missing_explicit_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = run(
        &args(&["--config", "nope.json"]),
        dir.path(),
        &input("a { color: red }"),
    );
    assert!(result.is_err());
}

#[test]
fn render_text_is_the_stylesheet() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cli = args(&[]);
    let result = run(&cli, dir.path(), &input("a { color: red }")).unwrap();
    assert_eq!(render_output(&cli, &result.lowered).unwrap(), "a { color: red }");
}

#[test]
fn render_json_includes_warnings() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cli = args(&["--target", "chrome100", "--format", "json"]);
    let source = "a { background: linear-gradient(color(display-p3 0 1 0), lime) }";
    let result = run(&cli, dir.path(), &input(source)).unwrap();
    let json = render_output(&cli, &result.lowered).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert!(value["css"].as_str().is_some_and(|css| css.starts_with("a { background: ")));
    let warnings = value["warnings"].as_array().expect("warnings array");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["category"], "warning");
    assert_eq!(warnings[0]["file"], "style.css");
    assert_eq!(warnings[0]["start"], 16);
    assert!(!json.contains('\n'));
}

#[test]
fn render_pretty_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cli = args(&["--format", "json", "--pretty"]);
    let result = run(&cli, dir.path(), &input("a { color: red }")).unwrap();
    let json = render_output(&cli, &result.lowered).unwrap();
    assert_eq!(
        json,
        "{\n  \"css\": \"a { color: red }\",\n  \"warnings\": []\n}"
    );
}

#[test]
fn read_input_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("style.css");
    std::fs::write(&path, "a { color: red }").expect("write stylesheet");

    let input = read_input(Some(&path)).expect("input should be read");
    assert_eq!(input.source, "a { color: red }");
    assert_eq!(input.name, path.display().to_string());

    assert!(read_input(Some(&dir.path().join("missing.css"))).is_err());
}
