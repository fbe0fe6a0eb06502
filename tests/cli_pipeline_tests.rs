//! Runs the `kiln` binary end to end on stylesheets in a temp directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const STYLESHEET: &str = "\
.hero {
  color: #ff0000;
  background: linear-gradient(to right in oklab, red, blue);
}

.badge:hover {
  background-image: radial-gradient(red 10% 30%, blue);
}
";

fn kiln(cwd: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kiln"))
        .args(args)
        .current_dir(cwd)
        .env_remove("KILN_LOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("kiln should start");
    {
        let mut pipe = child.stdin.take().expect("stdin should be piped");
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes()).expect("stdin write");
        }
    }
    child.wait_with_output().expect("kiln should finish")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "kiln failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf-8 output")
}

#[test]
fn modern_targets_leave_the_stylesheet_alone() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("in.css"), STYLESHEET).expect("write stylesheet");

    let output = kiln(dir.path(), &["in.css", "--target", "chrome120"], None);
    assert_eq!(stdout(&output), STYLESHEET);
}

#[test]
fn old_targets_lower_gradients_from_stdin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = kiln(dir.path(), &["--target", "safari12"], Some(STYLESHEET));
    let css = stdout(&output);

    assert!(!css.contains("in oklab"));
    assert!(css.contains(
        "background: linear-gradient(to right, #ff0000, #f12833, #e2384b 12.5%, #c6496d 25%, \
         #8c53a2, #5147d2 75%, #3036e8 87.5%, #1d26f4, #0000ff);"
    ));
    // Safari 12.0 predates double-position stops
    assert!(css.contains("background-image: radial-gradient(red 10%, red 30%, blue);"));
    // Declarations without gradients are copied as written
    assert!(css.contains("color: #ff0000;"));
}

#[test]
fn config_file_and_flags_combine() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("in.css"), STYLESHEET).expect("write stylesheet");
    std::fs::write(
        dir.path().join("kiln.json"),
        r#"{ "target": ["chrome120"], "supported": { "gradient-interpolation": false } }"#,
    )
    .expect("write config");

    let output = kiln(dir.path(), &["in.css", "--minify"], None);
    let css = stdout(&output);
    assert!(css.contains("background: linear-gradient(to right,red,#f12833,"));
    assert!(css.contains("background-image: radial-gradient(red 10% 30%,#00f);"));
}

#[test]
fn json_output_and_outfile() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = "a { background: linear-gradient(color(display-p3 0 1 0), lime) }";
    std::fs::write(dir.path().join("in.css"), source).expect("write stylesheet");

    let output = kiln(
        dir.path(),
        &["in.css", "-t", "firefox100", "--format", "json", "-o", "out.json"],
        None,
    );
    assert_eq!(stdout(&output), "");

    let json = std::fs::read_to_string(dir.path().join("out.json")).expect("output file");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["warnings"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["warnings"][0]["file"], "in.css");
    assert!(!value["css"].as_str().unwrap_or_default().contains("display-p3"));
}

#[test]
fn clipped_colors_are_reported_on_stderr() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = "a {\n  background: linear-gradient(color(display-p3 0 1 0), lime);\n}\n";
    std::fs::write(dir.path().join("in.css"), source).expect("write stylesheet");

    let output = kiln(dir.path(), &["in.css", "-t", "firefox100"], None);
    stdout(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("in.css:2:15 - warning: "), "{stderr}");
    assert!(stderr.contains("\"background\""));
}

#[test]
fn invalid_options_fail() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = kiln(dir.path(), &["--target", "mosaic1"], Some(""));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("mosaic1"));

    let output = kiln(dir.path(), &["missing.css"], None);
    assert!(!output.status.success());
}
