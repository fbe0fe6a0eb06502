use clap::Parser;

use super::args::{CliArgs, OutputFormat};

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["kiln"]).expect("default args should parse");

    assert!(args.file.is_none());
    assert!(args.target.is_empty());
    assert!(args.supported.is_empty());
    assert!(!args.minify);
    assert!(!args.minify_syntax);
    assert!(!args.minify_whitespace);
    assert!(args.config.is_none());
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.pretty);
    assert!(args.outfile.is_none());
}

#[test]
fn parses_common_flags() {
    let args = CliArgs::try_parse_from([
        "kiln",
        "--target",
        "chrome100,safari15.4",
        "--supported",
        "hex-rgba=true",
        "--supported",
        "gradient-midpoints=false",
        "--minify-syntax",
        "--config",
        "configs/kiln.json",
        "--format",
        "json",
        "--pretty",
        "-o",
        "out.css",
        "style.css",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.target, vec!["chrome100", "safari15.4"]);
    assert_eq!(args.supported, vec!["hex-rgba=true", "gradient-midpoints=false"]);
    assert!(args.minify_syntax);
    assert!(!args.minify_whitespace);
    assert_eq!(
        args.config.as_deref(),
        Some(std::path::Path::new("configs/kiln.json"))
    );
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.pretty);
    assert_eq!(args.outfile.as_deref(), Some(std::path::Path::new("out.css")));
    assert_eq!(args.file.as_deref(), Some(std::path::Path::new("style.css")));
}

#[test]
fn repeated_targets_accumulate() {
    let args = CliArgs::try_parse_from(["kiln", "-t", "chrome100", "-t", "firefox90"])
        .expect("repeated targets should parse");
    assert_eq!(args.target, vec!["chrome100", "firefox90"]);
}

#[test]
fn rejects_unknown_format() {
    assert!(CliArgs::try_parse_from(["kiln", "--format", "yaml"]).is_err());
}
