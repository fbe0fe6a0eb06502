use anyhow::{Context, Result};
use kiln_common::Diagnostic;
use kiln_css_lowering::LowerOptions;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::args::{CliArgs, OutputFormat};
use super::config::{feature_names, find_config, load_config, resolve_options};
use crate::stylesheet::{LoweredStylesheet, lower_stylesheet};

/// Name used in diagnostics for a stylesheet read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// A stylesheet and the name it is reported under.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub source: String,
}

pub struct RunResult {
    pub options: LowerOptions,
    pub lowered: LoweredStylesheet,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    css: &'a str,
    warnings: &'a [Diagnostic],
}

/// Read the stylesheet named on the command line, or stdin.
pub fn read_input(file: Option<&Path>) -> Result<Input> {
    match file {
        Some(path) if path != Path::new("-") => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read stylesheet: {}", path.display()))?;
            Ok(Input {
                name: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stylesheet from stdin")?;
            Ok(Input {
                name: STDIN_NAME.to_string(),
                source,
            })
        }
    }
}

/// Resolve options for `args` and lower `input`.
pub fn run(args: &CliArgs, cwd: &Path, input: &Input) -> Result<RunResult> {
    let config = match find_config(args.config.as_deref(), cwd) {
        Some(path) => {
            debug!(config = %path.display(), "loading config");
            Some(load_config(&path)?)
        }
        None => None,
    };
    let options = resolve_options(args, config.as_ref())?;
    debug!(
        unsupported = ?feature_names(options.unsupported_css_features),
        minify_syntax = options.minify_syntax,
        minify_whitespace = options.minify_whitespace,
        "resolved options"
    );

    let lowered = lower_stylesheet(&input.name, &input.source, &options);
    Ok(RunResult { options, lowered })
}

/// Render the lowered stylesheet in the requested output format.
pub fn render_output(args: &CliArgs, lowered: &LoweredStylesheet) -> Result<String> {
    match args.format {
        OutputFormat::Text => Ok(lowered.css.clone()),
        OutputFormat::Json => {
            let output = JsonOutput {
                css: &lowered.css,
                warnings: &lowered.diagnostics,
            };
            let json = if args.pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            };
            json.context("failed to serialize output")
        }
    }
}
