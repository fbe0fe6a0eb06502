#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::io::Write;

use kiln::cli::args::{CliArgs, OutputFormat};
use kiln::cli::driver;
use kiln::cli::reporter::Reporter;
use kiln::tracing_config::LogSettings;

fn main() -> Result<()> {
    kiln::tracing_config::init_tracing(&LogSettings::from_env());

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let input = driver::read_input(args.file.as_deref())?;
    let result = driver::run(&args, &cwd, &input)?;

    // JSON output carries its warnings inline
    if args.format == OutputFormat::Text && !result.lowered.diagnostics.is_empty() {
        let mut reporter = Reporter::new(std::io::stderr().is_terminal());
        reporter.add_source(input.name.clone(), input.source.clone());
        eprintln!("{}", reporter.render(&result.lowered.diagnostics));
    }

    let output = driver::render_output(&args, &result.lowered)?;
    match &args.outfile {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write output")?;
            if args.format == OutputFormat::Json {
                writeln!(stdout).context("failed to write output")?;
            }
        }
    }

    Ok(())
}
