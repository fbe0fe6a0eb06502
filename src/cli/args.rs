use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the kiln binary.
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Lower CSS gradients and colors for older browser targets"
)]
pub struct CliArgs {
    /// Stylesheet to process. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Browsers to support, e.g. `chrome100,safari15.4`.
    #[arg(short = 't', long, value_delimiter = ',')]
    pub target: Vec<String>,

    /// Force a CSS feature on or off, e.g. `gradient-midpoints=false`.
    #[arg(long = "supported", value_name = "NAME=BOOL")]
    pub supported: Vec<String>,

    /// Shorthand for `--minify-syntax --minify-whitespace`.
    #[arg(long)]
    pub minify: bool,

    /// Rewrite values into shorter equivalents.
    #[arg(long = "minify-syntax")]
    pub minify_syntax: bool,

    /// Drop optional whitespace inside rewritten values.
    #[arg(long = "minify-whitespace")]
    pub minify_whitespace: bool,

    /// Path to a kiln.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Write the stylesheet here instead of stdout.
    #[arg(short = 'o', long)]
    pub outfile: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
