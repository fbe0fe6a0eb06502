//! `kiln.json` loading and option resolution.
//!
//! ```json
//! {
//!   "target": ["chrome100", "safari15.4"],
//!   "supported": { "gradient-midpoints": false },
//!   "minify": false,
//!   "minifySyntax": true,
//!   "minifyWhitespace": false
//! }
//! ```
//!
//! Every field is optional. Command-line flags win over the file.

use anyhow::{Context, Result, bail};
use kiln_compat::{CssFeature, TargetError, parse_targets, unsupported_css_features};
use kiln_css_lowering::LowerOptions;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "kiln.json";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KilnConfig {
    #[serde(default)]
    pub target: Option<Vec<String>>,
    #[serde(default)]
    pub supported: Option<BTreeMap<String, bool>>,
    #[serde(default)]
    pub minify: Option<bool>,
    #[serde(default)]
    pub minify_syntax: Option<bool>,
    #[serde(default)]
    pub minify_whitespace: Option<bool>,
}

pub fn parse_config(source: &str) -> Result<KilnConfig> {
    serde_json::from_str(source).context("failed to parse kiln config JSON")
}

pub fn load_config(path: &Path) -> Result<KilnConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Find the config to use: `--config` if given, else `kiln.json` in `cwd`.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        });
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Merge the config file and the command line into lowering options.
pub fn resolve_options(args: &CliArgs, config: Option<&KilnConfig>) -> Result<LowerOptions> {
    let default_config = KilnConfig::default();
    let config = config.unwrap_or(&default_config);

    let targets = if !args.target.is_empty() {
        args.target.clone()
    } else {
        config.target.clone().unwrap_or_default()
    };
    let mut unsupported = CssFeature::empty();
    if !targets.is_empty() {
        let parsed = parse_targets(&targets.join(","))
            .with_context(|| format!("invalid target list: {}", targets.join(",")))?;
        unsupported = unsupported_css_features(&parsed);
    }

    // Config overrides first so the command line can undo them
    let mut overrides = Vec::new();
    if let Some(supported) = &config.supported {
        for (name, &is_supported) in supported {
            overrides.push((name.clone(), is_supported));
        }
    }
    for entry in &args.supported {
        overrides.push(parse_supported_flag(entry)?);
    }
    for (name, is_supported) in overrides {
        let Some(feature) = CssFeature::from_kebab_name(&name) else {
            return Err(TargetError::UnknownFeature(name).into());
        };
        let value = if is_supported {
            CssFeature::empty()
        } else {
            feature
        };
        unsupported = unsupported.apply_overrides(value, feature);
    }

    let minify = args.minify || config.minify.unwrap_or(false);
    Ok(LowerOptions {
        unsupported_css_features: unsupported,
        minify_syntax: minify || args.minify_syntax || config.minify_syntax.unwrap_or(false),
        minify_whitespace: minify
            || args.minify_whitespace
            || config.minify_whitespace.unwrap_or(false),
    })
}

/// Kebab-case names of every feature in `features`, for logging.
pub fn feature_names(features: CssFeature) -> Vec<&'static str> {
    features.iter().filter_map(CssFeature::name).collect()
}

/// Parse one `--supported name=bool` flag.
fn parse_supported_flag(entry: &str) -> Result<(String, bool)> {
    let Some((name, value)) = entry.split_once('=') else {
        bail!("expected NAME=BOOL for --supported, got \"{entry}\"");
    };
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        other => bail!("invalid boolean \"{other}\" for --supported {name}"),
    };
    Ok((name.trim().to_string(), value))
}
