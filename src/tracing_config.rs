//! Logging setup for the `kiln` binary.
//!
//! Nothing is installed unless `KILN_LOG` or `RUST_LOG` holds a filter, so
//! a plain `kiln style.css` run writes only the stylesheet and warnings.
//! `KILN_LOG_FORMAT` picks how events are written to stderr:
//!
//! ```bash
//! KILN_LOG=debug kiln style.css --target safari15
//! KILN_LOG=kiln_css_lowering=trace KILN_LOG_FORMAT=tree kiln style.css
//! KILN_LOG=debug KILN_LOG_FORMAT=json kiln style.css
//! ```

use std::io::IsTerminal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    /// Indented by target via `tracing-tree`.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Unknown names fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Where log output goes and what it keeps, as read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `RUST_LOG`-style directives. `None` disables logging.
    pub directives: Option<String>,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `KILN_LOG` wins over `RUST_LOG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let directives = lookup("KILN_LOG").or_else(|| lookup("RUST_LOG"));
        let format = lookup("KILN_LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        LogSettings { directives, format }
    }

    fn layer(&self, directives: &str) -> Box<dyn Layer<Registry> + Send + Sync> {
        let filter = EnvFilter::builder().parse_lossy(directives);
        match self.format {
            LogFormat::Text => Box::new(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_filter(filter),
            ),
            LogFormat::Tree => Box::new(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_filter(filter),
            ),
            LogFormat::Json => Box::new(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(filter),
            ),
        }
    }
}

/// Install the global subscriber described by `settings`.
///
/// Returns whether a subscriber was installed. A second call, or a process
/// that already has a subscriber, leaves the existing one in place.
pub fn init_tracing(settings: &LogSettings) -> bool {
    let Some(directives) = settings.directives.as_deref() else {
        return false;
    };
    Registry::default()
        .with(settings.layer(directives))
        .try_init()
        .is_ok()
}
