//! Browser engines, versions, and the CSS feature support table.

use crate::css_features::CssFeature;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Engine {
    Chrome,
    Edge,
    ES,
    Firefox,
    IE,
    IOS,
    Node,
    Opera,
    Safari,
}

impl Engine {
    pub fn from_name(name: &str) -> Option<Engine> {
        let engine = match name.to_ascii_lowercase().as_str() {
            "chrome" => Engine::Chrome,
            "edge" => Engine::Edge,
            "es" => Engine::ES,
            "firefox" => Engine::Firefox,
            "ie" => Engine::IE,
            "ios" | "ios_saf" => Engine::IOS,
            "node" => Engine::Node,
            "opera" => Engine::Opera,
            "safari" => Engine::Safari,
            _ => return None,
        };
        Some(engine)
    }

    /// Only browsers constrain CSS. `es2020` or `node18` targets do not.
    pub const fn is_browser(self) -> bool {
        !matches!(self, Engine::ES | Engine::Node)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Engine::Chrome => "chrome",
            Engine::Edge => "edge",
            Engine::ES => "es",
            Engine::Firefox => "firefox",
            Engine::IE => "ie",
            Engine::IOS => "ios",
            Engine::Node => "node",
            Engine::Opera => "opera",
            Engine::Safari => "safari",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Semver {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Semver {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Semver {
            major,
            minor,
            patch,
        }
    }

    /// Parse `"15"`, `"15.4"` or `"15.4.1"`.
    pub fn parse(text: &str) -> Option<Semver> {
        let mut parts = text.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Semver::new(major, minor, patch))
    }
}

impl fmt::Display for Semver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("empty target")]
    EmptyTarget,
    #[error("unknown target engine \"{0}\"")]
    UnknownEngine(String),
    #[error("invalid version in target \"{0}\"")]
    InvalidVersion(String),
    #[error("unknown CSS feature \"{0}\"")]
    UnknownFeature(String),
}

/// Parse a comma-separated target list such as `chrome100,safari15.4,es2020`.
///
/// When an engine appears more than once, the lowest version wins since the
/// output must work in all of them.
pub fn parse_targets(text: &str) -> Result<Vec<(Engine, Semver)>, TargetError> {
    let mut constraints: FxHashMap<Engine, Semver> = FxHashMap::default();
    for target in text.split(',').map(str::trim) {
        if target.is_empty() {
            return Err(TargetError::EmptyTarget);
        }
        let split = target
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| TargetError::InvalidVersion(target.to_string()))?;
        let (name, version) = target.split_at(split);
        let engine = Engine::from_name(name.trim_end_matches('-'))
            .ok_or_else(|| TargetError::UnknownEngine(name.to_string()))?;
        let version =
            Semver::parse(version).ok_or_else(|| TargetError::InvalidVersion(target.to_string()))?;
        constraints
            .entry(engine)
            .and_modify(|existing| *existing = (*existing).min(version))
            .or_insert(version);
    }

    let mut targets: Vec<(Engine, Semver)> = constraints.into_iter().collect();
    targets.sort();
    Ok(targets)
}

// =============================================================================
// Support table
// =============================================================================

/// First version of each engine that supports a feature. Engines missing
/// from a row never support it.
type SupportRow = (CssFeature, &'static [(Engine, Semver)]);

const CSS_TABLE: &[SupportRow] = &[
    (
        CssFeature::COLOR_FUNCTIONS,
        &[
            (Engine::Chrome, Semver::new(111, 0, 0)),
            (Engine::Edge, Semver::new(111, 0, 0)),
            (Engine::Firefox, Semver::new(113, 0, 0)),
            (Engine::IOS, Semver::new(15, 4, 0)),
            (Engine::Opera, Semver::new(97, 0, 0)),
            (Engine::Safari, Semver::new(15, 4, 0)),
        ],
    ),
    (
        CssFeature::GRADIENT_DOUBLE_POSITION,
        &[
            (Engine::Chrome, Semver::new(72, 0, 0)),
            (Engine::Edge, Semver::new(79, 0, 0)),
            (Engine::Firefox, Semver::new(83, 0, 0)),
            (Engine::IOS, Semver::new(12, 2, 0)),
            (Engine::Opera, Semver::new(60, 0, 0)),
            (Engine::Safari, Semver::new(12, 1, 0)),
        ],
    ),
    (
        CssFeature::GRADIENT_INTERPOLATION,
        &[
            (Engine::Chrome, Semver::new(111, 0, 0)),
            (Engine::Edge, Semver::new(111, 0, 0)),
            (Engine::IOS, Semver::new(16, 2, 0)),
            (Engine::Opera, Semver::new(97, 0, 0)),
            (Engine::Safari, Semver::new(16, 2, 0)),
        ],
    ),
    (
        CssFeature::GRADIENT_MIDPOINTS,
        &[
            (Engine::Chrome, Semver::new(40, 0, 0)),
            (Engine::Edge, Semver::new(79, 0, 0)),
            (Engine::Firefox, Semver::new(36, 0, 0)),
            (Engine::IOS, Semver::new(7, 0, 0)),
            (Engine::Opera, Semver::new(27, 0, 0)),
            (Engine::Safari, Semver::new(7, 0, 0)),
        ],
    ),
    (
        CssFeature::HEX_RGBA,
        &[
            (Engine::Chrome, Semver::new(62, 0, 0)),
            (Engine::Edge, Semver::new(79, 0, 0)),
            (Engine::Firefox, Semver::new(49, 0, 0)),
            (Engine::IOS, Semver::new(9, 3, 0)),
            (Engine::Opera, Semver::new(49, 0, 0)),
            (Engine::Safari, Semver::new(10, 0, 0)),
        ],
    ),
    (
        CssFeature::HWB,
        &[
            (Engine::Chrome, Semver::new(101, 0, 0)),
            (Engine::Edge, Semver::new(101, 0, 0)),
            (Engine::Firefox, Semver::new(96, 0, 0)),
            (Engine::IOS, Semver::new(15, 0, 0)),
            (Engine::Opera, Semver::new(87, 0, 0)),
            (Engine::Safari, Semver::new(15, 0, 0)),
        ],
    ),
];

/// Return all features that are not available in at least one target.
pub fn unsupported_css_features(targets: &[(Engine, Semver)]) -> CssFeature {
    let mut unsupported = CssFeature::empty();
    for &(feature, engines) in CSS_TABLE {
        for &(engine, version) in targets {
            if !engine.is_browser() {
                continue;
            }
            let supported = engines
                .iter()
                .any(|&(supported_engine, first)| supported_engine == engine && version >= first);
            if !supported {
                unsupported |= feature;
            }
        }
    }
    unsupported
}

#[cfg(test)]
#[path = "../tests/engines_tests.rs"]
mod tests;
