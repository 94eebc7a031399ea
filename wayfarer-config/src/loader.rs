//! Where motion settings come from.
//!
//! Overrides are looked up along one chain, first hit wins:
//! `$WAYFARER_MOTION_CONFIG_PATH`, `$WAYFARER_MOTION_CONFIG_JSON`, then the
//! well-known files in the working directory. With nothing found the
//! built-in defaults apply.

use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};

use crate::constants::env as lookup;
use crate::models::MotionConfig;

/// Source that produced the motion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MotionConfigSource {
    /// No override found; built-in defaults.
    #[default]
    Default,
    /// File named by `$WAYFARER_MOTION_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `$WAYFARER_MOTION_CONFIG_JSON`.
    EnvInline,
    /// One of the well-known files in the working directory.
    File(PathBuf),
}

/// Document format, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    /// Unknown extension: TOML first, then JSON.
    Sniff,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml" | "tml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Sniff,
        }
    }
}

/// An override located on the lookup chain, not read yet.
#[derive(Debug)]
enum Located {
    Path(PathBuf),
    Inline(String),
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Walk the lookup chain. `None` means defaults.
fn locate() -> Option<(MotionConfigSource, Located)> {
    if let Some(path) = non_blank_var(lookup::CONFIG_PATH_VAR) {
        let path = PathBuf::from(path);
        return Some((
            MotionConfigSource::EnvPath(path.clone()),
            Located::Path(path),
        ));
    }
    if let Some(raw) = non_blank_var(lookup::CONFIG_JSON_VAR) {
        return Some((MotionConfigSource::EnvInline, Located::Inline(raw)));
    }
    lookup::DEFAULT_FILES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
        .map(|path| (MotionConfigSource::File(path.clone()), Located::Path(path)))
}

impl MotionConfig {
    /// Resolve the lookup chain and validate the result.
    pub fn load_from_env() -> anyhow::Result<(Self, MotionConfigSource)> {
        let (config, source) = match locate() {
            None => (Self::default(), MotionConfigSource::Default),
            Some((source, Located::Path(path))) => {
                (Self::load_from_file(&path)?, source)
            }
            Some((source, Located::Inline(raw))) => {
                let origin = format!("${}", lookup::CONFIG_JSON_VAR);
                (Self::parse(&raw, Format::Json, &origin)?, source)
            }
        };
        config.validate().with_context(|| {
            format!("motion config from {source:?} failed validation")
        })?;
        log::debug!("motion config loaded from {source:?}");
        Ok((config, source))
    }

    /// Read one file; `.toml`/`.tml` and `.json` are parsed as such, any
    /// other extension is sniffed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read motion config from {}", path.display())
        })?;
        Self::parse(&contents, Format::of(path), &path.display().to_string())
    }

    /// Parse a document of unknown format. `origin` names it in errors.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        Self::parse(contents, Format::Sniff, origin)
    }

    /// Parse a JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        Self::parse(raw, Format::Json, "json")
    }

    /// Serialize as TOML, e.g. to seed a `motion.toml` for tuning.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to render motion config")
    }

    fn parse(contents: &str, format: Format, origin: &str) -> anyhow::Result<Self> {
        match format {
            Format::Toml => toml::from_str(contents)
                .with_context(|| format!("invalid motion config {origin}")),
            Format::Json => serde_json::from_str(contents)
                .with_context(|| format!("invalid motion config {origin}")),
            Format::Sniff => toml::from_str(contents).or_else(|toml_err| {
                serde_json::from_str(contents).map_err(|json_err| {
                    anyhow!(
                        "failed to parse motion config {origin}: \
                         toml error: {toml_err}; json error: {json_err}"
                    )
                })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::of(Path::new("motion.toml")), Format::Toml);
        assert_eq!(Format::of(Path::new("a/b.tml")), Format::Toml);
        assert_eq!(Format::of(Path::new("motion.json")), Format::Json);
        assert_eq!(Format::of(Path::new("motion")), Format::Sniff);
        assert_eq!(Format::of(Path::new("motion.conf")), Format::Sniff);
    }

    #[test]
    fn typed_format_does_not_fall_back() {
        let json = r#"{ "carousel": { "tick_period_ms": 4000 } }"#;
        assert!(MotionConfig::parse(json, Format::Toml, "x").is_err());
        let parsed = MotionConfig::parse(json, Format::Sniff, "x").expect("sniffed");
        assert_eq!(parsed.carousel.tick_period_ms, 4000);
    }
}
