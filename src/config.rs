//! Tool configuration module.
//!
//! Handles loading and validating an optional `manifest.toml` placed next to
//! the invocation (or pointed at with `--config`). All keys are optional;
//! the file only needs the values it wants to override.
//!
//! ```toml
//! # Where the character/category tree lives
//! assets_dir = "assets"
//!
//! # Where the JSON index is written
//! output = "assets_manifest.json"
//!
//! # Which file extensions count as images (case-insensitive match)
//! extensions = ["png", "jpg", "jpeg", "webp"]
//! ```
//!
//! CLI flags override file values, which override the built-in defaults.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `manifest.toml`.
///
/// All fields have defaults matching the conventional layout the manifest's
/// consumers expect: an `assets` directory indexed into
/// `assets_manifest.json`, filtering for the four supported image formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Root directory holding one subdirectory per character.
    pub assets_dir: PathBuf,
    /// Destination path for the JSON manifest.
    pub output: PathBuf,
    /// Accepted image extensions, matched case-insensitively against the
    /// end of each filename. Stored dotless and lowercase after validation.
    pub extensions: Vec<String>,
}

/// The stock extension filter: the formats layered-sprite consumers render.
pub fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            output: PathBuf::from("assets_manifest.json"),
            extensions: default_extensions(),
        }
    }
}

impl ManifestConfig {
    /// Normalize and validate the extension filter.
    ///
    /// Leading dots are stripped and values lowercased, so `".PNG"` and
    /// `"png"` configure the same filter. An empty filter would index
    /// nothing and is rejected.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        for ext in &mut self.extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
            if ext.is_empty() {
                return Err(ConfigError::Validation(
                    "extensions entries must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Load config from the given `manifest.toml` path.
///
/// A missing file yields the defaults; a present file is parsed with unknown
/// keys rejected, then validated.
pub fn load_config(path: &Path) -> Result<ManifestConfig, ConfigError> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        ManifestConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `manifest.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# sprite-manifest configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Root directory holding one subdirectory per character, each with one
# subdirectory per category (base, eyes, hair_front, ...).
assets_dir = "assets"

# Destination path for the generated JSON index.
output = "assets_manifest.json"

# File extensions indexed as images. Matching is case-insensitive and a
# leading dot is accepted ("png" and ".PNG" mean the same thing).
extensions = ["png", "jpg", "jpeg", "webp"]
"#
}
