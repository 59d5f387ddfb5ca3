use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{PreReleaseType, Version};
use crate::error::{Result, VersioningError};
use crate::strategy::{MinorBreakingStrategy, StrategyOptions};

/// Config file shared with release-please
pub const RELEASE_PLEASE_CONFIG_FILE: &str = "release-please-config.json";
/// Standalone config file
pub const VERSIONING_CONFIG_FILE: &str = "versioning.toml";

/// Represents the versioning configuration.
///
/// Keys are kebab-case and unknown keys are ignored, so a complete
/// `release-please-config.json` can be read as-is.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Identifier of the versioning strategy
    #[serde(default = "default_versioning")]
    pub versioning: String,

    #[serde(default)]
    pub force_major: bool,

    #[serde(default)]
    pub prerelease: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerelease_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<Version>,
}

/// Returns the strategy used when the config names none.
fn default_versioning() -> String {
    MinorBreakingStrategy::ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            versioning: default_versioning(),
            force_major: false,
            prerelease: false,
            prerelease_type: None,
            initial_version: None,
        }
    }
}

impl Config {
    /// Convert into the options handed to a strategy factory.
    ///
    /// Fails if `prerelease-type` is not a valid pre-release identifier.
    pub fn strategy_options(&self) -> Result<StrategyOptions> {
        let prerelease_type = match self.prerelease_type.as_deref() {
            Some(raw) => Some(PreReleaseType::parse(raw).map_err(|_| {
                VersioningError::config(format!("invalid prerelease-type '{}'", raw))
            })?),
            None => None,
        };

        Ok(StrategyOptions {
            force_major: self.force_major,
            prerelease: self.prerelease,
            prerelease_type,
            initial_version: self.initial_version.clone(),
        })
    }
}

/// Parse config contents; `.json` files as JSON, anything else as TOML.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(contents)
            .map_err(|e| VersioningError::config(format!("{}: {}", path.display(), e)))
    } else {
        toml::from_str(contents)
            .map_err(|e| VersioningError::config(format!("{}: {}", path.display(), e)))
    }
}

/// Locate the config file to use, if any.
///
/// Search order:
/// 1. `./release-please-config.json`
/// 2. `./versioning.toml`
/// 3. `<user config dir>/.versioning.toml`
pub fn find_config_file() -> Option<PathBuf> {
    let local = [RELEASE_PLEASE_CONFIG_FILE, VERSIONING_CONFIG_FILE]
        .into_iter()
        .map(PathBuf::from)
        .find(|p| p.exists());

    local.or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join(format!(".{}", VERSIONING_CONFIG_FILE)))
            .filter(|p| p.exists())
    })
}

/// Loads configuration from file or returns defaults.
///
/// An explicit path must exist; otherwise the first file found by
/// [`find_config_file`] is used, and defaults apply when there is none.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(found) => found,
            None => {
                tracing::debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(&path)?;
    parse_config(&contents, &path)
}
