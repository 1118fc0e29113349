use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for brand-release.
///
/// Covers where the version registry lives, which remote receives pushes,
/// the fixed release commit message, and the uat gate policy.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_registry_path")]
    pub registry_path: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default)]
    pub uat: UatConfig,
}

/// Returns the default path of the persisted brand-version file.
fn default_registry_path() -> String {
    "src/config/appVersion.json".to_string()
}

/// Returns the default remote name.
fn default_remote() -> String {
    "origin".to_string()
}

/// Returns the default release commit message.
fn default_commit_message() -> String {
    "chore: release new version".to_string()
}

/// Policy for the uat gate, where version numbers are authored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UatConfig {
    /// When true (the default), releasing uat without `--type` is an error.
    /// When false, a typeless uat run is tag-only: no bump, no commit.
    #[serde(default = "default_require_release_type")]
    pub require_release_type: bool,
}

fn default_require_release_type() -> bool {
    true
}

impl Default for UatConfig {
    fn default() -> Self {
        UatConfig {
            require_release_type: default_require_release_type(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            registry_path: default_registry_path(),
            remote: default_remote(),
            commit_message: default_commit_message(),
            uat: UatConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `brandrelease.toml` in current directory
/// 3. `~/.config/.brandrelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./brandrelease.toml").exists() {
        fs::read_to_string("./brandrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".brandrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
