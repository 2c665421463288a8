use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::artifact::ArtifactCoordinates;
use crate::error::Result;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "ci-support.toml";

/// Represents the complete configuration for the CI support tools.
///
/// Every field has a default, so a missing or partial file reproduces the
/// behaviour the build pipeline expects.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub artifact: ArtifactConfig,

    #[serde(default)]
    pub tag: TagConfig,
}

fn default_base_url() -> String {
    "http://artifactory.deepsense.codilime.com:8081/artifactory".to_string()
}

fn default_snapshot_repository() -> String {
    "neptune-java-client-snapshot".to_string()
}

fn default_release_repository() -> String {
    "neptune-java-client-release".to_string()
}

fn default_group_path() -> String {
    "io/deepsense/neptune".to_string()
}

fn default_artifact_id() -> String {
    "neptune-client-library-uberjar".to_string()
}

fn default_version_file() -> String {
    "java-client-version.txt".to_string()
}

fn default_output_dir() -> String {
    "build".to_string()
}

fn default_output_file() -> String {
    "java-client-library.jar".to_string()
}

/// Where the Java client uberjar lives and where it is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_snapshot_repository")]
    pub snapshot_repository: String,

    #[serde(default = "default_release_repository")]
    pub release_repository: String,

    #[serde(default = "default_group_path")]
    pub group_path: String,

    #[serde(default = "default_artifact_id")]
    pub artifact_id: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        ArtifactConfig {
            base_url: default_base_url(),
            snapshot_repository: default_snapshot_repository(),
            release_repository: default_release_repository(),
            group_path: default_group_path(),
            artifact_id: default_artifact_id(),
            version_file: default_version_file(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
        }
    }
}

impl ArtifactConfig {
    /// Repository coordinates used to build the download URL.
    pub fn coordinates(&self) -> ArtifactCoordinates {
        ArtifactCoordinates {
            base_url: self.base_url.clone(),
            snapshot_repository: self.snapshot_repository.clone(),
            release_repository: self.release_repository.clone(),
            group_path: self.group_path.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }
}

fn default_fallback_env() -> String {
    "GERRIT_BRANCH".to_string()
}

fn default_suffix() -> String {
    "-latest".to_string()
}

fn default_tag() -> String {
    "latest".to_string()
}

fn default_image_name() -> String {
    "neptune-backend".to_string()
}

/// Settings for the branch tag resolver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    /// Environment variable consulted when no remote parent branch is found
    #[serde(default = "default_fallback_env")]
    pub fallback_env: String,

    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default = "default_tag")]
    pub default_tag: String,

    /// Only used in the diagnostic line
    #[serde(default = "default_image_name")]
    pub image_name: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            fallback_env: default_fallback_env(),
            suffix: default_suffix(),
            default_tag: default_tag(),
            image_name: default_image_name(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `ci-support.toml` in current directory
/// 3. `.ci-support.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
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
