//! Configuration schema definitions.
//!
//! This module contains the structs that map to the YAML configuration
//! file format. Every field has a default, so an empty file (or no file at
//! all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::validator::OutputFormat;

/// Root configuration structure for `.predeploy/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredeployConfig {
    /// Where the platform version comes from
    pub platform: PlatformConfig,

    /// How installed services are discovered
    pub services: ServicesConfig,

    /// Global settings
    pub settings: Settings,
}

/// Platform version source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Package lock file (relative to project root)
    pub lock_file: PathBuf,

    /// Package whose locked version is the platform version
    pub package: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            lock_file: PathBuf::from("composer.lock"),
            package: "platform/core".to_string(),
        }
    }
}

/// Service discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Environment variable holding the relationships JSON (base64 or plain).
    /// An empty string disables the lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships_env: Option<String>,

    /// Relationships JSON file, used when the environment variable is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships_file: Option<PathBuf>,

    /// Relationship name of the legacy search service
    pub legacy: String,

    /// Relationship name of the successor search service
    pub successor: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            relationships_env: Some("PLATFORM_RELATIONSHIPS".to_string()),
            relationships_file: None,
            legacy: "elasticsearch".to_string(),
            successor: "opensearch".to_string(),
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Report format when `--format` is not given: human, json
    pub default_format: OutputFormat,
}
