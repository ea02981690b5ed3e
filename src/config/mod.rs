//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use predeploy::config::{load_merged_config, validate_config};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".predeploy");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "platform:\n  package: acme/platform\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate_config(&config).unwrap();
//! assert_eq!(config.platform.package, "acme/platform");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{PlatformConfig, PredeployConfig, ServicesConfig, Settings};
pub use validator::validate_config;
