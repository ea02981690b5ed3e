//! Capability providers queried by validators.
//!
//! Validators never read the deployment environment directly. They are
//! handed oracles that answer narrow questions:
//!
//! - [`VersionOracle`] - is the platform at least a given version?
//! - [`ServicePresence`] - is a given service installed?
//!
//! An oracle that cannot answer returns a [`LookupError`]. That is distinct
//! from a negative answer: "the lock file is unreadable" is not the same as
//! "the service is absent".
//!
//! # Example
//!
//! ```
//! use predeploy::oracle::{ServicePresence, StaticPresence, StaticVersion, VersionOracle};
//! use predeploy::version::SemanticVersion;
//!
//! let version = StaticVersion::new(SemanticVersion::new(2, 4, 4));
//! assert!(version.is_at_least(&SemanticVersion::new(2, 4, 0)).unwrap());
//!
//! let search = StaticPresence::new("opensearch", true);
//! assert!(search.is_installed().unwrap());
//! ```

pub mod package;
pub mod relationships;

use std::path::PathBuf;

use thiserror::Error;

use crate::version::SemanticVersion;

pub use package::PackageVersionOracle;
pub use relationships::{RelationshipPresence, RelationshipsSource, ServiceRelationships};

/// An oracle could not answer its question.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The package is not listed in the lock file.
    #[error("Package '{package}' is not defined in {lock_file}")]
    UndefinedPackage { package: String, lock_file: PathBuf },

    /// Reading from the filesystem failed.
    #[error("Cannot read {path}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data was read but could not be decoded.
    #[error("Malformed {origin}: {message}")]
    Malformed { origin: String, message: String },
}

impl LookupError {
    /// Stable numeric code for diagnostics.
    pub fn code(&self) -> i32 {
        match self {
            LookupError::UndefinedPackage { .. } => 201,
            LookupError::FileSystem { .. } => 202,
            LookupError::Malformed { .. } => 203,
        }
    }

    pub(crate) fn malformed(origin: impl Into<String>, message: impl ToString) -> Self {
        LookupError::Malformed {
            origin: origin.into(),
            message: message.to_string(),
        }
    }
}

/// Answers questions about the platform version.
pub trait VersionOracle: Send + Sync {
    /// Whether the platform version is greater than or equal to `version`.
    fn is_at_least(&self, version: &SemanticVersion) -> Result<bool, LookupError>;
}

/// Answers whether one service is installed in the deployment environment.
pub trait ServicePresence: Send + Sync {
    /// Service name, for diagnostics.
    fn name(&self) -> &str;

    /// Whether the service is installed.
    fn is_installed(&self) -> Result<bool, LookupError>;
}

/// A version oracle with a fixed answer.
///
/// Used for `--platform-version` and in tests.
#[derive(Debug, Clone)]
pub struct StaticVersion {
    version: SemanticVersion,
}

impl StaticVersion {
    /// Create an oracle that always reports `version`.
    pub fn new(version: SemanticVersion) -> Self {
        Self { version }
    }
}

impl VersionOracle for StaticVersion {
    fn is_at_least(&self, version: &SemanticVersion) -> Result<bool, LookupError> {
        Ok(self.version.is_at_least(version))
    }
}

/// A presence oracle with a fixed answer.
#[derive(Debug, Clone)]
pub struct StaticPresence {
    name: String,
    installed: bool,
}

impl StaticPresence {
    /// Create an oracle that always reports `installed`.
    pub fn new(name: impl Into<String>, installed: bool) -> Self {
        Self {
            name: name.into(),
            installed,
        }
    }
}

impl ServicePresence for StaticPresence {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_installed(&self) -> Result<bool, LookupError> {
        Ok(self.installed)
    }
}
