//! Platform version from a package lock file.
//!
//! The lock file is JSON with `packages` and `packages-dev` arrays of
//! `{"name": ..., "version": ...}` objects. Other fields are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use super::{LookupError, VersionOracle};
use crate::version::SemanticVersion;

#[derive(Debug, Deserialize)]
struct LockFile {
    #[serde(default)]
    packages: Vec<LockedPackage>,
    #[serde(default, rename = "packages-dev")]
    packages_dev: Vec<LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    name: String,
    version: String,
}

/// Reads the platform version of one package from a lock file.
///
/// The version is read on first use and remembered; a failed read is not
/// remembered, so the next query tries again.
#[derive(Debug)]
pub struct PackageVersionOracle {
    lock_file: PathBuf,
    package: String,
    resolved: OnceLock<SemanticVersion>,
}

impl PackageVersionOracle {
    /// Create an oracle for `package` in `lock_file`.
    pub fn new(lock_file: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        Self {
            lock_file: lock_file.into(),
            package: package.into(),
            resolved: OnceLock::new(),
        }
    }

    /// Path of the lock file.
    pub fn lock_file(&self) -> &Path {
        &self.lock_file
    }

    /// Name of the package whose version is the platform version.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The platform version.
    pub fn version(&self) -> Result<SemanticVersion, LookupError> {
        if let Some(version) = self.resolved.get() {
            return Ok(version.clone());
        }

        let version = self.read_version()?;
        tracing::debug!(
            "Resolved {} {} from {}",
            self.package,
            version,
            self.lock_file.display()
        );
        Ok(self.resolved.get_or_init(|| version).clone())
    }

    fn read_version(&self) -> Result<SemanticVersion, LookupError> {
        let content =
            fs::read_to_string(&self.lock_file).map_err(|source| LookupError::FileSystem {
                path: self.lock_file.clone(),
                source,
            })?;

        let lock: LockFile = serde_json::from_str(&content)
            .map_err(|e| LookupError::malformed(self.origin(), e))?;

        let raw = lock
            .packages
            .iter()
            .chain(lock.packages_dev.iter())
            .find(|p| p.name == self.package)
            .map(|p| p.version.as_str())
            .ok_or_else(|| LookupError::UndefinedPackage {
                package: self.package.clone(),
                lock_file: self.lock_file.clone(),
            })?;

        raw.parse()
            .map_err(|e| LookupError::malformed(self.origin(), e))
    }

    fn origin(&self) -> String {
        format!("lock file {}", self.lock_file.display())
    }
}

impl VersionOracle for PackageVersionOracle {
    fn is_at_least(&self, version: &SemanticVersion) -> Result<bool, LookupError> {
        Ok(self.version()?.is_at_least(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_lock(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("composer.lock");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn reads_version_from_packages() {
        let (_temp, path) = write_lock(
            r#"{"packages": [
                {"name": "vendor/other", "version": "1.0.0"},
                {"name": "platform/core", "version": "2.4.3-p1"}
            ]}"#,
        );
        let oracle = PackageVersionOracle::new(&path, "platform/core");

        assert_eq!(oracle.version().unwrap().to_string(), "2.4.3-p1");
        assert!(oracle.is_at_least(&SemanticVersion::new(2, 4, 0)).unwrap());
        assert!(!oracle.is_at_least(&SemanticVersion::new(2, 4, 4)).unwrap());
    }

    #[test]
    fn falls_back_to_dev_packages() {
        let (_temp, path) = write_lock(
            r#"{"packages": [], "packages-dev": [{"name": "platform/core", "version": "v2.4.5"}]}"#,
        );
        let oracle = PackageVersionOracle::new(&path, "platform/core");

        assert_eq!(oracle.version().unwrap(), SemanticVersion::new(2, 4, 5));
    }

    #[test]
    fn ignores_unknown_fields() {
        let (_temp, path) = write_lock(
            r#"{"content-hash": "abc", "packages": [
                {"name": "platform/core", "version": "2.4.4", "type": "library", "require": {}}
            ]}"#,
        );
        let oracle = PackageVersionOracle::new(&path, "platform/core");

        assert_eq!(oracle.version().unwrap(), SemanticVersion::new(2, 4, 4));
    }

    #[test]
    fn missing_file_is_file_system_error() {
        let temp = TempDir::new().unwrap();
        let oracle = PackageVersionOracle::new(temp.path().join("composer.lock"), "platform/core");

        let err = oracle.version().unwrap_err();
        assert!(matches!(err, LookupError::FileSystem { .. }));
        assert_eq!(err.code(), 202);
    }

    #[test]
    fn missing_package_is_undefined_package_error() {
        let (_temp, path) =
            write_lock(r#"{"packages": [{"name": "vendor/other", "version": "1.0.0"}]}"#);
        let oracle = PackageVersionOracle::new(&path, "platform/core");

        let err = oracle
            .is_at_least(&SemanticVersion::new(2, 4, 0))
            .unwrap_err();
        assert!(matches!(err, LookupError::UndefinedPackage { .. }));
        assert!(err.to_string().contains("platform/core"));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let (_temp, path) = write_lock("{not json");
        let oracle = PackageVersionOracle::new(&path, "platform/core");

        assert!(matches!(
            oracle.version().unwrap_err(),
            LookupError::Malformed { .. }
        ));
    }

    #[test]
    fn unparseable_version_is_malformed() {
        let (_temp, path) =
            write_lock(r#"{"packages": [{"name": "platform/core", "version": "dev-main"}]}"#);
        let oracle = PackageVersionOracle::new(&path, "platform/core");

        let err = oracle.version().unwrap_err();
        assert!(matches!(err, LookupError::Malformed { .. }));
        assert!(err.to_string().contains("dev-main"));
    }

    #[test]
    fn version_is_remembered_after_first_read() {
        let (_temp, path) =
            write_lock(r#"{"packages": [{"name": "platform/core", "version": "2.4.0"}]}"#);
        let oracle = PackageVersionOracle::new(&path, "platform/core");

        assert_eq!(oracle.version().unwrap(), SemanticVersion::new(2, 4, 0));
        fs::remove_file(&path).unwrap();
        assert_eq!(oracle.version().unwrap(), SemanticVersion::new(2, 4, 0));
    }

    #[test]
    fn accessors_return_configuration() {
        let oracle = PackageVersionOracle::new("/app/composer.lock", "platform/core");
        assert_eq!(oracle.lock_file(), Path::new("/app/composer.lock"));
        assert_eq!(oracle.package(), "platform/core");
    }
}
