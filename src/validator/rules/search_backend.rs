//! Search service presence.
//!
//! From platform 2.4.0 a search service is mandatory. 2.4.0 through 2.4.3
//! need the legacy Elasticsearch service; 2.4.4 and later also accept its
//! OpenSearch successor.

use std::path::Path;
use std::sync::Arc;

use crate::config::PredeployConfig;
use crate::oracle::{
    PackageVersionOracle, RelationshipPresence, RelationshipsSource, ServicePresence,
    StaticVersion, VersionOracle,
};
use crate::validator::{ErrorCode, ValidationResult, Validator, ValidatorError, ValidatorId};
use crate::version::SemanticVersion;

/// First platform version that accepts the successor service.
pub const SUCCESSOR_MIN_VERSION: SemanticVersion = SemanticVersion::new(2, 4, 4);

/// First platform version that requires a search service.
pub const LEGACY_MIN_VERSION: SemanticVersion = SemanticVersion::new(2, 4, 0);

/// Verifies a suitable search service is installed for the platform version.
pub struct SearchBackendPresenceRule {
    version: Box<dyn VersionOracle>,
    legacy: Box<dyn ServicePresence>,
    successor: Box<dyn ServicePresence>,
}

impl SearchBackendPresenceRule {
    /// Create the rule from its oracles.
    pub fn new(
        version: Box<dyn VersionOracle>,
        legacy: Box<dyn ServicePresence>,
        successor: Box<dyn ServicePresence>,
    ) -> Self {
        Self {
            version,
            legacy,
            successor,
        }
    }

    /// Build the rule with oracles described by `config`.
    ///
    /// Relative paths resolve against `project_root`. A `platform_version`
    /// replaces the lock file lookup.
    pub fn from_config(
        config: &PredeployConfig,
        project_root: &Path,
        platform_version: Option<SemanticVersion>,
    ) -> Self {
        let version: Box<dyn VersionOracle> = match platform_version {
            Some(v) => Box::new(StaticVersion::new(v)),
            None => Box::new(PackageVersionOracle::new(
                project_root.join(&config.platform.lock_file),
                config.platform.package.clone(),
            )),
        };

        let source = Arc::new(RelationshipsSource::new(
            config
                .services
                .relationships_env
                .clone()
                .filter(|name| !name.is_empty()),
            config
                .services
                .relationships_file
                .as_ref()
                .map(|p| project_root.join(p)),
        ));

        Self::new(
            version,
            Box::new(RelationshipPresence::new(
                config.services.legacy.clone(),
                Arc::clone(&source),
            )),
            Box::new(RelationshipPresence::new(
                config.services.successor.clone(),
                source,
            )),
        )
    }

    fn evaluate(&self) -> Result<ValidationResult, ValidatorError> {
        if self.version.is_at_least(&SUCCESSOR_MIN_VERSION)? && self.successor.is_installed()? {
            tracing::debug!("{} is installed", self.successor.name());
            return Ok(ValidationResult::Success);
        }

        if self.version.is_at_least(&LEGACY_MIN_VERSION)? && !self.legacy.is_installed()? {
            tracing::debug!("{} is not installed", self.legacy.name());
            return Ok(ValidationResult::Error(ErrorCode::EsServiceNotInstalled));
        }

        Ok(ValidationResult::Success)
    }
}

impl Validator for SearchBackendPresenceRule {
    fn id(&self) -> ValidatorId {
        ValidatorId::new("search-backend-presence")
    }

    fn name(&self) -> &str {
        "Search Backend Presence"
    }

    fn description(&self) -> &str {
        "Verifies a search service is installed for platform 2.4.0 and later"
    }

    fn validate(&self) -> Result<ValidationResult, ValidatorError> {
        self.evaluate().map_err(|e| e.with_validator(self.id()))
    }
}
