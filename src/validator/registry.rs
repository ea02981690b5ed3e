//! Validator registry.
//!
//! The [`ValidatorRegistry`] stores validators in registration order, which
//! is the order the pipeline runs them in.

use std::path::Path;

use super::rule::{Validator, ValidatorId};
use super::rules::SearchBackendPresenceRule;
use crate::config::PredeployConfig;
use crate::version::SemanticVersion;

/// Ordered collection of validators.
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create a registry with all built-in validators.
    ///
    /// Oracles are wired from `config`, with paths relative to
    /// `project_root`. `platform_version` overrides the lock file lookup.
    pub fn with_builtins(
        config: &PredeployConfig,
        project_root: &Path,
        platform_version: Option<SemanticVersion>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SearchBackendPresenceRule::from_config(
            config,
            project_root,
            platform_version,
        )));
        registry
    }

    /// Register a validator. A validator with the same ID is replaced in place.
    pub fn register(&mut self, validator: Box<dyn Validator>) {
        let id = validator.id();
        match self.validators.iter().position(|v| v.id() == id) {
            Some(idx) => self.validators[idx] = validator,
            None => self.validators.push(validator),
        }
    }

    /// Get a validator by ID.
    pub fn get(&self, id: &ValidatorId) -> Option<&dyn Validator> {
        self.validators
            .iter()
            .find(|v| &v.id() == id)
            .map(|v| v.as_ref())
    }

    /// Iterate over validators in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Validator> {
        self.validators.iter().map(|v| v.as_ref())
    }

    /// Get the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{Level, ValidationResult, ValidatorError};

    struct MockValidator {
        id: ValidatorId,
        name: &'static str,
    }

    impl Validator for MockValidator {
        fn id(&self) -> ValidatorId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "A mock validator for testing"
        }
        fn level(&self) -> Level {
            Level::Warning
        }
        fn validate(&self) -> Result<ValidationResult, ValidatorError> {
            Ok(ValidationResult::Success)
        }
    }

    fn mock(id: &str, name: &'static str) -> Box<dyn Validator> {
        Box::new(MockValidator {
            id: ValidatorId::new(id),
            name,
        })
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = ValidatorRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = ValidatorRegistry::new();
        registry.register(mock("mock", "Mock"));

        assert!(!registry.is_empty());
        assert!(registry.get(&ValidatorId::new("mock")).is_some());
        assert!(registry.get(&ValidatorId::new("unknown")).is_none());
    }

    #[test]
    fn registry_keeps_registration_order() {
        let mut registry = ValidatorRegistry::new();
        registry.register(mock("b", "B"));
        registry.register(mock("a", "A"));
        registry.register(mock("c", "C"));

        let ids: Vec<String> = registry.iter().map(|v| v.id().0).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn registry_replaces_same_id_in_place() {
        let mut registry = ValidatorRegistry::new();
        registry.register(mock("a", "First"));
        registry.register(mock("b", "B"));
        registry.register(mock("a", "Second"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().next().unwrap().name(), "Second");
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = ValidatorRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_with_builtins_has_search_backend_rule() {
        let config = PredeployConfig::default();
        let registry = ValidatorRegistry::with_builtins(&config, Path::new("/nonexistent"), None);

        assert_eq!(registry.len(), 1);
        assert!(registry
            .get(&ValidatorId::new("search-backend-presence"))
            .is_some());
    }
}
