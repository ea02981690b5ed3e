//! Deployment precondition validation.
//!
//! This module provides a pluggable, rule-based validation system that runs
//! before a deployment.
//!
//! # Overview
//!
//! - **Validators** - Individual checks ([`Validator`] trait)
//! - **Registry** - Ordered collection of validators ([`ValidatorRegistry`])
//! - **Pipeline** - Runs every validator and aggregates a [`ValidationReport`]
//! - **Results** - [`ValidationResult`] with coded errors ([`ErrorCode`])
//!
//! A failed check is a [`ValidationResult::Error`]. A check that could not be
//! evaluated is a [`ValidatorError`], and stops the pipeline.
//!
//! # Example
//!
//! ```
//! use predeploy::oracle::{StaticPresence, StaticVersion};
//! use predeploy::validator::{
//!     ErrorCode, SearchBackendPresenceRule, ValidationPipeline, ValidationResult,
//!     ValidatorRegistry,
//! };
//! use predeploy::version::SemanticVersion;
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.register(Box::new(SearchBackendPresenceRule::new(
//!     Box::new(StaticVersion::new(SemanticVersion::new(2, 4, 0))),
//!     Box::new(StaticPresence::new("elasticsearch", false)),
//!     Box::new(StaticPresence::new("opensearch", false)),
//! )));
//!
//! let report = ValidationPipeline::new().run(&registry).unwrap();
//! assert_eq!(
//!     report.entries()[0].result,
//!     ValidationResult::Error(ErrorCode::EsServiceNotInstalled)
//! );
//! assert!(report.has_blocking_errors(false));
//! ```

pub mod error;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod result;
pub mod rule;
pub mod rules;

pub use error::ValidatorError;
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use pipeline::{ReportEntry, ValidationPipeline, ValidationReport};
pub use registry::ValidatorRegistry;
pub use result::{ErrorCode, ValidationResult};
pub use rule::{Level, Validator, ValidatorId};
pub use rules::SearchBackendPresenceRule;
