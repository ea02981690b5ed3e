//! predeploy - Deployment precondition checks.
//!
//! predeploy runs a set of validators before a deployment and reports every
//! precondition that is not met, such as a platform release that needs a
//! search service the environment does not provide.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`oracle`] - Where validators get their facts: platform version and installed services
//! - [`ui`] - Terminal output
//! - [`validator`] - Validators, the registry, the pipeline and report formatters
//! - [`version`] - Semantic version parsing and ordering
//!
//! # Example
//!
//! ```
//! use predeploy::oracle::{StaticPresence, StaticVersion};
//! use predeploy::validator::{SearchBackendPresenceRule, ValidationResult, Validator};
//! use predeploy::version::SemanticVersion;
//!
//! let version: SemanticVersion = "2.4.4".parse().unwrap();
//! let rule = SearchBackendPresenceRule::new(
//!     Box::new(StaticVersion::new(version)),
//!     Box::new(StaticPresence::new("elasticsearch", false)),
//!     Box::new(StaticPresence::new("opensearch", true)),
//! );
//! assert_eq!(rule.validate().unwrap(), ValidationResult::Success);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod oracle;
pub mod ui;
pub mod validator;
pub mod version;

pub use error::{PredeployError, Result};
