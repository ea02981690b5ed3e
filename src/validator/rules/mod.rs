//! Built-in validators.

pub mod search_backend;

pub use search_backend::{SearchBackendPresenceRule, LEGACY_MIN_VERSION, SUCCESSOR_MIN_VERSION};
