//! Service presence from deployment relationships.
//!
//! A deployment environment describes the services attached to the
//! application as *relationships*: a JSON object mapping a relationship name
//! to a list of endpoints.
//!
//! ```json
//! {"opensearch": [{"host": "os.internal", "port": 9200, "scheme": "http"}]}
//! ```
//!
//! The object is read from an environment variable (base64 encoded, or plain
//! JSON) or, when the variable is unset, from a JSON file. With neither, no
//! services are installed.

use std::collections::HashMap;
use std::env::VarError;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use base64::Engine;
use serde::Deserialize;

use super::{LookupError, ServicePresence};

/// Relationship name to endpoint list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ServiceRelationships {
    services: HashMap<String, Vec<serde_json::Value>>,
}

impl ServiceRelationships {
    /// Parse a relationships JSON object.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Whether `name` is attached with at least one endpoint.
    pub fn contains(&self, name: &str) -> bool {
        self.services.get(name).is_some_and(|e| !e.is_empty())
    }

    /// Relationship names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.services.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Where relationships come from. Loaded at most once.
#[derive(Debug)]
pub struct RelationshipsSource {
    env_var: Option<String>,
    env_value: Option<String>,
    file: Option<PathBuf>,
    loaded: OnceLock<ServiceRelationships>,
}

impl RelationshipsSource {
    /// Create a source reading the process environment.
    pub fn new(env_var: Option<String>, file: Option<PathBuf>) -> Self {
        Self::with_env(env_var, file, |key: &str| std::env::var(key))
    }

    /// Create a source with a custom env var lookup function.
    pub fn with_env<F>(env_var: Option<String>, file: Option<PathBuf>, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let env_value = env_var
            .as_deref()
            .and_then(|var| env_fn(var).ok())
            .filter(|value| !value.trim().is_empty());

        Self {
            env_var,
            env_value,
            file,
            loaded: OnceLock::new(),
        }
    }

    /// Load the relationships.
    pub fn relationships(&self) -> Result<&ServiceRelationships, LookupError> {
        if let Some(loaded) = self.loaded.get() {
            return Ok(loaded);
        }

        let relationships = self.load()?;
        tracing::debug!("Relationships: {:?}", relationships.names());
        Ok(self.loaded.get_or_init(|| relationships))
    }

    fn load(&self) -> Result<ServiceRelationships, LookupError> {
        if let (Some(var), Some(value)) = (&self.env_var, &self.env_value) {
            return decode_env_value(var, value);
        }

        if let Some(path) = &self.file {
            let content = fs::read_to_string(path).map_err(|source| LookupError::FileSystem {
                path: path.clone(),
                source,
            })?;
            return ServiceRelationships::from_json(&content).map_err(|e| {
                LookupError::malformed(format!("relationships file {}", path.display()), e)
            });
        }

        Ok(ServiceRelationships::default())
    }
}

fn decode_env_value(var: &str, value: &str) -> Result<ServiceRelationships, LookupError> {
    let origin = || format!("relationships in ${}", var);
    let value = value.trim();

    let json = if value.starts_with('{') {
        value.to_string()
    } else {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(value)
            .map_err(|e| LookupError::malformed(origin(), e))?;
        String::from_utf8(bytes).map_err(|e| LookupError::malformed(origin(), e))?
    };

    ServiceRelationships::from_json(&json).map_err(|e| LookupError::malformed(origin(), e))
}

/// Reports whether one relationship is attached.
#[derive(Debug, Clone)]
pub struct RelationshipPresence {
    relationship: String,
    source: Arc<RelationshipsSource>,
}

impl RelationshipPresence {
    /// Create a presence oracle for `relationship`.
    pub fn new(relationship: impl Into<String>, source: Arc<RelationshipsSource>) -> Self {
        Self {
            relationship: relationship.into(),
            source,
        }
    }
}

impl ServicePresence for RelationshipPresence {
    fn name(&self) -> &str {
        &self.relationship
    }

    fn is_installed(&self) -> Result<bool, LookupError> {
        Ok(self.source.relationships()?.contains(&self.relationship))
    }
}
