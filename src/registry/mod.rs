//! Module registry for vanity import resolution
//!
//! The registry is the read-only mapping from module name to repository URL.
//! It is loaded once at startup from a JSON artifact and never mutated, so
//! concurrent lookups need no locking.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Registry loading errors
///
/// All variants are fatal at startup: the server refuses to serve with a
/// missing or malformed registry artifact.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Registry artifact is missing or unreadable
    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Registry artifact is not a string-to-string JSON object
    #[error("failed to parse registry file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Result type for registry loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read-only mapping from module name to repository URL
///
/// Module names are matched verbatim: no prefix matching, no subpath
/// stripping, no case folding. If the artifact repeats a key, the last
/// occurrence wins (JSON object deserialization inserts sequentially).
#[derive(Debug, Clone, Default)]
pub struct Registry {
    modules: HashMap<String, String>,
}

impl Registry {
    /// Load the registry from a JSON artifact
    ///
    /// The artifact is a flat JSON object mapping module names to repository
    /// URLs, e.g. `{"widget": "https://example.com/widget.git"}`. Keys and
    /// values are taken verbatim; URLs are not validated.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let modules: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        debug!("loaded {} module mappings from {}", modules.len(), path.display());
        Ok(Self { modules })
    }

    /// Build a registry from an in-memory mapping
    ///
    /// Used for wiring and tests; the handler takes the registry by
    /// reference, so tests never need a live transport or an on-disk
    /// artifact.
    pub fn from_entries(modules: HashMap<String, String>) -> Self {
        Self { modules }
    }

    /// Look up the repository URL for a module name
    ///
    /// Pure, no side effects, O(1) expected.
    pub fn lookup(&self, module: &str) -> Option<&str> {
        self.modules.get(module).map(String::as_str)
    }

    /// Number of configured module mappings
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the registry has no mappings
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
