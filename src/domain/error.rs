//! Error types for snapshot loading.
//!
//! Rendering itself never fails; these errors only come from reading a
//! snapshot out of a file, stdin, or command-line overrides.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Failure while building a [`Snapshot`](super::Snapshot) from external input.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("Failed to read snapshot '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input was not valid JSON.
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not a key-value object.
    #[error("Snapshot must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A `key=value` override could not be split.
    #[error("Invalid snapshot entry '{0}': expected KEY=VALUE")]
    InvalidPair(String),
}

impl SnapshotError {
    /// Create an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an error for a JSON document that is not an object.
    #[must_use]
    pub const fn not_an_object(found: &'static str) -> Self {
        Self::NotAnObject { found }
    }

    /// Create an error for a malformed `key=value` entry.
    #[must_use]
    pub fn invalid_pair(entry: impl Into<String>) -> Self {
        Self::InvalidPair(entry.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
