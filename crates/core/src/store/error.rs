//! Error types for the project store.
//!
//! This module defines every error a registry operation can return, from
//! filesystem failures in the gateway to rejected activations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or mutating the registry.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create the directory holding the registry document.
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The registry document exists but could not be read.
    #[error("Failed to read registry file at {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The registry document is not valid JSON of the expected shape.
    #[error("Failed to parse registry file at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The in-memory state could not be serialized.
    #[error("Failed to serialize registry state: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to write the registry document.
    #[error("Failed to write registry file at {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No project is stored under the given key.
    #[error("project of key {key} not found")]
    ProjectNotFound { key: String },

    /// The project has a creation workflow that has not succeeded.
    #[error("project of key {key} is still creating")]
    StillCreating { key: String },

    /// The working directory needed to resolve a relative path is unavailable.
    #[error("Failed to resolve project path {path:?}: {source}")]
    PathResolve {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The home directory needed for the default store location is unknown.
    #[error("Could not determine the home directory for the default registry location")]
    HomeDirUnavailable,
}

impl StoreError {
    pub(crate) fn not_found(key: &str) -> Self {
        StoreError::ProjectNotFound {
            key: key.to_string(),
        }
    }
}

/// Type alias for Result with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
