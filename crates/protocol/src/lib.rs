//! # pr-protocol
//!
//! Data models shared by the project registry and the UI that consumes it.
//!
//! This crate defines the shapes of:
//! - The persisted registry document (`data.json`)
//! - Project records and their creation-progress sub-records
//! - Typed partial updates ("patches") applied by the registry
//!
//! ## Modules
//!
//! - [`project_models`]: Persisted project records and registry state
//! - [`patch_models`]: Partial-update structures for records and progress

pub mod patch_models;
pub mod project_models;

// Re-export commonly used types for convenience
pub use patch_models::{NewProject, ProgressPatch, ProjectPatch};
pub use project_models::{
    CreateFailure, CreateProgress, FailureKind, ProjectItem, RegistryState, StepStatus,
};
