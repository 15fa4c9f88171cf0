//! # pr-core
//!
//! Persistent keyed store of known projects for local developer tooling.
//!
//! This crate provides:
//! - Loading and saving the registry document (`~/.umi/ui/data.json` by default)
//! - Content-derived project keys
//! - Insert-if-absent, partial edits and creation-progress tracking
//! - Guarded activation of the "current" project
//!
//! ## Modules
//!
//! - [`config`]: Store options and the default backing path
//! - [`store`]: Persistence gateway, save observers, error types
//! - [`registry`]: Project registry operations

pub mod config;
pub mod registry;
pub mod store;

pub use config::{default_db_path, StoreOptions};
pub use registry::manager::ProjectRegistry;
pub use store::error::{StoreError, StoreResult};
pub use store::observer::SaveObserver;
