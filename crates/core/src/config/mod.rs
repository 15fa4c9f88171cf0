//! Store configuration.
//!
//! This module provides the options a [`ProjectRegistry`](crate::ProjectRegistry)
//! is opened with and the default location of the backing document.

pub mod models;
pub mod paths;

pub use models::StoreOptions;
pub use paths::default_db_path;
