//! The project registry.
//!
//! This module provides:
//! - Content-derived project keys ([`identity`])
//! - Patch application and the progress gate ([`progress`])
//! - The [`manager::ProjectRegistry`] that ties them to persistence

pub mod identity;
pub mod manager;
pub mod progress;
