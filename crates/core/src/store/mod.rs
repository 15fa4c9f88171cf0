//! Persistence of the registry document.
//!
//! This module provides:
//! - The [`gateway::Gateway`] that owns the in-memory snapshot and its file
//! - The [`observer::SaveObserver`] seam notified after each write
//! - The [`error::StoreError`] taxonomy shared by the whole crate

pub mod error;
pub mod gateway;
pub mod observer;
