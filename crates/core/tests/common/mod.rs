//! Common test utilities for registry integration tests.
//!
//! This module provides shared functionality across the tests:
//! - Temporary registry fixtures
//! - Custom assertions on the persisted document

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
