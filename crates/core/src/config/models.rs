//! Options for opening a project registry.

use crate::store::observer::SaveObserver;
use std::fmt;
use std::path::PathBuf;

/// Construction-time configuration of a [`ProjectRegistry`](crate::ProjectRegistry).
///
/// There is no process-wide state: every registry is configured through
/// its own `StoreOptions`.
///
/// # Example
///
/// ```rust,no_run
/// use pr_core::{ProjectRegistry, StoreOptions};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = StoreOptions::default()
///     .with_db_path("/tmp/projects.json")
///     .with_observer(|state: &pr_protocol::RegistryState| {
///         println!("{} projects", state.projects_by_key.len());
///     });
///
/// let registry = ProjectRegistry::open(options)?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct StoreOptions {
    /// Backing document. `None` means [`default_db_path`](crate::default_db_path).
    pub db_path: Option<PathBuf>,

    /// Called with the full state after every successful save.
    pub observer: Option<Box<dyn SaveObserver>>,
}

impl StoreOptions {
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(db_path.into());
        self
    }

    pub fn with_observer(mut self, observer: impl SaveObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }
}

impl fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreOptions")
            .field("db_path", &self.db_path)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
