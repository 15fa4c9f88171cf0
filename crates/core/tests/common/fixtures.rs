//! Test fixtures for creating registries backed by temporary files.

use pr_core::{ProjectRegistry, StoreOptions};
use pr_protocol::NewProject;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A registry file inside a temporary directory.
///
/// The `TempDir` must be kept alive for the test duration.
pub struct TestStore {
    pub dir: TempDir,
    pub db_path: PathBuf,
}

impl TestStore {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let db_path = dir.path().join(".umi/ui/data.json");
        Ok(Self { dir, db_path })
    }

    /// Open a registry on this store's file.
    pub fn open(&self) -> ProjectRegistry {
        open_at(&self.db_path)
    }

    /// Open a registry with extra options (the db path is always overridden).
    pub fn open_with(&self, options: StoreOptions) -> ProjectRegistry {
        ProjectRegistry::open(options.with_db_path(&self.db_path))
            .expect("Failed to open registry")
    }
}

pub fn open_at(db_path: &Path) -> ProjectRegistry {
    ProjectRegistry::open(StoreOptions::default().with_db_path(db_path))
        .expect("Failed to open registry")
}

/// Create a NewProject with an explicit name.
pub fn named_project(name: &str, path: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        path: path.to_string(),
        ..NewProject::default()
    }
}
