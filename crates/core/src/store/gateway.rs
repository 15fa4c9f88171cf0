//! Loading and saving the registry document.
//!
//! The gateway treats its file as an opaque JSON document. It knows nothing
//! about project semantics beyond one repair step: a document whose
//! `projectsByKey` is missing or `null` is loaded with an empty map.

use crate::store::error::{StoreError, StoreResult};
use crate::store::observer::SaveObserver;
use pr_protocol::RegistryState;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Owns the in-memory registry snapshot and its backing file.
///
/// The file is read once at construction (or on [`Gateway::reload`]) and
/// rewritten in full on every [`Gateway::save`].
pub struct Gateway {
    db_path: PathBuf,
    state: RegistryState,
    observer: Option<Box<dyn SaveObserver>>,
}

impl Gateway {
    /// Open the document at `db_path`, creating its parent directory.
    ///
    /// A missing file yields an empty registry; nothing is written until the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or if the
    /// file exists but cannot be read or parsed. A malformed document is
    /// never reset automatically.
    pub fn open(
        db_path: impl Into<PathBuf>,
        observer: Option<Box<dyn SaveObserver>>,
    ) -> StoreResult<Self> {
        let db_path = db_path.into();
        ensure_parent_dir(&db_path)?;
        let state = read_state(&db_path)?;

        Ok(Self {
            db_path,
            state,
            observer,
        })
    }

    /// Replace the in-memory snapshot with the current file contents.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.state = read_state(&self.db_path)?;
        Ok(())
    }

    /// Write the whole snapshot back to disk, then notify the observer.
    ///
    /// The file is overwritten in place. If the write fails, the in-memory
    /// state is kept as is and the error is returned; the observer is not
    /// called.
    pub fn save(&mut self) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(&self.state).map_err(StoreError::Serialize)?;

        ensure_parent_dir(&self.db_path)?;
        fs::write(&self.db_path, content).map_err(|source| StoreError::FileWrite {
            path: self.db_path.clone(),
            source,
        })?;

        debug!(
            path = %self.db_path.display(),
            projects = self.state.projects_by_key.len(),
            "saved registry"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer.on_save(&self.state);
        }

        Ok(())
    }

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RegistryState {
        &mut self.state
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("db_path", &self.db_path)
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Reads and parses the document, or returns an empty state if it is absent.
fn read_state(db_path: &Path) -> StoreResult<RegistryState> {
    if !db_path.exists() {
        debug!(path = %db_path.display(), "registry file missing, starting empty");
        return Ok(RegistryState::default());
    }

    let content = fs::read_to_string(db_path).map_err(|source| StoreError::FileRead {
        path: db_path.to_path_buf(),
        source,
    })?;

    // `projectsByKey` defaults to an empty map when absent or null
    let state: RegistryState =
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: db_path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %db_path.display(),
        projects = state.projects_by_key.len(),
        "loaded registry"
    );

    Ok(state)
}

fn ensure_parent_dir(db_path: &Path) -> StoreResult<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| StoreError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
