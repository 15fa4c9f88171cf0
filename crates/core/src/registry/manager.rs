//! Project registry over a persisted document.
//!
//! The ProjectRegistry owns the single in-memory snapshot of known projects
//! and the "current project" pointer. Every mutating operation saves the
//! whole document before returning; there is no batching and no rollback.

use crate::config::{default_db_path, StoreOptions};
use crate::registry::identity::{derive_project_key, path_to_string, project_name_from_path};
use crate::registry::progress::{
    apply_progress_patch, apply_project_patch, progress_state, ProgressState,
};
use crate::store::error::{StoreError, StoreResult};
use crate::store::gateway::Gateway;
use path_absolutize::Absolutize;
use pr_protocol::{NewProject, ProgressPatch, ProjectItem, ProjectPatch, RegistryState};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Keyed store of known projects.
///
/// One registry is assumed to own its backing file; concurrent writers to
/// the same file are not coordinated.
#[derive(Debug)]
pub struct ProjectRegistry {
    gateway: Gateway,

    /// Identifies this opened instance in log output.
    instance_id: Uuid,
}

impl ProjectRegistry {
    /// Open a registry with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the default location cannot be resolved, the
    /// parent directory cannot be created, or an existing document cannot
    /// be read or parsed.
    pub fn open(options: StoreOptions) -> StoreResult<Self> {
        let db_path = match options.db_path {
            Some(path) => path,
            None => default_db_path()?,
        };
        let gateway = Gateway::open(db_path, options.observer)?;
        let instance_id = Uuid::new_v4();

        debug!(
            store = %instance_id,
            path = %gateway.db_path().display(),
            "opened project registry"
        );

        Ok(Self {
            gateway,
            instance_id,
        })
    }

    /// Open the registry at `$HOME/.umi/ui/data.json` without an observer.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(StoreOptions::default())
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn db_path(&self) -> &Path {
        self.gateway.db_path()
    }

    /// The full registry document as last loaded or saved.
    pub fn state(&self) -> &RegistryState {
        self.gateway.state()
    }

    pub fn project(&self, key: &str) -> Option<&ProjectItem> {
        self.state().projects_by_key.get(key)
    }

    /// All projects ordered by key.
    pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectItem)> {
        self.state()
            .projects_by_key
            .iter()
            .map(|(key, project)| (key.as_str(), project))
    }

    /// Key and record of the current project.
    ///
    /// Returns `None` if no project is current, or if the pointer refers to
    /// a key that is no longer stored.
    pub fn current_project(&self) -> Option<(&str, &ProjectItem)> {
        let key = self.state().current_project.as_deref()?;
        self.project(key).map(|project| (key, project))
    }

    /// Creation-workflow state of the project at `key`.
    pub fn progress_state(&self, key: &str) -> StoreResult<ProgressState> {
        self.project(key)
            .map(progress_state)
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Discard in-memory state and re-read the backing document.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.gateway.reload()
    }

    /// Insert a project unless one already exists under its derived key.
    ///
    /// An empty name is replaced by the last segment of the path. The key
    /// is returned whether or not anything was inserted; an existing record
    /// is left untouched and nothing is saved.
    pub fn add_project(&mut self, project: NewProject) -> StoreResult<String> {
        let NewProject {
            name,
            path,
            npm_client,
            taobao_speed_up,
        } = project;

        let name = if name.is_empty() {
            project_name_from_path(&path)
        } else {
            name
        };
        let key = derive_project_key(&path, &name);

        if self.project(&key).is_some() {
            debug!(store = %self.instance_id, %key, "project already registered");
            return Ok(key);
        }

        debug!(store = %self.instance_id, %key, %path, "registering project");
        let item = ProjectItem {
            name,
            path,
            created_at: Some(chrono::Utc::now().timestamp_millis()),
            npm_client,
            taobao_speed_up,
            creating_progress: None,
        };
        self.gateway
            .state_mut()
            .projects_by_key
            .insert(key.clone(), item);
        self.gateway.save()?;

        Ok(key)
    }

    /// Remove the project at `key`, clearing the current pointer if it
    /// referenced it. A missing key is not an error. Always saves.
    pub fn delete_project(&mut self, key: &str) -> StoreResult<()> {
        let state = self.gateway.state_mut();
        let removed = state.projects_by_key.remove(key).is_some();
        if state.current_project.as_deref() == Some(key) {
            state.current_project = None;
        }

        debug!(store = %self.instance_id, %key, removed, "deleted project");
        self.gateway.save()
    }

    /// Overwrite the fields present in `patch` on the project at `key`.
    pub fn edit_project(&mut self, key: &str, patch: ProjectPatch) -> StoreResult<()> {
        apply_project_patch(self.project_mut(key)?, patch);
        self.gateway.save()
    }

    /// Merge `patch` into the project's creation progress, creating the
    /// progress sub-record on first use.
    pub fn set_creating_progress(&mut self, key: &str, patch: ProgressPatch) -> StoreResult<()> {
        apply_progress_patch(self.project_mut(key)?, patch);
        self.gateway.save()
    }

    /// Drop the creation progress of the project at `key`, whatever its
    /// outcome was.
    pub fn set_creating_progress_done(&mut self, key: &str) -> StoreResult<()> {
        self.project_mut(key)?.creating_progress = None;
        self.gateway.save()
    }

    /// Make the project at `key` the current project.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ProjectNotFound`] if no project is stored at `key`
    /// - [`StoreError::StillCreating`] if the project has creation progress
    ///   that has not succeeded (running or failed)
    ///
    /// The current pointer is not touched when either check fails.
    pub fn set_current_project(&mut self, key: &str) -> StoreResult<()> {
        let state = self.progress_state(key)?;
        if !state.admits_activation() {
            warn!(store = %self.instance_id, %key, ?state, "project is still creating");
            return Err(StoreError::StillCreating {
                key: key.to_string(),
            });
        }

        debug!(store = %self.instance_id, %key, "setting current project");
        self.gateway.state_mut().current_project = Some(key.to_string());
        self.gateway.save()
    }

    /// Replace the package manager of the project at `key`.
    pub fn set_project_npm_client(
        &mut self,
        key: &str,
        npm_client: impl Into<String>,
    ) -> StoreResult<()> {
        self.project_mut(key)?.npm_client = Some(npm_client.into());
        self.gateway.save()
    }

    /// Register `path` (resolved against the working directory) and make it
    /// the current project. Returns the project key.
    pub fn add_project_and_set_current(&mut self, path: impl AsRef<Path>) -> StoreResult<String> {
        let cwd = std::env::current_dir().map_err(|source| StoreError::PathResolve {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        self.add_project_and_set_current_from(&cwd, path)
    }

    /// Like [`add_project_and_set_current`](Self::add_project_and_set_current)
    /// with an explicit base directory.
    pub fn add_project_and_set_current_from(
        &mut self,
        cwd: &Path,
        path: impl AsRef<Path>,
    ) -> StoreResult<String> {
        let abs_path = path_to_string(&resolve_project_path(cwd, path.as_ref())?);
        let name = project_name_from_path(&abs_path);

        let key = self.add_project(NewProject {
            name,
            path: abs_path,
            ..NewProject::default()
        })?;
        self.set_current_project(&key)?;

        Ok(key)
    }

    fn project_mut(&mut self, key: &str) -> StoreResult<&mut ProjectItem> {
        self.gateway
            .state_mut()
            .projects_by_key
            .get_mut(key)
            .ok_or_else(|| StoreError::not_found(key))
    }
}

/// Resolve `path` against `cwd` and normalize `.` and `..` segments.
///
/// Absolute paths are normalized but not re-rooted.
pub fn resolve_project_path(cwd: &Path, path: &Path) -> StoreResult<PathBuf> {
    path.absolutize_from(cwd)
        .map(|resolved| resolved.into_owned())
        .map_err(|source| StoreError::PathResolve {
            path: path.to_path_buf(),
            source,
        })
}
