//! Patch application and the creation-progress gate.
//!
//! A record's progress moves through implicit states driven by
//! `set_creating_progress` and `set_creating_progress_done`:
//!
//! ```text
//! None --patch--> InFlight --success--> Succeeded --done--> None
//!                    |                                       ^
//!                    +--failure--> Failed ------done---------+
//! ```
//!
//! Activation only reads this state: it is admitted for `None` and
//! `Succeeded`.

use pr_protocol::{CreateProgress, ProgressPatch, ProjectItem, ProjectPatch};

/// Derived view of a record's creation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    /// No creation workflow recorded.
    None,

    /// Workflow started and has neither succeeded nor failed.
    InFlight,

    /// Workflow marked `success: true`.
    Succeeded,

    /// Workflow recorded a failure without succeeding.
    Failed,
}

impl ProgressState {
    /// Whether a project in this state may become the current project.
    pub fn admits_activation(self) -> bool {
        matches!(self, ProgressState::None | ProgressState::Succeeded)
    }
}

/// Classify the progress sub-record of `project`.
pub fn progress_state(project: &ProjectItem) -> ProgressState {
    match &project.creating_progress {
        None => ProgressState::None,
        Some(progress) if progress.success == Some(true) => ProgressState::Succeeded,
        Some(progress) if progress.failure.is_some() => ProgressState::Failed,
        Some(_) => ProgressState::InFlight,
    }
}

/// Overwrite each field of `project` that is present in `patch`.
pub fn apply_project_patch(project: &mut ProjectItem, patch: ProjectPatch) {
    if let Some(name) = patch.name {
        project.name = name;
    }
    if let Some(path) = patch.path {
        project.path = path;
    }
    if let Some(npm_client) = patch.npm_client {
        project.npm_client = Some(npm_client);
    }
    if let Some(taobao_speed_up) = patch.taobao_speed_up {
        project.taobao_speed_up = Some(taobao_speed_up);
    }
}

/// Merge `patch` into the record's progress, creating it if absent.
pub fn apply_progress_patch(project: &mut ProjectItem, patch: ProgressPatch) {
    let progress = project
        .creating_progress
        .get_or_insert_with(CreateProgress::default);

    if let Some(step) = patch.step {
        progress.step = step;
    }
    if let Some(step_status) = patch.step_status {
        progress.step_status = step_status;
    }
    if let Some(steps) = patch.steps {
        progress.steps = steps;
    }
    if let Some(success) = patch.success {
        progress.success = Some(success);
    }
    if let Some(failure) = patch.failure {
        progress.failure = Some(failure);
    }
}
