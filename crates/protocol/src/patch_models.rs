//! Partial-update models.
//!
//! Patches carry only the fields a caller wants to change. Applying a patch
//! overwrites each present field and leaves every absent field untouched.

use crate::project_models::{CreateFailure, StepStatus};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Input for inserting a project into the registry.
///
/// An empty `name` is replaced by the last segment of `path`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[serde(default)]
    pub name: String,

    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm_client: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taobao_speed_up: Option<bool>,
}

impl NewProject {
    /// A project known only by its path; the name is derived on insert.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Field-by-field update of a [`ProjectItem`](crate::ProjectItem).
///
/// The creation timestamp is intentionally absent: it is fixed at insert.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm_client: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taobao_speed_up: Option<bool>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.path.is_none()
            && self.npm_client.is_none()
            && self.taobao_speed_up.is_none()
    }
}

/// Field-by-field update of a [`CreateProgress`](crate::CreateProgress).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | null")]
    pub step_status: Option<StepStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<CreateFailure>,
}

impl ProgressPatch {
    /// Patch that moves the workflow to `step` with the given status.
    pub fn step(step: u32, status: StepStatus) -> Self {
        Self {
            step: Some(step),
            step_status: Some(status),
            ..Self::default()
        }
    }

    /// Terminal patch marking the workflow as successful.
    pub fn succeeded() -> Self {
        Self {
            success: Some(true),
            ..Self::default()
        }
    }

    /// Terminal patch recording a failure.
    pub fn failed(failure: CreateFailure) -> Self {
        Self {
            success: Some(false),
            failure: Some(failure),
            ..Self::default()
        }
    }
}
