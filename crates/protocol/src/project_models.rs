//! Persisted models for the registry document.
//!
//! The whole registry is stored as a single JSON document:
//!
//! ```json
//! {
//!   "projectsByKey": {
//!     "a1b2c3": {
//!       "name": "app",
//!       "path": "/home/u/app",
//!       "created_at": 1700000000000,
//!       "npmClient": "pnpm"
//!     }
//!   },
//!   "currentProject": "a1b2c3"
//! }
//! ```
//!
//! Field names are part of the on-disk format and must not change.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use ts_rs::TS;

/// The full persisted registry document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct RegistryState {
    /// All known projects, indexed by their derived key.
    ///
    /// Missing or `null` in the document means "no projects yet".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects_by_key: BTreeMap<String, ProjectItem>,

    /// Key of the active project, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_project: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, ProjectItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let projects = Option::<BTreeMap<String, ProjectItem>>::deserialize(deserializer)?;
    Ok(projects.unwrap_or_default())
}

/// A single known project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    /// Display name, usually the last segment of `path`.
    pub name: String,

    /// Absolute filesystem path. Not checked for existence.
    pub path: String,

    /// Insertion time in epoch milliseconds.
    ///
    /// Optional only so that documents written without it still load.
    #[serde(
        rename = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "number | null")]
    pub created_at: Option<i64>,

    /// Package manager used for this project (e.g. "npm", "yarn", "pnpm").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm_client: Option<String>,

    /// Whether installs should go through the taobao registry mirror.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taobao_speed_up: Option<bool>,

    /// Present only while a creation workflow is in flight or awaiting cleanup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creating_progress: Option<CreateProgress>,
}

/// Transient state of a multi-step project creation workflow.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgress {
    /// Zero-based index of the current step.
    #[serde(default)]
    pub step: u32,

    /// Status of the current step.
    #[serde(default)]
    #[ts(type = "number")]
    pub step_status: StepStatus,

    /// Labels of every step, fixed for one creation run.
    #[serde(default)]
    pub steps: Vec<String>,

    /// Set to `true` when the workflow finished successfully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// Set when the workflow failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<CreateFailure>,
}

/// Status code of the current creation step.
///
/// Serialized as a bare integer. Codes outside the known set are kept
/// as [`StepStatus::Other`] so a stored document is never rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// Step finished with an error (`-1`).
    Failed,

    /// Step has not started yet (`0`).
    #[default]
    Waiting,

    /// Step is running (`1`).
    Loading,

    /// Step finished successfully (`2`).
    Success,

    /// Any other code written by a newer or older client.
    Other(i32),
}

impl StepStatus {
    pub fn code(self) -> i32 {
        match self {
            StepStatus::Failed => -1,
            StepStatus::Waiting => 0,
            StepStatus::Loading => 1,
            StepStatus::Success => 2,
            StepStatus::Other(code) => code,
        }
    }
}

impl From<i32> for StepStatus {
    fn from(code: i32) -> Self {
        match code {
            -1 => StepStatus::Failed,
            0 => StepStatus::Waiting,
            1 => StepStatus::Loading,
            2 => StepStatus::Success,
            other => StepStatus::Other(other),
        }
    }
}

impl From<StepStatus> for i32 {
    fn from(status: StepStatus) -> Self {
        status.code()
    }
}

impl<'de> Deserialize<'de> for StepStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        Ok(StepStatus::from(code))
    }
}

impl Serialize for StepStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

/// Why a creation workflow failed.
///
/// Every field defaults on read: older writers stored error objects that
/// serialized to `{}`, which loads as an `Unknown` failure with no message.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateFailure {
    #[serde(default)]
    pub kind: FailureKind,

    #[serde(default)]
    pub message: String,

    /// Extra context such as captured command output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CreateFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }
}

/// Category of a creation failure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    #[default]
    Unknown,

    /// Filesystem error while scaffolding.
    Io,

    /// An external command (install, generator) exited with an error.
    Command,

    /// Fetching a template or package failed.
    Network,

    /// The user aborted the workflow.
    Cancelled,
}
