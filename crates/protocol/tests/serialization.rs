use pr_protocol::*;
use serde_json::json;

#[test]
fn test_registry_state_deserialization_from_document() {
    let doc = r#"
{
  "projectsByKey": {
    "0a1b2c": {
      "name": "app",
      "path": "/home/u/app",
      "created_at": 1700000000000,
      "npmClient": "yarn",
      "taobaoSpeedUp": true,
      "creatingProgress": {
        "step": 1,
        "stepStatus": 1,
        "steps": ["init", "install"]
      }
    }
  },
  "currentProject": "0a1b2c"
}
"#;

    let state: RegistryState = serde_json::from_str(doc).expect("Failed to deserialize RegistryState");

    assert_eq!(state.current_project.as_deref(), Some("0a1b2c"));
    let project = &state.projects_by_key["0a1b2c"];
    assert_eq!(project.name, "app");
    assert_eq!(project.path, "/home/u/app");
    assert_eq!(project.created_at, Some(1_700_000_000_000));
    assert_eq!(project.npm_client.as_deref(), Some("yarn"));
    assert_eq!(project.taobao_speed_up, Some(true));

    let progress = project.creating_progress.as_ref().expect("progress should be present");
    assert_eq!(progress.step, 1);
    assert_eq!(progress.step_status, StepStatus::Loading);
    assert_eq!(progress.steps, vec!["init".to_string(), "install".to_string()]);
    assert_eq!(progress.success, None);
    assert!(progress.failure.is_none());
}

#[test]
fn test_registry_state_defaults_missing_projects() {
    let state: RegistryState = serde_json::from_str("{}").expect("Failed to deserialize empty document");

    assert!(state.projects_by_key.is_empty());
    assert!(state.current_project.is_none());
}

#[test]
fn test_registry_state_null_projects_is_empty() {
    let state: RegistryState = serde_json::from_str(r#"{"projectsByKey": null}"#)
        .expect("Failed to deserialize document with null projects");

    assert!(state.projects_by_key.is_empty());
}

#[test]
fn test_project_item_field_names() {
    let project = ProjectItem {
        name: "app".to_string(),
        path: "/home/u/app".to_string(),
        created_at: Some(42),
        npm_client: Some("pnpm".to_string()),
        taobao_speed_up: None,
        creating_progress: None,
    };

    let value = serde_json::to_value(&project).expect("Failed to serialize ProjectItem");

    assert_eq!(
        value,
        json!({
            "name": "app",
            "path": "/home/u/app",
            "created_at": 42,
            "npmClient": "pnpm"
        })
    );
}

#[test]
fn test_step_status_serialization() {
    let json = serde_json::to_value(StepStatus::Success).expect("Failed to serialize StepStatus");
    assert_eq!(json, 2);

    let failed: StepStatus = serde_json::from_str("-1").expect("Failed to deserialize StepStatus");
    assert_eq!(failed, StepStatus::Failed);

    // Unknown codes survive a round trip unchanged
    let other: StepStatus = serde_json::from_str("7").expect("Failed to deserialize StepStatus");
    assert_eq!(other, StepStatus::Other(7));
    assert_eq!(serde_json::to_value(other).expect("Failed to serialize StepStatus"), 7);
}

#[test]
fn test_step_status_rejects_strings() {
    let result: Result<StepStatus, _> = serde_json::from_str("\"loading\"");
    assert!(result.is_err());
}

#[test]
fn test_empty_failure_object_loads() {
    let progress: CreateProgress = serde_json::from_str(r#"{"step": 2, "stepStatus": -1, "steps": [], "failure": {}}"#)
        .expect("Failed to deserialize CreateProgress");

    let failure = progress.failure.expect("failure should be present");
    assert_eq!(failure.kind, FailureKind::Unknown);
    assert_eq!(failure.message, "");
    assert!(failure.detail.is_none());
}

#[test]
fn test_failure_serialization() {
    let failure = CreateFailure {
        kind: FailureKind::Command,
        message: "npm install exited with 1".to_string(),
        detail: Some("ERR! network".to_string()),
    };

    let value = serde_json::to_value(&failure).expect("Failed to serialize CreateFailure");
    assert_eq!(value["kind"], "command");
    assert_eq!(value["message"], "npm install exited with 1");
    assert_eq!(value["detail"], "ERR! network");
}

#[test]
fn test_patch_deserialization_is_partial() {
    let patch: ProjectPatch = serde_json::from_str(r#"{"npmClient": "yarn"}"#).expect("Failed to deserialize ProjectPatch");

    assert_eq!(patch.npm_client.as_deref(), Some("yarn"));
    assert!(patch.name.is_none());
    assert!(patch.path.is_none());
    assert!(patch.taobao_speed_up.is_none());
    assert!(!patch.is_empty());
    assert!(ProjectPatch::default().is_empty());

    let progress: ProgressPatch = serde_json::from_str(r#"{"success": true}"#).expect("Failed to deserialize ProgressPatch");
    assert_eq!(progress, ProgressPatch::succeeded());
}

#[test]
fn test_patch_serialization_omits_absent_fields() {
    let patch = ProgressPatch::step(1, StepStatus::Loading);

    let value = serde_json::to_value(&patch).expect("Failed to serialize ProgressPatch");
    assert_eq!(value, json!({"step": 1, "stepStatus": 1}));
}
