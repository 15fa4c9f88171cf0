//! Custom assertion helpers for the persisted registry document.

use pr_protocol::RegistryState;
use std::path::Path;

/// Read the registry document straight from disk.
pub fn read_document(db_path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(db_path).expect("Failed to read registry file");
    serde_json::from_str(&content).expect("Registry file should be valid JSON")
}

/// Assert that the file on disk holds exactly `state`.
pub fn assert_persisted(db_path: &Path, state: &RegistryState) {
    let on_disk: RegistryState =
        serde_json::from_value(read_document(db_path)).expect("Document should match schema");
    assert_eq!(&on_disk, state, "On-disk state diverged from memory");
}
