//! Project identity derivation.
//!
//! A project's key is the first six hex characters of
//! `md5("{path}____{name}")`. It is computed once at insertion and never
//! recomputed, even if the name changes later. Two different projects whose
//! digests share a prefix collide, and the second insert is a no-op. The
//! short form is kept for compatibility with existing registry files.

use md5::{Digest, Md5};
use std::path::Path;

/// Number of hex characters kept from the digest.
pub const KEY_LEN: usize = 6;

const KEY_SEPARATOR: &str = "____";

/// Derive the registry key for a project.
pub fn derive_project_key(path: &str, name: &str) -> String {
    let digest = Md5::digest(format!("{path}{KEY_SEPARATOR}{name}").as_bytes());
    let mut key = hex::encode(digest);
    key.truncate(KEY_LEN);
    key
}

/// The final segment of `path`, ignoring trailing separators.
///
/// Returns an empty string for an empty path or a bare root.
pub fn project_name_from_path(path: &str) -> String {
    let is_separator = |c: char| c == '/' || c == std::path::MAIN_SEPARATOR;
    path.trim_end_matches(is_separator)
        .rsplit(is_separator)
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Lossy string form of a path as stored in the registry.
pub fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
