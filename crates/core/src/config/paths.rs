//! Default location of the registry document.

use crate::store::error::{StoreError, StoreResult};
use std::path::PathBuf;

/// Location of the registry document relative to the user's home directory.
pub const DEFAULT_DB_RELATIVE_PATH: &str = ".umi/ui/data.json";

/// Returns `$HOME/.umi/ui/data.json`.
///
/// # Errors
///
/// Returns [`StoreError::HomeDirUnavailable`] if the home directory cannot
/// be determined for the current user.
pub fn default_db_path() -> StoreResult<PathBuf> {
    let home = dirs::home_dir().ok_or(StoreError::HomeDirUnavailable)?;
    Ok(home.join(DEFAULT_DB_RELATIVE_PATH))
}
