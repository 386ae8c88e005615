//! Resolution of the production storage location and construction of the
//! default manager. The hosting application calls [`open_default`] once and
//! passes the resulting manager around; nothing here is global.

use crate::error::{ContactError, Result};
use crate::manager::ContactManager;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable overriding the data root (useful in tests and
/// sandboxed environments).
pub const DATA_DIR_ENV: &str = "ROLODEX_DATA_DIR";

const STORAGE_DIR_NAME: &str = "Contacts";

/// Resolve the storage directory: the env override if set, otherwise a
/// `Contacts` subdirectory of the OS-appropriate per-user data root.
///
/// Failing to resolve a writable root is the one fatal startup condition;
/// everything downstream needs somewhere to write.
pub fn default_storage_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir).join(STORAGE_DIR_NAME));
    }

    let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex").ok_or_else(|| {
        ContactError::DataDir("could not determine a per-user data directory".to_string())
    })?;
    Ok(proj_dirs.data_dir().join(STORAGE_DIR_NAME))
}

/// Build the production manager over a [`FileStore`] at the default
/// storage directory.
pub fn open_default() -> Result<ContactManager<FileStore>> {
    let store = FileStore::new(default_storage_dir()?)?;
    ContactManager::new(store)
}
