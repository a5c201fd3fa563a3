//! File persistence: saved window bounds and the appearance config.
//!
//! Both live under `%APPDATA%/Framemark` and are plain files touched only
//! synchronously on explicit load/save, so there is no locking discipline.

pub mod bounds_store;
pub mod config;

use std::path::PathBuf;

use crate::model::constants::APP_DIR;

/// Per-user data directory: `%APPDATA%/Framemark`, falling back to the
/// current directory when `APPDATA` is unset.
pub fn data_dir() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join(APP_DIR)
}
