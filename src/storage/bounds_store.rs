//! Saved window bounds.
//!
//! One line of four comma-separated integers `x,y,width,height`, written by
//! a full overwrite on the save hotkey and read once at startup. A missing
//! or malformed record is not an error; the caller falls back to the
//! default geometry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::constants::BOUNDS_FILE;
use crate::model::Bounds;

/// Path of the bounds record: `%APPDATA%/Framemark/window_bounds.txt`.
pub fn default_path() -> PathBuf {
    super::data_dir().join(BOUNDS_FILE)
}

/// Read saved bounds, `None` if no readable record exists.
pub fn load() -> Option<Bounds> {
    load_from(&default_path())
}

/// Read saved bounds from an explicit path.
pub fn load_from(path: &Path) -> Option<Bounds> {
    let contents = fs::read_to_string(path).ok()?;
    let bounds = Bounds::parse(&contents);
    if bounds.is_none() {
        tracing::debug!(path = %path.display(), "ignoring malformed bounds record");
    }
    bounds
}

/// Overwrite the bounds record unconditionally.
pub fn save(bounds: &Bounds) -> io::Result<()> {
    save_to(&default_path(), bounds)
}

/// Overwrite the bounds record at an explicit path, creating the parent
/// directory if needed.
pub fn save_to(path: &Path, bounds: &Bounds) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bounds.to_line())
}
