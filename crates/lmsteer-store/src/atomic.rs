//! Atomic write primitive
//!
//! Uses temp→rename so a reader never sees a half-written config

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file, creating parent directories
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_config_dir", e))?;
    }

    // Same directory as the target so rename stays on one filesystem
    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_config_temp", e))?;
    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_config_temp", e))?;

    Ok(())
}
