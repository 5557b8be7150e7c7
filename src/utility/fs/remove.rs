// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FsError, Result};
use tokio::fs;

/// Recursively deletes a directory and everything beneath it.
///
/// Returns `Ok(true)` if the directory existed and was removed, `Ok(false)`
/// if it did not exist. A missing directory is not an error.
///
/// # Errors
///
/// Returns an error for any I/O failure other than the directory being
/// absent.
pub async fn remove_dir_all_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::IoError {
            path: path.display().to_string(),
            source: e,
        }
        .into()),
    }
}

/// Probes that a directory exists and is writable.
///
/// Creates the directory (and parents) if needed, then opens an anonymous
/// temporary file inside it. The file is deleted when the handle drops.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be created or
/// written to.
pub fn probe_writable(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let probe = tempfile::tempfile_in(dir)?;
    drop(probe);
    Ok(())
}
