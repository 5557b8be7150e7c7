// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean action implementation.
//!
//! ```text
//! CleanAction
//! relocated root --> recursive delete
//! Missing directory: no-op success. Repeated runs: no-op success.
//! ```
//!
//! The target must stay inside the workspace boundary; anything else is
//! refused before touching the filesystem.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::info;

use crate::config::layout::LayoutConfig;
use crate::error::{ActionError, Result};
use crate::utility::fs::paths::normalize_lexical;
use crate::utility::fs::remove::remove_dir_all_if_exists;

use super::{ActionContext, Actionable};

/// Deletes the relocated output root and everything beneath it.
#[derive(Debug, Clone)]
pub struct CleanAction {
    /// Action name.
    name: String,
    /// Directory to delete.
    target: PathBuf,
    /// Boundary the target may not leave.
    boundary: PathBuf,
}

impl CleanAction {
    /// Creates a clean action for an explicit target and boundary.
    #[must_use]
    pub fn new(target: PathBuf, boundary: PathBuf) -> Self {
        Self {
            name: "clean".to_string(),
            target,
            boundary,
        }
    }

    /// Creates a clean action bound to a resolved layout's relocated root.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has not been resolved.
    pub fn from_layout(layout: &LayoutConfig) -> Result<Self> {
        Ok(Self::new(
            layout.relocated_root()?.to_path_buf(),
            layout.boundary()?.to_path_buf(),
        ))
    }

    /// Returns the action name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the directory this action deletes.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Executes the clean action.
    ///
    /// # Errors
    ///
    /// Returns an error if the target escapes the boundary or the delete
    /// fails for a reason other than the directory being absent.
    pub async fn do_clean(&self, ctx: &ActionContext) -> Result<()> {
        let target = normalize_lexical(&self.target);
        if !target.starts_with(&self.boundary) {
            return Err(ActionError::UnsafeTarget {
                path: target,
                boundary: self.boundary.clone(),
            }
            .into());
        }

        if ctx.is_dry_run() {
            info!(
                path = %target.display(),
                "[DRY-RUN] would remove output directory"
            );
            return Ok(());
        }

        let removed = remove_dir_all_if_exists(&target).await?;
        if removed {
            info!(
                project = %ctx.settings().projects.root,
                path = %target.display(),
                "Removed output directory"
            );
        } else {
            info!(
                path = %target.display(),
                "Output directory already absent, nothing to remove"
            );
        }

        Ok(())
    }
}

impl Actionable for CleanAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn run<'a>(&'a self, ctx: &'a ActionContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_clean(ctx))
    }
}
