// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output-directory layout.
//!
//! ```text
//! workspace/            (boundary, default: parent of root)
//!   build/              (relocated shared output root)
//!     <subproject>/     (per-subproject output)
//!   android/            (layout.root)
//!     build/            (default output, replaced by the redirect)
//! ```
//!
//! The relocated root is `normalize(output/<redirect>)` and must stay
//! inside the workspace boundary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LayoutError, Result, SettingsError};
use crate::utility::fs::paths::normalize_lexical;

/// Relative segment applied to the default output directory.
pub const DEFAULT_REDIRECT: &str = "../../build";

/// Output-directory layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Root project directory (all other paths derived from this).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Workspace boundary; output directories may not escape it
    /// (default: parent of `root`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<PathBuf>,
    /// Default output directory (default: `root/build`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Relative redirect applied to the default output directory.
    pub redirect: PathBuf,
    /// Relocated shared output root (computed by [`LayoutConfig::resolve`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relocated: Option<PathBuf>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root: None,
            workspace: None,
            output: None,
            redirect: PathBuf::from(DEFAULT_REDIRECT),
            relocated: None,
        }
    }
}

impl LayoutConfig {
    /// Resolve derived paths and verify the relocated root stays inside the
    /// workspace boundary.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError::MissingKey` if `root` is not set, a
    /// `LayoutError::NoBoundary` if no workspace boundary can be derived,
    /// and a `LayoutError::EscapesWorkspace` if the relocated root leaves
    /// the boundary.
    pub fn resolve(&mut self) -> Result<()> {
        let root = normalize_lexical(&self.root.clone().ok_or_else(|| {
            SettingsError::MissingKey {
                section: "layout".to_string(),
                key: "root".to_string(),
            }
        })?);

        let workspace = match &self.workspace {
            Some(p) => normalize_lexical(p),
            None => root
                .parent()
                .map(Path::to_path_buf)
                .ok_or(LayoutError::NoBoundary { path: root.clone() })?,
        };

        let output = match &self.output {
            Some(p) if p.is_relative() => root.join(p),
            Some(p) => p.clone(),
            None => root.join("build"),
        };

        let relocated = normalize_lexical(&output.join(&self.redirect));
        if !relocated.starts_with(&workspace) {
            return Err(LayoutError::EscapesWorkspace {
                path: relocated,
                boundary: workspace,
            }
            .into());
        }

        self.root = Some(root);
        self.workspace = Some(workspace);
        self.output = Some(output);
        self.relocated = Some(relocated);
        Ok(())
    }

    /// Get the relocated shared output root, returning an error if
    /// [`LayoutConfig::resolve`] has not produced one.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError::MissingKey` if the layout is unresolved.
    pub fn relocated_root(&self) -> Result<&Path> {
        self.relocated.as_deref().ok_or_else(|| {
            SettingsError::MissingKey {
                section: "layout".to_string(),
                key: "root".to_string(),
            }
            .into()
        })
    }

    /// Get the workspace boundary, returning an error if unresolved.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError::MissingKey` if the layout is unresolved.
    pub fn boundary(&self) -> Result<&Path> {
        self.workspace.as_deref().ok_or_else(|| {
            SettingsError::MissingKey {
                section: "layout".to_string(),
                key: "root".to_string(),
            }
            .into()
        })
    }
}
