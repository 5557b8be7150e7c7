// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project tree model.
//!
//! ```text
//! Workspace
//!   root ProjectNode        output_dir = relocated root
//!   subproject nodes        output_dir = relocated root/<name>
//!
//! order::evaluation_order   anchor first, declared order after
//! ```
//!
//! Nodes exist only for the duration of one evaluation; the finalized build
//! model is handed to the host tool and the nodes are discarded.

pub mod order;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;

/// A unit of work in the build tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNode {
    /// Project name.
    pub name: String,
    /// Build output directory.
    pub output_dir: PathBuf,
}

/// The root project and its subprojects, with output directories bound to
/// the relocated layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    root: ProjectNode,
    subprojects: Vec<ProjectNode>,
}

impl Workspace {
    /// Builds the project tree from settings, binding every output
    /// directory beneath the relocated root.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has not been resolved.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let relocated = settings.layout.relocated_root()?;

        let root = ProjectNode {
            name: settings.projects.root.clone(),
            output_dir: relocated.to_path_buf(),
        };

        let subprojects = settings
            .projects
            .subprojects
            .iter()
            .map(|name| ProjectNode {
                name: name.clone(),
                output_dir: relocated.join(name),
            })
            .collect();

        Ok(Self { root, subprojects })
    }

    /// Returns the root project node.
    #[must_use]
    pub const fn root(&self) -> &ProjectNode {
        &self.root
    }

    /// Returns subproject nodes in declaration order.
    #[must_use]
    pub fn subprojects(&self) -> &[ProjectNode] {
        &self.subprojects
    }

    /// Looks a subproject up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProjectNode> {
        self.subprojects.iter().find(|p| p.name == name)
    }

    /// Returns subproject names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.subprojects.iter().map(|p| p.name.as_str()).collect()
    }
}
