// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings types for kiln.
//!
//! ```text
//! Settings: GlobalConfig, ProjectsConfig, LayoutConfig
//!           [[plugins]] declarations, [[repositories]] sources
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate filesystem operations without making changes.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("kiln.log"),
        }
    }
}

/// A plugin declaration: make a plugin available without activating it.
///
/// Declarations only record availability; plugin behavior belongs to the
/// host build tool. `apply = false` (the default) means "available to
/// subprojects, not activated at root scope".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginDeclaration {
    /// Plugin identifier, e.g. `com.android.application`.
    pub id: String,
    /// Whether the plugin is activated at root scope.
    pub apply: bool,
}

impl PluginDeclaration {
    /// Creates a declaration with `apply = false`.
    #[must_use]
    pub fn available(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            apply: false,
        }
    }
}

/// A named artifact repository source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Source name, e.g. `google`.
    pub name: String,
    /// Source URL.
    pub url: String,
}

/// Project tree declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Root project name.
    pub root: String,
    /// Subproject that anchors the evaluation order; every other subproject
    /// evaluates after it.
    pub anchor: String,
    /// Subproject names in declaration order.
    pub subprojects: Vec<String>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            root: "root".to_string(),
            anchor: "app".to_string(),
            subprojects: Vec::new(),
        }
    }
}
