// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management for kiln.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. kiln.toml (cwd)
//! 3. --settings FILE (repeatable, in order)
//! 4. KILN_* env vars
//! 5. --set KEY=VALUE / CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! KILN_GLOBAL_DRY=true      → global.dry = true
//! KILN_PROJECTS_ANCHOR=app  → projects.anchor = "app"
//! ```

pub mod layout;
pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Result, SettingsError};

use layout::LayoutConfig;
use loader::SettingsLoader;
use types::{GlobalConfig, PluginDeclaration, ProjectsConfig, RepositoryConfig};

/// Complete application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Global options.
    pub global: GlobalConfig,
    /// Plugin declarations (availability only, no instantiation).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginDeclaration>,
    /// Artifact repository sources in lookup-priority order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RepositoryConfig>,
    /// Project tree declaration.
    pub projects: ProjectsConfig,
    /// Output-directory layout.
    pub layout: LayoutConfig,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kiln::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file("kiln.toml")
    ///     .add_toml_file_optional("kiln.local.toml")
    ///     .with_env_prefix("KILN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve derived paths and validate the project declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if layout resolution fails or a subproject name is
    /// declared twice.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for name in &self.projects.subprojects {
            if !seen.insert(name.as_str()) {
                return Err(SettingsError::InvalidValue {
                    section: "projects".to_string(),
                    key: "subprojects".to_string(),
                    message: format!("subproject '{name}' declared more than once"),
                }
                .into());
            }
        }

        if self.layout.root.is_some() {
            self.layout.resolve()?;
        }
        Ok(())
    }

    /// Format settings options for display.
    ///
    /// Returns a vector of formatted strings representing all options.
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_projects_options(&mut options);
        self.format_layout_options(&mut options);
        self.format_plugin_options(&mut options);
        self.format_repository_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_projects_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("projects.root".into(), self.projects.root.clone());
        options.insert("projects.anchor".into(), self.projects.anchor.clone());
        options.insert(
            "projects.subprojects".into(),
            self.projects.subprojects.join(", "),
        );
    }

    fn format_layout_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<std::path::PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("layout.root".into(), fmt(&self.layout.root));
        options.insert("layout.workspace".into(), fmt(&self.layout.workspace));
        options.insert("layout.output".into(), fmt(&self.layout.output));
        options.insert(
            "layout.redirect".into(),
            self.layout.redirect.display().to_string(),
        );
        options.insert("layout.relocated".into(), fmt(&self.layout.relocated));
    }

    fn format_plugin_options(&self, options: &mut BTreeMap<String, String>) {
        for decl in &self.plugins {
            options.insert(
                format!("plugins.{}", decl.id),
                if decl.apply { "apply" } else { "declare" }.to_string(),
            );
        }
    }

    fn format_repository_options(&self, options: &mut BTreeMap<String, String>) {
        for repo in &self.repositories {
            options.insert(format!("repositories.{}", repo.name), repo.url.clone());
        }
    }
}
