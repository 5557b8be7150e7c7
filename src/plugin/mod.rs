// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plugin registry for resolving plugin declarations.
//!
//! ```text
//! [[plugins]] id = "com.android.application"
//!        |
//!        v
//! PluginRegistry: id --> PluginMeta { id, kind }
//!        |
//!        v
//! ResolvedPlugin { meta, apply }
//! ```
//!
//! Declarations only record availability. Resolving a declaration looks the
//! id up in the registry; plugin behavior stays with the host build tool.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::types::PluginDeclaration;
use crate::error::{PluginError, Result};

/// What a known plugin contributes to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    /// Packages the application artifact.
    ApplicationPackaging,
    /// Provides a language toolchain.
    LanguageToolchain,
    /// Integrates a cloud service.
    CloudIntegration,
    /// Hosts the cross-platform UI framework.
    UiFramework,
}

impl PluginKind {
    /// Returns the display name for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ApplicationPackaging => "application-packaging",
            Self::LanguageToolchain => "language-toolchain",
            Self::CloudIntegration => "cloud-integration",
            Self::UiFramework => "ui-framework",
        }
    }
}

/// Metadata record for a known plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMeta {
    /// Plugin identifier.
    pub id: String,
    /// Plugin kind.
    pub kind: PluginKind,
}

/// A declaration resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlugin {
    /// Registry metadata for the declared id.
    pub meta: PluginMeta,
    /// Whether the plugin is activated at root scope.
    pub apply: bool,
}

/// Builtin plugin ids known to the registry.
pub const BUILTIN_PLUGINS: &[(&str, PluginKind)] = &[
    ("com.android.application", PluginKind::ApplicationPackaging),
    ("org.jetbrains.kotlin.android", PluginKind::LanguageToolchain),
    ("com.google.gms.google-services", PluginKind::CloudIntegration),
    ("com.google.firebase.crashlytics", PluginKind::CloudIntegration),
    ("dev.flutter.flutter-gradle-plugin", PluginKind::UiFramework),
];

/// Registry mapping plugin identifiers to metadata records.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    entries: BTreeMap<String, PluginMeta>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a registry seeded with the builtin plugin records.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, kind) in BUILTIN_PLUGINS {
            registry.register(PluginMeta {
                id: (*id).to_string(),
                kind: *kind,
            });
        }
        registry
    }

    /// Registers a plugin metadata record, replacing any existing record
    /// with the same id.
    pub fn register(&mut self, meta: PluginMeta) {
        self.entries.insert(meta.id.clone(), meta);
    }

    /// Looks up a plugin id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PluginMeta> {
        self.entries.get(id)
    }

    /// Returns the number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves plugin declarations against the registry, preserving
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Returns a `PluginError::Unknown` for an id not in the registry and a
    /// `PluginError::Duplicate` for an id declared more than once.
    pub fn resolve(&self, declarations: &[PluginDeclaration]) -> Result<Vec<ResolvedPlugin>> {
        let mut seen = BTreeMap::new();
        let mut resolved = Vec::with_capacity(declarations.len());

        for decl in declarations {
            if seen.insert(decl.id.as_str(), ()).is_some() {
                return Err(PluginError::Duplicate(decl.id.clone()).into());
            }

            let meta = self
                .get(&decl.id)
                .ok_or_else(|| PluginError::Unknown(decl.id.clone()))?;

            resolved.push(ResolvedPlugin {
                meta: meta.clone(),
                apply: decl.apply,
            });
        }

        Ok(resolved)
    }
}
