// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Artifact repository sources.
//!
//! ```text
//! [[repositories]] --> RepositorySet (ordered)
//!   lookup("name"): first source wins on collision
//!   defaults: google, maven-central
//! ```
//!
//! The set applies to all projects; order determines lookup priority.

use serde::{Deserialize, Serialize};

use crate::config::types::RepositoryConfig;

/// A named artifact source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySource {
    /// Source name.
    pub name: String,
    /// Source URL.
    pub url: String,
}

/// Builtin source pair used when no repositories are configured.
pub const DEFAULT_SOURCES: &[(&str, &str)] = &[
    ("google", "https://maven.google.com"),
    ("maven-central", "https://repo.maven.apache.org/maven2"),
];

/// An ordered set of artifact sources.
///
/// Registration order is lookup-priority order. Registering a second source
/// under an existing name keeps the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySet {
    sources: Vec<RepositorySource>,
}

impl RepositorySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates the builtin default set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for (name, url) in DEFAULT_SOURCES {
            set.register(RepositorySource {
                name: (*name).to_string(),
                url: (*url).to_string(),
            });
        }
        set
    }

    /// Builds a set from configured sources, falling back to the builtin
    /// pair when none are configured.
    #[must_use]
    pub fn from_configs(configs: &[RepositoryConfig]) -> Self {
        if configs.is_empty() {
            return Self::builtin();
        }

        let mut set = Self::new();
        for config in configs {
            set.register(RepositorySource {
                name: config.name.clone(),
                url: config.url.clone(),
            });
        }
        set
    }

    /// Registers a source at the end of the priority order.
    ///
    /// A source whose name is already registered is dropped; the first
    /// registration wins.
    pub fn register(&mut self, source: RepositorySource) {
        if self.lookup(&source.name).is_some() {
            tracing::debug!(name = %source.name, "Dropping shadowed repository source");
            return;
        }
        self.sources.push(source);
    }

    /// Looks a source up by name. The first registered source with the name
    /// wins.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&RepositorySource> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Returns sources in lookup-priority order.
    #[must_use]
    pub fn sources(&self) -> &[RepositorySource] {
        &self.sources
    }

    /// Returns source names in lookup-priority order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name.as_str()).collect()
    }

    /// Returns the number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
