// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Evaluate command implementation.
//!
//! ```text
//! evaluate_settings: one-shot pass, in order
//!   1. resolve plugin declarations
//!   2. build repository set
//!   3. bind output directories under the relocated root
//!   4. compute evaluation order (anchor first)
//!   5. register the clean action
//! ```

use serde::Serialize;

use crate::action::clean::CleanAction;
use crate::action::{Action, ActionRegistry};
use crate::cli::evaluate::EvaluateArgs;
use crate::config::Settings;
use crate::error::{LayoutError, Result};
use crate::plugin::{PluginRegistry, ResolvedPlugin};
use crate::repo::RepositorySet;
use crate::utility::fs::remove::probe_writable;
use crate::workspace::Workspace;
use crate::workspace::order::evaluation_order;

/// Finalized build model produced by one evaluation pass.
#[derive(Debug, Clone, Serialize)]
pub struct BuildModel {
    /// Project nodes with bound output directories.
    pub workspace: Workspace,
    /// Subproject evaluation order, anchor first.
    pub evaluation_order: Vec<String>,
    /// Resolved plugin declarations.
    pub plugins: Vec<ResolvedPlugin>,
    /// Repository sources in lookup-priority order.
    pub repositories: RepositorySet,
}

/// Evaluates settings into a build model.
///
/// This is the pure part of the pass; it does not touch the filesystem.
///
/// # Errors
///
/// Returns an error if a plugin declaration does not resolve, the layout is
/// unresolved, or the evaluation order has no anchor.
pub fn evaluate_settings(settings: &Settings) -> Result<BuildModel> {
    let registry = PluginRegistry::builtin();
    let plugins = registry.resolve(&settings.plugins)?;

    let repositories = RepositorySet::from_configs(&settings.repositories);

    let workspace = Workspace::from_settings(settings)?;
    let order = evaluation_order(&workspace, &settings.projects.anchor)?;

    Ok(BuildModel {
        workspace,
        evaluation_order: order,
        plugins,
        repositories,
    })
}

/// Registers the actions available once evaluation has produced a layout.
///
/// # Errors
///
/// Returns an error if the layout has not been resolved.
pub fn register_actions(settings: &Settings) -> Result<ActionRegistry> {
    let mut registry = ActionRegistry::new();
    registry.register(Action::Clean(CleanAction::from_layout(&settings.layout)?));
    Ok(registry)
}

/// Main handler for the evaluate command.
///
/// # Errors
///
/// Returns an error if evaluation fails or the relocated output root is not
/// writable.
pub fn run_evaluate_command(args: &EvaluateArgs, settings: &Settings, dry_run: bool) -> Result<()> {
    let model = evaluate_settings(settings)?;

    // The relocated root must be usable before the host tool schedules any
    // compilation beneath it.
    if !args.check && !dry_run {
        let relocated = settings.layout.relocated_root()?;
        probe_writable(relocated).map_err(|source| LayoutError::NotWritable {
            path: relocated.to_path_buf(),
            source,
        })?;
    }

    let actions = register_actions(settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    print_model(&model, &actions);
    tracing::info!("Workspace evaluated");
    Ok(())
}

fn print_model(model: &BuildModel, actions: &ActionRegistry) {
    println!("root project     {}", model.workspace.root().name);
    println!(
        "output root      {}",
        model.workspace.root().output_dir.display()
    );
    for node in model.workspace.subprojects() {
        println!("subproject       {} -> {}", node.name, node.output_dir.display());
    }
    println!("evaluation order {}", model.evaluation_order.join(", "));
    for plugin in &model.plugins {
        println!(
            "plugin           {} ({}{})",
            plugin.meta.id,
            plugin.meta.kind.name(),
            if plugin.apply { ", applied" } else { "" }
        );
    }
    println!("repositories     {}", model.repositories.names().join(", "));
    println!("actions          {}", actions.names().join(", "));
}
