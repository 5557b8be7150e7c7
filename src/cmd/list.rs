// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Projects command implementation.

use crate::cli::evaluate::ProjectsArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::workspace::Workspace;

/// Main handler for the projects command.
///
/// # Errors
///
/// Returns an error if the layout has not been resolved.
pub fn run_projects_command(args: &ProjectsArgs, settings: &Settings) -> Result<()> {
    let workspace = Workspace::from_settings(settings)?;

    if args.dirs {
        println!(
            "{} (root) -> {}",
            workspace.root().name,
            workspace.root().output_dir.display()
        );
        for node in workspace.subprojects() {
            println!("{} -> {}", node.name, node.output_dir.display());
        }
    } else {
        println!("{} (root)", workspace.root().name);
        for node in workspace.subprojects() {
            println!("{}", node.name);
        }
    }

    Ok(())
}
