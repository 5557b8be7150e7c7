// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Evaluate and projects command arguments.

use clap::Args;

/// Arguments for the `evaluate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EvaluateArgs {
    /// Validates the workspace without touching the filesystem
    /// (skips the output-directory writability probe).
    #[arg(long)]
    pub check: bool,

    /// Prints the build model as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `projects` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectsArgs {
    /// Shows output directories next to project names.
    #[arg(short = 'd', long)]
    pub dirs: bool,
}
