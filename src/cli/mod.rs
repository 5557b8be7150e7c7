// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for kiln using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! kiln [global options] <command>
//! evaluate [--check] [--json]
//! clean
//! projects [--dirs]
//! options
//! files
//! version
//! ```

pub mod evaluate;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::evaluate::{EvaluateArgs, ProjectsArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Build workspace configuration tool.
///
/// Evaluates a declarative workspace description into a finalized build
/// model: plugin availability, repository sources, relocated output
/// directories, and the subproject evaluation order.
#[derive(Debug, Parser)]
#[command(
    name = "kiln",
    author,
    version,
    about = "Build workspace configuration tool",
    long_about = "kiln evaluates a declarative workspace description into a\n\
                  finalized build model: plugin availability, repository\n\
                  sources, relocated output directories, and the subproject\n\
                  evaluation order. `kiln clean` removes the relocated output\n\
                  tree. See `kiln <command> --help` for details.",
    after_help = "SETTINGS FILES:\n\n\
                  By default, kiln loads `kiln.toml` from the current\n\
                  directory when present. Additional files can be specified\n\
                  with --settings; later files override earlier ones. Use\n\
                  --no-default-settings to disable auto detection and only\n\
                  use --settings. `KILN_*` environment variables and\n\
                  --set KEY=VALUE override file values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the settings files.
    Options,

    /// Lists the settings files used by kiln.
    Files,

    /// Evaluates the workspace into a build model.
    #[command(visible_alias = "eval")]
    Evaluate(EvaluateArgs),

    /// Lists project nodes.
    Projects(ProjectsArgs),

    /// Deletes the relocated output root.
    Clean,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
