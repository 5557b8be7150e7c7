// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --settings FILE   ← Additional settings files (can repeat)
//! --dry             ← Simulate filesystem ops
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --workspace DIR   ← layout.root override
//! --set KEY=VAL     ← Direct settings override
//!
//! Precedence: CLI flags > --set > --settings > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "settings", value_name = "FILE", action = clap::ArgAction::Append)]
    pub settings_files: Vec<PathBuf>,

    /// Simulates filesystem operations. Evaluation skips the writability
    /// probe and `clean` reports what it would delete without deleting it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Root project directory (overrides layout.root).
    #[arg(short = 'd', long = "workspace", value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Sets an option, such as 'projects.anchor=app' or 'global.dry=true'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of kiln.toml, only uses --settings.
    #[arg(long = "no-default-settings")]
    pub no_default_settings: bool,
}

impl GlobalOptions {
    /// Converts command-line options to settings overrides as
    /// `KEY=VALUE` pairs.
    #[must_use]
    pub fn to_settings_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        if self.dry {
            overrides.push("global.dry=true".to_string());
        }

        if let Some(ref workspace) = self.workspace {
            overrides.push(format!("layout.root={}", workspace.display()));
        }

        overrides
    }
}
