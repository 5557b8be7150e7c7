// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Evaluate | Clean | Projects | Options | Files | Version
//! ```

use std::process::ExitCode;

use kiln::cli::global::GlobalOptions;
use kiln::cli::{self, Command};
use kiln::cmd::clean::run_clean_command;
use kiln::cmd::config::{run_files_command, run_options_command};
use kiln::cmd::evaluate::run_evaluate_command;
use kiln::cmd::list::run_projects_command;
use kiln::config::Settings;
use kiln::config::loader::SettingsLoader;
use kiln::logging::init_logging;
use kiln::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_settings(&cli.global).map(|settings| run_options_command(&settings))
        }
        Some(Command::Files) => match build_settings_loader(&cli.global) {
            Ok(loader) => {
                run_files_command(&loader.format_loaded_files());
                Ok(())
            }
            Err(e) => Err(e),
        },
        Some(Command::Evaluate(args)) => load_settings(&cli.global)
            .and_then(|settings| run_evaluate_command(args, &settings, cli.global.dry)),
        Some(Command::Projects(args)) => {
            load_settings(&cli.global).and_then(|settings| run_projects_command(args, &settings))
        }
        Some(Command::Clean) => match load_settings(&cli.global) {
            Ok(settings) => run_clean_command(&settings, cli.global.dry).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_settings_loader(global: &GlobalOptions) -> kiln::error::Result<SettingsLoader> {
    let mut loader = SettingsLoader::new();
    if !global.no_default_settings {
        loader = loader.add_toml_file_optional("kiln.toml");
    }
    for path in &global.settings_files {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("KILN");

    for entry in global.to_settings_overrides() {
        let Some((key, value)) = entry.split_once('=') else {
            return Err(anyhow::anyhow!(
                "invalid override '{entry}', expected KEY=VALUE"
            ));
        };
        loader = loader.set(key, value)?;
    }

    Ok(loader)
}

fn load_settings(global: &GlobalOptions) -> kiln::error::Result<Settings> {
    let loader = build_settings_loader(global)?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load settings: {e}");
        e
    })
}
