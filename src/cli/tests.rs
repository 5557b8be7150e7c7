// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;

use super::{Cli, Command, parse_from};

#[test]
fn test_parse_evaluate_with_flags() {
    let cli = parse_from(["kiln", "evaluate", "--check", "--json"]);

    match cli.command {
        Some(Command::Evaluate(args)) => {
            assert!(args.check);
            assert!(args.json);
        }
        other => panic!("expected evaluate command, got {other:?}"),
    }
}

#[test]
fn test_parse_evaluate_alias() {
    let cli = parse_from(["kiln", "eval"]);
    assert!(matches!(cli.command, Some(Command::Evaluate(_))));
}

#[test]
fn test_parse_clean_has_no_flags() {
    let cli = parse_from(["kiln", "clean"]);
    assert!(matches!(cli.command, Some(Command::Clean)));
}

#[test]
fn test_parse_global_options() {
    let cli = parse_from([
        "kiln",
        "--dry",
        "-l",
        "4",
        "-d",
        "/ws/android",
        "-s",
        "projects.anchor=core",
        "clean",
    ]);

    assert!(cli.global.dry);
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(
        cli.global.workspace.as_deref(),
        Some(std::path::Path::new("/ws/android"))
    );

    let overrides = cli.global.to_settings_overrides();
    assert!(overrides.contains(&"projects.anchor=core".to_string()));
    assert!(overrides.contains(&"global.dry=true".to_string()));
    assert!(overrides.contains(&"global.output_log_level=4".to_string()));
    assert!(overrides.contains(&"layout.root=/ws/android".to_string()));
}

#[test]
fn test_file_log_level_falls_back_to_log_level() {
    let cli = parse_from(["kiln", "-l", "2", "options"]);

    let overrides = cli.global.to_settings_overrides();
    assert!(overrides.contains(&"global.file_log_level=2".to_string()));
}

#[test]
fn test_repeated_settings_files() {
    let cli = parse_from(["kiln", "-i", "a.toml", "-i", "b.toml", "options"]);
    assert_eq!(cli.global.settings_files.len(), 2);
}

#[test]
fn test_rejects_out_of_range_log_level() {
    let result = Cli::try_parse_from(["kiln", "-l", "9", "options"]);
    assert!(result.is_err());
}
