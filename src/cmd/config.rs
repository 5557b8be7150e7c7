// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands.

use crate::config::Settings;

/// Display current settings options.
pub fn run_options_command(settings: &Settings) {
    for line in settings.format_options() {
        println!("{line}");
    }
}

/// Display loaded settings files.
pub fn run_files_command(settings_files: &[String]) {
    if settings_files.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in settings_files {
            println!("{line}");
        }
    }
}
