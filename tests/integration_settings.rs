// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings loading.
//!
//! Tests the Settings module with realistic TOML workspace descriptions.

use std::path::{Path, PathBuf};

use kiln::config::Settings;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn settings_parse_minimal() {
    let toml = r#"
[layout]
root = "/ws/android"
"#;
    let settings = Settings::parse(toml).unwrap();

    assert_eq!(
        settings.layout.relocated_root().unwrap(),
        Path::new("/ws/build")
    );
}

#[test]
fn settings_parse_full_workspace() {
    let toml = r#"
[global]
dry = false
output_log_level = 4

[projects]
root = "mobile-native"
anchor = "app"
subprojects = ["app", "geolocator", "url-launcher"]

[layout]
root = "/ws/android"
redirect = "../../build"

[[plugins]]
id = "com.android.application"

[[plugins]]
id = "org.jetbrains.kotlin.android"

[[plugins]]
id = "com.google.gms.google-services"

[[plugins]]
id = "com.google.firebase.crashlytics"

[[plugins]]
id = "dev.flutter.flutter-gradle-plugin"

[[repositories]]
name = "google"
url = "https://maven.google.com"

[[repositories]]
name = "maven-central"
url = "https://repo.maven.apache.org/maven2"
"#;
    let settings = Settings::parse(toml).unwrap();

    assert_eq!(settings.global.output_log_level.as_u8(), 4);
    assert_eq!(settings.projects.subprojects.len(), 3);
    assert_eq!(settings.plugins.len(), 5);
    assert_eq!(settings.repositories.len(), 2);
    assert_eq!(
        settings.layout.relocated_root().unwrap(),
        Path::new("/ws/build")
    );
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn settings_from_file() {
    let sandbox = tempfile::tempdir().unwrap();
    let file = sandbox.path().join("kiln.toml");
    std::fs::write(
        &file,
        r#"
[projects]
root = "from-file"
"#,
    )
    .unwrap();

    let settings = Settings::from_file(&file).unwrap();
    assert_eq!(settings.projects.root, "from-file");
}

#[test]
fn settings_missing_required_file_is_error() {
    let sandbox = tempfile::tempdir().unwrap();
    let missing = sandbox.path().join("absent.toml");

    assert!(Settings::from_file(&missing).is_err());
}

#[test]
fn settings_optional_file_is_skipped() {
    let sandbox = tempfile::tempdir().unwrap();
    let missing = sandbox.path().join("absent.toml");

    let settings = Settings::builder()
        .add_toml_file_optional(&missing)
        .build()
        .unwrap();
    assert_eq!(settings.projects.root, "root");
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn settings_later_layer_overrides_earlier() {
    let settings = Settings::builder()
        .add_toml_str(
            r#"
[projects]
root = "base"
anchor = "app"
"#,
        )
        .add_toml_str(
            r#"
[projects]
anchor = "core"
"#,
        )
        .build()
        .unwrap();

    assert_eq!(settings.projects.root, "base");
    assert_eq!(settings.projects.anchor, "core");
}

#[test]
fn settings_set_override_beats_files() {
    let settings = Settings::builder()
        .add_toml_str(
            r#"
[projects]
root = "base"
"#,
        )
        .set("projects.root", "overridden")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.projects.root, "overridden");
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn settings_duplicate_subprojects_rejected() {
    let toml = r#"
[projects]
subprojects = ["app", "app"]
"#;
    assert!(Settings::parse(toml).is_err());
}

#[test]
fn settings_escape_rejected() {
    let toml = r#"
[layout]
root = "/ws/android"
redirect = "../../../../build"
"#;
    let err = Settings::parse(toml).unwrap_err();
    assert!(err.to_string().contains("escapes workspace boundary"));
}

#[test]
fn settings_invalid_log_level_rejected() {
    let toml = r"
[global]
output_log_level = 12
";
    assert!(Settings::parse(toml).is_err());
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.projects.anchor, "app");
    assert_eq!(settings.layout.redirect, PathBuf::from("../../build"));
    assert_eq!(settings.global.log_file, PathBuf::from("kiln.log"));
    assert!(settings.layout.relocated.is_none());
}
