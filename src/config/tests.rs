// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::Settings;
use super::layout::{DEFAULT_REDIRECT, LayoutConfig};

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();

    assert!(!settings.global.dry);
    assert_eq!(settings.global.log_file, PathBuf::from("kiln.log"));
    assert_eq!(settings.projects.root, "root");
    assert_eq!(settings.projects.anchor, "app");
    assert!(settings.projects.subprojects.is_empty());
    assert!(settings.plugins.is_empty());
    assert!(settings.repositories.is_empty());
    assert_eq!(settings.layout.redirect, PathBuf::from(DEFAULT_REDIRECT));
}

#[test]
fn test_parse_minimal() {
    let toml = r#"
[layout]
root = "/ws/android"
"#;
    let settings = Settings::parse(toml).unwrap();

    assert_eq!(settings.layout.root, Some(PathBuf::from("/ws/android")));
    assert_eq!(settings.layout.workspace, Some(PathBuf::from("/ws")));
    assert_eq!(settings.layout.output, Some(PathBuf::from("/ws/android/build")));
    assert_eq!(settings.layout.relocated, Some(PathBuf::from("/ws/build")));
}

#[test]
fn test_parse_projects_section() {
    let toml = r#"
[projects]
root = "mobile-native"
subprojects = ["app", "geolocator", "url-launcher"]
"#;
    let settings = Settings::parse(toml).unwrap();

    assert_eq!(settings.projects.root, "mobile-native");
    assert_eq!(settings.projects.anchor, "app");
    assert_eq!(
        settings.projects.subprojects,
        vec!["app", "geolocator", "url-launcher"]
    );
}

#[test]
fn test_parse_plugins_and_repositories() {
    let toml = r#"
[[plugins]]
id = "com.android.application"

[[plugins]]
id = "org.jetbrains.kotlin.android"
apply = true

[[repositories]]
name = "google"
url = "https://maven.google.com"

[[repositories]]
name = "maven-central"
url = "https://repo.maven.apache.org/maven2"
"#;
    let settings = Settings::parse(toml).unwrap();

    assert_eq!(settings.plugins.len(), 2);
    assert_eq!(settings.plugins[0].id, "com.android.application");
    assert!(!settings.plugins[0].apply);
    assert!(settings.plugins[1].apply);

    // declaration order is lookup-priority order
    assert_eq!(settings.repositories[0].name, "google");
    assert_eq!(settings.repositories[1].name, "maven-central");
}

#[test]
fn test_duplicate_subproject_rejected() {
    let toml = r#"
[projects]
subprojects = ["app", "geolocator", "app"]
"#;
    let err = Settings::parse(toml).unwrap_err();
    assert!(err.to_string().contains("declared more than once"));
}

#[test]
fn test_unknown_key_rejected() {
    let toml = r#"
[global]
dryy = true
"#;
    assert!(Settings::parse(toml).is_err());
}

#[test]
fn test_builder_layered() {
    let settings = Settings::builder()
        .add_toml_str(
            r#"
[projects]
root = "base"
subprojects = ["app"]
"#,
        )
        .add_toml_str(
            r#"
[projects]
root = "override"
"#,
        )
        .build()
        .unwrap();

    assert_eq!(settings.projects.root, "override");
    assert_eq!(settings.projects.subprojects, vec!["app"]);
}

#[test]
fn test_builder_set_override() {
    let settings = Settings::builder()
        .add_toml_str(
            r"
[global]
dry = false
",
        )
        .set("global.dry", true)
        .unwrap()
        .build()
        .unwrap();

    assert!(settings.global.dry);
}

#[test]
fn test_format_options_alignment() {
    let toml = r#"
[projects]
subprojects = ["app"]

[[plugins]]
id = "com.android.application"
"#;
    let settings = Settings::parse(toml).unwrap();
    let lines = settings.format_options();

    assert!(lines.iter().any(|l| l.contains("projects.anchor")));
    assert!(
        lines
            .iter()
            .any(|l| l.contains("plugins.com.android.application") && l.contains("declare"))
    );
    // every line is aligned on '='
    let eq_cols: Vec<_> = lines.iter().filter_map(|l| l.find('=')).collect();
    assert!(eq_cols.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_loader_reports_files() {
    let loader = Settings::builder()
        .add_toml_str("[global]\ndry = true\n")
        .add_toml_file_optional("does-not-exist.toml");
    let listed = loader.format_loaded_files();

    assert_eq!(listed.len(), 1);
    assert!(listed[0].contains("<string>"));
}

// --- Layout resolution ---

#[test]
fn test_layout_relocation_is_normalized() {
    let mut layout = LayoutConfig {
        root: Some(PathBuf::from("/ws/android")),
        ..LayoutConfig::default()
    };
    layout.resolve().unwrap();

    // relocated == normalize(default_output/../../build)
    assert_eq!(layout.relocated_root().unwrap(), Path::new("/ws/build"));
    assert_eq!(layout.boundary().unwrap(), Path::new("/ws"));
}

#[test]
fn test_layout_custom_output_dir() {
    let mut layout = LayoutConfig {
        root: Some(PathBuf::from("/ws/android")),
        output: Some(PathBuf::from("out")),
        ..LayoutConfig::default()
    };
    layout.resolve().unwrap();

    // redirect applies to the overridden default output
    assert_eq!(layout.output, Some(PathBuf::from("/ws/android/out")));
    assert_eq!(layout.relocated_root().unwrap(), Path::new("/ws/build"));
}

#[test]
fn test_layout_missing_root_is_error() {
    let mut layout = LayoutConfig::default();
    let err = layout.resolve().unwrap_err();
    assert!(err.to_string().contains("'root'"));
}

#[test]
fn test_layout_escape_is_error() {
    let mut layout = LayoutConfig {
        root: Some(PathBuf::from("/ws/android")),
        redirect: PathBuf::from("../../../elsewhere/build"),
        ..LayoutConfig::default()
    };
    let err = layout.resolve().unwrap_err();
    assert!(err.to_string().contains("escapes workspace boundary"));
}

#[test]
fn test_layout_explicit_workspace_boundary() {
    let mut layout = LayoutConfig {
        root: Some(PathBuf::from("/ws/mobile/android")),
        workspace: Some(PathBuf::from("/ws")),
        redirect: PathBuf::from("../../../build"),
        ..LayoutConfig::default()
    };
    layout.resolve().unwrap();

    assert_eq!(layout.relocated_root().unwrap(), Path::new("/ws/build"));
}

#[test]
fn test_layout_unresolved_accessor_is_error() {
    let layout = LayoutConfig::default();
    assert!(layout.relocated_root().is_err());
    assert!(layout.boundary().is_err());
}
