// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::Workspace;
use super::order::evaluation_order;
use crate::config::Settings;

fn settings(subprojects: &[&str]) -> Settings {
    let list = subprojects
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ");
    Settings::parse(&format!(
        r#"
[projects]
root = "mobile-native"
subprojects = [{list}]

[layout]
root = "/ws/android"
"#
    ))
    .unwrap()
}

#[test]
fn test_root_output_is_relocated_root() {
    let workspace = Workspace::from_settings(&settings(&["app"])).unwrap();

    assert_eq!(workspace.root().name, "mobile-native");
    assert_eq!(workspace.root().output_dir, Path::new("/ws/build"));
}

#[test]
fn test_subproject_outputs_are_named_children() {
    let workspace =
        Workspace::from_settings(&settings(&["app", "geolocator", "url-launcher"])).unwrap();

    // output_dir(S) == relocated_root/name(S) for every subproject
    for node in workspace.subprojects() {
        assert_eq!(node.output_dir, Path::new("/ws/build").join(&node.name));
    }
    assert_eq!(workspace.names(), vec!["app", "geolocator", "url-launcher"]);
}

#[test]
fn test_get_by_name() {
    let workspace = Workspace::from_settings(&settings(&["app", "geolocator"])).unwrap();

    assert!(workspace.get("geolocator").is_some());
    assert!(workspace.get("missing").is_none());
}

#[test]
fn test_unresolved_layout_is_error() {
    let settings = Settings::default();
    assert!(Workspace::from_settings(&settings).is_err());
}

// --- Evaluation order ---

#[test]
fn test_order_anchor_first() {
    let workspace =
        Workspace::from_settings(&settings(&["geolocator", "app", "url-launcher"])).unwrap();

    let order = evaluation_order(&workspace, "app").unwrap();
    assert_eq!(order, vec!["app", "geolocator", "url-launcher"]);
}

#[test]
fn test_order_anchor_not_duplicated() {
    let workspace = Workspace::from_settings(&settings(&["app"])).unwrap();

    let order = evaluation_order(&workspace, "app").unwrap();
    assert_eq!(order, vec!["app"]);
}

#[test]
fn test_order_missing_anchor_is_error() {
    let workspace = Workspace::from_settings(&settings(&["geolocator", "url-launcher"])).unwrap();

    let err = evaluation_order(&workspace, "app").unwrap_err();
    assert!(err.to_string().contains("no subproject named 'app'"));
}

#[test]
fn test_order_empty_workspace_is_empty() {
    let workspace = Workspace::from_settings(&settings(&[])).unwrap();

    assert_eq!(evaluation_order(&workspace, "app").unwrap(), Vec::<String>::new());
}

#[test]
fn test_order_custom_anchor() {
    let workspace = Workspace::from_settings(&settings(&["core", "shell"])).unwrap();

    let order = evaluation_order(&workspace, "core").unwrap();
    assert_eq!(order, vec!["core", "shell"]);
}
