//! Integration tests for creating a directory's generic settings file

use super::test_utils::SettingsTree;
use dirsettings::init::{create_preferences_file, CreateOutcome};
use dirsettings::layers::{LayeredSettingsLoader, SettingsFileNames};
use serde_json::json;
use std::fs;

#[test]
fn test_created_defaults_are_picked_up_by_resolution() {
    let tree = SettingsTree::new();
    let file = tree.path("project/src/lib.rs");
    tree.mkdir("project/src");

    let outcome =
        create_preferences_file(&file, None, &SettingsFileNames::default()).unwrap();
    assert!(matches!(outcome, CreateOutcome::CreatedDefault { .. }));

    let settings = LayeredSettingsLoader::default().resolve(&file, "").unwrap();
    assert_eq!(settings.get("tab_size"), Some(&json!(4)));
    assert_eq!(settings.get("translate_tabs_to_spaces"), Some(&json!(true)));
}

#[test]
fn test_second_create_reports_existing_file() {
    let tree = SettingsTree::new();
    let user = tree.write("user/Preferences.settings", r#"{"font_size": 16}"#);
    let file = tree.path("work/notes.md");
    tree.mkdir("work");

    let first =
        create_preferences_file(&file, Some(&user), &SettingsFileNames::default()).unwrap();
    let second =
        create_preferences_file(&file, Some(&user), &SettingsFileNames::default()).unwrap();

    assert!(matches!(first, CreateOutcome::Copied { .. }));
    assert_eq!(
        second,
        CreateOutcome::AlreadyExists {
            path: first.path().to_path_buf()
        }
    );
    assert_eq!(
        fs::read_to_string(first.path()).unwrap(),
        r#"{"font_size": 16}"#
    );
}
