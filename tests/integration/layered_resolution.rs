//! Integration tests for layered settings resolution

use super::test_utils::SettingsTree;
use dirsettings::layers::{LayeredSettingsLoader, SourceStatus};
use serde_json::json;

#[test]
fn test_nearest_directory_wins() {
    let tree = SettingsTree::new();
    tree.write("Preferences.settings", r#"{"b": 3, "c": 3}"#);
    tree.write("d1/Preferences.settings", r#"{"a": 2, "b": 2}"#);
    tree.write("d1/d0/Preferences.settings", r#"{"a": 1}"#);

    let settings = LayeredSettingsLoader::default()
        .resolve(&tree.path("d1/d0/file.txt"), "")
        .unwrap();

    assert_eq!(settings.get("a"), Some(&json!(1)));
    assert_eq!(settings.get("b"), Some(&json!(2)));
    assert_eq!(settings.get("c"), Some(&json!(3)));
}

#[test]
fn test_syntax_file_overlays_generic_in_same_directory() {
    let tree = SettingsTree::new();
    tree.write("Python.settings", r#"{"tab_size": 4}"#);
    tree.write(
        "Preferences.settings",
        r#"{"tab_size": 2, "font_size": 10}"#,
    );

    let settings = LayeredSettingsLoader::default()
        .resolve(&tree.path("main.py"), "Python")
        .unwrap();

    assert_eq!(settings.get("tab_size"), Some(&json!(4)));
    assert_eq!(settings.get("font_size"), Some(&json!(10)));
}

#[test]
fn test_syntax_file_ignored_for_other_syntax() {
    let tree = SettingsTree::new();
    tree.write("Python.settings", r#"{"tab_size": 4}"#);
    tree.write("Preferences.settings", r#"{"tab_size": 2}"#);

    let settings = LayeredSettingsLoader::default()
        .resolve(&tree.path("main.rs"), "Rust")
        .unwrap();

    assert_eq!(settings.get("tab_size"), Some(&json!(2)));
}

#[test]
fn test_corrupt_file_does_not_stop_the_walk() {
    let tree = SettingsTree::new();
    tree.write("Preferences.settings", r#"{"from_ancestor": true}"#);
    tree.write("inner/Preferences.settings", "{ this is not json");
    tree.write("inner/Python.settings", r#"{"from_syntax": true}"#);

    let loader = LayeredSettingsLoader::default();
    let file = tree.path("inner/main.py");
    let settings = loader.resolve(&file, "Python").unwrap();

    assert_eq!(settings.get("from_ancestor"), Some(&json!(true)));
    assert_eq!(settings.get("from_syntax"), Some(&json!(true)));

    let layers = loader.layers(&file, "Python").unwrap();
    assert!(matches!(layers[0].files[0].status, SourceStatus::Invalid(_)));
    assert_eq!(layers[0].files[1].status, SourceStatus::Loaded);
}

#[test]
fn test_nested_values_replace_wholesale() {
    let tree = SettingsTree::new();
    tree.write(
        "Preferences.settings",
        r#"{"color_scheme": {"name": "dark", "accent": "blue"}}"#,
    );
    tree.write(
        "inner/Preferences.settings",
        r#"{"color_scheme": {"name": "light"}}"#,
    );

    let settings = LayeredSettingsLoader::default()
        .resolve(&tree.path("inner/notes.md"), "")
        .unwrap();

    assert_eq!(settings.get("color_scheme"), Some(&json!({"name": "light"})));
}

#[test]
fn test_equivalent_spellings_resolve_identically() {
    let tree = SettingsTree::new();
    tree.write("a/Preferences.settings", r#"{"k": "a"}"#);
    tree.mkdir("a/b");

    let loader = LayeredSettingsLoader::default();
    let direct = loader.resolve(&tree.path("a/file.txt"), "").unwrap();
    let roundabout = loader.resolve(&tree.path("a/b/../file.txt"), "").unwrap();

    assert_eq!(direct, roundabout);
    assert_eq!(direct.get("k"), Some(&json!("a")));
}

#[test]
fn test_resolve_rereads_files_each_call() {
    let tree = SettingsTree::new();
    tree.write("Preferences.settings", r#"{"tab_size": 2}"#);
    let loader = LayeredSettingsLoader::default();
    let file = tree.path("f.txt");

    assert_eq!(loader.resolve(&file, "").unwrap().get("tab_size"), Some(&json!(2)));
    tree.write("Preferences.settings", r#"{"tab_size": 6}"#);
    assert_eq!(loader.resolve(&file, "").unwrap().get("tab_size"), Some(&json!(6)));
}

#[test]
fn test_comments_and_trailing_commas_in_settings_files() {
    let tree = SettingsTree::new();
    tree.write(
        "Preferences.settings",
        "// Project settings\n{\n    \"rulers\": [80, 120,], // guides\n}\n",
    );

    let settings = LayeredSettingsLoader::default()
        .resolve(&tree.path("f.txt"), "")
        .unwrap();
    assert_eq!(settings.get("rulers"), Some(&json!([80, 120])));
}

#[cfg(unix)]
#[test]
fn test_unsaved_directory_under_symlink_sees_real_ancestors() {
    let tree = SettingsTree::new();
    tree.write("real/Preferences.settings", r#"{"k": 1}"#);
    let target = tree.mkdir("real/sub");
    std::os::unix::fs::symlink(&target, tree.path("link")).unwrap();

    let loader = LayeredSettingsLoader::default();
    let via_link = loader.resolve(&tree.path("link/new/f.txt"), "").unwrap();
    let direct = loader.resolve(&tree.path("real/sub/new/f.txt"), "").unwrap();

    assert_eq!(via_link, direct);
    assert_eq!(via_link.get("k"), Some(&json!(1)));
}
