//! Integration tests driving the dirsettings binary

use super::test_utils::SettingsTree;
use std::path::Path;
use std::process::{Command, Output};

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dirsettings"))
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("DIRSETTINGS_LOG")
        .arg("--quiet")
        .arg("--workspace")
        .arg(home)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "dirsettings should succeed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_resolve_json_output() {
    let tree = SettingsTree::new();
    tree.write("repo/Preferences.settings", r#"{"tab_size": 2, "font_size": 10}"#);
    tree.write("repo/src/Python.settings", r#"{"tab_size": 4}"#);
    let file = tree.path("repo/src/app.py");

    let output = run(
        tree.root(),
        &[
            "resolve",
            file.to_str().unwrap(),
            "--syntax-file",
            "Packages/Python/Python.sublime-syntax",
            "--format",
            "json",
        ],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["tab_size"], 4);
    assert_eq!(value["font_size"], 10);
}

#[test]
fn test_resolve_explain_json_names_sources() {
    let tree = SettingsTree::new();
    tree.write("repo/Preferences.settings", r#"{"font_size": 10}"#);
    let file = tree.path("repo/readme.md");

    let output = run(
        tree.root(),
        &["resolve", file.to_str().unwrap(), "--format", "json", "--explain"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["settings"]["font_size"], 10);
    let origin = value["origins"]["font_size"].as_str().unwrap();
    assert!(origin.ends_with("Preferences.settings"));
}

#[test]
fn test_layers_text_lists_found_files() {
    let tree = SettingsTree::new();
    tree.write("repo/Preferences.settings", r#"{"font_size": 10}"#);
    tree.write("repo/inner/Preferences.settings", "{ broken");
    let file = tree.path("repo/inner/readme.md");

    let text = stdout(&run(tree.root(), &["layers", file.to_str().unwrap()]));

    assert!(text.contains("loaded"));
    assert!(text.contains("invalid"));
}

#[test]
fn test_layers_syntax_file_picks_syntax_settings() {
    let tree = SettingsTree::new();
    tree.write("repo/Preferences.settings", r#"{"font_size": 10}"#);
    tree.write("repo/Python.settings", r#"{"tab_size": 4}"#);
    let file = tree.path("repo/app.py");

    let output = run(
        tree.root(),
        &[
            "layers",
            file.to_str().unwrap(),
            "--syntax-file",
            "Packages/Python/Python.sublime-syntax",
            "--format",
            "json",
        ],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    let loaded: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|layer| layer["files"].as_array().unwrap())
        .filter(|file| file["status"] == "loaded")
        .map(|file| file["path"].as_str().unwrap())
        .collect();
    assert!(loaded.iter().any(|path| path.ends_with("Python.settings")));
    assert!(loaded.iter().any(|path| path.ends_with("Preferences.settings")));
}

#[test]
fn test_ancestors_ends_at_root() {
    let tree = SettingsTree::new();
    let dir = tree.mkdir("a/b");

    let text = stdout(&run(tree.root(), &["ancestors", dir.to_str().unwrap()]));
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].ends_with("b"));
    assert_eq!(
        Path::new(lines.last().unwrap()).parent(),
        None,
        "last ancestor should be the filesystem root"
    );
}

#[test]
fn test_create_writes_defaults() {
    let tree = SettingsTree::new();
    tree.mkdir("project");
    let file = tree.path("project/main.rs");

    let text = stdout(&run(tree.root(), &["create", file.to_str().unwrap()]));

    assert!(text.contains("Created default settings file"));
    assert!(tree.path("project/Preferences.settings").is_file());
}

#[test]
fn test_workspace_config_changes_file_names() {
    let tree = SettingsTree::new();
    tree.write(".dirsettings/config.toml", "[resolver]\ngeneric_name = \"Project\"\n");
    tree.write("repo/Project.settings", r#"{"tab_size": 3}"#);
    let file = tree.path("repo/x.txt");

    let output = run(
        tree.root(),
        &["resolve", file.to_str().unwrap(), "--format", "json"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["tab_size"], 3);
}

#[test]
fn test_invalid_format_fails() {
    let tree = SettingsTree::new();
    let file = tree.path("x.txt");

    let output = run(
        tree.root(),
        &["resolve", file.to_str().unwrap(), "--format", "yaml"],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid output format"));
}
