//! Integration tests for configuration resolution.
//!
//! Exercises the resolver end to end across all three formats: load and
//! merge, set_key round trips, default-search precedence, and the
//! explicit-path failure modes.

use serde_json::{Map, Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tempo::config::{Config, ConfigFormat, SearchPaths, read_cfg_with_paths};
use tempo::defaults::{CONFIG_FILES, default_settings};

const PYPROJECT: &str = r#"
[tool.tempo]
name = "jira"
version = "1.0.0"
version_files = [
    "tempo/version.rs",
    "pyproject.toml"
]
style = [
    ["pointer", "reverse"],
    ["question", "underline"]
]
pre_bump_hooks = [
    "scripts/generate_documentation.sh"
]
post_bump_hooks = ["scripts/slack_notification.sh"]

[tool.black]
line-length = 88
"#;

/// The same section as [`PYPROJECT`], shaped for the JSON/YAML layout.
fn dict_config() -> Value {
    json!({
        "tempo": {
            "name": "jira",
            "version": "1.0.0",
            "version_files": ["tempo/version.rs", "pyproject.toml"],
            "style": [["pointer", "reverse"], ["question", "underline"]],
            "pre_bump_hooks": ["scripts/generate_documentation.sh"],
            "post_bump_hooks": ["scripts/slack_notification.sh"],
        }
    })
}

/// Expected settings after merging the fixture section over the defaults.
fn expected_settings(version: &str) -> Map<String, Value> {
    let mut settings = default_settings();
    settings.insert("name".into(), json!("jira"));
    settings.insert("version".into(), json!(version));
    settings.insert(
        "version_files".into(),
        json!(["tempo/version.rs", "pyproject.toml"]),
    );
    settings.insert(
        "style".into(),
        json!([["pointer", "reverse"], ["question", "underline"]]),
    );
    settings.insert(
        "pre_bump_hooks".into(),
        json!(["scripts/generate_documentation.sh"]),
    );
    settings.insert(
        "post_bump_hooks".into(),
        json!(["scripts/slack_notification.sh"]),
    );
    settings
}

/// Write the fixture config under `filename` in its native format.
fn write_fixture(dir: &Path, filename: &str) {
    let path = dir.join(filename);
    if filename.contains("toml") {
        fs::write(path, PYPROJECT).unwrap();
    } else if filename.contains("json") {
        fs::write(path, serde_json::to_string_pretty(&dict_config()).unwrap()).unwrap();
    } else {
        fs::write(path, serde_yaml::to_string(&dict_config()).unwrap()).unwrap();
    }
}

fn search(temp: &TempDir) -> SearchPaths {
    SearchPaths::with_dirs(vec![temp.path().to_path_buf()])
}

#[test]
fn test_load_conf_every_default_filename() {
    for filename in CONFIG_FILES {
        let temp = TempDir::new().unwrap();
        write_fixture(temp.path(), filename);

        let config = read_cfg_with_paths(None, &search(&temp)).unwrap();
        assert_eq!(
            config.settings(),
            &expected_settings("1.0.0"),
            "loading {filename}"
        );
        assert_eq!(config.path(), Some(temp.path().join(filename).as_path()));
    }
}

#[test]
fn test_set_key_round_trip_every_default_filename() {
    for filename in CONFIG_FILES {
        let temp = TempDir::new().unwrap();
        write_fixture(temp.path(), filename);

        let mut config = read_cfg_with_paths(None, &search(&temp)).unwrap();
        config.set_key("version", json!("2.0.0")).unwrap();

        // A fresh resolution sees the update and nothing else changed.
        let reloaded = read_cfg_with_paths(None, &search(&temp)).unwrap();
        assert_eq!(
            reloaded.settings(),
            &expected_settings("2.0.0"),
            "round trip through {filename}"
        );
    }
}

#[test]
fn test_set_key_preserves_unrelated_toml_sections() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path(), "pyproject.toml");
    let path = temp.path().join("pyproject.toml");

    let mut config = Config::from_file(&path).unwrap();
    config.set_key("version", json!("2.0.0")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[tool.black]"));
    assert!(content.contains("line-length = 88"));
    assert!(content.contains("version = \"2.0.0\""));
}

#[test]
fn test_returns_defaults_when_no_files() {
    let temp = TempDir::new().unwrap();
    let config = read_cfg_with_paths(None, &search(&temp)).unwrap();
    assert_eq!(config.settings(), &default_settings());
    assert!(config.path().is_none());
}

#[test]
fn test_empty_manifest_falls_through_to_dotfile() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pyproject.toml"), "").unwrap();
    write_fixture(temp.path(), ".tempo.toml");

    let config = read_cfg_with_paths(None, &search(&temp)).unwrap();
    assert_eq!(config.settings(), &expected_settings("1.0.0"));
    assert_eq!(config.path(), Some(temp.path().join(".tempo.toml").as_path()));
}

#[test]
fn test_explicit_path_not_exists() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("file.yaml");
    let err = read_cfg_with_paths(Some(&missing), &search(&temp)).unwrap_err();
    assert!(err.to_string().contains("not exists"));
}

#[test]
fn test_explicit_path_empty_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.toml");
    fs::write(&path, "").unwrap();
    let err = read_cfg_with_paths(Some(&path), &search(&temp)).unwrap_err();
    assert!(err.to_string().contains("doesn't contain any configuration"));
    assert!(err.to_string().contains("Fill it"));
}

#[test]
fn test_explicit_path_with_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.toml");
    fs::write(&path, PYPROJECT).unwrap();
    let config = read_cfg_with_paths(Some(&path), &search(&temp)).unwrap();
    assert_eq!(config.settings(), &expected_settings("1.0.0"));
}

#[test]
fn test_invalid_extension_independent_of_contents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.txt");
    fs::write(&path, PYPROJECT).unwrap();
    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("valid extension"));
}

#[test]
fn test_malformed_content_names_file() {
    let temp = TempDir::new().unwrap();
    for (filename, content) in [
        (".tempo.toml", "invalid toml content"),
        (".tempo.json", "invalid json content"),
        (".tempo.yaml", "invalid: .tempo.yaml: content: maybe?"),
    ] {
        let path = temp.path().join(filename);
        fs::write(&path, content).unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains(filename), "error for {filename}");
    }
}

#[test]
fn test_init_empty_config_content_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".tempo.toml");
    ConfigFormat::Toml.init_empty_config_content(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[tool.tempo]\n");
}

#[test]
fn test_init_empty_config_content_toml_with_existing_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".tempo.toml");
    let existing = "[tool.black]\nline-length = 88\n";
    fs::write(&path, existing).unwrap();

    ConfigFormat::Toml.init_empty_config_content(&path).unwrap();
    // Original content verbatim, one blank line, then the stub.
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{existing}\n[tool.tempo]\n")
    );
}

#[test]
fn test_init_empty_config_content_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".tempo.json");
    fs::write(&path, "{}").unwrap();

    ConfigFormat::Json.init_empty_config_content(&path).unwrap();
    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc, json!({"tempo": {}}));
}

#[test]
fn test_init_empty_config_content_json_preserves_existing_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".tempo.json");
    fs::write(&path, r#"{"other": {"a": 1}}"#).unwrap();

    ConfigFormat::Json.init_empty_config_content(&path).unwrap();
    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc, json!({"other": {"a": 1}, "tempo": {}}));
}

#[test]
fn test_init_empty_config_content_yaml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".tempo.yaml");
    fs::write(&path, "{}").unwrap();

    ConfigFormat::Yaml.init_empty_config_content(&path).unwrap();
    let doc: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc, json!({"tempo": {}}));
}

#[test]
fn test_unknown_keys_survive_in_extras() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tempo.toml"),
        "[tool.tempo]\nversion = \"1.0.0\"\njira_url = \"https://x.example\"\n",
    )
    .unwrap();

    let config = read_cfg_with_paths(None, &search(&temp)).unwrap();
    assert_eq!(
        config.get("extras"),
        Some(&json!({"jira_url": "https://x.example"}))
    );
}
