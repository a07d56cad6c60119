//! Canonical settings schema, defaults, and default config filenames.
//!
//! This is static data injected into the resolver and merge logic; nothing
//! here is runtime-mutable.

use serde_json::{Map, Value, json};

/// Name of the tool section in config documents.
///
/// TOML documents nest it under the `tool` namespace (`[tool.tempo]`); JSON
/// and YAML documents carry it as a top-level `tempo` key.
pub const TOOL_NAME: &str = "tempo";

/// Recognized config filenames in priority order.
///
/// The project manifest comes first, then tool-specific files. The literal
/// ordering encodes search priority and must not be reordered.
pub const CONFIG_FILES: [&str; 7] = [
    "pyproject.toml",
    ".tempo.toml",
    ".tempo.json",
    ".tempo.yaml",
    "tempo.toml",
    "tempo.json",
    "tempo.yaml",
];

/// The full defaults table: every recognized setting with its default value.
pub fn default_settings() -> Map<String, Value> {
    let defaults = json!({
        "name": "conventional",
        "version": null,
        "version_provider": "tempo",
        "version_scheme": null,
        "tag_format": "$version",
        "bump_message": null,
        "allow_abort": false,
        "allowed_prefixes": ["Merge", "Revert", "Pull request", "fixup!", "squash!"],
        "version_files": [],
        "style": [],
        "changelog_file": "CHANGELOG.md",
        "changelog_format": null,
        "changelog_incremental": false,
        "changelog_start_rev": null,
        "changelog_merge_prerelease": false,
        "update_changelog_on_bump": false,
        "use_shortcuts": false,
        "major_version_zero": false,
        "pre_bump_hooks": [],
        "post_bump_hooks": [],
        "prerelease_offset": 0,
        "encoding": "utf-8",
        "always_signoff": false,
        "template": null,
        "extras": {},
    });
    match defaults {
        Value::Object(map) => map,
        _ => unreachable!("defaults table is an object literal"),
    }
}

/// Merge a raw tool section over the defaults table.
///
/// Every schema key is present in the result: the section's value when given,
/// the default otherwise. Values are taken as-is; this layer does no type
/// validation. Keys outside the schema are collected into `extras` rather
/// than dropped.
pub fn merge_with_defaults(section: Map<String, Value>) -> Map<String, Value> {
    let mut settings = default_settings();
    let mut extras = Map::new();
    for (key, value) in section {
        if key == "extras" {
            // An explicit extras table seeds the collected unknowns.
            if let Value::Object(given) = value {
                extras.extend(given);
            }
        } else if settings.contains_key(&key) {
            settings.insert(key, value);
        } else {
            extras.insert(key, value);
        }
    }
    settings.insert("extras".to_string(), Value::Object(extras));
    settings
}
