//! YAML adapter.
//!
//! Same top-level `tempo` key layout as JSON; documents deserialize into
//! `serde_json::Value` so the section feeds the common merge path directly.
//! Updates re-serialize the whole document.

use crate::defaults::TOOL_NAME;
use crate::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parse a whole YAML document. Empty input (or a bare `---`) is an empty
/// document.
pub(super) fn parse(data: &str, path: &Path) -> ConfigResult<Value> {
    let doc: Value =
        serde_yaml::from_str(data).map_err(|err| ConfigError::malformed(path, err))?;
    match doc {
        Value::Null => Ok(Value::Object(Map::new())),
        other => Ok(other),
    }
}

/// Extract the tool section, or an empty map when it is absent.
pub(super) fn extract_section(doc: &Value) -> Map<String, Value> {
    match doc.get(TOOL_NAME) {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

/// Insert an empty tool section into the document, keeping existing keys.
pub(super) fn init_empty_config_content(path: &Path) -> ConfigResult<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };
    let mut doc = parse(&existing, path)?;
    let Value::Object(map) = &mut doc else {
        return Err(ConfigError::malformed(path, "expected a top-level mapping"));
    };
    map.entry(TOOL_NAME.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    write_document(path, &doc)
}

/// Set one key inside the tool section and rewrite the document.
pub(super) fn set_key(path: &Path, key: &str, value: &Value) -> ConfigResult<()> {
    let existing = fs::read_to_string(path)?;
    let mut doc = parse(&existing, path)?;
    let Value::Object(map) = &mut doc else {
        return Err(ConfigError::malformed(path, "expected a top-level mapping"));
    };
    let section = map
        .entry(TOOL_NAME.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    match section {
        Value::Object(section) => {
            section.insert(key.to_string(), value.clone());
        }
        other => {
            let mut section = Map::new();
            section.insert(key.to_string(), value.clone());
            *other = Value::Object(section);
        }
    }
    write_document(path, &doc)
}

fn write_document(path: &Path, doc: &Value) -> ConfigResult<()> {
    let serialized =
        serde_yaml::to_string(doc).map_err(|err| ConfigError::malformed(path, err))?;
    fs::write(path, serialized)?;
    Ok(())
}
