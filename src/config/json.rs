//! JSON adapter.
//!
//! The tool section lives at the document's top-level `tempo` key. Updates
//! re-serialize the whole document (pretty, 2-space indent).

use crate::defaults::TOOL_NAME;
use crate::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parse a whole JSON document. Empty input is an empty document.
pub(super) fn parse(data: &str, path: &Path) -> ConfigResult<Value> {
    if data.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(data).map_err(|err| ConfigError::malformed(path, err))
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
        return Err(ConfigError::malformed(path, "expected a top-level object"));
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
        return Err(ConfigError::malformed(path, "expected a top-level object"));
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
    let mut serialized =
        serde_json::to_string_pretty(doc).map_err(|err| ConfigError::malformed(path, err))?;
    serialized.push('\n');
    fs::write(path, serialized)?;
    Ok(())
}
