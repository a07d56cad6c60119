//! TOML adapter.
//!
//! Reads the `[tool.tempo]` table out of a project manifest. Updates patch
//! only the relevant entry textually, so unrelated sections and formatting
//! survive byte-for-byte; the empty-section stub is likewise a plain textual
//! append.

use crate::defaults::TOOL_NAME;
use crate::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

fn section_header() -> String {
    format!("[tool.{TOOL_NAME}]")
}

/// Parse a whole TOML document. Empty input is an empty document.
pub(super) fn parse(data: &str, path: &Path) -> ConfigResult<toml::Table> {
    toml::from_str(data).map_err(|err| ConfigError::malformed(path, err))
}

/// Extract the tool section, or an empty map when it is absent.
pub(super) fn extract_section(data: &str, path: &Path) -> ConfigResult<Map<String, Value>> {
    let doc = parse(data, path)?;
    let Some(section) = doc.get("tool").and_then(|tool| tool.get(TOOL_NAME)) else {
        return Ok(Map::new());
    };
    let value = serde_json::to_value(section).map_err(|err| ConfigError::malformed(path, err))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Append an empty `[tool.tempo]` stub after any existing content.
///
/// Exactly one blank line separates the stub from non-empty existing content;
/// a file already ending in the header is left alone.
pub(super) fn init_empty_config_content(path: &Path) -> ConfigResult<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let header = section_header();
    let mut updated = existing;
    if updated.is_empty() {
        updated.push_str(&header);
        updated.push('\n');
    } else if !updated.trim_end().ends_with(&header) {
        if !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push('\n');
        updated.push_str(&header);
        updated.push('\n');
    }

    fs::write(path, updated)?;
    Ok(())
}

/// Rewrite one `key = value` entry inside the tool section of the file.
pub(super) fn set_key(path: &Path, key: &str, value: &Value) -> ConfigResult<()> {
    let content = fs::read_to_string(path)?;
    // Refuse to patch a document that does not parse.
    parse(&content, path)?;

    let rendered = toml::Value::try_from(value)
        .map_err(|err| ConfigError::malformed(path, err))?
        .to_string();
    let patched = patch_section(&content, key, &rendered);
    fs::write(path, patched)?;
    Ok(())
}

/// Replace or insert `key = value` within the tool section, touching nothing
/// else in the document.
fn patch_section(content: &str, key: &str, rendered: &str) -> String {
    let header = section_header();
    let entry = format!("{key} = {rendered}");
    let lines: Vec<&str> = content.lines().collect();

    let Some(header_idx) = lines.iter().position(|line| line.trim() == header) else {
        // No section yet: append one, stub-style.
        let mut out = String::from(content);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&header);
        out.push('\n');
        out.push_str(&entry);
        out.push('\n');
        return out;
    };

    let mut out: Vec<String> = lines[..=header_idx].iter().map(|s| (*s).to_string()).collect();
    let mut replaced = false;
    let mut in_section = true;
    // Open-bracket depth of the entry currently being copied or skipped.
    let mut depth: i32 = 0;
    let mut skipping = false;

    for line in &lines[header_idx + 1..] {
        if in_section && depth == 0 && !skipping && is_table_header(line.trim()) {
            in_section = false;
        }
        if !in_section {
            out.push((*line).to_string());
            continue;
        }

        if skipping {
            // Continuation lines of the entry being replaced.
            depth += bracket_delta(line);
            if depth <= 0 {
                skipping = false;
                depth = 0;
            }
            continue;
        }

        if depth == 0
            && !replaced
            && let Some(eq) = line.find('=')
            && line[..eq].trim() == key
        {
            out.push(entry.clone());
            replaced = true;
            let delta = bracket_delta(line);
            if delta > 0 {
                skipping = true;
                depth = delta;
            }
            continue;
        }

        depth += bracket_delta(line);
        if depth < 0 {
            depth = 0;
        }
        out.push((*line).to_string());
    }

    if !replaced {
        out.insert(header_idx + 1, entry);
    }

    let mut result = out.join("\n");
    if content.is_empty() || content.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// A table (or array-of-tables) header line such as `[tool.other]`.
fn is_table_header(trimmed: &str) -> bool {
    trimmed.starts_with('[') && trimmed.ends_with(']') && !trimmed.contains('=')
}

/// Net count of brackets opened on this line, ignoring string contents and
/// comments. Multi-line basic strings are not tracked.
fn bracket_delta(line: &str) -> i32 {
    let mut delta = 0;
    let mut chars = line.chars();
    let mut in_basic = false;
    let mut in_literal = false;
    while let Some(c) = chars.next() {
        if in_basic {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => in_basic = false,
                _ => {}
            }
        } else if in_literal {
            if c == '\'' {
                in_literal = false;
            }
        } else {
            match c {
                '"' => in_basic = true,
                '\'' => in_literal = true,
                '#' => break,
                '[' | '{' => delta += 1,
                ']' | '}' => delta -= 1,
                _ => {}
            }
        }
    }
    delta
}
