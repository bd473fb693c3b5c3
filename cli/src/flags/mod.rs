//! Parsers for the delimited string flags and for JSON spec files.
//!
//! Every parser is a pure function over the raw flag value. Malformed input is
//! always an error naming the offending fragment; nothing is silently dropped.
pub(crate) mod sources;
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppTrustError, Result};

pub use sources::{
    parse_artifacts, parse_builds, parse_packages, parse_release_bundles, parse_source_versions,
};

/// Separates entries in every list-like flag
pub const ENTRY_SEPARATOR: char = ';';
/// Separates the fields of a single source entry
pub const FIELD_SEPARATOR: char = ',';

/// Splits `a; b ;c` into trimmed values. An empty flag yields `None`.
pub fn parse_slice_flag(value: &str) -> Option<Vec<String>> {
    if value.is_empty() {
        return None;
    }
    Some(
        value
            .split(ENTRY_SEPARATOR)
            .map(|v| v.trim().to_string())
            .collect(),
    )
}

/// Parses `key1=value1;key2=value2` into a map, splitting each pair on its
/// first `=`.
pub fn parse_map_flag(value: &str) -> Result<Option<BTreeMap<String, String>>> {
    if value.is_empty() {
        return Ok(None);
    }

    let mut result = BTreeMap::new();
    for pair in value.split(ENTRY_SEPARATOR) {
        let (key, val) = pair.split_once('=').ok_or_else(|| {
            AppTrustError::parse(format!(
                "invalid key-value pair: '{pair}' (expected format key=value)"
            ))
        })?;
        result.insert(key.trim().to_string(), val.trim().to_string());
    }
    Ok(Some(result))
}

/// Parses `key1=v1[,v2,...];key2=v3` into a map of value lists.
///
/// `key=` maps to an empty list rather than being dropped: the server reads
/// an empty list as "clear this property".
pub fn parse_list_properties_flag(value: &str) -> Result<Option<BTreeMap<String, Vec<String>>>> {
    if value.is_empty() {
        return Ok(None);
    }

    let mut result = BTreeMap::new();
    for pair in value.split(ENTRY_SEPARATOR) {
        let (key, values) = pair.trim().split_once('=').ok_or_else(|| {
            AppTrustError::parse(format!(
                "invalid property format: \"{pair}\" (expected key=value1[,value2,...])"
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(AppTrustError::parse("property key cannot be empty"));
        }

        let values = values.trim();
        let values = if values.is_empty() {
            Vec::new()
        } else {
            values
                .split(FIELD_SEPARATOR)
                .map(|v| v.trim().to_string())
                .collect()
        };
        result.insert(key.to_string(), values);
    }
    Ok(Some(result))
}

/// Returns `default` for an empty value, the value itself when it is one of
/// `allowed`, and an error otherwise.
pub fn validate_enum_flag(
    flag_name: &str,
    value: &str,
    default: &str,
    allowed: &[&str],
) -> Result<String> {
    if value.is_empty() {
        return Ok(default.to_string());
    }
    if allowed.contains(&value) {
        return Ok(value.to_string());
    }
    Err(AppTrustError::invalid_flag(format!(
        "invalid value for --{flag_name}: '{value}'. Allowed values: {}",
        allowed.join(", ")
    )))
}

/// Parses `k1=v1<sep>k2=v2` into a map with trimmed keys and values.
pub fn parse_key_value_string(entry: &str, separator: char) -> Result<HashMap<String, String>> {
    let mut result = HashMap::new();
    for pair in entry.split(separator) {
        let (key, value) = pair.trim().split_once('=').ok_or_else(|| {
            AppTrustError::parse(format!(
                "invalid key-value pair: '{}' (expected format key=value)",
                pair.trim()
            ))
        })?;
        result.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(result)
}

pub fn validate_required_fields(map: &HashMap<String, String>, fields: &[&str]) -> Result<()> {
    match fields.iter().find(|field| !map.contains_key(**field)) {
        Some(field) => Err(AppTrustError::parse(format!(
            "missing required field: {field}"
        ))),
        None => Ok(()),
    }
}

/// Parses a `--spec-vars` value. A `;` preceded by a backslash is part of the
/// value; entries without `=` are ignored.
pub fn spec_vars_to_map(raw: &str) -> HashMap<String, String> {
    let mut entries: Vec<String> = Vec::new();
    for candidate in raw.split(ENTRY_SEPARATOR) {
        match entries.last_mut() {
            Some(last) if last.ends_with('\\') => {
                last.pop();
                last.push(ENTRY_SEPARATOR);
                last.push_str(candidate);
            }
            _ => entries.push(candidate.to_string()),
        }
    }

    entries
        .iter()
        .filter_map(|entry| entry.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Substitutes every `${key}` placeholder in `content`.
pub fn replace_vars(content: &str, vars: &HashMap<String, String>) -> String {
    vars.iter().fold(content.to_string(), |acc, (key, value)| {
        acc.replace(&format!("${{{key}}}"), value)
    })
}

/// Reads a JSON spec file, applies `--spec-vars` substitutions and decodes it.
/// Unknown keys in the file are ignored.
pub fn load_spec<T: DeserializeOwned>(path: &Path, spec_vars: Option<&str>) -> Result<T> {
    let mut content = std::fs::read_to_string(path).map_err(|source| AppTrustError::SpecFile {
        path: path.to_path_buf(),
        source,
    })?;

    let vars = spec_vars.map(spec_vars_to_map).unwrap_or_default();
    if !vars.is_empty() {
        content = replace_vars(&content, &vars);
    }

    log::debug!("Loaded spec file {}", path.display());
    Ok(serde_json::from_str(&content)?)
}

/// Parses the boolean spellings accepted on the command line
/// (`1`, `t`, `true`, `0`, `f`, `false` in any of their usual cases).
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
