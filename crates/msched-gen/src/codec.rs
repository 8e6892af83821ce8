//! JSON and YAML encodings of catalogs, configurations and run plans.
//!
//! Decode failures carry the offending line and column so a misspelled
//! configuration file can be located without rereading it by hand.

use std::fmt::Display;

use msched_core::errors::{ErrorInfo, MschedError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

fn codec_error(code: &str, format: &str, err: impl Display) -> ErrorInfo {
    ErrorInfo::new(code, err.to_string()).with_context("format", format)
}

fn at_location(info: ErrorInfo, line: usize, column: usize) -> MschedError {
    MschedError::Serde(
        info.with_context("line", line.to_string())
            .with_context("column", column.to_string()),
    )
}

/// Sorts object keys at every depth so equal values encode to equal bytes.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Compact JSON with sorted keys, the form that run plans are hashed and
/// written in.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, MschedError> {
    let value = serde_json::to_value(value)
        .map_err(|err| MschedError::Serde(codec_error("json-encode", "json", err)))?;
    serde_json::to_vec(&sort_keys(value))
        .map_err(|err| MschedError::Serde(codec_error("json-encode", "json", err)))
}

pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MschedError> {
    serde_json::from_slice(data).map_err(|err| {
        let (line, column) = (err.line(), err.column());
        at_location(codec_error("json-decode", "json", err), line, column)
    })
}

/// Human facing YAML, used for configuration files and the `count` report.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, MschedError> {
    serde_yaml::to_string(value)
        .map_err(|err| MschedError::Serde(codec_error("yaml-encode", "yaml", err)))
}

pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MschedError> {
    serde_yaml::from_slice(data).map_err(|err| match err.location() {
        Some(location) => at_location(
            codec_error("yaml-decode", "yaml", &err),
            location.line(),
            location.column(),
        ),
        None => MschedError::Serde(codec_error("yaml-decode", "yaml", err)),
    })
}
