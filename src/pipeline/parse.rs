//! Input parsing stage.
//!
//! Turns JSON documents into sequences of [`Record`]s, either one flat array
//! or an array of sections.

use crate::config::InputConfig;
use crate::error::{ErrorContext, InputErrorKind, Result, UpdaterError};
use crate::model::Record;
use serde_json::Value;
use std::path::Path;

/// Sequences read from one input file.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSequences {
    /// A single array of elements
    Flat(Vec<Record>),
    /// An array of sections, each an array of elements
    Sectioned(Vec<Vec<Record>>),
}

impl ParsedSequences {
    /// Total number of elements across all sections.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            Self::Flat(records) => records.len(),
            Self::Sectioned(sections) => sections.iter().map(Vec::len).sum(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn into_array(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(UpdaterError::input(
            "top-level value",
            InputErrorKind::NotAnArray {
                found: json_kind(&other).to_string(),
            },
        )),
    }
}

fn into_records(items: Vec<Value>, key: Option<&str>) -> Result<Vec<Record>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            Record::from_value(value, key).ok_or_else(|| {
                UpdaterError::missing_identity_key(key.unwrap_or_default(), index)
            })
        })
        .collect()
}

/// Parse a JSON array of elements.
pub fn parse_elements_str(content: &str, key: Option<&str>) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(content)?;
    into_records(into_array(value)?, key)
}

/// Parse a JSON array of sections.
pub fn parse_sections_str(content: &str, key: Option<&str>) -> Result<Vec<Vec<Record>>> {
    let value: Value = serde_json::from_str(content)?;
    into_array(value)?
        .into_iter()
        .enumerate()
        .map(|(section, value)| match value {
            Value::Array(items) => {
                into_records(items, key).with_context(|| format!("section {section}"))
            }
            _ => Err(UpdaterError::input(
                format!("section {section}"),
                InputErrorKind::NotASectionList,
            )),
        })
        .collect()
}

/// Parse a document according to the input configuration.
pub fn parse_sequences_str(content: &str, input: &InputConfig) -> Result<ParsedSequences> {
    let key = input.identity_key.as_deref();
    if input.sectioned {
        parse_sections_str(content, key).map(ParsedSequences::Sectioned)
    } else {
        parse_elements_str(content, key).map(ParsedSequences::Flat)
    }
}

/// Read and parse a sequence file with context for error messages.
pub fn parse_sequences_with_context(
    path: &Path,
    input: &InputConfig,
    quiet: bool,
) -> Result<ParsedSequences> {
    if !quiet {
        tracing::info!("Reading sequences: {:?}", path);
    }

    let content = std::fs::read_to_string(path).map_err(|e| UpdaterError::io(path, e))?;
    let parsed = parse_sequences_str(&content, input)
        .with_context(|| format!("parsing {}", path.display()))?;

    if !quiet {
        tracing::info!("Parsed {} elements", parsed.element_count());
    }

    Ok(parsed)
}
