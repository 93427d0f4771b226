//! JSON loading and parsing module

pub mod directory;
pub mod filter;

use crate::error::{ParseError, ParseResult, RewriteError, RewriteResult};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Read a file as UTF-8 text. Invalid UTF-8 surfaces as an I/O error.
pub fn read_json_text(path: &Path) -> RewriteResult<String> {
    std::fs::read_to_string(path).map_err(|e| RewriteError::io(e, path))
}

/// Read and parse a JSON file
pub fn parse_file(path: &Path) -> RewriteResult<Value> {
    let content = read_json_text(path)?;
    parse_from_string(&content).map_err(|e| e.with_path(path.to_path_buf()).into())
}

/// Shape of the outermost JSON value in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl TopLevelKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => TopLevelKind::Object,
            Value::Array(_) => TopLevelKind::Array,
            Value::String(_) => TopLevelKind::String,
            Value::Number(_) => TopLevelKind::Number,
            Value::Bool(_) => TopLevelKind::Bool,
            Value::Null => TopLevelKind::Null,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TopLevelKind::Object)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TopLevelKind::Object => "object",
            TopLevelKind::Array => "array",
            TopLevelKind::String => "string",
            TopLevelKind::Number => "number",
            TopLevelKind::Bool => "bool",
            TopLevelKind::Null => "null",
        }
    }
}

/// Parse JSON from a string
pub fn parse_from_string(content: &str) -> ParseResult<Value> {
    if content.trim().is_empty() {
        return Err(ParseError::new("Empty JSON document".to_string(), None));
    }

    // Nesting depth is bounded by the stack, not by serde_json's 128-level default
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    Value::deserialize(&mut deserializer)
        .and_then(|value| deserializer.end().map(|_| value))
        .map_err(|e| ParseError::new(format!("Invalid JSON: {}", e), extract_error_location(&e)))
}

/// Line and column reported by serde_json, if the error has a position
fn extract_error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    match (error.line(), error.column()) {
        (0, _) => None,
        (line, column) => Some((line, column)),
    }
}
