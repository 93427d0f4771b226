//! Pretty printing of rewritten documents

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Serialize `value` with `indent_size` spaces per level. Non-ASCII characters are
/// written as-is; only characters JSON requires to be escaped are escaped.
pub fn to_pretty_string(value: &Value, indent_size: u8) -> Result<String, serde_json::Error> {
    let indent = vec![b' '; indent_size as usize];
    let mut buffer = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    String::from_utf8(buffer).map_err(|e| serde::ser::Error::custom(e.to_string()))
}
