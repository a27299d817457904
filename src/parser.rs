//! JSON log line parser for the `loghue` binary.
//!
//! Turns stdin lines into [`Entry`] values by detecting the level and
//! message fields; every other key becomes a field. Lines that are not a
//! JSON object are passed through untouched.

use crate::config::Config;
use crate::entry::{Entry, Value};
use crate::fields;
use crate::level::Level;

/// The parsed classification of a stdin line.
#[derive(Debug)]
pub enum LineKind {
    /// The line is a JSON object.
    Entry(Entry),
    /// Anything else: printed as-is.
    Raw,
}

/// Parse a single line from stdin into a [`LineKind`].
///
/// JSON arrays and scalars are [`LineKind::Raw`] since they are not log entries.
pub fn parse_line(line: &str, config: &Config) -> LineKind {
    let trimmed = line.trim();
    if !trimmed.starts_with('{') {
        return LineKind::Raw;
    }
    try_parse_json(trimmed, config).map_or(LineKind::Raw, LineKind::Entry)
}

fn try_parse_json(s: &str, config: &Config) -> Option<Entry> {
    let parsed: serde_json::Value = serde_json::from_str(s).ok()?;

    let serde_json::Value::Object(mut map) = parsed else {
        return None;
    };

    let level = extract_level(&mut map, config);
    let message = extract_message(&mut map, config);

    let mut entry = Entry::new(level, message);
    entry.fields = map
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect();
    Some(entry)
}

/// Extract the level using the configured key or the alias table.
///
/// Missing or unrecognized levels render as [`Level::Info`].
fn extract_level(map: &mut serde_json::Map<String, serde_json::Value>, config: &Config) -> Level {
    let raw = match config.level_key {
        Some(ref key) => map.remove(key.as_str()),
        None => fields::find_and_remove(map, fields::LEVEL_ALIASES).map(|(_, v)| v),
    };
    raw.and_then(|v| Level::from_json_value(&v, config.level_aliases.as_ref()))
        .unwrap_or_default()
}

/// Extract the message using the configured key or the alias table.
fn extract_message(map: &mut serde_json::Map<String, serde_json::Value>, config: &Config) -> String {
    let raw = match config.message_key {
        Some(ref key) => map.remove(key.as_str()),
        None => fields::find_and_remove(map, fields::MESSAGE_ALIASES).map(|(_, v)| v),
    };
    match raw {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
