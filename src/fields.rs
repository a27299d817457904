//! Field ordering and the alias tables used to pick fields out of JSON input.

use std::collections::HashMap;

use crate::entry::Value;

/// Known aliases for level/severity fields in JSON input. First match wins.
pub const LEVEL_ALIASES: &[&str] = &["level", "severity", "loglevel", "log_level", "lvl"];

/// Known aliases for message fields in JSON input. First match wins.
pub const MESSAGE_ALIASES: &[&str] = &["msg", "message", "text", "event"];

/// A borrowed `(name, value)` pair, alive only while one line is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a Value,
}

/// Order an entry's fields by name, ascending, byte-wise.
///
/// Hash maps iterate in an unspecified order; sorting makes the rendered line
/// identical across calls and runs. Names are unique keys, so no tie-break.
pub fn sorted(fields: &HashMap<String, Value>) -> Vec<Field<'_>> {
    let mut ordered: Vec<Field<'_>> = fields
        .iter()
        .map(|(name, value)| Field {
            name: name.as_str(),
            value,
        })
        .collect();
    ordered.sort_unstable_by(|a, b| a.name.cmp(b.name));
    ordered
}

/// Look up the first matching alias key in a JSON object.
///
/// Returns the key name and removes it from the map if found.
pub fn find_and_remove(
    map: &mut serde_json::Map<String, serde_json::Value>,
    aliases: &[&str],
) -> Option<(String, serde_json::Value)> {
    for &alias in aliases {
        if let Some(val) = map.remove(alias) {
            return Some((alias.to_string(), val));
        }
    }
    None
}
