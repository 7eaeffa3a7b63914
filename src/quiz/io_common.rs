use std::path::Path;

use serde_json::Value as JSValue;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Splits a cell of alternative names. The names are separated by a comma and a space.
pub fn split_alternate_names(cell: &str) -> Vec<String> {
    cell.split(", ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The code of a constituency may be written as a number or as a string.
pub fn read_js_code(x: &Option<JSValue>) -> Option<String> {
    match x {
        Some(JSValue::Number(n)) => Some(n.to_string()),
        Some(JSValue::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
