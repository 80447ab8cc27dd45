//! Rendering of loosely typed reply fields as display text.
//!
//! The backend is free to put any JSON value in a field the page only ever
//! shows as text, so decoding keeps the value and renders it the way a
//! browser would coerce it to a string.

use serde_json::Value;

/// Display text of a field value. `null` counts as absent.
pub(crate) fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(coerce(other)),
    }
}

/// Like [`display_text`], but falsy values (`false`, `0`, `""`) also count
/// as absent.
pub(crate) fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(false) | Value::Null => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) if text.is_empty() => None,
        other => Some(coerce(other)),
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(int), _, _) => int.to_string(),
            (_, Some(uint), _) => uint.to_string(),
            (_, _, Some(float)) if float.fract() == 0.0 && float.abs() < 1e21 => {
                format!("{float:.0}")
            }
            _ => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
