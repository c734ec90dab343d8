//! Lenient decoding for values the API stores inconsistently

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number, bool or null and keep it as text
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => return Err(D::Error::custom(format!("expected text, found {other}"))),
    })
}

/// Like [`string`] but empty values become `None`
pub fn optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    string(deserializer).map(|text| Some(text).filter(|text| !text.is_empty()))
}

/// Counts sometimes come back as strings from earlier form submissions
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let text = string(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<u32>()
        .or_else(|_| {
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n as u32)
                .ok_or(())
        })
        .map_err(|()| D::Error::custom(format!("expected a count, found {text:?}")))
}
