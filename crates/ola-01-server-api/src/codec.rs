//! Wire codec for channel data.
//!
//! `GET /get_dmx` answers `{"dmx": [...], "error": ""}`. Some servers (and
//! the test fakes) send `dmx` as an object keyed by decimal index instead,
//! so both shapes are accepted.

use serde::Deserialize;
use serde_json::{Number, Value};
use shared_types::{clamp_channel_value, ChannelArray, Snapshot, MIN_CHANNEL_VALUE};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct DmxBody {
    #[serde(default)]
    dmx: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a `/get_dmx` body into a sparse snapshot.
///
/// Non-numeric entries are skipped, integers are clamped to the level range
/// and fractional levels are truncated. Indices past the universe are
/// dropped.
///
/// # Errors
///
/// - [`ApiError::Decode`] for an empty body, invalid JSON or a missing or
///   non-container `dmx` field
/// - [`ApiError::Server`] when the body carries a non-empty `error`
pub fn decode_snapshot(body: &str) -> Result<Snapshot, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::Decode("empty body".to_string()));
    }

    let parsed: DmxBody = serde_json::from_str(body)?;

    if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
        return Err(ApiError::Server(error));
    }

    let mut snapshot = Snapshot::new();
    match parsed.dmx {
        Some(Value::Array(levels)) => {
            for (index, level) in levels.iter().enumerate() {
                if let Some(level) = channel_level(level) {
                    snapshot.insert(index, level);
                }
            }
        }
        Some(Value::Object(levels)) => {
            for (key, level) in &levels {
                let (Ok(index), Some(level)) = (key.trim().parse::<usize>(), channel_level(level))
                else {
                    continue;
                };
                snapshot.insert(index, level);
            }
        }
        Some(other) => {
            return Err(ApiError::Decode(format!(
                "dmx field is {}, expected array or object",
                json_kind(&other)
            )))
        }
        None => return Err(ApiError::Decode("missing dmx field".to_string())),
    }

    Ok(snapshot)
}

/// Encode channel levels for the `d` field of `POST /set_dmx`.
///
/// Trailing zero channels are not sent, but channel 1 always is.
#[must_use]
pub fn encode_dmx(channels: &ChannelArray) -> String {
    let levels = channels.as_slice();
    let used = levels
        .iter()
        .rposition(|level| *level > MIN_CHANNEL_VALUE)
        .map_or(1, |last| last + 1);

    levels[..used]
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn channel_level(value: &Value) -> Option<u8> {
    match value {
        Value::Number(number) => Some(number_level(number)),
        _ => None,
    }
}

fn number_level(number: &Number) -> u8 {
    if let Some(int) = number.as_i64() {
        return clamp_channel_value(int);
    }
    if number.is_u64() {
        // Larger than i64::MAX.
        return u8::MAX;
    }
    match number.as_f64() {
        Some(float) if float.is_finite() => clamp_channel_value(float.trunc() as i64),
        _ => MIN_CHANNEL_VALUE,
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
