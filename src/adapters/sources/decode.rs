//! Body decoders shared by the JSON-backed sources.
//!
//! `strict` decodes the whole document into `T`. `lenient_list` decodes a
//! JSON array item by item and drops the items that do not decode, so one
//! bad record does not cost the stage its other records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ports::SourceError;

/// Turns a response or file body into records.
pub type Decoder<T> = fn(&[u8]) -> Result<T, SourceError>;

/// Decodes the whole body into `T`.
pub fn strict<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SourceError> {
    serde_json::from_slice(bytes).map_err(|e| SourceError::parse(e.to_string()))
}

/// Decodes a JSON array, skipping items that do not decode into `T`.
///
/// # Errors
///
/// `Parse` if the body is not a JSON array, or if it has items and none of
/// them decode.
pub fn lenient_list<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, SourceError> {
    let items: Vec<Value> =
        serde_json::from_slice(bytes).map_err(|e| SourceError::parse(e.to_string()))?;
    let total = items.len();

    let mut last_error = None;
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping record that failed to decode");
                last_error = Some(e.to_string());
                None
            }
        })
        .collect();

    match last_error {
        Some(error) if records.is_empty() => Err(SourceError::parse(format!(
            "none of {} records decoded: {}",
            total, error
        ))),
        _ => Ok(records),
    }
}
