//! Text runs.
//!
//! The API splits displayed text into "runs", small objects each carrying a
//! `text` field plus styling or navigation.

use serde_json::Value;

use super::chain::kind_of;
use crate::error::{Result, YtMusicError};

/// Separator used between runs unless a caller asks otherwise.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Join the `text` of every run with a separator.
pub fn join_runs(runs: &[Value], separator: &str) -> Result<String> {
    let texts = runs
        .iter()
        .map(|run| match run.get("text") {
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(other) => Err(YtMusicError::TypeMismatch {
                expected: "string",
                found: kind_of(other),
            }),
            None => Err(YtMusicError::MissingField("text".to_string())),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(texts.join(separator))
}

/// Join runs held by a JSON value, which must be a list.
pub fn join_runs_value(runs: &Value, separator: &str) -> Result<String> {
    match runs {
        Value::Array(runs) => join_runs(runs, separator),
        other => Err(YtMusicError::TypeMismatch {
            expected: "list",
            found: kind_of(other),
        }),
    }
}

/// Read display text from a value.
///
/// Plain strings are used as-is; a list of runs, or a mapping holding `runs`,
/// is joined with [`DEFAULT_SEPARATOR`].
pub fn text_of(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Array(runs) => join_runs(runs, DEFAULT_SEPARATOR),
        Value::Object(map) => match map.get("runs") {
            Some(runs) => join_runs_value(runs, DEFAULT_SEPARATOR),
            None => Err(YtMusicError::MissingField("runs".to_string())),
        },
        other => Err(YtMusicError::TypeMismatch {
            expected: "string",
            found: kind_of(other),
        }),
    }
}
