//! Chain extraction over single-element wrappers.
//!
//! Browse responses bury content under a variable number of containers that
//! hold exactly one value. [`extract`] unwraps those layers ("singleton
//! collapse") and walks an ordered chain of keys and indices through them.

use serde_json::Value;

use crate::error::{Result, YtMusicError};

/// Upper bound on unwrap steps in a single collapse.
pub const MAX_COLLAPSE_DEPTH: usize = 64;

/// One step of an extraction chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Mapping lookup.
    Key(&'a str),
    /// List lookup.
    Index(usize),
}

impl<'a> From<&'a str> for Step<'a> {
    fn from(key: &'a str) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step<'_> {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

impl std::fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Key(key) => write!(f, "key {:?}", key),
            Step::Index(index) => write!(f, "index {}", index),
        }
    }
}

/// Name of a value's kind, for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Extract a value, collapsing single-element wrappers along the way.
///
/// Without a chain (or with an empty one) the data is collapsed until it is
/// no longer a one-element container. With a chain, every step first collapses
/// the current value, stopping early at a one-entry mapping that already holds
/// the step's key, and then indexes into it.
pub fn extract<'a>(data: &'a Value, chain: Option<&[Step<'_>]>) -> Result<&'a Value> {
    match chain {
        Some(steps) if !steps.is_empty() => steps.iter().try_fold(data, |current, step| {
            let collapsed = collapse_towards(current, Some(step))?;
            index(collapsed, step)
        }),
        _ => collapse(data),
    }
}

/// Collapse single-element wrappers with no target key.
pub fn collapse(data: &Value) -> Result<&Value> {
    collapse_towards(data, None)
}

fn collapse_towards<'a>(mut data: &'a Value, target: Option<&Step<'_>>) -> Result<&'a Value> {
    for _ in 0..MAX_COLLAPSE_DEPTH {
        data = match data {
            Value::Array(items) if items.len() == 1 => &items[0],
            Value::Object(map) if map.len() == 1 => {
                if let Some(Step::Key(key)) = target {
                    if map.contains_key(*key) {
                        return Ok(data);
                    }
                }
                match map.values().next() {
                    Some(value) => value,
                    None => return Ok(data),
                }
            }
            _ => return Ok(data),
        };
    }

    // The guard only trips if one more unwrap was still possible.
    match data {
        Value::Array(items) if items.len() == 1 => {
            Err(YtMusicError::MalformedInput(MAX_COLLAPSE_DEPTH))
        }
        Value::Object(map) if map.len() == 1 => match target {
            Some(Step::Key(key)) if map.contains_key(*key) => Ok(data),
            _ => Err(YtMusicError::MalformedInput(MAX_COLLAPSE_DEPTH)),
        },
        _ => Ok(data),
    }
}

fn index<'a>(data: &'a Value, step: &Step<'_>) -> Result<&'a Value> {
    match (data, step) {
        (Value::Object(map), Step::Key(key)) => map
            .get(*key)
            .ok_or_else(|| YtMusicError::ShapeMismatch(step.to_string())),
        (Value::Array(items), Step::Index(i)) => items
            .get(*i)
            .ok_or_else(|| YtMusicError::ShapeMismatch(step.to_string())),
        (Value::Object(_), Step::Index(_)) => Err(YtMusicError::TypeMismatch {
            expected: "list",
            found: "mapping",
        }),
        (other, Step::Key(_)) => Err(YtMusicError::TypeMismatch {
            expected: "mapping",
            found: kind_of(other),
        }),
        (other, Step::Index(_)) => Err(YtMusicError::TypeMismatch {
            expected: "list",
            found: kind_of(other),
        }),
    }
}
