//! Structural classification of raw browse responses.

use serde_json::{Map, Value};

use crate::error::{Result, YtMusicError};

/// A recognized response shape, borrowing the fields its builder needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// `header` and `contents`, plus sibling keys.
    Full {
        header: &'a Value,
        contents: &'a Value,
        response_context: Option<&'a Value>,
    },
    /// `header` and `items` (moods and genres inner pages).
    InnerItems { header: &'a Value, items: &'a Value },
    /// `contents` without a header, plus sibling keys.
    Headerless {
        contents: &'a Value,
        response_context: Option<&'a Value>,
    },
    /// A category button (`buttonText`, `clickCommand`).
    Button {
        button_text: &'a Value,
        click_command: &'a Value,
    },
    /// A playlist card.
    Playlist {
        title: &'a Value,
        subtitle: Option<&'a Value>,
        navigation_endpoint: &'a Value,
    },
}

impl Shape<'_> {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Full { .. } => "full",
            Shape::InnerItems { .. } => "inner-items",
            Shape::Headerless { .. } => "headerless",
            Shape::Button { .. } => "button",
            Shape::Playlist { .. } => "playlist",
        }
    }
}

/// Classify a raw response mapping.
///
/// Patterns overlap by key set, so they are tried in priority order and the
/// first match wins.
pub fn classify(raw: &Map<String, Value>) -> Result<Shape<'_>> {
    let header = raw.get("header");
    let contents = raw.get("contents");
    let response_context = raw.get("responseContext");

    if let (Some(header), Some(contents)) = (header, contents) {
        return Ok(Shape::Full {
            header,
            contents,
            response_context,
        });
    }

    if let (Some(header), Some(items)) = (header, raw.get("items")) {
        return Ok(Shape::InnerItems { header, items });
    }

    if let Some(contents) = contents {
        return Ok(Shape::Headerless {
            contents,
            response_context,
        });
    }

    if let (Some(button_text), Some(click_command)) = (raw.get("buttonText"), raw.get("clickCommand")) {
        return Ok(Shape::Button {
            button_text,
            click_command,
        });
    }

    if let (Some(title), Some(navigation_endpoint)) = (raw.get("title"), raw.get("navigationEndpoint")) {
        return Ok(Shape::Playlist {
            title,
            subtitle: raw.get("subtitle").filter(|s| !is_blank(s)),
            navigation_endpoint,
        });
    }

    Err(YtMusicError::UnrecognizedShape(raw.keys().cloned().collect()))
}

/// `null` and empty containers or strings count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
        _ => false,
    }
}
