//! JSON to model converters.
//!
//! This module turns raw browse responses into typed entities. The API
//! serializes the same kind of page in several structurally different ways,
//! so conversion happens in two stages:
//!
//! 1. [`shape::classify`] recognizes which known shape a response has.
//! 2. The matching builder in [`page`] or [`playlist`] extracts the fields,
//!    using [`chain::extract`] to see through single-element wrappers.
//!
//! Nothing in here performs I/O.

pub mod chain;
pub mod page;
pub mod playlist;
pub mod runs;
pub mod shape;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, YtMusicError};
use crate::models::Entity;

pub use chain::{extract, Step, MAX_COLLAPSE_DEPTH};
pub use runs::{join_runs, DEFAULT_SEPARATOR};
pub use shape::{classify, Shape};

use chain::kind_of;

/// Normalize a raw browse response into an entity.
pub fn parse_response(raw: &Value) -> Result<Entity> {
    let raw = raw.as_object().ok_or_else(|| YtMusicError::TypeMismatch {
        expected: "mapping",
        found: kind_of(raw),
    })?;

    let shape = classify(raw)?;
    debug!("Classified response as {} shape", shape.name());

    build(shape)
}

/// Build the entity for an already classified shape.
pub fn build(shape: Shape<'_>) -> Result<Entity> {
    let entity = match shape {
        Shape::Full {
            header,
            contents,
            response_context,
        } => Entity::Page(page::parse_full_page(header, contents, response_context)?),
        Shape::InnerItems { header, items } => {
            Entity::Page(page::parse_inner_items_page(header, items)?)
        }
        Shape::Headerless {
            contents,
            response_context,
        } => Entity::Page(page::parse_headerless_page(contents, response_context)?),
        Shape::Button {
            button_text,
            click_command,
        } => Entity::Page(page::parse_button_page(button_text, click_command)?),
        Shape::Playlist {
            title,
            subtitle,
            navigation_endpoint,
        } => Entity::Playlist(playlist::parse_playlist(
            title,
            subtitle,
            navigation_endpoint,
        )?),
    };

    Ok(entity)
}
