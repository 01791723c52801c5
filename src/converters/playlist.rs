//! Playlist card construction.

use serde_json::Value;

use super::chain::kind_of;
use super::runs::{join_runs_value, DEFAULT_SEPARATOR};
use crate::error::{Result, YtMusicError};
use crate::models::playlist::PLAYLIST_ENDPOINT_KEYS;
use crate::models::{Endpoint, Playlist};

/// Build a playlist from its title, optional subtitle and navigation endpoint.
pub fn parse_playlist(
    title: &Value,
    subtitle: Option<&Value>,
    navigation_endpoint: &Value,
) -> Result<Playlist> {
    let title = join_runs_value(runs_of(title)?, DEFAULT_SEPARATOR)?;

    let subtitle = subtitle
        .map(|s| join_runs_value(runs_of(s)?, DEFAULT_SEPARATOR))
        .transpose()?;

    let endpoint = ["browseEndpoint", "watchEndpoint"]
        .iter()
        .filter_map(|key| navigation_endpoint.get(*key))
        .find_map(|target| target.as_object().filter(|t| !t.is_empty()))
        .map(filter_endpoint);

    Ok(Playlist {
        title: Some(title),
        subtitle,
        endpoint,
    })
}

/// Keep only the endpoint keys a browse or watch call uses.
pub fn filter_endpoint(endpoint: &Endpoint) -> Endpoint {
    endpoint
        .iter()
        .filter(|(key, _)| PLAYLIST_ENDPOINT_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn runs_of(text: &Value) -> Result<&Value> {
    match text {
        Value::Object(map) => map
            .get("runs")
            .ok_or_else(|| YtMusicError::MissingField("runs".to_string())),
        other => Err(YtMusicError::TypeMismatch {
            expected: "mapping",
            found: kind_of(other),
        }),
    }
}
