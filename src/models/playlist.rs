//! Playlist summary model.

use serde::{Deserialize, Serialize};

use super::common::{endpoint_browse_id, BrowseRequest, Endpoint};

/// Keys kept from a playlist's navigation endpoint.
pub const PLAYLIST_ENDPOINT_KEYS: [&str; 4] = ["browseId", "params", "videoId", "playlistId"];

/// A playlist card as it appears inside a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Playlist title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Secondary line (author, track count, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Filtered browse or watch endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
}

impl Playlist {
    /// Get the browse id, if the endpoint is a browse target.
    pub fn browse_id(&self) -> Option<&str> {
        self.endpoint.as_ref().and_then(endpoint_browse_id)
    }

    /// Get the video id, if the endpoint is a watch target.
    pub fn video_id(&self) -> Option<&str> {
        self.endpoint
            .as_ref()
            .and_then(|e| e.get("videoId"))
            .and_then(|v| v.as_str())
    }

    /// Build the request that opens this playlist.
    pub fn request(&self) -> Option<BrowseRequest> {
        self.endpoint.as_ref().and_then(BrowseRequest::from_endpoint)
    }
}
