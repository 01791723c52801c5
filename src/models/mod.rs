//! Entity models produced from browse responses.
//!
//! This module contains the page, playlist and track entities and the
//! [`Entity`] union returned by the normalizer.

pub mod common;
pub mod page;
pub mod playlist;
pub mod track;

use serde::{Deserialize, Serialize};

// Re-exports for convenience
pub use common::{BrowseRequest, Endpoint};
pub use page::Page;
pub use playlist::Playlist;
pub use track::Track;

/// A normalized browse response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Page(Page),
    Playlist(Playlist),
}

impl Entity {
    /// Get the entity title.
    pub fn title(&self) -> Option<&str> {
        match self {
            Entity::Page(page) => page.title.as_deref(),
            Entity::Playlist(playlist) => playlist.title.as_deref(),
        }
    }

    /// Get the entity endpoint.
    pub fn endpoint(&self) -> Option<&Endpoint> {
        match self {
            Entity::Page(page) => page.endpoint.as_ref(),
            Entity::Playlist(playlist) => playlist.endpoint.as_ref(),
        }
    }

    /// Get the page, if this is one.
    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Entity::Page(page) => Some(page),
            Entity::Playlist(_) => None,
        }
    }

    /// Get the playlist, if this is one.
    pub fn as_playlist(&self) -> Option<&Playlist> {
        match self {
            Entity::Playlist(playlist) => Some(playlist),
            Entity::Page(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_serializes_with_type_tag() {
        let entity = Entity::Page(Page {
            title: Some("Home".to_string()),
            items: vec![json!(1)],
            endpoint: None,
        });
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({"type": "page", "title": "Home", "items": [1]})
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_entities_are_send_sync() {
        assert_send_sync::<Page>();
        assert_send_sync::<Playlist>();
        assert_send_sync::<Entity>();
    }

    #[test]
    fn test_entity_accessors() {
        let entity = Entity::Playlist(Playlist {
            title: Some("Chill".to_string()),
            ..Default::default()
        });
        assert_eq!(entity.title(), Some("Chill"));
        assert!(entity.as_page().is_none());
        assert!(entity.as_playlist().is_some());
        assert!(entity.endpoint().is_none());
    }
}
