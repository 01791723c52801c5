//! Page model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::common::{endpoint_browse_id, BrowseRequest, Endpoint};
use super::Entity;
use crate::converters;

/// A navigable page of catalog content.
///
/// Items are exposed after one singleton collapse; they are not classified
/// into entities. Use [`Page::entities`] to do that explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Page {
    /// Page or section title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Loosely-structured page items.
    #[serde(default)]
    pub items: Vec<Value>,

    /// Navigation metadata for this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
}

impl Page {
    /// Get the browse id of the page endpoint.
    pub fn browse_id(&self) -> Option<&str> {
        self.endpoint.as_ref().and_then(endpoint_browse_id)
    }

    /// Build the request that fetches this page again.
    pub fn request(&self) -> Option<BrowseRequest> {
        self.endpoint.as_ref().and_then(BrowseRequest::from_endpoint)
    }

    /// Get the number of items on the page.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Classify every mapping item into an entity.
    ///
    /// Items that are not mappings or do not match a known shape are skipped.
    pub fn entities(&self) -> Vec<Entity> {
        self.items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| match converters::parse_response(item) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    debug!("Skipping page item: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_browse_id() {
        let page = Page {
            endpoint: json!({"browse_id": "FEmusic_home"}).as_object().cloned(),
            ..Default::default()
        };
        assert_eq!(page.browse_id(), Some("FEmusic_home"));
        assert_eq!(
            page.request(),
            Some(BrowseRequest::with_browse_id("FEmusic_home"))
        );
    }

    #[test]
    fn test_page_without_endpoint() {
        let page = Page::default();
        assert_eq!(page.browse_id(), None);
        assert_eq!(page.request(), None);
    }

    #[test]
    fn test_entities_skips_unknown_items() {
        let page = Page {
            items: vec![
                json!({
                    "title": {"runs": [{"text": "Chill"}]},
                    "navigationEndpoint": {"browseEndpoint": {"browseId": "VLPL1"}}
                }),
                json!({"thumbnail": {}, "menu": {}}),
                json!(42),
            ],
            ..Default::default()
        };

        let entities = page.entities();
        assert_eq!(entities.len(), 1);
        match &entities[0] {
            Entity::Playlist(playlist) => assert_eq!(playlist.title.as_deref(), Some("Chill")),
            other => panic!("expected playlist, got {:?}", other),
        }
    }
}
