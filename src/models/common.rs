//! Common types shared across all models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Navigation descriptor extracted from a response.
///
/// Holds either `{"browse_id": ...}` resolved from the response itself, or the
/// raw keys of a `browseEndpoint`/`watchEndpoint`.
pub type Endpoint = Map<String, Value>;

/// Key used for browse ids resolved by the normalizer.
pub const BROWSE_ID_KEY: &str = "browse_id";

/// Get the browse id of an endpoint, in either of its spellings.
pub fn endpoint_browse_id(endpoint: &Endpoint) -> Option<&str> {
    endpoint
        .get(BROWSE_ID_KEY)
        .or_else(|| endpoint.get("browseId"))
        .and_then(|v| v.as_str())
}

/// Parameters of a browse call.
///
/// Only the fields that are set overwrite the captured request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseRequest {
    /// Target browse id (e.g. `FEmusic_home`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browse_id: Option<String>,

    /// Opaque params token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,

    /// Playlist id for watch targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

impl BrowseRequest {
    /// Create a request for a browse id.
    pub fn with_browse_id<S: Into<String>>(browse_id: S) -> Self {
        Self {
            browse_id: Some(browse_id.into()),
            ..Default::default()
        }
    }

    /// Build a request from an endpoint.
    ///
    /// Returns `None` when the endpoint carries nothing a browse call can use.
    pub fn from_endpoint(endpoint: &Endpoint) -> Option<Self> {
        let get = |key: &str| endpoint.get(key).and_then(|v| v.as_str()).map(String::from);

        let request = Self {
            browse_id: endpoint_browse_id(endpoint).map(String::from),
            params: get("params"),
            playlist_id: get("playlistId"),
        };

        if request.is_empty() {
            None
        } else {
            Some(request)
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.browse_id.is_none() && self.params.is_none() && self.playlist_id.is_none()
    }

    /// Write the set fields into a browse request body.
    pub fn apply_to(&self, body: &mut Map<String, Value>) {
        if let Some(browse_id) = &self.browse_id {
            body.insert("browseId".to_string(), Value::from(browse_id.as_str()));
        }
        if let Some(params) = &self.params {
            body.insert("params".to_string(), Value::from(params.as_str()));
        }
        if let Some(playlist_id) = &self.playlist_id {
            body.insert("playlistId".to_string(), Value::from(playlist_id.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Endpoint {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_endpoint_browse_id_both_spellings() {
        assert_eq!(
            endpoint_browse_id(&map(json!({"browse_id": "FEmusic_home"}))),
            Some("FEmusic_home")
        );
        assert_eq!(
            endpoint_browse_id(&map(json!({"browseId": "VLPL1"}))),
            Some("VLPL1")
        );
        assert_eq!(endpoint_browse_id(&map(json!({"videoId": "x"}))), None);
    }

    #[test]
    fn test_request_from_endpoint() {
        let request =
            BrowseRequest::from_endpoint(&map(json!({"browseId": "B", "params": "P"}))).unwrap();
        assert_eq!(request.browse_id.as_deref(), Some("B"));
        assert_eq!(request.params.as_deref(), Some("P"));
        assert_eq!(request.playlist_id, None);

        assert!(BrowseRequest::from_endpoint(&map(json!({"videoId": "v"}))).is_none());
    }

    #[test]
    fn test_apply_only_set_fields() {
        let mut body = map(json!({"context": {}, "params": "old"}));
        BrowseRequest::with_browse_id("FEmusic_home").apply_to(&mut body);

        assert_eq!(body["browseId"], json!("FEmusic_home"));
        assert_eq!(body["params"], json!("old"));
        assert!(!body.contains_key("playlistId"));
    }
}
