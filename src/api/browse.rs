//! Browse API client.
//!
//! This module provides a client for the YouTube Music browse endpoint
//! (music.youtube.com/youtubei/v1/browse), authenticated with a captured
//! browser session.

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::auth::AuthData;
use super::retry::RetryPolicy;
use crate::converters;
use crate::error::{Result, YtMusicError};
use crate::models::{BrowseRequest, Entity};

/// Browse endpoint.
const BROWSE_URL: &str = "https://music.youtube.com/youtubei/v1/browse";

/// Origin the session cookies belong to.
const ORIGIN_URL: &str = "https://music.youtube.com";

/// Captured headers that reqwest manages itself.
const SKIPPED_HEADERS: [&str; 5] = [
    "content-length",
    "accept-encoding",
    "host",
    "connection",
    "cookie",
];

/// Browse API client.
///
/// Sends the captured request body with a new browse target and returns the
/// raw response, or the normalized entity via [`BrowseApi::browse`].
///
/// # Example
///
/// ```rust,no_run
/// use ytmusic_browse::api::{AuthData, BrowseApi};
/// use ytmusic_browse::models::BrowseRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let auth = AuthData::from_curl_file("curl.txt")?;
///     let api = BrowseApi::new(auth)?;
///     let home = api.browse(&BrowseRequest::with_browse_id("FEmusic_home")).await?;
///     println!("{:?}", home.title());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BrowseApi {
    client: Client,
    auth: Arc<AuthData>,
    policy: RetryPolicy,
}

impl BrowseApi {
    /// Create a client with the default retry policy.
    pub fn new(auth: AuthData) -> Result<Self> {
        Self::with_policy(auth, RetryPolicy::default())
    }

    /// Create a client with an explicit retry policy.
    pub fn with_policy(auth: AuthData, policy: RetryPolicy) -> Result<Self> {
        let origin = Url::parse(ORIGIN_URL)
            .map_err(|e| YtMusicError::ApiError(format!("Invalid origin URL: {}", e)))?;

        let jar = Arc::new(Jar::default());
        for (name, value) in &auth.cookies {
            jar.add_cookie_str(&format!("{}={}", name, value), &origin);
        }

        let client = Client::builder()
            .default_headers(build_headers(&auth))
            .cookie_provider(jar)
            .build()
            .map_err(|e| YtMusicError::ApiError(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            client,
            auth: Arc::new(auth),
            policy,
        })
    }

    /// Get the retry policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Replace the retry policy.
    pub fn set_retry_policy(&mut self, policy: RetryPolicy) {
        self.policy = policy;
    }

    /// Send a browse request, retrying per the policy, and return the raw body.
    pub async fn send_request(&self, request: &BrowseRequest) -> Result<Value> {
        self.policy.run(|| self.post_browse(request)).await
    }

    /// Send a browse request and normalize the response.
    pub async fn browse(&self, request: &BrowseRequest) -> Result<Entity> {
        let raw = self.send_request(request).await?;
        converters::parse_response(&raw)
    }

    async fn post_browse(&self, request: &BrowseRequest) -> Result<Value> {
        let mut body = self.auth.json_data.clone();
        request.apply_to(&mut body);

        debug!("POST {} with {:?}", BROWSE_URL, request);

        let response = self
            .client
            .post(BROWSE_URL)
            .query(&self.auth.params)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Browse request failed (status {}) for {:?}", status, request);
            return Err(YtMusicError::ApiError(format!(
                "Browse request failed with status {}",
                status
            )));
        }

        Ok(response.json().await?)
    }
}

fn build_headers(auth: &AuthData) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (name, value) in &auth.headers {
        if SKIPPED_HEADERS.contains(&name.as_str()) {
            continue;
        }
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!("Skipping invalid captured header {:?}", name),
        }
    }

    headers
}
