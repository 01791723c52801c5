//! Unified YouTube Music interface.
//!
//! This module provides a high-level interface for fetching catalog pages
//! and following their navigation endpoints.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::api::{AuthData, BrowseApi, RetryPolicy};
use crate::error::{Result, YtMusicError};
use crate::models::{BrowseRequest, Endpoint, Entity};

/// Entry points of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPage {
    /// Home feed.
    #[default]
    Home,
    /// Library landing page.
    Library,
    /// Listen again shelf.
    ListenAgain,
    /// Mixed for you.
    MixedForYou,
    /// Moods and genres categories.
    MoodsAndGenres,
    /// New album releases.
    NewReleasesAlbums,
}

impl StartPage {
    /// Get the browse id of this page.
    pub fn browse_id(&self) -> &'static str {
        match self {
            StartPage::Home => "FEmusic_home",
            StartPage::Library => "FEmusic_library_landing",
            StartPage::ListenAgain => "FEmusic_listen_again",
            StartPage::MixedForYou => "FEmusic_mixed_for_you",
            StartPage::MoodsAndGenres => "FEmusic_moods_and_genres",
            StartPage::NewReleasesAlbums => "FEmusic_new_releases_albums",
        }
    }

    /// Get the request that fetches this page.
    pub fn request(&self) -> BrowseRequest {
        BrowseRequest::with_browse_id(self.browse_id())
    }

    /// Get all start pages.
    pub fn all() -> &'static [StartPage] {
        &[
            StartPage::Home,
            StartPage::Library,
            StartPage::ListenAgain,
            StartPage::MixedForYou,
            StartPage::MoodsAndGenres,
            StartPage::NewReleasesAlbums,
        ]
    }
}

/// Main YouTube Music interface.
///
/// # Example
///
/// ```rust,no_run
/// use ytmusic_browse::{StartPage, YtMusic};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let yt = YtMusic::new("curl.txt")?;
///
///     let home = yt.get_start_page(StartPage::Home).await?;
///     println!("{:?}", home.title());
///
///     // Follow the first playlist card on the page
///     if let Some(page) = home.as_page() {
///         for entity in page.entities() {
///             if let Some(endpoint) = entity.endpoint() {
///                 let next = yt.browse(endpoint).await?;
///                 println!("{:?}", next.title());
///                 break;
///             }
///         }
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct YtMusic {
    api: BrowseApi,
}

impl YtMusic {
    /// Create an instance from a captured curl request file.
    pub fn new<P: AsRef<Path>>(curl_file: P) -> Result<Self> {
        let auth = AuthData::from_curl_file(curl_file)?;
        Self::from_auth(auth)
    }

    /// Create an instance from already parsed auth data.
    pub fn from_auth(auth: AuthData) -> Result<Self> {
        info!("Session loaded with {} cookies", auth.cookies.len());
        Ok(Self {
            api: BrowseApi::new(auth)?,
        })
    }

    /// Set the retry policy for browse calls.
    pub fn set_retry_policy(&mut self, policy: RetryPolicy) {
        self.api.set_retry_policy(policy);
    }

    /// Get the retry policy for browse calls.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.api.retry_policy()
    }

    /// Get the underlying API client.
    pub fn api(&self) -> &BrowseApi {
        &self.api
    }

    /// Fetch and normalize a start page.
    pub async fn get_start_page(&self, page: StartPage) -> Result<Entity> {
        self.api.browse(&page.request()).await
    }

    /// Follow an endpoint taken from a page or playlist.
    pub async fn browse(&self, endpoint: &Endpoint) -> Result<Entity> {
        let request = BrowseRequest::from_endpoint(endpoint)
            .ok_or_else(|| YtMusicError::MissingField("browseId".to_string()))?;
        self.api.browse(&request).await
    }

    /// Fetch a raw browse response without normalizing it.
    pub async fn browse_raw(&self, request: &BrowseRequest) -> Result<Value> {
        self.api.send_request(request).await
    }
}
