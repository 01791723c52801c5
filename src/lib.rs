//! # ytmusic-browse
//!
//! A Rust library for normalizing YouTube Music browse responses.
//!
//! ## Quick Start
//!
//! Responses can be normalized without any network access:
//!
//! ```rust
//! use serde_json::json;
//! use ytmusic_browse::{parse_response, Entity};
//!
//! let raw = json!({
//!     "header": {"title": {"runs": [{"text": "Home"}]}},
//!     "contents": {"content": {"contents": {"items": [{"a": 1}, {"b": 2}]}}}
//! });
//!
//! match parse_response(&raw).unwrap() {
//!     Entity::Page(page) => assert_eq!(page.title.as_deref(), Some("Home")),
//!     Entity::Playlist(_) => unreachable!(),
//! }
//! ```
//!
//! Fetching pages goes through [`YtMusic`], authenticated with a browser's
//! "Copy as cURL" capture of a browse request:
//!
//! ```rust,no_run
//! use ytmusic_browse::{StartPage, YtMusic};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let yt = YtMusic::new("curl.txt")?;
//!     let library = yt.get_start_page(StartPage::Library).await?;
//!     println!("{:?}", library.title());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`converters`] - Shape classification and entity builders (no I/O)
//! - [`models`] - Page, playlist and track entities
//! - [`api`] - Browse client, captured-session auth and retry policy
//! - [`dump`] - Writing failed payloads to disk for inspection

pub mod api;
pub mod converters;
pub mod dump;
pub mod error;
pub mod models;
mod ytmusic;

// Main interface (recommended)
pub use ytmusic::{StartPage, YtMusic};

// Normalizer
pub use converters::parse_response;

pub use api::{AuthData, BrowseApi, RetryPolicy};
pub use error::YtMusicError;
pub use models::{BrowseRequest, Endpoint, Entity, Page, Playlist, Track};
