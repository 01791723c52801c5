//! Transport for the YouTube Music browse API.
//!
//! This module provides:
//! - [`AuthData`]: session material parsed from a captured curl request
//! - [`BrowseApi`]: the browse endpoint client
//! - [`RetryPolicy`]: explicit retry configuration for network calls

pub mod auth;
pub mod browse;
pub mod retry;

pub use auth::AuthData;
pub use browse::BrowseApi;
pub use retry::RetryPolicy;
