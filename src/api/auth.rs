//! Session data captured from a browser request.
//!
//! The browse API needs the cookies, headers and request body of a logged-in
//! web session. The simplest way to get them is the browser's "Copy as cURL"
//! on any `youtubei/v1/browse` request; this module parses that capture.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, YtMusicError};

/// Authentication material for browse requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthData {
    /// Session cookies.
    pub cookies: BTreeMap<String, String>,
    /// Request headers (lower-cased names), without the cookie header.
    pub headers: Vec<(String, String)>,
    /// Query parameters of the captured URL.
    pub params: BTreeMap<String, String>,
    /// Captured request body, minus its browse id.
    pub json_data: Map<String, Value>,
}

impl AuthData {
    /// Load a curl capture from a file.
    pub fn from_curl_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading curl capture from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse the text of a curl capture.
    pub fn parse(curl: &str) -> Result<Self> {
        // Join shell line continuations before tokenizing.
        let joined = curl.replace("\\\r\n", " ").replace("\\\n", " ");
        let tokens = shlex::split(&joined)
            .ok_or_else(|| invalid("unbalanced quoting in curl command"))?;

        let mut url = None;
        let mut body = None;
        let mut cookie_line = None;
        let mut headers = Vec::new();

        let mut tokens = tokens.into_iter();
        while let Some(token) = tokens.next() {
            match token.as_str() {
                "-H" | "--header" => {
                    let header = tokens.next().ok_or_else(|| invalid("dangling -H flag"))?;
                    match header.split_once(':') {
                        Some((name, value)) => {
                            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()))
                        }
                        None => warn!("Ignoring malformed header {:?}", header),
                    }
                }
                "-b" | "--cookie" => cookie_line = tokens.next(),
                "-d" | "--data" | "--data-raw" | "--data-binary" => body = tokens.next(),
                "-X" | "--request" | "-A" | "--user-agent" => {
                    tokens.next();
                }
                t if t.starts_with("https://") || t.starts_with("http://") => url = Some(t.to_string()),
                _ => {}
            }
        }

        let url = url.ok_or_else(|| invalid("no request URL"))?;
        let params = parse_query(&url)?;

        let body = body.ok_or_else(|| invalid("no request body"))?;
        // Bash ANSI-C quoting ($'...') leaves a leading '$' after splitting.
        let body = body.strip_prefix('$').unwrap_or(&body);
        let parsed = serde_json::from_str::<Value>(body)
            .map_err(|e| invalid(&format!("request body is not JSON: {}", e)))?;
        let mut json_data = match parsed {
            Value::Object(map) => map,
            _ => return Err(invalid("request body is not a JSON object")),
        };
        // Each call supplies its own target.
        json_data.remove("browseId");

        if let Some(pos) = headers.iter().position(|(name, _)| name == "cookie") {
            let (_, value) = headers.remove(pos);
            cookie_line.get_or_insert(value);
        }
        let cookies = parse_cookies(&cookie_line.ok_or_else(|| invalid("no cookies"))?);

        debug!(
            "Parsed curl capture: {} headers, {} cookies, {} params",
            headers.len(),
            cookies.len(),
            params.len()
        );

        Ok(Self {
            cookies,
            headers,
            params,
            json_data,
        })
    }

    /// Get a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn invalid(msg: &str) -> YtMusicError {
    YtMusicError::InvalidAuthFile(msg.to_string())
}

fn parse_query(url: &str) -> Result<BTreeMap<String, String>> {
    let url = Url::parse(url).map_err(|e| invalid(&format!("bad request URL: {}", e)))?;
    Ok(url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}

fn parse_cookies(line: &str) -> BTreeMap<String, String> {
    line.split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}
