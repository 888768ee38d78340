//! REST client for the dive log backend.
//!
//! Native builds use blocking requests from a worker thread; WASM builds
//! use the async client driven by the browser's fetch machinery. Both
//! variants report failures as message strings for the channel layer.

use serde::de::DeserializeOwned;

use super::types::{Dive, DiveStats};

/// Client for the dive log REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (scheme + authority).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn dives_url(&self) -> String {
        format!("{}/api/dives", self.base_url)
    }

    fn dive_url(&self, id: i64) -> String {
        format!("{}/api/dives/{}", self.base_url, id)
    }

    fn stats_url(&self) -> String {
        format!("{}/api/stats", self.base_url)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiClient {
    pub fn fetch_dives(&self) -> Result<Vec<Dive>, String> {
        get_json(&self.dives_url())
    }

    pub fn fetch_dive(&self, id: i64) -> Result<Dive, String> {
        get_json(&self.dive_url(id))
    }

    pub fn fetch_stats(&self) -> Result<DiveStats, String> {
        get_json(&self.stats_url())
    }
}

#[cfg(target_arch = "wasm32")]
impl ApiClient {
    pub async fn fetch_dives(&self) -> Result<Vec<Dive>, String> {
        get_json(&self.dives_url()).await
    }

    pub async fn fetch_dive(&self, id: i64) -> Result<Dive, String> {
        get_json(&self.dive_url(id)).await
    }

    pub async fn fetch_stats(&self) -> Result<DiveStats, String> {
        get_json(&self.stats_url()).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response =
        reqwest::blocking::get(url).map_err(|e| format!("request to {} failed: {}", url, e))?;

    if !response.status().is_success() {
        return Err(format!("{} returned {}", url, response.status()));
    }

    response
        .json()
        .map_err(|e| format!("invalid response from {}: {}", url, e))
}

#[cfg(target_arch = "wasm32")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("request to {} failed: {}", url, e))?;

    if !response.status().is_success() {
        return Err(format!("{} returned {}", url, response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("invalid response from {}: {}", url, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.dives_url(), "http://localhost:5000/api/dives");
    }

    #[test]
    fn test_endpoint_urls() {
        let client = ApiClient::new("http://localhost:5000");
        assert_eq!(client.dive_url(42), "http://localhost:5000/api/dives/42");
        assert_eq!(client.stats_url(), "http://localhost:5000/api/stats");
    }
}
