// client.rs
use crate::api::{ApiCafe, ApiError};
use crate::domain::Cafe;
use crate::store::CafeStore;
use reqwest::blocking::Client;
use std::time::Duration;

const DEFAULT_FEED_URL: &str = "http://15.165.161.251/api/cafes";
const USER_AGENT: &str = "cafeseats/0.1";

pub struct CafeApiClient {
    client: Client,
    feed_url: String,
}

impl CafeApiClient {
    /// Builds a client against the default feed endpoint, or whatever
    /// `CAFES_API_URL` points at.
    pub fn new() -> Result<Self, ApiError> {
        let feed_url =
            std::env::var("CAFES_API_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
        Self::with_feed_url(feed_url)
    }

    pub fn with_feed_url(feed_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            feed_url: feed_url.into(),
        })
    }

    /// Single unauthenticated GET. No retry, no pagination, no caching.
    pub fn fetch_cafes(&self) -> Result<Vec<ApiCafe>, ApiError> {
        let resp = self
            .client
            .get(&self.feed_url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Network(format!("feed HTTP {status}: {text}")));
        }

        if text.trim().is_empty() {
            return Err(ApiError::EmptyBody);
        }

        parse_feed(&text)
    }
}

/// Decodes the feed body (a JSON array of cafe records).
pub fn parse_feed(body: &str) -> Result<Vec<ApiCafe>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::JsonParse(e.to_string()))
}

/// Runs one fetch cycle and swaps the result into the store. A failed
/// fetch keeps the previous list and raises the notice on the list page.
pub fn refresh_cafes(client: &CafeApiClient, store: &CafeStore) {
    match client.fetch_cafes() {
        Ok(raw) => {
            let cafes: Vec<Cafe> = raw.iter().map(Cafe::from_api).collect();
            println!("✅ Feed fetch ok ({} cafes)", cafes.len());
            store.replace(cafes);
        }
        Err(e) => {
            eprintln!("⚠️ Feed fetch failed: {e}");
            store.mark_failed();
        }
    }
}
