//! Feed download: one uncached GET against the fixed GameCodeBase URL.

use crate::model::Feed;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use tracing::{debug, error};

/// Raw JSON feed published from the GameCodeBase repository.
const FEED_URL: &str =
    "https://raw.githubusercontent.com/Jhoney47/GameCodeBase/main/GameCodeBase.json";

/// Why a feed download failed. All three variants originate here; the
/// transform and query layers are total and never fail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, timeout, connection reset.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Endpoint reachable but answered with a non-success status.
    #[error("feed request failed: HTTP {0}")]
    Status(u16),
    /// Response body was not valid feed JSON.
    #[error("failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Downloads and parses the feed. One outbound request per call, no retry,
/// no caching between calls; the first failure aborts the whole fetch.
pub fn fetch_feed() -> Result<Feed, FetchError> {
    match download() {
        Ok(feed) => {
            debug!(
                games = feed.games.len(),
                version = %feed.version,
                "feed downloaded"
            );
            Ok(feed)
        }
        Err(err) => {
            error!(%err, "feed download failed");
            Err(err)
        }
    }
}

fn download() -> Result<Feed, FetchError> {
    let client = reqwest::blocking::Client::builder().build()?;
    let response = client
        .get(FEED_URL)
        .header(ACCEPT, "application/json")
        .header(CACHE_CONTROL, "no-cache")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text()?;
    parse_feed(&body)
}

/// Parses a response body into a [`Feed`].
pub fn parse_feed(body: &str) -> Result<Feed, FetchError> {
    Ok(serde_json::from_str(body)?)
}
