//! HTTP client for the published feed
//!
//! The gviz endpoint wraps its JSON object in a JavaScript callback, so the
//! response is located by the outermost braces before parsing.

use crate::table::{FeedTable, GvizResponse};

const SHEET_ID: &str = "1Cwzzw5r8VW1jjKoYCqEkTan7lQXNmdkS2hHDx-gX6-k";
const BASE_API_GID: &str = "624578284";

/// URL of the published BASE_API worksheet.
pub fn default_feed_url() -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:json&gid={}",
        SHEET_ID, BASE_API_GID
    )
}

/// Errors from the feed layer, each failure mode distinguishable.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The feed answered with a non-2xx status code.
    #[error("Feed returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// No JSON object could be located in the response text.
    #[error("No JSON object found in the feed response")]
    Envelope,

    /// The embedded JSON did not match the expected table shape.
    #[error("Failed to parse feed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<FeedError> for freta_types::Error {
    fn from(e: FeedError) -> Self {
        freta_types::Error::Feed(e.to_string())
    }
}

/// HTTP client for one published worksheet.
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the whole feed.
    ///
    /// One GET per call, no retry: the caller surfaces the error and the
    /// user refreshes manually.
    pub async fn fetch(&self) -> Result<FeedTable, FeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let json = extract_json(&text).ok_or(FeedError::Envelope)?;
        let envelope: GvizResponse = serde_json::from_str(json)?;
        Ok(envelope.table)
    }
}

/// Locate the JSON object embedded in wrapper text, outermost braces
/// inclusive.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
