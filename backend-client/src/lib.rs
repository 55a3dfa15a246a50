//! HTTP client for the feedback feed.
//!
//! One GET at mount is the dashboard's entire network surface. The
//! fetch has no retry and no timeout beyond reqwest's defaults, which
//! is how the dashboard has always behaved; callers that want a harder
//! deadline can pass their own configured `reqwest::Client`.

use pulse_protocol::FeedbackPayload;
use pulse_protocol::RawFeedback;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Path of the feed document relative to the backend base URL.
pub const FEED_PATH: &str = "feedback.json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid feed url: {0}")]
    Url(#[from] url::ParseError),

    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed contained no items")]
    EmptyFeed,
}

/// Client bound to one backend base URL.
pub struct FeedbackClient {
    http: reqwest::Client,
    feed_url: Url,
}

impl FeedbackClient {
    /// Client for the backend at `base_url`: scheme and host, plus
    /// whatever path prefix the deployment serves the feed under.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`FeedbackClient::new`] but with a caller-configured
    /// HTTP client (proxies, timeouts, extra headers).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, FetchError> {
        // Url::join drops the last path segment of a slashless base.
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let feed_url = Url::parse(&base)?.join(FEED_PATH)?;
        Ok(Self { http, feed_url })
    }

    /// URL the feed will be fetched from.
    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// Fetches and decodes the feed.
    ///
    /// A payload without items is an error: an empty feed in
    /// production has always meant a broken export upstream, not a
    /// feedback drought, and the dashboard has nothing to show either
    /// way.
    pub async fn fetch_items(&self) -> Result<Vec<RawFeedback>, FetchError> {
        debug!(url = %self.feed_url, "fetching feedback feed");
        let payload: FeedbackPayload = self
            .http
            .get(self.feed_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let items = payload.items.unwrap_or_default();
        if items.is_empty() {
            return Err(FetchError::EmptyFeed);
        }
        debug!(items = items.len(), "feedback feed fetched");
        Ok(items)
    }
}
