//! Feed payload types, matching the JSON the feedback backend serves.
//!
//! The feed is a single document of the form `{"items": [...]}`. Apart
//! from `id`, every field of an item is routinely missing or `null` in
//! production exports, so everything else decodes as optional and the
//! normalizer in `pulse-core` decides the fallbacks in one place.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Top-level feed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackPayload {
    /// Missing and `null` both decode as `None`. The client treats an
    /// absent or empty list as a failed fetch, never as an empty
    /// dashboard.
    #[serde(default)]
    pub items: Option<Vec<RawFeedback>>,
}

/// One feedback entry exactly as the backend serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFeedback {
    pub id: String,
    #[serde(default)]
    pub rating: Option<RawRating>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub browser: Option<BrowserHint>,
    #[serde(default)]
    pub computed_browser: Option<ComputedBrowser>,
    #[serde(default)]
    pub images: Option<FeedbackImages>,
}

/// Ratings arrive as JSON numbers from newer ingest paths and as
/// strings from older ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRating {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RawRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawRating::Number(value) => write!(f, "{value}"),
            RawRating::Text(value) => f.write_str(value),
        }
    }
}

/// Platform details reported by the submitting browser itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserHint {
    #[serde(default)]
    pub platform: Option<String>,
}

/// Browser details recomputed server-side from the user agent. The
/// backend emits these keys capitalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComputedBrowser {
    #[serde(rename = "Browser", default)]
    pub browser: Option<String>,
    #[serde(rename = "Version", default)]
    pub version: Option<String>,
    #[serde(rename = "Platform", default)]
    pub platform: Option<String>,
}

/// Attachments captured alongside a feedback entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackImages {
    #[serde(default)]
    pub screenshot: Option<Screenshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Screenshot {
    #[serde(default)]
    pub url: Option<String>,
}
