//! Normalized feedback records, the shape everything downstream of the
//! normalizer works with.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Synthetic id of the placeholder row shown when a query matches
/// nothing. Real feed ids are opaque hashes, so this cannot collide.
pub const NO_RESULTS_ID: &str = "no-results";

/// Comment text carried by the placeholder row.
pub const NO_RESULTS_COMMENT: &str = "No results found";

/// A feedback entry after normalization: every column the dashboard
/// renders, filters or sorts on is a plain string, already defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    /// Rating rendered as text (`"1".."5"` in practice). Kept as a
    /// string so filtering and sorting treat it like any other column.
    pub rating: String,
    pub comment: String,
    pub browser: String,
    pub browser_version: String,
    pub platform: String,
    pub device: Device,
    pub screenshot_url: Option<String>,
}

impl Feedback {
    /// Placeholder row rendered in place of an empty list.
    pub fn no_results() -> Self {
        Self {
            id: NO_RESULTS_ID.to_string(),
            rating: String::new(),
            comment: NO_RESULTS_COMMENT.to_string(),
            browser: String::new(),
            browser_version: String::new(),
            platform: String::new(),
            // No platform, so the device rule lands on Mobile.
            device: Device::Mobile,
            screenshot_url: None,
        }
    }

    pub fn is_no_results(&self) -> bool {
        self.id == NO_RESULTS_ID
    }

    pub fn has_screenshot(&self) -> bool {
        self.screenshot_url.is_some()
    }
}

/// Coarse device class derived from the reported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    Desktop,
    Mobile,
}

impl Device {
    pub const fn as_str(self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
