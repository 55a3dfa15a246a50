//! Normalization of raw feed entries into dashboard records.
//!
//! All the "maybe missing" uncertainty of the feed payload is resolved
//! here, in one place. Downstream code never sees an optional column:
//! anything the feed omits becomes an empty string.

use pulse_protocol::Device;
use pulse_protocol::Feedback;
use pulse_protocol::RawFeedback;

/// Maps raw feed entries into display-ready records.
///
/// Output order matches input order; the engine captures that order as
/// the feed order that "original" sorting restores. Ids pass through
/// untouched, numeric ratings are coerced to their string rendering.
pub fn normalize(items: Vec<RawFeedback>) -> Vec<Feedback> {
    items.into_iter().map(normalize_one).collect()
}

fn normalize_one(raw: RawFeedback) -> Feedback {
    let device = device_for_platform(platform_hint(&raw));
    let computed = raw.computed_browser.unwrap_or_default();
    Feedback {
        id: raw.id,
        rating: raw
            .rating
            .map(|rating| rating.to_string())
            .unwrap_or_default(),
        comment: raw.comment.unwrap_or_default(),
        browser: computed.browser.unwrap_or_default(),
        browser_version: computed.version.unwrap_or_default(),
        platform: computed.platform.unwrap_or_default(),
        device,
        screenshot_url: raw
            .images
            .and_then(|images| images.screenshot)
            .and_then(|screenshot| screenshot.url),
    }
}

/// The platform string the device rule inspects: the platform reported
/// by the submitting browser when present and non-empty, otherwise the
/// one recomputed from the user agent.
///
/// Note the displayed `platform` column always uses the recomputed
/// value; only the device classification prefers the reported one.
fn platform_hint(raw: &RawFeedback) -> &str {
    raw.browser
        .as_ref()
        .and_then(|hint| hint.platform.as_deref())
        .filter(|platform| !platform.is_empty())
        .or_else(|| {
            raw.computed_browser
                .as_ref()
                .and_then(|computed| computed.platform.as_deref())
        })
        .unwrap_or_default()
}

/// Windows and Mac platform strings count as desktop; everything else,
/// including an unreported platform, counts as mobile.
fn device_for_platform(platform: &str) -> Device {
    let lowered = platform.to_lowercase();
    if lowered.contains("win") || lowered.contains("mac") {
        Device::Desktop
    } else {
        Device::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulse_protocol::BrowserHint;
    use pulse_protocol::ComputedBrowser;
    use pulse_protocol::FeedbackImages;
    use pulse_protocol::RawRating;
    use pulse_protocol::Screenshot;

    fn raw(id: &str) -> RawFeedback {
        RawFeedback {
            id: id.to_string(),
            rating: None,
            comment: None,
            browser: None,
            computed_browser: None,
            images: None,
        }
    }

    fn computed_platform(platform: &str) -> Option<ComputedBrowser> {
        Some(ComputedBrowser {
            browser: None,
            version: None,
            platform: Some(platform.to_string()),
        })
    }

    #[test]
    fn windows_and_mac_platforms_count_as_desktop() {
        for platform in ["Win32", "win64", "MacIntel", "macOS", "Windows NT"] {
            let mut entry = raw("r");
            entry.browser = Some(BrowserHint {
                platform: Some(platform.to_string()),
            });
            assert_eq!(
                normalize(vec![entry])[0].device,
                Device::Desktop,
                "{platform}"
            );
        }
    }

    #[test]
    fn other_or_missing_platforms_count_as_mobile() {
        for platform in [Some("Linux x86_64"), Some("iPhone"), Some(""), None] {
            let mut entry = raw("r");
            entry.browser = platform.map(|value| BrowserHint {
                platform: Some(value.to_string()),
            });
            assert_eq!(
                normalize(vec![entry])[0].device,
                Device::Mobile,
                "{platform:?}"
            );
        }
    }

    #[test]
    fn reported_platform_wins_over_computed_for_the_device_rule() {
        let mut entry = raw("r");
        entry.browser = Some(BrowserHint {
            platform: Some("iPhone".to_string()),
        });
        entry.computed_browser = computed_platform("Mac");
        let record = &normalize(vec![entry])[0];
        // The device rule saw "iPhone"; the displayed column is the
        // recomputed value.
        assert_eq!(record.device, Device::Mobile);
        assert_eq!(record.platform, "Mac");
    }

    #[test]
    fn empty_reported_platform_falls_back_to_computed() {
        let mut entry = raw("r");
        entry.browser = Some(BrowserHint {
            platform: Some(String::new()),
        });
        entry.computed_browser = computed_platform("Win32");
        assert_eq!(normalize(vec![entry])[0].device, Device::Desktop);
    }

    #[test]
    fn missing_columns_default_to_empty_strings() {
        let record = &normalize(vec![raw("sparse")])[0];
        assert_eq!(record.id, "sparse");
        assert_eq!(record.rating, "");
        assert_eq!(record.comment, "");
        assert_eq!(record.browser, "");
        assert_eq!(record.browser_version, "");
        assert_eq!(record.platform, "");
        assert_eq!(record.device, Device::Mobile);
        assert_eq!(record.screenshot_url, None);
    }

    #[test]
    fn ratings_are_coerced_to_strings() {
        let mut numeric = raw("n");
        numeric.rating = Some(RawRating::Number(4.into()));
        let mut text = raw("t");
        text.rating = Some(RawRating::Text("2".to_string()));
        let records = normalize(vec![numeric, text]);
        assert_eq!(records[0].rating, "4");
        assert_eq!(records[1].rating, "2");
    }

    #[test]
    fn browser_columns_come_from_the_computed_details() {
        let mut entry = raw("r");
        entry.computed_browser = Some(ComputedBrowser {
            browser: Some("Firefox".to_string()),
            version: Some("61.0".to_string()),
            platform: Some("Mac".to_string()),
        });
        let record = &normalize(vec![entry])[0];
        assert_eq!(record.browser, "Firefox");
        assert_eq!(record.browser_version, "61.0");
        assert_eq!(record.platform, "Mac");
    }

    #[test]
    fn screenshot_url_is_plucked_from_the_attachment_tree() {
        let mut entry = raw("r");
        entry.images = Some(FeedbackImages {
            screenshot: Some(Screenshot {
                url: Some("https://cdn.example/s.png".to_string()),
            }),
        });
        let record = &normalize(vec![entry])[0];
        assert_eq!(record.screenshot_url.as_deref(), Some("https://cdn.example/s.png"));
        assert!(record.has_screenshot());
    }

    #[test]
    fn output_order_matches_input_order() {
        let records = normalize(vec![raw("b"), raw("a"), raw("c")]);
        let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
