//! Fuzzy search over feedback comments.
//!
//! Only the comment column is searchable; the other columns are short
//! derived strings that filtering and sorting already cover. The index
//! is built once per feed load and queried on every keystroke.

use nucleo_matcher::Config;
use nucleo_matcher::Matcher;
use nucleo_matcher::Utf32Str;
use nucleo_matcher::pattern::AtomKind;
use nucleo_matcher::pattern::CaseMatching;
use nucleo_matcher::pattern::Normalization;
use nucleo_matcher::pattern::Pattern;
use pulse_protocol::Feedback;

/// nucleo reports match scores on an open-ended integer scale; dividing
/// by this brings typical comment matches into `0.0..=1.0` territory.
const SCORE_SCALE: f32 = 1000.0;

/// Tuning for the comment index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Scaled score a comment must reach to count as a match. Zero
    /// keeps every fuzzy match nucleo finds; raise it to trim weak,
    /// scattered matches.
    pub min_score: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_score: 0.0 }
    }
}

/// Fuzzy index over the comment column.
///
/// Entries are held in feed order and ties in match quality resolve to
/// feed order, so the same data and query always produce the same id
/// sequence.
pub struct CommentIndex {
    entries: Vec<IndexEntry>,
    config: SearchConfig,
}

struct IndexEntry {
    id: String,
    comment: String,
}

impl CommentIndex {
    /// Indexes `records` as-is, in order.
    pub fn build(records: &[Feedback], config: SearchConfig) -> Self {
        let entries = records
            .iter()
            .map(|record| IndexEntry {
                id: record.id.clone(),
                comment: record.comment.clone(),
            })
            .collect();
        Self { entries, config }
    }

    /// Ids of records whose comment fuzzily matches `text`, best match
    /// first.
    ///
    /// The dashboard never queries with an empty string (an empty
    /// search shows the whole feed instead), so no special case exists
    /// for it here.
    pub fn query(&self, text: &str) -> Vec<String> {
        let pattern = Pattern::new(
            text,
            CaseMatching::Smart,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut haystack_buf = Vec::new();
        let mut scored: Vec<(u32, usize)> = Vec::new();
        for (position, entry) in self.entries.iter().enumerate() {
            let haystack = Utf32Str::new(&entry.comment, &mut haystack_buf);
            let Some(score) = pattern.score(haystack, &mut matcher) else {
                continue;
            };
            if (score as f32) / SCORE_SCALE < self.config.min_score {
                continue;
            }
            scored.push((score, position));
        }
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored
            .into_iter()
            .map(|(_, position)| self.entries[position].id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
