//! Query surface of the dashboard: sortable columns, sort directions
//! and the rating filter domain.

use crate::record::Feedback;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumString;

/// Every rating value a feedback entry can carry, in the order the
/// filter toggles are listed.
pub const RATING_VALUES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Columns the dashboard can sort the active set by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortColumn {
    Rating,
    Comment,
    Browser,
    Device,
    Platform,
}

impl SortColumn {
    /// Header order as rendered in the table.
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Rating,
        SortColumn::Comment,
        SortColumn::Browser,
        SortColumn::Device,
        SortColumn::Platform,
    ];

    /// The cell value sorting compares for this column.
    ///
    /// Every column sorts by its display string, including `rating`.
    /// Ratings are single digits, so lexicographic and numeric order
    /// coincide; a two-digit rating scale would need a numeric
    /// comparator here.
    pub fn sort_key(self, record: &Feedback) -> &str {
        match self {
            SortColumn::Rating => &record.rating,
            SortColumn::Comment => &record.comment,
            SortColumn::Browser => &record.browser,
            SortColumn::Device => record.device.as_str(),
            SortColumn::Platform => &record.platform,
        }
    }
}

/// Direction state of a sortable column header.
///
/// Repeated clicks on one header walk `Desc -> Asc -> Original` and
/// wrap. `Original` is not "unsorted": it restores feed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Desc,
    Asc,
    #[default]
    Original,
}

impl SortOrder {
    /// Next direction in the header toggle cycle.
    pub fn next(self) -> Self {
        match self {
            SortOrder::Desc => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Original,
            SortOrder::Original => SortOrder::Desc,
        }
    }

    /// Persisted representation. `Original` round-trips as the empty
    /// string, same as the saved state written by earlier dashboard
    /// builds.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
            SortOrder::Original => "",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "desc" => Some(SortOrder::Desc),
            "asc" => Some(SortOrder::Asc),
            "" => Some(SortOrder::Original),
            _ => None,
        }
    }
}
