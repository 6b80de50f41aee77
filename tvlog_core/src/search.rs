//! Record filters for the search menu.

use crate::SeriesRecord;

/// A single search criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchFilter {
    /// Rating at or above the bound
    MinRating(f64),
    /// Rating at or below the bound
    MaxRating(f64),
    Seen,
    NotSeen,
}

impl SearchFilter {
    #[must_use]
    pub fn matches(&self, record: &SeriesRecord) -> bool {
        match *self {
            Self::MinRating(bound) => record.rating >= bound,
            Self::MaxRating(bound) => record.rating <= bound,
            Self::Seen => record.seen,
            Self::NotSeen => !record.seen,
        }
    }

    /// Records matching this filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [SeriesRecord]) -> Vec<&'a SeriesRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
