//! Series record model.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Identifier of a stored series.
///
/// Assigned by the store, never chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// The id after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated series fields that have not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDraft {
    pub title: String,
    pub episodes: u64,
    pub seen: bool,
    pub rating: f64,
}

impl SeriesDraft {
    /// Build a draft, rounding the rating to two decimals.
    #[must_use]
    pub fn new(title: impl Into<String>, episodes: u64, seen: bool, rating: f64) -> Self {
        Self {
            title: title.into(),
            episodes,
            seen,
            rating: round_rating(rating),
        }
    }
}

/// A stored series.
///
/// Field order here is the order records are rendered in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRecord {
    pub id: RecordId,
    pub title: String,
    pub episodes: u64,
    #[serde(serialize_with = "serialize_seen")]
    pub seen: bool,
    pub rating: f64,
}

impl SeriesRecord {
    #[must_use]
    pub fn from_draft(id: RecordId, draft: SeriesDraft) -> Self {
        Self {
            id,
            title: draft.title,
            episodes: draft.episodes,
            seen: draft.seen,
            rating: round_rating(draft.rating),
        }
    }
}

/// Literal used for the seen flag in prompts and output.
#[must_use]
pub const fn seen_literal(seen: bool) -> &'static str {
    if seen { "yes" } else { "no" }
}

fn serialize_seen<S: Serializer>(seen: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(seen_literal(*seen))
}

fn round_rating(rating: f64) -> f64 {
    (rating * 100.0).round() / 100.0
}
