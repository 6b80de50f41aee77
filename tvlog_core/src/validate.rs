//! Field validation for series input.
//!
//! Each parser turns one raw answer into a typed value or a [`FieldError`]
//! naming the field and the rejected text. [`validate_fields`] runs all of
//! them so every problem can be reported in one pass.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{SeriesDraft, SeriesStore};

#[allow(clippy::unwrap_used)]
static EPISODES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").unwrap());

#[allow(clippy::unwrap_used)]
static RATING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(10|[0-9])(\.[0-9]+)?$").unwrap());

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Title \"{0}\" already exists.")]
    DuplicateTitle(String),

    #[error("Nº of episodes \"{0}\" has incorrect format.")]
    EpisodesFormat(String),

    #[error("Incorrect value \"{0}\" in \"Have you seen it?\" field.")]
    SeenValue(String),

    #[error("Rating \"{0}\" has incorrect format.")]
    RatingFormat(String),

    #[error("Rating \"{0}\" is out of range (0-10).")]
    RatingOutOfRange(String),
}

/// Unvalidated answers to the series prompts, as typed.
#[derive(Debug, Clone, Default)]
pub struct RawFields {
    pub title: String,
    pub episodes: String,
    pub seen: String,
    pub rating: String,
}

/// Reject a title some stored record already uses.
pub fn check_title(title: &str, store: &SeriesStore) -> Result<(), FieldError> {
    if store.contains_title(title) {
        return Err(FieldError::DuplicateTitle(title.to_string()));
    }
    Ok(())
}

/// Parse an episode count. An empty answer counts as zero episodes.
pub fn parse_episodes(raw: &str) -> Result<u64, FieldError> {
    if !EPISODES_RE.is_match(raw) {
        return Err(FieldError::EpisodesFormat(raw.to_string()));
    }
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| FieldError::EpisodesFormat(raw.to_string()))
}

/// Parse the seen flag from `yes` or `no`, ignoring case.
pub fn parse_seen(raw: &str) -> Result<bool, FieldError> {
    match raw.to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(FieldError::SeenValue(raw.to_string())),
    }
}

/// Parse a rating between 0 and 10.
///
/// Accepts an integer part of `0`-`10` with an optional fractional part, so
/// `10.5` passes the format check and is then rejected as out of range.
pub fn parse_rating(raw: &str) -> Result<f64, FieldError> {
    if !RATING_RE.is_match(raw) {
        return Err(FieldError::RatingFormat(raw.to_string()));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| FieldError::RatingFormat(raw.to_string()))?;
    if value > MAX_RATING {
        return Err(FieldError::RatingOutOfRange(raw.to_string()));
    }
    Ok(value)
}

/// Validate a full set of answers against the current store.
///
/// Checks run in the order title, episodes, rating, seen. On failure every
/// rejected field is returned, not only the first.
pub fn validate_fields(raw: &RawFields, store: &SeriesStore) -> Result<SeriesDraft, Vec<FieldError>> {
    let title = check_title(&raw.title, store);
    let episodes = parse_episodes(&raw.episodes);
    let rating = parse_rating(&raw.rating);
    let seen = parse_seen(&raw.seen);

    match (title, episodes, rating, seen) {
        (Ok(()), Ok(episodes), Ok(rating), Ok(seen)) => {
            Ok(SeriesDraft::new(raw.title.clone(), episodes, seen, rating))
        }
        (title, episodes, rating, seen) => Err([
            title.err(),
            episodes.err(),
            rating.err(),
            seen.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, episodes: &str, seen: &str, rating: &str) -> RawFields {
        RawFields {
            title: title.to_string(),
            episodes: episodes.to_string(),
            seen: seen.to_string(),
            rating: rating.to_string(),
        }
    }

    #[test]
    fn test_rating_accepts_valid_values() {
        assert_eq!(parse_rating("0"), Ok(0.0));
        assert_eq!(parse_rating("10"), Ok(10.0));
        assert_eq!(parse_rating("7.5"), Ok(7.5));
        assert_eq!(parse_rating("10.0"), Ok(10.0));
    }

    #[test]
    fn test_rating_rejects_invalid_values() {
        assert_eq!(
            parse_rating("11"),
            Err(FieldError::RatingFormat("11".to_string()))
        );
        assert!(matches!(parse_rating("-1"), Err(FieldError::RatingFormat(_))));
        assert!(matches!(parse_rating("abc"), Err(FieldError::RatingFormat(_))));
        assert!(matches!(parse_rating(""), Err(FieldError::RatingFormat(_))));
        assert!(matches!(parse_rating("7."), Err(FieldError::RatingFormat(_))));
        assert_eq!(
            parse_rating("10.5"),
            Err(FieldError::RatingOutOfRange("10.5".to_string()))
        );
    }

    #[test]
    fn test_episodes() {
        assert_eq!(parse_episodes(""), Ok(0));
        assert_eq!(parse_episodes("0"), Ok(0));
        assert_eq!(parse_episodes("12"), Ok(12));

        for bad in ["-1", "1.5", "abc", " 3", "99999999999999999999999"] {
            assert_eq!(
                parse_episodes(bad),
                Err(FieldError::EpisodesFormat(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_seen_is_case_insensitive() {
        assert_eq!(parse_seen("yes"), Ok(true));
        assert_eq!(parse_seen("YES"), Ok(true));
        assert_eq!(parse_seen("No"), Ok(false));
        assert!(parse_seen("maybe").is_err());
        assert!(parse_seen("").is_err());
    }

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(
            FieldError::EpisodesFormat("x".to_string()).to_string(),
            "Nº of episodes \"x\" has incorrect format."
        );
        assert_eq!(
            FieldError::SeenValue("si".to_string()).to_string(),
            "Incorrect value \"si\" in \"Have you seen it?\" field."
        );
        assert_eq!(
            FieldError::DuplicateTitle("Dark".to_string()).to_string(),
            "Title \"Dark\" already exists."
        );
    }

    #[test]
    fn test_validate_fields_ok() {
        let store = SeriesStore::new();
        let draft = validate_fields(&raw("Dark", "26", "Yes", "8.756"), &store).unwrap();
        assert_eq!(draft, SeriesDraft::new("Dark", 26, true, 8.76));
    }

    #[test]
    fn test_validate_fields_reports_every_failure_in_order() {
        let mut store = SeriesStore::new();
        store
            .add(SeriesDraft::new("Dark", 26, true, 9.0))
            .unwrap();

        let errors = validate_fields(&raw("Dark", "x", "maybe", "11"), &store).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::DuplicateTitle("Dark".to_string()),
                FieldError::EpisodesFormat("x".to_string()),
                FieldError::RatingFormat("11".to_string()),
                FieldError::SeenValue("maybe".to_string()),
            ]
        );
    }
}
