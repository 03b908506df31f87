//! Recommendation filter/ranker.
//!
//! Pure function over the immutable catalog slice: polarity filter, optional
//! category filter, rank, dedup, cap at five. An empty result is reported as
//! an explicit [`RecommendationOutcome::NoMatches`] so callers never confuse
//! "nothing survived the filters" with an empty table.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{ProductRecord, SentimentLabel};

/// Minimum stored rating for rows recommended on a Positive prediction.
const POSITIVE_MIN_RATING: f64 = 4.0;
/// Maximum stored rating for rows recommended on a Negative prediction.
const NEGATIVE_MAX_RATING: f64 = 2.5;
/// Cap on the returned shortlist.
const MAX_RECOMMENDATIONS: usize = 5;

/// Result of a recommendation query. Borrows from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome<'a> {
    /// Ordered, name-deduplicated shortlist; never empty, at most five rows.
    Matches(Vec<&'a ProductRecord>),
    /// Nothing survived the filters.
    NoMatches,
}

impl<'a> RecommendationOutcome<'a> {
    #[must_use]
    pub fn matches(&self) -> Option<&[&'a ProductRecord]> {
        match self {
            RecommendationOutcome::Matches(rows) => Some(rows),
            RecommendationOutcome::NoMatches => None,
        }
    }
}

/// Produce up to five recommendations for a predicted sentiment.
///
/// Steps, in order:
/// 1. Polarity filter: Positive keeps stored-"positive" rows rated >= 4.0,
///    Negative keeps stored-"negative" rows rated <= 2.5. A `None` rating
///    fails both comparisons.
/// 2. Category filter: when a keyword was detected, keep rows whose name
///    contains it case-insensitively. Substring containment on purpose —
///    looser than the detector's word-boundary rule, so "ac" also surfaces
///    "AC-1200 Window AC" style names.
/// 3. Stable sort by rating descending, then price ascending; `None` sorts
///    last under both keys.
/// 4. Dedup by product name, first occurrence wins.
/// 5. Truncate to five.
#[must_use]
pub fn recommend<'a>(
    records: &'a [ProductRecord],
    label: SentimentLabel,
    keyword: Option<&str>,
) -> RecommendationOutcome<'a> {
    let keyword_lower = keyword.map(str::to_lowercase);

    let mut candidates: Vec<&ProductRecord> = records
        .iter()
        .filter(|r| passes_polarity(r, label))
        .filter(|r| match &keyword_lower {
            Some(kw) => r.name.to_lowercase().contains(kw.as_str()),
            None => true,
        })
        .collect();

    candidates.sort_by(|a, b| {
        cmp_rating_desc(a.rating, b.rating).then_with(|| cmp_price_asc(a.price, b.price))
    });

    let mut seen_names: HashSet<&str> = HashSet::new();
    candidates.retain(|r| seen_names.insert(r.name.as_str()));
    candidates.truncate(MAX_RECOMMENDATIONS);

    if candidates.is_empty() {
        RecommendationOutcome::NoMatches
    } else {
        RecommendationOutcome::Matches(candidates)
    }
}

fn passes_polarity(record: &ProductRecord, label: SentimentLabel) -> bool {
    match label {
        SentimentLabel::Positive => {
            record.sentiment == "positive"
                && record.rating.is_some_and(|r| r >= POSITIVE_MIN_RATING)
        }
        SentimentLabel::Negative => {
            record.sentiment == "negative"
                && record.rating.is_some_and(|r| r <= NEGATIVE_MAX_RATING)
        }
    }
}

/// Descending on rating, `None` last. Ratings are finite by catalog-load
/// contract, so `partial_cmp` cannot observe NaN.
fn cmp_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending on price, `None` last.
fn cmp_price_asc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
