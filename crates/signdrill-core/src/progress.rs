//! Deck-level views over the persisted review map.
//!
//! These helpers take the caller's [`ReviewMap`] and vocabulary and keep
//! nothing between calls.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{is_due, review_outcome, ReviewItem};
use crate::store::ReviewMap;

/// How well a sign is known, derived from its review item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mastery {
    /// Never successfully reviewed.
    New,
    /// One successful review in a row.
    Learning,
    /// Two or more successful reviews in a row.
    Review,
    /// Seen before, but the last review failed.
    Relearning,
}

impl fmt::Display for Mastery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mastery::New => write!(f, "new"),
            Mastery::Learning => write!(f, "learning"),
            Mastery::Review => write!(f, "review"),
            Mastery::Relearning => write!(f, "relearning"),
        }
    }
}

pub fn mastery(item: Option<&ReviewItem>) -> Mastery {
    match item {
        None => Mastery::New,
        Some(item) if item.interval_days == 0 => Mastery::New,
        Some(item) => match item.streak {
            ..=0 => Mastery::Relearning,
            1 => Mastery::Learning,
            _ => Mastery::Review,
        },
    }
}

/// Apply a review outcome to `sign` in place and return the new item.
pub fn record_review(map: &mut ReviewMap, sign: &str, success: bool, on: NaiveDate) -> ReviewItem {
    let updated = review_outcome(map.get(sign), success, on);
    map.insert(sign.to_string(), updated.clone());
    updated
}

/// Vocabulary entries due on `on`, oldest due date first.
///
/// Signs with equal due dates keep their vocabulary order. Signs that have
/// never been reviewed are not due; see [`new_signs`].
pub fn due_signs(map: &ReviewMap, vocabulary: &[String], on: NaiveDate) -> Vec<String> {
    let mut due: Vec<(NaiveDate, &String)> = vocabulary
        .iter()
        .filter_map(|sign| {
            map.get(sign)
                .filter(|&item| is_due(Some(item), on))
                .map(|item| (item.due, sign))
        })
        .collect();
    due.sort_by_key(|(date, _)| *date);
    due.into_iter().map(|(_, sign)| sign.clone()).collect()
}

/// Vocabulary entries with no review state yet.
pub fn new_signs(map: &ReviewMap, vocabulary: &[String]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|sign| !map.contains_key(*sign))
        .cloned()
        .collect()
}

/// Counts across a vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckSummary {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub review: usize,
    pub relearning: usize,
    pub due: usize,
    /// Mean ease over the signs that have review state.
    pub average_ease: Option<f64>,
}

pub fn summarize(map: &ReviewMap, vocabulary: &[String], on: NaiveDate) -> DeckSummary {
    let mut summary = DeckSummary {
        total: vocabulary.len(),
        ..DeckSummary::default()
    };
    let mut ease_sum = 0.0;
    let mut seen = 0usize;

    for sign in vocabulary {
        let item = map.get(sign);
        match mastery(item) {
            Mastery::New => summary.new += 1,
            Mastery::Learning => summary.learning += 1,
            Mastery::Review => summary.review += 1,
            Mastery::Relearning => summary.relearning += 1,
        }
        if is_due(item, on) {
            summary.due += 1;
        }
        if let Some(item) = item {
            ease_sum += item.ease;
            seen += 1;
        }
    }

    if seen > 0 {
        summary.average_ease = Some(ease_sum / seen as f64);
    }
    summary
}

/// Format an interval in days as a compact string ("now", "3d", "2w", "4mo", "1y").
pub fn format_interval(days: i64) -> String {
    if days <= 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{days}d")
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
