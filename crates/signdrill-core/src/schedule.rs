//! Spaced-repetition scheduling.
//!
//! Each sign carries a [`ReviewItem`]. A review outcome moves it through a
//! single deterministic transition:
//!
//! - success: streak + 1; interval 0 → 1 → 3 → round(interval × ease) (min 1);
//!   ease + 0.08
//! - failure: streak reset; interval 1; ease − 0.2
//!
//! The new ease is always clamped to [1.3, 2.8] and the due date is always
//! the reference date plus the new interval. Inputs are not validated:
//! corrupted state (negative intervals or streaks, out-of-range or NaN ease)
//! is back in range after one review.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lowest ease an item can fall to.
pub const MIN_EASE: f64 = 1.3;
/// Highest ease an item can rise to.
pub const MAX_EASE: f64 = 2.8;
/// Ease given to a sign the first time it is seen.
pub const DEFAULT_EASE: f64 = 2.3;

const EASE_GAIN: f64 = 0.08;
const EASE_PENALTY: f64 = 0.2;

/// Interval after the first and second consecutive successes.
const FIRST_INTERVAL: i64 = 1;
const SECOND_INTERVAL: i64 = 3;

/// Memory state for one sign, in the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    /// Interval growth factor, kept in [1.3, 2.8].
    pub ease: f64,
    /// Days until due again; 0 means never successfully reviewed.
    pub interval_days: i64,
    /// Calendar date the sign becomes due (serialized as `yyyy-mm-dd`).
    pub due: NaiveDate,
    /// Consecutive successful reviews. Signed so damaged state still loads.
    pub streak: i64,
}

impl ReviewItem {
    /// A never-reviewed item, due immediately.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            ease: DEFAULT_EASE,
            interval_days: 0,
            due: today,
            streak: 0,
        }
    }
}

/// Apply one review outcome on `reference`, returning the updated item.
///
/// `item` is `None` for a sign that has never been reviewed.
pub fn review_outcome(item: Option<&ReviewItem>, success: bool, reference: NaiveDate) -> ReviewItem {
    let prev = item.cloned().unwrap_or_else(|| ReviewItem::new(reference));

    let (ease, interval_days, streak) = if success {
        let interval = match prev.interval_days {
            0 => FIRST_INTERVAL,
            1 => SECOND_INTERVAL,
            n => grow(n, prev.ease),
        };
        (
            bound_ease(prev.ease + EASE_GAIN),
            interval,
            prev.streak.max(0).saturating_add(1),
        )
    } else {
        (bound_ease(prev.ease - EASE_PENALTY), FIRST_INTERVAL, 0)
    };

    ReviewItem {
        ease,
        interval_days,
        due: add_days(reference, interval_days),
        streak,
    }
}

// `f64::clamp` keeps NaN; `min` then `max` maps it to MAX_EASE.
fn bound_ease(ease: f64) -> f64 {
    ease.min(MAX_EASE).max(MIN_EASE)
}

fn grow(interval: i64, ease: f64) -> i64 {
    // `as` saturates on overflow and maps NaN to 0, which the floor then lifts.
    ((interval as f64 * ease).round() as i64).max(1)
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_days(Days::new(days.max(0) as u64))
        .unwrap_or(NaiveDate::MAX)
}

/// True iff the item exists and its due date is on or before `on`.
pub fn is_due(item: Option<&ReviewItem>, on: NaiveDate) -> bool {
    item.is_some_and(|item| item.due <= on)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn item(ease: f64, interval_days: i64, streak: i64) -> ReviewItem {
        ReviewItem {
            ease,
            interval_days,
            due: date("2025-01-01"),
            streak,
        }
    }

    #[test]
    fn first_success_from_default() {
        let today = date("2025-03-10");
        let result = review_outcome(None, true, today);
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.streak, 1);
        assert_eq!(result.due, date("2025-03-11"));
        assert!((result.ease - 2.38).abs() < 1e-9);
    }

    #[test]
    fn first_failure_from_default() {
        let today = date("2025-03-10");
        let result = review_outcome(None, false, today);
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.streak, 0);
        assert!((result.ease - 2.1).abs() < 1e-9);
        assert_eq!(result.due, date("2025-03-11"));
    }

    #[test]
    fn success_from_zero_interval() {
        for ease in [1.3, 2.0, 2.8] {
            let result = review_outcome(Some(&item(ease, 0, 0)), true, date("2025-01-01"));
            assert_eq!(result.interval_days, 1);
            assert_eq!(result.streak, 1);
        }
    }

    #[test]
    fn success_from_one_day() {
        let result = review_outcome(Some(&item(2.3, 1, 1)), true, date("2025-01-01"));
        assert_eq!(result.interval_days, 3);
        assert_eq!(result.due, date("2025-01-04"));
    }

    #[test]
    fn success_from_three_days_grows_by_ease() {
        let result = review_outcome(Some(&item(2.3, 3, 2)), true, date("2025-01-01"));
        assert!((6..=8).contains(&result.interval_days));
        assert_eq!(result.interval_days, 7);
        assert!(result.ease > 2.3);
        assert_eq!(result.streak, 3);
    }

    #[test]
    fn failure_resets() {
        let prev = item(2.5, 7, 3);
        let result = review_outcome(Some(&prev), false, date("2025-01-01"));
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.streak, 0);
        assert_eq!(result.due, date("2025-01-02"));
        assert!(result.ease <= 2.5);
        assert!((result.ease - 2.3).abs() < 1e-9);
    }

    #[test]
    fn ease_is_capped() {
        let result = review_outcome(Some(&item(2.79, 5, 4)), true, date("2025-01-01"));
        assert_eq!(result.ease, MAX_EASE);

        let mut state = None;
        for _ in 0..50 {
            state = Some(review_outcome(state.as_ref(), true, date("2025-01-01")));
        }
        assert_eq!(state.unwrap().ease, MAX_EASE);
    }

    #[test]
    fn ease_is_floored() {
        let result = review_outcome(Some(&item(1.31, 5, 0)), false, date("2025-01-01"));
        assert_eq!(result.ease, MIN_EASE);

        let mut state = None;
        for _ in 0..50 {
            state = Some(review_outcome(state.as_ref(), false, date("2025-01-01")));
        }
        assert_eq!(state.unwrap().ease, MIN_EASE);
    }

    #[test]
    fn repeated_successes_never_shrink_interval() {
        let mut state = ReviewItem::new(date("2025-01-01"));
        let mut last = state.interval_days;
        for _ in 0..20 {
            state = review_outcome(Some(&state), true, date("2025-01-01"));
            assert!(state.interval_days >= last);
            last = state.interval_days;
        }
    }

    #[test]
    fn corrupted_state_heals_in_one_review() {
        let negative = review_outcome(Some(&item(2.3, -5, 0)), true, date("2025-01-01"));
        assert_eq!(negative.interval_days, 1);
        assert_eq!(negative.due, date("2025-01-02"));

        let wild = review_outcome(Some(&item(9.0, 10, 0)), true, date("2025-01-01"));
        assert_eq!(wild.ease, MAX_EASE);

        let nan = review_outcome(Some(&item(f64::NAN, 10, 0)), true, date("2025-01-01"));
        assert_eq!(nan.ease, MAX_EASE);
        assert!(nan.interval_days >= 1);

        let low = review_outcome(Some(&item(0.1, 10, 0)), false, date("2025-01-01"));
        assert_eq!(low.ease, MIN_EASE);
    }

    #[test]
    fn out_of_range_ease_is_clamped_on_either_outcome() {
        let high_fail = review_outcome(Some(&item(9.0, 10, 2)), false, date("2025-01-01"));
        assert_eq!(high_fail.ease, MAX_EASE);

        let low_pass = review_outcome(Some(&item(0.1, 10, 2)), true, date("2025-01-01"));
        assert_eq!(low_pass.ease, MIN_EASE);
        assert!(low_pass.interval_days >= 1);

        let nan_fail = review_outcome(Some(&item(f64::NAN, 10, 2)), false, date("2025-01-01"));
        assert!((MIN_EASE..=MAX_EASE).contains(&nan_fail.ease));
    }

    #[test]
    fn negative_streak_restarts_at_one() {
        let result = review_outcome(Some(&item(2.3, 3, -4)), true, date("2025-01-01"));
        assert_eq!(result.streak, 1);

        let parsed: ReviewItem =
            serde_json::from_str(r#"{"ease":2.1,"intervalDays":3,"due":"2025-02-03","streak":-2}"#)
                .unwrap();
        assert_eq!(parsed.streak, -2);
    }

    #[test]
    fn huge_interval_saturates_due_date() {
        let result = review_outcome(Some(&item(2.8, i64::MAX / 2, 9)), true, date("2025-01-01"));
        assert_eq!(result.due, NaiveDate::MAX);
    }

    #[test]
    fn due_date_crosses_month_and_leap_day() {
        let result = review_outcome(Some(&item(2.3, 1, 1)), true, date("2024-02-27"));
        assert_eq!(result.due, date("2024-03-01"));
    }

    #[test]
    fn is_due_boundaries() {
        let it = item(2.3, 1, 1);
        assert!(is_due(Some(&it), date("2025-01-01")));
        assert!(is_due(Some(&it), date("2025-06-01")));
        assert!(!is_due(Some(&it), date("2024-12-31")));
        assert!(!is_due(None, date("2025-01-01")));
    }

    #[test]
    fn scenario_failure_on_due_date() {
        let prev = ReviewItem {
            ease: 2.5,
            interval_days: 7,
            due: date("2025-01-01"),
            streak: 3,
        };
        let result = review_outcome(Some(&prev), false, date("2025-01-01"));
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.due, date("2025-01-02"));
        assert_eq!(result.streak, 0);
        assert!(result.ease <= 2.5);
    }

    #[test]
    fn json_shape() {
        let it = item(2.5, 7, 3);
        let json = serde_json::to_value(&it).unwrap();
        assert_eq!(json["ease"], 2.5);
        assert_eq!(json["intervalDays"], 7);
        assert_eq!(json["due"], "2025-01-01");
        assert_eq!(json["streak"], 3);

        let parsed: ReviewItem =
            serde_json::from_str(r#"{"ease":2.1,"intervalDays":3,"due":"2025-02-03","streak":1}"#)
                .unwrap();
        assert_eq!(parsed.due, date("2025-02-03"));
    }
}
