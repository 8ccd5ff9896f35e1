//! Metric functions: single derived values computed from account fields.
//!
//! Every function here is pure and total. Nothing reads the wall clock; views
//! that need "today" pass it in explicitly.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::a001_account::Account;

const MS_PER_DAY: i64 = 86_400_000;

/// Placeholder shown for an empty note log
pub const NO_NOTES: &str = "No notes";

/// Progress of an account measured in task hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressTuple {
    pub current: f64,
    pub previous: f64,
    pub variance: f64,
}

/// `completed / total * 100`, unclamped.
///
/// Zero total hours yields `NaN`; display code must check `is_finite()`
/// before formatting.
pub fn progress_percent(completed_hours: f64, total_hours: f64) -> f64 {
    if total_hours == 0.0 {
        return f64::NAN;
    }
    completed_hours / total_hours * 100.0
}

/// Week-over-week change. Missing previous progress counts as 0.
pub fn variance(current: f64, previous: Option<f64>) -> f64 {
    current - previous.unwrap_or(0.0)
}

pub fn progress_tuple(account: &Account) -> ProgressTuple {
    let current = progress_percent(account.tasks_completed_hours, account.total_tasks_hours);
    let previous = account.previous_week_progress.unwrap_or(0.0);
    ProgressTuple {
        current,
        previous,
        variance: variance(current, account.previous_week_progress),
    }
}

/// Parse a source date: `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS`.
///
/// Plain dates resolve to midnight.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Whole days from `from` to `to`, rounded up: `ceil((to - from) / 1 day)`.
///
/// Negative when `from` is after `to`.
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let ms = (to - from).num_milliseconds();
    // ceil for both signs
    let days = ms / MS_PER_DAY;
    if ms % MS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Days from `now` until the given source date; `None` when absent or unparseable.
pub fn days_until(date: Option<&str>, now: NaiveDateTime) -> Option<i64> {
    let target = parse_date(date?)?;
    Some(days_between(now, target))
}

/// Fractional elapsed days between two source dates (time to value).
pub fn elapsed_days(start: &str, end: Option<&str>) -> Option<f64> {
    let start = parse_date(start)?;
    let end = parse_date(end?)?;
    Some((end - start).num_milliseconds() as f64 / MS_PER_DAY as f64)
}

/// Arithmetic mean; `None` for an empty collection so every caller decides
/// between showing 0 and skipping the value.
pub fn average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Most recent note, or the "No notes" placeholder.
pub fn latest_note(notes: &[String]) -> &str {
    notes.last().map(String::as_str).unwrap_or(NO_NOTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str) -> NaiveDateTime {
        parse_date(date).unwrap()
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(25.0, 100.0), 25.0);
        assert_eq!(progress_percent(150.0, 100.0), 150.0);
        assert!(progress_percent(10.0, 0.0).is_nan());
        assert!(progress_percent(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_variance_defaults_previous_to_zero() {
        assert_eq!(variance(25.0, Some(40.0)), -15.0);
        assert_eq!(variance(25.0, None), 25.0);
    }

    #[test]
    fn test_progress_tuple() {
        let mut account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        account.total_tasks_hours = 100.0;
        account.tasks_completed_hours = 25.0;
        account.previous_week_progress = Some(40.0);

        let progress = progress_tuple(&account);
        assert_eq!(progress.current, 25.0);
        assert_eq!(progress.previous, 40.0);
        assert_eq!(progress.variance, -15.0);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(at("2025-03-15").to_string(), "2025-03-15 00:00:00");
        assert_eq!(at("2025-03-15T14:02:26Z").to_string(), "2025-03-15 14:02:26");
        assert_eq!(
            at("2025-03-15T14:02:26.500").to_string(),
            "2025-03-15 14:02:26.500"
        );
        assert!(parse_date("").is_none());
        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn test_days_between_rounds_up() {
        assert_eq!(days_between(at("2025-03-01"), at("2025-03-15")), 14);
        assert_eq!(days_between(at("2025-03-15"), at("2025-03-01")), -14);
        assert_eq!(days_between(at("2025-03-01T12:00:00Z"), at("2025-03-15")), 14);
        assert_eq!(days_between(at("2025-03-01T12:00:00Z"), at("2025-03-02T13:00:00Z")), 2);
        assert_eq!(days_between(at("2025-03-02T12:00:00Z"), at("2025-03-01")), -1);
        assert_eq!(days_between(at("2025-03-01"), at("2025-03-01")), 0);
    }

    #[test]
    fn test_days_until() {
        let now = at("2025-03-01T09:00:00Z");
        assert_eq!(days_until(Some("2025-03-10"), now), Some(9));
        assert_eq!(days_until(None, now), None);
        assert_eq!(days_until(Some("garbage"), now), None);
    }

    #[test]
    fn test_elapsed_days() {
        assert_eq!(elapsed_days("2025-01-01", Some("2025-01-31")), Some(30.0));
        assert_eq!(
            elapsed_days("2025-01-01T00:00:00Z", Some("2025-01-01T12:00:00Z")),
            Some(0.5)
        );
        assert_eq!(elapsed_days("2025-01-01", None), None);
    }

    #[test]
    fn test_average_guards_empty() {
        assert_eq!(average(vec![2.0, 4.0]), Some(3.0));
        assert_eq!(average(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_latest_note() {
        let notes = vec!["first".to_string(), "second".to_string()];
        assert_eq!(latest_note(&notes), "second");
        assert_eq!(latest_note(&[]), NO_NOTES);
    }
}
