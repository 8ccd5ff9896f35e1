use chrono::{Duration, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::metrics::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    Week,
    Month,
    Quarter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowDirection {
    /// Keeps dates on or after `now - window`
    LookBack,
    /// Keeps dates on or before `now + window`
    LookAhead,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [TimeWindow::Week, TimeWindow::Month, TimeWindow::Quarter];

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Week => "Week",
            TimeWindow::Month => "Month",
            TimeWindow::Quarter => "Quarter",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Quarter => "quarter",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.code() == code)
    }

    /// Boundary instant. Months are calendar months; the day clamps to the
    /// end of a shorter month.
    pub fn threshold(&self, now: NaiveDateTime, direction: WindowDirection) -> NaiveDateTime {
        let months = match self {
            TimeWindow::Week => None,
            TimeWindow::Month => Some(Months::new(1)),
            TimeWindow::Quarter => Some(Months::new(3)),
        };
        let shifted = match (months, direction) {
            (None, WindowDirection::LookBack) => now.checked_sub_signed(Duration::days(7)),
            (None, WindowDirection::LookAhead) => now.checked_add_signed(Duration::days(7)),
            (Some(m), WindowDirection::LookBack) => now.checked_sub_months(m),
            (Some(m), WindowDirection::LookAhead) => now.checked_add_months(m),
        };
        shifted.unwrap_or(now)
    }

    /// Whether a source date falls inside the window; unparseable dates never do
    pub fn contains(&self, date: &str, now: NaiveDateTime, direction: WindowDirection) -> bool {
        let Some(date) = parse_date(date) else {
            return false;
        };
        let threshold = self.threshold(now, direction);
        match direction {
            WindowDirection::LookBack => date >= threshold,
            WindowDirection::LookAhead => date <= threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_threshold_week() {
        let now = at("2025-03-15");
        assert_eq!(
            TimeWindow::Week.threshold(now, WindowDirection::LookBack),
            at("2025-03-08")
        );
        assert_eq!(
            TimeWindow::Week.threshold(now, WindowDirection::LookAhead),
            at("2025-03-22")
        );
    }

    #[test]
    fn test_threshold_calendar_months() {
        let now = at("2025-03-31");
        assert_eq!(
            TimeWindow::Month.threshold(now, WindowDirection::LookBack),
            at("2025-02-28")
        );
        assert_eq!(
            TimeWindow::Quarter.threshold(now, WindowDirection::LookAhead),
            at("2025-06-30")
        );
    }

    #[test]
    fn test_look_back_keeps_recent() {
        let now = at("2025-03-15");
        let w = TimeWindow::Month;
        assert!(w.contains("2025-03-01", now, WindowDirection::LookBack));
        assert!(w.contains("2025-02-15", now, WindowDirection::LookBack));
        assert!(!w.contains("2025-02-14", now, WindowDirection::LookBack));
        assert!(!w.contains("junk", now, WindowDirection::LookBack));
    }

    #[test]
    fn test_look_ahead_has_no_lower_bound() {
        let now = at("2025-03-15");
        let w = TimeWindow::Week;
        assert!(w.contains("2025-03-22", now, WindowDirection::LookAhead));
        assert!(!w.contains("2025-03-23", now, WindowDirection::LookAhead));
        // past dates pass a look-ahead window
        assert!(w.contains("2024-01-01", now, WindowDirection::LookAhead));
    }

    #[test]
    fn test_codes() {
        assert_eq!(TimeWindow::from_code("quarter"), Some(TimeWindow::Quarter));
        assert_eq!(TimeWindow::from_code("year"), None);
    }
}
