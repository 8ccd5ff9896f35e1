use serde::{Deserialize, Serialize};

use crate::shared::format;
use crate::shared::pipeline::AggregateBucket;

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// How to format the numeric value on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money,
    Number { decimals: u8 },
    Percent { decimals: u8 },
    /// Percent with a leading `+` for gains
    SignedPercent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn apply(&self, value: f64) -> String {
        match *self {
            ValueFormat::Money => format::format_money(value),
            ValueFormat::Number { decimals } => format::format_fixed(value, decimals as usize),
            ValueFormat::Percent { decimals } => format::format_percent(value, decimals as usize),
            ValueFormat::SignedPercent { decimals } => {
                format::format_signed_percent(value, decimals as usize)
            }
            ValueFormat::Integer => format::format_number_with_decimals(value, 0),
        }
    }
}

/// Direction arrow shown next to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

/// A single KPI card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    /// `None` when the value cannot be computed (empty selection)
    pub value: Option<f64>,
    pub format: ValueFormat,
    pub subtitle: String,
    pub trend: Trend,
}

impl Kpi {
    pub fn new(title: impl Into<String>, value: Option<f64>, format: ValueFormat) -> Self {
        Self {
            title: title.into(),
            value,
            format,
            subtitle: String::new(),
            trend: Trend::Neutral,
        }
    }

    pub fn count(title: impl Into<String>, count: usize) -> Self {
        Self::new(title, Some(count as f64), ValueFormat::Integer)
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => self.format.apply(v),
            None => format::DASH.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bars from bucket counts
pub fn count_series(buckets: &[AggregateBucket]) -> Vec<ChartPoint> {
    buckets
        .iter()
        .map(|b| ChartPoint::new(b.key.clone(), b.count as f64))
        .collect()
}

/// Bars from bucket sums; buckets without a sum plot as 0
pub fn sum_series(buckets: &[AggregateBucket]) -> Vec<ChartPoint> {
    buckets
        .iter()
        .map(|b| ChartPoint::new(b.key.clone(), b.sum.unwrap_or(0.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_display() {
        let arr = Kpi::new("Total ARR", Some(125000.0), ValueFormat::Money);
        assert_eq!(arr.display_value(), "$125,000");

        let empty = Kpi::new("Avg", None, ValueFormat::Number { decimals: 1 });
        assert_eq!(empty.display_value(), format::DASH);

        let variance = Kpi::new("Variance", Some(2.345), ValueFormat::SignedPercent { decimals: 1 });
        assert_eq!(variance.display_value(), "+2.3%");

        assert_eq!(Kpi::count("Stuck", 1234).display_value(), "1,234");
    }

    #[test]
    fn test_series() {
        let buckets = vec![
            AggregateBucket { key: "Ana".into(), count: 2, sum: Some(300.0) },
            AggregateBucket { key: "Sam".into(), count: 1, sum: None },
        ];
        assert_eq!(
            count_series(&buckets),
            vec![ChartPoint::new("Ana", 2.0), ChartPoint::new("Sam", 1.0)]
        );
        assert_eq!(sum_series(&buckets)[1].value, 0.0);
    }
}
