//! Derivation pipeline shared by all dashboards: select → enrich → shape,
//! with optional grouping and KPI reductions.
//!
//! Every account is enriched exactly once when the pipeline is built; later
//! stages only read the enriched values. Nothing here reads the clock, the
//! caller supplies "now" through [`PipelineContext`].

pub mod group;
pub mod risk;
pub mod window;

use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use crate::domain::a001_account::Account;
use crate::shared::metrics::{self, ProgressTuple};

pub use group::{group_by, AggregateBucket, GroupSpec};
pub use risk::{classify, GoLiveReadiness, RiskFlags, RiskThresholds, RiskTier};
pub use window::{TimeWindow, WindowDirection};

/// Inputs shared by every derivation of one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineContext {
    pub now: NaiveDateTime,
}

impl PipelineContext {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

/// Account with its per-render derived values
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedAccount<'a> {
    pub account: &'a Account,
    pub progress: ProgressTuple,
    pub days_to_go_live: Option<i64>,
    /// Start to validation, fractional days
    pub ttv_days: Option<f64>,
}

impl<'a> EnrichedAccount<'a> {
    pub fn enrich(account: &'a Account, ctx: &PipelineContext) -> Self {
        Self {
            account,
            progress: metrics::progress_tuple(account),
            days_to_go_live: metrics::days_until(account.go_live_date.as_deref(), ctx.now),
            ttv_days: metrics::elapsed_days(&account.start_date, account.validation_date.as_deref()),
        }
    }
}

/// Ordered, enriched view over a snapshot
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    items: Vec<EnrichedAccount<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new(snapshot: &'a [Account], ctx: &PipelineContext) -> Self {
        Self {
            items: snapshot
                .iter()
                .map(|a| EnrichedAccount::enrich(a, ctx))
                .collect(),
        }
    }

    /// Keeps matching records; chained calls AND together
    pub fn select<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&EnrichedAccount<'a>) -> bool,
    {
        self.items.retain(|item| predicate(item));
        self
    }

    /// Stable reorder
    pub fn sorted_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&EnrichedAccount<'a>, &EnrichedAccount<'a>) -> Ordering,
    {
        self.items.sort_by(compare);
        self
    }

    pub fn take(mut self, n: usize) -> Self {
        self.items.truncate(n);
        self
    }

    pub fn items(&self) -> &[EnrichedAccount<'a>] {
        &self.items
    }

    pub fn shape<T, F>(&self, f: F) -> Vec<T>
    where
        F: Fn(&EnrichedAccount<'a>) -> T,
    {
        self.items.iter().map(f).collect()
    }

    pub fn group(&self, grouping: &GroupSpec<'_, EnrichedAccount<'a>>) -> Vec<AggregateBucket> {
        group_by(&self.items, grouping)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sum<F>(&self, f: F) -> f64
    where
        F: Fn(&EnrichedAccount<'a>) -> f64,
    {
        self.items.iter().map(f).sum()
    }

    /// `None` for an empty selection
    pub fn average<F>(&self, f: F) -> Option<f64>
    where
        F: Fn(&EnrichedAccount<'a>) -> f64,
    {
        metrics::average(self.items.iter().map(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_account::JourneyStatus;

    fn ctx() -> PipelineContext {
        PipelineContext::new(metrics::parse_date("2025-03-01").unwrap())
    }

    fn account(name: &str, guru: &str, done: f64, prev: Option<f64>) -> Account {
        let mut a = Account::new_onboarding(name, guru, "Fresh QMS", 1000.0);
        a.total_tasks_hours = 100.0;
        a.tasks_completed_hours = done;
        a.previous_week_progress = prev;
        a
    }

    #[test]
    fn test_critical_scenario() {
        let snapshot = vec![account("A", "Ana", 25.0, Some(40.0))];
        let t = RiskThresholds::default();
        let critical = Pipeline::new(&snapshot, &ctx()).select(|i| risk::is_critical(i, &t));

        assert_eq!(critical.count(), 1);
        let item = &critical.items()[0];
        assert_eq!(item.progress.current, 25.0);
        assert_eq!(item.progress.variance, -15.0);
        assert_eq!(risk::critical_issue(item), "Negative Variance");
    }

    #[test]
    fn test_enrich_dates() {
        let mut a = account("A", "Ana", 50.0, None);
        a.go_live_date = Some("2025-03-10".into());
        a.milestone_date = Some("bad".into());
        a.start_date = "2025-01-01".into();
        a.validation_date = Some("2025-01-31".into());

        let item = EnrichedAccount::enrich(&a, &ctx());
        assert_eq!(item.days_to_go_live, Some(9));
        assert_eq!(item.ttv_days, Some(30.0));
        assert_eq!(item.progress.variance, 50.0);
    }

    #[test]
    fn test_select_chains_and_reductions() {
        let mut stuck = account("C", "Ana", 10.0, Some(10.0));
        stuck.journey_status = JourneyStatus::Stuck;
        let snapshot = vec![
            account("A", "Ana", 50.0, Some(40.0)),
            account("B", "Sam", 80.0, Some(70.0)),
            stuck,
        ];

        let ana = Pipeline::new(&snapshot, &ctx())
            .select(|i| i.account.guru == "Ana")
            .select(|i| i.account.journey_status != JourneyStatus::Stuck);
        assert_eq!(ana.count(), 1);
        assert_eq!(ana.sum(|i| i.account.arr), 1000.0);

        let all = Pipeline::new(&snapshot, &ctx());
        assert_eq!(all.average(|i| i.progress.current), Some(140.0 / 3.0));
        let none = all.clone().select(|_| false);
        assert_eq!(none.average(|i| i.progress.current), None);
        assert!(none.is_empty());
    }

    #[test]
    fn test_group_and_shape() {
        let snapshot = vec![
            account("A", "Ana", 50.0, None),
            account("B", "Sam", 80.0, None),
            account("C", "Ana", 10.0, None),
        ];
        let pipeline = Pipeline::new(&snapshot, &ctx());
        let buckets = pipeline.group(
            &GroupSpec::by(|i: &EnrichedAccount| i.account.guru.clone())
                .summing(|i: &EnrichedAccount| i.account.arr),
        );
        assert_eq!(buckets[0].key, "Ana");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[0].sum, Some(2000.0));

        let names = pipeline
            .sorted_by(|a, b| b.progress.current.total_cmp(&a.progress.current))
            .take(2)
            .shape(|i| i.account.name.clone());
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_zero_hours_do_not_break_reductions() {
        let mut a = account("A", "Ana", 0.0, None);
        a.total_tasks_hours = 0.0;
        let snapshot = vec![a];
        let pipeline = Pipeline::new(&snapshot, &ctx());
        assert!(pipeline.items()[0].progress.current.is_nan());
        assert_eq!(pipeline.count(), 1);
    }
}
