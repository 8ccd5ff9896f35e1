use serde::{Deserialize, Serialize};

use super::EnrichedAccount;
use crate::domain::a001_account::JourneyStatus;

/// Thresholds of the risk rules. Pages that disagree on a threshold carry
/// their own copy instead of changing the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Variance strictly below this is critical
    pub critical_variance: f64,
    /// Progress strictly below this is high risk
    pub high_progress: f64,
    /// This many risk notes or more is high risk
    pub high_note_count: usize,
    /// Near-milestone window, days
    pub milestone_window_days: i64,
    /// Below this, a near-milestone account counts as medium risk
    pub milestone_min_progress: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical_variance: -5.0,
            high_progress: 30.0,
            high_note_count: 3,
            milestone_window_days: 14,
            milestone_min_progress: 70.0,
        }
    }
}

/// Independent risk flags; an account may raise several at once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlags {
    pub critical: bool,
    pub high: bool,
    pub near_milestone: bool,
    pub stalled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl RiskTier {
    pub const ALL: [RiskTier; 5] = [
        RiskTier::Critical,
        RiskTier::High,
        RiskTier::Medium,
        RiskTier::Low,
        RiskTier::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Critical => "Critical",
            RiskTier::High => "High Risk",
            RiskTier::Medium => "Medium",
            RiskTier::Low => "Low Risk",
            RiskTier::None => "On Track",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskTier::Critical => "🔴",
            RiskTier::High => "🟠",
            RiskTier::Medium => "🟡",
            RiskTier::Low => "🔵",
            RiskTier::None => "🟢",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RiskTier::Critical => "critical",
            RiskTier::High => "high",
            RiskTier::Medium => "medium",
            RiskTier::Low => "low",
            RiskTier::None => "none",
        }
    }
}

/// Journey stuck, or progress fell faster than the threshold
pub fn is_critical(item: &EnrichedAccount<'_>, t: &RiskThresholds) -> bool {
    item.account.journey_status == JourneyStatus::Stuck
        || item.progress.variance < t.critical_variance
}

pub fn is_high_risk(item: &EnrichedAccount<'_>, t: &RiskThresholds) -> bool {
    item.progress.current < t.high_progress
        || item.account.risk_note_count() >= t.high_note_count
}

/// Target date within `(0, window]` days of now
pub fn is_near(days_until: Option<i64>, window_days: i64) -> bool {
    matches!(days_until, Some(d) if d > 0 && d <= window_days)
}

/// No change since last week and not finished
pub fn is_stalled(item: &EnrichedAccount<'_>) -> bool {
    item.progress.current == item.progress.previous && item.progress.current < 100.0
}

pub fn flags(item: &EnrichedAccount<'_>, t: &RiskThresholds) -> RiskFlags {
    RiskFlags {
        critical: is_critical(item, t),
        high: is_high_risk(item, t),
        near_milestone: is_near(item.days_to_go_live, t.milestone_window_days),
        stalled: is_stalled(item),
    }
}

/// Issue label of a critical account
pub fn critical_issue(item: &EnrichedAccount<'_>) -> &'static str {
    if item.account.journey_status == JourneyStatus::Stuck {
        "Journey Stuck"
    } else {
        "Negative Variance"
    }
}

/// Issue label of a high-risk account
pub fn high_risk_issue(item: &EnrichedAccount<'_>, t: &RiskThresholds) -> String {
    if item.progress.current < t.high_progress {
        "Low Progress".to_string()
    } else {
        format!("{} Risk Notes", item.account.risk_note_count())
    }
}

/// Single badge tier, first match wins
pub fn classify(item: &EnrichedAccount<'_>, t: &RiskThresholds) -> RiskTier {
    let f = flags(item, t);
    if f.critical {
        RiskTier::Critical
    } else if f.high {
        RiskTier::High
    } else if f.stalled || (f.near_milestone && item.progress.current < t.milestone_min_progress) {
        RiskTier::Medium
    } else if !item.account.risk_notes.is_empty() {
        RiskTier::Low
    } else {
        RiskTier::None
    }
}

/// Readiness of an account close to go-live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoLiveReadiness {
    OnTrack,
    AtRisk,
    Critical,
}

impl GoLiveReadiness {
    pub fn from_progress(progress: f64) -> Self {
        if progress >= 90.0 {
            GoLiveReadiness::OnTrack
        } else if progress >= 70.0 {
            GoLiveReadiness::AtRisk
        } else {
            GoLiveReadiness::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoLiveReadiness::OnTrack => "On Track",
            GoLiveReadiness::AtRisk => "At Risk",
            GoLiveReadiness::Critical => "Critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_account::Account;
    use crate::shared::metrics::ProgressTuple;

    fn enriched(account: &Account, current: f64, previous: f64) -> EnrichedAccount<'_> {
        EnrichedAccount {
            account,
            progress: ProgressTuple {
                current,
                previous,
                variance: current - previous,
            },
            days_to_go_live: None,
            ttv_days: None,
        }
    }

    #[test]
    fn test_negative_variance_is_critical() {
        let account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        let item = enriched(&account, 25.0, 40.0);
        let t = RiskThresholds::default();
        assert!(is_critical(&item, &t));
        assert_eq!(critical_issue(&item), "Negative Variance");
        assert_eq!(classify(&item, &t), RiskTier::Critical);
    }

    #[test]
    fn test_stuck_is_critical() {
        let mut account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        account.journey_status = JourneyStatus::Stuck;
        let item = enriched(&account, 80.0, 70.0);
        assert_eq!(critical_issue(&item), "Journey Stuck");
        assert_eq!(classify(&item, &RiskThresholds::default()), RiskTier::Critical);
    }

    #[test]
    fn test_high_risk_labels() {
        let t = RiskThresholds::default();
        let mut account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        let low = enriched(&account, 20.0, 18.0);
        assert_eq!(high_risk_issue(&low, &t), "Low Progress");
        assert_eq!(classify(&low, &t), RiskTier::High);

        account.risk_notes = vec!["a".into(), "b".into(), "c".into()];
        let noted = enriched(&account, 60.0, 55.0);
        assert!(is_high_risk(&noted, &t));
        assert_eq!(high_risk_issue(&noted, &t), "3 Risk Notes");
    }

    #[test]
    fn test_near_window_boundaries() {
        assert!(!is_near(Some(0), 14));
        assert!(is_near(Some(1), 14));
        assert!(is_near(Some(14), 14));
        assert!(!is_near(Some(15), 14));
        assert!(!is_near(None, 14));
    }

    #[test]
    fn test_stalled() {
        let account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        assert!(is_stalled(&enriched(&account, 50.0, 50.0)));
        assert!(!is_stalled(&enriched(&account, 100.0, 100.0)));
        assert!(!is_stalled(&enriched(&account, 55.0, 50.0)));
        assert!(!is_stalled(&enriched(&account, f64::NAN, 0.0)));
        assert_eq!(
            classify(&enriched(&account, 50.0, 50.0), &RiskThresholds::default()),
            RiskTier::Medium
        );
    }

    #[test]
    fn test_near_milestone_with_low_progress_is_medium() {
        let account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        let t = RiskThresholds::default();
        let mut item = enriched(&account, 60.0, 50.0);
        item.days_to_go_live = Some(5);
        assert_eq!(classify(&item, &t), RiskTier::Medium);

        let mut ready = enriched(&account, 95.0, 90.0);
        ready.days_to_go_live = Some(5);
        assert_eq!(classify(&ready, &t), RiskTier::None);
    }

    #[test]
    fn test_notes_only_is_low() {
        let mut account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        account.risk_notes = vec!["Waiting on IT".into()];
        let item = enriched(&account, 60.0, 50.0);
        assert_eq!(classify(&item, &RiskThresholds::default()), RiskTier::Low);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut account = Account::new_onboarding("A", "Ana", "Fresh QMS", 1000.0);
        account.journey_status = JourneyStatus::Stuck;
        let item = enriched(&account, 10.0, 10.0);
        let f = flags(&item, &RiskThresholds::default());
        assert!(f.critical && f.high && f.stalled);
        assert!(!f.near_milestone);
    }

    #[test]
    fn test_go_live_readiness() {
        assert_eq!(GoLiveReadiness::from_progress(90.0), GoLiveReadiness::OnTrack);
        assert_eq!(GoLiveReadiness::from_progress(70.0), GoLiveReadiness::AtRisk);
        assert_eq!(GoLiveReadiness::from_progress(69.9).label(), "Critical");
    }
}
