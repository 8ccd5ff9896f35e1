use serde::{Deserialize, Serialize};

// ============================================================================
// Status enums
// ============================================================================

/// Commercial status of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    Open,
    #[serde(rename = "At Risk")]
    AtRisk,
    Closed,
    #[serde(other)]
    Other,
}

impl AccountStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AccountStatus::Open => "Open",
            AccountStatus::AtRisk => "At Risk",
            AccountStatus::Closed => "Closed",
            AccountStatus::Other => "Other",
        }
    }
}

/// Onboarding journey state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JourneyStatus {
    Open,
    Stuck,
    Complete,
    #[serde(other)]
    Other,
}

impl JourneyStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            JourneyStatus::Open => "Open",
            JourneyStatus::Stuck => "Stuck",
            JourneyStatus::Complete => "Complete",
            JourneyStatus::Other => "Other",
        }
    }
}

// ============================================================================
// Account record
// ============================================================================

/// Customer account as delivered by the account source.
///
/// The record is read-only for the whole dashboard: views derive from it but
/// never write back. Dates are kept as the source strings (`YYYY-MM-DD` or
/// RFC 3339) and parsed on demand by `shared::metrics::parse_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    pub arr: f64,
    pub product: String,
    #[serde(default)]
    pub implementation_type: String,

    pub is_onboarding: bool,
    #[serde(default)]
    pub churned: bool,
    #[serde(default)]
    pub churn_reason: Option<String>,
    pub status: AccountStatus,
    pub journey_status: JourneyStatus,
    #[serde(default)]
    pub phase: String,

    // Progress inputs
    pub tasks_completed_hours: f64,
    pub total_tasks_hours: f64,
    #[serde(default)]
    pub previous_week_progress: Option<f64>,

    // Scheduling
    pub created_at: String,
    pub start_date: String,
    #[serde(default)]
    pub validation_date: Option<String>,
    #[serde(default)]
    pub milestone_date: Option<String>,
    #[serde(default)]
    pub go_live_date: Option<String>,
    #[serde(default)]
    pub completed_date: Option<String>,

    pub csat: f64,
    pub guru: String,

    /// Append-only, oldest first
    #[serde(default)]
    pub risk_notes: Vec<String>,
    #[serde(default)]
    pub churn_notes: Vec<String>,
}

impl Account {
    /// Minimal onboarding account, used by tests and fixtures
    pub fn new_onboarding(name: &str, guru: &str, product: &str, arr: f64) -> Self {
        Self {
            name: name.to_string(),
            arr,
            product: product.to_string(),
            implementation_type: String::new(),
            is_onboarding: true,
            churned: false,
            churn_reason: None,
            status: AccountStatus::Open,
            journey_status: JourneyStatus::Open,
            phase: String::new(),
            tasks_completed_hours: 0.0,
            total_tasks_hours: 0.0,
            previous_week_progress: None,
            created_at: String::new(),
            start_date: String::new(),
            validation_date: None,
            milestone_date: None,
            go_live_date: None,
            completed_date: None,
            csat: 0.0,
            guru: guru.to_string(),
            risk_notes: Vec::new(),
            churn_notes: Vec::new(),
        }
    }

    pub fn risk_note_count(&self) -> usize {
        self.risk_notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_source_record() {
        let json = r#"{
            "name": "Acme Labs",
            "arr": 48000,
            "product": "Fresh QMS",
            "implementationType": "Standard",
            "isOnboarding": true,
            "churned": false,
            "status": "At Risk",
            "journeyStatus": "Stuck",
            "phase": "Implementation",
            "tasksCompletedHours": 12,
            "totalTasksHours": 40,
            "createdAt": "2025-01-10",
            "startDate": "2025-01-15",
            "goLiveDate": "2025-04-01",
            "csat": 4.2,
            "guru": "Stacey",
            "riskNotes": ["Waiting on IT"]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.status, AccountStatus::AtRisk);
        assert_eq!(account.journey_status, JourneyStatus::Stuck);
        assert_eq!(account.previous_week_progress, None);
        assert_eq!(account.go_live_date.as_deref(), Some("2025-04-01"));
        assert!(account.churn_notes.is_empty());
        assert_eq!(account.risk_note_count(), 1);
    }

    #[test]
    fn test_unknown_status_maps_to_other() {
        let status: JourneyStatus = serde_json::from_str(r#""Paused""#).unwrap();
        assert_eq!(status, JourneyStatus::Other);
        let status: AccountStatus = serde_json::from_str(r#""Pending""#).unwrap();
        assert_eq!(status, AccountStatus::Other);
    }
}
