use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_account::Account;
use std::sync::Arc;

use crate::shared::data::snapshot;

fn respond(snapshot: Option<Arc<Vec<Account>>>) -> Result<Json<Vec<Account>>, StatusCode> {
    match snapshot {
        Some(accounts) => Ok(Json(accounts.as_ref().clone())),
        None => {
            tracing::error!("Account snapshot requested before it was loaded");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// GET /api/accounts
pub async fn list_all() -> Result<Json<Vec<Account>>, StatusCode> {
    respond(snapshot::get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_snapshot_is_unavailable() {
        assert_eq!(respond(None).unwrap_err(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_returns_snapshot_in_order() {
        let accounts = vec![
            Account::new_onboarding("B", "Ana", "Fresh QMS", 1.0),
            Account::new_onboarding("A", "Sam", "Fresh QMS", 2.0),
        ];
        let Json(body) = respond(Some(Arc::new(accounts))).unwrap();
        assert_eq!(body[0].name, "B");
        assert_eq!(body[1].name, "A");
    }
}
