//! Calls to the backend API

use contracts::domain::a001_account::Account;
use gloo_net::http::Request;

/// Base URL of the backend: same host as the page, port 3000.
///
/// Empty when there is no window (the request then goes to a relative path).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Fetch the whole account snapshot
pub async fn fetch_accounts() -> Result<Vec<Account>, String> {
    let response = Request::get(&api_url("/api/accounts"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    serde_json::from_str::<Vec<Account>>(&text)
        .map_err(|e| format!("Failed to parse accounts: {}", e))
}
