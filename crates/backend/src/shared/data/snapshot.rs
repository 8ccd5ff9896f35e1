use contracts::domain::a001_account::Account;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Account snapshot shared read-only by every request
static SNAPSHOT: OnceCell<Arc<Vec<Account>>> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read account snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid account snapshot {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("account snapshot already initialized")]
    AlreadyInitialized,
}

/// Parse a JSON array of account records
pub fn parse_accounts(contents: &str, path: &Path) -> Result<Vec<Account>, SnapshotError> {
    serde_json::from_str(contents).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn load_accounts(path: &Path) -> Result<Vec<Account>, SnapshotError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_accounts(&contents, path)
}

/// Install an already loaded snapshot
pub fn install(accounts: Vec<Account>) -> Result<Arc<Vec<Account>>, SnapshotError> {
    let snapshot = Arc::new(accounts);
    SNAPSHOT
        .set(snapshot.clone())
        .map_err(|_| SnapshotError::AlreadyInitialized)?;
    Ok(snapshot)
}

/// Load the snapshot file once at startup; returns the record count
pub async fn initialize_snapshot(path: &Path) -> Result<usize, SnapshotError> {
    let accounts = load_accounts(path).await?;
    let count = accounts.len();
    install(accounts)?;
    tracing::info!("Loaded {} accounts from {}", count, path.display());
    Ok(count)
}

/// `None` until `initialize_snapshot` has run
pub fn get() -> Option<Arc<Vec<Account>>> {
    SNAPSHOT.get().cloned()
}
