use contracts::domain::a001_account::Account;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api;

/// Account snapshot shared by every page.
///
/// Fetched once when the app mounts; pages only read it.
#[derive(Clone, Copy)]
pub struct AccountStore {
    pub accounts: RwSignal<Vec<Account>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let store = *self;
        store.loading.set(true);
        store.error.set(None);

        spawn_local(async move {
            match api::fetch_accounts().await {
                Ok(accounts) => {
                    log::info!("Loaded {} accounts", accounts.len());
                    store.accounts.set(accounts);
                }
                Err(e) => {
                    log::error!("Failed to load accounts: {}", e);
                    store.error.set(Some(e));
                }
            }
            store.loading.set(false);
        });
    }

    /// Keep a page view model in sync with the snapshot.
    ///
    /// `build` runs again whenever the snapshot or any signal it reads
    /// changes.
    pub fn derive<T, F>(&self, build: F) -> RwSignal<T>
    where
        T: Send + Sync + 'static,
        F: Fn(&[Account]) -> T + 'static,
    {
        let accounts = self.accounts;
        let initial = untrack(|| accounts.with(|a| build(a.as_slice())));
        let view = RwSignal::new(initial);

        Effect::new(move |_| {
            let next = accounts.with(|a| build(a.as_slice()));
            view.set(next);
        });

        view
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_account_store() -> AccountStore {
    expect_context::<AccountStore>()
}
