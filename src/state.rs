use crate::ai::AiClient;
use crate::errors::AppError;
use crate::storage::{self, Store};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub store: Arc<Mutex<Store>>,
    pub ai: AiClient,
}

impl AppState {
    pub fn new(data_dir: PathBuf, store: Store, ai: AiClient) -> Self {
        Self {
            data_dir,
            store: Arc::new(Mutex::new(store)),
            ai,
        }
    }

    pub async fn persist_posts(&self, store: &Store) -> Result<(), AppError> {
        storage::persist_json(&self.data_dir.join(storage::POSTS_FILE), &store.posts).await
    }

    pub async fn persist_accounts(&self, store: &Store) -> Result<(), AppError> {
        storage::persist_json(&self.data_dir.join(storage::ACCOUNTS_FILE), &store.accounts).await
    }

    pub async fn persist_earnings(&self, store: &Store) -> Result<(), AppError> {
        storage::persist_json(&self.data_dir.join(storage::EARNINGS_FILE), &store.earnings).await
    }

    pub async fn persist_expenses(&self, store: &Store) -> Result<(), AppError> {
        storage::persist_json(&self.data_dir.join(storage::EXPENSES_FILE), &store.expenses).await
    }

    pub async fn persist_preferences(&self, store: &Store) -> Result<(), AppError> {
        storage::persist_json(
            &self.data_dir.join(storage::PREFERENCES_FILE),
            &store.preferences,
        )
        .await
    }
}
