use crate::errors::AppError;
use crate::models::{ExpenseItem, MonetizationEntry, Preferences, ScheduledPost, TrackedAccount};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const POSTS_FILE: &str = "scheduled_posts.json";
pub const ACCOUNTS_FILE: &str = "tracked_accounts.json";
pub const EARNINGS_FILE: &str = "monetization_entries.json";
pub const EXPENSES_FILE: &str = "expenses.json";
pub const PREFERENCES_FILE: &str = "preferences.json";

/// In-memory copy of everything on disk, one JSON file per collection.
/// Collections are written back wholesale after every mutation.
#[derive(Debug, Default)]
pub struct Store {
    pub posts: Vec<ScheduledPost>,
    pub accounts: Vec<TrackedAccount>,
    pub earnings: Vec<MonetizationEntry>,
    pub expenses: Vec<ExpenseItem>,
    pub preferences: Preferences,
}

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

/// Missing files are a fresh install, unreadable or corrupt files start the
/// collection over rather than refusing to boot.
pub async fn load_json<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            T::default()
        }
    }
}

pub async fn persist_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn load_store(dir: &Path) -> Store {
    Store {
        posts: load_json(&dir.join(POSTS_FILE)).await,
        accounts: load_json(&dir.join(ACCOUNTS_FILE)).await,
        earnings: load_json(&dir.join(EARNINGS_FILE)).await,
        expenses: load_json(&dir.join(EXPENSES_FILE)).await,
        preferences: load_json(&dir.join(PREFERENCES_FILE)).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Preferences;

    fn scratch_file(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("creator_suite_{tag}_{}_{}.json", std::process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_default() {
        let path = scratch_file("missing");
        let prefs: Preferences = load_json(&path).await;
        assert!(!prefs.dark_mode);
    }

    #[tokio::test]
    async fn corrupt_file_loads_default() {
        let path = scratch_file("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let posts: Vec<ScheduledPost> = load_json(&path).await;
        assert!(posts.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let path = scratch_file("roundtrip");
        let prefs = Preferences { dark_mode: true };
        persist_json(&path, &prefs).await.unwrap();
        let loaded: Preferences = load_json(&path).await;
        assert!(loaded.dark_mode);
        let _ = fs::remove_file(&path).await;
    }
}
