//! Durable key/value slots: the session user id and the monthly budget.

use std::{
    collections::BTreeMap,
    future::Future,
    path::{Path, PathBuf},
    sync::Mutex as StdMutex,
};

use engine::Budget;
use tokio::sync::Mutex;

pub const DEFAULT_STATE_PATH: &str = "config/cli_state.json";

pub const BUDGET_KEY: &str = "budget";
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("state file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str)
    -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// JSON object on disk, one string value per key.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Loads the file at `path`; a missing file starts empty.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let payload = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, payload).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().await;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: StdMutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> T) -> T {
        let mut guard = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.with_entries(|entries| entries.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.with_entries(|entries| entries.insert(key.to_string(), value));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| entries.remove(key));
        Ok(())
    }
}

/// Reads the stored budget.
///
/// A missing slot and a blob that does not parse both read as "no budget";
/// the latter is logged since it means someone edited the state by hand.
pub async fn load_budget<K: KeyValueStore>(kv: &K) -> Result<Option<Budget>, StorageError> {
    let Some(raw) = kv.get(BUDGET_KEY).await? else {
        return Ok(None);
    };

    match Budget::from_json(&raw) {
        Ok(budget) => Ok(Some(budget)),
        Err(err) => {
            tracing::warn!("ignoring malformed budget entry: {err}");
            Ok(None)
        }
    }
}

pub async fn save_budget<K: KeyValueStore>(kv: &K, budget: &Budget) -> Result<(), StorageError> {
    kv.set(BUDGET_KEY, budget.to_json()?).await
}
