//! Record Store
//!
//! Whole-collection persistence: a collection is one JSON array document
//! that is always read and rewritten in full. There is no indexing, no
//! partial write, and no locking: concurrent writers race and the last
//! save wins on the entire document. Repositories serialize access by
//! performing one load-mutate-save cycle per operation.
//!
//! [`JsonStore`] is the file-backed implementation; [`MemoryStore`] backs
//! repository tests so query logic is exercised without touching disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::warn;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Generic load/save abstraction over a persisted collection
///
/// `save` replaces the whole collection; `load` returns it in insertion
/// order. Implementations decide what "first access" means (seeding).
#[async_trait]
pub trait RecordStore<T>: Send + Sync {
    async fn load(&self) -> StoreResult<Vec<T>>;
    async fn save(&self, records: &[T]) -> StoreResult<()>;
}

/// Shared handle to a record store
pub type StoreHandle<T> = Arc<dyn RecordStore<T>>;

/// File-backed store: one pretty-printed JSON array per collection
///
/// The backing document lives at `<data_dir>/<collection>.json`. On first
/// access (no file yet) the configured seed is written and returned. A
/// document that exists but cannot be read or parsed loads as an empty
/// collection with a warning; the file itself is left untouched until the
/// next save so an operator can still recover it.
pub struct JsonStore<T> {
    path: PathBuf,
    seed: Vec<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Create a store that initializes to an empty collection
    pub fn new(data_dir: impl AsRef<Path>, collection: &str) -> Self {
        Self::with_seed(data_dir, collection, Vec::new())
    }

    /// Create a store that initializes to `seed` on first access
    pub fn with_seed(data_dir: impl AsRef<Path>, collection: &str, seed: Vec<T>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{collection}.json")),
            seed,
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_records(&self, records: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl<T> RecordStore<T> for JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    async fn load(&self) -> StoreResult<Vec<T>> {
        if !self.path.exists() {
            self.write_records(&self.seed).await?;
            return Ok(self.seed.clone());
        }

        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read collection, loading as empty");
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt collection document, loading as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, records: &[T]) -> StoreResult<()> {
        self.write_records(records).await
    }
}

/// In-memory store for tests
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T> Default for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[T]) -> StoreResult<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
