//! Bounded, file-persisted log of delivery outcomes.
//!
//! All persistence goes through the [`HistoryStore`] trait so the delivery
//! path and the HTTP surface stay independent of the backing store. The
//! file implementation rewrites the whole array on every append and
//! serializes the read-modify-write behind an async mutex, so concurrent
//! sends cannot lose entries.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{error::HistoryError, models::DeliveryResult};

/// Maximum number of results retained; older entries are evicted first.
pub const MAX_HISTORY: usize = 50;

/// Append-only log of delivery outcomes with oldest-first eviction.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Appends a result, evicting the oldest entries beyond [`MAX_HISTORY`].
    async fn append(&self, result: &DeliveryResult) -> Result<(), HistoryError>;

    /// Returns up to `n` most recent results, most recent first.
    ///
    /// Read failures degrade to an empty result instead of propagating.
    async fn recent(&self, n: usize) -> Vec<DeliveryResult>;
}

/// History store backed by a single pretty-printed JSON array file.
///
/// An absent, unreadable, or corrupt file is treated as an empty history;
/// the next successful append rewrites it whole.
#[derive(Debug)]
pub struct FileHistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileHistoryStore {
    /// Creates a store writing to `path`, creating parent directories.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        Ok(Self { path, write_lock: Mutex::new(()) })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Vec<DeliveryResult> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "history file unreadable, treating as empty"
                );
                return Vec::new();
            },
        };

        match serde_json::from_slice(&bytes) {
            Ok(history) => history,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "history file corrupt, treating as empty"
                );
                Vec::new()
            },
        }
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn append(&self, result: &DeliveryResult) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;

        let mut history = self.read_all().await;
        history.push(result.clone());
        if history.len() > MAX_HISTORY {
            history.drain(..history.len() - MAX_HISTORY);
        }

        let encoded = serde_json::to_vec_pretty(&history)?;
        tokio::fs::write(&self.path, encoded).await?;

        debug!(entries = history.len(), "history persisted");
        Ok(())
    }

    async fn recent(&self, n: usize) -> Vec<DeliveryResult> {
        let history = self.read_all().await;
        let skip = history.len().saturating_sub(n);
        let mut window: Vec<_> = history.into_iter().skip(skip).collect();
        window.reverse();
        window
    }
}
