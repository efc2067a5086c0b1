use crate::{CachePolicy, CacheStore};
use analysis_core::AnalysisError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk representation: one JSON file per key.
#[derive(Serialize, Deserialize)]
struct FileEntry {
    timestamp: DateTime<Utc>,
    data: Value,
}

/// Filesystem cache backend.
///
/// The cache directory is shared across processes. Writes go to a temp
/// file and are renamed into place so concurrent readers never observe a
/// partial entry. Unparseable files count as a miss and are removed.
pub struct FileCache {
    dir: PathBuf,
    policy: CachePolicy,
}

impl FileCache {
    pub fn new(dir: impl AsRef<Path>, policy: CachePolicy) -> Result<Self, AnalysisError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| AnalysisError::Cache(format!("create cache dir {:?}: {}", dir, e)))?;
        Ok(Self { dir, policy })
    }

    /// Cache keys may contain characters unfit for filenames; the file name
    /// is the hex SHA-256 of the key instead.
    pub(crate) fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }

    async fn discard(&self, path: &Path, reason: &str) {
        warn!(?path, reason, "discarding unusable cache entry");
        let _ = tokio::fs::remove_file(path).await;
    }
}

#[async_trait]
impl CacheStore for FileCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let path = self.entry_path(key);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(_) => return None,
        };

        let entry: FileEntry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                // Corrupt entry: treat as a miss, never surface to callers.
                self.discard(&path, &format!("parse failed: {}", e)).await;
                return None;
            }
        };

        if self.policy.is_expired(entry.timestamp) {
            debug!(key, "evicting expired cache file");
            let _ = tokio::fs::remove_file(&path).await;
            return None;
        }

        Some(entry.data)
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AnalysisError> {
        let path = self.entry_path(key);
        let tmp = path.with_extension("tmp");

        let entry = FileEntry {
            timestamp: Utc::now(),
            data: value,
        };
        let bytes = serde_json::to_vec(&entry)
            .map_err(|e| AnalysisError::Serialization(e.to_string()))?;

        // Write-new-then-rename keeps concurrent readers off partial files.
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| AnalysisError::Cache(format!("write {:?}: {}", tmp, e)))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| AnalysisError::Cache(format!("rename {:?}: {}", path, e)))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AnalysisError> {
        let path = self.entry_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AnalysisError::Cache(format!("remove {:?}: {}", path, e))),
        }
    }

    async fn size(&self) -> usize {
        let mut count = 0;
        if let Ok(mut entries) = tokio::fs::read_dir(&self.dir).await {
            while let Ok(Some(entry)) = entries.next_entry().await {
                if entry.path().extension().is_some_and(|ext| ext == "json") {
                    count += 1;
                }
            }
        }
        count
    }
}
