//! Session cache for the most recent match results.

use std::sync::Arc;

use dna_core::model::MatchResult;
use tracing::warn;

use crate::repository::{SessionStorage, StorageError};

/// Storage key holding the serialized result list.
pub const MATCHES_KEY: &str = "photographyMatches";

/// Typed view over [`SessionStorage`] for the last result set.
///
/// Entries that do not decode as a result list are treated as absent and
/// removed, so a corrupted cache never reaches rendering.
#[derive(Clone)]
pub struct MatchCache {
    storage: Arc<dyn SessionStorage>,
}

impl MatchCache {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Load cached results, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read, or if a malformed
    /// entry cannot be removed.
    pub async fn load(&self) -> Result<Option<Vec<MatchResult>>, StorageError> {
        let Some(raw) = self.storage.get_item(MATCHES_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<MatchResult>>(&raw) {
            Ok(results) => Ok(Some(results)),
            Err(err) => {
                warn!(error = %err, "discarding malformed cached matches");
                self.storage.remove_item(MATCHES_KEY).await?;
                Ok(None)
            }
        }
    }

    /// Overwrite the cache with `results`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    pub async fn store(&self, results: &[MatchResult]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(results)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set_item(MATCHES_KEY, &raw).await
    }

    /// Erase the cached results.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(MATCHES_KEY).await
    }
}
