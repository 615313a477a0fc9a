use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Write side of the activity registry.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Runs `change` against the named activity while holding exclusive access to it,
    /// so the check and the write it makes cannot interleave with another writer.
    /// Returns `Ok(None)` when no activity has that name.
    async fn modify<F, T>(&self, activity_name: &str, change: F) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut Activity) -> T + Send,
        T: Send;

    /// Restores the registry to the activities it was created with.
    async fn reset(&self) -> Result<(), StoreError>;
}
