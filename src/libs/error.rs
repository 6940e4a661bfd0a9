use thiserror::Error;

/// Failures surfaced by the task store.
///
/// Read operations against a missing id fail with [`StoreError::NotFound`];
/// delete and update operations on a missing id are silent no-ops instead.
/// Driver-level failures propagate as [`StoreError::Unavailable`] without
/// any retry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A single-row lookup matched no task.
    #[error("task '{0}' not found")]
    NotFound(String),

    /// An insert collided with an already stored task id.
    #[error("task '{0}' already exists")]
    Duplicate(String),

    /// The underlying database failed or is unreachable.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
}
