use super::domain::{
    Application, JobId, JobPosting, JobPostingPatch, NewApplication, NewJobPosting,
};
use super::filter::JobFilter;

/// Storage abstraction for postings. Implementations assign `id` and `created_at` on insert
/// and return postings in insertion order.
pub trait JobStore: Send + Sync {
    fn list(&self, filter: &JobFilter) -> Result<Vec<JobPosting>, StoreError>;
    fn get(&self, id: &JobId) -> Result<Option<JobPosting>, StoreError>;
    fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StoreError>;
    /// Returns `Ok(None)` when no posting has the given id.
    fn update(&self, id: &JobId, patch: &JobPostingPatch)
        -> Result<Option<JobPosting>, StoreError>;
    /// Returns whether a posting was actually removed.
    fn delete(&self, id: &JobId) -> Result<bool, StoreError>;
}

/// Storage abstraction for submitted applications. There is no update or delete path.
pub trait ApplicationStore: Send + Sync {
    fn insert(&self, application: NewApplication) -> Result<Application, StoreError>;
    fn list_for_job(&self, job_id: &JobId) -> Result<Vec<Application>, StoreError>;
}

/// Error enumeration for backing store faults.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists: {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("stored row {id} is corrupt: {reason}")]
    Corrupt { id: String, reason: String },
    #[error("database schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: i64, supported: i64 },
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
