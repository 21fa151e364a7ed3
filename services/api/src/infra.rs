use crate::routes::with_board_routes;
use job_board::board::{
    seed_if_empty, BoardError, BoardPolicy, JobBoardService, JobFilter, JobPosting,
    MemoryBoardStore, NewJobPosting, SqliteBoardStore,
};
use job_board::config::{StorageBackend, StorageConfig};
use job_board::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

type MemoryService = JobBoardService<MemoryBoardStore, MemoryBoardStore>;
type SqliteService = JobBoardService<SqliteBoardStore, SqliteBoardStore>;

/// Service over whichever store the configuration selects.
#[derive(Clone)]
pub(crate) enum BoardHandle {
    Memory(Arc<MemoryService>),
    Sqlite(Arc<SqliteService>),
}

impl BoardHandle {
    /// Open the configured store and seed it with sample data when enabled and empty.
    pub(crate) fn open(storage: &StorageConfig, policy: BoardPolicy) -> Result<Self, AppError> {
        let handle = match storage.backend {
            StorageBackend::Memory => {
                let store = Arc::new(MemoryBoardStore::new());
                Self::Memory(Arc::new(JobBoardService::new(store.clone(), store, policy)))
            }
            StorageBackend::Sqlite => {
                let store = Arc::new(SqliteBoardStore::open(&storage.database_path)?);
                Self::Sqlite(Arc::new(JobBoardService::new(store.clone(), store, policy)))
            }
        };

        if storage.seed_sample_data {
            let seeded = handle.seed_if_empty()?;
            if seeded > 0 {
                info!(backend = ?storage.backend, postings = seeded, "sample postings loaded");
            }
        }

        Ok(handle)
    }

    pub(crate) fn router(&self) -> axum::Router {
        match self {
            BoardHandle::Memory(service) => with_board_routes(service.clone()),
            BoardHandle::Sqlite(service) => with_board_routes(service.clone()),
        }
    }

    pub(crate) fn list(&self, filter: &JobFilter) -> Result<Vec<JobPosting>, BoardError> {
        match self {
            BoardHandle::Memory(service) => service.list(filter),
            BoardHandle::Sqlite(service) => service.list(filter),
        }
    }

    pub(crate) fn create(&self, posting: NewJobPosting) -> Result<JobPosting, BoardError> {
        match self {
            BoardHandle::Memory(service) => service.create(posting),
            BoardHandle::Sqlite(service) => service.create(posting),
        }
    }

    fn seed_if_empty(&self) -> Result<usize, BoardError> {
        match self {
            BoardHandle::Memory(service) => seed_if_empty(service.as_ref()),
            BoardHandle::Sqlite(service) => seed_if_empty(service.as_ref()),
        }
    }
}
