use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{
    Application, JobId, JobPosting, JobPostingPatch, NewApplication, NewJobPosting,
};
use super::filter::JobFilter;
use super::options::FilterOptions;
use super::store::{ApplicationStore, JobStore, StoreError};
use super::validation::{
    validate_application, validate_new_posting, validate_patch, ValidationErrors,
};

/// Behavior switches for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPolicy {
    /// Reject applications whose `job_id` names no existing posting.
    pub require_existing_job: bool,
}

impl Default for BoardPolicy {
    fn default() -> Self {
        Self {
            require_existing_job: true,
        }
    }
}

/// Service composing the posting and application stores with payload validation.
pub struct JobBoardService<J, A> {
    jobs: Arc<J>,
    applications: Arc<A>,
    policy: BoardPolicy,
}

impl<J, A> JobBoardService<J, A>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<A>, policy: BoardPolicy) -> Self {
        Self {
            jobs,
            applications,
            policy,
        }
    }

    /// Postings matching every criterion in `filter`, in insertion order.
    pub fn list(&self, filter: &JobFilter) -> Result<Vec<JobPosting>, BoardError> {
        let postings = self.jobs.list(filter)?;
        debug!(?filter, matched = postings.len(), "listed postings");
        Ok(postings)
    }

    pub fn get(&self, id: &JobId) -> Result<Option<JobPosting>, BoardError> {
        Ok(self.jobs.get(id)?)
    }

    pub fn create(&self, posting: NewJobPosting) -> Result<JobPosting, BoardError> {
        validate_new_posting(&posting)?;
        let created = self.jobs.insert(posting)?;
        info!(job_id = %created.id, title = %created.title, "job posting created");
        Ok(created)
    }

    /// Merge `patch` into the posting. `Ok(None)` when the id is unknown.
    pub fn update(
        &self,
        id: &JobId,
        patch: JobPostingPatch,
    ) -> Result<Option<JobPosting>, BoardError> {
        validate_patch(&patch)?;
        let updated = self.jobs.update(id, &patch)?;
        if updated.is_some() {
            info!(job_id = %id, "job posting updated");
        }
        Ok(updated)
    }

    /// Returns whether a posting was removed. Applications for the posting are kept.
    pub fn delete(&self, id: &JobId) -> Result<bool, BoardError> {
        let removed = self.jobs.delete(id)?;
        if removed {
            info!(job_id = %id, "job posting deleted");
        }
        Ok(removed)
    }

    pub fn submit_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, BoardError> {
        validate_application(&application)?;

        if self.policy.require_existing_job && self.jobs.get(&application.job_id)?.is_none() {
            return Err(BoardError::UnknownJob(application.job_id));
        }

        let submitted = self.applications.insert(application)?;
        info!(
            application_id = %submitted.id,
            job_id = %submitted.job_id,
            "application submitted"
        );
        Ok(submitted)
    }

    /// Applications for one posting in submission order; empty when there are none.
    pub fn list_applications(&self, job_id: &JobId) -> Result<Vec<Application>, BoardError> {
        Ok(self.applications.list_for_job(job_id)?)
    }

    pub fn categories(&self) -> Vec<String> {
        super::options::categories()
    }

    pub fn locations(&self) -> Vec<String> {
        super::options::locations()
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::standard()
    }
}

/// Error raised by the job board service.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("job posting {0} does not exist")]
    UnknownJob(JobId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
