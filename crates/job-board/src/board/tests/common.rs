use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::board::domain::{
    Application, JobId, JobPosting, JobPostingPatch, NewApplication, NewJobPosting,
};
use crate::board::filter::JobFilter;
use crate::board::memory::MemoryBoardStore;
use crate::board::store::{ApplicationStore, JobStore, StoreError};
use crate::board::{board_router, BoardPolicy, JobBoardService};

pub(super) fn frontend_posting() -> NewJobPosting {
    NewJobPosting {
        title: "Frontend Developer".to_string(),
        company: "TechCorp".to_string(),
        description: "Build responsive web applications using React and TypeScript.".to_string(),
        category: "Development".to_string(),
        location: "Remote".to_string(),
        salary_range: "$80,000 - $120,000".to_string(),
    }
}

pub(super) fn posting(
    title: &str,
    company: &str,
    category: &str,
    location: &str,
    salary_range: &str,
) -> NewJobPosting {
    NewJobPosting {
        title: title.to_string(),
        company: company.to_string(),
        description: format!("{company} is hiring a {title} to join a growing team."),
        category: category.to_string(),
        location: location.to_string(),
        salary_range: salary_range.to_string(),
    }
}

pub(super) fn application_for(job_id: &JobId, name: &str) -> NewApplication {
    NewApplication {
        job_id: job_id.clone(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        resume_link: "https://example.com/resume.pdf".to_string(),
        cover_letter: "I have shipped production React applications for five years and would love to join."
            .to_string(),
    }
}

pub(super) fn build_service() -> (
    JobBoardService<MemoryBoardStore, MemoryBoardStore>,
    Arc<MemoryBoardStore>,
) {
    build_service_with_policy(BoardPolicy::default())
}

pub(super) fn build_service_with_policy(
    policy: BoardPolicy,
) -> (
    JobBoardService<MemoryBoardStore, MemoryBoardStore>,
    Arc<MemoryBoardStore>,
) {
    let store = Arc::new(MemoryBoardStore::new());
    let service = JobBoardService::new(store.clone(), store.clone(), policy);
    (service, store)
}

/// Service preloaded with a spread of categories, locations, and salary bands.
pub(super) fn seeded_service() -> (
    JobBoardService<MemoryBoardStore, MemoryBoardStore>,
    Arc<MemoryBoardStore>,
    Vec<JobPosting>,
) {
    let (service, store) = build_service();
    let mut created = Vec::new();
    for new_posting in [
        frontend_posting(),
        posting("UX Designer", "DesignHub", "Design", "New York, NY", "$90,000 - $130,000"),
        posting("DevOps Engineer", "CloudScale", "Operations", "San Francisco, CA", "$110,000 - $150,000"),
        posting("Support Specialist", "HelpDesk", "Customer Support", "Remote", "$45,000 - $60,000"),
        posting("Backend Developer", "ServerLogic", "Development", "Remote", "$85,000 - $125,000"),
        posting("Community Lead", "OpenCircle", "Marketing", "Chicago, IL", "Competitive"),
    ] {
        created.push(service.create(new_posting).expect("seed posting valid"));
    }
    (service, store, created)
}

pub(super) fn titles(postings: &[JobPosting]) -> Vec<&str> {
    postings.iter().map(|posting| posting.title.as_str()).collect()
}

pub(super) fn board_router_with_service(
    service: JobBoardService<MemoryBoardStore, MemoryBoardStore>,
) -> axum::Router {
    board_router(Arc::new(service))
}

pub(super) struct UnavailableStore;

impl JobStore for UnavailableStore {
    fn list(&self, _filter: &JobFilter) -> Result<Vec<JobPosting>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn get(&self, _id: &JobId) -> Result<Option<JobPosting>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _posting: NewJobPosting) -> Result<JobPosting, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update(
        &self,
        _id: &JobId,
        _patch: &JobPostingPatch,
    ) -> Result<Option<JobPosting>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &JobId) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

impl ApplicationStore for UnavailableStore {
    fn insert(&self, _application: NewApplication) -> Result<Application, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_for_job(&self, _job_id: &JobId) -> Result<Vec<Application>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
