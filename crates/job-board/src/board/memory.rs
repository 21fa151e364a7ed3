use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use super::domain::{
    Application, ApplicationId, JobId, JobPosting, JobPostingPatch, NewApplication, NewJobPosting,
};
use super::filter::JobFilter;
use super::store::{ApplicationStore, JobStore, StoreError};

#[derive(Debug, Default)]
struct BoardTables {
    jobs: Vec<JobPosting>,
    applications: Vec<Application>,
    next_job: u64,
    next_application: u64,
}

impl BoardTables {
    fn next_job_id(&mut self) -> JobId {
        self.next_job += 1;
        JobId(format!("job-{:06}", self.next_job))
    }

    fn next_application_id(&mut self) -> ApplicationId {
        self.next_application += 1;
        ApplicationId(format!("app-{:06}", self.next_application))
    }
}

/// Process-local store used for tests, demos, and the default development server.
///
/// Ids come from per-store counters (`job-000001`, `app-000001`, ...) and are never reused,
/// even after deletes.
#[derive(Debug, Default, Clone)]
pub struct MemoryBoardStore {
    tables: Arc<Mutex<BoardTables>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BoardTables>, StoreError> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    pub fn job_count(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.jobs.len())
    }

    pub fn application_count(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.applications.len())
    }
}

impl JobStore for MemoryBoardStore {
    fn list(&self, filter: &JobFilter) -> Result<Vec<JobPosting>, StoreError> {
        let tables = self.lock()?;
        Ok(filter.apply(tables.jobs.clone()))
    }

    fn get(&self, id: &JobId) -> Result<Option<JobPosting>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.jobs.iter().find(|posting| &posting.id == id).cloned())
    }

    fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StoreError> {
        let mut tables = self.lock()?;
        let id = tables.next_job_id();
        let record = JobPosting::from_new(id, posting, Utc::now());
        tables.jobs.push(record.clone());
        Ok(record)
    }

    fn update(
        &self,
        id: &JobId,
        patch: &JobPostingPatch,
    ) -> Result<Option<JobPosting>, StoreError> {
        let mut tables = self.lock()?;
        match tables.jobs.iter_mut().find(|posting| &posting.id == id) {
            Some(posting) => {
                posting.apply(patch);
                Ok(Some(posting.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: &JobId) -> Result<bool, StoreError> {
        let mut tables = self.lock()?;
        let before = tables.jobs.len();
        tables.jobs.retain(|posting| &posting.id != id);
        Ok(tables.jobs.len() < before)
    }
}

impl ApplicationStore for MemoryBoardStore {
    fn insert(&self, application: NewApplication) -> Result<Application, StoreError> {
        let mut tables = self.lock()?;
        let id = tables.next_application_id();
        let record = Application::from_new(id, application, Utc::now());
        tables.applications.push(record.clone());
        Ok(record)
    }

    fn list_for_job(&self, job_id: &JobId) -> Result<Vec<Application>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .applications
            .iter()
            .filter(|application| &application.job_id == job_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str) -> NewJobPosting {
        NewJobPosting {
            title: title.to_string(),
            company: "TechCorp".to_string(),
            description: "Maintain the platform and ship features.".to_string(),
            category: "Development".to_string(),
            location: "Remote".to_string(),
            salary_range: "$80,000 - $120,000".to_string(),
        }
    }

    #[test]
    fn ids_are_sequential_and_not_reused_after_delete() {
        let store = MemoryBoardStore::new();
        let first = JobStore::insert(&store, posting("Frontend Developer")).unwrap();
        let second = JobStore::insert(&store, posting("Backend Developer")).unwrap();
        assert_eq!(first.id, JobId::from("job-000001"));
        assert_eq!(second.id, JobId::from("job-000002"));

        assert!(store.delete(&second.id).unwrap());
        let third = JobStore::insert(&store, posting("Platform Engineer")).unwrap();
        assert_eq!(third.id, JobId::from("job-000003"));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MemoryBoardStore::new();
        for title in ["Alpha Engineer", "Bravo Engineer", "Charlie Engineer"] {
            JobStore::insert(&store, posting(title)).unwrap();
        }

        let titles: Vec<String> = store
            .list(&JobFilter::default())
            .unwrap()
            .into_iter()
            .map(|posting| posting.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Alpha Engineer", "Bravo Engineer", "Charlie Engineer"]
        );
    }

    #[test]
    fn clones_share_the_same_tables() {
        let store = MemoryBoardStore::new();
        let handle = store.clone();
        JobStore::insert(&handle, posting("Frontend Developer")).unwrap();
        assert_eq!(store.job_count().unwrap(), 1);
    }

    #[test]
    fn update_of_missing_posting_returns_none() {
        let store = MemoryBoardStore::new();
        let patch = JobPostingPatch {
            title: Some("Staff Engineer".to_string()),
            ..JobPostingPatch::default()
        };
        assert!(store
            .update(&JobId::from("job-404"), &patch)
            .unwrap()
            .is_none());
    }
}
