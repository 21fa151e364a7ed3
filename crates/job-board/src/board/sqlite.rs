use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::info;
use uuid::Uuid;

use super::domain::{
    Application, ApplicationId, JobId, JobPosting, JobPostingPatch, NewApplication, NewJobPosting,
};
use super::filter::JobFilter;
use super::store::{ApplicationStore, JobStore, StoreError};

const SCHEMA_VERSION: i64 = 1;

const CREATE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS jobs (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    company TEXT NOT NULL,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    location TEXT NOT NULL,
    salary_range TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS applications (
    id TEXT PRIMARY KEY NOT NULL,
    job_id TEXT NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    resume_link TEXT NOT NULL,
    cover_letter TEXT NOT NULL,
    submitted_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_applications_job_id ON applications(job_id);
";

const JOB_COLUMNS: &str =
    "id, title, company, description, category, location, salary_range, created_at";
const APPLICATION_COLUMNS: &str =
    "id, job_id, name, email, resume_link, cover_letter, submitted_at";

/// SQLite-backed store holding the `jobs` and `applications` tables.
///
/// `applications.job_id` is indexed without a foreign key, so deleting a posting leaves its
/// applications in place.
#[derive(Clone)]
pub struct SqliteBoardStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBoardStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened sqlite job board store");
        Self::from_connection(conn)
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: version,
                supported: SCHEMA_VERSION,
            });
        }

        conn.execute_batch(CREATE_SCHEMA)?;
        if version < SCHEMA_VERSION {
            conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("sqlite connection lock poisoned".to_string()))
    }
}

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(id: &str, raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| StoreError::Corrupt {
            id: id.to_string(),
            reason: format!("invalid timestamp '{raw}': {err}"),
        })
}

struct JobRow {
    id: String,
    title: String,
    company: String,
    description: String,
    category: String,
    location: String,
    salary_range: String,
    created_at: String,
}

impl JobRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            company: row.get(2)?,
            description: row.get(3)?,
            category: row.get(4)?,
            location: row.get(5)?,
            salary_range: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn into_posting(self) -> Result<JobPosting, StoreError> {
        let created_at = parse_timestamp(&self.id, &self.created_at)?;
        Ok(JobPosting {
            id: JobId(self.id),
            title: self.title,
            company: self.company,
            description: self.description,
            category: self.category,
            location: self.location,
            salary_range: self.salary_range,
            created_at,
        })
    }
}

struct ApplicationRow {
    id: String,
    job_id: String,
    name: String,
    email: String,
    resume_link: String,
    cover_letter: String,
    submitted_at: String,
}

impl ApplicationRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            job_id: row.get(1)?,
            name: row.get(2)?,
            email: row.get(3)?,
            resume_link: row.get(4)?,
            cover_letter: row.get(5)?,
            submitted_at: row.get(6)?,
        })
    }

    fn into_application(self) -> Result<Application, StoreError> {
        let submitted_at = parse_timestamp(&self.id, &self.submitted_at)?;
        Ok(Application {
            id: ApplicationId(self.id),
            job_id: JobId(self.job_id),
            name: self.name,
            email: self.email,
            resume_link: self.resume_link,
            cover_letter: self.cover_letter,
            submitted_at,
        })
    }
}

/// Primary-key collisions surface as conflicts; everything else stays a database fault.
fn insert_error(err: rusqlite::Error, id: &str) -> StoreError {
    match err.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ConstraintViolation) => StoreError::Conflict(id.to_string()),
        _ => StoreError::Database(err),
    }
}

fn fetch_job(conn: &Connection, id: &JobId) -> Result<Option<JobPosting>, StoreError> {
    let row = conn
        .query_row(
            &format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?1"),
            params![id.0],
            JobRow::read,
        )
        .optional()?;
    row.map(JobRow::into_posting).transpose()
}

impl JobStore for SqliteBoardStore {
    fn list(&self, filter: &JobFilter) -> Result<Vec<JobPosting>, StoreError> {
        let conn = self.lock()?;

        // Exact-match selectors go to SQL; search and salary bands need Rust-side parsing.
        let mut clauses = Vec::new();
        let mut values = Vec::new();
        if let Some(category) = filter.category.as_value() {
            values.push(category.to_string());
            clauses.push(format!("category = ?{}", values.len()));
        }
        if let Some(location) = filter.location.as_value() {
            values.push(location.to_string());
            clauses.push(format!("location = ?{}", values.len()));
        }

        let mut sql = format!("SELECT {JOB_COLUMNS} FROM jobs");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY rowid");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), JobRow::read)?
            .collect::<Result<Vec<_>, _>>()?;

        let postings = rows
            .into_iter()
            .map(JobRow::into_posting)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(filter.apply(postings))
    }

    fn get(&self, id: &JobId) -> Result<Option<JobPosting>, StoreError> {
        let conn = self.lock()?;
        fetch_job(&conn, id)
    }

    fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StoreError> {
        let conn = self.lock()?;
        let record = JobPosting::from_new(
            JobId(Uuid::new_v4().to_string()),
            posting,
            Utc::now(),
        );

        conn.execute(
            &format!("INSERT INTO jobs ({JOB_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
            params![
                record.id.0,
                record.title,
                record.company,
                record.description,
                record.category,
                record.location,
                record.salary_range,
                format_timestamp(record.created_at),
            ],
        )
        .map_err(|err| insert_error(err, &record.id.0))?;
        Ok(record)
    }

    fn update(
        &self,
        id: &JobId,
        patch: &JobPostingPatch,
    ) -> Result<Option<JobPosting>, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let Some(mut posting) = fetch_job(&tx, id)? else {
            return Ok(None);
        };
        posting.apply(patch);

        tx.execute(
            "UPDATE jobs SET title = ?2, company = ?3, description = ?4, category = ?5,
                location = ?6, salary_range = ?7
             WHERE id = ?1",
            params![
                posting.id.0,
                posting.title,
                posting.company,
                posting.description,
                posting.category,
                posting.location,
                posting.salary_range,
            ],
        )?;
        tx.commit()?;
        Ok(Some(posting))
    }

    fn delete(&self, id: &JobId) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM jobs WHERE id = ?1", params![id.0])?;
        Ok(removed > 0)
    }
}

impl ApplicationStore for SqliteBoardStore {
    fn insert(&self, application: NewApplication) -> Result<Application, StoreError> {
        let conn = self.lock()?;
        let record = Application::from_new(
            ApplicationId(Uuid::new_v4().to_string()),
            application,
            Utc::now(),
        );

        conn.execute(
            &format!(
                "INSERT INTO applications ({APPLICATION_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
            ),
            params![
                record.id.0,
                record.job_id.0,
                record.name,
                record.email,
                record.resume_link,
                record.cover_letter,
                format_timestamp(record.submitted_at),
            ],
        )
        .map_err(|err| insert_error(err, &record.id.0))?;
        Ok(record)
    }

    fn list_for_job(&self, job_id: &JobId) -> Result<Vec<Application>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE job_id = ?1 ORDER BY rowid"
        ))?;
        let rows = stmt
            .query_map(params![job_id.0], ApplicationRow::read)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter()
            .map(ApplicationRow::into_application)
            .collect()
    }
}
