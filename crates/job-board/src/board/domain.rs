use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{job_id_present, not_blank, web_url};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted job listing. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub salary_range: String,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Build the persisted record from a create payload.
    pub fn from_new(id: JobId, posting: NewJobPosting, created_at: DateTime<Utc>) -> Self {
        let NewJobPosting {
            title,
            company,
            description,
            category,
            location,
            salary_range,
        } = posting;

        Self {
            id,
            title,
            company,
            description,
            category,
            location,
            salary_range,
            created_at,
        }
    }

    /// Merge the supplied patch fields. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: &JobPostingPatch) {
        let JobPostingPatch {
            title,
            company,
            description,
            category,
            location,
            salary_range,
        } = patch;

        if let Some(value) = title {
            self.title = value.clone();
        }
        if let Some(value) = company {
            self.company = value.clone();
        }
        if let Some(value) = description {
            self.description = value.clone();
        }
        if let Some(value) = category {
            self.category = value.clone();
        }
        if let Some(value) = location {
            self.location = value.clone();
        }
        if let Some(value) = salary_range {
            self.salary_range = value.clone();
        }
    }
}

/// Company-supplied payload for a new posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewJobPosting {
    #[validate(length(min = 5, message = "must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub company: String,
    #[validate(length(min = 20, message = "must be at least 20 characters"))]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    #[validate(custom(function = "not_blank"))]
    pub salary_range: String,
}

/// Partial update for an existing posting; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct JobPostingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 5, message = "must be at least 5 characters"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 20, message = "must be at least 20 characters"))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub salary_range: Option<String>,
}

impl JobPostingPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.location.is_none()
            && self.salary_range.is_none()
    }
}

/// A candidate's submission against one posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    pub fn from_new(
        id: ApplicationId,
        application: NewApplication,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let NewApplication {
            job_id,
            name,
            email,
            resume_link,
            cover_letter,
        } = application;

        Self {
            id,
            job_id,
            name,
            email,
            resume_link,
            cover_letter,
            submitted_at,
        }
    }
}

/// Candidate-supplied application form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewApplication {
    #[validate(custom(function = "job_id_present"))]
    pub job_id: JobId,
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "web_url"))]
    pub resume_link: String,
    #[validate(length(min = 50, message = "must be at least 50 characters"))]
    pub cover_letter: String,
}
