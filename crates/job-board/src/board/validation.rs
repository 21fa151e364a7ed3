use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors as FieldReport};

use super::domain::{JobId, JobPostingPatch, NewApplication, NewJobPosting};

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation for one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|error| error.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: ")?;
        for (index, error) in self.fields.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

const POSTING_FIELDS: [&str; 6] = [
    "title",
    "company",
    "description",
    "category",
    "location",
    "salary_range",
];

const APPLICATION_FIELDS: [&str; 5] = ["job_id", "name", "email", "resume_link", "cover_letter"];

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "is required"));
    }
    Ok(())
}

pub(crate) fn job_id_present(job_id: &JobId) -> Result<(), ValidationError> {
    not_blank(&job_id.0)
}

/// Resume links must be absolute `http`/`https` URLs with a host.
pub(crate) fn web_url(value: &str) -> Result<(), ValidationError> {
    let rejected = || failure("url", "must be a valid http(s) URL");
    let parsed = Url::parse(value.trim()).map_err(|_| rejected())?;
    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    if matches!(parsed.scheme(), "http" | "https") && has_host {
        Ok(())
    } else {
        Err(rejected())
    }
}

/// Flatten the derive's report into field errors, in form order.
fn collect(report: &FieldReport, order: &[&'static str]) -> ValidationErrors {
    let by_field = report.field_errors();
    let mut errors = ValidationErrors::default();
    for field in order {
        let Some(failures) = by_field.get(*field) else {
            continue;
        };
        for rejected in failures.iter() {
            let message = rejected
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("failed {} check", rejected.code));
            errors.push(*field, message);
        }
    }
    errors
}

fn check<T: Validate>(payload: &T, order: &[&'static str]) -> Result<(), ValidationErrors> {
    payload
        .validate()
        .map_err(|report| collect(&report, order))
}

pub(crate) fn validate_new_posting(posting: &NewJobPosting) -> Result<(), ValidationErrors> {
    check(posting, &POSTING_FIELDS)
}

/// Only supplied fields are checked.
pub(crate) fn validate_patch(patch: &JobPostingPatch) -> Result<(), ValidationErrors> {
    check(patch, &POSTING_FIELDS)
}

pub(crate) fn validate_application(application: &NewApplication) -> Result<(), ValidationErrors> {
    check(application, &APPLICATION_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> NewJobPosting {
        NewJobPosting {
            title: "Frontend Developer".to_string(),
            company: "TechCorp".to_string(),
            description: "Build responsive web applications with React.".to_string(),
            category: "Development".to_string(),
            location: "Remote".to_string(),
            salary_range: "$80,000 - $120,000".to_string(),
        }
    }

    fn application() -> NewApplication {
        NewApplication {
            job_id: JobId::from("job-000001"),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            resume_link: "https://example.com/alex-resume.pdf".to_string(),
            cover_letter: "I'm excited about the Frontend Developer position at TechCorp and bring five years of React."
                .to_string(),
        }
    }

    #[test]
    fn accepts_complete_posting() {
        assert!(validate_new_posting(&posting()).is_ok());
    }

    #[test]
    fn collects_every_failing_posting_field() {
        let mut bad = posting();
        bad.title = "Dev".to_string();
        bad.description = "Too short".to_string();
        bad.salary_range = "   ".to_string();

        let errors = validate_new_posting(&bad).expect_err("posting rejected");
        assert_eq!(errors.fields.len(), 3);
        assert!(errors.contains("title"));
        assert!(errors.contains("description"));
        assert!(errors.contains("salary_range"));
        assert!(errors.to_string().contains("at least 5 characters"));
    }

    #[test]
    fn patch_only_checks_supplied_fields() {
        assert!(validate_patch(&JobPostingPatch::default()).is_ok());

        let patch = JobPostingPatch {
            company: Some("X".to_string()),
            ..JobPostingPatch::default()
        };
        let errors = validate_patch(&patch).expect_err("short company rejected");
        assert_eq!(errors.fields.len(), 1);
        assert!(errors.contains("company"));
    }

    #[test]
    fn application_rules_mirror_candidate_form() {
        assert!(validate_application(&application()).is_ok());

        let mut bad = application();
        bad.email = "alex.example.com".to_string();
        bad.resume_link = "ftp://example.com/resume.pdf".to_string();
        bad.cover_letter = "Hire me".to_string();

        let errors = validate_application(&bad).expect_err("application rejected");
        assert!(errors.contains("email"));
        assert!(errors.contains("resume_link"));
        assert!(errors.contains("cover_letter"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn errors_follow_form_order() {
        let bad = NewJobPosting {
            title: "Dev".to_string(),
            company: "T".to_string(),
            description: "Short".to_string(),
            category: String::new(),
            location: "Remote".to_string(),
            salary_range: "$80,000 - $120,000".to_string(),
        };
        let errors = validate_new_posting(&bad).expect_err("posting rejected");
        let fields: Vec<&str> = errors.fields.iter().map(|error| error.field).collect();
        assert_eq!(fields, vec!["title", "company", "description", "category"]);
        assert_eq!(errors.fields[3].message, "is required");
    }

    #[test]
    fn email_and_url_checks() {
        let mut candidate = application();
        for email in ["@example.com", "a b@example.com", "alex.example.com"] {
            candidate.email = email.to_string();
            let errors = validate_application(&candidate).expect_err("email rejected");
            assert!(errors.contains("email"), "{email} should be rejected");
        }

        assert!(web_url("http://example.com").is_ok());
        assert!(web_url("https://cdn.example.com/resumes/t.pdf?v=2").is_ok());
        assert!(web_url("https://").is_err());
        assert!(web_url("example.com/resume.pdf").is_err());
        assert!(web_url("mailto:alex@example.com").is_err());

        assert!(job_id_present(&JobId::from("  ")).is_err());
        assert!(job_id_present(&JobId::from("job-000001")).is_ok());
    }
}
