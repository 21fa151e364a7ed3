use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::NewJobPosting;
use super::validation::{validate_new_posting, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read postings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse postings CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {errors}")]
    InvalidRow { row: usize, errors: ValidationErrors },
}

#[derive(Debug, Deserialize)]
struct PostingRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Salary Range")]
    salary_range: String,
}

impl From<PostingRow> for NewJobPosting {
    fn from(row: PostingRow) -> Self {
        NewJobPosting {
            title: row.title,
            company: row.company,
            description: row.description,
            category: row.category,
            location: row.location,
            salary_range: row.salary_range,
        }
    }
}

/// Parse and validate a postings export. Row numbers in errors count the header as row 1.
pub fn import_postings<R: Read>(reader: R) -> Result<Vec<NewJobPosting>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut postings = Vec::new();

    for (index, record) in csv_reader.deserialize::<PostingRow>().enumerate() {
        let posting = NewJobPosting::from(record?);
        validate_new_posting(&posting).map_err(|errors| ImportError::InvalidRow {
            row: index + 2,
            errors,
        })?;
        postings.push(posting);
    }

    Ok(postings)
}

pub fn import_postings_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<NewJobPosting>, ImportError> {
    let file = File::open(path)?;
    import_postings(file)
}
