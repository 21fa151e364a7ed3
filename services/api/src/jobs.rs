use crate::infra::BoardHandle;
use chrono::Local;
use clap::Args;
use job_board::board::{
    import_postings_from_path, BoardPolicy, FilterOptions, JobFilter, JobPosting, SalaryFilter,
};
use job_board::config::{AppConfig, ConfigError, StorageBackend, StorageConfig};
use job_board::error::AppError;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Case-insensitive text matched against title, company, and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Exact category to keep (omit or pass "All" for every category)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Exact location to keep (omit or pass "All" for every location)
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Salary band: All, Low, Medium, or High
    #[arg(long, default_value = "All", value_parser = parse_salary_filter)]
    pub(crate) salary: SalaryFilter,
}

impl ListArgs {
    fn filter(&self) -> JobFilter {
        let mut filter = JobFilter::default().with_salary(self.salary);
        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }
        if let Some(category) = &self.category {
            filter = filter.with_category(category.clone());
        }
        if let Some(location) = &self.location {
            filter = filter.with_location(location.clone());
        }
        filter
    }
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV export with Title, Company, Description, Category, Location, Salary Range columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

fn parse_salary_filter(raw: &str) -> Result<SalaryFilter, String> {
    SalaryFilter::try_from(raw.trim().to_string())
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let board = BoardHandle::open(&config.storage, config.policy)?;
    let postings = board.list(&args.filter())?;
    render_postings(&postings);
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    println!("Importing postings from {}", args.csv.display());
    let imported = import_into(&config.storage, config.policy, &args.csv)?;
    for posting in &imported {
        println!("- {} | {} | {}", posting.id, posting.title, posting.company);
    }
    println!("{} postings imported", imported.len());
    Ok(())
}

fn require_persistent(storage: &StorageConfig) -> Result<(), AppError> {
    match storage.backend {
        StorageBackend::Sqlite => Ok(()),
        StorageBackend::Memory => Err(ConfigError::EphemeralStore {
            command: "jobs import",
        }
        .into()),
    }
}

/// Validate the whole file before writing, and never mix sample data into an import.
fn import_into(
    storage: &StorageConfig,
    policy: BoardPolicy,
    csv: &Path,
) -> Result<Vec<JobPosting>, AppError> {
    require_persistent(storage)?;
    let postings = import_postings_from_path(csv)?;

    let unseeded = StorageConfig {
        seed_sample_data: false,
        ..storage.clone()
    };
    let board = BoardHandle::open(&unseeded, policy)?;

    let mut imported = Vec::with_capacity(postings.len());
    for posting in postings {
        imported.push(board.create(posting)?);
    }
    Ok(imported)
}

pub(crate) fn run_filters() -> Result<(), AppError> {
    render_filter_options(&FilterOptions::standard());
    Ok(())
}

fn render_postings(postings: &[JobPosting]) {
    if postings.is_empty() {
        println!("No job postings match the current filters");
        return;
    }

    println!("{} job postings", postings.len());
    for posting in postings {
        println!(
            "- [{}] {} at {} | {} | {} | {}",
            posting.id,
            posting.title,
            posting.company,
            posting.category,
            posting.location,
            posting.salary_range
        );
        println!(
            "  posted {}",
            posting.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }
}

fn render_filter_options(options: &FilterOptions) {
    println!("Categories:");
    for category in &options.categories {
        println!("  - {category}");
    }
    println!("Locations:");
    for location in &options.locations {
        println!("  - {location}");
    }
    println!("Salary bands:");
    for band in &options.salary_bands {
        println!("  - {}: {}", band.value, band.label);
    }
}
