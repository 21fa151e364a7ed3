//! Job postings, candidate applications, and the filter engine that narrows postings for the
//! candidate listing.
//!
//! Storage is reached only through the [`JobStore`] and [`ApplicationStore`] traits so the
//! service and router can run against the in-memory store in tests and SQLite in deployments.

pub mod domain;
pub mod filter;
pub mod import;
pub mod memory;
pub mod options;
pub mod router;
pub mod salary;
pub mod seed;
pub mod service;
pub mod sqlite;
pub mod store;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, JobId, JobPosting, JobPostingPatch, NewApplication, NewJobPosting,
};
pub use filter::{JobFilter, SalaryFilter, Selector};
pub use import::{import_postings, import_postings_from_path, ImportError};
pub use memory::MemoryBoardStore;
pub use options::{FilterOptions, SalaryBandOption};
pub use router::board_router;
pub use salary::{SalaryBand, SalaryParseError, SalaryRange};
pub use seed::seed_if_empty;
pub use service::{BoardError, BoardPolicy, JobBoardService};
pub use sqlite::SqliteBoardStore;
pub use store::{ApplicationStore, JobStore, StoreError};
pub use validation::{FieldError, ValidationErrors};
