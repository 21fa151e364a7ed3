use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::JobPosting;
use super::salary::{SalaryBand, SalaryRange};

const ALL: &str = "All";

/// `"All"` or an exact, case-sensitive field value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    #[default]
    All,
    Exactly(String),
}

impl Selector {
    pub fn exactly(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Exactly(expected) => expected == value,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Selector::All => None,
            Selector::Exactly(value) => Some(value),
        }
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            Selector::All
        } else {
            Selector::Exactly(value)
        }
    }
}

impl From<Selector> for String {
    fn from(value: Selector) -> Self {
        match value {
            Selector::All => ALL.to_string(),
            Selector::Exactly(value) => value,
        }
    }
}

/// `"All"` or one of the salary bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SalaryFilter {
    #[default]
    All,
    Band(SalaryBand),
}

impl SalaryFilter {
    pub fn matches(&self, posting: &JobPosting) -> bool {
        let wanted = match self {
            SalaryFilter::All => return true,
            SalaryFilter::Band(band) => *band,
        };

        match SalaryRange::parse(&posting.salary_range) {
            Ok(range) => wanted.contains(&range),
            Err(err) => {
                debug!(job_id = %posting.id, error = %err, "salary range excluded from band filter");
                false
            }
        }
    }
}

impl TryFrom<String> for SalaryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || value == ALL {
            return Ok(SalaryFilter::All);
        }
        value.parse::<SalaryBand>().map(SalaryFilter::Band)
    }
}

impl From<SalaryFilter> for String {
    fn from(value: SalaryFilter) -> Self {
        match value {
            SalaryFilter::All => ALL.to_string(),
            SalaryFilter::Band(band) => band.label().to_string(),
        }
    }
}

impl From<SalaryBand> for SalaryFilter {
    fn from(value: SalaryBand) -> Self {
        SalaryFilter::Band(value)
    }
}

/// Combined search/category/location/salary criteria. Every predicate must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilter {
    pub search: Option<String>,
    pub category: Selector,
    pub location: Selector,
    pub salary: SalaryFilter,
}

impl JobFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Selector::exactly(category);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Selector::exactly(location);
        self
    }

    pub fn with_salary(mut self, salary: impl Into<SalaryFilter>) -> Self {
        self.salary = salary.into();
        self
    }

    /// Lowercased search term, `None` when the search box is empty.
    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.search_term().is_none()
            && self.category == Selector::All
            && self.location == Selector::All
            && self.salary == SalaryFilter::All
    }

    pub fn matches(&self, posting: &JobPosting) -> bool {
        if let Some(term) = self.search_term() {
            let hit = posting.title.to_lowercase().contains(&term)
                || posting.description.to_lowercase().contains(&term)
                || posting.company.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        self.category.matches(&posting.category)
            && self.location.matches(&posting.location)
            && self.salary.matches(posting)
    }

    /// Narrow `postings`, preserving their order.
    pub fn apply(&self, postings: Vec<JobPosting>) -> Vec<JobPosting> {
        if self.is_unrestricted() {
            return postings;
        }
        postings
            .into_iter()
            .filter(|posting| self.matches(posting))
            .collect()
    }
}
