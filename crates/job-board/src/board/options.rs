use serde::Serialize;

use super::salary::SalaryBand;

/// Categories offered by the posting form and the listing filter. The list is fixed so the
/// UI renders the same choices regardless of which postings exist.
pub const CATEGORIES: &[&str] = &[
    "Development",
    "Design",
    "Operations",
    "Data Science",
    "Management",
    "Marketing",
    "Sales",
    "Customer Support",
];

pub const LOCATIONS: &[&str] = &[
    "Remote",
    "New York, NY",
    "San Francisco, CA",
    "Boston, MA",
    "Chicago, IL",
    "Austin, TX",
    "Seattle, WA",
];

pub fn categories() -> Vec<String> {
    CATEGORIES.iter().map(|value| value.to_string()).collect()
}

pub fn locations() -> Vec<String> {
    LOCATIONS.iter().map(|value| value.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryBandOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything the listing filter needs to render its selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub salary_bands: Vec<SalaryBandOption>,
}

impl FilterOptions {
    pub fn standard() -> Self {
        Self {
            categories: categories(),
            locations: locations(),
            salary_bands: SalaryBand::ALL
                .iter()
                .map(|band| SalaryBandOption {
                    value: band.label(),
                    label: band.display_range(),
                })
                .collect(),
        }
    }
}
