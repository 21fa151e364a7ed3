use std::fmt;
use std::str::FromStr;

/// Upper bound at or above which a range counts as high paying.
pub const HIGH_BAND_FLOOR: u32 = 130_000;
/// Lower bound at or above which a range is no longer low paying.
pub const MEDIUM_BAND_FLOOR: u32 = 80_000;

/// Salary bands offered by the candidate listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryBand {
    Low,
    Medium,
    High,
}

impl SalaryBand {
    pub const ALL: [SalaryBand; 3] = [SalaryBand::Low, SalaryBand::Medium, SalaryBand::High];

    /// Band predicates are independent, so a wide range such as `$60,000 - $150,000` sits in
    /// both Low and High.
    pub fn contains(self, range: &SalaryRange) -> bool {
        match self {
            SalaryBand::High => range.max >= HIGH_BAND_FLOOR,
            SalaryBand::Medium => range.min >= MEDIUM_BAND_FLOOR && range.max < HIGH_BAND_FLOOR,
            SalaryBand::Low => range.min < MEDIUM_BAND_FLOOR,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SalaryBand::Low => "Low",
            SalaryBand::Medium => "Medium",
            SalaryBand::High => "High",
        }
    }

    /// Human readable range shown next to the selector.
    pub const fn display_range(self) -> &'static str {
        match self {
            SalaryBand::Low => "Under $80,000",
            SalaryBand::Medium => "$80,000 - $130,000",
            SalaryBand::High => "Above $130,000",
        }
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SalaryBand {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Low" => Ok(SalaryBand::Low),
            "Medium" => Ok(SalaryBand::Medium),
            "High" => Ok(SalaryBand::High),
            other => Err(format!(
                "unknown salary band '{other}' (expected All, Low, Medium, or High)"
            )),
        }
    }
}

/// Parsed `"$MIN - $MAX"` salary range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalaryParseError {
    #[error("salary range '{0}' is not in the form \"$MIN - $MAX\"")]
    MissingSeparator(String),
    #[error("salary amount '{0}' is not a whole number")]
    InvalidAmount(String),
}

impl SalaryRange {
    pub fn parse(raw: &str) -> Result<Self, SalaryParseError> {
        let mut bounds = raw.split(['-', '\u{2013}']);
        let (lower, upper) = match (bounds.next(), bounds.next(), bounds.next()) {
            (Some(lower), Some(upper), None) => (lower, upper),
            _ => return Err(SalaryParseError::MissingSeparator(raw.to_string())),
        };

        Ok(Self {
            min: parse_amount(lower)?,
            max: parse_amount(upper)?,
        })
    }
}

fn parse_amount(raw: &str) -> Result<u32, SalaryParseError> {
    let trimmed = raw.trim();
    let digits: String = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if digits.is_empty() {
        return Err(SalaryParseError::InvalidAmount(trimmed.to_string()));
    }

    digits
        .parse::<u32>()
        .map_err(|_| SalaryParseError::InvalidAmount(trimmed.to_string()))
}
