use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Year = u16;

/// Earliest accepted birth or death year (inclusive).
pub const MIN_YEAR: Year = 1900;
/// Latest accepted birth or death year (inclusive).
pub const MAX_YEAR: Year = 2000;

/// A person exactly as it arrived from the input, before validation.
///
/// A field is `None` when it was absent, `null`, or of the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i64>,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, birth_year: i64, death_year: i64) -> Self {
        Self {
            name: Some(name.into()),
            birth_year: Some(birth_year),
            death_year: Some(death_year),
        }
    }

    /// Reads a record out of one element of the input array.
    ///
    /// Non-object elements yield a record with every field absent.
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self {
            name: value
                .get("name")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            birth_year: value.get("birthYear").and_then(serde_json::Value::as_i64),
            death_year: value.get("deathYear").and_then(serde_json::Value::as_i64),
        }
    }
}

/// A person whose name and lifespan passed every check.
///
/// Invariant: `MIN_YEAR <= birth_year <= death_year <= MAX_YEAR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPerson {
    name: String,
    birth_year: Year,
    death_year: Year,
}

impl ValidatedPerson {
    pub(crate) fn new(name: String, birth_year: Year, death_year: Year) -> Self {
        debug_assert!(MIN_YEAR <= birth_year && birth_year <= death_year && death_year <= MAX_YEAR);
        Self {
            name,
            birth_year,
            death_year,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_year(&self) -> Year {
        self.birth_year
    }

    pub fn death_year(&self) -> Year {
        self.death_year
    }

    pub fn lifespan(&self) -> std::ops::RangeInclusive<Year> {
        self.birth_year..=self.death_year
    }
}

/// Who was alive in each year, keyed in ascending year order.
///
/// Only built by `CensusBuilder`. Every year present has at least one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    years: BTreeMap<Year, Vec<String>>,
}

impl Census {
    pub(crate) fn from_years(years: BTreeMap<Year, Vec<String>>) -> Self {
        debug_assert!(years.values().all(|names| !names.is_empty()));
        Self { years }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Number of distinct years with anyone alive.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn names(&self, year: Year) -> Option<&[String]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    pub fn occupancy(&self, year: Year) -> usize {
        self.years.get(&year).map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, &[String])> {
        self.years
            .iter()
            .map(|(year, names)| (*year, names.as_slice()))
    }
}

/// Maximum occupancy and the years that reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakReport {
    pub max_count: usize,
    pub liveliest_years: Vec<Year>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    pub year: Year,
    pub names: Vec<String>,
}

/// Display-ready result: the peak count and each liveliest year with its names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveliestYearsReport {
    pub max_count: usize,
    pub years: Vec<YearEntry>,
}

/// What to do with the rest of a batch once a record fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Stop at the first invalid record.
    #[default]
    FailFast,
    /// Check every record and report every failure.
    CollectAll,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    #[default]
    Json,
    Csv,
}

impl InputFormat {
    /// `.csv` files are read as CSV, everything else as JSON.
    pub fn from_path(path: &str) -> Self {
        match std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
