use crate::domain::model::{MAX_YEAR, MIN_YEAR};
use std::fmt;
use thiserror::Error;

/// Why a single person record was rejected.
///
/// `index` is the zero-based position of the record in the input batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("record[{index}]: person missing name")]
    MissingName { index: usize },

    #[error("record[{index}]: person with empty name")]
    EmptyName { index: usize },

    #[error("record[{index}]: person ({name}) is missing birth or death year")]
    MissingYears { index: usize, name: String },

    #[error(
        "record[{index}]: person ({name}) has birth year ({year}) out of valid range [{min} - {max}]",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    BirthYearOutOfRange { index: usize, name: String, year: i64 },

    #[error(
        "record[{index}]: person ({name}) has death year ({year}) out of valid range [{min} - {max}]",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    DeathYearOutOfRange { index: usize, name: String, year: i64 },

    #[error("record[{index}]: person ({name}) died before they were born ({birth_year} - {death_year})")]
    DeathBeforeBirth {
        index: usize,
        name: String,
        birth_year: i64,
        death_year: i64,
    },
}

impl ValidationError {
    pub fn index(&self) -> usize {
        match self {
            Self::MissingName { index }
            | Self::EmptyName { index }
            | Self::MissingYears { index, .. }
            | Self::BirthYearOutOfRange { index, .. }
            | Self::DeathYearOutOfRange { index, .. }
            | Self::DeathBeforeBirth { index, .. } => *index,
        }
    }

    /// Field that failed the check, as named in the input document.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingName { .. } | Self::EmptyName { .. } => "name",
            Self::MissingYears { .. } => "birthYear/deathYear",
            Self::BirthYearOutOfRange { .. } => "birthYear",
            Self::DeathYearOutOfRange { .. } | Self::DeathBeforeBirth { .. } => "deathYear",
        }
    }
}

/// A rejected validation batch. Always holds at least one error, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRejection {
    errors: Vec<ValidationError>,
}

impl BatchRejection {
    /// Returns `None` when there is nothing to reject.
    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn first(&self) -> &ValidationError {
        &self.errors[0]
    }

    pub fn into_first(mut self) -> ValidationError {
        self.errors.swap_remove(0)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for BatchRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            1 => write!(f, "{}", self.first()),
            n => write!(f, "{} invalid records, first: {}", n, self.first()),
        }
    }
}

impl std::error::Error for BatchRejection {}

#[derive(Error, Debug)]
pub enum CensusError {
    #[error("Input file {path} does not exist, or cannot be accessed at this time: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing input file {path}: {message}")]
    MalformedSource { path: String, message: String },

    #[error("The input was empty")]
    EmptyInput,

    #[error("Validation failed: {0}")]
    Validation(#[from] BatchRejection),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CensusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } | Self::MalformedSource { .. } | Self::EmptyInput => {
                ErrorCategory::Input
            }
            Self::Validation(_) => ErrorCategory::Validation,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this failure. Usage errors are left to clap (status 2).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceUnavailable { .. } => 3,
            Self::MalformedSource { .. } => 4,
            Self::EmptyInput => 5,
            Self::Validation(_) => 6,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => 7,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SourceUnavailable { path, .. } => format!(
                "Input file {} does not exist, or cannot be accessed at this time.",
                path
            ),
            Self::MalformedSource { path, .. } => format!("Error parsing input file {}", path),
            Self::EmptyInput => "The input was empty.".to_string(),
            Self::Validation(rejection) => match rejection.len() {
                1 => format!("Invalid person record: {}", rejection.first()),
                n => format!("{} invalid person records, first: {}", n, rejection.first()),
            },
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "Check that the input path exists and is readable",
            Self::MalformedSource { .. } => {
                "The input must be a JSON array of {name, birthYear, deathYear} objects, or a CSV file with that header"
            }
            Self::EmptyInput => "Provide at least one person record",
            Self::Validation(_) => {
                "Every person needs a non-empty name and birth/death years within [1900 - 2000], with death year >= birth year"
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CensusError>;
