#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{InputFormat, OutputFormat, ValidationPolicy};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

/// Fully resolved settings for one run.
///
/// Built from defaults, then the TOML file, then command line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: Option<String>,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    pub validation_policy: ValidationPolicy,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl RunConfig {
    /// Defaults for `input_path`; the input format follows the file extension.
    pub fn new(input_path: impl Into<String>) -> Self {
        let input_path = input_path.into();
        Self {
            input_format: InputFormat::from_path(&input_path),
            input_path,
            output_path: None,
            output_format: OutputFormat::default(),
            validation_policy: ValidationPolicy::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }

    pub fn apply_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(policy) = toml.validation.policy {
            self.validation_policy = policy;
        }
        if let Some(format) = toml.input.format {
            self.input_format = format;
        }
        if let Some(format) = toml.output.format {
            self.output_format = format;
        }
        if let Some(path) = &toml.output.path {
            self.output_path = Some(path.clone());
        }
        if let Some(level) = &toml.logging.level {
            self.log_level = level.to_ascii_lowercase();
        }
        if let Some(format) = toml.logging.format {
            self.log_format = format;
        }
        self
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        if let Some(output_path) = &self.output_path {
            validate_path("output", output_path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn input_format(&self) -> InputFormat {
        self.input_format
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn validation_policy(&self) -> ValidationPolicy {
        self.validation_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("people.json");
        assert_eq!(config.input_format, InputFormat::Json);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.validation_policy, ValidationPolicy::FailFast);
        assert_eq!(config.output_path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_csv_extension_selects_csv_input() {
        assert_eq!(RunConfig::new("people.csv").input_format, InputFormat::Csv);
    }

    #[test]
    fn test_toml_values_override_defaults() {
        let toml = TomlConfig::from_toml_str(
            "[validation]\npolicy = \"collect-all\"\n[output]\nformat = \"csv\"\npath = \"out.csv\"\n[logging]\nlevel = \"WARN\"\n",
        )
        .unwrap();

        let config = RunConfig::new("people.json").apply_toml(&toml);
        assert_eq!(config.validation_policy, ValidationPolicy::CollectAll);
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert_eq!(config.output_path.as_deref(), Some("out.csv"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.input_format, InputFormat::Json);
    }

    #[test]
    fn test_empty_input_path_is_invalid() {
        assert!(RunConfig::new("").validate().is_err());
    }
}
