use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::domain::model::{InputFormat, OutputFormat, ValidationPolicy};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "liveliest-year")]
#[command(about = "Finds the year(s) with the most people alive")]
pub struct CliConfig {
    /// People file: a JSON array (or a .csv file) of name, birthYear, deathYear
    pub input: String,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Input format, when the file extension is misleading
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Stop at the first invalid record, or report all of them
    #[arg(long, value_enum)]
    pub policy: Option<ValidationPolicy>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// Merges defaults, the TOML file (if any) and these flags, in that order.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = RunConfig::new(self.input.clone());

        if let Some(path) = &self.config {
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            config = config.apply_toml(&toml);
        }

        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(format) = self.input_format {
            config.input_format = format;
        }
        if let Some(policy) = self.policy {
            config.validation_policy = policy;
        }
        if let Some(output) = &self.output {
            config.output_path = Some(output.clone());
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_requires_exactly_one_input() {
        assert!(CliConfig::try_parse_from(["liveliest-year"]).is_err());
        assert!(CliConfig::try_parse_from(["liveliest-year", "a.json", "b.json"]).is_err());
        assert!(CliConfig::try_parse_from(["liveliest-year", "a.json"]).is_ok());
    }

    #[test]
    fn test_flags_parse_into_enums() {
        let cli = CliConfig::try_parse_from([
            "liveliest-year",
            "people.json",
            "--format",
            "json",
            "--policy",
            "collect-all",
            "--input-format",
            "csv",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.validation_policy, ValidationPolicy::CollectAll);
        assert_eq!(config.input_format, InputFormat::Csv);
    }

    #[test]
    fn test_flags_override_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"csv\"\n[validation]\npolicy = \"collect-all\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "liveliest-year",
            "people.json",
            "--config",
            config_path.as_str(),
            "--format",
            "text",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.validation_policy, ValidationPolicy::CollectAll);
    }

    #[test]
    fn test_verbose_forces_debug_level() {
        let cli = CliConfig::try_parse_from(["liveliest-year", "people.json", "-v"]).unwrap();
        assert_eq!(cli.resolve().unwrap().log_level, "debug");
    }

    #[test]
    fn test_invalid_toml_values_fail_resolution() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[logging]\nlevel = \"chatty\"\n").unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli =
            CliConfig::try_parse_from(["liveliest-year", "people.json", "-c", config_path.as_str()])
                .unwrap();
        assert!(cli.resolve().is_err());
    }
}
