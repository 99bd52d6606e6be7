use crate::domain::model::{
    InputFormat, LiveliestYearsReport, OutputFormat, PersonRecord, ValidationPolicy,
};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    /// Where to write the rendered report. `None` means the caller prints it.
    fn output_path(&self) -> Option<&str>;
    fn input_format(&self) -> InputFormat;
    fn output_format(&self) -> OutputFormat;
    fn validation_policy(&self) -> ValidationPolicy;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<PersonRecord>>;
    fn transform(&self, records: Vec<PersonRecord>) -> Result<LiveliestYearsReport>;
    fn load(&self, report: LiveliestYearsReport) -> Result<String>;
}
