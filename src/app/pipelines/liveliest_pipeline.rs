use crate::adapters::decode::decode_records;
use crate::app::render::render;
use crate::core::census::CensusBuilder;
use crate::core::peak::find_peak;
use crate::core::{ConfigProvider, LiveliestYearsReport, PersonRecord, Pipeline, Storage};
use crate::utils::error::{CensusError, Result};

pub struct LiveliestYearPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LiveliestYearPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for LiveliestYearPipeline<S, C> {
    fn extract(&self) -> Result<Vec<PersonRecord>> {
        let path = self.config.input_path();
        tracing::debug!(
            "Reading {:?} input from: {}",
            self.config.input_format(),
            path
        );

        let data = self.storage.read_file(path).map_err(|e| match e {
            CensusError::IoError(source) => CensusError::SourceUnavailable {
                path: path.to_string(),
                source,
            },
            other => other,
        })?;

        decode_records(path, self.config.input_format(), &data)
    }

    fn transform(&self, records: Vec<PersonRecord>) -> Result<LiveliestYearsReport> {
        if records.is_empty() {
            return Err(CensusError::EmptyInput);
        }

        let census = CensusBuilder::new(self.config.validation_policy()).build(&records)?;
        let peak = find_peak(&census);
        tracing::debug!(
            "Census covers {} year(s); peak of {} in {} year(s)",
            census.len(),
            peak.max_count,
            peak.liveliest_years.len()
        );

        Ok(LiveliestYearsReport::compose(&census, &peak))
    }

    fn load(&self, report: LiveliestYearsReport) -> Result<String> {
        let rendered = render(&report, self.config.output_format())?;

        if let Some(output_path) = self.config.output_path() {
            tracing::debug!("Writing report ({} bytes) to {}", rendered.len(), output_path);
            self.storage.write_file(output_path, rendered.as_bytes())?;
        }

        Ok(rendered)
    }
}
