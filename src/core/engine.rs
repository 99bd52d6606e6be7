use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct CensusEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CensusEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load, returning the rendered report.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting liveliest year computation");

        tracing::debug!("Extracting people...");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        tracing::debug!("Building census...");
        let report = self.pipeline.transform(records)?;
        tracing::info!(
            "Most people alive: {} across {} year(s)",
            report.max_count,
            report.years.len()
        );

        tracing::debug!("Rendering report...");
        let rendered = self.pipeline.load(report)?;
        tracing::debug!("Rendered report ({} bytes)", rendered.len());

        Ok(rendered)
    }
}
