pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use app::pipelines::LiveliestYearPipeline;
pub use config::RunConfig;
pub use crate::core::{census::build_census, engine::CensusEngine, peak::find_peak};
pub use utils::error::{CensusError, Result};
