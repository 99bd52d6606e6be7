pub mod census;
pub mod engine;
pub mod peak;

pub use crate::domain::model::{Census, LiveliestYearsReport, PeakReport, PersonRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
