pub mod liveliest_pipeline;

pub use liveliest_pipeline::LiveliestYearPipeline;
