pub mod generator;
pub mod pipelines;
pub mod render;
