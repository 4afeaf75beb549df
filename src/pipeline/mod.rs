/// Pipeline front-end layer: stage workspace reservation and sample configs.
pub mod config;
pub mod errors;
pub mod workspace;

pub use errors::PipelineError;
pub use workspace::{reserve_dir, reserve_dir_with_files};
