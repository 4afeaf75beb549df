/// Errors from the pipeline front-end layer.
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while preparing a stage workspace.
///
/// CLI-input errors never reach this type; clap terminates with its usage
/// text first. Directory-name collisions are not errors either; they are
/// resolved with a numeric suffix and a warning.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The output directory could not be created.
    #[error("Cannot create output directory '{}'", path.display())]
    CreateDir {
        /// The path whose creation failed.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// A sample table could not be opened or parsed.
    #[error("Cannot read config file '{}'", path.display())]
    ConfigRead {
        /// The config file path.
        path: PathBuf,
        /// The underlying csv/io error.
        #[source]
        source: csv::Error,
    },

    /// A sample table had a header but no data rows.
    #[error("Config file '{}' has no sample rows", path.display())]
    ConfigEmpty {
        /// The config file path.
        path: PathBuf,
    },

    /// A data row had an empty sample-name column.
    #[error("Config file '{}': line {line} has an empty sample name", path.display())]
    ConfigSample {
        /// The config file path.
        path: PathBuf,
        /// 1-based line number, counting the header.
        line: usize,
    },
}

/// Exit code mapping for `PipelineError` variants.
impl PipelineError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CreateDir { .. } => 1,
            Self::ConfigRead { .. } | Self::ConfigEmpty { .. } | Self::ConfigSample { .. } => 4,
        }
    }
}
