use crate::{io::ScheduleIoError, merge::MergeError};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum MergeCliError {
    #[error("{0}")]
    Usage(String),
    #[error("Input schedule file not found: {}", .0.display())]
    MissingSchedule(PathBuf),
    #[error("Input vehicles file not found: {}", .0.display())]
    MissingVehicles(PathBuf),
    #[error("Failed to create output directories for '{}': {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{msg}: {source}")]
    Configuration {
        msg: String,
        source: config::ConfigError,
    },
    #[error("output file '{}' exists and overwrite is disabled", .0.display())]
    OutputExists(PathBuf),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error(transparent)]
    Write(#[from] ScheduleIoError),
    #[error("failed writing merge summary '{}': {source}", .path.display())]
    SummaryError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl MergeCliError {
    /// writes the failure as a single diagnostic line
    pub fn write_diagnostic<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.to_string().replace('\n', " "))
    }

    /// process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeCliError::Usage(_) => 1,
            MergeCliError::MissingSchedule(_) => 2,
            MergeCliError::MissingVehicles(_) => 3,
            MergeCliError::OutputDirectory { .. } => 4,
            MergeCliError::Configuration { .. } | MergeCliError::OutputExists(_) => 5,
            MergeCliError::Merge(_)
            | MergeCliError::Write(_)
            | MergeCliError::SummaryError { .. } => 6,
        }
    }
}
