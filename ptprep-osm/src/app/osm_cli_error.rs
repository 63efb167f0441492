use crate::model::OsmXmlError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmCliError {
    #[error("Input file does not exist or is not a file: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("Failed to create output directory for '{}': {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Conversion failed: {source}")]
    ConversionError {
        #[from]
        source: OsmXmlError,
    },
}

impl OsmCliError {
    /// writes the failure as a single diagnostic line
    pub fn write_diagnostic<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.to_string().replace('\n', " "))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            OsmCliError::MissingInput(_) => 2,
            OsmCliError::OutputDirectory { .. } => 3,
            OsmCliError::ConversionError { .. } => 4,
        }
    }
}
