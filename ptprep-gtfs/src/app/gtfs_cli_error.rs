use crate::model::GtfsCoordinateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtfsCliError {
    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("Failed to create output directory for '{}': {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{source}")]
    ConversionError {
        #[from]
        source: GtfsCoordinateError,
    },
}

impl GtfsCliError {
    /// writes the failure as a single diagnostic line
    pub fn write_diagnostic<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.to_string().replace('\n', " "))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            GtfsCliError::MissingInput(_) => 2,
            GtfsCliError::ConversionError {
                source: GtfsCoordinateError::MissingColumns { .. },
            } => 3,
            GtfsCliError::ConversionError {
                source: GtfsCoordinateError::UnsupportedCrs { .. },
            } => 4,
            GtfsCliError::OutputDirectory { .. } => 5,
            GtfsCliError::ConversionError { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_is_one_line() {
        let error = GtfsCliError::from(GtfsCoordinateError::MissingColumns {
            filepath: String::from("gtfs/stops.txt"),
            lat: String::from("stop_lat"),
            lon: String::from("stop_lon"),
        });
        let mut out = Vec::new();
        error.write_diagnostic(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Required columns stop_lat and stop_lon missing in gtfs/stops.txt\n"
        );
        assert_eq!(error.exit_code(), 3);
    }
}
