use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtfsCoordinateError {
    #[error("unsupported target CRS '{name}': {reason}")]
    UnsupportedCrs { name: String, reason: String },
    #[error("Required columns {lat} and {lon} missing in {filepath}")]
    MissingColumns {
        filepath: String,
        lat: String,
        lon: String,
    },
    #[error("failure reading CSV file '{filepath}': {source}")]
    CsvReadError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure writing CSV file '{filepath}': {source}")]
    CsvWriteError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure writing output: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("{0}")]
    InternalError(String),
}
