use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmXmlError {
    #[error("failure reading .pbf file '{filepath}': {source}")]
    PbfLibError {
        filepath: String,
        source: osmpbf::Error,
    },
    #[error("failure writing OSM XML: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("{0}")]
    InternalError(String),
}
