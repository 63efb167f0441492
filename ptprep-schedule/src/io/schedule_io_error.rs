use crate::model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleIoError {
    #[error("failure reading {filepath}: {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure writing {filepath}: {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure parsing XML in {filepath}: {source}")]
    XmlError {
        filepath: String,
        source: roxmltree::Error,
    },
    #[error("{filepath}: expected root element <{expected}> but found <{found}>")]
    UnexpectedRoot {
        filepath: String,
        expected: &'static str,
        found: String,
    },
    #[error("{filepath}: <{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        filepath: String,
        element: String,
        attribute: &'static str,
    },
    #[error("{filepath}: <{parent}> is missing required element <{element}>")]
    MissingElement {
        filepath: String,
        parent: String,
        element: &'static str,
    },
    #[error("{filepath}: invalid value '{value}' for '{attribute}' of <{element}>: {message}")]
    InvalidValue {
        filepath: String,
        element: String,
        attribute: String,
        value: String,
        message: String,
    },
    #[error("{filepath}: {source}")]
    InvalidContent {
        filepath: String,
        source: ModelError,
    },
}
