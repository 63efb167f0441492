//! file and XML output plumbing shared by the ptprep command line tools.
pub mod fs_ops;
mod output_sink;
mod xml_writer;

pub use output_sink::{write_atomic, OutputSink};
pub use xml_writer::{escape, XmlTag, XmlWriter};
