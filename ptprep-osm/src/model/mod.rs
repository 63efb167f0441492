mod osm_element;
mod osm_xml_error;
mod osm_xml_writer;
mod pbf_ops;

pub use osm_element::{OsmElement, OsmMember, OsmMemberType, OsmMetadata, OsmNode, OsmRelation, OsmWay};
pub use osm_xml_error::OsmXmlError;
pub use osm_xml_writer::{OsmElementCounts, OsmXmlWriter};
pub use pbf_ops::convert_pbf_to_xml;
