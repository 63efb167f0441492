use chrono::{DateTime, Utc};
use osmpbf::{dense::DenseNodeInfo, elements::Info, Element, RelMemberType};

/// editing metadata of an element. pbf extracts often strip some or all of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsmMetadata {
    pub version: Option<i32>,
    pub timestamp: Option<DateTime<Utc>>,
    pub uid: Option<i32>,
    pub user: Option<String>,
    pub changeset: Option<i64>,
}

impl OsmMetadata {
    pub fn is_empty(&self) -> bool {
        self == &OsmMetadata::default()
    }

    fn from_info(info: &Info) -> Option<OsmMetadata> {
        let metadata = OsmMetadata {
            version: info.version(),
            timestamp: info
                .milli_timestamp()
                .and_then(DateTime::from_timestamp_millis),
            uid: info.uid(),
            user: info.user().and_then(|u| u.ok()).map(String::from),
            changeset: info.changeset(),
        };
        (!metadata.is_empty()).then_some(metadata)
    }

    fn from_dense_info(info: &DenseNodeInfo) -> Option<OsmMetadata> {
        let metadata = OsmMetadata {
            version: Some(info.version()),
            timestamp: DateTime::from_timestamp_millis(info.milli_timestamp()),
            uid: Some(info.uid()),
            user: info.user().ok().map(String::from),
            changeset: Some(info.changeset()),
        };
        Some(metadata)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OsmNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub metadata: Option<OsmMetadata>,
    pub tags: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OsmWay {
    pub id: i64,
    pub metadata: Option<OsmMetadata>,
    pub node_refs: Vec<i64>,
    pub tags: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsmMemberType {
    Node,
    Way,
    Relation,
}

impl OsmMemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsmMemberType::Node => "node",
            OsmMemberType::Way => "way",
            OsmMemberType::Relation => "relation",
        }
    }
}

impl From<RelMemberType> for OsmMemberType {
    fn from(value: RelMemberType) -> Self {
        match value {
            RelMemberType::Node => OsmMemberType::Node,
            RelMemberType::Way => OsmMemberType::Way,
            RelMemberType::Relation => OsmMemberType::Relation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OsmMember {
    pub member_type: OsmMemberType,
    pub member_ref: i64,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OsmRelation {
    pub id: i64,
    pub metadata: Option<OsmMetadata>,
    pub members: Vec<OsmMember>,
    pub tags: Vec<(String, String)>,
}

/// an owned copy of one pbf element. dense and plain nodes both become
/// [`OsmElement::Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum OsmElement {
    Node(OsmNode),
    Way(OsmWay),
    Relation(OsmRelation),
}

fn owned_tags<'a>(tags: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<(String, String)> {
    tags.map(|(k, v)| (String::from(k), String::from(v)))
        .collect()
}

impl From<&Element<'_>> for OsmElement {
    fn from(element: &Element<'_>) -> Self {
        match element {
            Element::Node(node) => OsmElement::Node(OsmNode {
                id: node.id(),
                lat: node.lat(),
                lon: node.lon(),
                metadata: OsmMetadata::from_info(&node.info()),
                tags: owned_tags(node.tags()),
            }),
            Element::DenseNode(node) => OsmElement::Node(OsmNode {
                id: node.id(),
                lat: node.lat(),
                lon: node.lon(),
                metadata: node.info().and_then(OsmMetadata::from_dense_info),
                tags: owned_tags(node.tags()),
            }),
            Element::Way(way) => OsmElement::Way(OsmWay {
                id: way.id(),
                metadata: OsmMetadata::from_info(&way.info()),
                node_refs: way.refs().collect(),
                tags: owned_tags(way.tags()),
            }),
            Element::Relation(relation) => OsmElement::Relation(OsmRelation {
                id: relation.id(),
                metadata: OsmMetadata::from_info(&relation.info()),
                members: relation
                    .members()
                    .map(|m| OsmMember {
                        role: m.role().map(String::from).unwrap_or_default(),
                        member_ref: m.member_id,
                        member_type: OsmMemberType::from(m.member_type),
                    })
                    .collect(),
                tags: owned_tags(relation.tags()),
            }),
        }
    }
}
