use super::{OsmElement, OsmMetadata, OsmNode, OsmRelation, OsmWay};
use ptprep_core::{XmlTag, XmlWriter};
use std::io::Write;

pub const OSM_API_VERSION: &str = "0.6";
const GENERATOR: &str = concat!("ptprep-osm ", env!("CARGO_PKG_VERSION"));

/// number of elements written per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsmElementCounts {
    pub nodes: usize,
    pub ways: usize,
    pub relations: usize,
}

/// writes elements as OSM XML 0.6 in the order they are given
pub struct OsmXmlWriter<W: Write> {
    writer: XmlWriter<W>,
    include_metadata: bool,
    counts: OsmElementCounts,
}

impl<W: Write> OsmXmlWriter<W> {
    /// writes the document header. with `include_metadata` false, version,
    /// timestamp, user and changeset attributes are left out.
    pub fn new(out: W, include_metadata: bool) -> std::io::Result<OsmXmlWriter<W>> {
        let mut writer = XmlWriter::new(out);
        writer.declaration()?;
        let root = XmlTag::new("osm")
            .attr("version", OSM_API_VERSION)
            .attr("generator", GENERATOR);
        writer.start(&root)?;
        Ok(OsmXmlWriter {
            writer,
            include_metadata,
            counts: OsmElementCounts::default(),
        })
    }

    pub fn write_element(&mut self, element: &OsmElement) -> std::io::Result<()> {
        match element {
            OsmElement::Node(node) => self.write_node(node),
            OsmElement::Way(way) => self.write_way(way),
            OsmElement::Relation(relation) => self.write_relation(relation),
        }
    }

    /// closes the document, returning the inner writer and what was written
    pub fn finish(mut self) -> std::io::Result<(W, OsmElementCounts)> {
        self.writer.end("osm")?;
        let mut inner = self.writer.into_inner();
        inner.flush()?;
        Ok((inner, self.counts))
    }

    fn write_node(&mut self, node: &OsmNode) -> std::io::Result<()> {
        let tag = self
            .with_metadata(XmlTag::new("node").attr("id", node.id), &node.metadata)
            .attr("lat", format!("{:.7}", node.lat))
            .attr("lon", format!("{:.7}", node.lon));
        if node.tags.is_empty() {
            self.writer.empty(&tag)?;
        } else {
            self.writer.start(&tag)?;
            self.write_tags(&node.tags)?;
            self.writer.end("node")?;
        }
        self.counts.nodes += 1;
        Ok(())
    }

    fn write_way(&mut self, way: &OsmWay) -> std::io::Result<()> {
        let tag = self.with_metadata(XmlTag::new("way").attr("id", way.id), &way.metadata);
        if way.node_refs.is_empty() && way.tags.is_empty() {
            self.writer.empty(&tag)?;
        } else {
            self.writer.start(&tag)?;
            for node_ref in way.node_refs.iter() {
                self.writer.empty(&XmlTag::new("nd").attr("ref", node_ref))?;
            }
            self.write_tags(&way.tags)?;
            self.writer.end("way")?;
        }
        self.counts.ways += 1;
        Ok(())
    }

    fn write_relation(&mut self, relation: &OsmRelation) -> std::io::Result<()> {
        let tag = self.with_metadata(
            XmlTag::new("relation").attr("id", relation.id),
            &relation.metadata,
        );
        if relation.members.is_empty() && relation.tags.is_empty() {
            self.writer.empty(&tag)?;
        } else {
            self.writer.start(&tag)?;
            for member in relation.members.iter() {
                let member_tag = XmlTag::new("member")
                    .attr("type", member.member_type.as_str())
                    .attr("ref", member.member_ref)
                    .attr("role", &member.role);
                self.writer.empty(&member_tag)?;
            }
            self.write_tags(&relation.tags)?;
            self.writer.end("relation")?;
        }
        self.counts.relations += 1;
        Ok(())
    }

    fn write_tags(&mut self, tags: &[(String, String)]) -> std::io::Result<()> {
        for (k, v) in tags.iter() {
            self.writer.empty(&XmlTag::new("tag").attr("k", k).attr("v", v))?;
        }
        Ok(())
    }

    fn with_metadata<'a>(&self, tag: XmlTag<'a>, metadata: &Option<OsmMetadata>) -> XmlTag<'a> {
        match metadata {
            Some(m) if self.include_metadata => tag
                .attr_opt("version", m.version)
                .attr_opt(
                    "timestamp",
                    m.timestamp
                        .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
                )
                .attr_opt("uid", m.uid)
                .attr_opt("user", m.user.as_ref())
                .attr_opt("changeset", m.changeset),
            _ => tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OsmMember, OsmMemberType};
    use chrono::DateTime;

    fn station() -> OsmElement {
        OsmElement::Node(OsmNode {
            id: 42,
            lat: 25.0478,
            lon: 121.517,
            metadata: Some(OsmMetadata {
                version: Some(3),
                timestamp: DateTime::from_timestamp_millis(1_700_000_000_000),
                uid: Some(7),
                user: Some(String::from("mapper")),
                changeset: Some(99),
            }),
            tags: vec![(String::from("name"), String::from("Taipei Main \"Station\""))],
        })
    }

    fn write(elements: &[OsmElement], include_metadata: bool) -> (String, OsmElementCounts) {
        let mut writer = OsmXmlWriter::new(Vec::new(), include_metadata).unwrap();
        for element in elements {
            writer.write_element(element).unwrap();
        }
        let (bytes, counts) = writer.finish().unwrap();
        (String::from_utf8(bytes).unwrap(), counts)
    }

    #[test]
    fn test_node_with_metadata() {
        let (xml, counts) = write(&[station()], true);
        assert_eq!(counts.nodes, 1);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<osm version="0.6""#));
        assert!(xml.contains(
            r#"<node id="42" version="3" timestamp="2023-11-14T22:13:20Z" uid="7" user="mapper" changeset="99" lat="25.0478000" lon="121.5170000">"#
        ));
        assert!(xml.contains(r#"<tag k="name" v="Taipei Main &quot;Station&quot;"/>"#));
        assert!(xml.trim_end().ends_with("</osm>"));
    }

    #[test]
    fn test_metadata_can_be_left_out() {
        let (xml, _) = write(&[station()], false);
        assert!(xml.contains(r#"<node id="42" lat="25.0478000" lon="121.5170000">"#));
        assert!(!xml.contains("changeset"));
    }

    #[test]
    fn test_way_and_relation() {
        let way = OsmElement::Way(OsmWay {
            id: 5,
            metadata: None,
            node_refs: vec![1, 2, 3],
            tags: vec![(String::from("railway"), String::from("subway"))],
        });
        let relation = OsmElement::Relation(OsmRelation {
            id: 9,
            metadata: None,
            members: vec![
                OsmMember {
                    member_type: OsmMemberType::Way,
                    member_ref: 5,
                    role: String::new(),
                },
                OsmMember {
                    member_type: OsmMemberType::Node,
                    member_ref: 42,
                    role: String::from("stop"),
                },
            ],
            tags: vec![(String::from("route"), String::from("subway"))],
        });
        let (xml, counts) = write(&[way, relation], true);
        assert_eq!(
            counts,
            OsmElementCounts {
                nodes: 0,
                ways: 1,
                relations: 1
            }
        );
        assert!(xml.contains("<way id=\"5\">\n\t\t<nd ref=\"1\"/>"));
        assert!(xml.contains(r#"<member type="way" ref="5" role=""/>"#));
        assert!(xml.contains(r#"<member type="node" ref="42" role="stop"/>"#));
        assert!(xml.contains(r#"<tag k="route" v="subway"/>"#));
    }
}
