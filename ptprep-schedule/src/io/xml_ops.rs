use super::ScheduleIoError;
use crate::model::{Attributes, XmlContent, XmlElement};
use ptprep_core::{XmlTag, XmlWriter};
use roxmltree::{Document, Node, ParsingOptions};
use std::{fmt::Display, io::Write, str::FromStr};

/// parses a document, allowing the DOCTYPE declarations MATSim files carry
pub fn parse_document<'input>(
    filepath: &str,
    text: &'input str,
) -> Result<Document<'input>, ScheduleIoError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Document::parse_with_options(text, options).map_err(|source| ScheduleIoError::XmlError {
        filepath: filepath.to_string(),
        source,
    })
}

pub fn expect_root<'a, 'input>(
    filepath: &str,
    document: &'a Document<'input>,
    expected: &'static str,
) -> Result<Node<'a, 'input>, ScheduleIoError> {
    let root = document.root_element();
    if root.tag_name().name() != expected {
        return Err(ScheduleIoError::UnexpectedRoot {
            filepath: filepath.to_string(),
            expected,
            found: root.tag_name().name().to_string(),
        });
    }
    Ok(root)
}

/// child elements of a node, skipping text, comments and processing instructions
pub fn element_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

pub fn find_child<'a, 'input: 'a>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    element_children(node).find(|n| n.tag_name().name() == name)
}

pub fn required_attr<'a>(
    filepath: &str,
    node: Node<'a, '_>,
    attribute: &'static str,
) -> Result<&'a str, ScheduleIoError> {
    node.attribute(attribute)
        .ok_or_else(|| ScheduleIoError::MissingAttribute {
            filepath: filepath.to_string(),
            element: node.tag_name().name().to_string(),
            attribute,
        })
}

pub fn parse_value<T>(
    filepath: &str,
    node: Node,
    attribute: &str,
    value: &str,
) -> Result<T, ScheduleIoError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ScheduleIoError::InvalidValue {
            filepath: filepath.to_string(),
            element: node.tag_name().name().to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
}

pub fn parse_required<T>(
    filepath: &str,
    node: Node,
    attribute: &'static str,
) -> Result<T, ScheduleIoError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = required_attr(filepath, node, attribute)?;
    parse_value(filepath, node, attribute, value)
}

pub fn parse_optional<T>(
    filepath: &str,
    node: Node,
    attribute: &str,
) -> Result<Option<T>, ScheduleIoError>
where
    T: FromStr,
    T::Err: Display,
{
    node.attribute(attribute)
        .map(|value| parse_value(filepath, node, attribute, value))
        .transpose()
}

/// boolean attribute, case insensitive, falling back to `default` when absent
pub fn parse_bool(
    filepath: &str,
    node: Node,
    attribute: &str,
    default: bool,
) -> Result<bool, ScheduleIoError> {
    match node.attribute(attribute) {
        None => Ok(default),
        Some(v) if v.trim().eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v.trim().eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => Err(ScheduleIoError::InvalidValue {
            filepath: filepath.to_string(),
            element: node.tag_name().name().to_string(),
            attribute: attribute.to_string(),
            value: v.to_string(),
            message: String::from("expected 'true' or 'false'"),
        }),
    }
}

/// text content of a child element, if that element exists
pub fn child_text(node: Node, name: &str) -> Option<String> {
    find_child(node, name).map(|c| c.text().unwrap_or_default().to_string())
}

/// reads the `<attributes>` child of a node. a node without one has no attributes.
pub fn read_attributes(filepath: &str, node: Node) -> Result<Attributes, ScheduleIoError> {
    let mut attributes = Attributes::default();
    let Some(block) = find_child(node, "attributes") else {
        return Ok(attributes);
    };
    for attribute in element_children(block).filter(|n| n.has_tag_name("attribute")) {
        let name = required_attr(filepath, attribute, "name")?;
        let class = required_attr(filepath, attribute, "class")?;
        attributes.insert(name, class, attribute.text().unwrap_or_default());
    }
    Ok(attributes)
}

/// copies an element subtree. names keep their namespace prefix and the
/// subtree root declares every prefix used below it, so the copy can be
/// written anywhere.
pub fn xml_element(node: Node) -> XmlElement {
    let mut element = copy_element(node);
    let mut attributes = prefix_declarations(node);
    attributes.append(&mut element.attributes);
    element.attributes = attributes;
    element
}

fn copy_element(node: Node) -> XmlElement {
    let tag_name = node.tag_name();
    let attributes = node
        .attributes()
        .map(|a| {
            (
                qualified_name(node, a.namespace(), a.name()),
                a.value().to_string(),
            )
        })
        .collect();
    let content = node
        .children()
        .filter_map(|child| {
            if child.is_element() {
                Some(XmlContent::Element(copy_element(child)))
            } else if child.is_text() {
                child
                    .text()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(|t| XmlContent::Text(t.to_string()))
            } else {
                None
            }
        })
        .collect();
    XmlElement {
        name: qualified_name(node, tag_name.namespace(), tag_name.name()),
        attributes,
        content,
    }
}

fn qualified_name(node: Node, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// `xmlns:<prefix>` declarations for the prefixed names inside a subtree.
/// the predefined `xml` prefix needs none.
fn prefix_declarations(node: Node) -> Vec<(String, String)> {
    let mut declarations: Vec<(String, String)> = vec![];
    for element in node.descendants().filter(|n| n.is_element()) {
        let namespaces = std::iter::once(element.tag_name().namespace())
            .chain(element.attributes().map(|a| a.namespace()))
            .flatten();
        for uri in namespaces {
            let Some(prefix) = element.lookup_prefix(uri) else {
                continue;
            };
            if prefix.is_empty() || prefix == "xml" {
                continue;
            }
            let key = format!("xmlns:{prefix}");
            if !declarations.iter().any(|(k, _)| *k == key) {
                declarations.push((key, uri.to_string()));
            }
        }
    }
    declarations
}

pub fn write_attributes<W: Write>(
    writer: &mut XmlWriter<W>,
    attributes: &Attributes,
) -> std::io::Result<()> {
    if attributes.is_empty() {
        return Ok(());
    }
    writer.start(&XmlTag::new("attributes"))?;
    for (name, value) in attributes.iter() {
        let tag = XmlTag::new("attribute")
            .attr("name", name)
            .attr("class", &value.class);
        writer.text(&tag, &value.value)?;
    }
    writer.end("attributes")
}

pub fn write_element<W: Write>(
    writer: &mut XmlWriter<W>,
    element: &XmlElement,
) -> std::io::Result<()> {
    let tag = element
        .attributes
        .iter()
        .fold(XmlTag::new(&element.name), |tag, (k, v)| tag.attr(k, v));
    match element.content.as_slice() {
        [] => writer.empty(&tag),
        [XmlContent::Text(text)] => writer.text(&tag, text),
        content => {
            writer.start(&tag)?;
            for item in content.iter() {
                match item {
                    XmlContent::Element(child) => write_element(writer, child)?,
                    XmlContent::Text(text) => writer.text_line(text)?,
                }
            }
            writer.end(&element.name)
        }
    }
}
