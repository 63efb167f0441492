/// a generic XML element, used to carry content this crate does not model
/// (for example engine or cost information of a vehicle type) through a
/// read/write cycle unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// qualified name, including a namespace prefix such as `xsi:`
    pub name: String,
    /// qualified attribute names in document order, plus the `xmlns:*`
    /// declarations needed by prefixed names of the subtree
    pub attributes: Vec<(String, String)>,
    /// child elements and non-blank text runs, in document order
    pub content: Vec<XmlContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    Element(XmlElement),
    Text(String),
}

impl XmlElement {
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.content.iter().filter_map(|c| match c {
            XmlContent::Element(e) => Some(e),
            XmlContent::Text(_) => None,
        })
    }

    /// all text runs directly below this element, joined by a space
    pub fn text(&self) -> Option<String> {
        let runs = self
            .content
            .iter()
            .filter_map(|c| match c {
                XmlContent::Text(t) => Some(t.as_str()),
                XmlContent::Element(_) => None,
            })
            .collect::<Vec<_>>();
        (!runs.is_empty()).then(|| runs.join(" "))
    }
}
