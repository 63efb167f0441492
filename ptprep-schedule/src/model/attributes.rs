use indexmap::IndexMap;

/// a free-form attribute value. the java class name and the textual value
/// are kept exactly as read so they can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub class: String,
    pub value: String,
}

/// ordered free-form metadata attached to schedule and fleet entities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, AttributeValue>);

impl Attributes {
    pub fn insert(&mut self, name: &str, class: &str, value: &str) {
        self.0.insert(
            name.to_string(),
            AttributeValue {
                class: class.to_string(),
                value: value.to_string(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }
}
