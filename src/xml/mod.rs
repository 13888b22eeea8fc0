//! Generic attribute/text tree produced from an API response.
//!
//! Attributes and child elements share one namespace keyed by name, attribute
//! values stay strings, and an element holding only text decodes to a bare
//! [`XmlValue::Text`]. Repeated keys are kept as [`OneOrMany::Many`] in document
//! order; callers read them back through [`XmlElement::records`].

mod decode;

use std::collections::{btree_map::Entry, BTreeMap};

use crate::util::cardinality::{normalize_ref, OneOrMany};

pub use decode::{parse_document, XmlDocument};

#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    Text(String),
    Element(XmlElement),
}

impl XmlValue {
    /// Text content, whether the value is a bare text node or an element with text.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(element) => element.text(),
        }
    }

    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Scalar field of an element value; bare text has no fields.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.as_element().and_then(|element| element.value(key))
    }

    /// Normalized sequence stored under `key`.
    pub fn records(&self, key: &str) -> Vec<&XmlValue> {
        match self {
            Self::Element(element) => element.records(key),
            Self::Text(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    fields: BTreeMap<String, OneOrMany<XmlValue>>,
    text: Option<String>,
}

impl XmlElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, appending to any value already stored under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: XmlValue) {
        match self.fields.entry(key.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(OneOrMany::One(value));
            }
        }
    }

    /// Builder-style [`insert`](Self::insert) for a text value.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, XmlValue::Text(value.into()));
        self
    }

    /// Builder-style [`insert`](Self::insert) for a child element.
    pub fn with_child(mut self, key: impl Into<String>, child: XmlElement) -> Self {
        self.insert(key, child.into_value());
        self
    }

    pub fn get(&self, key: &str) -> Option<&OneOrMany<XmlValue>> {
        self.fields.get(key)
    }

    /// Text of the first value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(OneOrMany::first)
            .and_then(XmlValue::text)
    }

    pub fn records(&self, key: &str) -> Vec<&XmlValue> {
        normalize_ref(self.get(key))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &OneOrMany<XmlValue>)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Collapses a field-less element into its text, like the feed's own serializer.
    pub fn into_value(self) -> XmlValue {
        if self.fields.is_empty() {
            XmlValue::Text(self.text.unwrap_or_default())
        } else {
            XmlValue::Element(self)
        }
    }
}
