//! Nested key-value view of an XML document.
//!
//! Registry responses are navigated by qualified element name (`ns2:PESEL`),
//! not by namespace URI, because the prefixes the registry emits are what the
//! lookup paths are written against. The tree mirrors the shape produced by
//! common XML-to-object converters:
//!
//! - an element with only text becomes [`XmlValue::Text`] (empty element: `""`)
//! - an element with children or attributes becomes [`XmlValue::Object`]
//! - a single child is stored as-is, repeated same-named siblings become
//!   [`XmlValue::Array`] in document order
//! - attributes are folded under [`ATTRIBUTES_KEY`], mixed text under [`TEXT_KEY`]
//!
//! Because one child and many children produce different shapes, callers go
//! through [`try_keys`] and [`as_sequence`] instead of matching on the shape.

use roxmltree::{Document, Node};
use std::collections::BTreeMap;

/// Key under which element attributes are stored.
pub const ATTRIBUTES_KEY: &str = "$";

/// Key under which the text of a non-leaf element is stored.
pub const TEXT_KEY: &str = "_";

/// A parsed XML node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    Text(String),
    Object(BTreeMap<String, XmlValue>),
    Array(Vec<XmlValue>),
}

impl XmlValue {
    /// Parses a document into a single-entry object keyed by the root element name.
    ///
    /// # Errors
    ///
    /// Returns [`roxmltree::Error`] if the input is not well-formed XML.
    /// Documents carrying a DTD are rejected as well.
    pub fn parse(input: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(input)?;
        let root = doc.root_element();

        let mut map = BTreeMap::new();
        map.insert(qualified_name(root), from_element(root));

        Ok(XmlValue::Object(map))
    }

    /// Returns the child stored under `key`, if this is an object.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the text content of a leaf, or of an element carrying attributes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            XmlValue::Object(map) => match map.get(TEXT_KEY) {
                Some(XmlValue::Text(text)) => Some(text),
                _ => None,
            },
            XmlValue::Array(_) => None,
        }
    }
}

/// Returns the value under the first candidate key present in `node`.
///
/// Candidates are tried in order, so list the namespaced spelling first and
/// the bare one last.
pub fn try_keys<'a>(node: &'a XmlValue, candidates: &[&str]) -> Option<&'a XmlValue> {
    candidates.iter().find_map(|key| node.get(key))
}

/// Views a node that may hold zero, one or many children as a sequence.
pub fn as_sequence(node: &XmlValue) -> Vec<&XmlValue> {
    match node {
        XmlValue::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

fn from_element(node: Node<'_, '_>) -> XmlValue {
    let mut children: BTreeMap<String, XmlValue> = BTreeMap::new();
    let mut text = String::new();
    let source = node.document().input_text();

    for child in node.children() {
        if child.is_element() {
            let name = qualified_name(child);
            let value = from_element(child);
            let merged = match children.remove(&name) {
                None => value,
                Some(XmlValue::Array(mut items)) => {
                    items.push(value);
                    XmlValue::Array(items)
                }
                Some(existing) => XmlValue::Array(vec![existing, value]),
            };
            children.insert(name, merged);
        } else if child.is_text()
            && let Some(chunk) = child.text()
        {
            text.push_str(chunk);
        }
    }

    let attributes: BTreeMap<String, XmlValue> = node
        .attributes()
        .map(|attr| {
            let name = source
                .get(attr.range_qname())
                .filter(|qname| qname.ends_with(attr.name()))
                .unwrap_or(attr.name());
            (name.to_string(), XmlValue::Text(attr.value().to_string()))
        })
        .collect();

    let text = text.trim();

    if children.is_empty() && attributes.is_empty() {
        return XmlValue::Text(text.to_string());
    }

    if !text.is_empty() {
        children.insert(TEXT_KEY.to_string(), XmlValue::Text(text.to_string()));
    }
    if !attributes.is_empty() {
        children.insert(ATTRIBUTES_KEY.to_string(), XmlValue::Object(attributes));
    }

    XmlValue::Object(children)
}

/// Element name as written in the source: `prefix:local` or `local`.
///
/// Read from the start tag rather than rebuilt from the namespace URI, since
/// several prefixes may be bound to the same URI.
fn qualified_name(node: Node<'_, '_>) -> String {
    let local = node.tag_name().name();
    let source = node.document().input_text();

    source
        .get(node.range())
        .and_then(|tag| tag.strip_prefix('<'))
        .and_then(|tag| {
            tag.split(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .next()
        })
        .filter(|qname| qname.ends_with(local))
        .unwrap_or(local)
        .to_string()
}
