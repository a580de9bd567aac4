use super::arena::XmlDocument;
use super::xname::{XAttribute, XName};
use crate::error::{Result, SlideTreeError};
use indextree::NodeId;

#[derive(Clone, Debug)]
pub enum XmlNodeData {
    Element {
        name: XName,
        attributes: Vec<XAttribute>,
    },
    Text(String),
    CData(String),
    Comment(String),
}

impl XmlNodeData {
    pub fn element(name: XName) -> Self {
        Self::Element {
            name,
            attributes: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    pub fn name(&self) -> Option<&XName> {
        match self {
            Self::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn attributes(&self) -> Option<&[XAttribute]> {
        match self {
            Self::Element { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::CData(s) => Some(s),
            _ => None,
        }
    }
}

/// A borrowed element handle: the owning document plus a node id.
///
/// Slide, layout and master shapes live in different documents, so every
/// cross-part reference (placeholder chains, index tables) is carried as an
/// `XmlNode` rather than a bare `NodeId`.
#[derive(Clone, Copy)]
pub struct XmlNode<'a> {
    pub doc: &'a XmlDocument,
    pub id: NodeId,
}

impl<'a> XmlNode<'a> {
    pub fn new(doc: &'a XmlDocument, id: NodeId) -> Self {
        Self { doc, id }
    }

    pub fn name(&self) -> Option<&'a XName> {
        self.doc.name(self.id)
    }

    pub fn local_name(&self) -> &'a str {
        self.name().map(|n| n.local_name.as_str()).unwrap_or("")
    }

    pub fn is(&self, name: &XName) -> bool {
        self.name() == Some(name)
    }

    pub fn child(&self, name: &XName) -> Option<XmlNode<'a>> {
        self.doc.find_child(self.id, name).map(|id| XmlNode::new(self.doc, id))
    }

    pub fn path(&self, path: &[XName]) -> Option<XmlNode<'a>> {
        self.doc.find_path(self.id, path).map(|id| XmlNode::new(self.doc, id))
    }

    pub fn descendant(&self, name: &XName) -> Option<XmlNode<'a>> {
        self.doc
            .find_descendant(self.id, name)
            .map(|id| XmlNode::new(self.doc, id))
    }

    pub fn children(&self) -> impl Iterator<Item = XmlNode<'a>> + 'a {
        let doc = self.doc;
        doc.element_children(self.id).map(move |id| XmlNode::new(doc, id))
    }

    pub fn children_named(&self, name: XName) -> impl Iterator<Item = XmlNode<'a>> + 'a {
        self.children().filter(move |c| c.is(&name))
    }

    /// Descendants (excluding self) with the given name, in document order.
    pub fn descendants_named(&self, name: XName) -> impl Iterator<Item = XmlNode<'a>> + 'a {
        let doc = self.doc;
        doc.descendants(self.id)
            .skip(1)
            .filter(move |&id| doc.name(id) == Some(&name))
            .map(move |id| XmlNode::new(doc, id))
    }

    pub fn attr(&self, local: &str) -> Option<&'a str> {
        self.doc.attr(self.id, local)
    }

    pub fn attr_ns(&self, name: &XName) -> Option<&'a str> {
        self.doc.attribute(self.id, name)
    }

    pub fn attr_i64(&self, local: &str) -> Option<i64> {
        self.doc.attr_i64(self.id, local)
    }

    /// `"1"` / `"true"` / `"on"` boolean attributes.
    pub fn attr_flag(&self, local: &str) -> bool {
        matches!(self.attr(local), Some("1") | Some("true") | Some("on"))
    }

    pub fn text(&self) -> String {
        self.doc.text(self.id)
    }

    /// `MalformedTree` error located at this node's part.
    pub fn malformed(&self, message: impl Into<String>) -> SlideTreeError {
        SlideTreeError::malformed(self.doc.source(), message)
    }

    /// A child the schema guarantees; absence is `MalformedTree`.
    pub fn require_child(&self, name: &XName) -> Result<XmlNode<'a>> {
        self.child(name)
            .ok_or_else(|| self.malformed(format!("{} has no {}", self.display_name(), name)))
    }

    /// An integer attribute the schema guarantees; absence is `MalformedTree`.
    pub fn require_i64(&self, local: &str) -> Result<i64> {
        self.attr_i64(local).ok_or_else(|| {
            self.malformed(format!("{} has no integer @{}", self.display_name(), local))
        })
    }

    fn display_name(&self) -> String {
        self.name().map(|n| n.to_string()).unwrap_or_default()
    }
}

impl std::fmt::Debug for XmlNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "XmlNode({})", name),
            None => write!(f, "XmlNode(#text)"),
        }
    }
}
