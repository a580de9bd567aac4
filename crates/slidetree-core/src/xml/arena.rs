use super::node::{XmlNode, XmlNodeData};
use super::xname::XName;
use indextree::{Arena, NodeId};

/// An immutable-after-parse XML tree backed by an `indextree` arena.
#[derive(Debug)]
pub struct XmlDocument {
    arena: Arena<XmlNodeData>,
    root: Option<NodeId>,
    source: String,
}

impl XmlDocument {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            source: String::new(),
        }
    }

    /// Archive path this tree was decoded from (empty for ad-hoc documents).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, path: &str) {
        self.source = path.to_string();
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Root element as a borrowed handle.
    pub fn root_node(&self) -> Option<XmlNode<'_>> {
        self.root.map(|id| XmlNode::new(self, id))
    }

    pub fn node(&self, id: NodeId) -> XmlNode<'_> {
        XmlNode::new(self, id)
    }

    pub fn get(&self, id: NodeId) -> Option<&XmlNodeData> {
        self.arena.get(id).map(|node| node.get())
    }

    pub fn add_root(&mut self, data: XmlNodeData) -> NodeId {
        let id = self.arena.new_node(data);
        self.root = Some(id);
        id
    }

    pub fn add_child(&mut self, parent: NodeId, data: XmlNodeData) -> NodeId {
        let child = self.arena.new_node(data);
        parent.append(child, &mut self.arena);
        child
    }

    /// Rewrite every element and attribute in namespace `from` into `to`.
    ///
    /// Diagram drawings use their own namespace for shapes that are otherwise
    /// identical to slide shapes.
    pub fn rename_namespace(&mut self, from: &str, to: &str) {
        for node in self.arena.iter_mut() {
            if let XmlNodeData::Element { name, attributes } = node.get_mut() {
                if name.namespace.as_deref() == Some(from) {
                    name.namespace = Some(to.to_string());
                }
                for attr in attributes.iter_mut() {
                    if attr.name.namespace.as_deref() == Some(from) {
                        attr.name.namespace = Some(to.to_string());
                    }
                }
            }
        }
    }

    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        parent.children(&self.arena)
    }

    /// Child nodes that are elements, in document order.
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent)
            .filter(move |&id| self.get(id).map(|d| d.is_element()).unwrap_or(false))
    }

    pub fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.descendants(&self.arena)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.parent()
    }

    pub fn name(&self, node: NodeId) -> Option<&XName> {
        self.get(node).and_then(|d| d.name())
    }

    pub fn elements_by_name<'a>(
        &'a self,
        parent: NodeId,
        name: &'a XName,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(parent).filter(move |&child_id| {
            self.get(child_id)
                .and_then(|data| data.name())
                .map(|n| n == name)
                .unwrap_or(false)
        })
    }

    pub fn find_child(&self, parent: NodeId, name: &XName) -> Option<NodeId> {
        self.elements_by_name(parent, name).next()
    }

    /// Follow a chain of child element names, like a path expression.
    pub fn find_path(&self, start: NodeId, path: &[XName]) -> Option<NodeId> {
        path.iter()
            .try_fold(start, |current, name| self.find_child(current, name))
    }

    /// First descendant (excluding `node` itself) with the given name.
    pub fn find_descendant(&self, node: NodeId, name: &XName) -> Option<NodeId> {
        self.descendants(node)
            .skip(1)
            .find(|&id| self.name(id) == Some(name))
    }

    /// Attribute lookup by full name.
    pub fn attribute(&self, node: NodeId, name: &XName) -> Option<&str> {
        self.get(node)?
            .attributes()?
            .iter()
            .find(|a| &a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Attribute lookup for un-namespaced attributes, which is how nearly
    /// every DrawingML attribute is declared.
    pub fn attr(&self, node: NodeId, local: &str) -> Option<&str> {
        self.get(node)?
            .attributes()?
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.local_name == local)
            .map(|a| a.value.as_str())
    }

    pub fn attr_i64(&self, node: NodeId, local: &str) -> Option<i64> {
        self.attr(node, local).and_then(|v| v.trim().parse().ok())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self, node: NodeId) -> String {
        self.descendants(node)
            .filter_map(|id| self.get(id).and_then(|d| d.text_content()))
            .collect()
    }
}

impl Default for XmlDocument {
    fn default() -> Self {
        Self::new()
    }
}
