//! Placeholder identity.
//!
//! Layouts and masters are indexed once (`IndexTable`); every slide shape then
//! resolves its inherited counterparts into a `PlaceholderChain`, which all
//! fallback lookups fold over in slide → layout → master order.

use crate::xml::{XmlNode, XName, P};
use std::collections::HashMap;

/// Shape id / placeholder index / placeholder type → top-level shape of one
/// layout or master part. Later siblings overwrite earlier ones on key clashes.
#[derive(Debug, Default)]
pub struct IndexTable<'a> {
    by_id: HashMap<&'a str, XmlNode<'a>>,
    by_idx: HashMap<&'a str, XmlNode<'a>>,
    by_type: HashMap<&'a str, XmlNode<'a>>,
}

impl<'a> IndexTable<'a> {
    /// Index the direct children of `root`'s `p:cSld/p:spTree`. Nested groups
    /// are not descended into.
    pub fn build(root: XmlNode<'a>) -> Self {
        let mut table = Self::default();
        let Some(tree) = root.path(&[P::cSld(), P::spTree()]) else {
            return table;
        };

        for shape in tree.children() {
            let Some(nv) = non_visual_props(shape) else {
                continue;
            };
            let identity = PlaceholderRef::of_props(nv);
            if let Some(id) = identity.id {
                table.by_id.insert(id, shape);
            }
            if let Some(idx) = identity.idx {
                table.by_idx.insert(idx, shape);
            }
            if let Some(ph_type) = identity.ph_type {
                table.by_type.insert(ph_type, shape);
            }
        }
        table
    }

    pub fn by_id(&self, id: &str) -> Option<XmlNode<'a>> {
        self.by_id.get(id).copied()
    }

    pub fn by_idx(&self, idx: &str) -> Option<XmlNode<'a>> {
        self.by_idx.get(idx).copied()
    }

    pub fn by_type(&self, ph_type: &str) -> Option<XmlNode<'a>> {
        self.by_type.get(ph_type).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_idx.is_empty() && self.by_type.is_empty()
    }
}

/// The non-visual property container of an indexable shape kind.
pub fn non_visual_props<'a>(shape: XmlNode<'a>) -> Option<XmlNode<'a>> {
    let container = match shape.local_name() {
        "sp" => P::nvSpPr(),
        "cxnSp" => P::nvCxnSpPr(),
        "pic" => P::nvPicPr(),
        "graphicFrame" => P::nvGraphicFramePr(),
        _ => return None,
    };
    if !shape.name().is_some_and(|n| n.in_namespace(P::NS)) {
        return None;
    }
    shape.child(&container)
}

/// Shape id plus placeholder `idx` / `type`, any of which may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderRef<'a> {
    pub id: Option<&'a str>,
    pub idx: Option<&'a str>,
    pub ph_type: Option<&'a str>,
}

impl<'a> PlaceholderRef<'a> {
    pub fn of(shape: XmlNode<'a>) -> Self {
        non_visual_props(shape).map(Self::of_props).unwrap_or_default()
    }

    fn of_props(nv: XmlNode<'a>) -> Self {
        let ph = nv.path(&[P::nvPr(), P::ph()]);
        Self {
            id: nv.child(&P::cNvPr()).and_then(|c| c.attr("id")),
            idx: ph.and_then(|p| p.attr("idx")),
            ph_type: ph.and_then(|p| p.attr("type")),
        }
    }
}

/// `(slideNode, layoutNode?, masterNode?)` for one slide shape.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderChain<'a> {
    pub node: XmlNode<'a>,
    pub layout: Option<XmlNode<'a>>,
    pub master: Option<XmlNode<'a>>,
}

impl<'a> PlaceholderChain<'a> {
    /// A chain with no inherited levels (connectors, table cells, charts).
    pub fn single(node: XmlNode<'a>) -> Self {
        Self {
            node,
            layout: None,
            master: None,
        }
    }

    /// Find the layout and master counterparts of a slide shape.
    ///
    /// Typed placeholders match by type first and fall back to `idx`; an
    /// untyped placeholder matches the layout by `idx` and reaches the master
    /// through the layout counterpart's type.
    pub fn resolve(node: XmlNode<'a>, layout: &IndexTable<'a>, master: &IndexTable<'a>) -> Self {
        let identity = PlaceholderRef::of(node);

        let layout_node = identity
            .ph_type
            .and_then(|t| layout.by_type(t))
            .or_else(|| identity.idx.and_then(|i| layout.by_idx(i)));

        let inherited_type = layout_node.and_then(|l| PlaceholderRef::of(l).ph_type);
        let master_node = identity
            .ph_type
            .and_then(|t| master.by_type(t))
            .or_else(|| inherited_type.and_then(|t| master.by_type(t)))
            .or_else(|| identity.idx.and_then(|i| master.by_idx(i)));

        tracing::trace!(
            idx = identity.idx,
            ph_type = identity.ph_type,
            layout = layout_node.is_some(),
            master = master_node.is_some(),
            "placeholder lookup"
        );

        Self {
            node,
            layout: layout_node,
            master: master_node,
        }
    }

    /// Present levels, nearest first.
    pub fn levels(&self) -> impl Iterator<Item = XmlNode<'a>> {
        std::iter::once(self.node).chain(self.layout).chain(self.master)
    }

    /// First level for which `lookup` yields a value.
    pub fn first<T>(&self, lookup: impl FnMut(XmlNode<'a>) -> Option<T>) -> Option<T> {
        self.levels().find_map(lookup)
    }

    /// The node at `path` below each level, in chain order.
    pub fn at_path(&self, path: &[XName]) -> [Option<XmlNode<'a>>; 3] {
        [
            self.node.path(path),
            self.layout.and_then(|l| l.path(path)),
            self.master.and_then(|m| m.path(path)),
        ]
    }

    /// Placeholder type: explicit type, text-box flag, layout type, master
    /// type, then `default`.
    pub fn placeholder_type(&self, default: &str) -> String {
        let own = PlaceholderRef::of(self.node).ph_type;
        if let Some(t) = own {
            return t.to_string();
        }
        let is_text_box = self
            .node
            .path(&[P::nvSpPr(), P::cNvSpPr()])
            .is_some_and(|c| c.attr("txBox") == Some("1"));
        if is_text_box {
            return "text".to_string();
        }
        self.layout
            .and_then(|l| PlaceholderRef::of(l).ph_type)
            .or_else(|| self.master.and_then(|m| PlaceholderRef::of(m).ph_type))
            .unwrap_or(default)
            .to_string()
    }
}
