//! Slide shape-tree walk.
//!
//! Every direct child of a tree is classified into a closed set of node kinds
//! and dispatched in document order. `order` is a pre-order counter over the
//! elements actually produced: a node takes its number once it is certain to
//! yield an element, before any of its children.

use super::geometry::{resolve_frame, GroupTransform};
use super::graphic_frame;
use super::parts::PartIndex;
use super::picture;
use super::placeholder::{IndexTable, PlaceholderChain};
use super::result::{Element, GroupElement, MathElement};
use super::settings::ConvertSettings;
use super::shape;
use crate::error::{Result, SlideTreeError};
use crate::extract::{ColorScheme, Extractors};
use crate::package::{OoxmlPackage, RelationshipTable};
use crate::xml::{XmlNode, A, M, MC, P};

/// Everything one slide's walk reads. All of it is shared and immutable.
pub struct SlideContext<'a> {
    pub package: &'a OoxmlPackage,
    pub settings: &'a ConvertSettings,
    pub extractors: &'a dyn Extractors,
    pub rels: &'a RelationshipTable,
    pub layout: &'a IndexTable<'a>,
    pub master: &'a IndexTable<'a>,
    pub parts: &'a PartIndex<'a>,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Shape,
    Connector,
    Picture,
    GraphicFrame,
    Group,
    AlternateContent,
    /// Group properties and extension lists: never produce an element.
    Structural,
}

impl NodeKind {
    pub fn classify(node: XmlNode<'_>) -> Result<Self> {
        let Some(name) = node.name() else {
            return Ok(Self::Structural);
        };
        if name.in_namespace(MC::NS) && name.local_name == "AlternateContent" {
            return Ok(Self::AlternateContent);
        }
        if name.in_namespace(P::NS) {
            match name.local_name.as_str() {
                "sp" => return Ok(Self::Shape),
                "cxnSp" => return Ok(Self::Connector),
                "pic" => return Ok(Self::Picture),
                "graphicFrame" => return Ok(Self::GraphicFrame),
                "grpSp" => return Ok(Self::Group),
                "nvGrpSpPr" | "grpSpPr" | "extLst" => return Ok(Self::Structural),
                _ => {}
            }
        }
        Err(SlideTreeError::UnsupportedNode {
            name: name.to_string(),
        })
    }
}

pub struct Walker<'c, 'a> {
    ctx: &'c SlideContext<'a>,
    next_order: usize,
    depth: usize,
}

impl<'c, 'a> Walker<'c, 'a> {
    pub fn new(ctx: &'c SlideContext<'a>) -> Self {
        Self {
            ctx,
            next_order: 0,
            depth: 0,
        }
    }

    pub fn context(&self) -> &'c SlideContext<'a> {
        self.ctx
    }

    /// Claim the next paint-order number.
    pub fn reserve_order(&mut self) -> usize {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    /// Elements produced by the children of `tree`, in document order.
    pub fn walk_tree(&mut self, tree: XmlNode<'_>) -> Result<Vec<Element>> {
        let mut elements = Vec::new();
        for child in tree.children() {
            if let Some(element) = self.visit_lenient(child)? {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    /// `visit`, with non-fatal failures logged and reported as no element.
    pub fn visit_lenient(&mut self, node: XmlNode<'_>) -> Result<Option<Element>> {
        match self.visit(node) {
            Ok(element) => Ok(element),
            Err(err) if !err.is_fatal() => {
                tracing::debug!(part = node.doc.source(), error = %err, "skipping node");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn visit(&mut self, node: XmlNode<'_>) -> Result<Option<Element>> {
        let kind = NodeKind::classify(node)?;
        tracing::trace!(?kind, node = ?node, "dispatch");

        match kind {
            NodeKind::Shape => {
                let chain = PlaceholderChain::resolve(node, self.ctx.layout, self.ctx.master);
                let ph_type = chain.placeholder_type("obj");
                shape::generate(self, chain, Some(&ph_type)).map(Some)
            }
            NodeKind::Connector => shape::generate(self, PlaceholderChain::single(node), None).map(Some),
            NodeKind::Picture => picture::picture(self, node).map(Some),
            NodeKind::GraphicFrame => graphic_frame::graphic_frame(self, node),
            NodeKind::Group => self.group(node),
            NodeKind::AlternateContent => self.alternate_content(node),
            NodeKind::Structural => Ok(None),
        }
    }

    /// A `p:grpSp` (or an `mc:Fallback` laid out like one). Children are
    /// resolved and rescaled before the group is returned, so nested groups
    /// compose depth-first.
    fn group(&mut self, node: XmlNode<'_>) -> Result<Option<Element>> {
        let Some(xfrm) = node.path(&[P::grpSpPr(), A::xfrm()]) else {
            tracing::debug!(part = node.doc.source(), "group without transform dropped");
            return Ok(None);
        };
        let transform = GroupTransform::from_xfrm(xfrm)?;

        let limit = self.ctx.settings.max_group_depth;
        if self.depth >= limit {
            return Err(node.malformed(format!("group nesting deeper than {}", limit)));
        }

        let order = self.reserve_order();
        self.depth += 1;
        let children = self.walk_tree(node);
        self.depth -= 1;

        let mut elements = children?;
        for element in &mut elements {
            transform.rescale(element.frame_mut());
        }

        Ok(Some(Element::Group(GroupElement {
            frame: transform.frame(order),
            elements,
        })))
    }

    fn alternate_content(&mut self, node: XmlNode<'_>) -> Result<Option<Element>> {
        if let Some(fallback) = node.child(&MC::Fallback()) {
            if fallback.path(&[P::grpSpPr(), A::xfrm()]).is_some() {
                return self.group(fallback);
            }
        }

        let math = node
            .child(&MC::Choice())
            .and_then(|choice| choice.descendant(&M::oMath()).map(|m| (choice, m)));
        match math {
            Some((choice, math)) => self.math(choice, math).map(Some),
            None => {
                tracing::debug!(part = node.doc.source(), "alternate content with no usable branch");
                Ok(None)
            }
        }
    }

    fn math(&mut self, choice: XmlNode<'_>, math: XmlNode<'_>) -> Result<Element> {
        let order = self.reserve_order();
        let xfrm = choice.path(&[P::sp(), P::spPr(), A::xfrm()]);
        let frame = resolve_frame(&[xfrm], 0.0, order)?;
        Ok(Element::Math(MathElement {
            frame,
            latex: self.ctx.extractors.math(math),
        }))
    }
}
