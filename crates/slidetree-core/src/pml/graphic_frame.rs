//! `p:graphicFrame` dispatch on the graphic-data URI.

use super::geometry::resolve_frame;
use super::placeholder::PlaceholderChain;
use super::result::{ChartElement, DiagramElement, Element};
use super::shape;
use super::table;
use super::walker::{SlideContext, Walker};
use crate::error::Result;
use crate::package::relationships::relationship_types;
use crate::xml::namespaces::graphic_uri;
use crate::xml::{XmlNode, A, C, DGM, DSP, MC, P, R};

pub fn graphic_frame(walker: &mut Walker<'_, '_>, node: XmlNode<'_>) -> Result<Option<Element>> {
    let Some(graphic_data) = node.path(&[A::graphic(), A::graphicData()]) else {
        tracing::debug!(part = node.doc.source(), "graphic frame without graphic data");
        return Ok(None);
    };
    let uri = graphic_data.attr("uri").unwrap_or_default();

    match uri {
        graphic_uri::TABLE => match graphic_data.child(&A::tbl()) {
            Some(tbl) => table::table(walker, node, tbl).map(Some),
            None => Err(graphic_data.malformed("table graphic data has no a:tbl")),
        },
        graphic_uri::CHART => chart(walker, node, graphic_data),
        graphic_uri::DIAGRAM => diagram(walker, node, graphic_data),
        graphic_uri::OLE => ole_object(walker, graphic_data),
        other => {
            tracing::debug!(uri = other, "unsupported graphic frame");
            Ok(None)
        }
    }
}

fn chart(walker: &mut Walker<'_, '_>, node: XmlNode<'_>, graphic_data: XmlNode<'_>) -> Result<Option<Element>> {
    let ctx = walker.context();
    let Some(rel) = graphic_data
        .child(&C::chart())
        .and_then(|c| c.attr_ns(&R::id()))
        .and_then(|rid| ctx.rels.get(rid))
    else {
        tracing::warn!(part = node.doc.source(), "chart relationship missing");
        return Ok(None);
    };
    let Some(chart_doc) = ctx.package.get_lenient_xml_part(&rel.part_path) else {
        tracing::warn!(chart = %rel.part_path, "chart part missing");
        return Ok(None);
    };
    let Some(chart) = chart_doc
        .root_node()
        .and_then(|root| root.path(&[C::chart(), C::plotArea()]))
        .and_then(|plot_area| ctx.extractors.chart(plot_area))
    else {
        tracing::debug!(chart = %rel.part_path, "chart without plot data");
        return Ok(None);
    };

    let order = walker.reserve_order();
    let frame = resolve_frame(&[node.child(&P::xfrm())], 0.0, order)?;
    Ok(Some(Element::Chart(ChartElement { frame, chart })))
}

/// SmartArt: the pre-rendered drawing part's shapes, resolved against the
/// slide's layout and master with default placeholder type `diagram`.
fn diagram(walker: &mut Walker<'_, '_>, node: XmlNode<'_>, graphic_data: XmlNode<'_>) -> Result<Option<Element>> {
    let ctx = walker.context();
    let Some(path) = diagram_drawing_path(ctx, graphic_data) else {
        tracing::warn!(part = node.doc.source(), "diagram drawing relationship missing");
        return Ok(None);
    };
    let Some(mut drawing) = ctx.package.get_lenient_xml_part(&path) else {
        tracing::warn!(drawing = %path, "diagram drawing part missing");
        return Ok(None);
    };
    drawing.rename_namespace(DSP::NS, P::NS);

    let order = walker.reserve_order();
    let frame = resolve_frame(&[node.child(&P::xfrm())], 0.0, order)?;

    let mut elements = Vec::new();
    if let Some(tree) = drawing.root_node().and_then(|root| root.child(&P::spTree())) {
        for sp in tree.children_named(P::sp()) {
            let chain = PlaceholderChain::resolve(sp, ctx.layout, ctx.master);
            let ph_type = chain.placeholder_type("diagram");
            elements.push(shape::generate(walker, chain, Some(&ph_type))?);
        }
    }

    Ok(Some(Element::Diagram(DiagramElement { frame, elements })))
}

/// The data part's `dsp:dataModelExt@relId`, else the slide's first
/// diagram-drawing relationship.
fn diagram_drawing_path(ctx: &SlideContext<'_>, graphic_data: XmlNode<'_>) -> Option<String> {
    let data_path = graphic_data
        .child(&DGM::relIds())
        .and_then(|ids| ids.attr_ns(&R::dm()))
        .and_then(|rid| ctx.rels.get(rid))
        .map(|rel| rel.part_path.clone());

    if let Some(data_path) = data_path {
        if let Some(data) = ctx.package.get_lenient_xml_part(&data_path) {
            let drawing = data
                .root_node()
                .and_then(|root| root.descendant(&DSP::dataModelExt()))
                .and_then(|ext| ext.attr("relId"))
                .and_then(|rid| ctx.rels.get(rid));
            if let Some(rel) = drawing {
                return Some(rel.part_path.clone());
            }
        }
    }

    ctx.rels
        .first_of_type(relationship_types::DIAGRAM_DRAWING)
        .map(|rel| rel.part_path.clone())
}

/// An embedded object: the first element its fallback content produces.
fn ole_object(walker: &mut Walker<'_, '_>, graphic_data: XmlNode<'_>) -> Result<Option<Element>> {
    let object = graphic_data
        .path(&[MC::AlternateContent(), MC::Fallback(), P::oleObj()])
        .or_else(|| graphic_data.child(&P::oleObj()));
    let Some(object) = object else {
        tracing::debug!(part = graphic_data.doc.source(), "ole frame without object");
        return Ok(None);
    };

    for child in object.children() {
        if let Some(element) = walker.visit_lenient(child)? {
            return Ok(Some(element));
        }
    }
    Ok(None)
}
