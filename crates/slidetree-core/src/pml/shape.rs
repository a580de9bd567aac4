//! Shape generator shared by slide shapes, connectors and diagram shapes.

use super::geometry::{angle_to_degrees, flips, resolve_frame, rotation};
use super::placeholder::PlaceholderChain;
use super::result::{Element, ShapeBody, ShapeElement, TextElement};
use super::walker::Walker;
use crate::error::Result;
use crate::util::has_visible_text;
use crate::xml::{A, P};

/// Resolve one shape into a `shape` or `text` element.
///
/// Custom geometry (outside diagrams) becomes a custom path; a preset geometry
/// on an untyped or `obj` placeholder becomes a preset shape; everything else
/// is text. Only the shape branches drop content with no visible text.
pub fn generate(walker: &mut Walker<'_, '_>, chain: PlaceholderChain<'_>, ph_type: Option<&str>) -> Result<Element> {
    let ctx = walker.context();
    let order = walker.reserve_order();
    let node = chain.node;
    let type_name = ph_type.unwrap_or("");

    let xfrms = chain.at_path(&[P::spPr(), A::xfrm()]);
    let own_xfrm = xfrms[0];
    let rotate = rotation(own_xfrm);
    let frame = resolve_frame(&xfrms, rotate, order)?;
    let (is_flip_h, is_flip_v) = flips(own_xfrm);

    let content = node
        .child(&P::txBody())
        .map(|body| ctx.extractors.text_body(body, &chain, type_name, ctx.colors))
        .unwrap_or_default();

    let name = node
        .children()
        .find_map(|nv| nv.child(&P::cNvPr()))
        .and_then(|c| c.attr("name"))
        .unwrap_or_default()
        .to_string();

    let mut body = ShapeBody {
        frame,
        border: ctx.extractors.border(&chain, type_name, ctx.colors),
        fill_color: ctx.extractors.fill(&chain, ctx.colors).unwrap_or_default(),
        content,
        is_flip_v,
        is_flip_h,
        v_align: ctx.extractors.vertical_align(&chain, type_name),
        name,
        shadow: ctx.extractors.shadow(&chain, ctx.colors),
    };

    let sp_pr = node.child(&P::spPr());
    let cust_geom = sp_pr.and_then(|sp| sp.child(&A::custGeom()));
    let preset = sp_pr
        .and_then(|sp| sp.child(&A::prstGeom()))
        .and_then(|g| g.attr("prst"));

    if let Some(cust_geom) = cust_geom.filter(|_| ph_type != Some("diagram")) {
        let width = body.frame.width.unwrap_or(0.0);
        let height = body.frame.height.unwrap_or(0.0);
        let path = ctx.extractors.custom_path(cust_geom, width, height);
        drop_invisible(&mut body);
        return Ok(Element::Shape(ShapeElement {
            body,
            shap_type: "custom".to_string(),
            path: Some(path),
        }));
    }

    if let Some(preset) = preset.filter(|_| matches!(ph_type, None | Some("obj"))) {
        drop_invisible(&mut body);
        return Ok(Element::Shape(ShapeElement {
            body,
            shap_type: preset.to_string(),
            path: None,
        }));
    }

    if let Some(tx_xfrm) = node.child(&P::txXfrm()) {
        if let Some(rot) = tx_xfrm.attr_i64("rot") {
            body.frame.rotate = (angle_to_degrees(rot) + 90.0).rem_euclid(360.0);
        }
    }
    let is_vertical = node
        .path(&[P::txBody(), A::bodyPr()])
        .and_then(|b| b.attr("vert"))
        == Some("eaVert");

    Ok(Element::Text(TextElement { body, is_vertical }))
}

fn drop_invisible(body: &mut ShapeBody) {
    if !has_visible_text(&body.content) {
        body.content.clear();
    }
}
