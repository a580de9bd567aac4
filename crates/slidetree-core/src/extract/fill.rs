use super::color::{color_of, ColorScheme};
use crate::pml::PlaceholderChain;
use crate::xml::{XmlNode, A, P};

/// Fill declared directly in a properties container (`p:spPr`, `a:tcPr`,
/// `p:bgPr`, a table-style `a:fill`). `Some("")` means an explicit `a:noFill`
/// and stops inheritance; `None` means nothing is declared here.
pub fn fill_of(container: XmlNode<'_>, colors: &ColorScheme) -> Option<String> {
    for child in container.children() {
        match child.local_name() {
            "noFill" => return Some(String::new()),
            "solidFill" => return color_of(child, colors),
            "gradFill" => {
                return child
                    .path(&[A::gsLst(), A::gs()])
                    .and_then(|gs| color_of(gs, colors))
            }
            _ => {}
        }
    }
    None
}

/// Shape fill through the placeholder chain, then the shape style's `fillRef`.
pub fn shape_fill(chain: &PlaceholderChain<'_>, colors: &ColorScheme) -> Option<String> {
    chain
        .first(|level| level.child(&P::spPr()).and_then(|sp| fill_of(sp, colors)))
        .or_else(|| {
            chain
                .node
                .path(&[P::style(), A::fillRef()])
                .and_then(|r| color_of(r, colors))
        })
}

/// What a `p:bg` element paints. Pictures are left to the caller, which
/// owns the part's relationships.
#[derive(Debug, Clone)]
pub enum Background<'a> {
    Color(String),
    Picture(XmlNode<'a>),
}

/// Resolved background of one part's `p:bg`, if it declares one.
pub fn background_of<'a>(bg: XmlNode<'a>, colors: &ColorScheme) -> Option<Background<'a>> {
    if let Some(bg_pr) = bg.child(&P::bgPr()) {
        if let Some(blip_fill) = bg_pr.child(&A::blipFill()) {
            return Some(Background::Picture(blip_fill));
        }
        return fill_of(bg_pr, colors).map(Background::Color);
    }
    bg.child(&P::bgRef())
        .and_then(|r| color_of(r, colors))
        .map(Background::Color)
}
