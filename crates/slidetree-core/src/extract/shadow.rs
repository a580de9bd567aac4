use super::color::{color_of, ColorScheme};
use crate::pml::geometry::emu_to_pt;
use crate::pml::result::Shadow;
use crate::pml::PlaceholderChain;
use crate::xml::{XmlNode, A, P};

pub fn shape_shadow(chain: &PlaceholderChain<'_>, colors: &ColorScheme) -> Option<Shadow> {
    chain
        .node
        .path(&[P::spPr(), A::effectLst(), A::outerShdw()])
        .map(|shdw| outer_shadow(shdw, colors))
}

/// `a:outerShdw`: distance and direction become horizontal/vertical offsets.
pub fn outer_shadow(shdw: XmlNode<'_>, colors: &ColorScheme) -> Shadow {
    let dist = emu_to_pt(shdw.attr_i64("dist").unwrap_or(0));
    let dir = (shdw.attr_i64("dir").unwrap_or(0) as f64 / 60_000.0).to_radians();
    Shadow {
        h: round2(dist * dir.cos()),
        v: round2(dist * dir.sin()),
        blur: emu_to_pt(shdw.attr_i64("blurRad").unwrap_or(0)),
        color: color_of(shdw, colors).unwrap_or_else(|| "#000000".to_string()),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
