use super::color::{color_of, ColorScheme};
use crate::pml::geometry::emu_to_pt;
use crate::pml::result::Border;
use crate::pml::PlaceholderChain;
use crate::xml::{XmlNode, A, P};

/// Line width a theme-referenced outline gets when `a:ln` carries no `w`.
const DEFAULT_LINE_EMU: i64 = 9525;

/// Outline of a shape from its own `a:ln`, falling back to the shape style's
/// `lnRef`. Text placeholders never pick up a style outline.
pub fn shape_border(chain: &PlaceholderChain<'_>, ph_type: &str, colors: &ColorScheme) -> Border {
    let ln = chain.node.path(&[P::spPr(), A::ln()]);
    let ln_ref = if is_text_placeholder(ph_type) {
        None
    } else {
        chain.node.path(&[P::style(), A::lnRef()])
    };
    line_border(ln, ln_ref, colors)
}

fn is_text_placeholder(ph_type: &str) -> bool {
    matches!(ph_type, "title" | "ctrTitle" | "subTitle" | "body" | "text")
}

/// Border from an `a:ln` and/or a style `a:lnRef`.
pub fn line_border(ln: Option<XmlNode<'_>>, ln_ref: Option<XmlNode<'_>>, colors: &ColorScheme) -> Border {
    let dash = ln
        .and_then(|l| l.child(&A::prstDash()))
        .and_then(|d| d.attr("val"))
        .unwrap_or("solid");
    let (border_type, dasharray) = dash_style(dash);

    let mut border = Border {
        border_color: String::new(),
        border_width: 0.0,
        border_type: border_type.to_string(),
        border_stroke_dasharray: dasharray.to_string(),
    };

    if ln.is_some_and(|l| l.child(&A::noFill()).is_some()) {
        return border;
    }

    let own_color = ln
        .and_then(|l| l.child(&A::solidFill()))
        .and_then(|f| color_of(f, colors));
    let color = own_color.or_else(|| ln_ref.and_then(|r| color_of(r, colors)));
    let width = ln.and_then(|l| l.attr_i64("w"));

    if let Some(color) = color {
        border.border_color = color;
        border.border_width = emu_to_pt(width.unwrap_or(DEFAULT_LINE_EMU));
    } else if let Some(width) = width {
        border.border_width = emu_to_pt(width);
    }
    border
}

/// `borderType` and SVG dash array for an `a:prstDash` value.
pub fn dash_style(prst_dash: &str) -> (&'static str, &'static str) {
    match prst_dash {
        "dot" => ("dotted", "1, 5"),
        "sysDot" => ("dotted", "2, 5"),
        "dash" => ("dashed", "10, 5"),
        "lgDash" => ("dashed", "20, 5"),
        "sysDash" => ("dashed", "5, 2"),
        "dashDot" => ("dashed", "5, 5, 1, 5"),
        "lgDashDot" => ("dashed", "10, 5, 1, 5"),
        "lgDashDotDot" => ("dashed", "10, 5, 1, 5, 1, 5"),
        "sysDashDot" => ("dashed", "5, 5, 5, 1"),
        "sysDashDotDot" => ("dashed", "5, 5, 1, 5, 1, 5"),
        _ => ("solid", "0"),
    }
}

/// Whole-table border from a table style's `a:tcBdr`: the first of bottom,
/// left, right and top that declares a line.
pub fn table_border(tc_bdr: XmlNode<'_>, colors: &ColorScheme) -> Option<Border> {
    ["bottom", "left", "right", "top"].iter().find_map(|side| {
        let side = tc_bdr.child(&A::side(side))?;
        let ln = side.child(&A::ln());
        let ln_ref = side.child(&A::lnRef());
        if ln.is_none() && ln_ref.is_none() {
            return None;
        }
        Some(line_border(ln, ln_ref, colors))
    })
}
