//! `txBody` → HTML.
//!
//! One `<p>` per `a:p`, one `<span>` per run or field, `<br/>` for `a:br`.
//! Runs without an explicit size take the first default size found in the
//! chain's list styles, then in the master's text styles.

use super::color::{color_of, ColorScheme};
use crate::pml::PlaceholderChain;
use crate::util::escape_html;
use crate::xml::{XmlNode, A, P};

pub fn text_body(
    tx_body: XmlNode<'_>,
    chain: &PlaceholderChain<'_>,
    ph_type: &str,
    colors: &ColorScheme,
) -> String {
    let default_size = default_font_size(chain, ph_type);
    let mut html = String::new();

    for paragraph in tx_body.children_named(A::p()) {
        let align = paragraph
            .child(&A::pPr())
            .and_then(|p| p.attr("algn"))
            .and_then(text_align);
        match align {
            Some(align) => html.push_str(&format!("<p style=\"text-align: {};\">", align)),
            None => html.push_str("<p>"),
        }

        for piece in paragraph.children() {
            match piece.local_name() {
                "r" | "fld" => html.push_str(&run_html(piece, default_size, colors)),
                "br" => html.push_str("<br/>"),
                _ => {}
            }
        }
        html.push_str("</p>");
    }
    html
}

/// Plain text of a `txBody`: runs concatenated, paragraphs joined by `\n`.
pub fn plain_text(tx_body: XmlNode<'_>) -> String {
    tx_body
        .children_named(A::p())
        .map(|p| {
            p.children()
                .filter(|c| c.is(&A::r()) || c.is(&A::fld()))
                .filter_map(|r| r.child(&A::t()))
                .map(|t| t.text())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_align(algn: &str) -> Option<&'static str> {
    match algn {
        "l" => Some("left"),
        "ctr" => Some("center"),
        "r" => Some("right"),
        "just" | "dist" => Some("justify"),
        _ => None,
    }
}

fn run_html(run: XmlNode<'_>, default_size: Option<f64>, colors: &ColorScheme) -> String {
    let text = run.child(&A::t()).map(|t| t.text()).unwrap_or_default();
    let r_pr = run.child(&A::rPr());
    let mut style = Vec::new();

    if let Some(r_pr) = r_pr {
        if r_pr.attr_flag("b") {
            style.push("font-weight: bold;".to_string());
        }
        if r_pr.attr_flag("i") {
            style.push("font-style: italic;".to_string());
        }
        let mut decorations = Vec::new();
        if r_pr.attr("u").is_some_and(|u| u != "none") {
            decorations.push("underline");
        }
        if r_pr.attr("strike").is_some_and(|s| s != "noStrike") {
            decorations.push("line-through");
        }
        if !decorations.is_empty() {
            style.push(format!("text-decoration: {};", decorations.join(" ")));
        }
        if let Some(color) = r_pr.child(&A::solidFill()).and_then(|f| color_of(f, colors)) {
            style.push(format!("color: {};", color));
        }
    }

    let size = r_pr
        .and_then(|r| r.attr_i64("sz"))
        .map(|sz| sz as f64 / 100.0)
        .or(default_size);
    if let Some(size) = size {
        style.push(format!("font-size: {}pt;", size));
    }

    if style.is_empty() {
        format!("<span>{}</span>", escape_html(&text))
    } else {
        format!("<span style=\"{}\">{}</span>", style.join(" "), escape_html(&text))
    }
}

fn default_font_size(chain: &PlaceholderChain<'_>, ph_type: &str) -> Option<f64> {
    let from_chain = chain.first(|level| {
        level
            .path(&[P::txBody(), A::lstStyle(), A::lvl1pPr(), A::defRPr()])
            .and_then(|d| d.attr_i64("sz"))
    });

    let from_master = || {
        let master_root = chain.master?.doc.root_node()?;
        let style = match ph_type {
            "title" | "ctrTitle" => P::titleStyle(),
            "body" | "subTitle" | "obj" => P::bodyStyle(),
            _ => P::otherStyle(),
        };
        master_root
            .path(&[P::txStyles(), style, A::lvl1pPr(), A::defRPr()])
            .and_then(|d| d.attr_i64("sz"))
    };

    from_chain.or_else(from_master).map(|sz| sz as f64 / 100.0)
}
