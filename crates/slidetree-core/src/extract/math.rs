//! Office Math (OMML) → LaTeX.
//!
//! A recursive walk over the `m:` element tree. Property elements (`*Pr`)
//! carry no content; structural elements map onto their LaTeX template.

use crate::xml::{XmlNode, M};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static SYMBOLS: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert('α', "\\alpha");
    m.insert('β', "\\beta");
    m.insert('γ', "\\gamma");
    m.insert('δ', "\\delta");
    m.insert('ε', "\\epsilon");
    m.insert('θ', "\\theta");
    m.insert('λ', "\\lambda");
    m.insert('μ', "\\mu");
    m.insert('π', "\\pi");
    m.insert('ρ', "\\rho");
    m.insert('σ', "\\sigma");
    m.insert('τ', "\\tau");
    m.insert('φ', "\\phi");
    m.insert('ω', "\\omega");
    m.insert('Δ', "\\Delta");
    m.insert('Σ', "\\Sigma");
    m.insert('Ω', "\\Omega");
    m.insert('∞', "\\infty");
    m.insert('±', "\\pm");
    m.insert('×', "\\times");
    m.insert('÷', "\\div");
    m.insert('·', "\\cdot");
    m.insert('≤', "\\leq");
    m.insert('≥', "\\geq");
    m.insert('≠', "\\neq");
    m.insert('≈', "\\approx");
    m.insert('→', "\\rightarrow");
    m.insert('←', "\\leftarrow");
    m.insert('∂', "\\partial");
    m.insert('∇', "\\nabla");
    m.insert('∈', "\\in");
    m.insert('∑', "\\sum");
    m.insert('∏', "\\prod");
    m.insert('∫', "\\int");
    m.insert('∬', "\\iint");
    m.insert('∮', "\\oint");
    m
});

const FUNCTIONS: &[&str] = &["sin", "cos", "tan", "cot", "log", "ln", "exp", "lim", "max", "min"];

pub fn omml_to_latex(node: XmlNode<'_>) -> String {
    if !node.name().is_some_and(|n| n.in_namespace(M::NS)) {
        return children(node);
    }

    match node.local_name() {
        "r" => node
            .children()
            .filter(|c| c.local_name() == "t")
            .map(|t| symbols(&t.text()))
            .collect(),
        "f" => format!("\\frac{{{}}}{{{}}}", part(node, "num"), part(node, "den")),
        "sSup" => format!("{}^{{{}}}", base(node), part(node, "sup")),
        "sSub" => format!("{}_{{{}}}", base(node), part(node, "sub")),
        "sSubSup" => format!("{}_{{{}}}^{{{}}}", base(node), part(node, "sub"), part(node, "sup")),
        "sPre" => format!("{{}}_{{{}}}^{{{}}}{}", part(node, "sub"), part(node, "sup"), part(node, "e")),
        "rad" => {
            let degree = part(node, "deg");
            if degree.is_empty() {
                format!("\\sqrt{{{}}}", part(node, "e"))
            } else {
                format!("\\sqrt[{}]{{{}}}", degree, part(node, "e"))
            }
        }
        "d" => delimiter(node),
        "nary" => {
            let op = property(node, "naryPr", "chr").unwrap_or("∫");
            let mut out = symbols(op);
            let sub = part(node, "sub");
            let sup = part(node, "sup");
            if !sub.is_empty() {
                out.push_str(&format!("_{{{}}}", sub));
            }
            if !sup.is_empty() {
                out.push_str(&format!("^{{{}}}", sup));
            }
            out.push_str(&format!("{{{}}}", part(node, "e")));
            out
        }
        "func" => {
            let name = part(node, "fName");
            let name = if FUNCTIONS.contains(&name.as_str()) {
                format!("\\{}", name)
            } else {
                name
            };
            format!("{}{{{}}}", name, part(node, "e"))
        }
        "acc" => {
            let command = match property(node, "accPr", "chr").unwrap_or("\u{0302}") {
                "\u{0303}" => "tilde",
                "\u{0307}" => "dot",
                "\u{0308}" => "ddot",
                "\u{0305}" | "\u{00AF}" => "bar",
                "\u{20D7}" => "vec",
                _ => "hat",
            };
            format!("\\{}{{{}}}", command, part(node, "e"))
        }
        "bar" => match property(node, "barPr", "pos") {
            Some("top") => format!("\\overline{{{}}}", part(node, "e")),
            _ => format!("\\underline{{{}}}", part(node, "e")),
        },
        "groupChr" => match property(node, "groupChrPr", "chr") {
            Some("\u{23DE}") => format!("\\overbrace{{{}}}", part(node, "e")),
            _ => format!("\\underbrace{{{}}}", part(node, "e")),
        },
        "limLow" => format!("{}_{{{}}}", base(node), part(node, "lim")),
        "limUpp" => format!("{}^{{{}}}", base(node), part(node, "lim")),
        "borderBox" => format!("\\boxed{{{}}}", part(node, "e")),
        "m" => {
            let rows: Vec<String> = node
                .children()
                .filter(|c| c.local_name() == "mr")
                .map(|row| entries(row).join(" & "))
                .collect();
            format!("\\begin{{matrix}}{}\\end{{matrix}}", rows.join(" \\\\ "))
        }
        "eqArr" => format!("\\begin{{array}}{{l}}{}\\end{{array}}", entries(node).join(" \\\\ ")),
        name if name.ends_with("Pr") => String::new(),
        _ => children(node),
    }
}

fn children(node: XmlNode<'_>) -> String {
    node.children().map(omml_to_latex).collect()
}

/// LaTeX of the first `m:<name>` child, empty when absent.
fn part(node: XmlNode<'_>, name: &str) -> String {
    node.children()
        .find(|c| c.local_name() == name)
        .map(children)
        .unwrap_or_default()
}

/// Script base, braced when it is more than a single symbol.
fn base(node: XmlNode<'_>) -> String {
    let e = part(node, "e");
    if e.chars().count() <= 1 {
        e
    } else {
        format!("{{{}}}", e)
    }
}

fn entries(node: XmlNode<'_>) -> Vec<String> {
    node.children()
        .filter(|c| c.local_name() == "e")
        .map(children)
        .collect()
}

fn delimiter(node: XmlNode<'_>) -> String {
    let open = property(node, "dPr", "begChr").unwrap_or("(");
    let close = property(node, "dPr", "endChr").unwrap_or(")");
    let separator = property(node, "dPr", "sepChr").unwrap_or("|");
    format!(
        "\\left{}{}\\right{}",
        fence(open),
        entries(node).join(separator),
        fence(close)
    )
}

fn fence(chr: &str) -> &str {
    match chr {
        "{" => "\\{",
        "}" => "\\}",
        "" => ".",
        other => other,
    }
}

/// `m:val` of `<props>/<prop>`, e.g. `m:naryPr/m:chr@m:val`.
fn property<'a>(node: XmlNode<'a>, props: &str, prop: &str) -> Option<&'a str> {
    node.children()
        .find(|c| c.local_name() == props)?
        .children()
        .find(|c| c.local_name() == prop)?
        .attr_ns(&M::val())
}

fn symbols(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        match SYMBOLS.get(&c) {
            Some(cmd) => {
                out.push_str(cmd);
                out.push(' ');
            }
            None => out.push(c),
        }
    }
    out.trim_end().to_string()
}
