//! DrawingML colour resolution.
//!
//! Colours resolve to `#RRGGBB`. Scheme colours go through the master's
//! `p:clrMap` into the theme's `a:clrScheme`; `lumMod`, `lumOff`, `shade` and
//! `tint` are applied in document order.

use crate::xml::{XmlNode, A};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static PRESET_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("black", "000000");
    m.insert("white", "FFFFFF");
    m.insert("red", "FF0000");
    m.insert("green", "008000");
    m.insert("lime", "00FF00");
    m.insert("blue", "0000FF");
    m.insert("yellow", "FFFF00");
    m.insert("cyan", "00FFFF");
    m.insert("magenta", "FF00FF");
    m.insert("gray", "808080");
    m.insert("grey", "808080");
    m.insert("silver", "C0C0C0");
    m.insert("maroon", "800000");
    m.insert("olive", "808000");
    m.insert("navy", "000080");
    m.insert("purple", "800080");
    m.insert("teal", "008080");
    m.insert("orange", "FFA500");
    m.insert("pink", "FFC0CB");
    m.insert("brown", "A52A2A");
    m.insert("gold", "FFD700");
    m.insert("indigo", "4B0082");
    m.insert("violet", "EE82EE");
    m.insert("ltGray", "D3D3D3");
    m.insert("dkGray", "A9A9A9");
    m.insert("ltBlue", "ADD8E6");
    m.insert("dkBlue", "00008B");
    m.insert("ltGreen", "90EE90");
    m.insert("dkGreen", "006400");
    m.insert("dkRed", "8B0000");
    m
});

/// Theme colour slots plus the master's mapping of logical names onto them.
#[derive(Debug, Clone, Default)]
pub struct ColorScheme {
    slots: HashMap<String, String>,
    mapping: HashMap<String, String>,
}

impl ColorScheme {
    /// Build from a theme root (`a:theme`) and a master's `p:clrMap`.
    pub fn new(theme: Option<XmlNode<'_>>, clr_map: Option<XmlNode<'_>>) -> Self {
        let mut scheme = Self::default();

        let clr_scheme = theme.and_then(|t| t.path(&[A::themeElements(), A::clrScheme()]));
        if let Some(clr_scheme) = clr_scheme {
            for slot in clr_scheme.children() {
                let value = slot.children().find_map(|c| match c.local_name() {
                    "srgbClr" => c.attr("val"),
                    "sysClr" => c.attr("lastClr").or_else(|| c.attr("val").and_then(system_color)),
                    _ => None,
                });
                if let Some(value) = value {
                    scheme
                        .slots
                        .insert(slot.local_name().to_string(), value.to_ascii_uppercase());
                }
            }
        }

        for (logical, slot) in [("bg1", "lt1"), ("tx1", "dk1"), ("bg2", "lt2"), ("tx2", "dk2")] {
            scheme.mapping.insert(logical.to_string(), slot.to_string());
        }
        if let Some(clr_map) = clr_map {
            if let Some(attrs) = clr_map.doc.get(clr_map.id).and_then(|d| d.attributes()) {
                for attr in attrs {
                    scheme
                        .mapping
                        .insert(attr.name.local_name.clone(), attr.value.clone());
                }
            }
        }
        scheme
    }

    /// Hex value of a scheme colour name (`accent1`, `tx1`, `bg2`, ...).
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let slot = self.mapping.get(name).map(String::as_str).unwrap_or(name);
        self.slots.get(slot).map(String::as_str)
    }
}

fn system_color(name: &str) -> Option<&'static str> {
    match name {
        "windowText" | "menuText" | "btnText" | "captionText" => Some("000000"),
        "window" | "menu" | "btnFace" | "btnHighlight" => Some("FFFFFF"),
        _ => None,
    }
}

/// Colour of the first colour child of `parent` (a `solidFill`, `gs`,
/// `fillRef`, `outerShdw`, ...).
pub fn color_of(parent: XmlNode<'_>, scheme: &ColorScheme) -> Option<String> {
    parent.children().find_map(|c| color_value(c, scheme))
}

/// Resolve one colour element (`a:srgbClr`, `a:schemeClr`, `a:sysClr`, `a:prstClr`).
pub fn color_value(node: XmlNode<'_>, scheme: &ColorScheme) -> Option<String> {
    let base = match node.local_name() {
        "srgbClr" => node.attr("val")?.to_ascii_uppercase(),
        "schemeClr" => scheme.lookup(node.attr("val")?)?.to_string(),
        "sysClr" => node
            .attr("lastClr")
            .or_else(|| node.attr("val").and_then(system_color))?
            .to_string(),
        "prstClr" => PRESET_COLORS.get(node.attr("val")?)?.to_string(),
        _ => return None,
    };
    let mut rgb = parse_hex(&base)?;

    for modifier in node.children() {
        let Some(val) = modifier.attr_i64("val") else {
            continue;
        };
        let amount = val as f64 / 100_000.0;
        if modifier.is(&A::lumMod()) {
            rgb = map_lightness(rgb, |l| l * amount);
        } else if modifier.is(&A::lumOff()) {
            rgb = map_lightness(rgb, |l| l + amount);
        } else if modifier.is(&A::shade()) {
            rgb = rgb.map(|c| c * amount);
        } else if modifier.is(&A::tint()) {
            rgb = rgb.map(|c| c + (255.0 - c) * (1.0 - amount));
        }
    }

    Some(to_hex(rgb))
}

fn parse_hex(hex: &str) -> Option<[f64; 3]> {
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok().map(f64::from);
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn to_hex(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(|c| c.round().clamp(0.0, 255.0) as u8);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

fn map_lightness(rgb: [f64; 3], f: impl Fn(f64) -> f64) -> [f64; 3] {
    let (h, s, l) = rgb_to_hsl(rgb);
    hsl_to_rgb(h, s, f(l).clamp(0.0, 1.0))
}

fn rgb_to_hsl(rgb: [f64; 3]) -> (f64, f64, f64) {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l * 255.0; 3];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f64| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        v * 255.0
    };
    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}
