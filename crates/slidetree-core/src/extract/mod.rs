//! Style and content extractors consumed by the slide tree walker.
//!
//! Each extractor turns a node (or a placeholder chain) into a single
//! resolved value. The walker only talks to them through [`Extractors`], so a
//! caller can swap any of them out; every method defaults to the
//! implementation in this module.

pub mod align;
pub mod border;
pub mod chart;
pub mod color;
pub mod fill;
pub mod math;
pub mod path;
pub mod shadow;
pub mod text;

pub use color::ColorScheme;

use crate::pml::result::{Border, ChartData, Shadow};
use crate::pml::PlaceholderChain;
use crate::xml::XmlNode;

pub trait Extractors: Send + Sync {
    /// Shape fill colour, `Some("")` for an explicit no-fill.
    fn fill(&self, chain: &PlaceholderChain<'_>, colors: &ColorScheme) -> Option<String> {
        fill::shape_fill(chain, colors)
    }

    fn border(&self, chain: &PlaceholderChain<'_>, ph_type: &str, colors: &ColorScheme) -> Border {
        border::shape_border(chain, ph_type, colors)
    }

    fn shadow(&self, chain: &PlaceholderChain<'_>, colors: &ColorScheme) -> Option<Shadow> {
        shadow::shape_shadow(chain, colors)
    }

    /// `up`, `mid` or `down`.
    fn vertical_align(&self, chain: &PlaceholderChain<'_>, ph_type: &str) -> String {
        align::vertical_align(chain, ph_type).to_string()
    }

    /// HTML rendition of a `txBody`.
    fn text_body(
        &self,
        tx_body: XmlNode<'_>,
        chain: &PlaceholderChain<'_>,
        ph_type: &str,
        colors: &ColorScheme,
    ) -> String {
        text::text_body(tx_body, chain, ph_type, colors)
    }

    /// SVG path data for an `a:custGeom`, scaled to `width` × `height` points.
    fn custom_path(&self, cust_geom: XmlNode<'_>, width: f64, height: f64) -> String {
        path::custom_path(cust_geom, width, height)
    }

    fn chart(&self, plot_area: XmlNode<'_>) -> Option<ChartData> {
        chart::extract_chart(plot_area)
    }

    /// LaTeX for an `m:oMath` subtree.
    fn math(&self, math: XmlNode<'_>) -> String {
        math::omml_to_latex(math)
    }
}

/// The built-in extractors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtractors;

impl Extractors for DefaultExtractors {}
