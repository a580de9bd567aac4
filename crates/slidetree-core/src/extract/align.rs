use crate::pml::PlaceholderChain;
use crate::xml::{A, P};

/// `a:bodyPr@anchor` through the chain. Diagram text defaults to the middle.
pub fn vertical_align(chain: &PlaceholderChain<'_>, ph_type: &str) -> &'static str {
    let anchor = chain.first(|level| {
        level
            .path(&[P::txBody(), A::bodyPr()])
            .and_then(|body| body.attr("anchor"))
    });
    match anchor {
        Some("ctr") => "mid",
        Some("b") => "down",
        Some(_) => "up",
        None if ph_type == "diagram" => "mid",
        None => "up",
    }
}
