use super::document::PmlDocument;
use super::media::media_source;
use super::parts::{LayoutContext, MasterContext, PartIndex, PresentationParts, SlidePart};
use super::result::{Presentation, Slide, SlideFill};
use super::settings::ConvertSettings;
use super::walker::{SlideContext, Walker};
use crate::error::{Result, SlideTreeError};
use crate::extract::fill::{background_of, Background};
use crate::extract::text::plain_text;
use crate::extract::{DefaultExtractors, Extractors};
use crate::package::relationships::relationship_types;
use crate::package::{OoxmlPackage, RelationshipTable};
use crate::xml::{XmlDocument, A, P, R};
use rayon::prelude::*;

pub struct PmlConverter;

impl PmlConverter {
    /// Convert every slide with the built-in extractors.
    pub fn convert(doc: &PmlDocument, settings: Option<&ConvertSettings>) -> Result<Presentation> {
        Self::convert_with(doc, settings, &DefaultExtractors)
    }

    /// Convert every slide, resolving styles and content through `extractors`.
    ///
    /// Any fatal error (a missing layout, master or theme, a malformed
    /// transform) aborts the whole conversion.
    pub fn convert_with(
        doc: &PmlDocument,
        settings: Option<&ConvertSettings>,
        extractors: &dyn Extractors,
    ) -> Result<Presentation> {
        let default_settings = ConvertSettings::default();
        let settings = settings.unwrap_or(&default_settings);
        let package = doc.package();

        let parts = PresentationParts::load(package)?;
        let index = PartIndex::build(&parts);

        let convert_one = |slide: &SlidePart| convert_slide(package, settings, extractors, &index, slide);
        let slides = if settings.parallel {
            parts.slides.par_iter().map(convert_one).collect::<Result<Vec<_>>>()?
        } else {
            parts.slides.iter().map(convert_one).collect::<Result<Vec<_>>>()?
        };

        tracing::info!(slides = slides.len(), parallel = settings.parallel, "converted presentation");
        Ok(Presentation {
            slides,
            size: parts.size,
        })
    }
}

fn convert_slide(
    package: &OoxmlPackage,
    settings: &ConvertSettings,
    extractors: &dyn Extractors,
    index: &PartIndex<'_>,
    slide: &SlidePart,
) -> Result<Slide> {
    let layout = index.layout(&slide.layout)?;
    let master = index.master(&layout.part.master)?;
    let ctx = SlideContext {
        package,
        settings,
        extractors,
        rels: &slide.rels,
        layout: &layout.index,
        master: &master.index,
        parts: index,
        colors: &master.colors,
    };

    let root = slide
        .doc
        .root_node()
        .ok_or_else(|| SlideTreeError::malformed(&slide.path, "empty slide part"))?;
    let tree = root.path(&[P::cSld(), P::spTree()]).ok_or_else(|| root.malformed("slide has no p:cSld/p:spTree"))?;

    let mut walker = Walker::new(&ctx);
    let elements = walker.walk_tree(tree)?;
    let fill = background(&ctx, slide, layout, master);
    let note = if settings.include_notes {
        notes(package, &slide.rels)?
    } else {
        String::new()
    };

    tracing::debug!(slide = %slide.path, elements = elements.len(), "converted slide");
    Ok(Slide { fill, elements, note })
}

/// First `p:cSld/p:bg` of slide, layout, master.
fn background(ctx: &SlideContext<'_>, slide: &SlidePart, layout: &LayoutContext<'_>, master: &MasterContext<'_>) -> SlideFill {
    let levels: [(&XmlDocument, &RelationshipTable); 3] = [
        (&slide.doc, &slide.rels),
        (&layout.part.doc, &layout.part.rels),
        (&master.part.doc, &master.part.rels),
    ];

    for (doc, rels) in levels {
        let Some(bg) = doc.root_node().and_then(|root| root.path(&[P::cSld(), P::bg()])) else {
            continue;
        };
        match background_of(bg, ctx.colors) {
            Some(Background::Color(color)) => return SlideFill::Color(color),
            Some(Background::Picture(blip_fill)) => {
                let src = blip_fill
                    .child(&A::blip())
                    .and_then(|blip| blip.attr_ns(&R::embed()))
                    .and_then(|rid| rels.get(rid))
                    .and_then(|rel| media_source(ctx.package, &rel.part_path, ctx.settings.embed_media));
                if src.is_none() {
                    tracing::warn!(part = doc.source(), "background image missing");
                }
                return SlideFill::Image(src.unwrap_or_default());
            }
            None => {}
        }
    }
    SlideFill::default()
}

/// Speaker-note text: every shape's paragraphs, shapes separated by `\n`.
fn notes(package: &OoxmlPackage, rels: &RelationshipTable) -> Result<String> {
    let Some(rel) = rels.first_of_type(relationship_types::NOTES_SLIDE) else {
        return Ok(String::new());
    };
    let Some(doc) = package.get_lenient_xml_part(&rel.part_path) else {
        tracing::warn!(notes = %rel.part_path, "notes part missing");
        return Ok(String::new());
    };

    let texts: Vec<String> = doc
        .root_node()
        .and_then(|root| root.path(&[P::cSld(), P::spTree()]))
        .map(|tree| {
            tree.children_named(P::sp())
                .filter_map(|sp| sp.child(&P::txBody()))
                .map(plain_text)
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default();
    Ok(texts.join("\n"))
}
