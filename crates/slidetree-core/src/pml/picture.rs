use super::geometry::{flips, resolve_frame, rotation};
use super::media::{extension, is_url, media_source, EMBEDDED_AUDIO, EMBEDDED_VIDEO};
use super::result::{AudioElement, Element, ImageElement, VideoElement};
use super::walker::{SlideContext, Walker};
use crate::error::Result;
use crate::package::Relationship;
use crate::util::escape_html;
use crate::xml::{XmlNode, A, P, R};

/// A `p:pic`: video when it references a video file, else audio when it
/// references an audio file, else an image. Geometry comes only from the
/// picture's own transform.
pub fn picture(walker: &mut Walker<'_, '_>, node: XmlNode<'_>) -> Result<Element> {
    let ctx = walker.context();
    let order = walker.reserve_order();

    let xfrm = node.path(&[P::spPr(), A::xfrm()]);
    let frame = resolve_frame(&[xfrm], rotation(xfrm), order)?;

    let nv_pr = node.path(&[P::nvPicPr(), P::nvPr()]);
    let linked = |media: XmlNode<'_>| {
        media
            .attr_ns(&R::link())
            .and_then(|rid| ctx.rels.get(rid))
            .cloned()
    };

    if let Some(video) = nv_pr.and_then(|nv| nv.child(&A::videoFile())) {
        let target = linked(video);
        let (src, blob) = match target {
            Some(rel) if rel.is_external() || is_url(&rel.target) => (Some(escape_html(&rel.target)), None),
            Some(rel) => (None, embedded(ctx, &rel, EMBEDDED_VIDEO)),
            None => {
                tracing::warn!(part = node.doc.source(), "video without a resolvable target");
                (None, None)
            }
        };
        return Ok(Element::Video(VideoElement { frame, src, blob }));
    }

    if let Some(audio) = nv_pr.and_then(|nv| nv.child(&A::audioFile())) {
        let blob = linked(audio).and_then(|rel| embedded(ctx, &rel, EMBEDDED_AUDIO));
        return Ok(Element::Audio(AudioElement { frame, blob }));
    }

    let (is_flip_h, is_flip_v) = flips(xfrm);
    let src = node
        .path(&[P::blipFill(), A::blip()])
        .and_then(|blip| blip.attr_ns(&R::embed()))
        .and_then(|rid| ctx.rels.get(rid))
        .and_then(|rel| media_source(ctx.package, &rel.part_path, ctx.settings.embed_media));
    let src = src.unwrap_or_else(|| {
        tracing::warn!(part = node.doc.source(), "image part missing");
        String::new()
    });

    Ok(Element::Image(ImageElement {
        frame,
        src,
        is_flip_v,
        is_flip_h,
    }))
}

/// Embedded media of a supported extension.
fn embedded(ctx: &SlideContext<'_>, rel: &Relationship, supported: &[&str]) -> Option<String> {
    if !supported.contains(&extension(&rel.part_path).as_str()) {
        tracing::debug!(media = %rel.part_path, "unsupported media format");
        return None;
    }
    let source = media_source(ctx.package, &rel.part_path, ctx.settings.embed_media);
    if source.is_none() {
        tracing::warn!(media = %rel.part_path, "media part missing");
    }
    source
}
