//! In-memory `.pptx` fixtures.
//!
//! One master, one layout, one theme; every slide uses the same layout unless
//! it opts out of the layout relationship.

#![allow(dead_code)]

use slidetree_core::PmlDocument;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const NS: &str = concat!(
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006" "#,
    r#"xmlns:a14="http://schemas.microsoft.com/office/drawing/2010/main" "#,
    r#"xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math" "#,
    r#"xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" "#,
    r#"xmlns:dgm="http://schemas.openxmlformats.org/drawingml/2006/diagram" "#,
    r#"xmlns:dsp="http://schemas.microsoft.com/office/drawing/2008/diagram""#,
);

const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
pub const REL_CHART: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart";
pub const REL_NOTES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
pub const REL_VIDEO: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/video";
pub const REL_AUDIO: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/audio";
pub const REL_DIAGRAM_DRAWING: &str = "http://schemas.microsoft.com/office/2007/relationships/diagramDrawing";

/// Points → EMU.
pub fn emu(points: f64) -> i64 {
    (points * 12700.0).round() as i64
}

/// A `p:sp` with a transform, optional preset geometry and optional placeholder.
pub fn sp(id: u32, left: f64, top: f64, width: f64, height: f64, prst: Option<&str>) -> String {
    let geom = prst
        .map(|p| format!(r#"<a:prstGeom prst="{p}"><a:avLst/></a:prstGeom>"#))
        .unwrap_or_default();
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Shape {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>
           <p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>{geom}</p:spPr></p:sp>"#,
        emu(left),
        emu(top),
        emu(width),
        emu(height)
    )
}

/// A `p:grpSp` whose child space is `child_extent` points square at `child_offset`.
pub fn group(id: u32, offset: f64, extent: f64, child_offset: f64, child_extent: f64, children: &str) -> String {
    format!(
        r#"<p:grpSp><p:nvGrpSpPr><p:cNvPr id="{id}" name="Group {id}"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
           <p:grpSpPr><a:xfrm><a:off x="{o}" y="{o}"/><a:ext cx="{e}" cy="{e}"/><a:chOff x="{co}" y="{co}"/><a:chExt cx="{ce}" cy="{ce}"/></a:xfrm></p:grpSpPr>
           {children}</p:grpSp>"#,
        o = emu(offset),
        e = emu(extent),
        co = emu(child_offset),
        ce = emu(child_extent),
    )
}

/// An `mc:AlternateContent` whose choice branch holds a math run of `text`.
pub fn math(id: u32, text: &str) -> String {
    format!(
        r#"<mc:AlternateContent><mc:Choice Requires="a14"><p:sp>
             <p:nvSpPr><p:cNvPr id="{id}" name="Math {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
             <p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="127000" cy="127000"/></a:xfrm></p:spPr>
             <p:txBody><a:bodyPr/><a:p><a14:m><m:oMathPara><m:oMath><m:r><m:t>{text}</m:t></m:r></m:oMath></m:oMathPara></a14:m></a:p></p:txBody>
           </p:sp></mc:Choice><mc:Fallback><p:sp/></mc:Fallback></mc:AlternateContent>"#
    )
}

#[derive(Debug, Clone, Default)]
pub struct SlideFixture {
    pub tree: String,
    pub background: Option<String>,
    /// `(id, type, target)`, relative to `ppt/slides/`.
    pub rels: Vec<(String, String, String)>,
    pub without_layout: bool,
}

impl SlideFixture {
    pub fn new(tree: impl Into<String>) -> Self {
        Self {
            tree: tree.into(),
            ..Default::default()
        }
    }

    pub fn rel(mut self, id: &str, rel_type: &str, target: &str) -> Self {
        self.rels.push((id.to_string(), rel_type.to_string(), target.to_string()));
        self
    }

    pub fn background(mut self, bg: &str) -> Self {
        self.background = Some(bg.to_string());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PptxBuilder {
    slides: Vec<SlideFixture>,
    layout_tree: String,
    master_tree: String,
    table_styles: Option<String>,
    parts: Vec<(String, Vec<u8>)>,
    without_theme: bool,
}

impl PptxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slide(self, tree: impl Into<String>) -> Self {
        self.slide_with(SlideFixture::new(tree))
    }

    pub fn slide_with(mut self, slide: SlideFixture) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn layout_tree(mut self, xml: &str) -> Self {
        self.layout_tree = xml.to_string();
        self
    }

    pub fn master_tree(mut self, xml: &str) -> Self {
        self.master_tree = xml.to_string();
        self
    }

    pub fn table_styles(mut self, styles: &str) -> Self {
        self.table_styles = Some(format!(
            r#"<a:tblStyleLst {NS} def="{{S}}">{styles}</a:tblStyleLst>"#
        ));
        self
    }

    pub fn part(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.parts.push((path.to_string(), bytes.into()));
        self
    }

    pub fn without_theme(mut self) -> Self {
        self.without_theme = true;
        self
    }

    pub fn document(&self) -> PmlDocument {
        PmlDocument::from_bytes(&self.build()).unwrap()
    }

    pub fn build(&self) -> Vec<u8> {
        let mut entries: Vec<(String, Vec<u8>)> = Vec::new();
        let mut add = |path: &str, body: String| entries.push((path.to_string(), body.into_bytes()));

        add("[Content_Types].xml", self.content_types());
        add(
            "_rels/.rels",
            rels(&[("rId1", format!("{REL_NS}/officeDocument").as_str(), "ppt/presentation.xml")]),
        );
        add(
            "ppt/presentation.xml",
            format!(
                r#"<p:presentation {NS}><p:sldIdLst/><p:sldSz cx="9144000" cy="6858000"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
            ),
        );

        let mut presentation_rels = vec![(
            "rId1".to_string(),
            format!("{REL_NS}/slideMaster"),
            "slideMasters/slideMaster1.xml".to_string(),
        )];
        if !self.without_theme {
            presentation_rels.push(("rId2".to_string(), format!("{REL_NS}/theme"), "theme/theme1.xml".to_string()));
        }
        if self.table_styles.is_some() {
            presentation_rels.push(("rId3".to_string(), format!("{REL_NS}/tableStyles"), "tableStyles.xml".to_string()));
        }
        for i in 0..self.slides.len() {
            presentation_rels.push((
                format!("rId{}", 10 + i),
                format!("{REL_NS}/slide"),
                format!("slides/slide{}.xml", i + 1),
            ));
        }
        add("ppt/_rels/presentation.xml.rels", owned_rels(&presentation_rels));

        add("ppt/theme/theme1.xml", THEME.replace("{NS}", NS));
        add(
            "ppt/slideMasters/slideMaster1.xml",
            format!(
                r#"<p:sldMaster {NS}><p:cSld><p:spTree><p:nvGrpSpPr/><p:grpSpPr/>{}</p:spTree></p:cSld>
                   <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2"/></p:sldMaster>"#,
                self.master_tree
            ),
        );
        add(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            rels(&[
                ("rId1", format!("{REL_NS}/slideLayout").as_str(), "../slideLayouts/slideLayout1.xml"),
                ("rId2", format!("{REL_NS}/theme").as_str(), "../theme/theme1.xml"),
            ]),
        );
        add(
            "ppt/slideLayouts/slideLayout1.xml",
            format!(
                r#"<p:sldLayout {NS}><p:cSld><p:spTree><p:nvGrpSpPr/><p:grpSpPr/>{}</p:spTree></p:cSld></p:sldLayout>"#,
                self.layout_tree
            ),
        );
        add(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            rels(&[("rId1", format!("{REL_NS}/slideMaster").as_str(), "../slideMasters/slideMaster1.xml")]),
        );
        if let Some(styles) = &self.table_styles {
            add("ppt/tableStyles.xml", styles.clone());
        }

        for (i, slide) in self.slides.iter().enumerate() {
            let n = i + 1;
            add(
                &format!("ppt/slides/slide{n}.xml"),
                format!(
                    r#"<p:sld {NS}><p:cSld>{}<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld></p:sld>"#,
                    slide.background.as_deref().unwrap_or_default(),
                    slide.tree
                ),
            );
            let mut slide_rels = Vec::new();
            if !slide.without_layout {
                slide_rels.push((
                    "rId1".to_string(),
                    format!("{REL_NS}/slideLayout"),
                    "../slideLayouts/slideLayout1.xml".to_string(),
                ));
            }
            slide_rels.extend(slide.rels.iter().cloned());
            add(&format!("ppt/slides/_rels/slide{n}.xml.rels"), owned_rels(&slide_rels));
        }

        entries.extend(self.parts.iter().cloned());
        zip_archive(&entries)
    }

    fn content_types(&self) -> String {
        let slide_names: Vec<String> = (1..=self.slides.len())
            .map(|n| format!("/ppt/slides/slide{n}.xml"))
            .collect();
        let mut overrides = vec![
            ("/ppt/presentation.xml", "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml".to_string()),
            ("/ppt/slideMasters/slideMaster1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml".to_string()),
            ("/ppt/slideLayouts/slideLayout1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml".to_string()),
            ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml".to_string()),
        ];
        for name in &slide_names {
            overrides.push((
                name.as_str(),
                "application/vnd.openxmlformats-officedocument.presentationml.slide+xml".to_string(),
            ));
        }

        let body: String = overrides
            .iter()
            .map(|(name, ct)| format!(r#"<Override PartName="{name}" ContentType="{ct}"/>"#))
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/>{body}</Types>"#
        )
    }
}

const THEME: &str = r#"<a:theme {NS} name="Office"><a:themeElements><a:clrScheme name="Office">
<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
<a:dk2><a:srgbClr val="44546A"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
<a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
</a:clrScheme></a:themeElements></a:theme>"#;

fn rels(entries: &[(&str, &str, &str)]) -> String {
    let owned: Vec<(String, String, String)> = entries
        .iter()
        .map(|(id, t, target)| (id.to_string(), t.to_string(), target.to_string()))
        .collect();
    owned_rels(&owned)
}

fn owned_rels(entries: &[(String, String, String)]) -> String {
    let body: String = entries
        .iter()
        .map(|(id, t, target)| {
            let mode = if target.starts_with("http") { r#" TargetMode="External""# } else { "" };
            format!(r#"<Relationship Id="{id}" Type="{t}" Target="{target}"{mode}/>"#)
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{body}</Relationships>"#
    )
}

fn zip_archive(entries: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut buffer);
        for (name, body) in entries {
            zip.start_file(name.as_str(), SimpleFileOptions::default()).unwrap();
            zip.write_all(body).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer.into_inner()
}
