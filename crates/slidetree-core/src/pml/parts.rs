//! Loading of the parts a slide tree is resolved against.
//!
//! `PresentationParts` owns every decoded slide, layout, master, theme and the
//! table style list. `PartIndex` borrows from it and holds the per-layout and
//! per-master lookup tables; both are immutable once built and shared by all
//! slides.

use super::geometry::emu_to_pt;
use super::placeholder::IndexTable;
use super::result::SlideSize;
use crate::error::{Result, SlideTreeError};
use crate::extract::ColorScheme;
use crate::package::content_types::content_type_values;
use crate::package::relationships::relationship_types;
use crate::package::{OoxmlPackage, RelationshipTable};
use crate::xml::{XmlDocument, XmlNode, A, P};
use std::collections::HashMap;

const DEFAULT_PRESENTATION_PART: &str = "ppt/presentation.xml";
const DEFAULT_TABLE_STYLES_PART: &str = "ppt/tableStyles.xml";

pub struct SlidePart {
    pub path: String,
    pub doc: XmlDocument,
    pub rels: RelationshipTable,
    pub layout: String,
}

pub struct LayoutPart {
    pub path: String,
    pub doc: XmlDocument,
    pub rels: RelationshipTable,
    pub master: String,
}

pub struct MasterPart {
    pub path: String,
    pub doc: XmlDocument,
    pub rels: RelationshipTable,
    pub theme: String,
}

pub struct PresentationParts {
    pub slides: Vec<SlidePart>,
    pub layouts: HashMap<String, LayoutPart>,
    pub masters: HashMap<String, MasterPart>,
    pub themes: HashMap<String, XmlDocument>,
    pub table_styles: Option<XmlDocument>,
    pub size: SlideSize,
}

impl PresentationParts {
    /// Read the presentation part, every slide and the layouts, masters and
    /// themes they reference. A missing layout, master or presentation theme
    /// is `PartNotFound`.
    pub fn load(package: &OoxmlPackage) -> Result<Self> {
        let root_rels = package.relationships("")?;
        let presentation_path = root_rels
            .first_of_type(relationship_types::OFFICE_DOCUMENT)
            .map(|r| r.part_path.clone())
            .unwrap_or_else(|| DEFAULT_PRESENTATION_PART.to_string());

        let presentation = package.get_xml_part(&presentation_path)?;
        let size = slide_size(&presentation)?;
        let presentation_rels = package.relationships(&presentation_path)?;
        let default_theme = presentation_rels.require_target(relationship_types::THEME)?;

        let table_styles_path = presentation_rels
            .first_of_type(relationship_types::TABLE_STYLES)
            .map(|r| r.part_path.clone())
            .unwrap_or_else(|| DEFAULT_TABLE_STYLES_PART.to_string());
        let table_styles = package.get_lenient_xml_part(&table_styles_path);

        let mut parts = Self {
            slides: Vec::new(),
            layouts: HashMap::new(),
            masters: HashMap::new(),
            themes: HashMap::new(),
            table_styles,
            size,
        };
        parts.load_theme(package, &default_theme)?;

        for path in package
            .content_types()
            .parts_of_type(content_type_values::POWERPOINT_SLIDE)
        {
            let doc = package.get_xml_part(&path)?;
            let rels = package.relationships(&path)?;
            let layout = rels.require_target(relationship_types::SLIDE_LAYOUT)?;
            parts.load_layout(package, &layout, &default_theme)?;
            parts.slides.push(SlidePart {
                path,
                doc,
                rels,
                layout,
            });
        }

        tracing::debug!(
            slides = parts.slides.len(),
            layouts = parts.layouts.len(),
            masters = parts.masters.len(),
            themes = parts.themes.len(),
            "loaded presentation parts"
        );
        Ok(parts)
    }

    fn load_layout(&mut self, package: &OoxmlPackage, path: &str, default_theme: &str) -> Result<()> {
        if self.layouts.contains_key(path) {
            return Ok(());
        }
        let doc = package.get_xml_part(path)?;
        let rels = package.relationships(path)?;
        let master = rels.require_target(relationship_types::SLIDE_MASTER)?;
        self.load_master(package, &master, default_theme)?;
        self.layouts.insert(
            path.to_string(),
            LayoutPart {
                path: path.to_string(),
                doc,
                rels,
                master,
            },
        );
        Ok(())
    }

    fn load_master(&mut self, package: &OoxmlPackage, path: &str, default_theme: &str) -> Result<()> {
        if self.masters.contains_key(path) {
            return Ok(());
        }
        let doc = package.get_xml_part(path)?;
        let rels = package.relationships(path)?;
        let theme = rels
            .first_of_type(relationship_types::THEME)
            .map(|r| r.part_path.clone())
            .unwrap_or_else(|| default_theme.to_string());
        self.load_theme(package, &theme)?;
        self.masters.insert(
            path.to_string(),
            MasterPart {
                path: path.to_string(),
                doc,
                rels,
                theme,
            },
        );
        Ok(())
    }

    fn load_theme(&mut self, package: &OoxmlPackage, path: &str) -> Result<()> {
        if !self.themes.contains_key(path) {
            let doc = package.get_xml_part(path)?;
            self.themes.insert(path.to_string(), doc);
        }
        Ok(())
    }
}

fn slide_size(presentation: &XmlDocument) -> Result<SlideSize> {
    let root = presentation
        .root_node()
        .ok_or_else(|| SlideTreeError::malformed(presentation.source(), "empty presentation part"))?;
    let sld_sz = root.require_child(&P::sldSz())?;
    Ok(SlideSize {
        width: emu_to_pt(sld_sz.require_i64("cx")?),
        height: emu_to_pt(sld_sz.require_i64("cy")?),
    })
}

pub struct LayoutContext<'a> {
    pub part: &'a LayoutPart,
    pub index: IndexTable<'a>,
}

pub struct MasterContext<'a> {
    pub part: &'a MasterPart,
    pub index: IndexTable<'a>,
    pub colors: ColorScheme,
}

/// Lookup tables over a loaded `PresentationParts`, built once per conversion.
#[derive(Default)]
pub struct PartIndex<'a> {
    pub layouts: HashMap<&'a str, LayoutContext<'a>>,
    pub masters: HashMap<&'a str, MasterContext<'a>>,
    /// `a:tblStyle@styleId` → style definition.
    pub table_styles: HashMap<&'a str, XmlNode<'a>>,
}

impl<'a> PartIndex<'a> {
    pub fn build(parts: &'a PresentationParts) -> Self {
        let masters = parts
            .masters
            .values()
            .map(|part| {
                let root = part.doc.root_node();
                let theme = parts.themes.get(&part.theme).and_then(|t| t.root_node());
                let clr_map = root.and_then(|r| r.child(&P::clrMap()));
                let context = MasterContext {
                    part,
                    index: root.map(IndexTable::build).unwrap_or_default(),
                    colors: ColorScheme::new(theme, clr_map),
                };
                (part.path.as_str(), context)
            })
            .collect();

        let layouts = parts
            .layouts
            .values()
            .map(|part| {
                let context = LayoutContext {
                    part,
                    index: part.doc.root_node().map(IndexTable::build).unwrap_or_default(),
                };
                (part.path.as_str(), context)
            })
            .collect();

        let table_styles = parts
            .table_styles
            .as_ref()
            .and_then(|doc| doc.root_node())
            .map(|root| {
                root.children_named(A::tblStyle())
                    .filter_map(|style| style.attr("styleId").map(|id| (id, style)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            layouts,
            masters,
            table_styles,
        }
    }

    pub fn layout(&self, path: &str) -> Result<&LayoutContext<'a>> {
        self.layouts
            .get(path)
            .ok_or_else(|| SlideTreeError::part_not_found(path))
    }

    pub fn master(&self, path: &str) -> Result<&MasterContext<'a>> {
        self.masters
            .get(path)
            .ok_or_else(|| SlideTreeError::part_not_found(path))
    }

    pub fn table_style(&self, style_id: &str) -> Option<XmlNode<'a>> {
        self.table_styles.get(style_id).copied()
    }
}
