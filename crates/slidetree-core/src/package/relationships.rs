use crate::error::{Result, SlideTreeError};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum TargetMode {
    #[default]
    Internal,
    External,
}

/// One `<Relationship>` entry of a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Relationship {
    #[serde(rename = "@Id")]
    pub id: String,
    #[serde(rename = "@Type")]
    pub rel_type: String,
    #[serde(rename = "@Target")]
    pub target: String,
    #[serde(rename = "@TargetMode", default)]
    pub target_mode: TargetMode,
    /// Archive path of the target, resolved against the source part.
    /// External targets are kept verbatim.
    #[serde(skip)]
    pub part_path: String,
}

impl Relationship {
    pub fn new(id: &str, rel_type: &str, target: &str) -> Self {
        Self {
            id: id.to_string(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
            target_mode: TargetMode::Internal,
            part_path: target.trim_start_matches('/').to_string(),
        }
    }

    /// Last segment of the type URI: `slideLayout`, `image`, `diagramDrawing`, ...
    pub fn short_type(&self) -> &str {
        self.rel_type.rsplit('/').next().unwrap_or(&self.rel_type)
    }

    pub fn is_external(&self) -> bool {
        self.target_mode == TargetMode::External
    }
}

#[derive(Debug, Deserialize)]
struct RelationshipsXml {
    // Zero, one or many entries all decode into the same list.
    #[serde(rename = "Relationship", default)]
    relationships: Vec<Relationship>,
}

/// Relationship id → entry, for one source part. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RelationshipTable {
    source: String,
    entries: Vec<Relationship>,
    by_id: HashMap<String, usize>,
}

impl RelationshipTable {
    pub fn empty(source_part: &str) -> Self {
        Self {
            source: source_part.to_string(),
            ..Default::default()
        }
    }

    pub fn parse(source_part: &str, xml: &str) -> Result<Self> {
        let decoded: RelationshipsXml = quick_xml::de::from_str(xml)?;
        let mut table = Self::empty(source_part);
        for mut rel in decoded.relationships {
            rel.part_path = match rel.target_mode {
                TargetMode::External => rel.target.clone(),
                TargetMode::Internal => resolve_target(source_part, &rel.target),
            };
            table.insert(rel);
        }
        Ok(table)
    }

    fn insert(&mut self, rel: Relationship) {
        // Ids are unique within a part; a repeated id keeps the last entry.
        match self.by_id.get(&rel.id) {
            Some(&index) => self.entries[index] = rel,
            None => {
                self.by_id.insert(rel.id.clone(), self.entries.len());
                self.entries.push(rel);
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    pub fn target_path(&self, id: &str) -> Option<&str> {
        self.get(id).map(|r| r.part_path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_of_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.rel_type == rel_type)
    }

    /// Target of the single distinguished relationship of `rel_type`
    /// (a slide's layout, a layout's master, ...). Absence is fatal.
    pub fn require_target(&self, rel_type: &str) -> Result<String> {
        self.first_of_type(rel_type)
            .map(|r| r.part_path.clone())
            .ok_or_else(|| {
                let short = rel_type.rsplit('/').next().unwrap_or(rel_type);
                SlideTreeError::part_not_found(format!("{} ({})", rels_path_for(&self.source), short))
            })
    }
}

/// `ppt/slides/slide1.xml` → `ppt/slides/_rels/slide1.xml.rels`
pub fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against the directory of its source part.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = match source_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

pub mod relationship_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const NOTES_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const CHART: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart";
    pub const DIAGRAM_DRAWING: &str =
        "http://schemas.microsoft.com/office/2007/relationships/diagramDrawing";
    pub const VIDEO: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/video";
    pub const AUDIO: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/audio";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}
