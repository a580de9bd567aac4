use crate::error::{Result, SlideTreeError};
use crate::xml::XmlDocument;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::read::ZipArchive;

use super::content_types::ContentTypes;
use super::relationships::{rels_path_for, RelationshipTable};

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Read-only view of an OOXML zip archive: every member is loaded once at
/// open time and parts are decoded on demand.
pub struct OoxmlPackage {
    parts: HashMap<String, Vec<u8>>,
    content_types: ContentTypes,
}

impl OoxmlPackage {
    pub fn open(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        let mut archive = ZipArchive::new(cursor)?;

        let mut parts = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().trim_start_matches('/').to_string();
            let mut content = Vec::new();
            file.read_to_end(&mut content)?;
            parts.insert(name, content);
        }

        let content_types = match parts.get(CONTENT_TYPES_PART) {
            Some(bytes) => ContentTypes::parse(&String::from_utf8_lossy(bytes))?,
            None => {
                return Err(SlideTreeError::InvalidPackage {
                    message: format!("archive has no {}", CONTENT_TYPES_PART),
                })
            }
        };

        tracing::debug!(parts = parts.len(), "opened package");

        Ok(Self {
            parts,
            content_types,
        })
    }

    pub fn get_part(&self, path: &str) -> Option<&[u8]> {
        self.parts.get(path).map(|v| v.as_slice())
    }

    pub fn has_part(&self, path: &str) -> bool {
        self.parts.contains_key(path)
    }

    /// `readPart`: decode an XML part, failing with `PartNotFound` when absent.
    pub fn get_xml_part(&self, path: &str) -> Result<XmlDocument> {
        let bytes = self
            .get_part(path)
            .ok_or_else(|| SlideTreeError::part_not_found(path))?;
        let mut doc = crate::xml::parser::parse_bytes(bytes)?;
        doc.set_source(path);
        Ok(doc)
    }

    /// Like `get_xml_part`, but an absent part is `Ok(None)`.
    pub fn get_optional_xml_part(&self, path: &str) -> Result<Option<XmlDocument>> {
        match self.get_part(path) {
            Some(_) => self.get_xml_part(path).map(Some),
            None => Ok(None),
        }
    }

    /// An optional part that is absent or not well-formed reads as `None`.
    /// Parse failures are logged and otherwise ignored.
    pub fn get_lenient_xml_part(&self, path: &str) -> Option<XmlDocument> {
        match self.get_optional_xml_part(path) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(part = path, error = %err, "unreadable part skipped");
                None
            }
        }
    }

    /// Relationships of `source`. A part without a `.rels` member has none.
    pub fn relationships(&self, source: &str) -> Result<RelationshipTable> {
        match self.get_part(&rels_path_for(source)) {
            Some(bytes) => RelationshipTable::parse(source, &String::from_utf8_lossy(bytes)),
            None => Ok(RelationshipTable::empty(source)),
        }
    }

    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }
}
