use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct TypesXml {
    #[serde(rename = "Default", default)]
    defaults: Vec<DefaultXml>,
    #[serde(rename = "Override", default)]
    overrides: Vec<OverrideXml>,
}

#[derive(Debug, Deserialize)]
struct DefaultXml {
    #[serde(rename = "@Extension")]
    extension: String,
    #[serde(rename = "@ContentType")]
    content_type: String,
}

#[derive(Debug, Deserialize)]
struct OverrideXml {
    #[serde(rename = "@PartName")]
    part_name: String,
    #[serde(rename = "@ContentType")]
    content_type: String,
}

/// Decoded `[Content_Types].xml`. Part names are stored without the leading `/`.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    pub fn parse(xml: &str) -> Result<Self> {
        let decoded: TypesXml = quick_xml::de::from_str(xml)?;
        Ok(Self {
            defaults: decoded
                .defaults
                .into_iter()
                .map(|d| (d.extension.to_ascii_lowercase(), d.content_type))
                .collect(),
            overrides: decoded
                .overrides
                .into_iter()
                .map(|o| (o.part_name.trim_start_matches('/').to_string(), o.content_type))
                .collect(),
        })
    }

    pub fn get_content_type(&self, path: &str) -> Option<&str> {
        if let Some(ct) = self.overrides.get(path) {
            return Some(ct);
        }

        let ext = path.rsplit('.').next()?.to_ascii_lowercase();
        self.defaults.get(&ext).map(|s| s.as_str())
    }

    /// Override part names of the given content type, ordered by the number
    /// in the file name (`slide2.xml` before `slide10.xml`).
    pub fn parts_of_type(&self, content_type: &str) -> Vec<String> {
        let mut parts: Vec<String> = self
            .overrides
            .iter()
            .filter(|(_, ct)| ct.as_str() == content_type)
            .map(|(path, _)| path.clone())
            .collect();
        parts.sort_by(|a, b| {
            numeric_suffix(a)
                .cmp(&numeric_suffix(b))
                .then_with(|| a.cmp(b))
        });
        parts
    }
}

/// Trailing number before `.xml`: `ppt/slides/slide12.xml` → 12.
fn numeric_suffix(path: &str) -> u64 {
    let stem = path.strip_suffix(".xml").unwrap_or(path);
    let digits: String = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().unwrap_or(0)
}

pub mod content_type_values {
    pub const POWERPOINT_PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const POWERPOINT_SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const POWERPOINT_SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
}
