use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSettings {
    /// Inline media as base64 `data:` URIs; otherwise emit the archive path.
    pub embed_media: bool,
    pub include_notes: bool,
    /// Convert slides on the rayon pool.
    pub parallel: bool,
    /// Group nesting beyond this depth rejects the slide as malformed.
    pub max_group_depth: usize,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            embed_media: true,
            include_notes: true,
            parallel: false,
            max_group_depth: 64,
        }
    }
}

impl ConvertSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_expected_values() {
        let settings = ConvertSettings::default();

        assert!(settings.embed_media);
        assert!(settings.include_notes);
        assert!(!settings.parallel);
        assert_eq!(settings.max_group_depth, 64);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = ConvertSettings::from_json(r#"{"parallel": true}"#).unwrap();
        assert!(settings.parallel);
        assert!(settings.embed_media);
    }
}
