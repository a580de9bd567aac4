use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideTreeError {
    #[error("Invalid OOXML package: {message}")]
    InvalidPackage { message: String },

    #[error("Missing required part '{part_path}'")]
    PartNotFound { part_path: String },

    #[error("Malformed tree in '{part}': {message}")]
    MalformedTree { part: String, message: String },

    #[error("Unsupported node: {name}")]
    UnsupportedNode { name: String },

    #[error("XML parsing error at {location}: {message}")]
    XmlParse { message: String, location: String },

    #[error("Package XML decode error: {0}")]
    PackageXml(#[from] quick_xml::DeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl SlideTreeError {
    pub fn part_not_found(part_path: impl Into<String>) -> Self {
        Self::PartNotFound {
            part_path: part_path.into(),
        }
    }

    pub fn malformed(part: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedTree {
            part: part.into(),
            message: message.into(),
        }
    }

    /// Whether the error aborts the whole conversion. Only unsupported nodes
    /// degrade to "no element produced".
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::UnsupportedNode { .. })
    }
}

pub type Result<T> = std::result::Result<T, SlideTreeError>;
