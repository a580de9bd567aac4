use crate::error::Result;
use crate::package::OoxmlPackage;
use std::path::Path;

pub struct PmlDocument {
    package: OoxmlPackage,
}

impl PmlDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let package = OoxmlPackage::open(bytes)?;
        Ok(Self { package })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn package(&self) -> &OoxmlPackage {
        &self.package
    }
}
