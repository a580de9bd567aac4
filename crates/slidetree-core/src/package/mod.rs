pub mod ooxml;
pub mod relationships;
pub mod content_types;

pub use ooxml::OoxmlPackage;
pub use relationships::{Relationship, RelationshipTable};
pub use content_types::ContentTypes;
