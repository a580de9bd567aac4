mod converter;
mod document;
mod graphic_frame;
mod media;
mod picture;
mod settings;
mod shape;

pub mod geometry;
pub mod parts;
pub mod placeholder;
pub mod result;
pub mod table;
pub mod walker;

pub use converter::PmlConverter;
pub use document::PmlDocument;
pub use placeholder::{IndexTable, PlaceholderChain, PlaceholderRef};
pub use result::{Element, Presentation, Slide, SlideFill, SlideSize};
pub use settings::ConvertSettings;
