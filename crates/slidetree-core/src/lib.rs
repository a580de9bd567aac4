pub mod error;
pub mod extract;
pub mod package;
pub mod pml;
pub mod util;
pub mod xml;

pub use error::{Result, SlideTreeError};

pub use extract::{DefaultExtractors, Extractors};
pub use pml::{ConvertSettings, PmlConverter, PmlDocument, Presentation};
