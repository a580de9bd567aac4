pub mod arena;
pub mod namespaces;
pub mod node;
pub mod parser;
pub mod xname;

pub use arena::XmlDocument;
pub use node::{XmlNode, XmlNodeData};
pub use xname::{XName, XAttribute};
pub use namespaces::{P, A, R, MC, C, DGM, DSP, M};
