pub mod strings;

pub use strings::{escape_html, has_visible_text};
