use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::package::OoxmlPackage;

static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("png", "image/png");
    m.insert("jpg", "image/jpeg");
    m.insert("jpeg", "image/jpeg");
    m.insert("gif", "image/gif");
    m.insert("bmp", "image/bmp");
    m.insert("svg", "image/svg+xml");
    m.insert("tif", "image/tiff");
    m.insert("tiff", "image/tiff");
    m.insert("emf", "image/x-emf");
    m.insert("wmf", "image/x-wmf");
    m.insert("webp", "image/webp");
    m.insert("mp4", "video/mp4");
    m.insert("webm", "video/webm");
    m.insert("ogg", "video/ogg");
    m.insert("mp3", "audio/mpeg");
    m.insert("wav", "audio/wav");
    m
});

pub const EMBEDDED_VIDEO: &[&str] = &["mp4", "webm", "ogg"];
pub const EMBEDDED_AUDIO: &[&str] = &["mp3", "wav", "ogg"];

/// Lower-cased file extension of a part path.
pub fn extension(path: &str) -> String {
    path.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn mime_type(path: &str) -> &'static str {
    MIME_TYPES
        .get(extension(path).as_str())
        .copied()
        .unwrap_or("application/octet-stream")
}

/// `data:` URI of a media part, or its archive path when not embedding.
/// `None` when the part is absent from the archive.
pub fn media_source(package: &OoxmlPackage, path: &str, embed: bool) -> Option<String> {
    let bytes = package.get_part(path)?;
    if !embed {
        return Some(path.to_string());
    }
    Some(format!("data:{};base64,{}", mime_type(path), STANDARD.encode(bytes)))
}

pub fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}
