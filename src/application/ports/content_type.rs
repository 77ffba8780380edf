// src/application/ports/content_type.rs

/// Maps a lower-cased file extension (`"png"`) to the MIME type stored on
/// the image document, or `None` when the extension is not accepted.
pub trait ContentTypeResolver: Send + Sync {
    fn content_type_for_extension(&self, extension: &str) -> Option<String>;
}
