// src/infrastructure/content_type.rs
use crate::application::ports::content_type::ContentTypeResolver;

/// Content types from the `mime_guess` extension registry.
#[derive(Default, Clone)]
pub struct MimeContentTypeResolver;

impl ContentTypeResolver for MimeContentTypeResolver {
    fn content_type_for_extension(&self, extension: &str) -> Option<String> {
        mime_guess::from_ext(&extension.to_ascii_lowercase())
            .first()
            .map(|mime| mime.essence_str().to_owned())
    }
}
