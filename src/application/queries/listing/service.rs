use crate::{config::AppConfig, domain::image::AttachmentUrls};

/// Shapes view results from the document database into listing envelopes.
pub struct ListingQueryService {
    pub(super) attachment_urls: AttachmentUrls,
}

impl ListingQueryService {
    pub fn new(attachment_urls: AttachmentUrls) -> Self {
        Self { attachment_urls }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(AttachmentUrls::new(config.attachment_base_url()))
    }
}
