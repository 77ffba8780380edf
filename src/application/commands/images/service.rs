use std::sync::Arc;

use crate::application::ports::{ClockPort, ContentTypeResolverPort};

pub struct ImageCommandService {
    pub(super) clock: Arc<ClockPort>,
    pub(super) content_types: Arc<ContentTypeResolverPort>,
}

impl ImageCommandService {
    pub fn new(clock: Arc<ClockPort>, content_types: Arc<ContentTypeResolverPort>) -> Self {
        Self {
            clock,
            content_types,
        }
    }
}
