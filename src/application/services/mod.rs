// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::images::ImageCommandService,
        ports::{ClockPort, ContentTypeResolverPort},
        queries::listing::ListingQueryService,
    },
    config::AppConfig,
};

pub struct ApplicationServices {
    pub listing_queries: Arc<ListingQueryService>,
    pub image_commands: Arc<ImageCommandService>,
}

impl ApplicationServices {
    pub fn new(
        config: &AppConfig,
        clock: Arc<ClockPort>,
        content_types: Arc<ContentTypeResolverPort>,
    ) -> Self {
        let listing_queries = Arc::new(ListingQueryService::from_config(config));
        let image_commands = Arc::new(ImageCommandService::new(
            Arc::clone(&clock),
            Arc::clone(&content_types),
        ));

        Self {
            listing_queries,
            image_commands,
        }
    }

    pub fn listing_queries(&self) -> Arc<ListingQueryService> {
        Arc::clone(&self.listing_queries)
    }

    pub fn image_commands(&self) -> Arc<ImageCommandService> {
        Arc::clone(&self.image_commands)
    }
}
