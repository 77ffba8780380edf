// tests/support/mocks.rs
use bluepic_core::application::ports::{content_type::ContentTypeResolver, time::Clock};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2016-06-01T09:05:03Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Formatted form of [`fixed_now`].
pub const FIXED_UPLOADED_TS: &str = "2016-06-01T09:05:03";

#[derive(Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Content-type registry that only knows what the test registers.
#[derive(Clone, Default)]
pub struct MapContentTypes {
    types: HashMap<String, String>,
}

impl MapContentTypes {
    pub fn with(mut self, extension: &str, content_type: &str) -> Self {
        self.types
            .insert(extension.to_string(), content_type.to_string());
        self
    }

    pub fn png_only() -> Self {
        Self::default().with("png", "image/png")
    }
}

impl ContentTypeResolver for MapContentTypes {
    fn content_type_for_extension(&self, extension: &str) -> Option<String> {
        self.types.get(extension).cloned()
    }
}
