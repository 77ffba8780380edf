// src/application/ports/mod.rs
pub mod content_type;
pub mod params;
pub mod time;

pub type ClockPort = dyn time::Clock;
pub type ContentTypeResolverPort = dyn content_type::ContentTypeResolver;
