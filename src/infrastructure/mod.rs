pub mod content_type;
pub mod time;

pub use content_type::MimeContentTypeResolver;
pub use time::SystemClock;
