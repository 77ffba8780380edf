// src/domain/image/mod.rs
pub mod entity;
pub mod record;
pub mod value_objects;

pub use entity::{IMAGE_DOCUMENT_TYPE, NewImageDocument};
pub use record::{AttachmentUrls, PRIMARY_ATTACHMENT, massage_image_record};
pub use value_objects::{DisplayName, FileName, UPLOADED_TS_FORMAT, UploadedTimestamp};
