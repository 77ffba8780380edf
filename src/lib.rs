//! Response shaping for the photo-sharing backend: turns document-database
//! view results into listing envelopes and upload parameters into image
//! documents ready to be stored.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod telemetry;

pub use application::{
    ApplicationResult,
    dto::RecordEnvelope,
    error::ApplicationError,
    services::ApplicationServices,
};
pub use config::{AppConfig, ConfigError};
pub use domain::image::NewImageDocument;
