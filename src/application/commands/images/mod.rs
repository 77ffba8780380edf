mod create;
mod service;

pub use create::NewImageCommand;
pub use service::ImageCommandService;
