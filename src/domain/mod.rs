pub mod errors;
pub mod image;
