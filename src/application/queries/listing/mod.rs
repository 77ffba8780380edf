// src/application/queries/listing/mod.rs
mod images;
mod rows;
mod service;
mod users;

pub use service::ListingQueryService;
