// src/presentation/http/mod.rs
pub mod error;
pub mod params;
