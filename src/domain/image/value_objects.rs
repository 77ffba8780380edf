// src/domain/image/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Fixed-width, offset-free timestamp stored on image documents.
pub const UPLOADED_TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("file name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Lower-cased component following the first `.`, so `shot.PNG` gives
    /// `png` and `archive.tar.gz` gives `tar`.
    pub fn extension(&self) -> DomainResult<String> {
        self.0
            .split('.')
            .nth(1)
            .map(str::to_lowercase)
            .ok_or_else(|| {
                DomainError::Validation(format!("file name '{}' has no extension", self.0))
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Only the literal `%20` sequence is turned into a space; any other
    /// escape is kept as sent by the client.
    pub fn from_request(raw: &str) -> Self {
        Self(raw.replace("%20", " "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UploadedTimestamp(String);

impl UploadedTimestamp {
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.format(UPLOADED_TS_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<DateTime<Utc>> for UploadedTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(value)
    }
}
