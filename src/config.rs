// src/config.rs
use std::env;
use thiserror::Error;

/// Connection details of the document database. Only used to derive the
/// public URL of stored attachments; this crate never opens a connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    database_host: String,
    database_port: u16,
    database_name: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_host() -> String {
    "127.0.0.1".into()
}

fn default_database_port() -> u16 {
    5984
}

fn default_database_name() -> String {
    "bluepic_db".into()
}

impl AppConfig {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let database_host = host.into();
        let database_name = database_name.into();

        if database_host.trim().is_empty() {
            return Err(ConfigError::Invalid("database host cannot be empty".into()));
        }
        if database_name.trim().is_empty() {
            return Err(ConfigError::Missing("COUCHDB_DB_NAME"));
        }

        Ok(Self {
            database_host,
            database_port: port,
            database_name,
        })
    }

    /// Build configuration from environment variables, falling back to a
    /// local CouchDB on its default port.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = env::var("COUCHDB_HOST").unwrap_or_else(|_| default_database_host());
        let port = match env::var("COUCHDB_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => default_database_port(),
        };
        let name = env::var("COUCHDB_DB_NAME").unwrap_or_else(|_| default_database_name());

        Self::new(host, port, name)
    }

    pub fn database_host(&self) -> &str {
        &self.database_host
    }

    pub fn database_port(&self) -> u16 {
        self.database_port
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// `http://{host}:{port}/{db}`; attachment URLs append `/{id}/{file}`.
    pub fn attachment_base_url(&self) -> String {
        format!(
            "http://{}:{}/{}",
            self.database_host, self.database_port, self.database_name
        )
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::Invalid(format!("COUCHDB_PORT must be a port number, got '{raw}'")))
}
