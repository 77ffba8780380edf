// src/presentation/http/params.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::params::ParamSource,
};
use std::collections::HashMap;

/// Route and query parameters collected by the router for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: HashMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `a=1&b=2` query string. Percent-escapes are decoded by
    /// the form decoder before the values reach the builders.
    pub fn from_query(query: &str) -> ApplicationResult<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).map_err(|err| {
            ApplicationError::invalid_image_request(format!("malformed query string: {err}"))
        })?;
        Ok(pairs.into_iter().collect())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Later values for the same name replace earlier ones.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Route parameters take precedence over query parameters of the same name.
    pub fn merge_route(mut self, route: HashMap<String, String>) -> Self {
        self.values.extend(route);
        self
    }
}

impl ParamSource for RequestParams {
    fn param(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl From<HashMap<String, String>> for RequestParams {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, String)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
