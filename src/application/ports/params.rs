// src/application/ports/params.rs
use std::collections::HashMap;

/// Named route or query parameters of the request being served.
pub trait ParamSource {
    fn param(&self, name: &str) -> Option<&str>;
}

impl ParamSource for HashMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}
