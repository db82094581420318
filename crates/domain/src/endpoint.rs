use crate::config::DEFAULT_ENDPOINT;
use crate::errors::DomainError;
use std::fmt;

/// Base URL of the landns record API and the routes derived from it.
///
/// A trailing `/` is dropped so `http://host/api/v1` and `http://host/api/v1/`
/// address the same routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        let base = url.strip_suffix('/').unwrap_or(&url);

        let host = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"))
            .ok_or_else(|| DomainError::InvalidEndpoint(url.clone()))?;
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidEndpoint(url.clone()));
        }

        Ok(Self {
            base: base.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// `<endpoint>/id/<id>`
    pub fn id_url(&self, id: i64) -> String {
        format!("{}/id/{}", self.base, id)
    }

    /// `<endpoint>/glob/<query>`; the query is inserted verbatim.
    pub fn glob_url(&self, query: &str) -> String {
        format!("{}/glob/{}", self.base, query)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
