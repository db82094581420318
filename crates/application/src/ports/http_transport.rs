use async_trait::async_trait;
use landns_client_domain::DomainError;
use std::fmt;

pub const TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
    pub content_type: Option<&'static str>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            body: None,
            content_type: None,
        }
    }

    pub fn delete(url: String) -> Self {
        Self {
            method: HttpMethod::Delete,
            url,
            body: None,
            content_type: None,
        }
    }

    pub fn post_text(url: String, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            body: Some(body),
            content_type: Some(TEXT_PLAIN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Issues one HTTP request and returns the response.
///
/// Implementations decide which responses are failures (connection errors,
/// timeouts, non-success statuses) and report them as `Err`; callers never
/// inspect `status` themselves.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, DomainError>;
}
