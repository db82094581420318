//! HTTP transport for the landns record API, backed by `reqwest`.
//!
//! Request bodies are plain wire-format text:
//! ```text
//! POST /api/v1 HTTP/1.1
//! Content-Type: text/plain
//!
//! example.com. 60 IN A 192.0.2.1
//! ```
//!
//! Any status outside 2xx is reported as `DomainError::UnexpectedStatus`.

use async_trait::async_trait;
use landns_client_application::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use landns_client_domain::{ClientConfig, DomainError};
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, timeout }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(Duration::from_secs(config.timeout_secs))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn build(&self, request: HttpRequest) -> reqwest::RequestBuilder {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        let builder = match request.content_type {
            Some(content_type) => builder.header(reqwest::header::CONTENT_TYPE, content_type),
            None => builder,
        };

        match request.body {
            Some(body) => builder.body(body),
            None => builder,
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

fn map_reqwest_error(url: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::TransportTimeout {
            url: url.to_string(),
        }
    } else if e.is_connect() {
        DomainError::TransportConnectionRefused {
            url: url.to_string(),
        }
    } else {
        DomainError::TransportFailed {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, DomainError> {
        let url = request.url.clone();
        let method = request.method;

        debug!(
            method = %method,
            url = %url,
            body_len = request.body.as_ref().map_or(0, String::len),
            "Sending landns API request"
        );

        let response = tokio::time::timeout(self.timeout, self.build(request).send())
            .await
            .map_err(|_| DomainError::TransportTimeout { url: url.clone() })?
            .map_err(|e| map_reqwest_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = tokio::time::timeout(self.timeout, response.text())
            .await
            .map_err(|_| DomainError::TransportTimeout { url: url.clone() })?
            .map_err(|e| map_reqwest_error(&url, e))?;

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            response_len = body.len(),
            "landns API response received"
        );

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
