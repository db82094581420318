#![allow(dead_code)]

use async_trait::async_trait;
use landns_client_application::ports::{HttpRequest, HttpResponse, HttpTransport};
use landns_client_domain::DomainError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Records every request and answers with a canned body or error.
#[derive(Clone)]
pub struct MockHttpTransport {
    requests: Arc<RwLock<Vec<HttpRequest>>>,
    response_body: Arc<RwLock<String>>,
    error: Arc<RwLock<Option<DomainError>>>,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(RwLock::new(Vec::new())),
            response_body: Arc::new(RwLock::new(String::new())),
            error: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_body(body: &str) -> Self {
        let transport = Self::new();
        *transport.response_body.try_write().unwrap() = body.to_string();
        transport
    }

    pub async fn set_error(&self, error: DomainError) {
        *self.error.write().await = Some(error);
    }

    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.read().await.clone()
    }

    pub async fn last_request(&self) -> Option<HttpRequest> {
        self.requests.read().await.last().cloned()
    }

    pub async fn count(&self) -> usize {
        self.requests.read().await.len()
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, DomainError> {
        self.requests.write().await.push(request);

        if let Some(error) = self.error.read().await.clone() {
            return Err(error);
        }

        Ok(HttpResponse {
            status: 200,
            body: self.response_body.read().await.clone(),
        })
    }
}
