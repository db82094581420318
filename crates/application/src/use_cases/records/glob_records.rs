use landns_client_domain::{
    parse_dynamic_records, parse_records, DomainError, DynamicRecord, Endpoint, Record,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{HttpRequest, HttpTransport};

/// Looks up records whose name matches a server-side glob. The query is
/// placed into the URL path as given; escaping is up to the caller.
pub struct GlobRecordsUseCase {
    transport: Arc<dyn HttpTransport>,
    endpoint: Endpoint,
}

impl GlobRecordsUseCase {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: &str) -> Result<Vec<Record>, DomainError> {
        let body = self.fetch(query).await?;
        let records = parse_records(&body);

        debug!(count = records.len(), "Glob matched records");
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn execute_dynamic(&self, query: &str) -> Result<Vec<DynamicRecord>, DomainError> {
        let body = self.fetch(query).await?;
        let records = parse_dynamic_records(&body);

        debug!(count = records.len(), "Glob matched dynamic records");
        Ok(records)
    }

    async fn fetch(&self, query: &str) -> Result<String, DomainError> {
        let response = self
            .transport
            .send(HttpRequest::get(self.endpoint.glob_url(query)))
            .await?;
        Ok(response.body)
    }
}
