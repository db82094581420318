use landns_client_domain::{
    parse_dynamic_records, parse_records, DomainError, DynamicRecord, Endpoint, Record,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{HttpRequest, HttpTransport};

pub struct GetRecordsUseCase {
    transport: Arc<dyn HttpTransport>,
    endpoint: Endpoint,
}

impl GetRecordsUseCase {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<Record>, DomainError> {
        let body = self.fetch().await?;
        let records = parse_records(&body);

        debug!(count = records.len(), "Records fetched");
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn execute_dynamic(&self) -> Result<Vec<DynamicRecord>, DomainError> {
        let body = self.fetch().await?;
        let records = parse_dynamic_records(&body);

        debug!(count = records.len(), "Dynamic records fetched");
        Ok(records)
    }

    async fn fetch(&self) -> Result<String, DomainError> {
        let response = self
            .transport
            .send(HttpRequest::get(self.endpoint.to_string()))
            .await?;
        Ok(response.body)
    }
}
