use landns_client_domain::{
    format_dynamic_records, format_records, DomainError, DynamicRecord, Endpoint, Record,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{HttpRequest, HttpTransport};

pub struct SetRecordsUseCase {
    transport: Arc<dyn HttpTransport>,
    endpoint: Endpoint,
}

impl SetRecordsUseCase {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Registers records with one POST whose body holds one wire line per
    /// record.
    pub async fn execute<'a, I>(&self, records: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let records: Vec<&Record> = records.into_iter().collect();
        self.post(records.len(), format_records(records)).await
    }

    /// Same as [`execute`](Self::execute) but keeps the `ID`, `Volatile` and
    /// disabled annotations on each line.
    pub async fn execute_dynamic<'a, I>(&self, records: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = &'a DynamicRecord>,
    {
        let records: Vec<&DynamicRecord> = records.into_iter().collect();
        self.post(records.len(), format_dynamic_records(records)).await
    }

    #[instrument(skip(self, body))]
    async fn post(&self, count: usize, body: String) -> Result<(), DomainError> {
        let request = HttpRequest::post_text(self.endpoint.to_string(), body);

        self.transport.send(request).await?;

        info!(count, endpoint = %self.endpoint, "Records registered");
        Ok(())
    }
}
