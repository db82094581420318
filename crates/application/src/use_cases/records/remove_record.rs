use landns_client_domain::{DomainError, Endpoint};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{HttpRequest, HttpTransport};

pub struct RemoveRecordUseCase {
    transport: Arc<dyn HttpTransport>,
    endpoint: Endpoint,
}

impl RemoveRecordUseCase {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.transport
            .send(HttpRequest::delete(self.endpoint.id_url(id)))
            .await?;

        info!(record_id = id, "Record removed");
        Ok(())
    }
}
