use landns_client_domain::{DomainError, DynamicRecord, Endpoint, Record};
use std::sync::Arc;

use crate::ports::HttpTransport;
use crate::use_cases::{
    GetRecordsUseCase, GlobRecordsUseCase, RemoveRecordUseCase, SetRecordsUseCase,
};

/// Client for the landns dynamic record API.
///
/// Every operation issues exactly one request through the transport and
/// neither retries nor caches. Failures reported by the transport are
/// returned unchanged. The client holds no mutable state, so clones can be
/// shared freely between tasks.
#[derive(Clone)]
pub struct LandnsClient {
    endpoint: Endpoint,
    set: Arc<SetRecordsUseCase>,
    remove: Arc<RemoveRecordUseCase>,
    get: Arc<GetRecordsUseCase>,
    glob: Arc<GlobRecordsUseCase>,
}

impl LandnsClient {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Endpoint) -> Self {
        Self {
            set: Arc::new(SetRecordsUseCase::new(transport.clone(), endpoint.clone())),
            remove: Arc::new(RemoveRecordUseCase::new(transport.clone(), endpoint.clone())),
            get: Arc::new(GetRecordsUseCase::new(transport.clone(), endpoint.clone())),
            glob: Arc::new(GlobRecordsUseCase::new(transport, endpoint.clone())),
            endpoint,
        }
    }

    /// Client for `http://localhost:9353/api/v1`.
    pub fn with_default_endpoint(transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(transport, Endpoint::default())
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// POSTs the present records; `None` entries are skipped.
    pub async fn set(&self, records: &[Option<Record>]) -> Result<(), DomainError> {
        self.set.execute(records.iter().flatten()).await
    }

    pub async fn set_records(&self, records: &[Record]) -> Result<(), DomainError> {
        self.set.execute(records).await
    }

    pub async fn set_dynamic(&self, records: &[DynamicRecord]) -> Result<(), DomainError> {
        self.set.execute_dynamic(records).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), DomainError> {
        self.remove.execute(id).await
    }

    pub async fn get(&self) -> Result<Vec<Record>, DomainError> {
        self.get.execute().await
    }

    pub async fn get_dynamic(&self) -> Result<Vec<DynamicRecord>, DomainError> {
        self.get.execute_dynamic().await
    }

    pub async fn glob(&self, query: &str) -> Result<Vec<Record>, DomainError> {
        self.glob.execute(query).await
    }

    pub async fn glob_dynamic(&self, query: &str) -> Result<Vec<DynamicRecord>, DomainError> {
        self.glob.execute_dynamic(query).await
    }
}
