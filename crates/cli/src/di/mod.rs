use landns_client_application::services::LandnsClient;
use landns_client_domain::{Config, Endpoint};
use landns_client_infrastructure::http::ReqwestTransport;
use std::sync::Arc;

pub fn build_client(config: &Config) -> anyhow::Result<LandnsClient> {
    let endpoint = Endpoint::new(config.client.endpoint.as_str())?;
    let transport = Arc::new(ReqwestTransport::from_config(&config.client));

    Ok(LandnsClient::new(transport, endpoint))
}
