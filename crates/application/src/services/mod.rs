mod landns_client;

pub use landns_client::LandnsClient;
