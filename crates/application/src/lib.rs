//! Landns client application layer: the HTTP port, one use case per API
//! operation and the [`LandnsClient`](services::LandnsClient) facade.
pub mod ports;
pub mod services;
pub mod use_cases;
