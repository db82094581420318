//! Landns client infrastructure layer: adapters for the application ports.
pub mod http;
