//! Landns client domain layer: the record model, its line codec and the
//! client configuration.
pub mod config;
pub mod dns_record;
pub mod dynamic_record;
pub mod endpoint;
pub mod errors;

pub use config::{CliOverrides, ClientConfig, Config, ConfigError, LoggingConfig};
pub use dns_record::{format_records, parse_records, Record, RecordData, RecordType, DEFAULT_TTL};
pub use dynamic_record::{format_dynamic_records, parse_dynamic_records, DynamicRecord};
pub use endpoint::Endpoint;
pub use errors::DomainError;
