pub mod client;
pub mod errors;
pub mod logging;
pub mod root;

pub use client::{ClientConfig, DEFAULT_ENDPOINT};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
