use clap::{Parser, Subcommand};
use landns_client_domain::CliOverrides;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "landnsctl")]
#[command(version)]
#[command(about = "A command-line client for the landns record API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Endpoint of the landns API
    #[arg(short = 'e', long, value_name = "URL")]
    endpoint: Option<String>,

    /// TTL for records created with `add`
    #[arg(long)]
    ttl: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every registered record
    Get,

    /// Print records whose name matches a glob
    Glob { query: String },

    /// Register record lines; reads stdin when no record is given
    Set { records: Vec<String> },

    /// Remove a record by id
    Remove { id: i64 },

    /// Register a single record built from its fields
    #[command(subcommand)]
    Add(AddCommand),
}

#[derive(Subcommand)]
pub enum AddCommand {
    /// IPv4 address record
    A { name: String, address: String },

    /// IPv6 address record
    Aaaa { name: String, address: String },

    /// Alias record
    Cname { name: String, target: String },

    /// Reverse lookup record
    Ptr { name: String, domain: String },

    /// Text record
    Txt { name: String, text: String },

    /// Service record
    Srv {
        name: String,
        target: String,
        port: u16,
        #[arg(long, default_value_t = 0)]
        priority: u16,
        #[arg(long, default_value_t = 0)]
        weight: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        endpoint: cli.endpoint.clone(),
        timeout_secs: cli.timeout,
        default_ttl: cli.ttl,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(endpoint = %config.client.endpoint, "Starting landnsctl v{}", env!("CARGO_PKG_VERSION"));

    let client = di::build_client(&config)?;

    commands::run(cli.command, &client, config.client.default_ttl).await
}
