use anyhow::Context;
use landns_client_application::services::LandnsClient;
use landns_client_domain::{DynamicRecord, Record};
use std::io::Read;
use tracing::warn;

use crate::{AddCommand, Command};

pub async fn run(command: Command, client: &LandnsClient, default_ttl: u32) -> anyhow::Result<()> {
    match command {
        Command::Get => print_records(&client.get_dynamic().await?),
        Command::Glob { query } => print_records(&client.glob_dynamic(&query).await?),
        Command::Set { records } => {
            let input = if records.is_empty() {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read records from stdin")?;
                buf
            } else {
                records.join("\n")
            };

            let (parsed, rejected) = parse_input(&input);
            for line in &rejected {
                warn!(line = %line, "Skipping invalid record line");
            }
            if parsed.is_empty() {
                anyhow::bail!("no valid records to set");
            }

            client.set_dynamic(&parsed).await?;
        }
        Command::Remove { id } => client.remove(id).await?,
        Command::Add(add) => {
            let record = build_record(add, default_ttl);
            client.set_records(&[record]).await?;
        }
    }

    Ok(())
}

fn print_records(records: &[DynamicRecord]) {
    for record in records {
        println!("{}", record);
    }
}

/// Splits user input into record lines and the non-blank lines that failed
/// to parse.
fn parse_input(input: &str) -> (Vec<DynamicRecord>, Vec<String>) {
    let mut parsed = Vec::new();
    let mut rejected = Vec::new();

    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match DynamicRecord::parse(line) {
            Some(record) => parsed.push(record),
            None => rejected.push(line.to_string()),
        }
    }

    (parsed, rejected)
}

fn build_record(add: AddCommand, ttl: u32) -> Record {
    let record = match add {
        AddCommand::A { name, address } => Record::a(name, address),
        AddCommand::Aaaa { name, address } => Record::aaaa(name, address),
        AddCommand::Cname { name, target } => Record::cname(name, target),
        AddCommand::Ptr { name, domain } => Record::ptr(name, domain),
        AddCommand::Txt { name, text } => Record::txt(name, text),
        AddCommand::Srv {
            name,
            target,
            port,
            priority,
            weight,
        } => Record::srv_weighted(name, target, port, priority, weight),
    };
    record.with_ttl(ttl)
}
