//! Entrypoint.

use std::{fs, path::Path};

use clap::Parser;
use client::{Client, MonitorFilter};
use config::{Command, Opts};
use dotenvy::dotenv;
use eyre::Context;
use models::Monitor;
use tracing::{error, info};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Try the default .env file, and ignore if it doesn't exist.
    dotenv().ok();

    let opts = Opts::parse();
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let client = Client::with_base_url(opts.api.api_token, opts.api.base_url.as_str());

    match opts.command {
        Command::List { url, name } => {
            let filter = match (url, name) {
                (Some(value), _) => Some(MonitorFilter::Url(value)),
                (None, Some(value)) => Some(MonitorFilter::PronounceableName(value)),
                (None, None) => None,
            };
            match filter {
                Some(filter) => print_json(&client.find_monitors(&filter).await?)?,
                None => {
                    let monitors = client.list_all_monitors().await.map_err(|e| {
                        error!(collected = e.collected.len(), error = %e, "listing aborted mid-way");
                        e
                    })?;
                    info!(count = monitors.len(), "listed all monitors");
                    print_json(&monitors)?;
                }
            }
        }
        Command::Get { id } => print_json(&client.get_monitor(&id).await?)?,
        Command::Create { file } => {
            let monitor = read_monitor(&file)?;
            let created = client.create_monitor(&monitor).await?;
            info!(id = %created.id, "monitor created");
            print_json(&created)?;
        }
        Command::Update { id, file } => {
            let monitor = read_monitor(&file)?;
            print_json(&client.update_monitor(&id, &monitor).await?)?;
        }
        Command::Delete { id } => {
            client.delete_monitor(&id).await?;
            info!(id = %id, "monitor deleted");
        }
        Command::Groups => {
            let groups = client.list_all_monitor_groups().await.map_err(|e| {
                error!(collected = e.collected.len(), error = %e, "listing aborted mid-way");
                e
            })?;
            print_json(&groups)?;
        }
    }

    Ok(())
}

fn read_monitor(path: &Path) -> eyre::Result<Monitor> {
    let raw = fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).wrap_err_with(|| format!("parsing {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
