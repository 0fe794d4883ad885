// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Result, anyhow};
use clap::Parser;
use directories::ProjectDirs;
use log::error;
use showdown_server::server;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    /// The server listening address.
    #[clap(long, short, default_value = "127.0.0.1")]
    address: String,
    /// The server listening port.
    #[clap(long, short, default_value_t = 8000)]
    port: u16,
    /// Number of HTTP workers.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    workers: u16,
    /// The hands database path.
    #[clap(long)]
    db_path: Option<PathBuf>,
}

fn default_db_path() -> Result<PathBuf> {
    ProjectDirs::from("", "", "showdown")
        .map(|dirs| dirs.data_dir().join("hands.db"))
        .ok_or_else(|| anyhow!("Cannot find the data directory"))
}

#[actix_web::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let db_path = match cli.db_path.map(Ok).unwrap_or_else(default_db_path) {
        Ok(path) => path,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let config = showdown_server::Config {
        address: cli.address,
        port: cli.port,
        workers: cli.workers as usize,
        db_path,
    };

    if let Err(e) = server::run(config).await {
        error!("{e}");
    }
}
