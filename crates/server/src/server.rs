// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown server entry point.
use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, middleware::Logger, web};
use anyhow::{Result, anyhow};
use log::info;
use std::path::PathBuf;

use crate::{db::Db, routes};

/// The origins of the local UI.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Server config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
    /// The number of HTTP workers.
    pub workers: usize,
    /// The hands database path.
    pub db_path: PathBuf,
}

/// Creates the CORS middleware for the local UI.
pub fn cors() -> Cors {
    ALLOWED_ORIGINS
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    info!("Opening database {}", config.db_path.display());
    let db = Db::open(&config.db_path)?;
    db.ping().await?;

    let addr = format!("{}:{}", config.address, config.port);
    info!("Starting server listening on {}", addr);

    let data = web::Data::new(db);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(cors())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&addr)
    .map_err(|e| anyhow!("Http server bind error: {e}"))?
    .run()
    .await?;

    info!("Server stopped");

    Ok(())
}
