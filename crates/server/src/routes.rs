// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! HTTP routes.
use actix_web::{HttpResponse, web};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use uuid::Uuid;

use showdown_core::{HandHistoryEntry, HandRequest, PlayerId};

use crate::{db::Db, error::ServerError};

/// The number of hands in the hand history.
pub const RECENT_HANDS: usize = 20;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registers the routes and the JSON error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {err}");
        ServerError::InvalidRequest(err.to_string()).into()
    });

    cfg.app_data(json_config)
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health))
        .route("/hands", web::post().to(create_hand))
        .route("/hands", web::get().to(list_hands))
        .route("/hands/{uuid}", web::get().to(get_hand));
}

#[derive(Debug, Serialize)]
struct CreatedHand {
    hand_uuid: String,
    winners: Vec<PlayerId>,
    pot_size: i64,
    winnings_by_player: BTreeMap<PlayerId, i64>,
    best_hands: BTreeMap<PlayerId, String>,
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Showdown hand settlement server",
        "status": "running",
        "version": VERSION,
        "endpoints": {
            "health": "/health",
            "hands": "/hands",
        },
    }))
}

async fn health(db: web::Data<Db>) -> HttpResponse {
    let database = match db.ping().await {
        Ok(()) => "healthy".to_string(),
        Err(e) => format!("unhealthy: {e}"),
    };

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "database": database,
        "version": VERSION,
    }))
}

async fn create_hand(
    db: web::Data<Db>,
    request: web::Json<HandRequest>,
) -> Result<HttpResponse, ServerError> {
    let request = request.into_inner();
    let outcome = request.resolve().inspect_err(|e| {
        if e.is_client_error() {
            warn!("Rejected hand: {e}");
        } else {
            error!("Hand settlement failed: {e}");
        }
    })?;

    let hand_uuid = Uuid::new_v4().to_string();
    info!(
        "Hand {hand_uuid} pot {} won by {:?}",
        request.pot_size, outcome.winners
    );

    // The settled hand is returned even if it cannot be saved.
    if let Err(e) = db.save_hand(hand_uuid.clone(), &request, &outcome).await {
        error!("Failed to save hand {hand_uuid}: {e}");
    }

    Ok(HttpResponse::Ok().json(CreatedHand {
        hand_uuid,
        winners: outcome.winners,
        pot_size: request.pot_size,
        winnings_by_player: outcome.winnings_by_player,
        best_hands: outcome.best_hands,
    }))
}

async fn list_hands(db: web::Data<Db>) -> Result<HttpResponse, ServerError> {
    let hands = db
        .recent_hands(RECENT_HANDS)
        .await?
        .iter()
        .map(|h| HandHistoryEntry::new(&h.uuid, &h.request, &h.outcome))
        .collect::<Vec<_>>();

    let message = if hands.is_empty() {
        "No hands found"
    } else {
        "Hands retrieved successfully"
    };

    Ok(HttpResponse::Ok().json(json!({
        "message": message,
        "count": hands.len(),
        "hands": hands,
    })))
}

async fn get_hand(
    db: web::Data<Db>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let uuid = path.into_inner();
    match db.get_hand(uuid.clone()).await? {
        Some(hand) => Ok(HttpResponse::Ok().json(hand)),
        None => Err(ServerError::NotFound(uuid)),
    }
}
