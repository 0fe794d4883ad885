// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Server errors.
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the server routes.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The hand could not be settled.
    #[error("hand processing failed: {0}")]
    Hand(#[from] showdown_core::Error),
    /// The request body is not a valid hand.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The hand is not in the database.
    #[error("hand {0} not found")]
    NotFound(String),
    /// A database failure.
    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    detail: String,
}

impl ServerError {
    fn code(&self) -> &'static str {
        match self {
            ServerError::Hand(e) if e.is_client_error() => "invalid_input",
            ServerError::InvalidRequest(_) => "invalid_input",
            ServerError::NotFound(_) => "not_found",
            _ => "internal_error",
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Hand(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.code(),
            detail: self.to_string(),
        })
    }
}
