// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// HTTP service.
//
// Responsibilities:
// - Decode analyze requests (leniently) and run them through the analyzer
// - Record results in the history store
// - Heartbeat and history endpoints
// - 413 for bodies over MAX_BODY_BYTES
// - 404 for unknown paths

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::engine::Analyzer;
use crate::history::{HistoryEntry, HistoryStore};
use crate::request::AnalysisRequest;

/// Maximum accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default port for the service.
pub const DEFAULT_PORT: u16 = 9810;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced to HTTP clients. Analysis itself never fails; these only
/// cover requests that cannot be read as JSON.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("request body is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("request body exceeds the 1 MiB limit")]
    TooLarge,

    #[error("failed to read request body: {0}")]
    BodyRead(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, public_message) = match &self {
            ApiError::EmptyBody => (StatusCode::BAD_REQUEST, "request body is empty"),
            ApiError::MalformedJson(_) => {
                (StatusCode::BAD_REQUEST, "request body is not valid JSON")
            }
            ApiError::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "request body is too large"),
            ApiError::BodyRead(_) => (StatusCode::BAD_REQUEST, "failed to read request body"),
        };
        (status, public_message).into_response()
    }
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn Analyzer>,
    pub history: Arc<dyn HistoryStore>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /v1/heartbeat -> 200 OK
pub async fn heartbeat() -> StatusCode {
    StatusCode::OK
}

/// POST /v1/analyze
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request = match decode_request(body) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "rejected analyze request");
            return e.into_response();
        }
    };

    let result = state.analyzer.analyze(&request).await;
    state
        .history
        .push(HistoryEntry::new(&request, result.clone(), Utc::now()));

    Json(result).into_response()
}

/// GET /v1/history -> entries, most recent first
pub async fn history_handler(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    Json(state.history.snapshot())
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "unknown path")
}

fn decode_request(body: Result<Bytes, BytesRejection>) -> Result<AnalysisRequest, ApiError> {
    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::TooLarge
        } else {
            ApiError::BodyRead(rejection.body_text())
        }
    })?;

    if bytes.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedJson(e.to_string()))?;

    Ok(AnalysisRequest::from_json(value))
}

// ---------------------------------------------------------------------------
// Router construction
// ---------------------------------------------------------------------------

/// Build the router. The analyzer and history store are injected.
pub fn build_router(analyzer: Arc<dyn Analyzer>, history: Arc<dyn HistoryStore>) -> Router {
    let state = AppState { analyzer, history };

    Router::new()
        .route("/v1/heartbeat", get(heartbeat))
        .route("/v1/analyze", post(analyze_handler))
        .route("/v1/history", get(history_handler))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Address the service binds to. Always localhost.
pub const BIND_ADDR: [u8; 4] = [127, 0, 0, 1];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
