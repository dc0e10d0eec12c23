// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Remote scoring delegate.
//
// POSTs an AnalysisRequest as JSON to a remote service and decodes an
// AnalysisResult. Any failure is returned as a RemoteError; callers are
// expected to fall back to the local engine.

use async_trait::async_trait;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use bytes::Bytes;

use crate::config::RemoteConfig;
use crate::request::AnalysisRequest;
use crate::verdict::AnalysisResult;

// ---------------------------------------------------------------------------
// Transport seam
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out: {0}")]
    Timeout(String),
}

/// Sends HTTP requests. Injected so tests never open sockets.
#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

pub struct ReqwestHttpSender {
    client: reqwest::Client,
}

impl ReqwestHttpSender {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSender for ReqwestHttpSender {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut req = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .body(request.body);

        if let Some(timeout_ms) = request.timeout_ms {
            req = req.timeout(std::time::Duration::from_millis(timeout_ms));
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout(e.to_string())
            } else {
                HttpError::Transport(e.to_string())
            }
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout(e.to_string())
            } else {
                HttpError::Transport(e.to_string())
            }
        })?;

        Ok(HttpResponse { status, body })
    }
}

// ---------------------------------------------------------------------------
// Delegate
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("remote returned status {0}")]
    Status(StatusCode),

    #[error("remote response is not a valid analysis result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("remote result violates result invariants")]
    InvalidResult,
}

/// A remote equivalent of the local engine.
#[async_trait]
pub trait RemoteDelegate: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, RemoteError>;
}

/// Delegate speaking the JSON-over-HTTP analyze protocol.
pub struct HttpRemoteDelegate {
    config: RemoteConfig,
    http: std::sync::Arc<dyn HttpSender>,
}

impl HttpRemoteDelegate {
    pub fn new(config: RemoteConfig, http: std::sync::Arc<dyn HttpSender>) -> Self {
        Self { config, http }
    }

    /// Delegate backed by a fresh reqwest client.
    pub fn with_reqwest(config: RemoteConfig) -> Self {
        Self::new(
            config,
            std::sync::Arc::new(ReqwestHttpSender::new(reqwest::Client::new())),
        )
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &self.config.api_key {
            match HeaderValue::from_str(&format!("Bearer {key}")) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => tracing::warn!(
                    url = %self.config.url,
                    "remote api_key is not a valid header value; sending without authorization"
                ),
            }
        }
        headers
    }
}

#[async_trait]
impl RemoteDelegate for HttpRemoteDelegate {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, RemoteError> {
        let body = serde_json::to_vec(request)?;
        let response = self
            .http
            .send(HttpRequest {
                method: Method::POST,
                url: self.config.url.clone(),
                headers: self.headers(),
                body: Bytes::from(body),
                timeout_ms: Some(self.config.timeout_ms),
            })
            .await?;

        if !response.status.is_success() {
            return Err(RemoteError::Status(response.status));
        }

        let result: AnalysisResult = serde_json::from_slice(&response.body)?;
        if !result.is_well_formed() {
            return Err(RemoteError::InvalidResult);
        }
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
