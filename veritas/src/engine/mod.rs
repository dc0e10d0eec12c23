// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Engine integration.
//
// Wires the core together for one request:
// - Signal extraction as of the injected clock
// - Scoring and verdict classification
// - Explanation and recommended actions
// and wraps it behind the Analyzer seam, optionally trying a remote delegate
// first with the local engine as the guaranteed fallback.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::remote::{HttpRemoteDelegate, RemoteDelegate};
use crate::request::AnalysisRequest;
use crate::signal::extractor::{PatternSignalExtractor, SignalExtractor};
use crate::signal::scorer::{Scorer, WeightedScorer};
use crate::signal::SignalSet;
use crate::verdict::{explain, recommended_actions, AnalysisResult};

// ---------------------------------------------------------------------------
// Interfaces
// ---------------------------------------------------------------------------

/// Source of the analysis instant. Only FabricatedDates depends on it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A frozen instant, for deterministic runs.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Produces exactly one result per request. Never fails.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult;
}

// ---------------------------------------------------------------------------
// Local engine
// ---------------------------------------------------------------------------

pub struct EngineDeps {
    pub extractor: Arc<dyn SignalExtractor>,
    pub scorer: Arc<dyn Scorer>,
    pub clock: Arc<dyn Clock>,
}

/// The heuristic core: pure apart from reading the injected clock.
pub struct LocalAnalyzer {
    deps: EngineDeps,
}

impl LocalAnalyzer {
    pub fn new_with(deps: EngineDeps) -> Self {
        Self { deps }
    }

    /// Local engine using the markers in `config` and the system clock.
    pub fn from_config(config: &Config) -> Self {
        Self::new_with(EngineDeps {
            extractor: Arc::new(PatternSignalExtractor::new(config.policy.markers.clone())),
            scorer: Arc::new(WeightedScorer),
            clock: Arc::new(SystemClock),
        })
    }

    /// Run the engine as of `now`.
    pub fn analyze_at(&self, request: &AnalysisRequest, now: DateTime<Utc>) -> AnalysisResult {
        let signals = self.deps.extractor.extract(&request.content, now);
        render(&*self.deps.scorer, signals)
    }

    /// Run the engine as of the injected clock.
    pub fn analyze_now(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.analyze_at(request, self.deps.clock.now())
    }
}

impl Default for LocalAnalyzer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[async_trait]
impl Analyzer for LocalAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.analyze_now(request)
    }
}

/// Score a signal set and render the full result.
pub fn render(scorer: &dyn Scorer, signals: SignalSet) -> AnalysisResult {
    let score = scorer.score(&signals);
    AnalysisResult {
        verdict: score.verdict,
        confidence: score.confidence,
        explanation: explain(&signals),
        signals,
        recommended_actions: recommended_actions(),
    }
}

// ---------------------------------------------------------------------------
// Remote-first with local fallback
// ---------------------------------------------------------------------------

/// Tries the remote delegate (if any); on any failure runs the local engine.
pub struct FallbackAnalyzer {
    remote: Option<Arc<dyn RemoteDelegate>>,
    local: LocalAnalyzer,
}

impl FallbackAnalyzer {
    pub fn new(remote: Option<Arc<dyn RemoteDelegate>>, local: LocalAnalyzer) -> Self {
        Self { remote, local }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }
}

#[async_trait]
impl Analyzer for FallbackAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        if let Some(remote) = &self.remote {
            match remote.analyze(request).await {
                Ok(result) if result.is_well_formed() => {
                    log_result(&request_id, request, &result, "remote", start);
                    return result;
                }
                Ok(result) => {
                    tracing::warn!(
                        request_id = %request_id,
                        verdict = %result.verdict,
                        confidence = result.confidence,
                        "remote result is inconsistent, falling back to local engine"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        request_id = %request_id,
                        error = %e,
                        "remote delegate failed, falling back to local engine"
                    );
                }
            }
        }

        let result = self.local.analyze_now(request);
        log_result(&request_id, request, &result, "local", start);
        result
    }
}

fn log_result(
    request_id: &str,
    request: &AnalysisRequest,
    result: &AnalysisResult,
    source: &'static str,
    start: Instant,
) {
    let signals: Vec<String> = result.signals.iter().map(|s| s.to_string()).collect();
    tracing::info!(
        request_id = %request_id,
        content_kind = request.content_kind.as_str(),
        source,
        verdict = %result.verdict,
        confidence = result.confidence,
        signals = ?signals,
        latency_us = start.elapsed().as_micros() as u64,
        "analysis complete"
    );
}

// ---------------------------------------------------------------------------
// Public factory
// ---------------------------------------------------------------------------

/// Build the analyzer a deployment uses: remote-first when `remote` is
/// configured, local-only otherwise.
pub fn build_analyzer(config: &Config) -> FallbackAnalyzer {
    let remote = config.runtime.remote.clone().map(|rc| {
        Arc::new(HttpRemoteDelegate::with_reqwest(rc)) as Arc<dyn RemoteDelegate>
    });
    FallbackAnalyzer::new(remote, LocalAnalyzer::from_config(config))
}
