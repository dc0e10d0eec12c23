// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use crate::signal::Signal;

use super::defaults::default_markers;
use super::marker::Marker;

/// Default number of analyses the service keeps for `/v1/history`.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Default remote delegate timeout.
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 2000;

// ---------------------------------------------------------------------------
// Top-level config (policy + runtime)
// ---------------------------------------------------------------------------

/// Parsed and validated veritas config.
#[derive(Debug)]
pub struct Config {
    /// Detection policy: changes here change classifier behavior.
    pub policy: PolicyConfig,
    /// Deployment settings: remote delegate, history, environment label.
    pub runtime: RuntimeConfig,
    /// SHA256 of the raw YAML: "sha256:{hex}". Logged at startup.
    pub contract_hash: String,
}

impl Default for Config {
    /// Built-in configuration: embedded markers, no remote delegate.
    fn default() -> Self {
        Self {
            policy: PolicyConfig {
                version: "v1".to_string(),
                markers: default_markers(),
            },
            runtime: RuntimeConfig::default(),
            contract_hash: "builtin".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct PolicyConfig {
    /// Config version. Always "v1".
    pub version: String,
    pub markers: MarkerConfig,
}

/// Compiled marker patterns for the marker-driven signals.
#[derive(Debug, Clone, Default)]
pub struct MarkerConfig {
    pub clickbait: Vec<Marker>,
    pub image_manipulated: Vec<Marker>,
    pub authoritative_sources: Vec<Marker>,
    pub many_contradictions: Vec<Marker>,
}

impl MarkerConfig {
    /// Markers for a signal. Empty for signals with fixed detectors.
    pub fn for_signal(&self, signal: Signal) -> &[Marker] {
        match signal {
            Signal::Clickbait => &self.clickbait,
            Signal::ImageManipulated => &self.image_manipulated,
            Signal::AuthoritativeSources => &self.authoritative_sources,
            Signal::ManyContradictions => &self.many_contradictions,
            Signal::NoSources | Signal::FabricatedDates | Signal::TooShort => &[],
        }
    }

    /// Append another set of markers after this one's.
    pub fn extend(&mut self, other: MarkerConfig) {
        self.clickbait.extend(other.clickbait);
        self.image_manipulated.extend(other.image_manipulated);
        self.authoritative_sources.extend(other.authoritative_sources);
        self.many_contradictions.extend(other.many_contradictions);
    }

    pub fn len(&self) -> usize {
        self.clickbait.len()
            + self.image_manipulated.len()
            + self.authoritative_sources.len()
            + self.many_contradictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RuntimeConfig {
    /// Environment label (e.g. "staging", "production").
    pub environment: String,
    /// Remote scoring service tried before the local engine. None = local only.
    pub remote: Option<RemoteConfig>,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Full URL of the remote analyze endpoint, variables resolved.
    pub url: String,
    /// Sent as a bearer token when present.
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}
