// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Raw YAML deserialization types (internal).
//
// Kept apart from the public Config structs: the public types hold compiled
// regexes, and interpolation plus validation happen between the two.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawConfig {
    pub veritas: String,
    pub environment: Option<String>,
    /// If false, skip the embedded default markers. Default: true.
    pub use_default_markers: Option<bool>,
    pub markers: Option<RawMarkers>,
    pub remote: Option<RawRemoteConfig>,
    pub history: Option<RawHistoryConfig>,
}

/// Extra marker regexes per signal. Only the marker-driven signals are
/// accepted; the attribution, URL and date detectors are fixed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMarkers {
    #[serde(default)]
    pub clickbait: Vec<String>,
    #[serde(default)]
    pub image_manipulated: Vec<String>,
    #[serde(default)]
    pub authoritative_sources: Vec<String>,
    #[serde(default)]
    pub many_contradictions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawRemoteConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct RawHistoryConfig {
    pub capacity: Option<usize>,
}
