// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use crate::signal::Signal;

/// Why a veritas config could not be loaded. Every variant names where the
/// problem is so startup logs point at the offending file or key.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config from {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },

    #[error("config from {origin} is not valid veritas YAML: {source}")]
    Parse {
        origin: String,
        source: serde_yaml::Error,
    },

    #[error("unsupported config version \"{found}\", expected \"v1\"")]
    UnsupportedVersion { found: String },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("invalid {signal} marker \"{pattern}\": {reason}")]
    InvalidMarker {
        signal: Signal,
        pattern: String,
        reason: String,
    },

    #[error("undefined variable ${{{name}}} in config (not set in environment)")]
    UndefinedVariable { name: String },
}
