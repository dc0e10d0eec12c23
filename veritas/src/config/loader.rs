// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use axum::http::HeaderValue;
use sha2::{Digest, Sha256};

use crate::signal::Signal;

use super::defaults::default_markers;
use super::error::ConfigError;
use super::interpolation::resolve_variables;
use super::marker::Marker;
use super::raw;
use super::source::ConfigSource;
use super::types::*;

/// Load and validate a veritas config from the given source.
///
/// Steps:
/// 1. Read raw YAML from source and hash it
/// 2. Parse into raw deserialization types
/// 3. Validate version and numeric bounds
/// 4. Resolve `${VAR}` in remote settings
/// 5. Compile markers: embedded defaults first, then user markers
pub fn load_config(source: &dyn ConfigSource) -> Result<Config, ConfigError> {
    let raw_yaml = source.load()?;
    let contract_hash = compute_hash(&raw_yaml);

    let raw: raw::RawConfig =
        serde_yaml::from_str(&raw_yaml).map_err(|e| ConfigError::Parse {
            origin: source.origin(),
            source: e,
        })?;

    if raw.veritas != "v1" {
        return Err(ConfigError::UnsupportedVersion { found: raw.veritas });
    }

    let mut markers = if raw.use_default_markers != Some(false) {
        default_markers()
    } else {
        MarkerConfig::default()
    };
    markers.extend(build_markers(raw.markers.unwrap_or_default())?);

    let remote = raw.remote.map(build_remote_config).transpose()?;
    let history = build_history_config(raw.history)?;

    Ok(Config {
        policy: PolicyConfig {
            version: raw.veritas,
            markers,
        },
        runtime: RuntimeConfig {
            environment: raw.environment.unwrap_or_default(),
            remote,
            history,
        },
        contract_hash,
    })
}

pub fn compute_hash(raw_yaml: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_yaml.as_bytes());
    let hash = hasher.finalize();
    format!("sha256:{:x}", hash)
}

fn build_markers(raw: raw::RawMarkers) -> Result<MarkerConfig, ConfigError> {
    Ok(MarkerConfig {
        clickbait: Marker::compile_all(Signal::Clickbait, &raw.clickbait)?,
        image_manipulated: Marker::compile_all(Signal::ImageManipulated, &raw.image_manipulated)?,
        authoritative_sources: Marker::compile_all(
            Signal::AuthoritativeSources,
            &raw.authoritative_sources,
        )?,
        many_contradictions: Marker::compile_all(
            Signal::ManyContradictions,
            &raw.many_contradictions,
        )?,
    })
}

fn build_remote_config(raw: raw::RawRemoteConfig) -> Result<RemoteConfig, ConfigError> {
    let url = resolve_variables(&raw.url)?;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidField {
            field: "remote.url",
            reason: format!("must be an http(s) URL, got \"{url}\""),
        });
    }

    let api_key = raw.api_key.as_deref().map(resolve_variables).transpose()?;
    if let Some(key) = &api_key {
        // Sent as `Authorization: Bearer <key>`.
        if key.is_empty() || HeaderValue::from_str(&format!("Bearer {key}")).is_err() {
            return Err(ConfigError::InvalidField {
                field: "remote.api_key",
                reason: "must be non-empty and contain only visible ASCII".to_string(),
            });
        }
    }

    let timeout_ms = raw.timeout_ms.unwrap_or(DEFAULT_REMOTE_TIMEOUT_MS);
    if timeout_ms == 0 {
        return Err(ConfigError::InvalidField {
            field: "remote.timeout_ms",
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(RemoteConfig {
        url,
        api_key,
        timeout_ms,
    })
}

fn build_history_config(
    raw: Option<raw::RawHistoryConfig>,
) -> Result<HistoryConfig, ConfigError> {
    let capacity = raw
        .and_then(|h| h.capacity)
        .unwrap_or(DEFAULT_HISTORY_CAPACITY);
    if capacity == 0 {
        return Err(ConfigError::InvalidField {
            field: "history.capacity",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(HistoryConfig { capacity })
}
