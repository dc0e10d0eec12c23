// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::signal::Signal;

use super::error::ConfigError;

/// A compiled detection marker for one marker-driven signal.
///
/// Markers are matched case-insensitively. A marker that is blank or that
/// matches empty text would fire on every submission and is rejected.
#[derive(Clone)]
pub struct Marker {
    signal: Signal,
    pattern: String,
    regex: Regex,
}

impl Marker {
    pub fn compile(signal: Signal, pattern: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidMarker {
            signal,
            pattern: pattern.to_string(),
            reason,
        };

        if pattern.trim().is_empty() {
            return Err(invalid("marker is blank".to_string()));
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| invalid(e.to_string()))?;

        if regex.is_match("") {
            return Err(invalid("marker matches empty text".to_string()));
        }

        Ok(Self {
            signal,
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Compile every pattern for `signal`, stopping at the first bad one.
    pub fn compile_all(signal: Signal, patterns: &[String]) -> Result<Vec<Self>, ConfigError> {
        patterns.iter().map(|p| Self::compile(signal, p)).collect()
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker({}: {:?})", self.signal, self.pattern)
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.signal == other.signal && self.pattern == other.pattern
    }
}
