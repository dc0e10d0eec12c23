// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use crate::signal::Signal;

use super::marker::Marker;
use super::raw::RawMarkers;
use super::types::MarkerConfig;

/// The default marker YAML, embedded at compile time.
const DEFAULT_MARKERS_YAML: &str = include_str!("../../schema/default_markers.yaml");

/// Parse and compile the embedded default markers.
/// Panics on invalid YAML or regex (these are our own patterns).
pub fn default_markers() -> MarkerConfig {
    let raw: RawMarkers =
        serde_yaml::from_str(DEFAULT_MARKERS_YAML).expect("default markers YAML is invalid");

    let compile = |signal: Signal, patterns: &[String]| -> Vec<Marker> {
        Marker::compile_all(signal, patterns)
            .unwrap_or_else(|e| panic!("default marker failed to compile: {e}"))
    };

    MarkerConfig {
        clickbait: compile(Signal::Clickbait, &raw.clickbait),
        image_manipulated: compile(Signal::ImageManipulated, &raw.image_manipulated),
        authoritative_sources: compile(Signal::AuthoritativeSources, &raw.authoritative_sources),
        many_contradictions: compile(Signal::ManyContradictions, &raw.many_contradictions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_compile() {
        let markers = default_markers();
        assert!(!markers.clickbait.is_empty());
        assert!(!markers.image_manipulated.is_empty());
        assert!(!markers.authoritative_sources.is_empty());
        assert!(!markers.many_contradictions.is_empty());
    }

    #[test]
    fn fixed_detectors_have_no_markers() {
        let markers = default_markers();
        assert!(markers.for_signal(Signal::NoSources).is_empty());
        assert!(markers.for_signal(Signal::FabricatedDates).is_empty());
        assert!(markers.for_signal(Signal::TooShort).is_empty());
    }

    #[test]
    fn authority_markers_respect_word_boundaries() {
        let markers = default_markers();
        let hits = |text: &str| {
            markers
                .authoritative_sources
                .iter()
                .any(|p| p.is_match(text))
        };
        assert!(hits("the cdc said"));
        assert!(!hits("abcdcd"));
        assert!(hits("per the bbc."));
    }

    #[test]
    fn every_default_marker_is_tagged_with_its_signal() {
        let markers = default_markers();
        for signal in Signal::ALL {
            assert!(markers.for_signal(signal).iter().all(|m| m.signal() == signal));
        }
    }
}
