// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Verdict rendering: classification buckets, explanation text and the
// recommended follow-up actions that accompany every result.

use serde::{Deserialize, Serialize};

use crate::signal::{Signal, SignalSet};

/// Confidence at or above which content is classified LikelyReal.
pub const LIKELY_REAL_MIN: u8 = 60;

/// Confidence at or below which content is classified LikelyFake.
pub const LIKELY_FAKE_MAX: u8 = 35;

/// Emitted when no signal contributes an explanation line.
pub const NO_FLAGS_EXPLANATION: &str = "No heuristic red flags were found in the content.";

/// Constant verification checklist attached to every result.
pub const RECOMMENDED_ACTIONS: [&str; 4] = [
    "Cross-check the claim with reputable news outlets and fact-checking organizations.",
    "Search for the exact wording of the claim to see where else it appears.",
    "For images or video, run a reverse image search and inspect the file metadata.",
    "Prefer primary sources such as official reports, studies, or direct statements.",
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Final classification bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    LikelyReal,
    LikelyFake,
    NeedsReview,
}

impl Verdict {
    /// `>= 60` LikelyReal, `<= 35` LikelyFake, otherwise NeedsReview.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= LIKELY_REAL_MIN {
            Verdict::LikelyReal
        } else if confidence <= LIKELY_FAKE_MAX {
            Verdict::LikelyFake
        } else {
            Verdict::NeedsReview
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::LikelyReal => write!(f, "LikelyReal"),
            Verdict::LikelyFake => write!(f, "LikelyFake"),
            Verdict::NeedsReview => write!(f, "NeedsReview"),
        }
    }
}

/// Everything the engine returns for one request. Serializes directly to the
/// wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub confidence: u8,
    pub signals: SignalSet,
    pub explanation: Vec<String>,
    pub recommended_actions: Vec<String>,
}

impl AnalysisResult {
    /// Whether a result (typically one decoded from a remote delegate)
    /// satisfies the local invariants, including the verdict bucket agreeing
    /// with the confidence.
    pub fn is_well_formed(&self) -> bool {
        self.confidence <= 100
            && self.verdict == Verdict::from_confidence(self.confidence)
            && !self.explanation.is_empty()
            && !self.recommended_actions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Fixed sentence for a signal, phrased as a reason to trust or distrust.
pub fn explanation_for(signal: Signal) -> &'static str {
    match signal {
        Signal::Clickbait => {
            "Uses sensationalist language that is common in misleading content."
        }
        Signal::NoSources => {
            "Attributes claims to unnamed sources without linking to any verifiable reference."
        }
        Signal::FabricatedDates => {
            "References a date in the future, which suggests fabricated or speculative claims."
        }
        Signal::ImageManipulated => {
            "Mentions synthetic or altered imagery such as deepfakes or AI-generated media."
        }
        Signal::AuthoritativeSources => {
            "Cites recognized authoritative organizations, which increases credibility."
        }
        Signal::ManyContradictions => {
            "Contains contradictory statements, which undermines its reliability."
        }
        Signal::TooShort => "The content is too short to analyze reliably.",
    }
}

/// One line per present signal in enumeration order; never empty.
pub fn explain(signals: &SignalSet) -> Vec<String> {
    let lines: Vec<String> = signals
        .iter()
        .map(|s| explanation_for(*s).to_string())
        .collect();
    if lines.is_empty() {
        vec![NO_FLAGS_EXPLANATION.to_string()]
    } else {
        lines
    }
}

/// The constant checklist, owned.
pub fn recommended_actions() -> Vec<String> {
    RECOMMENDED_ACTIONS.iter().map(|a| a.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(Verdict::from_confidence(60), Verdict::LikelyReal);
        assert_eq!(Verdict::from_confidence(59), Verdict::NeedsReview);
        assert_eq!(Verdict::from_confidence(36), Verdict::NeedsReview);
        assert_eq!(Verdict::from_confidence(35), Verdict::LikelyFake);
        assert_eq!(Verdict::from_confidence(0), Verdict::LikelyFake);
        assert_eq!(Verdict::from_confidence(100), Verdict::LikelyReal);
    }

    #[test]
    fn empty_signals_get_fallback_sentence() {
        assert_eq!(explain(&SignalSet::new()), vec![NO_FLAGS_EXPLANATION.to_string()]);
    }

    #[test]
    fn explanation_follows_enumeration_order() {
        let signals: SignalSet = [
            Signal::TooShort,
            Signal::ManyContradictions,
            Signal::Clickbait,
            Signal::AuthoritativeSources,
        ]
        .into_iter()
        .collect();
        let lines = explain(&signals);
        assert_eq!(
            lines,
            vec![
                explanation_for(Signal::Clickbait),
                explanation_for(Signal::AuthoritativeSources),
                explanation_for(Signal::ManyContradictions),
                explanation_for(Signal::TooShort),
            ]
        );
    }

    #[test]
    fn every_signal_has_distinct_sentence() {
        let mut seen = std::collections::HashSet::new();
        for s in Signal::ALL {
            let line = explanation_for(s);
            assert!(!line.contains(&s.to_string()), "tag name leaked into {line:?}");
            assert!(seen.insert(line));
        }
    }

    #[test]
    fn recommended_actions_are_constant() {
        let actions = recommended_actions();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions, recommended_actions());
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = AnalysisResult {
            verdict: Verdict::NeedsReview,
            confidence: 50,
            signals: [Signal::TooShort].into_iter().collect(),
            explanation: explain(&[Signal::TooShort].into_iter().collect()),
            recommended_actions: recommended_actions(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["verdict"], "NeedsReview");
        assert_eq!(json["confidence"], 50);
        assert_eq!(json["signals"], serde_json::json!(["TooShort"]));
        assert_eq!(json["recommendedActions"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn well_formed_rejects_out_of_range_or_empty() {
        let good = AnalysisResult {
            verdict: Verdict::LikelyReal,
            confidence: 75,
            signals: SignalSet::new(),
            explanation: vec!["x".into()],
            recommended_actions: recommended_actions(),
        };
        assert!(good.is_well_formed());

        let mut bad = good.clone();
        bad.confidence = 101;
        assert!(!bad.is_well_formed());

        let mut bad = good.clone();
        bad.explanation.clear();
        assert!(!bad.is_well_formed());

        let mut bad = good;
        bad.recommended_actions.clear();
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn well_formed_requires_verdict_matching_confidence() {
        let result = |verdict, confidence| AnalysisResult {
            verdict,
            confidence,
            signals: SignalSet::new(),
            explanation: vec!["x".into()],
            recommended_actions: recommended_actions(),
        };
        assert!(!result(Verdict::LikelyFake, 95).is_well_formed());
        assert!(!result(Verdict::NeedsReview, 60).is_well_formed());
        assert!(!result(Verdict::LikelyReal, 35).is_well_formed());
        assert!(result(Verdict::LikelyReal, 60).is_well_formed());
        assert!(result(Verdict::NeedsReview, 36).is_well_formed());
        assert!(result(Verdict::LikelyFake, 35).is_well_formed());
    }
}
