// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Scorer: maps a signal set to a bounded confidence and its verdict.

use crate::verdict::Verdict;

use super::{Signal, SignalSet};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Confidence plus the verdict derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Heuristic trust level in [0, 100].
    pub confidence: u8,
    pub verdict: Verdict,
}

/// Computes a score from detected signals.
pub trait Scorer: Send + Sync {
    fn score(&self, signals: &SignalSet) -> Score;
}

// ---------------------------------------------------------------------------
// Default implementation
// ---------------------------------------------------------------------------

/// Fixed additive weights over a baseline, clamped to [0, 100].
pub struct WeightedScorer;

/// Starting confidence before any signal is applied.
pub const BASELINE_CONFIDENCE: i32 = 50;

/// Per-signal confidence delta. Clickbait and TooShort are soft flags: they
/// explain, they do not score.
pub fn weight(signal: Signal) -> i32 {
    match signal {
        Signal::ManyContradictions => -30,
        Signal::AuthoritativeSources => 25,
        Signal::FabricatedDates => -20,
        Signal::NoSources => -15,
        Signal::ImageManipulated => -25,
        Signal::Clickbait | Signal::TooShort => 0,
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, signals: &SignalSet) -> Score {
        let raw = BASELINE_CONFIDENCE + signals.iter().map(|s| weight(*s)).sum::<i32>();
        let confidence = raw.clamp(0, 100) as u8;
        Score {
            confidence,
            verdict: Verdict::from_confidence(confidence),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn set(signals: &[Signal]) -> SignalSet {
        signals.iter().copied().collect()
    }

    #[test]
    fn empty_set_is_baseline() {
        let score = WeightedScorer.score(&SignalSet::new());
        assert_eq!(score.confidence, 50);
        assert_eq!(score.verdict, Verdict::NeedsReview);
    }

    #[test]
    fn too_short_alone_needs_review() {
        let score = WeightedScorer.score(&set(&[Signal::TooShort]));
        assert_eq!(score.confidence, 50);
        assert_eq!(score.verdict, Verdict::NeedsReview);
    }

    #[test]
    fn soft_flags_carry_no_weight() {
        let score = WeightedScorer.score(&set(&[Signal::Clickbait, Signal::TooShort]));
        assert_eq!(score.confidence, 50);
    }

    #[test]
    fn authority_with_unsourced_attribution_is_exactly_sixty() {
        let score = WeightedScorer.score(&set(&[Signal::AuthoritativeSources, Signal::NoSources]));
        // 50 + 25 - 15
        assert_eq!(score.confidence, 60);
        assert_eq!(score.verdict, Verdict::LikelyReal);
    }

    #[test]
    fn no_sources_alone_is_exactly_thirty_five() {
        let score = WeightedScorer.score(&set(&[Signal::NoSources]));
        assert_eq!(score.confidence, 35);
        assert_eq!(score.verdict, Verdict::LikelyFake);
    }

    #[test]
    fn all_negative_signals_clamp_to_zero() {
        let score = WeightedScorer.score(&set(&[
            Signal::ManyContradictions,
            Signal::FabricatedDates,
            Signal::NoSources,
            Signal::ImageManipulated,
            Signal::Clickbait,
        ]));
        // 50 - 30 - 20 - 15 - 25 = -40
        assert_eq!(score.confidence, 0);
        assert_eq!(score.verdict, Verdict::LikelyFake);
    }

    #[test]
    fn every_signal_present_still_clamped() {
        let score = WeightedScorer.score(&Signal::ALL.into_iter().collect());
        assert_eq!(score.confidence, 0);
    }

    #[test]
    fn authority_alone_is_likely_real() {
        let score = WeightedScorer.score(&set(&[Signal::AuthoritativeSources]));
        assert_eq!(score.confidence, 75);
        assert_eq!(score.verdict, Verdict::LikelyReal);
    }

    #[test]
    fn weights_are_commutative() {
        let a = WeightedScorer.score(&set(&[Signal::ImageManipulated, Signal::AuthoritativeSources]));
        let b = WeightedScorer.score(&set(&[Signal::AuthoritativeSources, Signal::ImageManipulated]));
        assert_eq!(a, b);
        assert_eq!(a.confidence, 50);
    }

    #[test]
    fn scoring_is_idempotent() {
        let signals = set(&[Signal::FabricatedDates, Signal::Clickbait]);
        let first = WeightedScorer.score(&signals);
        for _ in 0..5 {
            assert_eq!(WeightedScorer.score(&signals), first);
        }
        assert_eq!(first.confidence, 30);
    }
}
