// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Signal types for the verdict renderer.
//
// The extractor emits Signals (tagged observations over content). The scorer
// maps them to a bounded confidence, and the verdict module renders the
// confidence plus signals into a classification and explanation.

pub mod extractor;
pub mod scorer;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// A discrete pattern detected in submitted content.
///
/// Declaration order is the explanation order: `Ord` is derived, so a
/// [`SignalSet`] always iterates Clickbait first and TooShort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Signal {
    Clickbait,
    NoSources,
    FabricatedDates,
    ImageManipulated,
    AuthoritativeSources,
    ManyContradictions,
    TooShort,
}

/// Ordered set of detected signals. A set, not a multiset.
pub type SignalSet = BTreeSet<Signal>;

impl Signal {
    /// Every signal, in explanation order.
    pub const ALL: [Signal; 7] = [
        Signal::Clickbait,
        Signal::NoSources,
        Signal::FabricatedDates,
        Signal::ImageManipulated,
        Signal::AuthoritativeSources,
        Signal::ManyContradictions,
        Signal::TooShort,
    ];

    /// Config key used for per-signal marker overrides.
    pub fn config_key(&self) -> &'static str {
        match self {
            Signal::Clickbait => "clickbait",
            Signal::NoSources => "no_sources",
            Signal::FabricatedDates => "fabricated_dates",
            Signal::ImageManipulated => "image_manipulated",
            Signal::AuthoritativeSources => "authoritative_sources",
            Signal::ManyContradictions => "many_contradictions",
            Signal::TooShort => "too_short",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Signal::Clickbait => "Clickbait",
            Signal::NoSources => "NoSources",
            Signal::FabricatedDates => "FabricatedDates",
            Signal::ImageManipulated => "ImageManipulated",
            Signal::AuthoritativeSources => "AuthoritativeSources",
            Signal::ManyContradictions => "ManyContradictions",
            Signal::TooShort => "TooShort",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
