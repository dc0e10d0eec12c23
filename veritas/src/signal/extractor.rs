// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Signal extraction: turns raw content into a set of tagged signals.
//
// Every check runs unconditionally and independently. The only input besides
// the content is the analysis instant, which FabricatedDates compares against.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::Regex;

use crate::config::{default_markers, Marker, MarkerConfig};

use super::{Signal, SignalSet};

/// Content shorter than this (trimmed, in characters) is flagged TooShort.
pub const MIN_CONTENT_CHARS: usize = 10;

/// The attribution phrase behind NoSources. Deliberately literal.
pub const ATTRIBUTION_PHRASE: &str = "according to our sources";

const URL_PATTERN: &str = r"(?:https?://|www\.)\S";
// ASCII digits only. Neighbours are checked separately so dates inside
// filenames (`img_2031-01-01.png`) and timestamps (`2031-01-01t09:00`) count.
const ISO_DATE_PATTERN: &str = r"([0-9]{4})-([0-9]{2})-([0-9]{2})";

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Derives signals from submitted content.
pub trait SignalExtractor: Send + Sync {
    /// Extract signals from `content` as of `now`.
    fn extract(&self, content: &str, now: DateTime<Utc>) -> SignalSet;
}

// ---------------------------------------------------------------------------
// Default implementation
// ---------------------------------------------------------------------------

/// Marker-driven extractor. Clickbait, ImageManipulated, AuthoritativeSources
/// and ManyContradictions come from configurable markers; the remaining
/// detectors are fixed.
pub struct PatternSignalExtractor {
    markers: MarkerConfig,
    url: Regex,
    iso_date: Regex,
}

impl PatternSignalExtractor {
    pub fn new(markers: MarkerConfig) -> Self {
        Self {
            markers,
            url: Regex::new(URL_PATTERN).expect("URL pattern is valid"),
            iso_date: Regex::new(ISO_DATE_PATTERN).expect("ISO date pattern is valid"),
        }
    }

    /// Extractor over the embedded default markers.
    pub fn with_defaults() -> Self {
        Self::new(default_markers())
    }

    /// NoSources predicate: attribution phrase present, no URL anywhere.
    pub fn has_unsourced_attribution(&self, folded: &str) -> bool {
        folded.contains(ATTRIBUTION_PHRASE) && !self.url.is_match(folded)
    }

    /// FabricatedDates predicate: some valid `YYYY-MM-DD` token falls
    /// strictly after `now`, taking the date at 00:00 UTC. A token must not
    /// be flanked by further ASCII digits.
    pub fn has_future_date(&self, folded: &str, now: DateTime<Utc>) -> bool {
        let bytes = folded.as_bytes();
        self.iso_date.captures_iter(folded).any(|caps| {
            let Some(token) = caps.get(0) else {
                return false;
            };
            let (start, end) = (token.start(), token.end());
            let digit_before = start > 0 && bytes[start - 1].is_ascii_digit();
            let digit_after = bytes.get(end).is_some_and(u8::is_ascii_digit);
            if digit_before || digit_after {
                return false;
            }
            let (Ok(y), Ok(m), Ok(d)) = (
                caps[1].parse::<i32>(),
                caps[2].parse::<u32>(),
                caps[3].parse::<u32>(),
            ) else {
                return false;
            };
            NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| Utc.from_utc_datetime(&midnight) > now)
                .unwrap_or(false)
        })
    }

    fn marker_hit(&self, signal: Signal, folded: &str) -> bool {
        matches_any(self.markers.for_signal(signal), folded)
    }
}

impl Default for PatternSignalExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SignalExtractor for PatternSignalExtractor {
    fn extract(&self, content: &str, now: DateTime<Utc>) -> SignalSet {
        let folded = content.to_lowercase();
        let mut signals = SignalSet::new();

        if self.marker_hit(Signal::Clickbait, &folded) {
            signals.insert(Signal::Clickbait);
        }
        if self.has_unsourced_attribution(&folded) {
            signals.insert(Signal::NoSources);
        }
        if self.has_future_date(&folded, now) {
            signals.insert(Signal::FabricatedDates);
        }
        if self.marker_hit(Signal::ImageManipulated, &folded) {
            signals.insert(Signal::ImageManipulated);
        }
        if self.marker_hit(Signal::AuthoritativeSources, &folded) {
            signals.insert(Signal::AuthoritativeSources);
        }
        if self.marker_hit(Signal::ManyContradictions, &folded) {
            signals.insert(Signal::ManyContradictions);
        }
        if is_too_short(content) {
            signals.insert(Signal::TooShort);
        }

        signals
    }
}

/// TooShort predicate.
pub fn is_too_short(content: &str) -> bool {
    content.trim().chars().count() < MIN_CONTENT_CHARS
}

/// True if any marker matches the (already case-folded) text.
pub fn matches_any(markers: &[Marker], folded: &str) -> bool {
    markers.iter().any(|m| m.is_match(folded))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
