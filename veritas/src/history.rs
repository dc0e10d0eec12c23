// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Recent-analysis history for the service layer.
//
// A bounded, most-recent-first buffer fed with engine output. The engine
// never reads it.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::request::{AnalysisRequest, ContentKind};
use crate::verdict::AnalysisResult;

/// Characters of content kept per history entry.
pub const PREVIEW_CHARS: usize = 80;

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One past analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub content_kind: ContentKind,
    /// Leading characters of the submitted content.
    pub content_preview: String,
    pub result: AnalysisResult,
}

impl HistoryEntry {
    pub fn new(request: &AnalysisRequest, result: AnalysisResult, analyzed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            analyzed_at,
            content_kind: request.content_kind,
            content_preview: request.preview(PREVIEW_CHARS),
            result,
        }
    }
}

// ---------------------------------------------------------------------------
// HistoryStore trait
// ---------------------------------------------------------------------------

/// Storage for recent analyses. Shared across request handlers.
pub trait HistoryStore: Send + Sync {
    /// Record an entry, evicting the oldest beyond capacity.
    fn push(&self, entry: HistoryEntry);

    /// All stored entries, most recent first.
    fn snapshot(&self) -> Vec<HistoryEntry>;
}

// ---------------------------------------------------------------------------
// InMemoryHistory
// ---------------------------------------------------------------------------

pub struct InMemoryHistory {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl InMemoryHistory {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<HistoryEntry>> {
        // A panic while holding the lock leaves the deque structurally valid.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HistoryStore for InMemoryHistory {
    fn push(&self, entry: HistoryEntry) {
        let mut entries = self.lock();
        entries.push_front(entry);
        entries.truncate(self.capacity);
    }

    fn snapshot(&self) -> Vec<HistoryEntry> {
        self.lock().iter().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LocalAnalyzer;
    use std::sync::Arc;

    fn entry(content: &str) -> HistoryEntry {
        let request = AnalysisRequest::text(content);
        let result = LocalAnalyzer::default().analyze_now(&request);
        HistoryEntry::new(&request, result, Utc::now())
    }

    fn previews(history: &InMemoryHistory) -> Vec<String> {
        history
            .snapshot()
            .into_iter()
            .map(|e| e.content_preview)
            .collect()
    }

    #[test]
    fn most_recent_first() {
        let history = InMemoryHistory::new(10);
        history.push(entry("first"));
        history.push(entry("second"));
        history.push(entry("third"));
        assert_eq!(previews(&history), vec!["third", "second", "first"]);
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let history = InMemoryHistory::new(10);
        for i in 0..15 {
            history.push(entry(&format!("item {i}")));
        }
        assert_eq!(history.len(), 10);
        let stored = previews(&history);
        assert_eq!(stored.first().unwrap(), "item 14");
        assert_eq!(stored.last().unwrap(), "item 5");
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let history = InMemoryHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.push(entry("a"));
        history.push(entry("b"));
        assert_eq!(previews(&history), vec!["b"]);
    }

    #[test]
    fn preview_is_truncated() {
        let long = "x".repeat(500);
        let e = entry(&long);
        assert_eq!(e.content_preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn starts_empty() {
        let history = InMemoryHistory::new(3);
        assert!(history.is_empty());
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn entry_serializes_camel_case() {
        let json = serde_json::to_value(entry("hello world, a claim")).unwrap();
        assert!(json.get("analyzedAt").is_some());
        assert_eq!(json["contentKind"], "text");
        assert_eq!(json["contentPreview"], "hello world, a claim");
        assert_eq!(json["result"]["verdict"], "NeedsReview");
    }

    #[test]
    fn concurrent_pushes_respect_capacity() {
        let history = Arc::new(InMemoryHistory::new(10));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let history = history.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        history.push(entry(&format!("thread {t} item {i}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(history.len(), 10);
    }
}
