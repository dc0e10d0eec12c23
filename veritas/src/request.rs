// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Analysis request types.
//
// Decoding is lenient: a JSON object always produces a request. Missing or
// non-string `content` becomes the empty string, and a missing or unknown
// `contentKind` becomes `Text`.

use serde::{Deserialize, Deserializer, Serialize};

/// What the submitted content represents. The engine treats every kind as
/// plain text; for `Image` the content is a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Url,
    Image,
}

impl ContentKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ContentKind::Text),
            "url" => Some(ContentKind::Url),
            "image" => Some(ContentKind::Image),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Url => "url",
            ContentKind::Image => "image",
        }
    }
}

impl<'de> Deserialize<'de> for ContentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(|v| v.as_str())
            .and_then(ContentKind::parse)
            .unwrap_or_default())
    }
}

/// One piece of content to classify.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub content_kind: ContentKind,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
}

impl AnalysisRequest {
    pub fn new(content_kind: ContentKind, content: impl Into<String>) -> Self {
        Self {
            content_kind,
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ContentKind::Text, content)
    }

    /// Decode a request from a JSON value. Non-object values decode to an
    /// empty text request.
    pub fn from_json(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// First `max_chars` characters of the content, for logs and history.
    pub fn preview(&self, max_chars: usize) -> String {
        self.content.chars().take(max_chars).collect()
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        _ => String::new(),
    })
}
