//! Best-effort JSON extraction from free-text model replies.
//!
//! Models are asked for pure JSON but routinely wrap it in prose or code
//! fences. We fish out the outermost `{...}` span and try to parse that;
//! anything unparseable degrades to the per-kind fallback payload upstream.

use serde::Serialize;

/// Where a generated payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// Parsed out of a live model response.
    Generated,
    /// Canned fallback — the model was unreachable or unparseable.
    Fallback,
}

/// An advisory payload together with its provenance.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub data: serde_json::Value,
    pub source: ContentSource,
}

impl GeneratedContent {
    pub fn generated(data: serde_json::Value) -> Self {
        Self {
            data,
            source: ContentSource::Generated,
        }
    }

    pub fn fallback(data: serde_json::Value) -> Self {
        Self {
            data,
            source: ContentSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }
}

/// Extract the outermost `{...}` span from `text` and parse it as JSON.
///
/// Returns `None` when there is no brace pair or the span is not valid JSON.
pub fn extract_json_object(text: &str) -> Option<serde_json::Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
