//! Session transcript — append-only chat log with double-emission guard.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One chat message in the transcript.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: Uuid,
    pub text: String,
    pub from_assistant: bool,
    pub at: DateTime<Utc>,
}

/// Ordered, append-only message log for one session.
///
/// Appends are deduplicated against the immediately preceding entry (same
/// text, same role) to suppress accidental double-emission from overlapping
/// timers. Cleared wholesale on restart, never edited in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless it duplicates the previous one.
    /// Returns whether the entry was actually appended.
    pub fn push(&mut self, text: impl Into<String>, from_assistant: bool) -> bool {
        let text = text.into();
        if let Some(last) = self.entries.last() {
            if last.text == text && last.from_assistant == from_assistant {
                return false;
            }
        }
        self.entries.push(Entry {
            id: Uuid::new_v4(),
            text,
            from_assistant,
            at: Utc::now(),
        });
        true
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> bool {
        self.push(text, false)
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> bool {
        self.push(text, true)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wipe the log (session restart).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
