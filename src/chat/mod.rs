//! Conversational onboarding — the scripted chat that collects a traveler
//! profile and trip, step by step.

pub mod complete;
pub mod draft;
pub mod engine;
pub mod script;
pub mod transcript;
pub mod validate;

pub use engine::{Completion, CompletionState, DialogueEngine, Outcome};
pub use script::{ConversationScript, InputKind, SUGGEST_DESTINATIONS, Step};
pub use transcript::{Entry, Transcript};
pub use validate::DateFault;
