//! The dialogue engine — drives one onboarding session through the script.
//!
//! All state for a session lives behind a single async mutex. `submit` takes
//! the lock with `try_lock` and holds it for the whole turn, including the
//! pacing delays, so a second submission arriving mid-turn is dropped
//! (`Outcome::Ignored`) rather than queued. Every conversational failure is
//! an `Outcome`, never an `Err`; the engine only speaks through the
//! transcript.

use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::advisory::{Advisory, DestinationSuggestion, parse_suggestions};
use crate::chat::complete::{
    RETRY_INSTRUCTION, build_profile, build_trip, classify_failure, failure_message,
    provisional_profile,
};
use crate::chat::draft::{Draft, FieldValue};
use crate::chat::script::{
    ConversationScript, InputKind, SUGGEST_DESTINATIONS, fields, interpolate, multi_choice_token,
    single_choice_token,
};
use crate::chat::transcript::{Entry, Transcript};
use crate::chat::validate::{DateFault, clean_text, correct_integer, validate_date};
use crate::config::ChatConfig;
use crate::store::TravelStore;

const MALFORMED_DATE_MSG: &str = "Please enter the date in the format 'Month DD, YYYY' (for example, 'August 25, 2025').";
const INVALID_DATE_MSG: &str =
    "That doesn't look like a real calendar date. Please double-check and try again (for example, 'August 25, 2025').";
const PAST_DATE_MSG: &str = "That date is in the past. Please pick a date from today onwards.";
const SUGGESTIONS_UNAVAILABLE_MSG: &str =
    "Sorry, I couldn't get destination suggestions right now. Please type your destination manually.";

/// Where the session stands with respect to persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionState {
    /// Script not exhausted yet, or exhausted but not attempted.
    #[default]
    Pending,
    /// The last completion attempt failed; `retry` is accepted.
    Failed,
    /// Profile and trip are persisted.
    Done { profile_id: Uuid, trip_id: Uuid },
}

/// Result of one completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Created { profile_id: Uuid, trip_id: Uuid },
    Failed,
}

/// What one submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Answer accepted, moved to the next step (or greeted on restart).
    Advanced,
    /// Multi-choice toggle registered; still on the same step.
    AwaitingMore,
    /// Date reply rejected; still on the same step.
    Rejected(DateFault),
    /// Destination suggestions were generated and offered.
    SuggestionsOffered(usize),
    /// The suggestion side flow failed; the user was asked to type manually.
    SuggestionsUnavailable,
    /// The script is exhausted and completion ran.
    Completed(Completion),
    /// A failed completion was re-attempted via `retry`.
    Retried(Completion),
    /// Session wiped back to the greeting.
    Restarted,
    /// Dropped: another submission was in flight, the session is already
    /// done, or there was nothing to act on.
    Ignored,
}

#[derive(Debug, Default)]
struct ChatSession {
    transcript: Transcript,
    draft: Draft,
    cursor: usize,
    completion: CompletionState,
    suggestions: Vec<DestinationSuggestion>,
}

impl ChatSession {
    fn reset(&mut self) {
        self.transcript.clear();
        self.draft.clear();
        self.cursor = 0;
        self.completion = CompletionState::Pending;
        self.suggestions.clear();
    }
}

/// One onboarding conversation, from greeting to persisted trip.
pub struct DialogueEngine {
    script: ConversationScript,
    store: Arc<dyn TravelStore>,
    advisory: Arc<dyn Advisory>,
    config: ChatConfig,
    session: Mutex<ChatSession>,
}

impl DialogueEngine {
    pub fn new(
        store: Arc<dyn TravelStore>,
        advisory: Arc<dyn Advisory>,
        config: ChatConfig,
    ) -> Self {
        Self {
            script: ConversationScript::default(),
            store,
            advisory,
            config,
            session: Mutex::new(ChatSession::default()),
        }
    }

    /// Open the conversation: emit the first prompt into the transcript.
    pub async fn greet(&self) -> String {
        let mut session = self.session.lock().await;
        self.emit_prompt(&mut session)
    }

    /// Process one user submission.
    ///
    /// Holds the session for the entire turn; a concurrent call gets
    /// `Outcome::Ignored` instead of waiting.
    pub async fn submit(&self, input: &str) -> Outcome {
        let mut session = match self.session.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::debug!("submission dropped, another turn is in flight");
                return Outcome::Ignored;
            }
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Outcome::Ignored;
        }

        if trimmed.eq_ignore_ascii_case("restart") {
            session.reset();
            self.emit_prompt(&mut session);
            return Outcome::Restarted;
        }

        match session.completion {
            CompletionState::Done { .. } => return Outcome::Ignored,
            CompletionState::Failed if session.cursor >= self.script.len() => {
                if trimmed.eq_ignore_ascii_case("retry") {
                    session.transcript.push_user(trimmed);
                    self.pace().await;
                    let result = self.complete(&mut session).await;
                    return Outcome::Retried(result);
                }
                // Only retry/restart make sense here.
                return Outcome::Ignored;
            }
            _ => {}
        }

        let Some(step) = self.script.step(session.cursor) else {
            return Outcome::Ignored;
        };

        match step.kind {
            InputKind::MultiChoice => {
                let field = step.field;
                if trimmed.eq_ignore_ascii_case("done") {
                    // "done" is a control word, not an answer; keep it out
                    // of the transcript.
                    return self.advance(&mut session).await;
                }
                session.transcript.push_user(trimmed);
                if trimmed == "None" || trimmed.eq_ignore_ascii_case("skip") {
                    session.draft.clear_list(field);
                    return self.advance(&mut session).await;
                }
                session.draft.toggle(field, multi_choice_token(trimmed));
                Outcome::AwaitingMore
            }
            InputKind::Date => {
                let field = step.field;
                session.transcript.push_user(trimmed);
                match validate_date(trimmed) {
                    Ok(date) => {
                        session.draft.set_text(field, date);
                        self.advance(&mut session).await
                    }
                    Err(fault) => {
                        let message = match fault {
                            DateFault::Malformed => MALFORMED_DATE_MSG,
                            DateFault::Invalid => INVALID_DATE_MSG,
                            DateFault::Past => PAST_DATE_MSG,
                        };
                        self.pace().await;
                        session.transcript.push_assistant(message);
                        Outcome::Rejected(fault)
                    }
                }
            }
            InputKind::Integer => {
                let field = step.field;
                session.transcript.push_user(trimmed);
                let corrected = correct_integer(trimmed);
                if corrected.to_string() != trimmed {
                    session.transcript.push_assistant(format!(
                        "I'll plan for {corrected} travelers (group sizes go from 1 to 20)."
                    ));
                }
                session.draft.set(field, FieldValue::Number(corrected));
                self.advance(&mut session).await
            }
            InputKind::SingleChoice => {
                let field = step.field;
                session.transcript.push_user(trimmed);
                match single_choice_token(trimmed) {
                    Some(token) => session.draft.set_text(field, token),
                    None => session.draft.set(field, FieldValue::Empty),
                }
                self.advance(&mut session).await
            }
            InputKind::FreeText => {
                let field = step.field;
                session.transcript.push_user(trimmed);
                if field == fields::DESTINATION && trimmed == SUGGEST_DESTINATIONS {
                    return self.offer_suggestions(&mut session).await;
                }
                session.draft.set_text(field, clean_text(trimmed));
                self.advance(&mut session).await
            }
        }
    }

    /// Move past the current step: emit the next prompt, or complete.
    async fn advance(&self, session: &mut ChatSession) -> Outcome {
        session.cursor += 1;
        if session.cursor < self.script.len() {
            self.pace().await;
            self.emit_prompt(session);
            Outcome::Advanced
        } else {
            self.pace().await;
            Outcome::Completed(self.complete(session).await)
        }
    }

    /// Persist profile and trip from the draft, then kick off the
    /// recommendation generators best-effort.
    async fn complete(&self, session: &mut ChatSession) -> Completion {
        let profile_fields = build_profile(&session.draft);
        let result = async {
            let profile = self.store.create_profile(&profile_fields).await?;
            let trip_fields = build_trip(&session.draft, profile.id);
            let trip = self.store.create_trip(&trip_fields).await?;
            Ok::<_, crate::error::StoreError>((profile, trip))
        }
        .await;

        match result {
            Ok((profile, trip)) => {
                if let Err(e) =
                    crate::advisory::generate_all(self.advisory.as_ref(), self.store.as_ref(), trip.id)
                        .await
                {
                    tracing::warn!(error = %e, trip_id = %trip.id, "recommendation run failed");
                }
                session.transcript.push_assistant(format!(
                    "Perfect! 🎉 I've got everything I need to create your personalized trip to {}. Setting up your profile and trip plan now...",
                    trip.destination
                ));
                session.completion = CompletionState::Done {
                    profile_id: profile.id,
                    trip_id: trip.id,
                };
                tracing::info!(profile_id = %profile.id, trip_id = %trip.id, "trip created");
                Completion::Created {
                    profile_id: profile.id,
                    trip_id: trip.id,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "trip completion failed");
                let flavor = classify_failure(&e.to_string());
                session.transcript.push_assistant(failure_message(flavor));
                session.transcript.push_assistant(RETRY_INSTRUCTION);
                session.completion = CompletionState::Failed;
                Completion::Failed
            }
        }
    }

    /// Destination-suggestion side flow. Builds a provisional profile from
    /// the answers so far, asks the advisory for destinations, and offers
    /// them without advancing the script.
    async fn offer_suggestions(&self, session: &mut ChatSession) -> Outcome {
        self.pace().await;
        session
            .transcript
            .push_assistant("Let me find some destinations you'd love! One moment...");

        let provisional = provisional_profile(&session.draft);
        let content = match self.store.create_profile(&provisional).await {
            Ok(profile) => self.advisory.generate_destinations(&profile).await,
            Err(e) => {
                tracing::warn!(error = %e, "provisional profile creation failed");
                session.transcript.push_assistant(SUGGESTIONS_UNAVAILABLE_MSG);
                return Outcome::SuggestionsUnavailable;
            }
        };

        let suggestions = match content {
            Ok(content) => parse_suggestions(&content),
            Err(e) => {
                tracing::warn!(error = %e, "destination suggestion generation failed");
                Vec::new()
            }
        };
        if suggestions.is_empty() {
            session.transcript.push_assistant(SUGGESTIONS_UNAVAILABLE_MSG);
            return Outcome::SuggestionsUnavailable;
        }

        let mut lines = vec!["Here are some destinations I think would suit you:".to_string()];
        for (i, s) in suggestions.iter().enumerate() {
            lines.push(format!(
                "{}. {} ({}% match) — {}",
                i + 1,
                s.destination,
                s.match_score,
                s.why_recommended
            ));
        }
        lines.push("Pick one, or type any destination you like.".to_string());
        self.pace().await;
        session.transcript.push_assistant(lines.join("\n"));

        let count = suggestions.len();
        session.suggestions = suggestions;
        Outcome::SuggestionsOffered(count)
    }

    /// Append the current step's interpolated prompt to the transcript.
    fn emit_prompt(&self, session: &mut ChatSession) -> String {
        let prompt = match self.script.step(session.cursor) {
            Some(step) => interpolate(step.prompt, &session.draft),
            None => String::new(),
        };
        if !prompt.is_empty() {
            session.transcript.push_assistant(prompt.clone());
        }
        prompt
    }

    async fn pace(&self) {
        tokio::time::sleep(self.config.pre_typing_delay).await;
        tokio::time::sleep(self.config.typing_delay).await;
    }

    // ── Read-side accessors ─────────────────────────────────────────

    /// Snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<Entry> {
        self.session.lock().await.transcript.entries().to_vec()
    }

    /// The current step's prompt, interpolated. `None` once the script is
    /// exhausted.
    pub async fn current_prompt(&self) -> Option<String> {
        let session = self.session.lock().await;
        self.script
            .step(session.cursor)
            .map(|step| interpolate(step.prompt, &session.draft))
    }

    /// Quick replies to offer for the current state.
    ///
    /// Multi-choice steps gain a `Done` chip once something is selected;
    /// a failed completion offers `Retry` and `Restart`.
    pub async fn quick_replies(&self) -> Vec<String> {
        let session = self.session.lock().await;
        if session.completion == CompletionState::Failed {
            return vec!["Retry".to_string(), "Restart".to_string()];
        }
        let Some(step) = self.script.step(session.cursor) else {
            return Vec::new();
        };
        let mut replies: Vec<String> = step.quick_replies.iter().map(|s| s.to_string()).collect();
        if step.kind == InputKind::MultiChoice
            && session
                .draft
                .list(step.field)
                .is_some_and(|items| !items.is_empty())
        {
            replies.push("Done".to_string());
        }
        replies
    }

    /// Input placeholder text for the current step.
    pub async fn placeholder_hint(&self) -> &'static str {
        let session = self.session.lock().await;
        match self.script.step(session.cursor).map(|s| s.kind) {
            Some(InputKind::Date) => "Month DD, YYYY (e.g., August 25, 2025)",
            Some(InputKind::Integer) => "Number of travelers",
            _ => "Type your message...",
        }
    }

    /// The destination suggestions from the last side-flow run, if any.
    pub async fn suggestions(&self) -> Vec<DestinationSuggestion> {
        self.session.lock().await.suggestions.clone()
    }

    /// Where the session stands with respect to persistence.
    pub async fn completion(&self) -> CompletionState {
        self.session.lock().await.completion
    }
}
