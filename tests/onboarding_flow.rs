//! End-to-end onboarding: scripted conversation through to a persisted trip
//! with generated recommendations.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, Local};
use uuid::Uuid;

use triptactix::advisory::{
    Advisory, AdvisoryService, ContentSource, GeneratedContent, LlmClient, fallback, generate_all,
};
use triptactix::chat::validate::format_long_date;
use triptactix::chat::{Completion, CompletionState, DialogueEngine, Outcome};
use triptactix::config::ChatConfig;
use triptactix::error::{LlmError, StoreError};
use triptactix::model::{AdvisoryKind, ProfileFields, TravelerProfile, Trip, TripFields};
use triptactix::store::{MemoryStore, TravelStore};

/// LLM stub that always answers with the same text.
struct CannedLlm(&'static str);

#[async_trait]
impl LlmClient for CannedLlm {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.0.to_string())
    }
}

/// LLM stub that always fails, forcing every generation onto its fallback.
struct DeadLlm;

#[async_trait]
impl LlmClient for DeadLlm {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::RequestFailed("socket hang up".to_string()))
    }
}

/// Store whose trip creation always fails with a transport error.
struct Unreachable;

#[async_trait]
impl TravelStore for Unreachable {
    async fn create_profile(&self, fields: &ProfileFields) -> Result<TravelerProfile, StoreError> {
        Ok(TravelerProfile::from_fields(fields.clone()))
    }
    async fn get_profile(&self, id: Uuid) -> Result<TravelerProfile, StoreError> {
        Err(StoreError::NotFound { entity: "profile", id: id.to_string() })
    }
    async fn update_profile(
        &self,
        id: Uuid,
        _fields: &ProfileFields,
    ) -> Result<TravelerProfile, StoreError> {
        Err(StoreError::NotFound { entity: "profile", id: id.to_string() })
    }
    async fn delete_profile(&self, _id: Uuid) -> Result<(), StoreError> {
        Ok(())
    }
    async fn create_trip(&self, _fields: &TripFields) -> Result<Trip, StoreError> {
        Err(StoreError::Http("connection reset by peer".to_string()))
    }
    async fn get_trip(&self, id: Uuid) -> Result<Trip, StoreError> {
        Err(StoreError::NotFound { entity: "trip", id: id.to_string() })
    }
    async fn trips_for_profile(&self, _profile_id: Uuid) -> Result<Vec<Trip>, StoreError> {
        Ok(Vec::new())
    }
    async fn update_trip(&self, id: Uuid, _fields: &TripFields) -> Result<Trip, StoreError> {
        Err(StoreError::NotFound { entity: "trip", id: id.to_string() })
    }
    async fn delete_trip(&self, _id: Uuid) -> Result<(), StoreError> {
        Ok(())
    }
    async fn update_recommendations(
        &self,
        trip_id: Uuid,
        _kind: AdvisoryKind,
        _data: serde_json::Value,
    ) -> Result<Trip, StoreError> {
        Err(StoreError::NotFound { entity: "trip", id: trip_id.to_string() })
    }
}

fn future_date(days: u64) -> String {
    let date = Local::now()
        .date_naive()
        .checked_add_days(Days::new(days))
        .unwrap();
    format_long_date(date)
}

#[tokio::test]
async fn conversation_produces_profile_trip_and_recommendations() {
    let store = Arc::new(MemoryStore::new());
    let advisory = Arc::new(AdvisoryService::new(Arc::new(CannedLlm(
        r#"{"days": [{"day": 1, "activities": ["Arrive and settle in"]}]}"#,
    ))));
    let engine = DialogueEngine::new(store.clone(), advisory, ChatConfig::instant());

    let greeting = engine.greet().await;
    assert!(greeting.contains("TripTactix"));

    for answer in [
        "Maya",
        "26-35",
        "Cultural & Historical",
        "Mid-range ($100-250/day)",
        "Couple",
        "2",
        "Moderate pace",
    ] {
        assert_eq!(engine.submit(answer).await, Outcome::Advanced, "{answer}");
    }

    assert_eq!(engine.submit("Museums").await, Outcome::AwaitingMore);
    assert_eq!(engine.submit("Food").await, Outcome::AwaitingMore);
    assert_eq!(engine.submit("done").await, Outcome::Advanced);
    assert_eq!(engine.submit("Vegetarian").await, Outcome::AwaitingMore);
    assert_eq!(engine.submit("done").await, Outcome::Advanced);
    assert_eq!(engine.submit(&future_date(60)).await, Outcome::Advanced);
    assert_eq!(engine.submit(&future_date(70)).await, Outcome::Advanced);

    let outcome = engine.submit("Kyoto, Japan").await;
    let Outcome::Completed(Completion::Created { profile_id, trip_id }) = outcome else {
        panic!("expected a created trip, got {outcome:?}");
    };

    let profile = store.get_profile(profile_id).await.unwrap();
    assert_eq!(profile.name, "Maya");
    assert_eq!(profile.interests, ["museums", "food"]);
    assert_eq!(profile.dietary_restrictions, ["vegetarian"]);

    let trip = store.get_trip(trip_id).await.unwrap();
    assert_eq!(trip.destination, "Kyoto, Japan");
    assert_eq!(trip.duration, 10);
    assert_eq!(trip.party_size, 2);
    assert_eq!(trip.profile_id, profile_id);

    // The model answered with valid JSON, so every slot holds generated data.
    for kind in [
        AdvisoryKind::Itinerary,
        AdvisoryKind::Packing,
        AdvisoryKind::Cuisine,
        AdvisoryKind::Accommodation,
    ] {
        let slot = trip.recommendations.slot(kind);
        assert!(slot.generated, "{kind} slot not generated");
        assert!(slot.data.is_some());
    }

    assert!(matches!(
        engine.completion().await,
        CompletionState::Done { .. }
    ));
}

#[tokio::test]
async fn dead_model_degrades_to_fallback_content_for_every_kind() {
    let store = Arc::new(MemoryStore::new());
    let advisory = AdvisoryService::new(Arc::new(DeadLlm));

    let profile = store
        .create_profile(&ProfileFields {
            name: "Sam".to_string(),
            interests: vec!["nature".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    let trip = store
        .create_trip(&TripFields {
            profile_id: profile.id,
            destination: "Reykjavik, Iceland".to_string(),
            start_date: future_date(14),
            end_date: future_date(19),
            duration: 5,
            party_size: 1,
        })
        .await
        .unwrap();

    let runs = generate_all(&advisory, store.as_ref(), trip.id).await.unwrap();
    assert_eq!(runs.len(), 4);
    for run in &runs {
        assert_eq!(run.outcome.as_ref().unwrap(), &ContentSource::Fallback);
    }

    // Fallback payloads were still persisted onto the trip.
    let trip = store.get_trip(trip.id).await.unwrap();
    assert!(trip.recommendations.itinerary.generated);
    assert!(trip.recommendations.accommodation.generated);
}

#[tokio::test]
async fn fallback_suggestions_parse_into_typed_entries() {
    let content = GeneratedContent::fallback(fallback::destinations());
    let suggestions = triptactix::advisory::parse_suggestions(&content);
    assert!(!suggestions.is_empty());
    assert!(suggestions[0].match_score <= 100);
}

#[tokio::test]
async fn failed_completion_is_recoverable_by_retry_against_a_healthy_store() {
    // First engine: trip creation fails, conversation ends in the failed
    // state and offers retry.
    let advisory: Arc<dyn Advisory> = Arc::new(AdvisoryService::new(Arc::new(DeadLlm)));
    let engine = DialogueEngine::new(
        Arc::new(Unreachable),
        advisory.clone(),
        ChatConfig::instant(),
    );

    engine.greet().await;
    for answer in [
        "Ana",
        "36-50",
        "Mix of Everything",
        "Budget ($100/day)",
        "Solo Travel",
        "1",
        "Relaxed pace",
        "done",
        "None",
    ] {
        engine.submit(answer).await;
    }
    engine.submit(&future_date(30)).await;
    engine.submit(&future_date(33)).await;

    assert_eq!(
        engine.submit("Porto, Portugal").await,
        Outcome::Completed(Completion::Failed)
    );
    assert_eq!(engine.completion().await, CompletionState::Failed);
    assert_eq!(engine.quick_replies().await, ["Retry", "Restart"]);

    // Retry against the same broken store fails again, without corrupting
    // the session.
    assert_eq!(
        engine.submit("retry").await,
        Outcome::Retried(Completion::Failed)
    );
    assert_eq!(engine.completion().await, CompletionState::Failed);
}
