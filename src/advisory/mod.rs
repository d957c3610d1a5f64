//! Advisory collaborator — LLM-backed travel recommendation generation.
//!
//! Each generator builds a prompt from the profile/trip, asks the LLM, and
//! fishes JSON out of the reply. Failures never propagate to the user: a
//! dead or incoherent model degrades to the canned fallback payload for
//! that kind, with provenance recorded on the returned content.

pub mod fallback;
mod llm;
mod parse;
pub mod prompts;

pub use llm::{LlmClient, OpenAiClient};
pub use parse::{ContentSource, GeneratedContent, extract_json_object};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AdvisoryError, Error};
use crate::model::{AdvisoryKind, TravelerProfile, Trip};
use crate::store::TravelStore;

/// One entry of a destination recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSuggestion {
    pub destination: String,
    /// 0–100 fit against the traveler's profile.
    pub match_score: u8,
    pub why_recommended: String,
    pub best_time_to_visit: String,
    pub estimated_budget: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub travel_tips: Vec<String>,
}

/// The five content generators the rest of the system consumes.
#[async_trait]
pub trait Advisory: Send + Sync {
    async fn generate_destinations(
        &self,
        profile: &TravelerProfile,
    ) -> Result<GeneratedContent, AdvisoryError>;

    async fn generate_itinerary(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError>;

    async fn generate_packing(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError>;

    async fn generate_cuisine(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError>;

    async fn generate_accommodation(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError>;
}

/// LLM-backed advisory implementation.
pub struct AdvisoryService {
    llm: Arc<dyn LlmClient>,
}

impl AdvisoryService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Run one generation: prompt the model, parse, fall back on any failure.
    async fn generate(
        &self,
        kind: AdvisoryKind,
        prompt: String,
        fallback: serde_json::Value,
    ) -> Result<GeneratedContent, AdvisoryError> {
        match self.llm.complete(&prompt).await {
            Ok(text) => match extract_json_object(&text) {
                Some(data) => Ok(GeneratedContent::generated(data)),
                None => {
                    tracing::warn!(%kind, "model reply was not parseable JSON, using fallback");
                    Ok(GeneratedContent::fallback(fallback))
                }
            },
            Err(e) => {
                tracing::warn!(%kind, error = %e, "LLM call failed, using fallback");
                Ok(GeneratedContent::fallback(fallback))
            }
        }
    }
}

#[async_trait]
impl Advisory for AdvisoryService {
    async fn generate_destinations(
        &self,
        profile: &TravelerProfile,
    ) -> Result<GeneratedContent, AdvisoryError> {
        self.generate(
            AdvisoryKind::Destinations,
            prompts::destinations(profile),
            fallback::destinations(),
        )
        .await
    }

    async fn generate_itinerary(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError> {
        self.generate(
            AdvisoryKind::Itinerary,
            prompts::itinerary(profile, trip),
            fallback::itinerary(trip),
        )
        .await
    }

    async fn generate_packing(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError> {
        self.generate(
            AdvisoryKind::Packing,
            prompts::packing(profile, trip),
            fallback::packing(),
        )
        .await
    }

    async fn generate_cuisine(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError> {
        self.generate(
            AdvisoryKind::Cuisine,
            prompts::cuisine(profile, trip),
            fallback::cuisine(),
        )
        .await
    }

    async fn generate_accommodation(
        &self,
        profile: &TravelerProfile,
        trip: &Trip,
    ) -> Result<GeneratedContent, AdvisoryError> {
        self.generate(
            AdvisoryKind::Accommodation,
            prompts::accommodation(profile, trip),
            fallback::accommodation(),
        )
        .await
    }
}

/// Deserialize the typed suggestion list out of a destinations payload.
///
/// Malformed or missing entries yield an empty list, which callers treat the
/// same as an advisory failure.
pub fn parse_suggestions(content: &GeneratedContent) -> Vec<DestinationSuggestion> {
    content
        .data
        .get("recommendations")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Outcome of one generator within a `generate_all` run.
#[derive(Debug)]
pub struct RecommendationRun {
    pub kind: AdvisoryKind,
    pub outcome: Result<ContentSource, Error>,
}

/// Generate all four trip-scoped recommendation kinds and persist each one.
///
/// The four generations run concurrently and are joined best-effort: one
/// kind failing (generation or persistence) never aborts its siblings. The
/// caller gets one `RecommendationRun` per kind, in a fixed order.
pub async fn generate_all(
    advisory: &dyn Advisory,
    store: &dyn TravelStore,
    trip_id: Uuid,
) -> Result<Vec<RecommendationRun>, Error> {
    let trip = store.get_trip(trip_id).await?;
    let profile = store.get_profile(trip.profile_id).await?;

    let (itinerary, packing, cuisine, accommodation) = tokio::join!(
        advisory.generate_itinerary(&profile, &trip),
        advisory.generate_packing(&profile, &trip),
        advisory.generate_cuisine(&profile, &trip),
        advisory.generate_accommodation(&profile, &trip),
    );

    let mut runs = Vec::with_capacity(4);
    for (kind, result) in [
        (AdvisoryKind::Itinerary, itinerary),
        (AdvisoryKind::Packing, packing),
        (AdvisoryKind::Cuisine, cuisine),
        (AdvisoryKind::Accommodation, accommodation),
    ] {
        let outcome = match result {
            Ok(content) => {
                let source = content.source;
                match store
                    .update_recommendations(trip_id, kind, content.data)
                    .await
                {
                    Ok(_) => Ok(source),
                    Err(e) => Err(Error::from(e)),
                }
            }
            Err(e) => Err(Error::from(e)),
        };
        if let Err(ref e) = outcome {
            tracing::warn!(%kind, error = %e, "recommendation generation failed");
        }
        runs.push(RecommendationRun { kind, outcome });
    }
    Ok(runs)
}
