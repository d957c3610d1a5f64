//! `TravelStore` trait — single async interface to the persistence collaborator.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{AdvisoryKind, ProfileFields, TravelerProfile, Trip, TripFields};

/// Backend-agnostic persistence interface for profiles and trips.
///
/// The production backend is an HTTP client against the travel API; tests
/// run against the in-memory backend.
#[async_trait]
pub trait TravelStore: Send + Sync {
    // ── Profiles ────────────────────────────────────────────────────

    /// Create a traveler profile, returning the persisted record.
    async fn create_profile(&self, fields: &ProfileFields)
    -> Result<TravelerProfile, StoreError>;

    /// Get a profile by ID.
    async fn get_profile(&self, id: Uuid) -> Result<TravelerProfile, StoreError>;

    /// Replace a profile's preference fields.
    async fn update_profile(
        &self,
        id: Uuid,
        fields: &ProfileFields,
    ) -> Result<TravelerProfile, StoreError>;

    /// Delete a profile.
    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError>;

    // ── Trips ───────────────────────────────────────────────────────

    /// Create a trip for an existing profile, returning the persisted record.
    async fn create_trip(&self, fields: &TripFields) -> Result<Trip, StoreError>;

    /// Get a trip (with its recommendations map) by ID.
    async fn get_trip(&self, id: Uuid) -> Result<Trip, StoreError>;

    /// All trips belonging to a profile, most recent first.
    async fn trips_for_profile(&self, profile_id: Uuid) -> Result<Vec<Trip>, StoreError>;

    /// Replace a trip's core fields.
    async fn update_trip(&self, id: Uuid, fields: &TripFields) -> Result<Trip, StoreError>;

    /// Delete a trip.
    async fn delete_trip(&self, id: Uuid) -> Result<(), StoreError>;

    /// Store generated advisory content on one of the trip's slots.
    async fn update_recommendations(
        &self,
        trip_id: Uuid,
        kind: AdvisoryKind,
        data: serde_json::Value,
    ) -> Result<Trip, StoreError>;
}
