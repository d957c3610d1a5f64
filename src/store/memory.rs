//! In-memory travel store — used by tests and offline runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{AdvisoryKind, ProfileFields, TravelerProfile, Trip, TripFields};
use crate::store::TravelStore;

#[derive(Default)]
struct Inner {
    profiles: HashMap<Uuid, TravelerProfile>,
    trips: HashMap<Uuid, Trip>,
}

/// Travel store holding everything in process memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TravelStore for MemoryStore {
    async fn create_profile(
        &self,
        fields: &ProfileFields,
    ) -> Result<TravelerProfile, StoreError> {
        let profile = TravelerProfile::from_fields(fields.clone());
        let mut inner = self.inner.write().await;
        inner.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn get_profile(&self, id: Uuid) -> Result<TravelerProfile, StoreError> {
        let inner = self.inner.read().await;
        inner
            .profiles
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "profile",
                id: id.to_string(),
            })
    }

    async fn update_profile(
        &self,
        id: Uuid,
        fields: &ProfileFields,
    ) -> Result<TravelerProfile, StoreError> {
        let mut inner = self.inner.write().await;
        let profile = inner
            .profiles
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "profile",
                id: id.to_string(),
            })?;
        let mut updated = TravelerProfile::from_fields(fields.clone());
        updated.id = profile.id;
        updated.created_at = profile.created_at;
        updated.updated_at = Utc::now();
        *profile = updated.clone();
        Ok(updated)
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .profiles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                entity: "profile",
                id: id.to_string(),
            })
    }

    async fn create_trip(&self, fields: &TripFields) -> Result<Trip, StoreError> {
        let mut inner = self.inner.write().await;
        // Trip creation requires an existing profile, like the real API.
        if !inner.profiles.contains_key(&fields.profile_id) {
            return Err(StoreError::NotFound {
                entity: "profile",
                id: fields.profile_id.to_string(),
            });
        }
        let trip = Trip::from_fields(fields.clone());
        inner.trips.insert(trip.id, trip.clone());
        Ok(trip)
    }

    async fn get_trip(&self, id: Uuid) -> Result<Trip, StoreError> {
        let inner = self.inner.read().await;
        inner
            .trips
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "trip",
                id: id.to_string(),
            })
    }

    async fn trips_for_profile(&self, profile_id: Uuid) -> Result<Vec<Trip>, StoreError> {
        let inner = self.inner.read().await;
        let mut trips: Vec<Trip> = inner
            .trips
            .values()
            .filter(|t| t.profile_id == profile_id)
            .cloned()
            .collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }

    async fn update_trip(&self, id: Uuid, fields: &TripFields) -> Result<Trip, StoreError> {
        let mut inner = self.inner.write().await;
        let trip = inner.trips.get_mut(&id).ok_or_else(|| StoreError::NotFound {
            entity: "trip",
            id: id.to_string(),
        })?;
        trip.destination = fields.destination.clone();
        trip.start_date = fields.start_date.clone();
        trip.end_date = fields.end_date.clone();
        trip.duration = fields.duration;
        trip.party_size = fields.party_size;
        trip.updated_at = Utc::now();
        Ok(trip.clone())
    }

    async fn delete_trip(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .trips
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                entity: "trip",
                id: id.to_string(),
            })
    }

    async fn update_recommendations(
        &self,
        trip_id: Uuid,
        kind: AdvisoryKind,
        data: serde_json::Value,
    ) -> Result<Trip, StoreError> {
        let mut inner = self.inner.write().await;
        let trip = inner
            .trips
            .get_mut(&trip_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "trip",
                id: trip_id.to_string(),
            })?;
        trip.recommendations.slot_mut(kind).fill(data);
        trip.updated_at = Utc::now();
        Ok(trip.clone())
    }
}
