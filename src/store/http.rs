//! HTTP travel store — reqwest client against the travel REST API.
//!
//! Every endpoint answers with the standard envelope
//! `{ success: bool, message?, user?/trip?/trips? }`. A transport failure
//! becomes `StoreError::Http`; `success: false` becomes `StoreError::Service`
//! carrying the upstream message verbatim.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::{AdvisoryKind, ProfileFields, TravelerProfile, Trip, TripFields};
use crate::store::TravelStore;

/// Travel store backed by the remote persistence API.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

/// Standard response envelope for all travel API endpoints.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    user: Option<TravelerProfile>,
    #[serde(default)]
    trip: Option<Trip>,
    #[serde(default)]
    trips: Option<Vec<Trip>>,
}

impl Envelope {
    /// Convert a `success: false` envelope into a service error.
    fn check(self) -> Result<Self, StoreError> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "unknown API error".to_string());
            Err(StoreError::Service { message })
        }
    }

    fn into_profile(self) -> Result<TravelerProfile, StoreError> {
        self.check()?
            .user
            .ok_or_else(|| StoreError::Decode("envelope missing `user`".to_string()))
    }

    fn into_trip(self) -> Result<Trip, StoreError> {
        self.check()?
            .trip
            .ok_or_else(|| StoreError::Decode("envelope missing `trip`".to_string()))
    }
}

impl HttpStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode the standard envelope.
    async fn envelope(&self, request: reqwest::RequestBuilder) -> Result<Envelope, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;
        let status = response.status();
        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(format!("{status}: {e}")))?;
        Ok(envelope)
    }
}

#[async_trait]
impl TravelStore for HttpStore {
    async fn create_profile(
        &self,
        fields: &ProfileFields,
    ) -> Result<TravelerProfile, StoreError> {
        self.envelope(self.client.post(self.url("/users")).json(fields))
            .await?
            .into_profile()
    }

    async fn get_profile(&self, id: Uuid) -> Result<TravelerProfile, StoreError> {
        self.envelope(self.client.get(self.url(&format!("/users/{id}"))))
            .await?
            .into_profile()
    }

    async fn update_profile(
        &self,
        id: Uuid,
        fields: &ProfileFields,
    ) -> Result<TravelerProfile, StoreError> {
        self.envelope(self.client.put(self.url(&format!("/users/{id}"))).json(fields))
            .await?
            .into_profile()
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError> {
        self.envelope(self.client.delete(self.url(&format!("/users/{id}"))))
            .await?
            .check()
            .map(|_| ())
    }

    async fn create_trip(&self, fields: &TripFields) -> Result<Trip, StoreError> {
        self.envelope(self.client.post(self.url("/trips")).json(fields))
            .await?
            .into_trip()
    }

    async fn get_trip(&self, id: Uuid) -> Result<Trip, StoreError> {
        self.envelope(self.client.get(self.url(&format!("/trips/{id}"))))
            .await?
            .into_trip()
    }

    async fn trips_for_profile(&self, profile_id: Uuid) -> Result<Vec<Trip>, StoreError> {
        self.envelope(
            self.client
                .get(self.url(&format!("/trips/user/{profile_id}"))),
        )
        .await?
        .check()?
        .trips
        .ok_or_else(|| StoreError::Decode("envelope missing `trips`".to_string()))
    }

    async fn update_trip(&self, id: Uuid, fields: &TripFields) -> Result<Trip, StoreError> {
        self.envelope(self.client.put(self.url(&format!("/trips/{id}"))).json(fields))
            .await?
            .into_trip()
    }

    async fn delete_trip(&self, id: Uuid) -> Result<(), StoreError> {
        self.envelope(self.client.delete(self.url(&format!("/trips/{id}"))))
            .await?
            .check()
            .map(|_| ())
    }

    async fn update_recommendations(
        &self,
        trip_id: Uuid,
        kind: AdvisoryKind,
        data: serde_json::Value,
    ) -> Result<Trip, StoreError> {
        let body = serde_json::json!({ "type": kind, "data": data });
        self.envelope(
            self.client
                .put(self.url(&format!("/trips/{trip_id}/recommendations")))
                .json(&body),
        )
        .await?
        .into_trip()
    }
}
