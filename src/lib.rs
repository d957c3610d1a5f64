//! TripTactix core — conversational trip onboarding.
//!
//! A scripted chat flow collects a traveler's preferences and trip details,
//! persists them through the travel store, and drives the advisory service
//! to generate itinerary/packing/cuisine/accommodation content for the trip.

pub mod advisory;
pub mod chat;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
