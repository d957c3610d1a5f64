//! Traveler profile and trip data models.
//!
//! These mirror the shapes the persistence API stores and returns. All
//! preference enums serialize to their canonical lowercase tokens, which are
//! the same tokens the chat script's label→token table produces.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! token_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? } default $default:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $token)] $variant,)+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let s = match self {
                    $(Self::$variant => $token,)+
                };
                write!(f, "{s}")
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

token_enum! {
    /// Traveler age bracket.
    AgeRange {
        From18To25 => "18-25",
        From26To35 => "26-35",
        From36To50 => "36-50",
        From51To65 => "51-65",
        Over65 => "65+",
    } default From26To35
}

token_enum! {
    /// The kind of travel experience the traveler is after.
    TravelStyle {
        Adventure => "adventure",
        Relaxation => "relaxation",
        Cultural => "cultural",
        Mixed => "mixed",
    } default Mixed
}

token_enum! {
    /// Daily spend bracket.
    BudgetRange {
        Budget => "budget",
        MidRange => "mid-range",
        Luxury => "luxury",
    } default MidRange
}

token_enum! {
    /// Who the traveler is going with.
    GroupType {
        Solo => "solo",
        Couple => "couple",
        Family => "family",
        Friends => "friends",
    } default Solo
}

token_enum! {
    /// Preferred activity pace.
    EnergyLevel {
        Low => "low",
        Moderate => "moderate",
        High => "high",
    } default Moderate
}

token_enum! {
    /// Trip lifecycle status.
    TripStatus {
        Planning => "planning",
        Booked => "booked",
        Completed => "completed",
    } default Planning
}

/// Profile fields submitted to the store on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub name: String,
    pub age_range: AgeRange,
    pub travel_style: TravelStyle,
    pub budget_range: BudgetRange,
    pub dietary_restrictions: Vec<String>,
    pub group_type: GroupType,
    pub interests: Vec<String>,
    pub energy_level: EnergyLevel,
    pub accommodation_preferences: Vec<String>,
    pub location_preferences: Vec<String>,
}

/// A persisted traveler profile, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerProfile {
    pub id: Uuid,
    pub name: String,
    pub age_range: AgeRange,
    pub travel_style: TravelStyle,
    pub budget_range: BudgetRange,
    pub dietary_restrictions: Vec<String>,
    pub group_type: GroupType,
    pub interests: Vec<String>,
    pub energy_level: EnergyLevel,
    pub accommodation_preferences: Vec<String>,
    pub location_preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TravelerProfile {
    /// Materialize a new profile from creation fields.
    pub fn from_fields(fields: ProfileFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            age_range: fields.age_range,
            travel_style: fields.travel_style,
            budget_range: fields.budget_range,
            dietary_restrictions: fields.dietary_restrictions,
            group_type: fields.group_type,
            interests: fields.interests,
            energy_level: fields.energy_level,
            accommodation_preferences: fields.accommodation_preferences,
            location_preferences: fields.location_preferences,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Trip fields submitted to the store on creation.
///
/// Dates are the verbatim `Month D, YYYY` strings the user typed; the store
/// owns any further normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFields {
    pub profile_id: Uuid,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    /// Whole days, inclusive of the start day.
    pub duration: i64,
    pub party_size: u32,
}

/// A persisted trip with its recommendation slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: i64,
    pub party_size: u32,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default)]
    pub recommendations: Recommendations,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Materialize a new trip from creation fields.
    pub fn from_fields(fields: TripFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile_id: fields.profile_id,
            destination: fields.destination,
            start_date: fields.start_date,
            end_date: fields.end_date,
            duration: fields.duration,
            party_size: fields.party_size,
            status: TripStatus::Planning,
            recommendations: Recommendations::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The advisory content types a trip can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Itinerary,
    Destinations,
    Packing,
    Cuisine,
    Accommodation,
}

impl std::fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Itinerary => "itinerary",
            Self::Destinations => "destinations",
            Self::Packing => "packing",
            Self::Cuisine => "cuisine",
            Self::Accommodation => "accommodation",
        };
        write!(f, "{s}")
    }
}

/// One generated-content slot on a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSlot {
    pub generated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl RecommendationSlot {
    /// Fill the slot with freshly generated data.
    pub fn fill(&mut self, data: serde_json::Value) {
        self.generated = true;
        self.data = Some(data);
        self.generated_at = Some(Utc::now());
    }
}

/// The full recommendations map keyed by advisory kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub itinerary: RecommendationSlot,
    #[serde(default)]
    pub destinations: RecommendationSlot,
    #[serde(default)]
    pub packing: RecommendationSlot,
    #[serde(default)]
    pub cuisine: RecommendationSlot,
    #[serde(default)]
    pub accommodation: RecommendationSlot,
}

impl Recommendations {
    pub fn slot(&self, kind: AdvisoryKind) -> &RecommendationSlot {
        match kind {
            AdvisoryKind::Itinerary => &self.itinerary,
            AdvisoryKind::Destinations => &self.destinations,
            AdvisoryKind::Packing => &self.packing,
            AdvisoryKind::Cuisine => &self.cuisine,
            AdvisoryKind::Accommodation => &self.accommodation,
        }
    }

    pub fn slot_mut(&mut self, kind: AdvisoryKind) -> &mut RecommendationSlot {
        match kind {
            AdvisoryKind::Itinerary => &mut self.itinerary,
            AdvisoryKind::Destinations => &mut self.destinations,
            AdvisoryKind::Packing => &mut self.packing,
            AdvisoryKind::Cuisine => &mut self.cuisine,
            AdvisoryKind::Accommodation => &mut self.accommodation,
        }
    }
}
