//! Canned fallback payloads, one per advisory kind.
//!
//! Served whenever the model is unreachable or its reply cannot be parsed.
//! Each payload has the same shape as the corresponding generated content so
//! downstream consumers never need to care which one they got.

use serde_json::{Value, json};

use crate::model::Trip;

pub fn itinerary(trip: &Trip) -> Value {
    json!({
        "summary": format!("{}-day itinerary for {}", trip.duration, trip.destination),
        "days": [
            {
                "day": 1,
                "date": trip.start_date,
                "theme": "Arrival & Exploration",
                "activities": [
                    {
                        "time": "10:00 AM",
                        "activity": "Arrival and Check-in",
                        "description": "Arrive at destination and check into accommodation",
                        "duration": "2 hours",
                        "cost": "Included",
                        "tips": "Leave luggage if room not ready"
                    }
                ]
            }
        ],
        "tips": ["This is a fallback itinerary. Please try again for AI-generated recommendations."]
    })
}

pub fn destinations() -> Value {
    json!({
        "recommendations": [
            {
                "destination": "Paris, France",
                "matchScore": 85,
                "whyRecommended": "Classic destination with something for everyone",
                "bestTimeToVisit": "April-June, September-October",
                "estimatedBudget": "$100-200 per day",
                "highlights": ["Eiffel Tower", "Louvre Museum", "Local Cuisine", "Historic Architecture"],
                "travelTips": ["Learn basic French phrases", "Book museum tickets in advance"]
            }
        ]
    })
}

pub fn packing() -> Value {
    json!({
        "categories": [
            {
                "category": "Essentials",
                "items": [
                    { "item": "Passport", "quantity": "1", "essential": true, "notes": "Required for travel" },
                    { "item": "Phone charger", "quantity": "1", "essential": true, "notes": "Stay connected" }
                ]
            }
        ],
        "weatherConsiderations": "Check weather forecast before packing",
        "travelTips": ["Pack light", "Leave room for souvenirs"],
        "prohibited": ["Check airline restrictions"]
    })
}

pub fn cuisine() -> Value {
    json!({
        "mustTryDishes": [
            {
                "dish": "Local specialty",
                "description": "Ask locals for recommendations",
                "whereToFind": "Local restaurants",
                "dietaryNotes": "Check ingredients"
            }
        ],
        "restaurants": [
            {
                "name": "Local restaurants",
                "cuisine": "Regional",
                "priceRange": "Varies",
                "specialties": ["Local dishes"],
                "dietaryOptions": ["Ask server"]
            }
        ],
        "foodMarkets": ["Visit local markets"],
        "diningEtiquette": ["Respect local customs"],
        "foodSafety": ["Drink bottled water if unsure"]
    })
}

pub fn accommodation() -> Value {
    json!({
        "recommendations": [
            {
                "type": "Hotel",
                "area": "City Center",
                "priceRange": "$50-150 per night",
                "pros": ["Central location", "Easy access to attractions"],
                "cons": ["Can be noisy"],
                "bestFor": "First-time visitors",
                "amenities": ["WiFi", "Breakfast"]
            }
        ],
        "neighborhoods": [
            {
                "name": "City Center",
                "description": "Heart of the city",
                "pros": ["Walking distance to attractions"],
                "bestFor": "Tourists"
            }
        ],
        "bookingTips": ["Book in advance", "Read reviews"],
        "whatToAvoid": ["Avoid areas far from transport"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TripFields;
    use uuid::Uuid;

    #[test]
    fn itinerary_fallback_reflects_trip() {
        let trip = Trip::from_fields(TripFields {
            profile_id: Uuid::new_v4(),
            destination: "Rome, Italy".to_string(),
            start_date: "May 1, 2031".to_string(),
            end_date: "May 4, 2031".to_string(),
            duration: 3,
            party_size: 2,
        });
        let value = itinerary(&trip);
        assert_eq!(value["summary"], "3-day itinerary for Rome, Italy");
        assert_eq!(value["days"][0]["date"], "May 1, 2031");
    }

    #[test]
    fn destinations_fallback_has_one_scored_entry() {
        let value = destinations();
        let recs = value["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["matchScore"], 85);
    }
}
