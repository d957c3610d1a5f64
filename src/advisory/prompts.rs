//! Prompt builders, one per advisory kind.
//!
//! Each prompt asks for a strict JSON shape; `parse::extract_json_object`
//! handles the inevitable prose wrapping.

use crate::model::{TravelerProfile, Trip};

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub fn itinerary(profile: &TravelerProfile, trip: &Trip) -> String {
    format!(
        r#"Create a detailed day-by-day itinerary for a {duration}-day trip to {destination}.

User Profile:
- Age: {age}
- Travel Style: {style}
- Budget: {budget}
- Group: {group} ({party} people)
- Interests: {interests}
- Energy Level: {energy}

Trip Details:
- Dates: {start} to {end}
- Duration: {duration} days

Please provide a JSON response with the following structure:
{{
  "summary": "Brief overview of the itinerary",
  "days": [
    {{
      "day": 1,
      "date": "YYYY-MM-DD",
      "theme": "Day theme (e.g., 'Arrival & City Center')",
      "activities": [
        {{
          "time": "9:00 AM",
          "activity": "Activity name",
          "description": "Brief description",
          "duration": "2 hours",
          "cost": "Estimated cost range",
          "tips": "Helpful tips"
        }}
      ]
    }}
  ],
  "tips": ["General trip tips"]
}}

Focus on activities that match their interests and energy level. Consider travel time between activities and budget constraints."#,
        duration = trip.duration,
        destination = trip.destination,
        age = profile.age_range,
        style = profile.travel_style,
        budget = profile.budget_range,
        group = profile.group_type,
        party = trip.party_size,
        interests = list_or_none(&profile.interests),
        energy = profile.energy_level,
        start = trip.start_date,
        end = trip.end_date,
    )
}

pub fn destinations(profile: &TravelerProfile) -> String {
    format!(
        r#"Recommend 5 travel destinations for someone with the following profile:

User Profile:
- Age: {age}
- Travel Style: {style}
- Budget: {budget}
- Group: {group}
- Interests: {interests}

Please provide a JSON response with the following structure:
{{
  "recommendations": [
    {{
      "destination": "City, Country",
      "matchScore": 95,
      "whyRecommended": "Explanation of why this fits their profile",
      "bestTimeToVisit": "Season/months",
      "estimatedBudget": "Budget range per person",
      "highlights": ["Top 3-4 highlights"],
      "travelTips": ["2-3 practical tips"]
    }}
  ]
}}

Ensure recommendations match their budget, interests, and travel style."#,
        age = profile.age_range,
        style = profile.travel_style,
        budget = profile.budget_range,
        group = profile.group_type,
        interests = list_or_none(&profile.interests),
    )
}

pub fn packing(profile: &TravelerProfile, trip: &Trip) -> String {
    format!(
        r#"Create a comprehensive packing checklist for a {duration}-day trip to {destination}.

User & Trip Info:
- Destination: {destination}
- Duration: {duration} days
- Dates: {start} to {end}
- Travel Style: {style}
- Group: {group}
- Accommodation Preferences: {accommodation}

Please provide a JSON response with the following structure:
{{
  "categories": [
    {{
      "category": "Clothing",
      "items": [
        {{
          "item": "Item name",
          "quantity": "1-2",
          "essential": true,
          "notes": "When/why to bring this"
        }}
      ]
    }}
  ],
  "weatherConsiderations": "Weather-specific advice",
  "travelTips": ["Packing tips"],
  "prohibited": ["Items to avoid bringing"]
}}

Consider the season, activities, and destination-specific requirements."#,
        duration = trip.duration,
        destination = trip.destination,
        start = trip.start_date,
        end = trip.end_date,
        style = profile.travel_style,
        group = profile.group_type,
        accommodation = list_or_none(&profile.accommodation_preferences),
    )
}

pub fn cuisine(profile: &TravelerProfile, trip: &Trip) -> String {
    format!(
        r#"Recommend local food experiences for a trip to {destination}.

User Profile:
- Dietary Restrictions: {dietary}
- Budget: {budget}
- Group: {group}
- Interests: {interests}

Please provide a JSON response with the following structure:
{{
  "mustTryDishes": [
    {{
      "dish": "Dish name",
      "description": "What it is",
      "whereToFind": "Type of place to find it",
      "dietaryNotes": "Any dietary considerations"
    }}
  ],
  "restaurants": [
    {{
      "name": "Restaurant type/area",
      "cuisine": "Cuisine type",
      "priceRange": "Budget range",
      "specialties": ["What they're known for"],
      "dietaryOptions": ["Available dietary accommodations"]
    }}
  ],
  "foodMarkets": ["Local markets to visit"],
  "diningEtiquette": ["Cultural dining tips"],
  "foodSafety": ["Food safety tips for the destination"]
}}

Focus on authentic local experiences that match their dietary needs and budget."#,
        destination = trip.destination,
        dietary = list_or_none(&profile.dietary_restrictions),
        budget = profile.budget_range,
        group = profile.group_type,
        interests = list_or_none(&profile.interests),
    )
}

pub fn accommodation(profile: &TravelerProfile, trip: &Trip) -> String {
    format!(
        r#"Recommend accommodation options for a {duration}-day trip to {destination}.

Trip Details:
- Destination: {destination}
- Group Size: {party} people
- Budget: {budget}
- Accommodation Preferences: {accommodation}
- Location Preferences: {location}
- Travel Style: {style}

Please provide a JSON response with the following structure:
{{
  "recommendations": [
    {{
      "type": "Hotel/Hostel/Airbnb/etc",
      "area": "Neighborhood/Area",
      "priceRange": "Price range per night",
      "pros": ["Advantages"],
      "cons": ["Disadvantages"],
      "bestFor": "Who this is best for",
      "amenities": ["Key amenities"]
    }}
  ],
  "neighborhoods": [
    {{
      "name": "Neighborhood name",
      "description": "What it's like",
      "pros": ["Advantages of staying here"],
      "bestFor": "Type of traveler"
    }}
  ],
  "bookingTips": ["Advice for booking"],
  "whatToAvoid": ["Areas or situations to avoid"]
}}

Consider their budget, group size, and preferences for location and amenities."#,
        duration = trip.duration,
        destination = trip.destination,
        party = trip.party_size,
        budget = profile.budget_range,
        accommodation = list_or_none(&profile.accommodation_preferences),
        location = list_or_none(&profile.location_preferences),
        style = profile.travel_style,
    )
}
