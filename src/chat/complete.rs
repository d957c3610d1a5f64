//! Completion — turning a finished draft into persisted Profile and Trip.
//!
//! Pure draft→entity mapping lives here; the engine owns the sequencing
//! (profile first, then trip) and the transcript side of success/failure.

use chrono::{Days, Local, NaiveDate};
use uuid::Uuid;

use crate::chat::draft::Draft;
use crate::chat::script::fields;
use crate::chat::validate::{format_long_date, parse_long_date};
use crate::model::{
    AgeRange, BudgetRange, EnergyLevel, GroupType, ProfileFields, TravelStyle, TripFields,
};

/// Placeholder destination when the traveler never named one.
pub const DEFAULT_DESTINATION: &str = "Paris, France";

/// Inclusive trip length in whole days.
///
/// Convention: absolute difference in calendar days, never less than 1, so a
/// same-day trip counts as one day regardless of time-of-day components.
pub fn trip_duration(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().abs().max(1)
}

fn parse_enum<T: std::str::FromStr + Default>(value: Option<&str>) -> T {
    value.and_then(|s| s.parse().ok()).unwrap_or_default()
}

/// Build the canonical profile from a finished draft, defaulting every
/// optional field to its baseline.
pub fn build_profile(draft: &Draft) -> ProfileFields {
    let name = draft
        .text(fields::NAME)
        .filter(|s| !s.is_empty())
        .unwrap_or("User")
        .to_string();

    let interests = match draft.list(fields::INTERESTS) {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => vec!["culture".to_string()],
    };

    ProfileFields {
        name,
        age_range: parse_enum::<AgeRange>(draft.text(fields::AGE_RANGE)),
        travel_style: parse_enum::<TravelStyle>(draft.text(fields::TRAVEL_STYLE)),
        budget_range: parse_enum::<BudgetRange>(draft.text(fields::BUDGET_RANGE)),
        dietary_restrictions: draft
            .list(fields::DIETARY_RESTRICTIONS)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        group_type: parse_enum::<GroupType>(draft.text(fields::GROUP_TYPE)),
        interests,
        energy_level: parse_enum::<EnergyLevel>(draft.text(fields::ENERGY_LEVEL)),
        accommodation_preferences: Vec::new(),
        location_preferences: Vec::new(),
    }
}

/// Build the provisional profile used by the destination-suggestion side
/// flow, from whatever the draft holds so far.
///
/// Baselines differ slightly from completion: a suggestion for nobody in
/// particular assumes a couple with culture-and-food interests.
pub fn provisional_profile(draft: &Draft) -> ProfileFields {
    let mut profile = build_profile(draft);
    if draft.text(fields::GROUP_TYPE).is_none() {
        profile.group_type = GroupType::Couple;
    }
    if draft.list(fields::INTERESTS).is_none_or(<[String]>::is_empty) {
        profile.interests = vec!["culture".to_string(), "food".to_string()];
    }
    profile
}

/// Build the trip record from a finished draft.
///
/// Duration is derived only when both dates are present and parseable;
/// otherwise it stays at 1 and the missing date defaults to today /
/// today + 7 days.
pub fn build_trip(draft: &Draft, profile_id: Uuid) -> TripFields {
    let start = draft.text(fields::START_DATE).and_then(parse_long_date);
    let end = draft.text(fields::END_DATE).and_then(parse_long_date);

    let duration = match (start, end) {
        (Some(s), Some(e)) => trip_duration(s, e),
        _ => 1,
    };

    let today = Local::now().date_naive();
    let start_date = draft
        .text(fields::START_DATE)
        .map(str::to_string)
        .unwrap_or_else(|| format_long_date(today));
    let end_date = draft
        .text(fields::END_DATE)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format_long_date(today.checked_add_days(Days::new(7)).unwrap_or(today))
        });

    let destination = draft
        .text(fields::DESTINATION)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DESTINATION)
        .to_string();

    let party_size = draft
        .number(fields::PARTY_SIZE)
        .unwrap_or(1)
        .clamp(1, 20) as u32;

    TripFields {
        profile_id,
        destination,
        start_date,
        end_date,
        duration,
        party_size,
    }
}

/// Best-effort bucketing of a completion failure for user-facing phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureFlavor {
    NetworkLike,
    ServiceLike,
    Unknown,
}

/// Sniff the error text. This is string matching, not structured
/// classification; `Unknown` is the honest default.
pub fn classify_failure(message: &str) -> FailureFlavor {
    if message.to_lowercase().contains("network") {
        FailureFlavor::NetworkLike
    } else if message.contains("API") || message.to_lowercase().contains("service") {
        FailureFlavor::ServiceLike
    } else {
        FailureFlavor::Unknown
    }
}

/// The user-facing completion failure message for a flavor.
pub fn failure_message(flavor: FailureFlavor) -> String {
    let middle = match flavor {
        FailureFlavor::NetworkLike => "It looks like there's a network issue. ",
        FailureFlavor::ServiceLike => "There seems to be an issue with our service. ",
        FailureFlavor::Unknown => "This might be a temporary issue. ",
    };
    format!("I'm having trouble creating your trip right now. {middle}Would you like to try again?")
}

/// Fixed instruction appended after every completion failure.
pub const RETRY_INSTRUCTION: &str =
    "You can type 'retry' to try again, or 'restart' to start over with a fresh conversation.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::draft::FieldValue;

    #[test]
    fn duration_is_absolute_day_difference() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(trip_duration(start, end), 7);
        // Order-insensitive.
        assert_eq!(trip_duration(end, start), 7);
    }

    #[test]
    fn same_day_trip_is_one_day() {
        let day = NaiveDate::from_ymd_opt(2031, 6, 1).unwrap();
        assert_eq!(trip_duration(day, day), 1);
    }

    #[test]
    fn profile_defaults_when_draft_is_empty() {
        let profile = build_profile(&Draft::new());
        assert_eq!(profile.name, "User");
        assert_eq!(profile.age_range, AgeRange::From26To35);
        assert_eq!(profile.travel_style, TravelStyle::Mixed);
        assert_eq!(profile.budget_range, BudgetRange::MidRange);
        assert_eq!(profile.group_type, GroupType::Solo);
        assert_eq!(profile.energy_level, EnergyLevel::Moderate);
        assert_eq!(profile.interests, ["culture"]);
        assert!(profile.dietary_restrictions.is_empty());
    }

    #[test]
    fn profile_uses_collected_tokens() {
        let mut draft = Draft::new();
        draft.set_text(fields::NAME, "Noor");
        draft.set_text(fields::TRAVEL_STYLE, "adventure");
        draft.set_text(fields::BUDGET_RANGE, "luxury");
        draft.set_text(fields::GROUP_TYPE, "friends");
        draft.set_text(fields::ENERGY_LEVEL, "high");
        draft.set_text(fields::AGE_RANGE, "18-25");
        draft.set(
            fields::INTERESTS,
            FieldValue::List(vec!["nightlife".to_string(), "beaches".to_string()]),
        );

        let profile = build_profile(&draft);
        assert_eq!(profile.name, "Noor");
        assert_eq!(profile.travel_style, TravelStyle::Adventure);
        assert_eq!(profile.budget_range, BudgetRange::Luxury);
        assert_eq!(profile.group_type, GroupType::Friends);
        assert_eq!(profile.energy_level, EnergyLevel::High);
        assert_eq!(profile.age_range, AgeRange::From18To25);
        assert_eq!(profile.interests, ["nightlife", "beaches"]);
    }

    #[test]
    fn provisional_profile_assumes_couple_with_baseline_interests() {
        let profile = provisional_profile(&Draft::new());
        assert_eq!(profile.group_type, GroupType::Couple);
        assert_eq!(profile.interests, ["culture", "food"]);

        // Collected answers win over the provisional baselines.
        let mut draft = Draft::new();
        draft.set_text(fields::GROUP_TYPE, "family");
        draft.set(
            fields::INTERESTS,
            FieldValue::List(vec!["nature".to_string()]),
        );
        let profile = provisional_profile(&draft);
        assert_eq!(profile.group_type, GroupType::Family);
        assert_eq!(profile.interests, ["nature"]);
    }

    #[test]
    fn trip_defaults_destination_and_party_size() {
        let trip = build_trip(&Draft::new(), Uuid::new_v4());
        assert_eq!(trip.destination, DEFAULT_DESTINATION);
        assert_eq!(trip.party_size, 1);
        assert_eq!(trip.duration, 1);
        // Default dates are a week apart in the script's date format.
        let start = parse_long_date(&trip.start_date).unwrap();
        let end = parse_long_date(&trip.end_date).unwrap();
        assert_eq!(end.signed_duration_since(start).num_days(), 7);
    }

    #[test]
    fn trip_derives_duration_from_both_dates() {
        let mut draft = Draft::new();
        draft.set_text(fields::DESTINATION, "Hanoi, Vietnam");
        draft.set_text(fields::START_DATE, "December 25, 2030");
        draft.set_text(fields::END_DATE, "January 1, 2031");
        draft.set(fields::PARTY_SIZE, FieldValue::Number(3));

        let trip = build_trip(&draft, Uuid::new_v4());
        assert_eq!(trip.duration, 7);
        assert_eq!(trip.party_size, 3);
        // Dates are carried verbatim.
        assert_eq!(trip.start_date, "December 25, 2030");
        assert_eq!(trip.end_date, "January 1, 2031");
    }

    #[test]
    fn duration_stays_one_with_a_single_date() {
        let mut draft = Draft::new();
        draft.set_text(fields::START_DATE, "December 25, 2030");
        let trip = build_trip(&draft, Uuid::new_v4());
        assert_eq!(trip.duration, 1);
        assert_eq!(trip.start_date, "December 25, 2030");
    }

    #[test]
    fn failure_classification_sniffs_strings() {
        assert_eq!(
            classify_failure("network request failed: connection refused"),
            FailureFlavor::NetworkLike
        );
        assert_eq!(
            classify_failure("store API rejected the request: bad trip"),
            FailureFlavor::ServiceLike
        );
        assert_eq!(classify_failure("something odd"), FailureFlavor::Unknown);
    }
}
