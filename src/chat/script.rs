//! The conversation script — the fixed, ordered onboarding step list.

use serde::Serialize;

use crate::chat::draft::Draft;

/// Field keys the script writes into the draft.
pub mod fields {
    pub const NAME: &str = "name";
    pub const AGE_RANGE: &str = "ageRange";
    pub const TRAVEL_STYLE: &str = "travelStyle";
    pub const BUDGET_RANGE: &str = "budgetRange";
    pub const GROUP_TYPE: &str = "groupType";
    pub const PARTY_SIZE: &str = "partySize";
    pub const ENERGY_LEVEL: &str = "energyLevel";
    pub const INTERESTS: &str = "interests";
    pub const DIETARY_RESTRICTIONS: &str = "dietaryRestrictions";
    pub const START_DATE: &str = "startDate";
    pub const END_DATE: &str = "endDate";
    pub const DESTINATION: &str = "destination";
}

/// Quick-reply label that triggers the destination-suggestion side flow.
pub const SUGGEST_DESTINATIONS: &str = "Suggest destinations for me";

/// How a step's reply is validated and typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    FreeText,
    SingleChoice,
    MultiChoice,
    Integer,
    Date,
}

/// One step of the conversation script. Immutable once built.
#[derive(Debug, Clone)]
pub struct Step {
    /// Prompt template; may contain `{field}` placeholders filled from the draft.
    pub prompt: &'static str,
    /// Draft key this step fills.
    pub field: &'static str,
    pub kind: InputKind,
    pub quick_replies: &'static [&'static str],
}

/// The ordered step list. `cursor == len()` means the script is exhausted.
#[derive(Debug, Clone)]
pub struct ConversationScript {
    steps: Vec<Step>,
}

impl ConversationScript {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, cursor: usize) -> Option<&Step> {
        self.steps.get(cursor)
    }
}

impl Default for ConversationScript {
    /// The TripTactix onboarding flow.
    fn default() -> Self {
        Self::new(vec![
            Step {
                prompt: "Hi there! 👋 I'm your TripTactix assistant. I'd love to help you plan an amazing trip! What's your name?",
                field: fields::NAME,
                kind: InputKind::FreeText,
                quick_replies: &[],
            },
            Step {
                prompt: "Nice to meet you, {name}! 😊 How old are you? This helps me suggest age-appropriate activities.",
                field: fields::AGE_RANGE,
                kind: InputKind::SingleChoice,
                quick_replies: &["18-25", "26-35", "36-50", "51-65", "65+"],
            },
            Step {
                prompt: "Great! What kind of travel experience are you looking for?",
                field: fields::TRAVEL_STYLE,
                kind: InputKind::SingleChoice,
                quick_replies: &[
                    "Adventure & Active",
                    "Relaxation & Leisure",
                    "Cultural & Historical",
                    "Mix of Everything",
                ],
            },
            Step {
                prompt: "Perfect! What's your budget range for this trip?",
                field: fields::BUDGET_RANGE,
                kind: InputKind::SingleChoice,
                quick_replies: &[
                    "Budget ($100/day)",
                    "Mid-range ($100-250/day)",
                    "Luxury ($250+/day)",
                ],
            },
            Step {
                prompt: "Who are you traveling with?",
                field: fields::GROUP_TYPE,
                kind: InputKind::SingleChoice,
                quick_replies: &["Solo Travel", "Couple", "Family", "Friends Group"],
            },
            Step {
                prompt: "How many people will be traveling?",
                field: fields::PARTY_SIZE,
                kind: InputKind::Integer,
                quick_replies: &["1", "2", "3", "4", "5+"],
            },
            Step {
                prompt: "What pace do you prefer for your travels?",
                field: fields::ENERGY_LEVEL,
                kind: InputKind::SingleChoice,
                quick_replies: &["Relaxed pace", "Moderate pace", "Action-packed"],
            },
            Step {
                prompt: "What interests you most when traveling? (You can select multiple - type 'done' when finished)",
                field: fields::INTERESTS,
                kind: InputKind::MultiChoice,
                quick_replies: &[
                    "Culture",
                    "Food",
                    "Nature",
                    "Nightlife",
                    "History",
                    "Art",
                    "Adventure",
                    "Shopping",
                    "Beaches",
                    "Museums",
                    "Architecture",
                    "Festivals",
                ],
            },
            Step {
                prompt: "Any dietary restrictions I should know about? (Optional - you can skip this or type 'done' when finished)",
                field: fields::DIETARY_RESTRICTIONS,
                kind: InputKind::MultiChoice,
                quick_replies: &[
                    "Vegetarian",
                    "Vegan",
                    "Gluten-free",
                    "Halal",
                    "Kosher",
                    "Dairy-free",
                    "Nut-free",
                    "None",
                ],
            },
            Step {
                prompt: "When are you planning to travel?",
                field: fields::START_DATE,
                kind: InputKind::Date,
                quick_replies: &[],
            },
            Step {
                prompt: "And when do you plan to return?",
                field: fields::END_DATE,
                kind: InputKind::Date,
                quick_replies: &[],
            },
            Step {
                prompt: "Excellent! Now let's talk about your trip. Where would you like to go?",
                field: fields::DESTINATION,
                kind: InputKind::FreeText,
                quick_replies: &[SUGGEST_DESTINATIONS],
            },
        ])
    }
}

/// Fill `{field}` placeholders in a prompt template from the draft's text values.
pub fn interpolate(template: &str, draft: &Draft) -> String {
    let mut rendered = template.to_string();
    for (field, value) in draft.text_values() {
        rendered = rendered.replace(&format!("{{{field}}}"), value);
    }
    rendered
}

/// Map a single-choice display label to its canonical stored token.
///
/// Unmapped labels fall back to their lowercased text; the literal `None`
/// maps to an absent value.
pub fn single_choice_token(label: &str) -> Option<String> {
    let token = match label {
        "Adventure & Active" => "adventure",
        "Relaxation & Leisure" => "relaxation",
        "Cultural & Historical" => "cultural",
        "Mix of Everything" => "mixed",
        "Budget ($100/day)" => "budget",
        "Mid-range ($100-250/day)" => "mid-range",
        "Luxury ($250+/day)" => "luxury",
        "Solo Travel" => "solo",
        "Couple" => "couple",
        "Family" => "family",
        "Friends Group" => "friends",
        "Relaxed pace" => "low",
        "Moderate pace" => "moderate",
        "Action-packed" => "high",
        "None" => return None,
        other => return Some(other.to_lowercase()),
    };
    Some(token.to_string())
}

/// Normalize a multi-choice label into its stored token: lowercased,
/// whitespace collapsed to `-`.
pub fn multi_choice_token(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_script_shape() {
        let script = ConversationScript::default();
        assert_eq!(script.len(), 12);
        assert_eq!(script.step(0).unwrap().field, fields::NAME);
        assert_eq!(script.step(11).unwrap().field, fields::DESTINATION);
        assert_eq!(script.step(7).unwrap().kind, InputKind::MultiChoice);
        assert_eq!(script.step(9).unwrap().kind, InputKind::Date);
        assert!(script.step(12).is_none());
    }

    #[test]
    fn destination_step_offers_suggestions() {
        let script = ConversationScript::default();
        let step = script.step(11).unwrap();
        assert_eq!(step.quick_replies, &[SUGGEST_DESTINATIONS]);
    }

    #[test]
    fn interpolate_fills_known_placeholders() {
        let mut draft = Draft::default();
        draft.set_text(fields::NAME, "Maya");
        let rendered = interpolate("Nice to meet you, {name}!", &draft);
        assert_eq!(rendered, "Nice to meet you, Maya!");
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        let draft = Draft::default();
        let rendered = interpolate("Hello, {name}!", &draft);
        assert_eq!(rendered, "Hello, {name}!");
    }

    #[test]
    fn choice_labels_map_to_tokens() {
        assert_eq!(
            single_choice_token("Adventure & Active").as_deref(),
            Some("adventure")
        );
        assert_eq!(
            single_choice_token("Mid-range ($100-250/day)").as_deref(),
            Some("mid-range")
        );
        assert_eq!(single_choice_token("Relaxed pace").as_deref(), Some("low"));
        assert_eq!(single_choice_token("None"), None);
        // Unmapped labels fall back to lowercase.
        assert_eq!(single_choice_token("26-35").as_deref(), Some("26-35"));
        assert_eq!(
            single_choice_token("Something Else").as_deref(),
            Some("something else")
        );
    }

    #[test]
    fn multi_choice_tokens_are_kebab_case() {
        assert_eq!(multi_choice_token("Gluten-free"), "gluten-free");
        assert_eq!(multi_choice_token("Local  Street Food"), "local-street-food");
        assert_eq!(multi_choice_token("Culture"), "culture");
    }
}
