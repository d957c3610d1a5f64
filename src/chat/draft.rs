//! The draft — accumulated answers for one onboarding session.

use std::collections::HashMap;

use serde::Serialize;

/// A typed answer value, shaped by the step's input kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    List(Vec<String>),
    /// Explicitly absent (e.g. the literal "None" choice).
    Empty,
}

/// Mapping from field key to answer. Mutated only when a step is accepted;
/// wiped wholesale on restart.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Draft {
    values: HashMap<String, FieldValue>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: FieldValue) {
        self.values.insert(field.to_string(), value);
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.set(field, FieldValue::Text(value.into()));
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// The field's text value, if it holds one.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The field's numeric value, if it holds one.
    pub fn number(&self, field: &str) -> Option<i64> {
        match self.values.get(field) {
            Some(FieldValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// The field's list value, if it holds one.
    pub fn list(&self, field: &str) -> Option<&[String]> {
        match self.values.get(field) {
            Some(FieldValue::List(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Toggle a token in the field's list: add if absent, remove if present.
    pub fn toggle(&mut self, field: &str, token: String) {
        let entry = self
            .values
            .entry(field.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        // A non-list value is replaced by a fresh list; step kinds are fixed
        // so this only happens if the script itself changes.
        if !matches!(entry, FieldValue::List(_)) {
            *entry = FieldValue::List(Vec::new());
        }
        if let FieldValue::List(items) = entry {
            if let Some(pos) = items.iter().position(|t| t == &token) {
                items.remove(pos);
            } else {
                items.push(token);
            }
        }
    }

    /// Reset a list field to empty (the "None"/"Skip" answers).
    pub fn clear_list(&mut self, field: &str) {
        self.set(field, FieldValue::List(Vec::new()));
    }

    /// All text-valued fields, for prompt interpolation.
    pub fn text_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().filter_map(|(k, v)| match v {
            FieldValue::Text(s) => Some((k.as_str(), s.as_str())),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Wipe all answers (session restart).
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
