//! # Form State Module
//!
//! This module contains the shared form-state container used by every
//! data-entry screen (login, profile setup, add dependent).
//!
//! ## Responsibilities:
//! - Hold in-progress field values keyed by field name
//! - Single-field updates with no cross-field side effects
//! - Required-field validation against a fixed field list
//! - Reset back to screen defaults ("Add Another" flows)
//!
//! ## Purpose:
//! Screens previously reimplemented field-update closures and required-field
//! checks individually; centralizing them here keeps validation behavior
//! consistent across every form in the app.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current value of a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Whether this value satisfies a required-field check.
    ///
    /// Text counts as filled whenever it is non-empty; input is not
    /// trimmed, so whitespace-only text passes. A flag satisfies the
    /// check by being present, regardless of its value.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Flag(_) => true,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Text(_) => false,
            FieldValue::Flag(flag) => *flag,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

/// In-progress values of one screen's input fields.
///
/// Field order is insertion order so screens can render fields in the
/// order they were declared. State lives exactly as long as the screen;
/// nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    fields: IndexMap<String, FieldValue>,
}

impl FormState {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form pre-populated with the given defaults.
    pub fn with_defaults<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let fields = defaults
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { fields }
    }

    /// Create a form whose fields are all empty text, in declaration order.
    pub fn with_text_fields(names: &[&str]) -> Self {
        Self::with_defaults(names.iter().map(|name| (*name, "")))
    }

    /// Update exactly one field, inserting it if the screen never declared it.
    /// All other fields are left untouched.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Current text of a field; empty string when absent or a flag.
    pub fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Current flag value of a field; false when absent or text.
    pub fn flag(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .map(FieldValue::as_flag)
            .unwrap_or(false)
    }

    /// Check that every required field is filled, without mutating the form.
    ///
    /// On failure, returns the missing field names in required-list order.
    /// A required name the form does not contain counts as missing.
    pub fn validate_required(&self, required: &[&str]) -> Result<(), Vec<String>> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| {
                self.fields
                    .get(**name)
                    .map(|value| !value.is_filled())
                    .unwrap_or(true)
            })
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// Restore every field to the provided defaults, dropping any extras.
    pub fn reset<I, K, V>(&mut self, defaults: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields = Self::with_defaults(defaults).fields;
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependent_form() -> FormState {
        FormState::with_text_fields(&[
            "fullName",
            "age",
            "gender",
            "relation",
            "medicalCondition",
            "emergencyContact",
        ])
    }

    #[test]
    fn test_validate_required_fails_only_on_empty_required_fields() {
        let mut form = dependent_form();
        form.set_field("fullName", "Jane");
        form.set_field("age", "30");

        // relation still empty, so validation fails and names it
        let missing = form
            .validate_required(&["fullName", "age", "relation"])
            .unwrap_err();
        assert_eq!(missing, vec!["relation".to_string()]);

        // non-required fields never affect the result
        form.set_field("medicalCondition", "asthma");
        let missing = form
            .validate_required(&["fullName", "age", "relation"])
            .unwrap_err();
        assert_eq!(missing, vec!["relation".to_string()]);

        form.set_field("relation", "Friend");
        assert!(form.validate_required(&["fullName", "age", "relation"]).is_ok());
    }

    #[test]
    fn test_validate_required_does_not_trim() {
        let mut form = dependent_form();
        form.set_field("fullName", "   ");
        form.set_field("age", "12");
        form.set_field("relation", "Son");

        // whitespace-only input counts as filled
        assert!(form.validate_required(&["fullName", "age", "relation"]).is_ok());
    }

    #[test]
    fn test_validate_required_missing_field_name() {
        let form = FormState::with_text_fields(&["email"]);
        let missing = form.validate_required(&["email", "password"]).unwrap_err();
        assert_eq!(missing, vec!["email".to_string(), "password".to_string()]);
    }

    #[test]
    fn test_flag_fields_satisfy_required_by_presence() {
        let mut form = FormState::new();
        form.set_field("isDoctor", false);
        assert!(form.validate_required(&["isDoctor"]).is_ok());
    }

    #[test]
    fn test_set_field_is_idempotent_and_isolated() {
        let mut form = dependent_form();
        form.set_field("fullName", "Jane");
        let once = form.clone();
        form.set_field("fullName", "Jane");
        assert_eq!(form, once);

        // updating one field leaves every other field unchanged
        form.set_field("age", "30");
        assert_eq!(form.text("fullName"), "Jane");
        assert_eq!(form.text("relation"), "");
        assert_eq!(form.len(), 6);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = dependent_form();
        form.set_field("fullName", "Jane");
        form.set_field("age", "30");
        form.set_field("relation", "Friend");
        assert!(form.validate_required(&["fullName", "age", "relation"]).is_ok());

        form.reset([
            ("fullName", ""),
            ("age", ""),
            ("gender", ""),
            ("relation", ""),
            ("medicalCondition", ""),
            ("emergencyContact", ""),
        ]);

        // empty defaults always fail required validation again
        assert!(form
            .validate_required(&["fullName", "age", "relation"])
            .is_err());
        assert_eq!(form.len(), 6);
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let form = dependent_form();
        let names: Vec<&str> = form.field_names().collect();
        assert_eq!(
            names,
            vec![
                "fullName",
                "age",
                "gender",
                "relation",
                "medicalCondition",
                "emergencyContact"
            ]
        );
    }
}
