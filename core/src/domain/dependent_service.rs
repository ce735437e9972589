use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use shared::{AddDependentRequest, AddDependentResponse, Dependent, ValidationError};

use crate::dialog::{Choice, ChoiceStyle, ConfirmationPrompt, UserChoice};

/// Service for registering family members and travel companions.
///
/// The dependents list is session-only and append-ordered.
#[derive(Debug, Clone, Default)]
pub struct DependentService {
    dependents: Vec<Dependent>,
}

impl DependentService {
    /// Choice on [`DependentService::added_prompt`] that keeps the
    /// registration form open for another entry.
    pub const ADD_ANOTHER: UserChoice = UserChoice(0);

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dependent.
    pub fn add_dependent(&mut self, request: AddDependentRequest) -> Result<AddDependentResponse> {
        self.add_dependent_at(request, Utc::now())
    }

    /// Register a dependent with an explicit clock.
    pub fn add_dependent_at(
        &mut self,
        request: AddDependentRequest,
        now: DateTime<Utc>,
    ) -> Result<AddDependentResponse> {
        info!("Adding dependent: {}", request.full_name);

        self.validate_request(&request)?;

        let dependent = Dependent {
            id: Dependent::generate_id(now.timestamp_millis().max(0) as u64),
            full_name: request.full_name,
            age: request.age,
            gender: request.gender,
            relation: request.relation,
            medical_condition: request.medical_condition,
            emergency_contact: request.emergency_contact,
            added_at: now,
        };
        self.dependents.push(dependent.clone());

        info!("Added dependent: {} ({})", dependent.full_name, dependent.id);

        Ok(AddDependentResponse {
            dependent,
            success_message: "Dependent has been added successfully.".to_string(),
        })
    }

    /// Prompt shown after a successful registration, offering to add
    /// another dependent or finish.
    pub fn added_prompt(&self) -> ConfirmationPrompt {
        ConfirmationPrompt::with_choices(
            "Dependent Added",
            "Dependent has been added successfully.",
            vec![
                Choice::new("Add Another", ChoiceStyle::Default),
                Choice::new("Done", ChoiceStyle::Default),
            ],
        )
    }

    /// Dependents registered this session, in registration order.
    pub fn dependents(&self) -> &[Dependent] {
        &self.dependents
    }

    pub fn count(&self) -> usize {
        self.dependents.len()
    }

    fn validate_request(&self, request: &AddDependentRequest) -> Result<()> {
        // values are deliberately not trimmed, matching form validation
        let checks = [
            ("fullName", &request.full_name),
            ("age", &request.age),
            ("relation", &request.relation),
        ];
        let missing: Vec<String> = checks
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            warn!("Dependent validation failed, missing: {:?}", missing);
            return Err(ValidationError::MissingRequiredFields(missing).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(name: &str, age: &str, relation: &str) -> AddDependentRequest {
        AddDependentRequest {
            full_name: name.to_string(),
            age: age.to_string(),
            relation: relation.to_string(),
            ..AddDependentRequest::default()
        }
    }

    #[test]
    fn test_add_dependent_success() {
        let mut service = DependentService::new();
        let now = Utc.timestamp_millis_opt(1_702_516_122_000).single().unwrap();
        let response = service
            .add_dependent_at(request("Jane Doe", "12", "Daughter"), now)
            .unwrap();

        assert_eq!(response.dependent.id, "dependent::1702516122000");
        assert_eq!(service.count(), 1);
        assert_eq!(service.dependents()[0].full_name, "Jane Doe");
    }

    #[test]
    fn test_add_dependent_missing_fields() {
        let mut service = DependentService::new();
        let err = service
            .add_dependent(request("Jane Doe", "", ""))
            .unwrap_err();
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        assert_eq!(
            validation.missing_fields(),
            &["age".to_string(), "relation".to_string()]
        );
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_optional_fields_do_not_block() {
        let mut service = DependentService::new();
        // gender, medical condition and emergency contact are optional
        assert!(service.add_dependent(request("Ravi", "8", "Son")).is_ok());
    }

    #[test]
    fn test_dependents_preserve_insertion_order() {
        let mut service = DependentService::new();
        service.add_dependent(request("First", "10", "Son")).unwrap();
        service.add_dependent(request("Second", "7", "Daughter")).unwrap();

        let names: Vec<&str> = service
            .dependents()
            .iter()
            .map(|d| d.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_added_prompt_offers_add_another() {
        let service = DependentService::new();
        let prompt = service.added_prompt();
        assert_eq!(prompt.choices.len(), 2);
        assert_eq!(prompt.label(DependentService::ADD_ANOTHER), Some("Add Another"));
        assert_eq!(prompt.choices[1].label, "Done");
    }

    #[test]
    fn test_add_another_flow_clears_form_between_registrations() {
        use crate::dialog::{ConfirmationProvider, ScriptedProvider};
        use crate::forms::FormState;

        let mut service = DependentService::new();
        // first answer: keep going; second answer: done
        let mut provider = ScriptedProvider::new(vec![DependentService::ADD_ANOTHER, UserChoice(1)]);
        let names = ["fullName", "age", "relation"];
        let mut form = FormState::with_text_fields(&names);

        form.set_field("fullName", "First");
        form.set_field("age", "10");
        form.set_field("relation", "Son");
        service
            .add_dependent(request(form.text("fullName"), form.text("age"), form.text("relation")))
            .unwrap();

        let choice = provider.request(&service.added_prompt());
        assert_eq!(choice, DependentService::ADD_ANOTHER);
        form.reset(names.iter().map(|name| (*name, "")));
        assert!(form.validate_required(&names).is_err());

        form.set_field("fullName", "Second");
        form.set_field("age", "7");
        form.set_field("relation", "Daughter");
        service
            .add_dependent(request(form.text("fullName"), form.text("age"), form.text("relation")))
            .unwrap();

        let choice = provider.request(&service.added_prompt());
        assert_ne!(choice, DependentService::ADD_ANOTHER);
        let registered: Vec<&str> = service
            .dependents()
            .iter()
            .map(|d| d.full_name.as_str())
            .collect();
        assert_eq!(registered, vec!["First", "Second"]);
    }
}
