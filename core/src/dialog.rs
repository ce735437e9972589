//! # Confirmation Dialog Module
//!
//! This module models the confirm-then-perform flow that gates every
//! action with real-world effect (calls, SOS, logout, form submission).
//!
//! ## Responsibilities:
//! - Describe a prompt: title, message and two to three labeled choices
//! - Record which choice the user made
//! - Distinguish cancel (an abandoned action, not an error) from confirm
//!
//! ## Purpose:
//! Keeping the decision point behind a trait lets services build and
//! interpret prompts independently of any UI toolkit, so the whole flow
//! is testable with a scripted provider.

/// Visual weight of a prompt choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStyle {
    Default,
    Cancel,
    Destructive,
}

/// One labeled button on a confirmation prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub style: ChoiceStyle,
}

impl Choice {
    pub fn new(label: &str, style: ChoiceStyle) -> Self {
        Self {
            label: label.to_string(),
            style,
        }
    }
}

/// A synchronous two-to-three choice decision presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub message: String,
    pub choices: Vec<Choice>,
}

impl ConfirmationPrompt {
    /// Standard cancel/confirm prompt.
    pub fn confirm(title: &str, message: &str, confirm_label: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            choices: vec![
                Choice::new("Cancel", ChoiceStyle::Cancel),
                Choice::new(confirm_label, ChoiceStyle::Default),
            ],
        }
    }

    /// Cancel/confirm prompt whose confirm action is destructive
    /// (SOS, logout, sign out).
    pub fn destructive(title: &str, message: &str, confirm_label: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            choices: vec![
                Choice::new("Cancel", ChoiceStyle::Cancel),
                Choice::new(confirm_label, ChoiceStyle::Destructive),
            ],
        }
    }

    /// Single-acknowledgement notice with an "OK" button.
    pub fn notice(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            choices: vec![Choice::new("OK", ChoiceStyle::Default)],
        }
    }

    /// Prompt with custom choices, e.g. "Add Another" / "Done".
    pub fn with_choices(title: &str, message: &str, choices: Vec<Choice>) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            choices,
        }
    }

    /// Whether the given choice abandons the action. Out-of-range
    /// selections count as a dismissal.
    pub fn is_cancel(&self, choice: UserChoice) -> bool {
        self.choices
            .get(choice.0)
            .map(|c| c.style == ChoiceStyle::Cancel)
            .unwrap_or(true)
    }

    /// Label of the given choice, if it exists.
    pub fn label(&self, choice: UserChoice) -> Option<&str> {
        self.choices.get(choice.0).map(|c| c.label.as_str())
    }
}

/// Index of the choice the user selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserChoice(pub usize);

/// Source of user decisions for confirmation prompts.
///
/// The terminal shell reads the decision interactively; tests use a
/// scripted implementation.
pub trait ConfirmationProvider {
    fn request(&mut self, prompt: &ConfirmationPrompt) -> UserChoice;
}

/// Provider that replays a fixed sequence of choices. Intended for tests
/// and demo scripts; returns the last scripted choice when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: Vec<UserChoice>,
    position: usize,
}

impl ScriptedProvider {
    pub fn new(script: Vec<UserChoice>) -> Self {
        Self {
            script,
            position: 0,
        }
    }

    /// Provider that always picks the choice at `index`.
    pub fn always(index: usize) -> Self {
        Self::new(vec![UserChoice(index)])
    }
}

impl ConfirmationProvider for ScriptedProvider {
    fn request(&mut self, _prompt: &ConfirmationPrompt) -> UserChoice {
        let choice = self
            .script
            .get(self.position)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or(UserChoice(0));
        if self.position + 1 < self.script.len() {
            self.position += 1;
        }
        choice
    }
}
