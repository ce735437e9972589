use log::info;
use shared::TravelDocument;

use crate::catalog::SEED_DOCUMENTS;
use crate::dialog::{ConfirmationPrompt, UserChoice};
use crate::status::document_status_color;

/// Action the user can take on a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAction {
    View,
    Download,
    Upload,
    Share,
}

impl DocumentAction {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentAction::View => "View",
            DocumentAction::Download => "Download",
            DocumentAction::Upload => "Upload",
            DocumentAction::Share => "Share",
        }
    }
}

/// Service for the travel document vault.
///
/// Documents are seeded mock data; actions are simulated behind
/// confirmation prompts and no file ever moves anywhere.
#[derive(Debug, Clone)]
pub struct DocumentService {
    documents: Vec<TravelDocument>,
}

impl DocumentService {
    pub fn new() -> Self {
        Self {
            documents: SEED_DOCUMENTS.clone(),
        }
    }

    /// Stored documents in display order.
    pub fn documents(&self) -> &[TravelDocument] {
        &self.documents
    }

    /// Badge color for a document's verification status.
    pub fn status_color(&self, document: &TravelDocument) -> &'static str {
        document_status_color(&document.status)
    }

    /// Prompt gating a document action.
    pub fn action_prompt(&self, action: DocumentAction, document_name: &str) -> ConfirmationPrompt {
        ConfirmationPrompt::confirm(
            &format!("{} Document", action.label()),
            &format!("{} {}?", action.label(), document_name),
            action.label(),
        )
    }

    /// Perform a document action for the user's decision. Returns the
    /// acknowledgement message, or None when cancelled.
    pub fn perform_action(
        &self,
        prompt: &ConfirmationPrompt,
        choice: UserChoice,
        action: DocumentAction,
        document_name: &str,
    ) -> Option<String> {
        if prompt.is_cancel(choice) {
            info!("{} of '{}' cancelled", action.label(), document_name);
            return None;
        }
        info!("{} of '{}' confirmed", action.label(), document_name);
        Some(format!("{} of {} completed.", action.label(), document_name))
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_documents() {
        let service = DocumentService::new();
        assert_eq!(service.documents().len(), 4);
        assert_eq!(service.documents()[0].name, "Passport");
        assert_eq!(service.documents()[3].status, "pending");
    }

    #[test]
    fn test_status_colors() {
        let service = DocumentService::new();
        let passport = &service.documents()[0];
        let hotel = &service.documents()[3];
        assert_eq!(service.status_color(passport), "#059669");
        assert_eq!(service.status_color(hotel), "#F59E0B");
    }

    #[test]
    fn test_action_prompt_wording() {
        let service = DocumentService::new();
        let prompt = service.action_prompt(DocumentAction::Share, "Passport");
        assert_eq!(prompt.title, "Share Document");
        assert_eq!(prompt.message, "Share Passport?");
    }

    #[test]
    fn test_perform_action_confirm_and_cancel() {
        let service = DocumentService::new();
        let prompt = service.action_prompt(DocumentAction::Download, "Travel Insurance");

        assert!(service
            .perform_action(&prompt, UserChoice(0), DocumentAction::Download, "Travel Insurance")
            .is_none());

        let message = service
            .perform_action(&prompt, UserChoice(1), DocumentAction::Download, "Travel Insurance")
            .unwrap();
        assert_eq!(message, "Download of Travel Insurance completed.");
    }
}
