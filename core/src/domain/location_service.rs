use log::info;
use shared::TrustedContact;

use crate::catalog::TRUSTED_CONTACTS;
use crate::dialog::{ConfirmationPrompt, UserChoice};
use crate::status::presence_status_color;

/// Service for location sharing and check-ins.
///
/// No real location is ever read; the current location is a mock display
/// value and sharing is a session flag.
#[derive(Debug, Clone)]
pub struct LocationService {
    sharing: bool,
    current_location: String,
}

impl LocationService {
    pub fn new() -> Self {
        Self {
            sharing: false,
            current_location: "Times Square, NYC".to_string(),
        }
    }

    pub fn sharing(&self) -> bool {
        self.sharing
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    /// Contacts that can see the shared location.
    pub fn trusted_contacts(&self) -> &'static [TrustedContact] {
        &TRUSTED_CONTACTS
    }

    /// Badge color for a trusted contact's presence status.
    pub fn presence_color(&self, contact: &TrustedContact) -> &'static str {
        presence_status_color(&contact.status)
    }

    /// Prompt gating the sharing toggle; wording depends on the current
    /// sharing state.
    pub fn toggle_sharing_prompt(&self) -> ConfirmationPrompt {
        if self.sharing {
            ConfirmationPrompt::confirm(
                "Stop Location Sharing",
                "Your location will no longer be shared with trusted contacts",
                "Stop Sharing",
            )
        } else {
            ConfirmationPrompt::confirm(
                "Start Location Sharing",
                "Your location will be shared with your trusted contacts every 15 minutes",
                "Start Sharing",
            )
        }
    }

    /// Flip the sharing flag if the user confirmed. Returns the success
    /// message, or None when cancelled.
    pub fn apply_sharing_toggle(
        &mut self,
        prompt: &ConfirmationPrompt,
        choice: UserChoice,
    ) -> Option<String> {
        if prompt.is_cancel(choice) {
            info!("Sharing toggle cancelled");
            return None;
        }
        self.sharing = !self.sharing;
        let message = if self.sharing {
            "Location sharing started"
        } else {
            "Location sharing stopped"
        };
        info!("{}", message);
        Some(message.to_string())
    }

    /// Prompt gating the one-off location send.
    pub fn send_location_prompt(&self) -> ConfirmationPrompt {
        ConfirmationPrompt::confirm(
            "Share Current Location",
            "Send your current location to all trusted contacts?",
            "Send Location",
        )
    }

    /// Send the current location once if the user confirmed.
    pub fn send_location(
        &self,
        prompt: &ConfirmationPrompt,
        choice: UserChoice,
    ) -> Option<String> {
        if prompt.is_cancel(choice) {
            info!("Quick location send cancelled");
            return None;
        }
        info!("Location sent to trusted contacts");
        Some("Location sent to trusted contacts".to_string())
    }

    /// Mark the tourist as safe at the current location.
    pub fn check_in(&self) -> String {
        info!("Safe check-in at {}", self.current_location);
        format!("Checked in safe at {}", self.current_location)
    }
}

impl Default for LocationService {
    fn default() -> Self {
        Self::new()
    }
}
