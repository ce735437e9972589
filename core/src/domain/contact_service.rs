use log::info;
use once_cell::sync::Lazy;
use shared::{ContactKind, LocalService, PersonalContact};

use crate::catalog::{LOCAL_SERVICES, PERSONAL_CONTACTS};
use crate::dialog::{ConfirmationPrompt, UserChoice};
use crate::telephony::{DialRequest, Dialer};

/// Emergency service entry on the contacts screen.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyService {
    pub name: String,
    pub number: String,
    pub description: String,
    pub kind: ContactKind,
}

static EMERGENCY_SERVICES: Lazy<Vec<EmergencyService>> = Lazy::new(|| {
    let service = |name: &str, number: &str, description: &str| EmergencyService {
        name: name.to_string(),
        number: number.to_string(),
        description: description.to_string(),
        kind: ContactKind::Emergency,
    };
    vec![
        service("Local Police", "911", "Emergency law enforcement"),
        service("Medical Emergency", "911", "Ambulance and medical services"),
        service("Fire Department", "911", "Fire and rescue services"),
    ]
});

/// Service for the contacts directory and call handoffs.
#[derive(Debug, Clone, Default)]
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    pub fn emergency_services(&self) -> &'static [EmergencyService] {
        &EMERGENCY_SERVICES
    }

    pub fn local_services(&self) -> &'static [LocalService] {
        &LOCAL_SERVICES
    }

    pub fn personal_contacts(&self) -> &'static [PersonalContact] {
        &PERSONAL_CONTACTS
    }

    /// Prompt gating a call to a directory contact.
    pub fn call_prompt(&self, name: &str, number: &str) -> ConfirmationPrompt {
        ConfirmationPrompt::confirm(
            &format!("Call {}", name),
            &format!("Calling {} at {}", name, number),
            "Call Now",
        )
    }

    /// Hand the number to the dialer if the user confirmed the call.
    pub fn place_call(
        &self,
        prompt: &ConfirmationPrompt,
        choice: UserChoice,
        number: &str,
        dialer: &mut dyn Dialer,
    ) -> Option<DialRequest> {
        if prompt.is_cancel(choice) {
            info!("Call to {} cancelled", number);
            return None;
        }
        let request = DialRequest::new(number);
        info!("Call handoff: {}", request.url());
        dialer.open(&request);
        Some(request)
    }
}
