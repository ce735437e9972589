use log::{info, warn};
use shared::{EmergencyNumber, SafetyTip};

use crate::catalog::{EMERGENCY_HELPLINES, SAFETY_TIPS};
use crate::dialog::{ConfirmationPrompt, UserChoice};
use crate::telephony::{DialRequest, Dialer};

/// Number dialed when the SOS action is confirmed (police).
pub const SOS_DIAL_NUMBER: &str = "100";

/// Outcome of a confirmed SOS action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SosAlert {
    pub success_message: String,
}

/// Service for the emergency SOS flow and the safety screen.
#[derive(Debug, Clone, Default)]
pub struct SafetyService {
    sos_active: bool,
}

impl SafetyService {
    pub fn new() -> Self {
        Self::default()
    }

    /// National helplines shown on the safety screen.
    pub fn helplines(&self) -> &'static [EmergencyNumber] {
        &EMERGENCY_HELPLINES
    }

    /// Safety recommendations shown below the helplines.
    pub fn safety_tips(&self) -> &'static [SafetyTip] {
        &SAFETY_TIPS
    }

    /// Prompt gating the SOS action.
    pub fn sos_prompt(&self) -> ConfirmationPrompt {
        ConfirmationPrompt::destructive(
            "Emergency SOS",
            "This will contact emergency services and notify your emergency contacts. Continue?",
            "Send SOS",
        )
    }

    /// Perform the SOS action for the user's decision.
    ///
    /// Cancel is a no-op. A confirmed SOS marks the session active, hands
    /// the emergency number to the dialer and reports the alert exactly
    /// once per confirmation.
    pub fn send_sos(
        &mut self,
        prompt: &ConfirmationPrompt,
        choice: UserChoice,
        dialer: &mut dyn Dialer,
    ) -> Option<SosAlert> {
        if prompt.is_cancel(choice) {
            info!("SOS cancelled");
            return None;
        }

        warn!("SOS triggered");
        self.sos_active = true;
        dialer.open(&DialRequest::new(SOS_DIAL_NUMBER));

        Some(SosAlert {
            success_message: "Emergency alert has been sent to all contacts.".to_string(),
        })
    }

    /// Whether an SOS has been triggered this session.
    pub fn sos_active(&self) -> bool {
        self.sos_active
    }

    /// Prompt gating a call to one emergency helpline.
    pub fn emergency_call_prompt(&self, number: &str) -> ConfirmationPrompt {
        ConfirmationPrompt::confirm(
            "Emergency Call",
            &format!("Are you sure you want to call {}?", number),
            "Call",
        )
    }

    /// Hand the number to the dialer if the user confirmed the call.
    pub fn place_emergency_call(
        &self,
        prompt: &ConfirmationPrompt,
        choice: UserChoice,
        number: &str,
        dialer: &mut dyn Dialer,
    ) -> Option<DialRequest> {
        if prompt.is_cancel(choice) {
            info!("Emergency call to {} cancelled", number);
            return None;
        }
        let request = DialRequest::new(number);
        info!("Emergency call handoff: {}", request.url());
        dialer.open(&request);
        Some(request)
    }
}
