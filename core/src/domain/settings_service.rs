use log::info;
use shared::{Preferences, SettingsSection};

use crate::catalog::SETTINGS_SECTIONS;
use crate::dialog::ConfirmationPrompt;

/// Preference that can be toggled from the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceToggle {
    Notifications,
    LocationSharing,
    EmergencyMode,
    DarkMode,
}

impl PreferenceToggle {
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceToggle::Notifications => "Emergency Notifications",
            PreferenceToggle::LocationSharing => "Location Sharing",
            PreferenceToggle::EmergencyMode => "Emergency Mode",
            PreferenceToggle::DarkMode => "Dark Mode",
        }
    }
}

/// Service for app preferences and the settings screen.
#[derive(Debug, Clone, Default)]
pub struct SettingsService {
    preferences: Preferences,
}

impl SettingsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Flip one preference and return its new value.
    pub fn toggle(&mut self, which: PreferenceToggle) -> bool {
        let value = match which {
            PreferenceToggle::Notifications => {
                self.preferences.notifications = !self.preferences.notifications;
                self.preferences.notifications
            }
            PreferenceToggle::LocationSharing => {
                self.preferences.location_sharing = !self.preferences.location_sharing;
                self.preferences.location_sharing
            }
            PreferenceToggle::EmergencyMode => {
                self.preferences.emergency_mode = !self.preferences.emergency_mode;
                self.preferences.emergency_mode
            }
            PreferenceToggle::DarkMode => {
                self.preferences.dark_mode = !self.preferences.dark_mode;
                self.preferences.dark_mode
            }
        };
        info!("{} set to {}", which.label(), value);
        value
    }

    /// Grouped rows of the settings screen.
    pub fn sections(&self) -> &'static [SettingsSection] {
        &SETTINGS_SECTIONS
    }

    /// Prompt gating the sign-out action.
    pub fn sign_out_prompt(&self) -> ConfirmationPrompt {
        ConfirmationPrompt::destructive(
            "Sign Out",
            "Are you sure you want to sign out?",
            "Sign Out",
        )
    }
}
