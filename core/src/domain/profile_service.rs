use anyhow::Result;
use log::{info, warn};
use shared::{BookingRecord, BookingStatus, Dependent, ProfileStats, TouristProfile, ValidationError};

use crate::catalog::SEED_PROFILE;
use crate::dialog::ConfirmationPrompt;
use crate::navigation::Route;

/// Response after completing profile setup.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitProfileResult {
    pub profile: TouristProfile,
    pub success_message: String,
    /// Screen to continue to once setup is complete.
    pub next: Route,
}

/// Service for the tourist profile and the profile-setup flow.
#[derive(Debug, Clone)]
pub struct ProfileService {
    profile: TouristProfile,
}

impl ProfileService {
    /// Start from the seeded demo profile.
    pub fn new() -> Self {
        Self {
            profile: SEED_PROFILE.clone(),
        }
    }

    pub fn profile(&self) -> &TouristProfile {
        &self.profile
    }

    /// Complete profile setup, replacing the current profile.
    pub fn submit_profile(&mut self, profile: TouristProfile) -> Result<SubmitProfileResult> {
        info!("Submitting profile for: {}", profile.full_name);

        self.validate_profile(&profile)?;
        self.profile = profile.clone();

        info!("Profile setup complete for: {}", profile.full_name);

        Ok(SubmitProfileResult {
            profile,
            success_message:
                "Your profile has been created successfully. You can now select tours.".to_string(),
            next: Route::Tours,
        })
    }

    /// Headline counts for the profile screen.
    pub fn stats(&self, bookings: &[BookingRecord], dependents: &[Dependent]) -> ProfileStats {
        let active = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .count();
        ProfileStats {
            total_tours: bookings.len() as u32,
            active_tours: active as u32,
            dependents: dependents.len() as u32,
        }
    }

    /// Prompt gating the logout action.
    pub fn logout_prompt(&self) -> ConfirmationPrompt {
        ConfirmationPrompt::destructive("Logout", "Are you sure you want to logout?", "Logout")
    }

    fn validate_profile(&self, profile: &TouristProfile) -> Result<()> {
        // values are deliberately not trimmed, matching form validation
        let checks = [
            ("fullName", &profile.full_name),
            ("age", &profile.age),
            ("gender", &profile.gender),
            ("mobile", &profile.mobile),
            ("email", &profile.email),
            ("emergencyContact", &profile.emergency_contact),
        ];
        let missing: Vec<String> = checks
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            warn!("Profile validation failed, missing: {:?}", missing);
            return Err(ValidationError::MissingRequiredFields(missing).into());
        }
        Ok(())
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::Tour;

    fn complete_profile() -> TouristProfile {
        TouristProfile {
            full_name: "Asha Rao".to_string(),
            age: "29".to_string(),
            gender: "Female".to_string(),
            mobile: "+91-9000000000".to_string(),
            email: "asha@example.com".to_string(),
            emergency_contact: "+91-9000000001".to_string(),
            ..TouristProfile::default()
        }
    }

    fn booking(status: BookingStatus) -> BookingRecord {
        BookingRecord {
            tour_id: "NE-TEST1".to_string(),
            tour: Tour {
                id: 1,
                name: "Kaziranga National Park".to_string(),
                location: "Assam".to_string(),
                duration: "3 Days".to_string(),
                rating: 4.8,
                price: "₹15,000".to_string(),
                description: String::new(),
            },
            booked_at: Utc::now(),
            status,
        }
    }

    #[test]
    fn test_submit_profile_success_routes_to_tours() {
        let mut service = ProfileService::new();
        let result = service.submit_profile(complete_profile()).unwrap();
        assert_eq!(result.next, Route::Tours);
        assert_eq!(service.profile().full_name, "Asha Rao");
    }

    #[test]
    fn test_submit_profile_lists_missing_fields() {
        let mut service = ProfileService::new();
        let before = service.profile().clone();

        let mut profile = complete_profile();
        profile.gender.clear();
        profile.emergency_contact.clear();

        let err = service.submit_profile(profile).unwrap_err();
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        assert_eq!(
            validation.missing_fields(),
            &["gender".to_string(), "emergencyContact".to_string()]
        );
        // a rejected submission leaves the current profile untouched
        assert_eq!(service.profile(), &before);
    }

    #[test]
    fn test_optional_profile_fields_do_not_block() {
        let mut service = ProfileService::new();
        // aadhaar, address, travel details etc. are all optional
        assert!(service.submit_profile(complete_profile()).is_ok());
    }

    #[test]
    fn test_stats_counts() {
        let service = ProfileService::new();
        let bookings = vec![
            booking(BookingStatus::Confirmed),
            booking(BookingStatus::Completed),
            booking(BookingStatus::Confirmed),
        ];
        let dependents: Vec<Dependent> = Vec::new();

        let stats = service.stats(&bookings, &dependents);
        assert_eq!(stats.total_tours, 3);
        assert_eq!(stats.active_tours, 2);
        assert_eq!(stats.dependents, 0);
    }

    #[test]
    fn test_logout_prompt_is_destructive() {
        let service = ProfileService::new();
        let prompt = service.logout_prompt();
        assert_eq!(prompt.title, "Logout");
        assert_eq!(prompt.choices.len(), 2);
    }
}
