//! # Tour Sentinel Core
//!
//! Application core for the tourist-safety app. This crate provides
//! direct, synchronous access to the domain services behind every
//! screen:
//! - Excludes any IO/REST layer entirely; all state is in-memory
//! - Holds session state only, discarded when the app exits
//! - Keeps every user-visible action behind a confirmation prompt

pub mod catalog;
pub mod dialog;
pub mod domain;
pub mod forms;
pub mod ident;
pub mod navigation;
pub mod status;
pub mod telephony;

use navigation::{Route, Router};

/// Main application struct that orchestrates all services.
pub struct App {
    pub auth_service: domain::AuthService,
    pub profile_service: domain::ProfileService,
    pub dependent_service: domain::DependentService,
    pub tour_service: domain::TourService,
    pub safety_service: domain::SafetyService,
    pub contact_service: domain::ContactService,
    pub document_service: domain::DocumentService,
    pub location_service: domain::LocationService,
    pub settings_service: domain::SettingsService,
    pub router: Router,
}

impl App {
    /// Create a new app session with all services and seeded mock data.
    pub fn new() -> Self {
        Self {
            auth_service: domain::AuthService::new(),
            profile_service: domain::ProfileService::new(),
            dependent_service: domain::DependentService::new(),
            tour_service: domain::TourService::new(),
            safety_service: domain::SafetyService::new(),
            contact_service: domain::ContactService::new(),
            document_service: domain::DocumentService::new(),
            location_service: domain::LocationService::new(),
            settings_service: domain::SettingsService::new(),
            router: Router::new(Route::Home),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormState;
    use shared::{AddDependentRequest, BookTourRequest, BookingStatus};

    #[test]
    fn test_dependent_form_end_to_end() {
        let mut form = FormState::with_defaults([("fullName", ""), ("age", ""), ("relation", "")]);
        form.set_field("fullName", "Jane");
        form.set_field("age", "30");

        let missing = form
            .validate_required(&["fullName", "age", "relation"])
            .unwrap_err();
        assert_eq!(missing, vec!["relation".to_string()]);

        form.set_field("relation", "Friend");
        assert!(form.validate_required(&["fullName", "age", "relation"]).is_ok());

        // the validated form feeds the dependent service
        let mut app = App::new();
        let response = app
            .dependent_service
            .add_dependent(AddDependentRequest {
                full_name: form.text("fullName").to_string(),
                age: form.text("age").to_string(),
                relation: form.text("relation").to_string(),
                ..AddDependentRequest::default()
            })
            .unwrap();
        assert_eq!(response.dependent.full_name, "Jane");
        assert_eq!(app.dependent_service.count(), 1);
    }

    #[test]
    fn test_booking_ledger_end_to_end() {
        let mut app = App::new();

        let first = app
            .tour_service
            .book_tour(BookTourRequest { tour_id: 1 })
            .unwrap();
        assert_eq!(app.tour_service.booking_count(), 1);
        assert_eq!(first.booking.status, BookingStatus::Confirmed);
        assert!(!first.booking.tour_id.is_empty());

        let before = app.tour_service.active_bookings()[0].clone();
        app.tour_service
            .book_tour(BookTourRequest { tour_id: 2 })
            .unwrap();

        assert_eq!(app.tour_service.booking_count(), 2);
        assert_eq!(app.tour_service.active_bookings()[0], before);

        let stats = app.profile_service.stats(
            app.tour_service.active_bookings(),
            app.dependent_service.dependents(),
        );
        assert_eq!(stats.total_tours, 2);
        assert_eq!(stats.active_tours, 2);
    }

    #[test]
    fn test_app_starts_on_home_tab() {
        let app = App::new();
        assert_eq!(app.router.current(), Route::Home);
        assert!(!app.safety_service.sos_active());
        assert!(app.auth_service.signed_in().is_none());
    }
}
