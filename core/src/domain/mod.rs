//! Domain services for the tourist-safety app.
//!
//! Each service owns the session state for one area of the app and
//! exposes synchronous command-style operations. All state is in-memory
//! and lives exactly as long as the session.

pub mod auth_service;
pub mod contact_service;
pub mod dependent_service;
pub mod document_service;
pub mod location_service;
pub mod profile_service;
pub mod safety_service;
pub mod settings_service;
pub mod tour_service;

pub use auth_service::AuthService;
pub use contact_service::ContactService;
pub use dependent_service::DependentService;
pub use document_service::DocumentService;
pub use location_service::LocationService;
pub use profile_service::ProfileService;
pub use safety_service::SafetyService;
pub use settings_service::SettingsService;
pub use tour_service::TourService;
