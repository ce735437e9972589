use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A bookable tour package from the curated catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Human-readable duration, e.g. "3 Days"
    pub duration: String,
    pub rating: f64,
    /// Display price string including currency symbol, e.g. "₹15,000"
    pub price: String,
    pub description: String,
}

/// Lifecycle status of a booked tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// One entry in the session booking ledger.
///
/// Records are append-only: once a tour is booked the record is never
/// mutated or removed, and display order is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Display identifier, e.g. "NE-MBQK1T2Z4F3X9"
    pub tour_id: String,
    pub tour: Tour,
    pub booked_at: DateTime<Utc>,
    pub status: BookingStatus,
}

/// Request to book a tour from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTourRequest {
    pub tour_id: u32,
}

/// Response after a successful booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTourResponse {
    pub booking: BookingRecord,
    pub success_message: String,
}

/// A national emergency helpline number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyNumber {
    pub service: String,
    pub number: String,
    pub description: String,
}

/// A short safety recommendation shown on the safety screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyTip {
    pub title: String,
    pub description: String,
}

/// Category of a directory contact, used for grouping and iconography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    Emergency,
    Diplomatic,
    Service,
    Medical,
}

/// A local service contact (embassy, tourist police, medical center).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalService {
    pub name: String,
    pub number: String,
    pub address: String,
    pub kind: ContactKind,
}

/// A contact from the tourist's personal circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalContact {
    pub name: String,
    pub number: String,
    pub relationship: String,
    /// Trusted contacts receive location updates and SOS alerts.
    pub trusted: bool,
}

/// Kind of stored travel document, used for icon selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Passport,
    Insurance,
    Contacts,
    Booking,
    Other,
}

/// A travel document in the in-app vault.
///
/// `status` holds the raw verification status string ("verified",
/// "pending", "expired"); classification to a display category happens
/// in the core status module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelDocument {
    pub id: u32,
    pub name: String,
    pub kind: DocumentKind,
    pub status: String,
    pub last_updated: String,
    pub size: String,
}

/// A contact that can see the tourist's shared location.
///
/// `status` holds the raw presence string ("Active", "Standby").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustedContact {
    pub name: String,
    pub status: String,
    pub last_seen: String,
}

/// Full tourist profile collected during profile setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TouristProfile {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub mobile: String,
    pub email: String,
    pub aadhaar: String,
    pub country: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub contact_person_name: String,
    pub emergency_contact: String,
    pub contact_relation: String,
    pub is_doctor: bool,
    pub travel_mode: String,
    pub medical_condition: String,
    pub driver_name: String,
    pub vehicle_number: String,
}

/// Headline counts shown on the profile screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_tours: u32,
    pub active_tours: u32,
    pub dependents: u32,
}

/// A family member or travel companion registered under a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    pub id: String,
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub relation: String,
    pub medical_condition: String,
    pub emergency_contact: String,
    pub added_at: DateTime<Utc>,
}

impl Dependent {
    /// Generate a dependent ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("dependent::{}", epoch_millis)
    }

    /// Parse a dependent ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, DependentIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "dependent" {
            return Err(DependentIdError::InvalidFormat);
        }

        parts[1]
            .parse::<u64>()
            .map_err(|_| DependentIdError::InvalidTimestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DependentIdError {
    #[error("Invalid dependent ID format")]
    InvalidFormat,
    #[error("Invalid timestamp in dependent ID")]
    InvalidTimestamp,
}

/// Request to register a dependent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddDependentRequest {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub relation: String,
    pub medical_condition: String,
    pub emergency_contact: String,
}

/// Response after registering a dependent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDependentResponse {
    pub dependent: Dependent,
    pub success_message: String,
}

/// Credentials for signing in to an existing account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Details for registering a new account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

/// Response after a successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub email: String,
    pub success_message: String,
}

/// Validation failures surfaced to the user as alert messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields(Vec<String>),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Names of the fields that failed validation, if any.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            ValidationError::MissingRequiredFields(fields) => fields,
            ValidationError::PasswordMismatch => &[],
        }
    }
}

/// Boolean app preferences toggled from the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: bool,
    pub location_sharing: bool,
    pub emergency_mode: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            location_sharing: true,
            emergency_mode: false,
            dark_mode: false,
        }
    }
}

/// One actionable row in a settings section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsItem {
    pub label: String,
    pub subtitle: String,
}

/// A titled group of settings rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSection {
    pub title: String,
    pub items: Vec<SettingsItem>,
}
