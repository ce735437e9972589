//! Status classification for display.
//!
//! Screens color document and presence badges from a small closed set of
//! status strings. Classification is total: anything outside the known
//! set falls back to the neutral category rather than failing.

/// Display category behind a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl StatusCategory {
    /// Badge color for this category.
    pub fn color(&self) -> &'static str {
        match self {
            StatusCategory::Success => "#059669",
            StatusCategory::Warning => "#F59E0B",
            StatusCategory::Danger => "#DC2626",
            StatusCategory::Neutral => "#6B7280",
        }
    }
}

/// Verification state of a travel document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Verified,
    Pending,
    Expired,
    Unknown,
}

impl DocumentStatus {
    /// Classify a raw document status string. Total over all inputs.
    pub fn classify(status: &str) -> Self {
        match status {
            "verified" => DocumentStatus::Verified,
            "pending" => DocumentStatus::Pending,
            "expired" => DocumentStatus::Expired,
            _ => DocumentStatus::Unknown,
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            DocumentStatus::Verified => StatusCategory::Success,
            DocumentStatus::Pending => StatusCategory::Warning,
            DocumentStatus::Expired => StatusCategory::Danger,
            DocumentStatus::Unknown => StatusCategory::Neutral,
        }
    }
}

/// Badge color for a raw document status string.
pub fn document_status_color(status: &str) -> &'static str {
    DocumentStatus::classify(status).category().color()
}

/// Presence state of a trusted contact on the location screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Active,
    Standby,
    Unknown,
}

impl PresenceStatus {
    /// Classify a raw presence status string. Total over all inputs.
    pub fn classify(status: &str) -> Self {
        match status {
            "Active" => PresenceStatus::Active,
            "Standby" => PresenceStatus::Standby,
            _ => PresenceStatus::Unknown,
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            PresenceStatus::Active => StatusCategory::Success,
            PresenceStatus::Standby => StatusCategory::Warning,
            PresenceStatus::Unknown => StatusCategory::Neutral,
        }
    }
}

/// Badge color for a raw presence status string.
pub fn presence_status_color(status: &str) -> &'static str {
    PresenceStatus::classify(status).category().color()
}
