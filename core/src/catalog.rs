//! Seed data for the session.
//!
//! Every screen renders from these in-memory catalogs; there is no
//! backing store. Mutable copies are taken by the services that let the
//! user append to a list (bookings, dependents).

use once_cell::sync::Lazy;
use shared::{
    ContactKind, DocumentKind, EmergencyNumber, LocalService, PersonalContact, SafetyTip,
    SettingsItem, SettingsSection, Tour, TouristProfile, TravelDocument, TrustedContact,
};

fn tour(id: u32, name: &str, location: &str, duration: &str, rating: f64, price: &str, description: &str) -> Tour {
    Tour {
        id,
        name: name.to_string(),
        location: location.to_string(),
        duration: duration.to_string(),
        rating,
        price: price.to_string(),
        description: description.to_string(),
    }
}

/// Curated tour packages shown on the tours screen.
pub static POPULAR_TOURS: Lazy<Vec<Tour>> = Lazy::new(|| {
    vec![
        tour(
            1,
            "Kaziranga National Park",
            "Assam",
            "3 Days",
            4.8,
            "₹15,000",
            "Wildlife safari and one-horned rhinoceros viewing",
        ),
        tour(
            2,
            "Tawang Monastery",
            "Arunachal Pradesh",
            "4 Days",
            4.9,
            "₹22,000",
            "Buddhist monastery and mountain landscapes",
        ),
        tour(
            3,
            "Living Root Bridges",
            "Meghalaya",
            "2 Days",
            4.7,
            "₹12,000",
            "Unique natural bridges and waterfalls",
        ),
        tour(
            4,
            "Dzukou Valley",
            "Nagaland",
            "3 Days",
            4.6,
            "₹18,000",
            "Valley of flowers and trekking",
        ),
    ]
});

fn helpline(service: &str, number: &str, description: &str) -> EmergencyNumber {
    EmergencyNumber {
        service: service.to_string(),
        number: number.to_string(),
        description: description.to_string(),
    }
}

/// National emergency helplines shown on the safety screen.
pub static EMERGENCY_HELPLINES: Lazy<Vec<EmergencyNumber>> = Lazy::new(|| {
    vec![
        helpline("Tourist Helpline", "1363", "National Tourism Helpline"),
        helpline("Police", "100", "Emergency Police"),
        helpline("Ambulance", "108", "Medical Emergency"),
        helpline("Fire Service", "101", "Fire Emergency"),
        helpline("Disaster Management", "1070", "Natural Disasters"),
    ]
});

/// Safety recommendations shown below the helplines.
pub static SAFETY_TIPS: Lazy<Vec<SafetyTip>> = Lazy::new(|| {
    let tip = |title: &str, description: &str| SafetyTip {
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        tip(
            "Stay Connected",
            "Keep your mobile phone charged and carry a power bank",
        ),
        tip(
            "Share Location",
            "Always inform someone about your travel plans",
        ),
        tip(
            "Weather Updates",
            "Check weather conditions before traveling",
        ),
        tip(
            "Group Safety",
            "Stay with your group, especially in remote areas",
        ),
    ]
});

/// Local assistance directory shown on the contacts screen.
pub static LOCAL_SERVICES: Lazy<Vec<LocalService>> = Lazy::new(|| {
    let service = |name: &str, number: &str, address: &str, kind: ContactKind| LocalService {
        name: name.to_string(),
        number: number.to_string(),
        address: address.to_string(),
        kind,
    };
    vec![
        service(
            "US Embassy",
            "+1-555-0123",
            "123 Embassy Row, Washington DC",
            ContactKind::Diplomatic,
        ),
        service(
            "Tourist Police",
            "+1-555-0456",
            "Downtown Tourist Center",
            ContactKind::Service,
        ),
        service(
            "Medical Center",
            "+1-555-0789",
            "456 Health Avenue",
            ContactKind::Medical,
        ),
    ]
});

/// The tourist's personal contact circle.
pub static PERSONAL_CONTACTS: Lazy<Vec<PersonalContact>> = Lazy::new(|| {
    let contact = |name: &str, number: &str, relationship: &str, trusted: bool| PersonalContact {
        name: name.to_string(),
        number: number.to_string(),
        relationship: relationship.to_string(),
        trusted,
    };
    vec![
        contact("John Doe", "+1-555-1234", "Emergency Contact", true),
        contact("Jane Smith", "+1-555-5678", "Family", true),
        contact("Travel Insurance", "+1-555-9012", "Insurance Provider", false),
    ]
});

/// Documents seeded into the in-app vault.
pub static SEED_DOCUMENTS: Lazy<Vec<TravelDocument>> = Lazy::new(|| {
    let doc = |id: u32, name: &str, kind: DocumentKind, status: &str, last_updated: &str, size: &str| {
        TravelDocument {
            id,
            name: name.to_string(),
            kind,
            status: status.to_string(),
            last_updated: last_updated.to_string(),
            size: size.to_string(),
        }
    };
    vec![
        doc(1, "Passport", DocumentKind::Passport, "verified", "2 days ago", "2.4 MB"),
        doc(2, "Travel Insurance", DocumentKind::Insurance, "verified", "5 days ago", "1.2 MB"),
        doc(3, "Emergency Contacts", DocumentKind::Contacts, "verified", "1 week ago", "0.8 MB"),
        doc(4, "Hotel Booking", DocumentKind::Booking, "pending", "3 days ago", "1.1 MB"),
    ]
});

/// Contacts receiving shared location updates.
pub static TRUSTED_CONTACTS: Lazy<Vec<TrustedContact>> = Lazy::new(|| {
    let contact = |name: &str, status: &str, last_seen: &str| TrustedContact {
        name: name.to_string(),
        status: status.to_string(),
        last_seen: last_seen.to_string(),
    };
    vec![
        contact("John Doe", "Active", "5 min ago"),
        contact("Jane Smith", "Active", "12 min ago"),
        contact("Emergency Contact", "Standby", "1 hour ago"),
    ]
});

/// Grouped rows of the settings screen.
pub static SETTINGS_SECTIONS: Lazy<Vec<SettingsSection>> = Lazy::new(|| {
    let item = |label: &str, subtitle: &str| SettingsItem {
        label: label.to_string(),
        subtitle: subtitle.to_string(),
    };
    let section = |title: &str, items: Vec<SettingsItem>| SettingsSection {
        title: title.to_string(),
        items,
    };
    vec![
        section(
            "Account",
            vec![
                item("Profile Information", "Manage your personal details"),
                item("Security & Privacy", "Password and privacy settings"),
            ],
        ),
        section(
            "Emergency Settings",
            vec![
                item("Emergency Contacts", "Manage trusted contacts"),
                item("Location Preferences", "Configure location sharing"),
            ],
        ),
        section(
            "App Settings",
            vec![
                item("Language & Region", "English (US)"),
                item("Notification Center", "Manage alerts and notifications"),
            ],
        ),
        section(
            "Support",
            vec![item("Help & Support", "FAQs and contact support")],
        ),
    ]
});

/// Profile shown before the user completes their own setup.
pub static SEED_PROFILE: Lazy<TouristProfile> = Lazy::new(|| TouristProfile {
    full_name: "John Doe".to_string(),
    age: "34".to_string(),
    gender: "Male".to_string(),
    mobile: "+91-9876543210".to_string(),
    email: "john.doe@example.com".to_string(),
    city: "Guwahati".to_string(),
    state: "Assam".to_string(),
    emergency_contact: "+91-9876543211".to_string(),
    ..TouristProfile::default()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{DocumentStatus, PresenceStatus};

    #[test]
    fn test_catalogs_are_populated() {
        assert_eq!(POPULAR_TOURS.len(), 4);
        assert_eq!(EMERGENCY_HELPLINES.len(), 5);
        assert_eq!(SAFETY_TIPS.len(), 4);
        assert_eq!(SEED_DOCUMENTS.len(), 4);
        assert_eq!(TRUSTED_CONTACTS.len(), 3);
    }

    #[test]
    fn test_seed_statuses_are_recognized() {
        for doc in SEED_DOCUMENTS.iter() {
            assert_ne!(DocumentStatus::classify(&doc.status), DocumentStatus::Unknown);
        }
        for contact in TRUSTED_CONTACTS.iter() {
            assert_ne!(
                PresenceStatus::classify(&contact.status),
                PresenceStatus::Unknown
            );
        }
    }

    #[test]
    fn test_helpline_numbers() {
        let numbers: Vec<&str> = EMERGENCY_HELPLINES
            .iter()
            .map(|h| h.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["1363", "100", "108", "101", "1070"]);
    }
}
