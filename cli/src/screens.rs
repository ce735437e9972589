//! Terminal renderings of the app screens.
//!
//! Screens hold no state of their own beyond the form currently being
//! filled; everything they show comes from the core services, and every
//! effectful action goes through a confirmation prompt.

use anyhow::Result;
use log::debug;
use shared::{AddDependentRequest, BookTourRequest, LoginRequest, RegisterRequest, TouristProfile};
use tour_sentinel_core::dialog::ConfirmationProvider;
use tour_sentinel_core::domain::dependent_service::DependentService;
use tour_sentinel_core::domain::document_service::DocumentAction;
use tour_sentinel_core::domain::settings_service::PreferenceToggle;
use tour_sentinel_core::forms::FormState;
use tour_sentinel_core::navigation::Route;
use tour_sentinel_core::App;

use crate::terminal::{read_line, TerminalConfirmer, TerminalDialer};

/// The running terminal shell: one app session plus the terminal
/// implementations of the interaction traits.
pub struct Shell {
    app: App,
    confirmer: TerminalConfirmer,
    dialer: TerminalDialer,
}

impl Shell {
    pub fn new(app: App) -> Self {
        Self {
            app,
            confirmer: TerminalConfirmer,
            dialer: TerminalDialer,
        }
    }

    /// Main loop: render the current route until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let route = self.app.router.current();
            println!();
            println!("=== {} ===", route.title());

            let keep_going = match route {
                Route::Home => self.home_screen()?,
                Route::Tours => self.tours_screen()?,
                Route::Safety => self.safety_screen()?,
                Route::Profile => self.profile_screen()?,
                Route::Contacts => self.contacts_screen()?,
                Route::Documents => self.documents_screen()?,
                Route::Locations => self.locations_screen()?,
                Route::Settings => self.settings_screen()?,
                Route::Login => self.login_screen()?,
                Route::ProfileSetup => self.profile_setup_screen()?,
                Route::AddDependent => self.add_dependent_screen()?,
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Shared navigation commands. Returns true when the input was a
    /// navigation command and the screen should re-render.
    fn handle_navigation(&mut self, input: &str) -> bool {
        match input {
            "t" => {
                for (index, tab) in Route::tabs().iter().enumerate() {
                    println!("  [{}] {}", index + 1, tab.title());
                }
                if let Ok(choice) = read_line("tab> ") {
                    if let Some(tab) = choice
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|n| Route::tabs().get(n).copied())
                    {
                        self.app.router.replace(tab);
                    }
                }
                true
            }
            "b" => {
                if self.app.router.back().is_none() {
                    debug!("Back at root route, staying put");
                }
                true
            }
            _ => false,
        }
    }

    fn home_screen(&mut self) -> Result<bool> {
        println!("Emergency Services");
        if self.app.safety_service.sos_active() {
            println!("  !! SOS ACTIVE !!");
        }
        println!("  [s] EMERGENCY SOS - tap for immediate help");
        for (index, helpline) in self.app.safety_service.helplines().iter().enumerate() {
            println!(
                "  [{}] {} ({}) - {}",
                index + 1,
                helpline.service,
                helpline.number,
                helpline.description
            );
        }
        println!("  [c] Contacts  [d] Documents  [l] Locations  [e] Settings");
        println!("  [t] tabs  [q] quit");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            "s" => {
                let prompt = self.app.safety_service.sos_prompt();
                let choice = self.confirmer.request(&prompt);
                if let Some(alert) =
                    self.app
                        .safety_service
                        .send_sos(&prompt, choice, &mut self.dialer)
                {
                    println!("{}", alert.success_message);
                }
            }
            "c" => self.app.router.push(Route::Contacts),
            "d" => self.app.router.push(Route::Documents),
            "l" => self.app.router.push(Route::Locations),
            "e" => self.app.router.push(Route::Settings),
            other => {
                if !self.handle_navigation(other) {
                    self.call_helpline(other);
                }
            }
        }
        Ok(true)
    }

    fn call_helpline(&mut self, input: &str) {
        let helpline = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| self.app.safety_service.helplines().get(n));
        if let Some(helpline) = helpline {
            let prompt = self
                .app
                .safety_service
                .emergency_call_prompt(&helpline.number);
            let choice = self.confirmer.request(&prompt);
            self.app.safety_service.place_emergency_call(
                &prompt,
                choice,
                &helpline.number,
                &mut self.dialer,
            );
        }
    }

    fn tours_screen(&mut self) -> Result<bool> {
        let bookings = self.app.tour_service.active_bookings();
        if !bookings.is_empty() {
            println!("Active Tours");
            for booking in bookings {
                println!(
                    "  {} [{}] Tour ID: {}",
                    booking.tour.name,
                    booking.status.label(),
                    booking.tour_id
                );
            }
        }
        println!("Popular Tours");
        for tour in self.app.tour_service.popular_tours() {
            println!(
                "  [{}] {} - {} | {} | {} | rated {}",
                tour.id, tour.name, tour.location, tour.duration, tour.price, tour.rating
            );
        }
        println!("  [t] tabs  [b] back  [q] quit  (enter a tour number to book)");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            other if self.handle_navigation(other) => {}
            other => {
                if let Ok(tour_id) = other.parse::<u32>() {
                    match self.app.tour_service.book_tour(BookTourRequest { tour_id }) {
                        Ok(response) => self.notice("Tour Booked Successfully!", &response.success_message),
                        Err(err) => self.notice("Error", &err.to_string()),
                    }
                }
            }
        }
        Ok(true)
    }

    fn safety_screen(&mut self) -> Result<bool> {
        println!("Emergency Contacts");
        for (index, helpline) in self.app.safety_service.helplines().iter().enumerate() {
            println!(
                "  [{}] {} - {} ({})",
                index + 1,
                helpline.service,
                helpline.description,
                helpline.number
            );
        }
        println!("Safety Tips");
        for tip in self.app.safety_service.safety_tips() {
            println!("  - {}: {}", tip.title, tip.description);
        }
        println!("  [s] EMERGENCY SOS  [t] tabs  [b] back  [q] quit");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            "s" => {
                let prompt = self.app.safety_service.sos_prompt();
                let choice = self.confirmer.request(&prompt);
                if let Some(alert) =
                    self.app
                        .safety_service
                        .send_sos(&prompt, choice, &mut self.dialer)
                {
                    self.notice("SOS Sent", &alert.success_message);
                }
            }
            other => {
                if !self.handle_navigation(other) {
                    self.call_helpline(other);
                }
            }
        }
        Ok(true)
    }

    fn profile_screen(&mut self) -> Result<bool> {
        let profile = self.app.profile_service.profile().clone();
        let stats = self.app.profile_service.stats(
            self.app.tour_service.active_bookings(),
            self.app.dependent_service.dependents(),
        );
        println!("{}", profile.full_name);
        println!("{}, {}", profile.city, profile.state);
        println!("{} | {}", profile.email, profile.mobile);
        println!(
            "Total Tours: {} | Active Tours: {} | Dependents: {}",
            stats.total_tours, stats.active_tours, stats.dependents
        );
        println!("  [e] Edit Profile  [d] Manage Dependents  [o] Logout");
        println!("  [t] tabs  [q] quit");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            "e" => self.app.router.push(Route::ProfileSetup),
            "d" => self.app.router.push(Route::AddDependent),
            "o" => {
                let prompt = self.app.profile_service.logout_prompt();
                let choice = self.confirmer.request(&prompt);
                if !prompt.is_cancel(choice) {
                    self.app.auth_service.sign_out();
                    self.app.router.replace(Route::Login);
                }
            }
            other => {
                self.handle_navigation(other);
            }
        }
        Ok(true)
    }

    fn contacts_screen(&mut self) -> Result<bool> {
        println!("Emergency Services");
        let mut entries: Vec<(String, String)> = Vec::new();
        for service in self.app.contact_service.emergency_services() {
            entries.push((service.name.clone(), service.number.clone()));
            println!(
                "  [{}] {} ({}) - {}",
                entries.len(),
                service.name,
                service.number,
                service.description
            );
        }
        println!("Local Services");
        for service in self.app.contact_service.local_services() {
            entries.push((service.name.clone(), service.number.clone()));
            println!(
                "  [{}] {} ({}) - {}",
                entries.len(),
                service.name,
                service.number,
                service.address
            );
        }
        println!("Personal Contacts");
        for contact in self.app.contact_service.personal_contacts() {
            entries.push((contact.name.clone(), contact.number.clone()));
            println!(
                "  [{}] {} ({}) - {}{}",
                entries.len(),
                contact.name,
                contact.number,
                contact.relationship,
                if contact.trusted { " *" } else { "" }
            );
        }
        println!("  [t] tabs  [b] back  [q] quit  (enter a number to call)");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            other if self.handle_navigation(other) => {}
            other => {
                let entry = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|n| entries.get(n));
                if let Some((name, number)) = entry {
                    let prompt = self.app.contact_service.call_prompt(name, number);
                    let choice = self.confirmer.request(&prompt);
                    self.app
                        .contact_service
                        .place_call(&prompt, choice, number, &mut self.dialer);
                }
            }
        }
        Ok(true)
    }

    fn documents_screen(&mut self) -> Result<bool> {
        for (index, document) in self.app.document_service.documents().iter().enumerate() {
            println!(
                "  [{}] {} - {} ({}, {}) status color {}",
                index + 1,
                document.name,
                document.status,
                document.last_updated,
                document.size,
                self.app.document_service.status_color(document)
            );
        }
        println!("  [t] tabs  [b] back  [q] quit  (enter a number to share a document)");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            other if self.handle_navigation(other) => {}
            other => {
                let document = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|n| self.app.document_service.documents().get(n))
                    .cloned();
                if let Some(document) = document {
                    let prompt = self
                        .app
                        .document_service
                        .action_prompt(DocumentAction::Share, &document.name);
                    let choice = self.confirmer.request(&prompt);
                    if let Some(message) = self.app.document_service.perform_action(
                        &prompt,
                        choice,
                        DocumentAction::Share,
                        &document.name,
                    ) {
                        println!("{}", message);
                    }
                }
            }
        }
        Ok(true)
    }

    fn locations_screen(&mut self) -> Result<bool> {
        println!("Current Location: {}", self.app.location_service.current_location());
        println!(
            "Sharing: {}",
            if self.app.location_service.sharing() {
                "Sharing Active"
            } else {
                "Sharing Inactive"
            }
        );
        println!("Trusted Contacts");
        for contact in self.app.location_service.trusted_contacts() {
            println!(
                "  {} [{}] last seen {}",
                contact.name, contact.status, contact.last_seen
            );
        }
        println!("  [s] toggle sharing  [l] send location  [c] safe check-in");
        println!("  [t] tabs  [b] back  [q] quit");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            "s" => {
                let prompt = self.app.location_service.toggle_sharing_prompt();
                let choice = self.confirmer.request(&prompt);
                if let Some(message) = self
                    .app
                    .location_service
                    .apply_sharing_toggle(&prompt, choice)
                {
                    self.notice("Success", &message);
                }
            }
            "l" => {
                let prompt = self.app.location_service.send_location_prompt();
                let choice = self.confirmer.request(&prompt);
                if let Some(message) = self.app.location_service.send_location(&prompt, choice) {
                    self.notice("Success", &message);
                }
            }
            "c" => {
                let message = self.app.location_service.check_in();
                println!("{}", message);
            }
            other => {
                self.handle_navigation(other);
            }
        }
        Ok(true)
    }

    fn settings_screen(&mut self) -> Result<bool> {
        let prefs = self.app.settings_service.preferences();
        println!("Quick Settings");
        println!("  [1] Emergency Notifications: {}", on_off(prefs.notifications));
        println!("  [2] Location Sharing: {}", on_off(prefs.location_sharing));
        println!("  [3] Emergency Mode: {}", on_off(prefs.emergency_mode));
        println!("  [4] Dark Mode: {}", on_off(prefs.dark_mode));
        for section in self.app.settings_service.sections() {
            println!("{}", section.title);
            for item in &section.items {
                println!("  - {} ({})", item.label, item.subtitle);
            }
        }
        println!("  [o] Sign Out  [t] tabs  [b] back  [q] quit");

        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            "1" => {
                self.app.settings_service.toggle(PreferenceToggle::Notifications);
            }
            "2" => {
                self.app.settings_service.toggle(PreferenceToggle::LocationSharing);
            }
            "3" => {
                self.app.settings_service.toggle(PreferenceToggle::EmergencyMode);
            }
            "4" => {
                self.app.settings_service.toggle(PreferenceToggle::DarkMode);
            }
            "o" => {
                let prompt = self.app.settings_service.sign_out_prompt();
                let choice = self.confirmer.request(&prompt);
                if !prompt.is_cancel(choice) {
                    self.app.auth_service.sign_out();
                    self.app.router.replace(Route::Login);
                }
            }
            other => {
                self.handle_navigation(other);
            }
        }
        Ok(true)
    }

    fn login_screen(&mut self) -> Result<bool> {
        println!("  [1] Sign In  [2] Create Account  [q] quit");
        let input = read_line("> ")?;
        match input.as_str() {
            "q" => return Ok(false),
            "1" => {
                let mut form = FormState::with_text_fields(&["email", "password"]);
                self.fill_form(&mut form, &[("email", "Email Address"), ("password", "Password")])?;
                if form.validate_required(&["email", "password"]).is_err() {
                    self.notice("Error", "Please fill in all required fields");
                    return Ok(true);
                }
                match self.app.auth_service.login(LoginRequest {
                    email: form.text("email").to_string(),
                    password: form.text("password").to_string(),
                }) {
                    Ok(response) => {
                        println!("{}", response.success_message);
                        self.app.router.replace(Route::ProfileSetup);
                    }
                    Err(err) => self.notice("Error", &err.to_string()),
                }
            }
            "2" => {
                let mut form = FormState::with_text_fields(&[
                    "email",
                    "password",
                    "confirmPassword",
                    "phone",
                ]);
                self.fill_form(
                    &mut form,
                    &[
                        ("email", "Email Address"),
                        ("password", "Password"),
                        ("confirmPassword", "Confirm Password"),
                        ("phone", "Phone Number"),
                    ],
                )?;
                if form.validate_required(&["email", "password"]).is_err() {
                    self.notice("Error", "Please fill in all required fields");
                    return Ok(true);
                }
                match self.app.auth_service.register(RegisterRequest {
                    email: form.text("email").to_string(),
                    password: form.text("password").to_string(),
                    confirm_password: form.text("confirmPassword").to_string(),
                    phone: form.text("phone").to_string(),
                }) {
                    Ok(response) => {
                        println!("{}", response.success_message);
                        self.app.router.replace(Route::ProfileSetup);
                    }
                    Err(err) => self.notice("Error", &err.to_string()),
                }
            }
            _ => {}
        }
        Ok(true)
    }

    fn profile_setup_screen(&mut self) -> Result<bool> {
        let mut form = FormState::with_text_fields(&[
            "fullName",
            "age",
            "gender",
            "mobile",
            "email",
            "emergencyContact",
            "city",
            "state",
        ]);
        self.fill_form(
            &mut form,
            &[
                ("fullName", "Full Name *"),
                ("age", "Age *"),
                ("gender", "Gender *"),
                ("mobile", "Mobile Number *"),
                ("email", "Email Address *"),
                ("emergencyContact", "Emergency Contact *"),
                ("city", "City"),
                ("state", "State"),
            ],
        )?;

        let required = ["fullName", "age", "gender", "mobile", "email", "emergencyContact"];
        if form.validate_required(&required).is_err() {
            self.notice("Error", "Please fill in all required fields");
            return Ok(true);
        }

        let profile = TouristProfile {
            full_name: form.text("fullName").to_string(),
            age: form.text("age").to_string(),
            gender: form.text("gender").to_string(),
            mobile: form.text("mobile").to_string(),
            email: form.text("email").to_string(),
            emergency_contact: form.text("emergencyContact").to_string(),
            city: form.text("city").to_string(),
            state: form.text("state").to_string(),
            ..TouristProfile::default()
        };
        match self.app.profile_service.submit_profile(profile) {
            Ok(result) => {
                self.notice("Profile Setup Complete", &result.success_message);
                self.app.router.replace(result.next);
            }
            Err(err) => self.notice("Error", &err.to_string()),
        }
        Ok(true)
    }

    fn add_dependent_screen(&mut self) -> Result<bool> {
        let fields = [
            ("fullName", "Full Name *"),
            ("age", "Age *"),
            ("gender", "Gender"),
            ("relation", "Relation *"),
            ("medicalCondition", "Medical Condition"),
            ("emergencyContact", "Emergency Contact"),
        ];
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let mut form = FormState::with_text_fields(&names);

        loop {
            self.fill_form(&mut form, &fields)?;
            if form.validate_required(&["fullName", "age", "relation"]).is_err() {
                self.notice("Error", "Please fill in all required fields");
                return Ok(true);
            }

            let request = AddDependentRequest {
                full_name: form.text("fullName").to_string(),
                age: form.text("age").to_string(),
                gender: form.text("gender").to_string(),
                relation: form.text("relation").to_string(),
                medical_condition: form.text("medicalCondition").to_string(),
                emergency_contact: form.text("emergencyContact").to_string(),
            };
            match self.app.dependent_service.add_dependent(request) {
                Ok(_) => {
                    let prompt = self.app.dependent_service.added_prompt();
                    let choice = self.confirmer.request(&prompt);
                    if choice == DependentService::ADD_ANOTHER {
                        form.reset(names.iter().map(|name| (*name, "")));
                        continue;
                    }
                    self.app.router.back();
                    return Ok(true);
                }
                Err(err) => {
                    self.notice("Error", &err.to_string());
                    return Ok(true);
                }
            }
        }
    }

    /// Read a value for each listed field into the form.
    fn fill_form(&mut self, form: &mut FormState, fields: &[(&str, &str)]) -> Result<()> {
        for (name, label) in fields {
            let value = read_line(&format!("{}: ", label))?;
            form.set_field(name, value);
        }
        Ok(())
    }

    /// Show a single-acknowledgement notice.
    fn notice(&mut self, title: &str, message: &str) {
        let prompt = tour_sentinel_core::dialog::ConfirmationPrompt::notice(title, message);
        self.confirmer.request(&prompt);
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
