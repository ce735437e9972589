use anyhow::Result;
use log::{info, warn};
use shared::{AuthResponse, LoginRequest, RegisterRequest, ValidationError};

/// Service for the sign-in / registration screen.
///
/// There is no authentication backend; credentials are validated for
/// shape only and the session records which email signed in.
#[derive(Debug, Clone, Default)]
pub struct AuthService {
    signed_in: Option<String>,
}

impl AuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in to an existing account.
    pub fn login(&mut self, request: LoginRequest) -> Result<AuthResponse> {
        info!("Login attempt: {}", request.email);

        self.validate_credentials(&request.email, &request.password)?;

        self.signed_in = Some(request.email.clone());
        info!("Signed in: {}", request.email);

        Ok(AuthResponse {
            email: request.email,
            success_message: "Signed in successfully".to_string(),
        })
    }

    /// Register a new account.
    pub fn register(&mut self, request: RegisterRequest) -> Result<AuthResponse> {
        info!("Registration attempt: {}", request.email);

        self.validate_credentials(&request.email, &request.password)?;

        if request.password != request.confirm_password {
            warn!("Registration rejected: password mismatch");
            return Err(ValidationError::PasswordMismatch.into());
        }

        self.signed_in = Some(request.email.clone());
        info!("Registered: {}", request.email);

        Ok(AuthResponse {
            email: request.email,
            success_message: "Account created successfully".to_string(),
        })
    }

    /// Email of the signed-in user, if any.
    pub fn signed_in(&self) -> Option<&str> {
        self.signed_in.as_deref()
    }

    /// End the session.
    pub fn sign_out(&mut self) {
        if let Some(email) = self.signed_in.take() {
            info!("Signed out: {}", email);
        }
    }

    fn validate_credentials(&self, email: &str, password: &str) -> Result<()> {
        // values are deliberately not trimmed, matching form validation
        let mut missing = Vec::new();
        if email.is_empty() {
            missing.push("email".to_string());
        }
        if password.is_empty() {
            missing.push("password".to_string());
        }
        if !missing.is_empty() {
            warn!("Credential validation failed, missing: {:?}", missing);
            return Err(ValidationError::MissingRequiredFields(missing).into());
        }
        Ok(())
    }
}
