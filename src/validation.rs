//! Input predicates shared by the server handlers and [`crate::client::ApiClient`].
//!
//! The server is authoritative: the client runs the same checks before sending
//! a registration, but the handler always re-runs them.

use thiserror::Error;
use crate::models::RegisterForm;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Invalid emergency contact email")]
    InvalidEmergencyContact,
}

/// A registration whose fields all passed [`check_registration`].
#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub emergency_contact: String,
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain
/// with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let clean = |part: &str| !part.is_empty() && !part.contains('@') && !part.chars().any(char::is_whitespace);
    if !clean(local) || !clean(domain) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Length is counted in Unicode scalar values, not bytes or UTF-16 units:
/// a password of six emoji passes even though it is twelve UTF-16 units long,
/// and one of three emoji fails.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Checks run in the same order the server reports them: presence first, then shape.
pub fn check_registration(form: &RegisterForm) -> Result<ValidRegistration, RegistrationError> {
    let (Some(name), Some(email), Some(password), Some(emergency_contact)) = (
        present(&form.name),
        present(&form.email),
        present(&form.password),
        present(&form.emergency_contact),
    ) else {
        return Err(RegistrationError::MissingFields);
    };

    if !is_valid_email(email) {
        return Err(RegistrationError::InvalidEmail);
    }
    if !is_valid_password(password) {
        return Err(RegistrationError::WeakPassword);
    }
    if !is_valid_email(emergency_contact) {
        return Err(RegistrationError::InvalidEmergencyContact);
    }

    Ok(ValidRegistration {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        emergency_contact: emergency_contact.to_string(),
    })
}
