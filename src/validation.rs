//! Form Validation
//!
//! Client-side checks that gate the login and user forms.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Credentials;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ValidationError::NameRequired => "Name is required",
            ValidationError::EmailRequired => "Email is required",
            ValidationError::EmailInvalid => "Please enter a valid email address",
            ValidationError::PasswordRequired => "Password is required",
            ValidationError::PasswordTooShort => "Password must be at least 6 characters",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        Err(ValidationError::EmailRequired)
    } else if !EMAIL_RE.is_match(email) {
        Err(ValidationError::EmailInvalid)
    } else {
        Ok(())
    }
}

/// Login password: required, at least [`MIN_PASSWORD_LEN`] characters
pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::PasswordRequired)
    } else if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        Err(ValidationError::PasswordTooShort)
    } else {
        Ok(())
    }
}

/// Per-field failures of a login attempt; both fields are always checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

/// Credentials ready to send, or every field error at once
pub fn check_login(email: &str, password: &str) -> Result<Credentials, LoginErrors> {
    let errors = LoginErrors {
        email: validate_email(email).err(),
        password: validate_login_password(password).err(),
    };
    if errors == LoginErrors::default() {
        Ok(Credentials { email: email.to_string(), password: password.to_string() })
    } else {
        Err(errors)
    }
}

/// User form. Password may stay blank when editing.
pub fn validate_user(name: &str, email: &str, password: &str, editing: bool) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    validate_email(email)?;
    if !editing && password.trim().is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}
