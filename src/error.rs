//! Error Types
//!
//! Login validation, roster fetch and roster mutation errors.

use thiserror::Error;

/// Login form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub fn label(self) -> &'static str {
        match self {
            LoginField::Username => "Username",
            LoginField::Password => "Password",
        }
    }

    pub fn min_len(self) -> usize {
        match self {
            LoginField::Username => 3,
            LoginField::Password => 6,
        }
    }
}

/// Validation failure of a single login field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(LoginField),
    #[error("{} must be at least {} characters long", .0.label(), .0.min_len())]
    TooShort(LoginField),
}

/// All field errors of one login attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid credentials")]
pub struct LoginErrors {
    pub username: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Roster fetch failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Roster mutation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("no user with id {0}")]
    NotFound(u32),
    #[error("no free user id left")]
    IdsExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Required(LoginField::Username).to_string(), "Username is required");
        assert_eq!(
            FieldError::TooShort(LoginField::Username).to_string(),
            "Username must be at least 3 characters long"
        );
        assert_eq!(FieldError::Required(LoginField::Password).to_string(), "Password is required");
        assert_eq!(
            FieldError::TooShort(LoginField::Password).to_string(),
            "Password must be at least 6 characters long"
        );
    }
}
