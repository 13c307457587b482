//! Session Gate
//!
//! Login validation and the authenticated-user marker. No password is checked
//! against any backend: well-formed credentials always succeed.

use crate::error::{FieldError, LoginErrors, LoginField};

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

fn check(field: LoginField, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required(field))
    } else if value.chars().count() < field.min_len() {
        Some(FieldError::TooShort(field))
    } else {
        None
    }
}

/// Validate both fields
pub fn validate(username: &str, password: &str) -> LoginErrors {
    LoginErrors {
        username: check(LoginField::Username, username),
        password: check(LoginField::Password, password),
    }
}

/// Open a session for well-formed credentials
pub fn login(username: &str, password: &str) -> Result<Session, LoginErrors> {
    let errors = validate(username, password);
    if errors.is_empty() {
        Ok(Session { username: username.to_string() })
    } else {
        Err(errors)
    }
}

/// Clear the session
pub fn logout(session: &mut Option<Session>) {
    *session = None;
}

/// Login form buffer with per-field touched state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    username_touched: bool,
    password_touched: bool,
}

impl LoginForm {
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Username => self.username = value,
            LoginField::Password => self.password = value,
        }
    }

    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    /// Mark a field as visited (on blur)
    pub fn touch(&mut self, field: LoginField) {
        match field {
            LoginField::Username => self.username_touched = true,
            LoginField::Password => self.password_touched = true,
        }
    }

    fn touched(&self, field: LoginField) -> bool {
        match field {
            LoginField::Username => self.username_touched,
            LoginField::Password => self.password_touched,
        }
    }

    /// Error to show inline next to `field`, only once it was touched
    pub fn visible_error(&self, field: LoginField) -> Option<FieldError> {
        if !self.touched(field) {
            return None;
        }
        check(field, self.value(field))
    }

    /// Touch every field and try to log in
    pub fn submit(&mut self) -> Result<Session, LoginErrors> {
        self.touch(LoginField::Username);
        self.touch(LoginField::Password);
        login(&self.username, &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_length_rules() {
        assert!(login("ab", "123456").is_err());
        assert!(login("abc", "12345").is_err());
        assert_eq!(login("abc", "123456").unwrap().username, "abc");
    }

    #[test]
    fn test_login_error_kinds() {
        let errors = login("", "123").unwrap_err();
        assert_eq!(errors.username, Some(FieldError::Required(LoginField::Username)));
        assert_eq!(errors.password, Some(FieldError::TooShort(LoginField::Password)));

        let errors = login("ab", "").unwrap_err();
        assert_eq!(errors.username, Some(FieldError::TooShort(LoginField::Username)));
        assert_eq!(errors.password, Some(FieldError::Required(LoginField::Password)));
    }

    #[test]
    fn test_login_counts_characters_not_bytes() {
        // two characters, six bytes
        assert!(login("日本", "123456").is_err());
        assert!(login("日本語", "123456").is_ok());
    }

    #[test]
    fn test_logout_clears_any_session() {
        let mut session = Some(Session { username: "leanne".to_string() });
        logout(&mut session);
        assert_eq!(session, None);

        logout(&mut session);
        assert_eq!(session, None);
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = LoginForm::default();
        form.set(LoginField::Username, "ab".to_string());
        assert_eq!(form.visible_error(LoginField::Username), None);

        form.touch(LoginField::Username);
        assert_eq!(
            form.visible_error(LoginField::Username),
            Some(FieldError::TooShort(LoginField::Username))
        );
        assert_eq!(form.visible_error(LoginField::Password), None);
    }

    #[test]
    fn test_failed_submit_touches_all_fields() {
        let mut form = LoginForm::default();
        assert!(form.submit().is_err());
        assert_eq!(
            form.visible_error(LoginField::Password),
            Some(FieldError::Required(LoginField::Password))
        );

        form.set(LoginField::Username, "leanne".to_string());
        form.set(LoginField::Password, "secret1".to_string());
        assert_eq!(form.visible_error(LoginField::Username), None);
        assert_eq!(form.submit().unwrap().username, "leanne");
    }
}
