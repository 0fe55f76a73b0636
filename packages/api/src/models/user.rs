//! # User models
//!
//! - [`UserInfo`] is the profile returned by the current-user lookup. The helper
//!   [`UserInfo::first_name`] gives the greeting name shown after login.
//! - [`Credentials`] is the login payload.
//! - [`Registration`] is the signup payload. The password confirmation is a form
//!   concern, so it is passed to [`Registration::validate`] rather than stored.
//!
//! Both payloads validate themselves before anything is sent; see
//! [`crate::ValidationError`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// User information returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserInfo {
    /// First word of the user's name, or the email when the name is blank.
    pub fn first_name(&self) -> &str {
        match self.name.split_whitespace().next() {
            Some(first) => first,
            None => &self.email,
        }
    }
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Trims the email; the password is sent as typed.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(())
    }
}

/// Signup payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub const MIN_NAME_LEN: usize = 2;
    pub const MIN_PASSWORD_LEN: usize = 6;

    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// Checks run in form order; the first failure wins.
    pub fn validate(&self, confirm_password: &str) -> Result<(), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name.chars().count() < Self::MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort {
                min: Self::MIN_NAME_LEN,
            });
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        if self.password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: Self::MIN_PASSWORD_LEN,
            });
        }
        if confirm_password != self.password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let user = UserInfo {
            id: "user-1".into(),
            name: "  Dimas Saputra ".into(),
            email: "dimas@dicoding.com".into(),
        };
        assert_eq!(user.first_name(), "Dimas");

        let nameless = UserInfo {
            name: " ".into(),
            ..user
        };
        assert_eq!(nameless.first_name(), "dimas@dicoding.com");
    }

    #[test]
    fn test_credentials_require_both_fields() {
        assert_eq!(
            Credentials::new("  ", "secret").validate(),
            Err(ValidationError::EmptyEmail)
        );
        assert_eq!(
            Credentials::new("a@b.co", "   ").validate(),
            Err(ValidationError::EmptyPassword)
        );
        let ok = Credentials::new(" a@b.co ", "secret");
        assert_eq!(ok.email, "a@b.co");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_registration_rules_in_order() {
        let check = |name: &str, email: &str, pw: &str, confirm: &str| {
            Registration::new(name, email, pw).validate(confirm)
        };

        assert_eq!(check("", "", "", ""), Err(ValidationError::EmptyName));
        assert_eq!(
            check("D", "x", "", ""),
            Err(ValidationError::NameTooShort { min: 2 })
        );
        assert_eq!(check("Di", "", "", ""), Err(ValidationError::EmptyEmail));
        assert_eq!(check("Di", "not-an-email", "", ""), Err(ValidationError::InvalidEmail));
        assert_eq!(check("Di", "di@mail.com", "", ""), Err(ValidationError::EmptyPassword));
        assert_eq!(
            check("Di", "di@mail.com", "12345", "12345"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(
            check("Di", "di@mail.com", "123456", "123457"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(check("Di", "di@mail.com", "123456", "123456"), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b@c.de"));
    }
}
