//! Email Value Object
//!
//! Shape check used by preview validation: `local@domain.tld`, no
//! whitespace, exactly one `@`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object with validation
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new validated email
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let value = value.into();

        if value.is_empty() {
            return Err(EmailError::Empty);
        }

        if !Self::is_valid_format(&value) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(value))
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part of the email
    pub fn domain(&self) -> Option<&str> {
        self.0.split('@').nth(1)
    }

    /// Get the local part (before @)
    pub fn local_part(&self) -> Option<&str> {
        self.0.split('@').next()
    }

    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            return false;
        }

        let local = parts[0];
        let domain = parts[1];

        // Some dot in the domain must have text on both sides.
        !local.is_empty()
            && domain
                .char_indices()
                .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    Empty,
    InvalidFormat,
}

impl std::error::Error for EmailError {}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Email cannot be empty"),
            Self::InvalidFormat => write!(f, "Please enter a valid email address"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("a@b.co").unwrap();
        assert_eq!(email.domain(), Some("b.co"));
        assert_eq!(email.local_part(), Some("a"));
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(Email::new("Test@Example.com").unwrap().as_str(), "Test@Example.com");
    }

    #[test]
    fn test_empty_email() {
        assert!(matches!(Email::new(""), Err(EmailError::Empty)));
    }

    #[test]
    fn test_invalid_email_no_at() {
        assert!(matches!(Email::new("not-an-email"), Err(EmailError::InvalidFormat)));
    }

    #[test]
    fn test_invalid_email_no_dot_in_domain() {
        assert!(Email::new("a@localhost").is_err());
        assert!(Email::new("a@b.").is_err());
        assert!(Email::new("a@.b").is_err());
    }

    #[test]
    fn test_invalid_email_whitespace_or_double_at() {
        assert!(Email::new(" a@b.co").is_err());
        assert!(Email::new("a b@c.de").is_err());
        assert!(Email::new("a@b@c.de").is_err());
    }

    #[test]
    fn test_dot_anywhere_inside_domain() {
        assert!(Email::new("a@.b.c").is_ok());
        assert!(Email::new("first.last@mail.example.org").is_ok());
    }
}
