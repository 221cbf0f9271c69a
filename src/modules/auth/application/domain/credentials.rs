use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::shared::validation::ValidationIssues;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 24;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 72;

pub const USERNAME_RULES: &str =
    "Use 3-24 chars: lowercase letters, numbers, underscores; no leading/trailing underscore.";

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9_]*[a-z0-9])?$").expect("username pattern compiles")
});

/// A public handle, also used as the portfolio URL slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, ValidationIssues> {
        let len = raw.chars().count();
        if len < USERNAME_MIN_LEN {
            return Err(ValidationIssues::single(
                "username",
                format!("must be at least {USERNAME_MIN_LEN} characters"),
            ));
        }
        if len > USERNAME_MAX_LEN {
            return Err(ValidationIssues::single(
                "username",
                format!("must be at most {USERNAME_MAX_LEN} characters"),
            ));
        }
        if !USERNAME_RE.is_match(raw) {
            return Err(ValidationIssues::single("username", USERNAME_RULES));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored lowercased and trimmed so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationIssues> {
        let normalized = raw.trim().to_lowercase();
        if !EmailAddress::is_valid(&normalized) {
            return Err(ValidationIssues::single("email", "must be a valid email"));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct Password(String);

impl Password {
    pub fn parse(raw: &str) -> Result<Self, ValidationIssues> {
        let len = raw.chars().count();
        if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
            return Err(ValidationIssues::single(
                "password",
                format!("must be {PASSWORD_MIN_LEN} to {PASSWORD_MAX_LEN} characters"),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug)]
pub struct RegistrationInput {
    pub email: Email,
    pub username: Username,
    pub password: Password,
}

impl RegistrationInput {
    /// Validates all three fields and reports every problem at once.
    pub fn parse(email: &str, username: &str, password: &str) -> Result<Self, ValidationIssues> {
        let mut issues = ValidationIssues::new();
        let email = Email::parse(email).map_err(|e| issues.extend(e)).ok();
        let username = Username::parse(username)
            .map_err(|e| issues.extend(e))
            .ok();
        let password = Password::parse(password)
            .map_err(|e| issues.extend(e))
            .ok();

        match (email, username, password) {
            (Some(email), Some(username), Some(password)) if issues.is_empty() => Ok(Self {
                email,
                username,
                password,
            }),
            _ => Err(issues),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_boundaries() {
        assert!(Username::parse("ab").is_err());
        assert!(Username::parse("abc").is_ok());
        assert!(Username::parse("_abc").is_err());
        assert!(Username::parse("abc_").is_err());
        assert!(Username::parse("ab_c9").is_ok());
        assert!(Username::parse(&"a".repeat(24)).is_ok());
        assert!(Username::parse(&"a".repeat(25)).is_err());
    }

    #[test]
    fn test_username_rejects_uppercase_and_symbols() {
        assert!(Username::parse("Abc").is_err());
        assert!(Username::parse("ab-c").is_err());
        assert!(Username::parse("ab c").is_err());
    }

    #[test]
    fn test_email_is_normalized() {
        let email = Email::parse("  Ada@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
        assert!(Email::parse("not-an-email").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(Password::parse("1234567").is_err());
        assert!(Password::parse("12345678").is_ok());
        assert!(Password::parse(&"x".repeat(72)).is_ok());
        assert!(Password::parse(&"x".repeat(73)).is_err());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::parse("hunter2hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    #[test]
    fn test_registration_collects_every_issue() {
        let err = RegistrationInput::parse("nope", "_x", "short").unwrap_err();
        assert!(err.has_path("email"));
        assert!(err.has_path("username"));
        assert!(err.has_path("password"));
    }
}
