//! Front end responses
//!
//! Defines the transient notifications shown after a form submission and
//! their text rendering.

use std::fmt;

use crate::error::ValidationErrors;

pub const SIGNUP_SUCCESS: (&str, &str) = (
    "Signup Successful",
    "Your account has been created. Please log in.",
);
pub const SIGNUP_CONFLICT: (&str, &str) =
    ("Signup Failed", "This email address is already registered.");
pub const SIGNUP_ERROR: (&str, &str) = ("Error", "Could not process signup.");
pub const LOGIN_SUCCESS: (&str, &str) =
    ("Login Successful", "You have been logged in successfully.");
pub const LOGIN_INVALID: (&str, &str) = ("Login Failed", "Invalid email or password.");
pub const LOGIN_NO_USERS: (&str, &str) = (
    "Login Failed",
    "No signup data found. Please sign up first.",
);
pub const LOGIN_ERROR: (&str, &str) = ("Error", "Could not process login.");
pub const LOGOUT_SUCCESS: (&str, &str) = ("Logged Out", "You have been logged out.");
pub const SESSION_EXPIRED: (&str, &str) = ("Session Expired", "Please log in again.");
pub const STORAGE_ERROR: (&str, &str) = ("Error", "Could not access saved account data.");
pub const INVALID_INPUT: (&str, &str) = ("Invalid Input", "Please correct the highlighted fields.");
pub const CONFIG_ERROR: (&str, &str) = ("Error", "Invalid configuration.");

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// A transient success or failure message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success((title, description): (&str, &str)) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: Variant::Default,
        }
    }

    pub fn failure((title, description): (&str, &str)) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.variant {
            Variant::Default => "[ok]",
            Variant::Destructive => "[!!]",
        };
        write!(f, "{} {}: {}", marker, self.title, self.description)
    }
}

/// Render field errors the way a form lists them under each input
pub fn format_field_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for field in errors.fields() {
        for message in errors.messages(field) {
            out.push_str(&format!("  {}: {}\n", field.label(), message));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Field;

    #[test]
    fn renders_variant_marker() {
        let ok = Notification::success(LOGIN_SUCCESS);
        let failed = Notification::failure(LOGIN_INVALID);

        assert_eq!(
            ok.to_string(),
            "[ok] Login Successful: You have been logged in successfully."
        );
        assert!(failed.to_string().starts_with("[!!] Login Failed"));
        assert!(failed.is_destructive());
    }

    #[test]
    fn groups_errors_by_field() {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Password, "a");
        errors.push(Field::Email, "b");
        errors.push(Field::Password, "c");

        assert_eq!(
            format_field_errors(&errors),
            "  Password: a\n  Password: c\n  Email: b\n"
        );
    }
}
