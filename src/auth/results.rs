//! Authentication result types
//!
//! Names the form fields that validation results are keyed by.

use std::fmt;

/// A form input that a validation message can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    BirthDay,
    BirthMonth,
    BirthYear,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Key used by the form layer, matching the stored record's field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::BirthDay => "birthDay",
            Field::BirthMonth => "birthMonth",
            Field::BirthYear => "birthYear",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human readable input label
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::BirthDay => "Day",
            Field::BirthMonth => "Month",
            Field::BirthYear => "Year",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
