//! Credential and profile records
//!
//! The shapes persisted in the user database and the raw form values they
//! are built from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Login secret pair, stored as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Profile shown after login. Birth fields keep the zero-padded form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
}

impl ProfileRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Date of birth as `DD/MM/YYYY`
    pub fn birth_date(&self) -> String {
        format!("{}/{}/{}", self.birth_day, self.birth_month, self.birth_year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub credentials: Credentials,
    pub profile: ProfileRecord,
}

impl UserRecord {
    /// Key the record is stored under
    pub fn email(&self) -> &str {
        &self.credentials.email
    }
}

/// Email to record mapping, serialized as one JSON object
pub type UserDatabase = BTreeMap<String, UserRecord>;

/// Raw values collected by the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Builds the record persisted for this form. Callers validate first.
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            credentials: Credentials {
                email: self.email.clone(),
                password: self.password.clone(),
            },
            profile: ProfileRecord {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                birth_day: self.birth_day.clone(),
                birth_month: self.birth_month.clone(),
                birth_year: self.birth_year.clone(),
            },
        }
    }
}

/// Raw values collected by the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_with_camel_case_keys() {
        let record = SignupForm {
            first_name: "Jo".into(),
            last_name: "Li".into(),
            email: "a@b.com".into(),
            birth_day: "01".into(),
            birth_month: "02".into(),
            birth_year: "2000".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
        }
        .to_record();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["credentials"]["email"], "a@b.com");
        assert_eq!(json["profile"]["firstName"], "Jo");
        assert_eq!(json["profile"]["birthMonth"], "02");
        assert_eq!(record.profile.birth_date(), "01/02/2000");
        assert_eq!(record.profile.full_name(), "Jo Li");
    }
}
