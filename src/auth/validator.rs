//! Form validator
//!
//! Implements the signup and login rule sets. Every field is checked and every
//! violation collected, so a form can display all problems in one pass.

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use super::birthdate::{is_in_future, is_older_than, parse_birth_date};
use super::credentials::{LoginForm, SignupForm};
use super::password::PasswordChecklist;
use super::results::Field;
use crate::error::ValidationErrors;

// Leading dots and ".." are rejected separately; the regex crate has no lookahead.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]+$").expect("name pattern compiles"));

/// Tunable limits of the rule set
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub min_name_length: usize,
    pub min_password_length: usize,
    pub max_age_years: u32,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            min_password_length: 8,
            max_age_years: 110,
        }
    }
}

/// Name rules in precedence order. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy)]
enum NameRule {
    MinLength,
    Charset,
}

const NAME_RULES: [NameRule; 2] = [NameRule::MinLength, NameRule::Charset];

impl NameRule {
    fn holds(self, value: &str, policy: &ValidationPolicy) -> bool {
        match self {
            NameRule::MinLength => value.chars().count() >= policy.min_name_length,
            NameRule::Charset => NAME_PATTERN.is_match(value),
        }
    }

    fn message(self, subject: &str, policy: &ValidationPolicy) -> String {
        match self {
            NameRule::MinLength => format!(
                "{} must be at least {} characters",
                subject, policy.min_name_length
            ),
            NameRule::Charset => format!(
                "{} can only contain letters, spaces, hyphens, or apostrophes",
                subject
            ),
        }
    }
}

/// Checks `local@domain.tld` syntax.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

fn check_name(field: Field, value: &str, policy: &ValidationPolicy, errors: &mut ValidationErrors) {
    let subject = match field {
        Field::FirstName => "First name",
        _ => "Last name",
    };

    if let Some(rule) = NAME_RULES.iter().find(|rule| !rule.holds(value, policy)) {
        errors.push(field, rule.message(subject, policy));
    }
}

fn check_required(field: Field, value: &str, subject: &str, errors: &mut ValidationErrors) {
    if value.is_empty() {
        errors.push(field, format!("{} is required", subject));
    }
}

/// Validates a signup form against today's local date.
pub fn validate_signup(form: &SignupForm, policy: &ValidationPolicy) -> Result<(), ValidationErrors> {
    validate_signup_on(form, policy, Local::now().date_naive())
}

/// Validates a signup form, treating `today` as the current date.
///
/// Field predicates run first, in form order; the cross-field refinements
/// (password confirmation, date validity, date range) are appended after them.
pub fn validate_signup_on(
    form: &SignupForm,
    policy: &ValidationPolicy,
    today: NaiveDate,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_name(Field::FirstName, &form.first_name, policy, &mut errors);
    check_name(Field::LastName, &form.last_name, policy, &mut errors);

    if !is_valid_email(&form.email) {
        errors.push(Field::Email, "Please enter a valid email address");
    }

    check_required(Field::BirthDay, &form.birth_day, "Day", &mut errors);
    check_required(Field::BirthMonth, &form.birth_month, "Month", &mut errors);
    check_required(Field::BirthYear, &form.birth_year, "Year", &mut errors);

    let checklist = PasswordChecklist::evaluate(&form.password, policy.min_password_length);
    for message in checklist.violations(policy.min_password_length) {
        errors.push(Field::Password, message);
    }

    if form.password != form.confirm_password {
        errors.push(Field::ConfirmPassword, "Passwords don't match");
    }

    match parse_birth_date(&form.birth_day, &form.birth_month, &form.birth_year) {
        Some(date) => {
            if is_in_future(date, today) {
                errors.push(Field::BirthYear, "Date cannot be in the future");
            }
            if is_older_than(date, today, policy.max_age_years) {
                errors.push(
                    Field::BirthYear,
                    format!(
                        "Date cannot be more than {} years ago",
                        policy.max_age_years
                    ),
                );
            }
        }
        None => errors.push(Field::BirthDay, "Please enter a valid date"),
    }

    errors.into_result()
}

/// Validates a login form. Whether the account exists is the store's concern.
pub fn validate_login(form: &LoginForm, policy: &ValidationPolicy) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !is_valid_email(&form.email) {
        errors.push(Field::Email, "Please enter a valid email address");
    }

    if form.password.chars().count() < policy.min_password_length {
        errors.push(
            Field::Password,
            format!(
                "Password must be at least {} characters",
                policy.min_password_length
            ),
        );
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn valid_form() -> SignupForm {
        SignupForm {
            first_name: "Jo".into(),
            last_name: "Li".into(),
            email: "a@b.com".into(),
            birth_day: "01".into(),
            birth_month: "01".into(),
            birth_year: "2000".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
        }
    }

    fn signup_errors(form: &SignupForm) -> ValidationErrors {
        validate_signup_on(form, &ValidationPolicy::default(), today())
            .expect_err("form should be rejected")
    }

    #[test]
    fn accepts_well_formed_form() {
        assert!(validate_signup_on(&valid_form(), &ValidationPolicy::default(), today()).is_ok());
    }

    #[test]
    fn accepts_names_with_spaces_hyphens_and_apostrophes() {
        let mut form = valid_form();
        form.first_name = "Mary Ann".into();
        form.last_name = "O'Neil-Smith".into();
        assert!(validate_signup_on(&form, &ValidationPolicy::default(), today()).is_ok());
    }

    #[test]
    fn short_name_reports_length_before_charset() {
        let mut form = valid_form();
        form.first_name = "1".into();
        form.last_name = String::new();

        let errors = signup_errors(&form);
        assert_eq!(
            errors.messages(Field::FirstName),
            vec!["First name must be at least 2 characters"]
        );
        assert_eq!(
            errors.messages(Field::LastName),
            vec!["Last name must be at least 2 characters"]
        );
    }

    #[test]
    fn digits_in_name_report_charset() {
        let mut form = valid_form();
        form.first_name = "John3".into();

        let errors = signup_errors(&form);
        assert_eq!(
            errors.first(Field::FirstName),
            Some("First name can only contain letters, spaces, hyphens, or apostrophes")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_pattern() {
        for good in ["a@b.com", "john.doe@test.com", "x+y@mail.example.org", "A@B.CO"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "", "plain", "a@b", "a@b.c", "@b.com", "a@.com", ".a@b.com", "a..b@c.com",
            "a b@c.com", "a@b..com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn all_password_violations_surface_together() {
        let mut form = valid_form();
        form.password = "abc".into();
        form.confirm_password = "abc".into();

        let errors = signup_errors(&form);
        assert_eq!(
            errors.messages(Field::Password),
            vec![
                "Password must be at least 8 characters",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn mismatched_confirmation() {
        let mut form = valid_form();
        form.confirm_password = "Abcdef1?".into();

        let errors = signup_errors(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::ConfirmPassword, "Passwords don't match"));
    }

    #[test]
    fn february_31st_is_invalid() {
        let mut form = valid_form();
        form.birth_day = "31".into();
        form.birth_month = "02".into();

        let errors = signup_errors(&form);
        assert_eq!(
            errors.messages(Field::BirthDay),
            vec!["Please enter a valid date"]
        );
        assert!(errors.messages(Field::BirthYear).is_empty());
    }

    #[test]
    fn next_year_is_in_future() {
        let mut form = valid_form();
        form.birth_year = (today().year() + 1).to_string();

        let errors = signup_errors(&form);
        assert_eq!(
            errors.messages(Field::BirthYear),
            vec!["Date cannot be in the future"]
        );
    }

    #[test]
    fn age_limit_is_110_years() {
        let mut form = valid_form();
        form.birth_day = "18".into();
        form.birth_month = "10".into();

        form.birth_year = (today().year() - 111).to_string();
        let errors = signup_errors(&form);
        assert_eq!(
            errors.messages(Field::BirthYear),
            vec!["Date cannot be more than 110 years ago"]
        );

        form.birth_year = (today().year() - 110).to_string();
        assert!(validate_signup_on(&form, &ValidationPolicy::default(), today()).is_ok());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = signup_errors(&SignupForm::default());

        assert_eq!(
            errors.first(Field::FirstName),
            Some("First name must be at least 2 characters")
        );
        assert_eq!(
            errors.first(Field::LastName),
            Some("Last name must be at least 2 characters")
        );
        assert_eq!(
            errors.first(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.first(Field::BirthMonth), Some("Month is required"));
        assert_eq!(errors.first(Field::BirthYear), Some("Year is required"));
        assert_eq!(
            errors.messages(Field::BirthDay),
            vec!["Day is required", "Please enter a valid date"]
        );
        assert_eq!(errors.messages(Field::Password).len(), 5);
        assert!(errors.first(Field::ConfirmPassword).is_none());
    }

    #[test]
    fn errors_follow_form_order() {
        let mut form = valid_form();
        form.first_name = "J".into();
        form.email = "bad".into();
        form.confirm_password = "nope".into();

        let errors = signup_errors(&form);
        assert_eq!(
            errors.fields(),
            vec![Field::FirstName, Field::Email, Field::ConfirmPassword]
        );
    }

    #[test]
    fn policy_limits_drive_messages() {
        let policy = ValidationPolicy {
            min_name_length: 3,
            min_password_length: 10,
            max_age_years: 50,
        };
        let errors = validate_signup_on(&valid_form(), &policy, today()).unwrap_err();

        assert_eq!(
            errors.first(Field::FirstName),
            Some("First name must be at least 3 characters")
        );
        assert_eq!(
            errors.first(Field::Password),
            Some("Password must be at least 10 characters")
        );
        assert!(errors.first(Field::BirthYear).is_none());
    }

    #[test]
    fn login_checks_email_and_length_only() {
        let policy = ValidationPolicy::default();
        let ok = LoginForm {
            email: "a@b.com".into(),
            password: "password".into(),
        };
        assert!(validate_login(&ok, &policy).is_ok());

        let bad = LoginForm {
            email: "nope".into(),
            password: "short".into(),
        };
        let errors = validate_login(&bad, &policy).unwrap_err();
        assert_eq!(
            errors.first(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.first(Field::Password),
            Some("Password must be at least 8 characters")
        );
    }
}
