//! Module `commands`
//!
//! Parses the navigation commands typed at the front end prompt and defines
//! the result structure returned by form submissions.

use crate::auth::ProfileRecord;
use crate::client::Page;
use crate::error::ValidationErrors;
use crate::protocol::responses::Notification;

/// A navigation or session command typed at the prompt.
#[derive(Debug, PartialEq)]
pub enum Command {
    Home,
    Login,
    Signup,
    Profile,
    Logout,
    Help,
    Quit,
    Unknown(String),
}

/// Represents the outcome status of a submission.
#[derive(Debug, PartialEq)]
pub enum SubmitStatus {
    Success,
    Invalid(ValidationErrors),
    Failure(String),
}

/// Struct encapsulating the full result of a form submission.
#[derive(Debug)]
pub struct SubmitResult {
    pub status: SubmitStatus,
    pub notification: Option<Notification>,
    pub redirect: Option<Page>,
    pub profile: Option<ProfileRecord>,
}

impl SubmitResult {
    pub fn new(status: SubmitStatus) -> Self {
        Self {
            status,
            notification: None,
            redirect: None,
            profile: None,
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn with_redirect(mut self, page: Page) -> Self {
        self.redirect = Some(page);
        self
    }

    pub fn with_profile(mut self, profile: ProfileRecord) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, SubmitStatus::Success)
    }

    /// Field errors to show under the inputs, if validation failed.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match &self.status {
            SubmitStatus::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Parses a raw prompt line into a `Command`.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let cmd = trimmed.to_ascii_lowercase();

    match cmd.as_str() {
        "home" | "/" | "h" => Command::Home,
        "login" | "/login" | "signin" | "l" => Command::Login,
        "signup" | "/signup" | "register" | "s" => Command::Signup,
        "profile" | "/home" | "p" => Command::Profile,
        "logout" | "o" => Command::Logout,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
