//! Submission handlers
//!
//! Each handler runs the validator, then the user store, and packages the
//! outcome as a `SubmitResult` the front end can render: field errors, a
//! notification, and where to go next.

use chrono::NaiveDate;
use log::warn;

use crate::auth::{LoginForm, SignupForm, ValidationPolicy, validate_login, validate_signup_on};
use crate::client::{Page, guard};
use crate::error::handlers::{error_to_notification, handle_error};
use crate::error::{AppError, AuthError};
use crate::middleware::logging::{log_rejected, log_submission};
use crate::protocol::commands::{SubmitResult, SubmitStatus};
use crate::protocol::responses::{
    LOGIN_ERROR, LOGIN_SUCCESS, LOGOUT_SUCCESS, Notification, SIGNUP_ERROR, SIGNUP_SUCCESS,
};
use crate::storage::{KeyValueStore, UserStore};

/// Logs `err` and turns it into a failed result carrying its notification.
fn failure(err: AppError) -> SubmitResult {
    handle_error(&err);
    SubmitResult::new(SubmitStatus::Failure(err.to_string()))
        .with_notification(error_to_notification(&err))
}

/// Handles the signup form: validate, then insert if the email is free.
///
/// On success the user is sent to the login page; nobody is logged in yet.
pub fn handle_signup<S: KeyValueStore>(
    store: &mut UserStore<S>,
    form: &SignupForm,
    policy: &ValidationPolicy,
    today: NaiveDate,
) -> SubmitResult {
    log_submission("Signup", &form.email);

    if let Err(errors) = validate_signup_on(form, policy, today) {
        log_rejected("Signup", &errors);
        return SubmitResult::new(SubmitStatus::Invalid(errors));
    }

    match store.try_register(&form.email, form.to_record()) {
        Ok(()) => SubmitResult::new(SubmitStatus::Success)
            .with_notification(Notification::success(SIGNUP_SUCCESS))
            .with_redirect(Page::Login),
        Err(AuthError::Storage(e)) => {
            failure(e.into()).with_notification(Notification::failure(SIGNUP_ERROR))
        }
        Err(e) => failure(e.into()),
    }
}

/// Handles the login form: validate, verify, then open the session.
pub fn handle_login<S: KeyValueStore>(
    store: &mut UserStore<S>,
    form: &LoginForm,
    policy: &ValidationPolicy,
) -> SubmitResult {
    log_submission("Login", &form.email);

    if let Err(errors) = validate_login(form, policy) {
        log_rejected("Login", &errors);
        return SubmitResult::new(SubmitStatus::Invalid(errors));
    }

    let profile = match store.verify(&form.email, &form.password) {
        Ok(profile) => profile,
        Err(AuthError::Storage(e)) => {
            return failure(e.into()).with_notification(Notification::failure(LOGIN_ERROR));
        }
        Err(e) => return failure(e.into()),
    };

    if let Err(e) = store.set_current_session(&form.email) {
        return failure(e.into()).with_notification(Notification::failure(LOGIN_ERROR));
    }

    SubmitResult::new(SubmitStatus::Success)
        .with_notification(Notification::success(LOGIN_SUCCESS))
        .with_redirect(Page::Profile)
        .with_profile(profile)
}

/// Clears the session and returns to the landing page.
pub fn handle_logout<S: KeyValueStore>(store: &mut UserStore<S>) -> SubmitResult {
    match store.clear_current_session() {
        Ok(()) => SubmitResult::new(SubmitStatus::Success)
            .with_notification(Notification::success(LOGOUT_SUCCESS))
            .with_redirect(Page::Landing),
        Err(e) => failure(e.into()),
    }
}

/// Loads the profile page for the current session.
///
/// Without a session the result redirects to login. A session whose profile
/// is missing or unreadable is cleared and also sent back to login.
pub fn handle_profile<S: KeyValueStore>(store: &mut UserStore<S>) -> SubmitResult {
    let email = match store.current_session() {
        Ok(Some(email)) => email,
        Ok(None) => {
            return SubmitResult::new(SubmitStatus::Failure("No active session".into()))
                .with_redirect(Page::Login);
        }
        Err(e) => return failure(e.into()).with_redirect(Page::Login),
    };

    if let Some(profile) = store.get_profile(&email) {
        return SubmitResult::new(SubmitStatus::Success).with_profile(profile);
    }

    if let Err(e) = store.clear_current_session() {
        warn!("Could not clear stale session for {}: {}", email, e);
    }
    failure(AuthError::CorruptState(email).into()).with_redirect(Page::Login)
}

/// Where a request for `requested` lands given the stored session.
pub fn resolve_route<S: KeyValueStore>(store: &UserStore<S>, requested: Page) -> Page {
    let session = match store.current_session() {
        Ok(session) => session,
        Err(e) => {
            warn!("Session unreadable, treating as logged out: {}", e);
            None
        }
    };
    guard(requested, session.as_deref())
}
