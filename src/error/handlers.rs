//! Error handlers
//!
//! Logs errors and translates them into user-visible notifications.

use crate::error::types::{AppError, AuthError};
use crate::protocol::responses::{
    CONFIG_ERROR, INVALID_INPUT, LOGIN_INVALID, LOGIN_NO_USERS, Notification, SESSION_EXPIRED,
    SIGNUP_CONFLICT, STORAGE_ERROR,
};
use log::{error, warn};

/// Handle an application error
pub fn handle_error(err: &AppError) {
    match err {
        AppError::Validation(_) | AppError::Auth(AuthError::InvalidCredentials(_)) => {
            warn!("Rejected request: {}", err)
        }
        _ => error!("Application error: {}", err),
    }
}

/// Convert an error to the notification the front end shows
pub fn error_to_notification(err: &AppError) -> Notification {
    match err {
        AppError::Auth(AuthError::AlreadyExists(_)) => Notification::failure(SIGNUP_CONFLICT),
        AppError::Auth(AuthError::InvalidCredentials(_)) => Notification::failure(LOGIN_INVALID),
        AppError::Auth(AuthError::NotFound) => Notification::failure(LOGIN_NO_USERS),
        AppError::Auth(AuthError::CorruptState(_)) => Notification::failure(SESSION_EXPIRED),
        AppError::Auth(AuthError::Storage(_)) | AppError::Storage(_) | AppError::IoError(_) => {
            Notification::failure(STORAGE_ERROR)
        }
        AppError::Validation(_) => Notification::failure(INVALID_INPUT),
        AppError::Config(_) => Notification::failure(CONFIG_ERROR),
    }
}
