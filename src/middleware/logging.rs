//! Logging middleware
//!
//! Provides request logging functionality. Never logs secrets.

use log::{info, warn};

use crate::client::Page;
use crate::error::ValidationErrors;

/// Log a form submission
pub fn log_submission(form: &str, email: &str) {
    info!("{} form submitted for {}", form, email);
}

/// Log a rejected form, naming only the offending fields
pub fn log_rejected(form: &str, errors: &ValidationErrors) {
    let fields = errors
        .fields()
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    warn!("{} form rejected, invalid fields: {}", form, fields);
}

/// Log a page change
pub fn log_navigation(from: Page, to: Page) {
    info!("Navigating {} -> {}", from, to);
}
