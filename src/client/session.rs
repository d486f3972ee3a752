//! Client session gating
//!
//! Decides where a navigation request actually lands given the stored
//! session.

use log::debug;

use crate::client::state::Page;

/// Resolves `requested` against the current session email.
///
/// Pages that need a session redirect to the login page when there is none.
pub fn guard(requested: Page, session: Option<&str>) -> Page {
    if requested.requires_session() && session.is_none() {
        debug!("No session for {}, redirecting to login", requested);
        Page::Login
    } else {
        requested
    }
}
