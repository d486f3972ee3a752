//! Front end protocol
//!
//! Parses prompt commands, runs form submissions, and shapes their results
//! into notifications and redirects.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{Command, SubmitResult, SubmitStatus, parse_command};
pub use handlers::{handle_login, handle_logout, handle_profile, handle_signup, resolve_route};
pub use responses::{Notification, Variant};
