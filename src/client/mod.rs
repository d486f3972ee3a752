//! Client state
//!
//! Tracks the page being shown and gates pages behind the stored session.

pub mod session;
pub mod state;

pub use session::guard;
pub use state::{Client, Page};
