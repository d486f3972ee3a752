//! Terminal front end
//!
//! The interactive loop standing in for the landing, login, signup and
//! profile pages.

pub mod shell;

pub use shell::App;
