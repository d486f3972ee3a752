//! Front end middleware
//!
//! Provides logging around submissions and navigation.

pub mod logging;
