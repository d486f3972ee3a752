//! Persistent storage
//!
//! Key-value backends and the user store built on top of them.

pub mod filesystem;
pub mod kv;
pub mod operations;

pub use filesystem::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use operations::{DEFAULT_SESSION_KEY, DEFAULT_USERS_KEY, UserStore};
