pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod storage;

pub use app::App;
pub use storage::UserStore;
