//! Local Auth Desk - Entry Point
//!
//! A signup/login front end whose accounts live in a local key-value file.

use log::{error, info};
use std::io;
use std::process::ExitCode;

use local_auth_desk::App;
use local_auth_desk::config::AppConfig;
use local_auth_desk::error::AppError;
use local_auth_desk::storage::{FileStore, UserStore};

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching authentication front end...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Startup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let backend = FileStore::open(config.storage.data_file_path())?;
    info!("Account data file: {}", backend.path().display());

    let store = UserStore::new(
        backend,
        config.storage.users_key.as_str(),
        config.storage.session_key.as_str(),
    );
    let mut app = App::new(store, config.validation);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    app.run(&mut input, &mut output)?;
    Ok(())
}
