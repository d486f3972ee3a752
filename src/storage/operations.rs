//! User store operations
//!
//! The user database lives under one key as a JSON blob and is read and
//! rewritten whole on every mutation. The session slot is a second key
//! holding the logged-in email.

use log::{debug, info, warn};

use crate::auth::{ProfileRecord, UserDatabase, UserRecord};
use crate::error::{AuthError, StorageError};
use crate::storage::kv::KeyValueStore;

pub const DEFAULT_USERS_KEY: &str = "usersDatabase";
pub const DEFAULT_SESSION_KEY: &str = "currentUser";

/// Repository of registered users over a key-value backend
#[derive(Debug)]
pub struct UserStore<S> {
    backend: S,
    users_key: String,
    session_key: String,
}

impl<S: KeyValueStore> UserStore<S> {
    pub fn new(backend: S, users_key: impl Into<String>, session_key: impl Into<String>) -> Self {
        Self {
            backend,
            users_key: users_key.into(),
            session_key: session_key.into(),
        }
    }

    pub fn with_default_keys(backend: S) -> Self {
        Self::new(backend, DEFAULT_USERS_KEY, DEFAULT_SESSION_KEY)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Loads the whole user mapping; `None` before the first signup.
    pub fn load_database(&self) -> Result<Option<UserDatabase>, StorageError> {
        let Some(text) = self.backend.get(&self.users_key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&text) {
            Ok(database) => Ok(Some(database)),
            Err(e) => {
                warn!("Malformed user database under {}: {}", self.users_key, e);
                Err(StorageError::Corrupt(self.users_key.clone()))
            }
        }
    }

    fn save_database(&mut self, database: &UserDatabase) -> Result<(), StorageError> {
        let text = serde_json::to_string(database)?;
        self.backend.put(&self.users_key, &text)?;
        debug!("Persisted user database ({} users)", database.len());
        Ok(())
    }

    pub fn exists(&self, email: &str) -> Result<bool, StorageError> {
        Ok(self
            .load_database()?
            .is_some_and(|database| database.contains_key(email)))
    }

    /// Inserts `record` under `email` unless that email is already taken.
    ///
    /// The check and the write are one read-modify-write of the whole
    /// database, so a rejected call leaves storage untouched.
    pub fn try_register(&mut self, email: &str, record: UserRecord) -> Result<(), AuthError> {
        let mut database = self.load_database()?.unwrap_or_default();

        if database.contains_key(email) {
            warn!("Signup rejected, email already registered: {}", email);
            return Err(AuthError::AlreadyExists(email.to_string()));
        }

        database.insert(email.to_string(), record);
        self.save_database(&database)?;
        info!("Registered new user: {}", email);
        Ok(())
    }

    /// Compares a login attempt against the stored credentials.
    pub fn verify(&self, email: &str, password: &str) -> Result<ProfileRecord, AuthError> {
        let database = match self.load_database()? {
            Some(database) if !database.is_empty() => database,
            _ => return Err(AuthError::NotFound),
        };

        match database.get(email) {
            Some(record) if record.credentials.password == password => {
                Ok(record.profile.clone())
            }
            _ => Err(AuthError::InvalidCredentials(email.to_string())),
        }
    }

    /// Profile for `email`, or `None` when unknown or unreadable.
    pub fn get_profile(&self, email: &str) -> Option<ProfileRecord> {
        match self.load_database() {
            Ok(database) => database?.remove(email).map(|record| record.profile),
            Err(e) => {
                warn!("Treating profile for {} as missing: {}", email, e);
                None
            }
        }
    }

    pub fn set_current_session(&mut self, email: &str) -> Result<(), StorageError> {
        self.backend.put(&self.session_key, email)?;
        info!("Session started for {}", email);
        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<String>, StorageError> {
        self.backend.get(&self.session_key)
    }

    pub fn clear_current_session(&mut self) -> Result<(), StorageError> {
        self.backend.remove(&self.session_key)?;
        info!("Session cleared");
        Ok(())
    }
}
