//! Authentication rules
//!
//! Holds the account data model and the validation rules applied to the
//! signup and login forms.

pub mod birthdate;
pub mod credentials;
pub mod password;
pub mod results;
pub mod validator;

pub use credentials::{Credentials, LoginForm, ProfileRecord, SignupForm, UserDatabase, UserRecord};
pub use password::PasswordChecklist;
pub use results::Field;
pub use validator::{
    ValidationPolicy, is_valid_email, validate_login, validate_signup, validate_signup_on,
};
