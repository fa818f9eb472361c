use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A registered account. Passwords are held verbatim; credential
/// hardening is outside this service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// The only credential rule: both fields must be non-empty. Whitespace
/// counts as content, and no format or strength checks apply.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ModelError> {
    if username.is_empty() {
        return Err(ModelError::Validation("username required".into()));
    }
    if password.is_empty() {
        return Err(ModelError::Validation("password required".into()));
    }
    Ok(())
}
