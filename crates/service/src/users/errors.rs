use thiserror::Error;

/// Business errors for the registration workflow. Display strings are the
/// exact payload messages clients receive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Unable to register user.")]
    MissingCredentials,
    #[error("User already exists!")]
    Conflict,
}

impl RegisterError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            RegisterError::MissingCredentials => 2001,
            RegisterError::Conflict => 2002,
        }
    }
}
