//src/session.rs
// Session gate in front of the log. Nothing is verified against a credential store.
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Error: Please enter a username and a password (at least 4 characters).")]
    InvalidCredentials,
}

impl LoginError {
    /// Short text for the transient notification.
    #[must_use]
    pub const fn notification(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Enter username + 4+ char password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    /// Opens a session when the username is non-empty and the password has at least
    /// `MIN_PASSWORD_LEN` characters. Both are trimmed first.
    ///
    /// # Errors
    /// Returns `LoginError::InvalidCredentials` otherwise.
    pub fn login(username: &str, password: &str) -> Result<Self, LoginError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LoginError::InvalidCredentials);
        }
        Ok(Self {
            username: username.to_string(),
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn welcome_message(&self) -> String {
        format!("Login successful. Welcome, {}!", self.username)
    }
}
